//! Marker patterns delimiting the managed region
//!
//! The region starts at a tab comment immediately followed (whitespace
//! allowed) by the tab's opening `<div>`, and ends at the next tab comment.
//! Marker text is fixed; only case and inter-marker whitespace vary.

use regex::Regex;
use std::sync::LazyLock;

/// Pattern to match the region start: comment plus opening tab element
pub static START_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<!--\s*TAB:\s*INSTRUCTIVO\s*-->\s*<div\s+id="instructivo"\s+class="tab-content[^"]*">"#,
    )
    .unwrap()
});

/// Pattern to match the region end comment
pub static END_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<!--\s*TAB:\s*FORMULARIO\s*-->").unwrap());
