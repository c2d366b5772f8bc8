//! Post-splice validation of required phrases
//!
//! The patch originally shipped as two near-identical routines differing
//! only in how strict the post-patch check was. A profile is an ordered set
//! of required phrases, each with its own case handling, so both variants
//! are presets of the same routine.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A phrase that must appear in the patched document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    text: String,
    case_insensitive: bool,
}

impl Phrase {
    /// Require `text` as a case-sensitive substring
    pub fn exact(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            case_insensitive: false,
        }
    }

    /// Require `text` as a case-insensitive substring
    pub fn any_case(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            case_insensitive: true,
        }
    }

    /// Get the phrase text
    pub fn text(&self) -> &str {
        &self.text
    }

    fn is_contained_in(&self, document: &str) -> bool {
        if self.case_insensitive {
            document
                .to_lowercase()
                .contains(&self.text.to_lowercase())
        } else {
            document.contains(&self.text)
        }
    }
}

/// An ordered set of phrases required in the patched document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationProfile {
    phrases: Vec<Phrase>,
}

impl ValidationProfile {
    /// Build a profile from an explicit phrase list
    pub fn new(phrases: Vec<Phrase>) -> Self {
        Self { phrases }
    }

    /// The instructivo heading plus the example keyword in any case
    pub fn strict() -> Self {
        Self::new(vec![
            Phrase::exact("\u{1F4D6} INSTRUCTIVO PARA EL LLENADO DEL FORMATO"),
            Phrase::any_case("ejemplo"),
        ])
    }

    /// Only the tab keyword
    pub fn lenient() -> Self {
        Self::new(vec![Phrase::exact("INSTRUCTIVO")])
    }

    /// Check every phrase against the patched document.
    ///
    /// Fails on the first missing phrase; nothing may be persisted when this
    /// returns an error.
    pub fn check(&self, document: &str) -> Result<()> {
        for phrase in &self.phrases {
            if !phrase.is_contained_in(document) {
                return Err(Error::ValidationFailed {
                    phrase: phrase.text.clone(),
                });
            }
        }
        Ok(())
    }
}
