//! Splicing the reference region over the target region

use serde::Serialize;

use crate::error::Result;
use crate::region::Region;

/// Result of splicing a reference region into a target document
#[derive(Debug, Clone, Serialize)]
pub struct Splice {
    /// The full patched document text
    pub patched: String,
    /// Region located in the target document
    pub target_region: Region,
    /// Region located in the reference document
    pub reference_region: Region,
}

impl Splice {
    /// True when the target region already matches the reference region
    pub fn in_sync(&self) -> bool {
        self.target_region.checksum() == self.reference_region.checksum()
    }
}

/// Replace the target's region with the reference's.
///
/// The reference region carries its own start marker, so the target's start
/// marker is replaced along with the interior. Everything outside the
/// target's region span is preserved verbatim.
pub fn splice(target: &str, reference: &str) -> Result<Splice> {
    let target_region = Region::locate(target)?;
    let reference_region = Region::locate(reference)?;

    let mut patched = String::with_capacity(
        target.len() - target_region.text.len() + reference_region.text.len(),
    );
    patched.push_str(&target[..target_region.span.start]);
    patched.push_str(&reference_region.text);
    patched.push_str(&target[target_region.span.end..]);

    Ok(Splice {
        patched,
        target_region,
        reference_region,
    })
}
