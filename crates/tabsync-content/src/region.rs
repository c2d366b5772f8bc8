//! Region type and location

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::ops::Range;

use crate::error::{Error, Result};
use crate::marker;

/// A marker-delimited region located in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Region text, inclusive of the start marker, exclusive of the end marker
    pub text: String,
    /// Byte range in the source document
    pub span: Range<usize>,
    checksum: String,
}

impl Region {
    /// Locate the region in `source`.
    ///
    /// The end marker is searched strictly after the start marker's match,
    /// so end-marker occurrences before the start are ignored.
    pub fn locate(source: &str) -> Result<Self> {
        let start = marker::START_PATTERN
            .find(source)
            .ok_or(Error::MissingStartMarker)?;
        let end = marker::END_PATTERN
            .find(&source[start.end()..])
            .ok_or(Error::MissingEndMarker)?;

        let span = start.start()..start.end() + end.start();
        let text = source[span.clone()].to_string();
        let checksum = Self::compute_checksum(&text);

        Ok(Self {
            text,
            span,
            checksum,
        })
    }

    /// Get the checksum of the region text
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    fn compute_checksum(text: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(text.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
