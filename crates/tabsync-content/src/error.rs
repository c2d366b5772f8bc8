//! Error types for tabsync-content

/// Result type for tabsync-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while locating, splicing, or validating a region.
///
/// All three are fatal to a run; diagnostics are user-facing and in Spanish,
/// matching the tool's audience.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "No encontré el inicio del bloque: <!-- TAB: INSTRUCTIVO --> + <div id=\"instructivo\" ...>"
    )]
    MissingStartMarker,

    #[error("No encontré el fin del bloque: <!-- TAB: FORMULARIO -->")]
    MissingEndMarker,

    #[error("Algo no cuadró: no detecté \"{phrase}\" en el documento resultante")]
    ValidationFailed { phrase: String },
}
