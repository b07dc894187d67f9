use thiserror::Error;

/// Errors raised while interpreting site data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("Unknown destination type: {0} (expected 'domestic' or 'international')")]
    UnknownDestinationType(String),
}
