//! Errors surfaced by the core. The derivation path itself is total.

/// Configuration error: the only failure a caller can observe.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown regulatory domain: {0}")]
    UnknownDomain(String),
}
