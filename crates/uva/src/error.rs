//! Library-level error type.

use crate::scan::ScanError;

/// Everything a puzzle solver can fail with. All variants are fatal: judge
/// input that does not match its declared shape is a precondition violation,
/// not a state to recover from.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
