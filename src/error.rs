use thiserror::Error;

/// Everything that can go wrong while mutating a [`Tree`][crate::Tree].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The element being inserted compares equal to one already in the tree. The tree is left
    /// exactly as it was before the insertion.
    #[error("element is already present in the tree")]
    DuplicateElement,
}

/// Shorthand for results produced by this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
