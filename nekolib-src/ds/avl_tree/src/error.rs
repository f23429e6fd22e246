use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum Error {
    /// The key is not stored in the tree.
    #[error("key not found")]
    NotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
