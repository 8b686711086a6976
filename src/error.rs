/// Represents errors that can occur when constructing a map
#[derive(Debug)]
pub enum Error {
    /// The requested bucket count was zero; a map needs at least one bucket
    InvalidCapacity(usize),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StripedMapError: {self:?}")
    }
}

impl std::error::Error for Error {}

/// Map result
pub type Result<T> = std::result::Result<T, Error>;
