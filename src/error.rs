/// An error that can occur while building or querying the structures in this
/// crate.
#[derive(Debug)]
pub enum Error {
    /// An index, position, or length argument violated a documented bound.
    OutOfRange(String),
    /// A push or insert would have grown a bounded structure past its hard
    /// capacity.
    CapacityExceeded(String),
    /// An invariant that the algorithm relies on was violated at runtime,
    /// e.g. a wavelet tree or C-array answered an impossible query.
    Inconsistent(String),
    /// The underlying byte-stream reader failed.
    Io(String),
    /// The input text or BWT violated a precondition, such as a missing or
    /// duplicated end-marker.
    BadInput(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::OutOfRange(msg) => write!(f, "out of range: {}", msg),
            Error::CapacityExceeded(msg) => write!(f, "capacity exceeded: {}", msg),
            Error::Inconsistent(msg) => write!(f, "inconsistent state: {}", msg),
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
            Error::BadInput(msg) => write!(f, "bad input: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

/// Shorthand result type used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;
