use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty { field: &'static str },
    InvalidEndpoint { input: String, reason: String },
    BatchLimitExceeded { max: usize, actual: usize },
    HttpClient { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidEndpoint { input, reason } => {
                write!(f, "invalid endpoint URL {input:?}: {reason}")
            }
            Self::BatchLimitExceeded { max, actual } => {
                write!(f, "too many identifiers: {actual} (max {max})")
            }
            Self::HttpClient { reason } => {
                write!(f, "invalid HTTP client configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
