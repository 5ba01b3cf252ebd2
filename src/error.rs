use std::fmt;

#[derive(Debug, PartialEq, Eq)]
pub enum FormatError {
    MissingSeparator,
    TooManySeparators,
    InvalidBase64 {
        part: &'static str,
        reason: String,
    },
    InvalidLength {
        part: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::MissingSeparator => write!(f, "encoded hash has no '.' separator"),
            FormatError::TooManySeparators => {
                write!(f, "encoded hash has more than one '.' separator")
            }
            FormatError::InvalidBase64 { part, reason } => {
                write!(f, "{part} is not valid base64: {reason}")
            }
            FormatError::InvalidLength {
                part,
                expected,
                actual,
            } => write!(f, "{part} must be {expected} bytes, got {actual}"),
        }
    }
}

impl std::error::Error for FormatError {}
