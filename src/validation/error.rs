use std::fmt;

/// Why raw array text was rejected.
///
/// Each variant names the rule that failed; [`hint`](Self::hint) tells the
/// user what to change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing but whitespace was entered.
    Empty,
    /// A character other than a digit, comma or whitespace.
    InvalidCharacter {
        /// The rejected character.
        found: char,
        /// Byte offset into the raw input.
        offset: usize,
    },
    /// Two commas with nothing between them, or a leading/trailing comma.
    EmptySegment {
        /// Zero-based segment number.
        segment: usize,
    },
    /// A segment that is not a single integer (e.g. `"1 2"`).
    InvalidNumber {
        /// Zero-based segment number.
        segment: usize,
        /// The trimmed segment text.
        token: String,
    },
    /// Fewer values than the configured minimum.
    TooFew {
        /// Values supplied.
        count: usize,
        /// Configured minimum.
        min: usize,
    },
    /// More values than the configured maximum.
    TooMany {
        /// Values supplied.
        count: usize,
        /// Configured maximum.
        max: usize,
    },
    /// Values outside the configured inclusive range.
    OutOfRange {
        /// Lowest accepted value.
        min: i64,
        /// Highest accepted value.
        max: i64,
        /// Offending tokens, in input order.
        offending: Vec<String>,
    },
}

impl ValidationError {
    /// Short machine-friendly tag for the failed rule.
    #[must_use]
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Empty => "empty input",
            Self::InvalidCharacter { .. } => "invalid character",
            Self::EmptySegment { .. } => "empty segment",
            Self::InvalidNumber { .. } => "invalid number",
            Self::TooFew { .. } => "too few elements",
            Self::TooMany { .. } => "too many elements",
            Self::OutOfRange { .. } => "value out of range",
        }
    }

    /// What the user should do to fix the input.
    #[must_use]
    pub fn hint(&self) -> String {
        match self {
            Self::Empty => "Please enter at least one number.".into(),
            Self::InvalidCharacter { .. }
            | Self::EmptySegment { .. }
            | Self::InvalidNumber { .. } => {
                "Please enter comma-separated integers only.".into()
            }
            Self::TooFew { min, .. } => {
                format!("Please enter at least {min} numbers.")
            }
            Self::TooMany { max, .. } => {
                format!("Maximum {max} elements allowed.")
            }
            Self::OutOfRange { min, max, .. } => {
                format!("Numbers must be between {min} and {max}.")
            }
        }
    }

    /// Offending tokens for range failures, empty otherwise.
    #[must_use]
    pub fn offending_values(&self) -> &[String] {
        match self {
            Self::OutOfRange { offending, .. } => offending,
            _ => &[],
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "{}", self.reason()),
            Self::InvalidCharacter { found, offset } => {
                write!(f, "invalid character {found:?} at offset {offset}")
            }
            Self::EmptySegment { segment } => {
                write!(f, "empty segment at position {segment}")
            }
            Self::InvalidNumber { segment, token } => {
                write!(f, "segment {segment} is not a number: {token:?}")
            }
            Self::TooFew { count, min } => {
                write!(f, "{count} elements given, at least {min} required")
            }
            Self::TooMany { count, max } => {
                write!(f, "{count} elements given, at most {max} allowed")
            }
            Self::OutOfRange {
                min,
                max,
                offending,
            } => write!(
                f,
                "values out of range {min}..={max}: {}",
                offending.join(", ")
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
