use std::fmt;

/// Text shown in the result label after a calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultMessage {
    /// Signed calendar day count, positive when the end date is later
    Days(i64),
    InvalidFormat,
}

impl fmt::Display for ResultMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Days(n) => write!(f, "Days between dates: {}", n),
            Self::InvalidFormat => f.write_str("Invalid date format. Use YYYY-MM-DD"),
        }
    }
}
