use super::number::format_number;

/// Text shown in place of a result when dividing by zero.
pub const ERROR_MARKER: &str = "Error";

/// Result of combining two operands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Value(f64),
    DivisionByZero,
}

impl Outcome {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }

    /// Projects the outcome to display text.
    ///
    /// The error marker is ordinary text from here on: further digits are
    /// appended to it like to any other entry.
    pub fn into_text(self) -> String {
        match self {
            Self::Value(value) => format_number(value),
            Self::DivisionByZero => ERROR_MARKER.to_string(),
        }
    }
}
