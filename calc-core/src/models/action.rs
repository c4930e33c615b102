use super::Operator;

/// A single classified button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A digit or decimal point, appended without interpretation.
    Digit(char),
    Operator(Operator),
    Equals,
    Clear,
    /// Multiply the current entry by the surcharge rate.
    Surcharge,
    /// Round the current entry to the nearest integer.
    RoundOff,
    /// Replace the current entry with a random fortune message.
    Fortune,
}

impl From<Operator> for Action {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}
