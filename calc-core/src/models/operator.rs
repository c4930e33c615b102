use std::fmt;

use crate::calculations::Outcome;

/// One of the four arithmetic keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The symbol printed on the key and in the pending display.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Combines two operands.
    ///
    /// Division by a divisor equal to zero (either sign) is reported as
    /// [`Outcome::DivisionByZero`] instead of producing an infinity.
    pub fn apply(
        &self,
        lhs: f64,
        rhs: f64,
    ) -> Outcome {
        match self {
            Self::Add => Outcome::Value(lhs + rhs),
            Self::Subtract => Outcome::Value(lhs - rhs),
            Self::Multiply => Outcome::Value(lhs * rhs),
            Self::Divide if rhs == 0.0 => Outcome::DivisionByZero,
            Self::Divide => Outcome::Value(lhs / rhs),
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' => Ok(Self::Multiply),
            '/' => Ok(Self::Divide),
            other => Err(other),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_round_trips_every_symbol() {
        for op in Operator::ALL {
            assert_eq!(Operator::parse(op.symbol()), Some(op));
        }
    }

    #[test]
    fn parse_rejects_unknown_symbols() {
        assert_eq!(Operator::parse("x"), None);
        assert_eq!(Operator::parse("÷"), None);
        assert_eq!(Operator::parse(""), None);
    }

    #[test]
    fn try_from_char_returns_rejected_char() {
        assert_eq!(Operator::try_from('*'), Ok(Operator::Multiply));
        assert_eq!(Operator::try_from('%'), Err('%'));
    }

    #[test]
    fn divide_by_zero_is_not_a_value() {
        assert_eq!(Operator::Divide.apply(1.0, 0.0), Outcome::DivisionByZero);
        assert_eq!(Operator::Divide.apply(1.0, -0.0), Outcome::DivisionByZero);
    }

    #[test]
    fn divide_by_nonzero_matches_float_division() {
        assert_eq!(Operator::Divide.apply(1.0, 3.0), Outcome::Value(1.0 / 3.0));
    }

    #[test]
    fn display_uses_symbol() {
        assert_eq!(Operator::Subtract.to_string(), "-");
    }
}
