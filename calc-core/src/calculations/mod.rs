//! Number handling for the calculator.
//!
//! Operand text is parsed leniently, combined in `f64`, and projected back to
//! text only at the boundary. Everything that rounds goes through
//! [`common::round_half_away_from_zero`].

pub mod common;
pub mod number;
pub mod outcome;
pub mod transforms;

pub use number::{ParseOperandError, format_number, parse_operand};
pub use outcome::{ERROR_MARKER, Outcome};
pub use transforms::{round_to_integer, surcharge};
