mod action;
mod config;
mod operator;

pub use action::Action;
pub use config::{CalculatorConfig, CalculatorConfigError};
pub use operator::Operator;
