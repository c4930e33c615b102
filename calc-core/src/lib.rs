pub mod calculations;
pub mod calculator;
pub mod fortune;
pub mod models;

pub use calculations::{ERROR_MARKER, Outcome};
pub use calculator::Calculator;
pub use fortune::{FORTUNE_PREFIX, FORTUNES, FortuneSource, SeededFortune};
pub use models::*;
