//! Wiring shared by the window and the headless `--press` mode.

use std::fmt;

use calc_core::{Calculator, CalculatorConfigError, FortuneSource, SeededFortune};
use tracing::debug;

use crate::buttons::actions_for_token;
use crate::config::Settings;

/// Builds a calculator from validated settings.
///
/// A configured fortune seed makes the fortune key deterministic.
pub fn build_calculator(settings: &Settings) -> Result<Calculator, CalculatorConfigError> {
    let config = settings.calculator_config()?;
    let fortune = match settings.fortune_seed {
        Some(seed) => SeededFortune::from_seed(seed),
        None => SeededFortune::from_os_rng(),
    };
    Ok(Calculator::with_source(config, fortune))
}

/// What the display showed after one headless key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub token: String,
    pub text: String,
    pub is_fortune: bool,
}

impl fmt::Display for DisplayLine {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{:>8} | {}", self.token, self.text)?;
        if self.is_fortune {
            write!(f, "  [fortune]")?;
        }
        Ok(())
    }
}

/// Presses each token's key in turn and records the display after each.
pub fn run_presses<F, S>(
    calculator: &mut Calculator<F>,
    tokens: &[S],
) -> Vec<DisplayLine>
where
    F: FortuneSource,
    S: AsRef<str>,
{
    tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            let actions = actions_for_token(token);
            debug!(token, ?actions, "headless press");
            for action in actions {
                calculator.apply(action);
            }
            DisplayLine {
                token: token.to_string(),
                text: calculator.display_text().into_owned(),
                is_fortune: calculator.is_fortune_display(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use calc_core::{CalculatorConfig, FORTUNES};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    struct FixedIndex(usize);

    impl FortuneSource for FixedIndex {
        fn pick(
            &mut self,
            _count: usize,
        ) -> usize {
            self.0
        }
    }

    fn texts(lines: &[DisplayLine]) -> Vec<&str> {
        lines.iter().map(|line| line.text.as_str()).collect()
    }

    #[test]
    fn run_presses_records_display_after_each_token() {
        let mut calc = Calculator::with_source(CalculatorConfig::default(), FixedIndex(0));
        let lines = run_presses(&mut calc, &["5", "+", "3", "*", "2", "="]);

        assert_eq!(texts(&lines), vec!["5", "5 +", "3", "8 *", "2", "16"]);
    }

    #[test]
    fn run_presses_understands_tag_names() {
        let mut calc = Calculator::with_source(CalculatorConfig::default(), FixedIndex(2));
        let lines = run_presses(&mut calc, &["100", "tax", "round", "fortune", "C"]);

        assert_eq!(
            texts(&lines),
            vec!["100", "110.00", "110", FORTUNES[2], ""]
        );
        assert!(lines[3].is_fortune);
        assert!(!lines[4].is_fortune);
    }

    #[test]
    fn build_calculator_applies_settings() {
        let settings = Settings {
            surcharge_rate: dec!(1.08),
            fortune_seed: Some(1),
            ..Settings::default()
        };
        let mut calc = build_calculator(&settings).unwrap();
        let lines = run_presses(&mut calc, &["50", "tax"]);

        assert_eq!(lines[1].text, "54.00");
    }

    #[test]
    fn build_calculator_rejects_invalid_rate() {
        let settings = Settings {
            surcharge_rate: dec!(-1),
            ..Settings::default()
        };

        assert!(build_calculator(&settings).is_err());
    }

    #[test]
    fn seeded_calculators_draw_the_same_fortunes() {
        let settings = Settings {
            fortune_seed: Some(77),
            ..Settings::default()
        };
        let tokens = ["fortune", "fortune", "fortune"];

        let first = run_presses(&mut build_calculator(&settings).unwrap(), &tokens);
        let second = run_presses(&mut build_calculator(&settings).unwrap(), &tokens);

        assert_eq!(first, second);
    }

    #[test]
    fn display_line_marks_fortunes() {
        let line = DisplayLine {
            token: "fortune".to_string(),
            text: FORTUNES[0].to_string(),
            is_fortune: true,
        };

        assert!(line.to_string().ends_with("[fortune]"));
    }
}
