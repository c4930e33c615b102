//! The calculator state machine.
//!
//! A [`Calculator`] holds the entry being typed and, once an operator key
//! has been pressed, the pending left operand together with its operator.
//! Operators are evaluated strictly left to right as they are chained:
//! `5 + 3 * 2 =` shows `16`.
//!
//! # Example
//!
//! ```
//! use calc_core::{Action, Calculator, Operator};
//!
//! let mut calculator = Calculator::new();
//! for action in [
//!     Action::Digit('5'),
//!     Action::Operator(Operator::Add),
//!     Action::Digit('3'),
//!     Action::Operator(Operator::Multiply),
//! ] {
//!     calculator.apply(action);
//! }
//! assert_eq!(calculator.display_text(), "8 *");
//!
//! calculator.apply(Action::Digit('2'));
//! calculator.apply(Action::Equals);
//! assert_eq!(calculator.display_text(), "16");
//! ```

use std::borrow::Cow;
use std::fmt;

use tracing::{debug, trace, warn};

use crate::calculations::{parse_operand, round_to_integer, surcharge};
use crate::fortune::{self, FORTUNE_PREFIX, FortuneSource, SeededFortune};
use crate::models::{Action, CalculatorConfig, Operator};

/// Left operand and operator waiting for the right operand.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    operand: String,
    operator: Operator,
}

/// Button-driven calculator with a single display line.
pub struct Calculator<F = SeededFortune> {
    entry: String,
    pending: Option<Pending>,
    config: CalculatorConfig,
    fortune: F,
}

impl Calculator {
    /// Cleared calculator with the default surcharge and an OS-seeded
    /// fortune source.
    pub fn new() -> Self {
        Self::with_source(CalculatorConfig::default(), SeededFortune::from_os_rng())
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FortuneSource> Calculator<F> {
    /// Cleared calculator using `config` and drawing fortunes from `fortune`.
    pub fn with_source(
        config: CalculatorConfig,
        fortune: F,
    ) -> Self {
        Self {
            entry: String::new(),
            pending: None,
            config,
            fortune,
        }
    }

    /// Dispatches one classified button press.
    pub fn apply(
        &mut self,
        action: Action,
    ) {
        trace!(?action, "applying action");
        match action {
            Action::Digit(ch) => self.enter(ch),
            Action::Operator(op) => self.select_operator(op),
            Action::Equals => self.resolve(),
            Action::Clear => self.clear(),
            Action::Surcharge => self.apply_surcharge(),
            Action::RoundOff => self.round_to_integer(),
            Action::Fortune => self.draw_fortune(),
        }
    }

    /// Appends `ch` to the entry without checking that it stays numeric.
    pub fn enter(
        &mut self,
        ch: char,
    ) {
        self.entry.push(ch);
    }

    /// Chooses the operator for the next calculation.
    ///
    /// With an entry present, any pending calculation is resolved first and
    /// the entry becomes the new left operand. Without an entry, a pending
    /// operator is replaced. With neither, nothing happens.
    pub fn select_operator(
        &mut self,
        op: Operator,
    ) {
        if !self.entry.is_empty() {
            if self.pending.is_some() {
                self.resolve();
            }
            self.pending = Some(Pending {
                operand: std::mem::take(&mut self.entry),
                operator: op,
            });
        } else if let Some(pending) = self.pending.as_mut() {
            debug!(from = %pending.operator, to = %op, "replacing pending operator");
            pending.operator = op;
        } else {
            trace!(%op, "operator ignored: nothing entered");
        }
    }

    /// Combines the pending operand, its operator and the entry.
    ///
    /// Does nothing unless all three are present. Operand text that does not
    /// start with a number takes part as NaN.
    pub fn resolve(&mut self) {
        if self.entry.is_empty() {
            trace!("resolve skipped: no right operand");
            return;
        }
        let Some(pending) = self.pending.take() else {
            trace!("resolve skipped: no pending operator");
            return;
        };

        let lhs = parse_operand(&pending.operand).unwrap_or(f64::NAN);
        let rhs = parse_operand(&self.entry).unwrap_or(f64::NAN);
        let outcome = pending.operator.apply(lhs, rhs);

        if outcome.is_error() {
            warn!(lhs = %pending.operand, rhs = %self.entry, "division by zero");
        } else {
            debug!(
                lhs = %pending.operand,
                op = %pending.operator,
                rhs = %self.entry,
                ?outcome,
                "resolved"
            );
        }

        self.entry = outcome.into_text();
    }

    /// Forgets the entry and any pending calculation.
    pub fn clear(&mut self) {
        self.entry.clear();
        self.pending = None;
    }

    /// Applies the configured surcharge to the entry, keeping two decimals.
    pub fn apply_surcharge(&mut self) {
        if self.entry.is_empty() {
            return;
        }
        match surcharge(&self.entry, self.config.surcharge_rate) {
            Some(text) => {
                debug!(input = %self.entry, output = %text, "surcharge applied");
                self.entry = text;
            }
            None => debug!(input = %self.entry, "surcharge ignored: entry is not numeric"),
        }
    }

    /// Rounds the entry to the nearest integer, ties away from zero.
    pub fn round_to_integer(&mut self) {
        if self.entry.is_empty() {
            return;
        }
        match round_to_integer(&self.entry) {
            Some(text) => {
                debug!(input = %self.entry, output = %text, "entry rounded");
                self.entry = text;
            }
            None => debug!(input = %self.entry, "round ignored: entry is not numeric"),
        }
    }

    /// Replaces the entry with a randomly drawn fortune.
    pub fn draw_fortune(&mut self) {
        let message = fortune::draw(&mut self.fortune);
        debug!(fortune = message, "fortune drawn");
        self.entry = message.to_string();
    }

    /// Text for the display field.
    ///
    /// The entry when there is one, otherwise the pending operand followed by
    /// a space and the operator, otherwise empty.
    pub fn display_text(&self) -> Cow<'_, str> {
        if !self.entry.is_empty() {
            return Cow::Borrowed(&self.entry);
        }
        match &self.pending {
            Some(pending) => Cow::Owned(format!("{} {}", pending.operand, pending.operator)),
            None => Cow::Borrowed(""),
        }
    }

    /// Whether the display currently shows a fortune message.
    pub fn is_fortune_display(&self) -> bool {
        self.display_text().starts_with(FORTUNE_PREFIX)
    }
}

impl<F> fmt::Debug for Calculator<F> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("entry", &self.entry)
            .field("pending", &self.pending)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::ERROR_MARKER;
    use crate::fortune::FORTUNES;

    struct FixedIndex(usize);

    impl FortuneSource for FixedIndex {
        fn pick(
            &mut self,
            _count: usize,
        ) -> usize {
            self.0
        }
    }

    fn calculator() -> Calculator<FixedIndex> {
        Calculator::with_source(CalculatorConfig::default(), FixedIndex(0))
    }

    fn type_text(
        calc: &mut Calculator<FixedIndex>,
        text: &str,
    ) {
        for ch in text.chars() {
            calc.enter(ch);
        }
    }

    // =========================================================================
    // enter tests
    // =========================================================================

    #[test]
    fn enter_appends_characters() {
        let mut calc = calculator();
        type_text(&mut calc, "12.5");

        assert_eq!(calc.display_text(), "12.5");
    }

    #[test]
    fn enter_tolerates_malformed_numbers() {
        let mut calc = calculator();
        type_text(&mut calc, "1.2.3");

        assert_eq!(calc.display_text(), "1.2.3");
    }

    // =========================================================================
    // select_operator tests
    // =========================================================================

    #[test]
    fn select_operator_moves_entry_to_pending() {
        let mut calc = calculator();
        type_text(&mut calc, "5");
        calc.select_operator(Operator::Add);

        assert_eq!(calc.display_text(), "5 +");
    }

    #[test]
    fn select_operator_without_input_is_noop() {
        let mut calc = calculator();
        calc.select_operator(Operator::Divide);

        assert_eq!(calc.display_text(), "");
        assert!(calc.pending.is_none());
    }

    #[test]
    fn select_operator_twice_replaces_operator_only() {
        let mut calc = calculator();
        type_text(&mut calc, "5");
        calc.select_operator(Operator::Add);
        calc.select_operator(Operator::Multiply);

        assert_eq!(calc.display_text(), "5 *");
    }

    #[test]
    fn select_operator_resolves_pending_first() {
        let mut calc = calculator();
        type_text(&mut calc, "5");
        calc.select_operator(Operator::Add);
        type_text(&mut calc, "3");
        calc.select_operator(Operator::Subtract);

        assert_eq!(calc.display_text(), "8 -");
    }

    // =========================================================================
    // resolve tests
    // =========================================================================

    #[test]
    fn resolve_without_pending_is_noop() {
        let mut calc = calculator();
        type_text(&mut calc, "7");
        calc.resolve();

        assert_eq!(calc.display_text(), "7");
    }

    #[test]
    fn resolve_without_right_operand_is_noop() {
        let mut calc = calculator();
        type_text(&mut calc, "7");
        calc.select_operator(Operator::Add);
        calc.resolve();

        assert_eq!(calc.display_text(), "7 +");
    }

    #[test]
    fn resolve_chains_left_to_right() {
        let mut calc = calculator();
        type_text(&mut calc, "5");
        calc.select_operator(Operator::Add);
        type_text(&mut calc, "3");
        calc.select_operator(Operator::Multiply);
        type_text(&mut calc, "2");
        calc.resolve();

        assert_eq!(calc.display_text(), "16");
    }

    #[test]
    fn resolve_divide_by_zero_shows_marker() {
        let mut calc = calculator();
        type_text(&mut calc, "8");
        calc.select_operator(Operator::Divide);
        type_text(&mut calc, "0.0");
        calc.resolve();

        assert_eq!(calc.display_text(), ERROR_MARKER);
        assert!(calc.pending.is_none());
    }

    #[test]
    fn digits_after_error_append_to_marker() {
        let mut calc = calculator();
        type_text(&mut calc, "8");
        calc.select_operator(Operator::Divide);
        type_text(&mut calc, "0");
        calc.resolve();
        calc.enter('1');

        assert_eq!(calc.display_text(), "Error1");
    }

    #[test]
    fn non_numeric_operand_resolves_to_nan() {
        let mut calc = calculator();
        type_text(&mut calc, "8");
        calc.select_operator(Operator::Divide);
        type_text(&mut calc, "0");
        calc.resolve();
        calc.select_operator(Operator::Add);
        type_text(&mut calc, "1");
        calc.resolve();

        assert_eq!(calc.display_text(), "NaN");
    }

    // =========================================================================
    // clear tests
    // =========================================================================

    #[test]
    fn clear_resets_everything() {
        let mut calc = calculator();
        type_text(&mut calc, "5");
        calc.select_operator(Operator::Add);
        type_text(&mut calc, "9");
        calc.clear();

        assert_eq!(calc.display_text(), "");
        assert!(calc.pending.is_none());
    }

    // =========================================================================
    // surcharge / round tests
    // =========================================================================

    #[test]
    fn surcharge_keeps_pending_operation() {
        let mut calc = calculator();
        type_text(&mut calc, "2");
        calc.select_operator(Operator::Add);
        type_text(&mut calc, "100");
        calc.apply_surcharge();

        assert_eq!(calc.display_text(), "110.00");

        calc.resolve();
        assert_eq!(calc.display_text(), "112");
    }

    #[test]
    fn surcharge_on_empty_entry_is_noop() {
        let mut calc = calculator();
        type_text(&mut calc, "5");
        calc.select_operator(Operator::Add);
        calc.apply_surcharge();

        assert_eq!(calc.display_text(), "5 +");
    }

    #[test]
    fn surcharge_uses_configured_rate() {
        let config = CalculatorConfig {
            surcharge_rate: dec!(1.08),
        };
        let mut calc = Calculator::with_source(config, FixedIndex(0));
        for ch in "1000".chars() {
            calc.enter(ch);
        }
        calc.apply_surcharge();

        assert_eq!(calc.display_text(), "1080.00");
    }

    #[test]
    fn round_on_error_marker_is_noop() {
        let mut calc = calculator();
        type_text(&mut calc, "1");
        calc.select_operator(Operator::Divide);
        type_text(&mut calc, "0");
        calc.resolve();
        calc.round_to_integer();

        assert_eq!(calc.display_text(), ERROR_MARKER);
    }

    // =========================================================================
    // fortune tests
    // =========================================================================

    #[test]
    fn fortune_replaces_entry_and_flags_display() {
        let mut calc = Calculator::with_source(CalculatorConfig::default(), FixedIndex(5));
        calc.enter('9');
        calc.draw_fortune();

        assert_eq!(calc.display_text(), FORTUNES[5]);
        assert!(calc.is_fortune_display());
    }

    #[test]
    fn fortune_works_on_empty_calculator() {
        let mut calc = calculator();
        calc.draw_fortune();

        assert_eq!(calc.display_text(), FORTUNES[0]);
    }

    #[test]
    fn numbers_are_not_fortunes() {
        let mut calc = calculator();
        type_text(&mut calc, "42");

        assert!(!calc.is_fortune_display());
    }

    // =========================================================================
    // apply tests
    // =========================================================================

    #[test]
    fn apply_dispatches_every_action() {
        let mut calc = calculator();
        for action in [
            Action::Digit('2'),
            Action::Digit('.'),
            Action::Digit('5'),
            Action::RoundOff,
            Action::Operator(Operator::Multiply),
            Action::Digit('4'),
            Action::Equals,
            Action::Surcharge,
        ] {
            calc.apply(action);
        }
        assert_eq!(calc.display_text(), "13.20");

        calc.apply(Action::Fortune);
        assert!(calc.is_fortune_display());

        calc.apply(Action::Clear);
        assert_eq!(calc.display_text(), "");
    }

    #[test]
    fn debug_output_omits_fortune_source() {
        let calc = calculator();

        assert!(format!("{calc:?}").starts_with("Calculator {"));
    }
}
