//! Keypad layout and mapping of button presses to calculator actions.

use calc_core::{Action, Operator};

/// Marks a key whose meaning does not come from its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonTag {
    Surcharge,
    RoundOff,
    Fortune,
}

impl ButtonTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Surcharge => "tax",
            Self::RoundOff => "round",
            Self::Fortune => "fortune",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "tax" => Some(Self::Surcharge),
            "round" | "roundoff" => Some(Self::RoundOff),
            "fortune" => Some(Self::Fortune),
            _ => None,
        }
    }

    fn action(&self) -> Action {
        match self {
            Self::Surcharge => Action::Surcharge,
            Self::RoundOff => Action::RoundOff,
            Self::Fortune => Action::Fortune,
        }
    }
}

/// One key on the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeySpec {
    pub id: &'static str,
    pub label: &'static str,
    pub tag: Option<ButtonTag>,
}

impl KeySpec {
    const fn plain(
        id: &'static str,
        label: &'static str,
    ) -> Self {
        Self {
            id,
            label,
            tag: None,
        }
    }

    const fn tagged(
        id: &'static str,
        label: &'static str,
        tag: ButtonTag,
    ) -> Self {
        Self {
            id,
            label,
            tag: Some(tag),
        }
    }

    /// Actions produced by pressing this key.
    pub fn actions(&self) -> Vec<Action> {
        classify(self.label, self.tag)
    }
}

/// Keypad rows, top to bottom.
pub static KEYPAD: [[KeySpec; 4]; 5] = [
    [
        KeySpec::tagged("key-tax", "税込", ButtonTag::Surcharge),
        KeySpec::tagged("key-round", "四捨五入", ButtonTag::RoundOff),
        KeySpec::tagged("key-fortune", "占い", ButtonTag::Fortune),
        KeySpec::plain("key-clear", "C"),
    ],
    [
        KeySpec::plain("key-7", "7"),
        KeySpec::plain("key-8", "8"),
        KeySpec::plain("key-9", "9"),
        KeySpec::plain("key-divide", "/"),
    ],
    [
        KeySpec::plain("key-4", "4"),
        KeySpec::plain("key-5", "5"),
        KeySpec::plain("key-6", "6"),
        KeySpec::plain("key-multiply", "*"),
    ],
    [
        KeySpec::plain("key-1", "1"),
        KeySpec::plain("key-2", "2"),
        KeySpec::plain("key-3", "3"),
        KeySpec::plain("key-subtract", "-"),
    ],
    [
        KeySpec::plain("key-0", "0"),
        KeySpec::plain("key-point", "."),
        KeySpec::plain("key-equals", "="),
        KeySpec::plain("key-add", "+"),
    ],
];

/// Maps a key label (and optional tag) to calculator actions.
///
/// A tag decides the action regardless of the label. Otherwise `C` clears,
/// `=` resolves and the four operator symbols select an operator; any other
/// label is typed one character at a time.
pub fn classify(
    label: &str,
    tag: Option<ButtonTag>,
) -> Vec<Action> {
    if let Some(tag) = tag {
        return vec![tag.action()];
    }
    match label {
        "C" => vec![Action::Clear],
        "=" => vec![Action::Equals],
        _ => match Operator::parse(label) {
            Some(op) => vec![Action::Operator(op)],
            None => label.chars().map(Action::Digit).collect(),
        },
    }
}

/// Finds the keypad key a headless token refers to.
///
/// Tokens match a key label, the part of a key id after `key-`, or a tag
/// name such as `tax`.
pub fn key_for_token(token: &str) -> Option<&'static KeySpec> {
    let tag = ButtonTag::parse(token);
    KEYPAD.iter().flatten().find(|key| {
        key.label == token
            || key.id.strip_prefix("key-") == Some(token)
            || (tag.is_some() && key.tag == tag)
    })
}

/// Actions for a headless token; unknown tokens are typed verbatim.
pub fn actions_for_token(token: &str) -> Vec<Action> {
    match key_for_token(token) {
        Some(key) => key.actions(),
        None => classify(token, None),
    }
}
