pub mod calculator_view;
pub mod window;

use calc_core::Action;
use gpui::{App, ClickEvent, Pixels, Size, Styled, Window, px};
use gpui_component::Sizable;
use gpui_component::button::{Button, ButtonVariants};

pub use calculator_view::CalculatorView;
pub use window::AppWindow;

use crate::buttons::KeySpec;
use crate::config::WindowSettings;

#[derive(Debug, Clone, Copy)]
pub struct WindowPreferences {
    pub size: Size<Pixels>,
}

impl Default for WindowPreferences {
    fn default() -> Self {
        Self::from(&WindowSettings::default())
    }
}

impl WindowPreferences {
    pub fn new(
        width: impl Into<Pixels>,
        height: impl Into<Pixels>,
    ) -> Self {
        Self {
            size: Size {
                width: width.into(),
                height: height.into(),
            },
        }
    }
}

impl From<&WindowSettings> for WindowPreferences {
    fn from(settings: &WindowSettings) -> Self {
        Self::new(px(settings.width), px(settings.height))
    }
}

/// Creates a keypad button styled by what the key does.
///
/// Operators and `=` use the primary variant, `C` the danger variant.
pub fn make_key_button(
    key: &KeySpec,
    on_click: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
) -> Button {
    let button = Button::new(key.id)
        .large()
        .w(px(72.))
        .label(key.label)
        .on_click(on_click);

    match key.actions().first() {
        Some(Action::Operator(_) | Action::Equals) => button.primary(),
        Some(Action::Clear) => button.danger(),
        _ => button,
    }
}
