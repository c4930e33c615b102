use gpui::{App, Context, Entity, IntoElement, ParentElement, Render, Styled, Subscription, Window, div};
use gpui_component::StyledExt;
use tracing::info;

use crate::components::CalculatorView;
use crate::{Quit, quit};

/// Root content of the calculator window.
pub struct AppWindow {
    _window_close_subscription: Subscription,
    calculator: Entity<CalculatorView>,
}

impl AppWindow {
    pub fn new(
        calculator: Entity<CalculatorView>,
        cx: &mut Context<Self>,
    ) -> Self {
        // Closing the only window ends the application.
        let subscription = cx.on_window_closed(|cx: &mut App| {
            info!("calculator window closed");
            quit(&Quit, cx);
        });

        Self {
            _window_close_subscription: subscription,
            calculator,
        }
    }
}

impl Render for AppWindow {
    fn render(
        &mut self,
        _: &mut Window,
        _cx: &mut Context<Self>,
    ) -> impl IntoElement {
        div()
            .v_flex()
            .size_full()
            .items_center()
            .justify_center()
            .child(self.calculator.clone())
    }
}
