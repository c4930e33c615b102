use calc_core::Calculator;
use gpui::{
    ClickEvent, Context, Div, IntoElement, ParentElement, Render, SharedString, Styled, TextAlign,
    Window, div, px, rgb,
};
use gpui_component::{h_flex, v_flex};
use tracing::debug;

use crate::buttons::{KEYPAD, KeySpec};
use crate::components::make_key_button;

const FORTUNE_TEXT_COLOR: u32 = 0xb45309;

/// Display field plus keypad, driving one [`Calculator`].
pub struct CalculatorView {
    calculator: Calculator,
}

impl CalculatorView {
    pub fn new(calculator: Calculator) -> Self {
        Self { calculator }
    }

    fn press(
        &mut self,
        key: &KeySpec,
        cx: &mut Context<Self>,
    ) {
        let actions = key.actions();
        debug!(key = key.id, ?actions, "key pressed");
        for action in actions {
            self.calculator.apply(action);
        }
        cx.notify();
    }

    fn render_display(&self) -> Div {
        let text = SharedString::from(self.calculator.display_text().into_owned());

        let display = div()
            .w_full()
            .min_h(px(56.))
            .px_3()
            .py_2()
            .rounded_md()
            .border_1()
            .overflow_hidden()
            .text_align(TextAlign::Right);

        // Fortunes are long sentences; shrink and tint them.
        if self.calculator.is_fortune_display() {
            display
                .text_sm()
                .text_color(rgb(FORTUNE_TEXT_COLOR))
                .child(text)
        } else {
            display.text_2xl().child(text)
        }
    }
}

impl Render for CalculatorView {
    fn render(
        &mut self,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let keypad = v_flex().gap_2().children(KEYPAD.iter().map(|row| {
            h_flex().gap_2().children(row.iter().map(|key| {
                make_key_button(
                    key,
                    cx.listener(move |this, _: &ClickEvent, _window, cx| this.press(key, cx)),
                )
            }))
        }));

        v_flex()
            .gap_3()
            .p_4()
            .w(px(328.))
            .child(self.render_display())
            .child(keypad)
    }
}
