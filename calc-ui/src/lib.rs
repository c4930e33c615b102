pub mod app;
pub mod buttons;
pub mod components;
pub mod config;
pub mod gui;
pub mod logging;

use gpui::{App, actions};
pub use gui::{open_calculator_window, setup_app};
use tracing::info;

actions!(calculator, [Quit]);

/// Handler for the [`Quit`] action; ends the gpui application.
pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Executing quit handler");
    cx.quit();
}
