use anyhow::Result;
use calc_core::Calculator;
use gpui::{
    App, AppContext, Bounds, KeyBinding, Menu, MenuItem, TitlebarOptions, WindowBounds,
    WindowOptions,
};
use gpui_component::Root;
use tracing::info;

use crate::components::{AppWindow, CalculatorView, WindowPreferences};
use crate::{Quit, quit};

pub fn setup_app(app_cx: &mut App) {
    // This must be called before using any GPUI Component features.
    gpui_component::init(app_cx);

    app_cx.activate(true);

    // Bind platform-appropriate quit shortcut
    #[cfg(target_os = "macos")]
    app_cx.bind_keys([KeyBinding::new("cmd-q", Quit, None)]);

    #[cfg(not(target_os = "macos"))]
    app_cx.bind_keys([
        KeyBinding::new("ctrl-q", Quit, None),
        KeyBinding::new("alt-F4", Quit, None),
    ]);

    app_cx.on_action(quit);

    app_cx.set_menus(vec![Menu {
        name: "Calculator".into(),
        items: vec![MenuItem::action("Quit", Quit)],
    }]);
}

/// Opens the calculator window, centred on the primary display.
pub fn open_calculator_window(
    app_cx: &mut App,
    calculator: Calculator,
    prefs: WindowPreferences,
) -> Result<()> {
    let options = WindowOptions {
        window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
            None, prefs.size, app_cx,
        ))),
        titlebar: Some(TitlebarOptions {
            title: Some("Calculator".into()),
            ..Default::default()
        }),
        ..Default::default()
    };

    app_cx.open_window(options, |window, cx| {
        let view = cx.new(|_| CalculatorView::new(calculator));
        let app_window = cx.new(|cx| AppWindow::new(view, cx));
        cx.new(|cx| Root::new(app_window, window, cx))
    })?;

    info!("calculator window opened");
    Ok(())
}
