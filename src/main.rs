use fltk::{app, prelude::*};

use date_diff::app::{AppSettings, AppState, FormController, WindowState, detect_system_dark_mode};
use date_diff::ui::main_window::build_main_window;
use date_diff::ui::theme::apply_theme;

fn main() {
    env_logger::Builder::default()
        .filter_level(if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    let app = app::App::default();
    let (sender, receiver) = app::channel();
    let settings = AppSettings::default();

    let mut widgets = build_main_window(&settings, &sender);
    let is_dark = settings.is_dark(detect_system_dark_mode);
    apply_theme(&mut widgets, is_dark);

    widgets.wind.show();
    log::info!("Started (dark mode: {})", is_dark);

    let mut state = AppState::new(FormController::new(widgets.form), widgets.wind);

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            state.handle(msg);
        }
        if state.window_state == WindowState::Closed {
            break;
        }
    }
}
