use fltk::{prelude::*, window::Window};

use super::controllers::form::FormController;
use super::domain::Message;

/// Lifecycle of the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    /// Event loop active, accepting input
    Running,
    /// Terminal; the process exits once the loop drains
    Closed,
}

impl WindowState {
    /// Whether messages are still dispatched in this state
    pub fn accepts_input(self) -> bool {
        self == Self::Running
    }

    /// Next state after `msg` is dispatched.
    pub fn next(self, msg: Message) -> Self {
        match (self, msg) {
            (Self::Running, Message::WindowClose) => Self::Closed,
            (state, _) => state,
        }
    }
}

pub struct AppState {
    pub form: FormController,
    pub window: Window,
    pub window_state: WindowState,
}

impl AppState {
    pub fn new(form: FormController, window: Window) -> Self {
        Self {
            form,
            window,
            window_state: WindowState::Running,
        }
    }

    /// Dispatch one message from the channel
    pub fn handle(&mut self, msg: Message) {
        if !self.window_state.accepts_input() {
            log::debug!("Dropped {:?} after close", msg);
            return;
        }

        match msg {
            Message::Calculate => {
                self.form.trigger();
            }
            Message::WindowClose => {
                log::info!("Window closed");
                // Last shown window; app.wait() returns false after this
                self.window.hide();
            }
        }

        self.window_state = self.window_state.next(msg);
    }
}
