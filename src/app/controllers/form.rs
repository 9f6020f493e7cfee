use fltk::{frame::Frame, input::Input, prelude::*};

use crate::app::domain::ResultMessage;
use crate::app::services::{delta, parse};

/// Widgets the form controller reads from and writes to.
#[derive(Clone)]
pub struct FormWidgets {
    pub start_input: Input,
    pub end_input: Input,
    pub result_frame: Frame,
}

/// Owns the date entries and the result label, and runs the calculation
/// when the user asks for it.
pub struct FormController {
    widgets: FormWidgets,
}

impl FormController {
    pub fn new(widgets: FormWidgets) -> Self {
        Self { widgets }
    }

    /// Compute the result text for two raw date strings.
    pub fn compute(start: &str, end: &str) -> ResultMessage {
        match (parse(start), parse(end)) {
            (Ok(start_date), Ok(end_date)) => {
                let days = delta(start_date, end_date);
                log::debug!("{} -> {}: {} day(s)", start_date, end_date, days);
                ResultMessage::Days(days)
            }
            (Err(e), _) | (_, Err(e)) => {
                log::info!("Rejected input: {}", e);
                ResultMessage::InvalidFormat
            }
        }
    }

    /// Read both entries, calculate, and show the result in the label.
    ///
    /// Needs live widgets, so only `compute` is unit tested.
    pub fn trigger(&mut self) -> ResultMessage {
        let start = self.widgets.start_input.value();
        let end = self.widgets.end_input.value();
        let message = Self::compute(&start, &end);

        self.widgets.result_frame.set_label(&message.to_string());
        self.widgets.result_frame.redraw();
        message
    }
}
