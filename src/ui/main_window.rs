use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Align, CallbackTrigger, Event, Font},
    frame::Frame,
    group::{Flex, FlexType},
    input::Input,
    prelude::*,
    window::Window,
};

use crate::app::controllers::form::FormWidgets;
use crate::app::domain::{AppSettings, Message};

pub const WINDOW_TITLE: &str = "Date Difference Calculator";
pub const START_LABEL: &str = "Start Date (YYYY-MM-DD):";
pub const END_LABEL: &str = "End Date (YYYY-MM-DD):";

const ROW_HEIGHT: i32 = 30;
const MARGIN: i32 = 10;

pub struct MainWidgets {
    pub wind: Window,
    pub start_label: Frame,
    pub end_label: Frame,
    pub calculate_button: Button,
    pub form: FormWidgets,
}

/// Build the calculator form.
///
/// Two labelled entries, a Calculate button and a bold result label, top to
/// bottom. Every user action is forwarded through `sender`.
pub fn build_main_window(settings: &AppSettings, sender: &Sender<Message>) -> MainWidgets {
    let (w, h) = (settings.window_width, settings.window_height);
    let mut wind = Window::new(100, 100, w, h, WINDOW_TITLE);
    wind.set_xclass("DateDiff");

    let mut flex = Flex::new(MARGIN, MARGIN, w - 2 * MARGIN, h - 2 * MARGIN, None);
    flex.set_type(FlexType::Column);
    flex.set_spacing(5);

    let (start_label, mut start_input) = date_row(&mut flex, START_LABEL, settings.input_font_size);
    let (end_label, mut end_input) = date_row(&mut flex, END_LABEL, settings.input_font_size);

    // Button row spans both columns; side frames keep it centred
    let mut button_row = Flex::default();
    button_row.set_type(FlexType::Row);
    Frame::default();
    let mut calculate_button = Button::default().with_label("Calculate");
    calculate_button.set_label_size(settings.input_font_size);
    button_row.fixed(&calculate_button, 100);
    Frame::default();
    button_row.end();
    flex.fixed(&button_row, ROW_HEIGHT + 5);

    let mut result_frame = Frame::default();
    result_frame.set_label_font(Font::HelveticaBold);
    result_frame.set_label_size(settings.result_font_size);
    result_frame.set_align(Align::Center | Align::Inside);
    flex.fixed(&result_frame, ROW_HEIGHT);

    flex.end();
    wind.end();
    wind.resizable(&flex);

    calculate_button.emit(sender.clone(), Message::Calculate);

    // Enter in either entry does the same as the button
    for input in [&mut start_input, &mut end_input] {
        input.set_trigger(CallbackTrigger::EnterKeyAlways);
        input.emit(sender.clone(), Message::Calculate);
    }

    // Escape also fires the window callback; only a real close ends the app
    let close_sender = sender.clone();
    wind.set_callback(move |_| {
        if app::event() == Event::Close {
            close_sender.send(Message::WindowClose);
        }
    });

    MainWidgets {
        wind,
        start_label,
        end_label,
        calculate_button,
        form: FormWidgets {
            start_input,
            end_input,
            result_frame,
        },
    }
}

fn date_row(parent: &mut Flex, text: &str, font_size: i32) -> (Frame, Input) {
    let mut row = Flex::default();
    row.set_type(FlexType::Row);
    row.set_spacing(MARGIN);

    let mut label = Frame::default().with_label(text);
    label.set_align(Align::Left | Align::Inside);
    row.fixed(&label, 190);

    let mut input = Input::default();
    input.set_text_font(Font::Helvetica);
    input.set_text_size(font_size);

    row.end();
    parent.fixed(&row, ROW_HEIGHT);
    (label, input)
}
