use fltk::{enums::Color, prelude::*};

use crate::ui::main_window::MainWidgets;

pub fn apply_theme(widgets: &mut MainWidgets, is_dark: bool) {
    let (background, text, field, field_text, button) = if is_dark {
        (
            Color::from_rgb(25, 25, 25),
            Color::from_rgb(220, 220, 220),
            Color::from_rgb(30, 30, 30),
            Color::from_rgb(220, 220, 220),
            Color::from_rgb(50, 50, 50),
        )
    } else {
        (
            Color::from_rgb(240, 240, 240),
            Color::Black,
            Color::White,
            Color::Black,
            Color::from_rgb(225, 225, 225),
        )
    };

    widgets.wind.set_color(background);
    widgets.wind.set_label_color(text);

    for label in [&mut widgets.start_label, &mut widgets.end_label] {
        label.set_label_color(text);
    }
    widgets.form.result_frame.set_label_color(text);

    for input in [&mut widgets.form.start_input, &mut widgets.form.end_input] {
        input.set_color(field);
        input.set_text_color(field_text);
        input.set_cursor_color(field_text);
    }

    widgets.calculate_button.set_color(button);
    widgets.calculate_button.set_label_color(text);

    widgets.wind.redraw();
}
