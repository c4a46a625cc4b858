use eframe::egui::{Color32, RichText, TextEdit, Ui};
use crate::constants::*;

/// Labelled single-line input with its error message underneath.
/// Returns `true` when the user edited the value this frame.
pub fn text_input(ui: &mut Ui, label: &str, value: &mut String, char_limit: usize, error: &str) -> bool {
    let mut changed = false;

    ui.horizontal(|ui| {
        ui.label(RichText::new(label).strong());
        changed = ui.add(TextEdit::singleline(value)
            .char_limit(char_limit)
            .desired_width(GUI_TEXT_INPUT_WIDTH))
            .changed();
    });

    if !error.is_empty() {
        ui.label(RichText::new(error).small().color(Color32::RED));
    }

    changed
}
