use eframe::egui::{ComboBox, RichText, Ui};
use crate::color::ShirtColor;
use crate::constants::*;

/// Dropdown over the fixed shirt colors. Returns `true` when the selection changed.
pub fn color_select(ui: &mut Ui, label: &str, selected: &mut ShirtColor) -> bool {
    let before = *selected;

    ui.horizontal(|ui| {
        ui.label(RichText::new(label).strong());
        ComboBox::from_id_salt("shirt_color")
            .width(GUI_TEXT_INPUT_WIDTH)
            .selected_text(selected.label())
            .show_ui(ui, |ui| {
                for color in ShirtColor::ALL {
                    ui.selectable_value(selected, color, color.label());
                }
            });
    });

    *selected != before
}
