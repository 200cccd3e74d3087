// src/ui/helpers.rs
use egui::{Button, RichText, Ui, Vec2};

/// Big call-to-action button, returns true on click.
pub fn cta_button(ui: &mut Ui, label: &str, width: f32, height: f32) -> bool {
    ui.add(Button::new(RichText::new(label).strong()).min_size(Vec2::new(width, height)))
        .clicked()
}

/// One checklist line: checkbox, bold day label, muted topic text.
/// Returns true when the checkbox was toggled this frame.
pub fn day_checkbox_row(ui: &mut Ui, label: &str, topic: &str, checked: &mut bool) -> bool {
    let mut changed = false;
    ui.horizontal_wrapped(|ui| {
        changed = ui.checkbox(checked, RichText::new(label).strong()).changed();
        ui.label(RichText::new(topic).weak());
    });
    changed
}
