use crate::LearnscapeApp;
use crate::ui::helpers::cta_button;
use crate::ui::layout::centered_panel;
use egui::{Align, Color32, Context, RichText};

pub fn ui_landing(app: &mut LearnscapeApp, ctx: &Context) {
    centered_panel(ctx, 300.0, 640.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            // Hero banner
            ui.label(
                RichText::new("Roadmaps customized")
                    .size(40.0)
                    .strong()
                    .color(Color32::from_rgb(0xd2, 0x47, 0xbf)),
            );
            ui.label(
                RichText::new("for ultimate learning")
                    .size(40.0)
                    .strong()
                    .color(Color32::from_rgb(0x1f, 0xc0, 0xf1)),
            );
            ui.add_space(12.0);
            ui.label(RichText::new("STRUCTURED · INTERACTIVE · EFFECTIVE").weak());
            ui.add_space(24.0);

            let btn_w = (ui.available_width() * 0.6).clamp(180.0, 320.0);
            if cta_button(ui, "📅 Explore the Roadmap", btn_w, 40.0) {
                app.open_roadmap();
            }

            if !app.message.is_empty() {
                ui.add_space(16.0);
                ui.label(
                    RichText::new(&app.message)
                        .color(Color32::YELLOW)
                        .strong(),
                );
            }
        });
    });
}
