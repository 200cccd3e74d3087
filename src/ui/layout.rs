use crate::LearnscapeApp;
use crate::model::Route;
use egui::{CentralPanel, Context, Frame, RichText, Ui, Visuals};

const SECTION_LINKS: [&str; 5] = ["About", "Guide", "Services", "Pricing", "FAQ"];

pub fn nav_panel(app: &mut LearnscapeApp, ctx: &Context) {
    egui::TopBottomPanel::top("nav_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            // Brand, doubles as a home link
            if ui
                .selectable_label(false, RichText::new("🎓 LearnscapeAI").strong())
                .clicked()
            {
                app.open_landing();
            }
            ui.separator();

            // Anchor links of the landing page
            for label in SECTION_LINKS {
                if ui
                    .selectable_label(app.route == Route::Landing, label)
                    .clicked()
                {
                    app.open_landing();
                }
            }
            if ui
                .selectable_label(app.route == Route::Roadmap, "Roadmap")
                .clicked()
            {
                app.open_roadmap();
            }

            ui.with_layout(
                egui::Layout::right_to_left(egui::Align::Center),
                |ui| {
                    if ui.button("✏ Sign Up").clicked() {
                        app.show_coming_soon("Sign up");
                    }
                    if ui.button("➡ Sign In").clicked() {
                        app.show_coming_soon("Sign in");
                    }
                },
            );
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- THEME BUTTONS -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Dark mode").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Light mode").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            },
        );
    });
}

/// Panel centered both vertically and horizontally, with a maximum content
/// width and an inner block `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // Vertical space to center the content
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}
