use crate::LearnscapeApp;
use crate::ui::helpers::day_checkbox_row;
use crate::view_models::WeekCard;
use egui::{Button, CentralPanel, Color32, Context, ProgressBar, RichText, ScrollArea, Ui};

pub fn ui_roadmap(app: &mut LearnscapeApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 560.0;
        let content_width = ui.available_width().min(max_width);

        ui.vertical_centered(|ui| {
            ui.set_width(content_width);
            ui.add_space(12.0);
            ui.heading("📚 Course Roadmap");
            ui.add_space(10.0);

            let toggle_label = if app.roadmap.expand_all {
                "Collapse All"
            } else {
                "Expand All"
            };
            if ui
                .add_sized([160.0, 30.0], Button::new(toggle_label))
                .clicked()
            {
                app.toggle_expand_all();
            }
            ui.add_space(10.0);

            // Overall progress across every week
            ui.add(
                ProgressBar::new(app.progress_percent() / 100.0)
                    .desired_width(content_width)
                    .show_percentage(),
            );
            ui.add_space(12.0);

            // Precompute the cards so the loop below doesn't borrow app state
            let cards = app.week_cards();
            if cards.is_empty() {
                ui.add_space(24.0);
                ui.label(RichText::new("No curriculum is available yet.").weak());
                return;
            }

            ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    for card in &cards {
                        week_card(app, ui, card);
                        ui.add_space(8.0);
                    }
                });
        });
    });
}

fn week_card(app: &mut LearnscapeApp, ui: &mut Ui, card: &WeekCard) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        // Header: calendar icon, label, completion badge, chevron
        let header = ui
            .add_sized(
                [ui.available_width(), 36.0],
                Button::new(card.header_label()),
            )
            .on_hover_text(card.days_summary());
        if header.clicked() {
            app.toggle_week_expansion(&card.label);
        }

        if card.expanded {
            ui.add_space(4.0);
            for row in app.day_rows(&card.label) {
                let mut checked = row.checked;
                if day_checkbox_row(ui, &row.label, &row.topic, &mut checked) {
                    app.toggle_day_completion(&card.label, &row.label);
                }
            }

            // Congratulation banner, re-derived every frame
            if card.celebrate {
                ui.add_space(8.0);
                egui::Frame::default()
                    .fill(Color32::DARK_GREEN)
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.label(
                            RichText::new(format!(
                                "🎉 Great job! You've completed {}!",
                                card.label
                            ))
                            .color(Color32::WHITE)
                            .strong(),
                        );
                    });
            }
        }
    });
}
