mod helpers;
pub mod layout;
pub mod views;

use crate::app::LearnscapeApp;
use crate::model::Route;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, nav_panel};

impl App for LearnscapeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Navigation bar, shared by both views
        nav_panel(self, ctx);

        // Theme switcher panel
        bottom_panel(ctx);

        // Dispatch by route to the view functions
        match self.route {
            Route::Landing => views::landing::ui_landing(self, ctx),
            Route::Roadmap => views::roadmap::ui_roadmap(self, ctx),
        }
    }
}
