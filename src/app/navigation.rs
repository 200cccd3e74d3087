use super::*;

impl LearnscapeApp {
    pub fn open_roadmap(&mut self) {
        self.route = Route::Roadmap;
        self.message.clear();
    }

    pub fn open_landing(&mut self) {
        self.route = Route::Landing;
        self.message.clear();
    }

    /// Placeholder for the account flows the site advertises but does not
    /// implement yet.
    pub fn show_coming_soon(&mut self, what: &str) {
        self.message = format!("{what} is coming soon — stay tuned!");
    }
}
