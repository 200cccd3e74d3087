use super::*;

impl LearnscapeApp {
    /// Exclusive expansion: if `week` is already the open one, collapse it;
    /// otherwise it becomes the only open week. The underlying selection is
    /// still updated while expand-all is on, even though the override wins
    /// visually until it is turned off.
    pub fn toggle_week_expansion(&mut self, week: &str) {
        if self.roadmap.expanded_week.as_deref() == Some(week) {
            self.roadmap.expanded_week = None;
        } else {
            self.roadmap.expanded_week = Some(week.to_owned());
        }
    }

    pub fn toggle_expand_all(&mut self) {
        self.roadmap.expand_all = !self.roadmap.expand_all;
    }

    /// Flips one day's checked flag (missing entries default to unchecked)
    /// and rechecks the week's celebration from the updated state in the
    /// same transition, so the derived flag can never observe a pre-toggle
    /// snapshot.
    pub fn toggle_day_completion(&mut self, week: &str, day: &str) {
        let Some(week_data) = self.curriculum.week(week) else {
            // Unknown week, nothing to toggle.
            return;
        };

        let days = self.roadmap.checked.entry(week.to_owned()).or_default();
        let flag = days.entry(day.to_owned()).or_insert(false);
        *flag = !*flag;

        let all_checked = week_data
            .days
            .iter()
            .all(|d| days.get(&d.label).copied().unwrap_or(false));
        self.roadmap.celebration.insert(week.to_owned(), all_checked);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_curriculum;

    fn two_day_app() -> LearnscapeApp {
        LearnscapeApp::with_curriculum(parse_curriculum(
            r#"{ "Week1": { "Mon": "Intro", "Tue": "Basics" } }"#,
        ))
    }

    #[test]
    fn toggling_a_day_twice_restores_it() {
        let mut app = two_day_app();
        assert!(!app.is_day_checked("Week1", "Mon"));
        app.toggle_day_completion("Week1", "Mon");
        assert!(app.is_day_checked("Week1", "Mon"));
        app.toggle_day_completion("Week1", "Mon");
        assert!(!app.is_day_checked("Week1", "Mon"));
    }

    #[test]
    fn celebration_tracks_every_toggle() {
        let mut app = two_day_app();
        app.toggle_day_completion("Week1", "Mon");
        assert!(!app.should_celebrate("Week1"));
        app.toggle_day_completion("Week1", "Tue");
        assert!(app.should_celebrate("Week1"));
        // Unchecking any day revokes it immediately.
        app.toggle_day_completion("Week1", "Mon");
        assert!(!app.should_celebrate("Week1"));
    }

    #[test]
    fn unknown_week_toggle_is_a_no_op() {
        let mut app = two_day_app();
        app.toggle_day_completion("Week9", "Mon");
        assert!(app.roadmap.checked.is_empty());
        assert!(!app.should_celebrate("Week9"));
    }

    #[test]
    fn week_expansion_is_exclusive() {
        let mut app = LearnscapeApp::with_curriculum(parse_curriculum(
            r#"{ "Week1": { "Mon": "a" }, "Week2": { "Mon": "b" } }"#,
        ));
        app.toggle_week_expansion("Week1");
        assert!(app.is_week_expanded("Week1"));
        assert!(!app.is_week_expanded("Week2"));

        app.toggle_week_expansion("Week2");
        assert!(!app.is_week_expanded("Week1"));
        assert!(app.is_week_expanded("Week2"));

        // Toggling the open week collapses everything.
        app.toggle_week_expansion("Week2");
        assert!(!app.is_week_expanded("Week1"));
        assert!(!app.is_week_expanded("Week2"));
    }

    #[test]
    fn expand_all_overrides_per_week_state() {
        let mut app = LearnscapeApp::with_curriculum(parse_curriculum(
            r#"{ "Week1": { "Mon": "a" }, "Week2": { "Mon": "b" } }"#,
        ));
        app.toggle_expand_all();
        assert!(app.is_week_expanded("Week1"));
        assert!(app.is_week_expanded("Week2"));

        // Per-week toggles are still tracked underneath the override.
        app.toggle_week_expansion("Week1");
        assert!(app.is_week_expanded("Week2"));
        app.toggle_expand_all();
        assert!(app.is_week_expanded("Week1"));
        assert!(!app.is_week_expanded("Week2"));
    }
}
