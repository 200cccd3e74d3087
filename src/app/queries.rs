use super::*;

impl LearnscapeApp {
    pub fn is_day_checked(&self, week: &str, day: &str) -> bool {
        self.roadmap
            .checked
            .get(week)
            .and_then(|days| days.get(day))
            .copied()
            .unwrap_or(false)
    }

    /// How many of the week's curriculum days are checked. Stray checked
    /// entries that no longer match a curriculum day do not count.
    pub fn checked_days_in(&self, week: &str) -> usize {
        self.curriculum
            .week(week)
            .map(|w| {
                w.days
                    .iter()
                    .filter(|d| self.is_day_checked(week, &d.label))
                    .count()
            })
            .unwrap_or(0)
    }

    /// Expand-all wins over the per-week selection.
    pub fn is_week_expanded(&self, week: &str) -> bool {
        self.roadmap.expand_all || self.roadmap.expanded_week.as_deref() == Some(week)
    }

    /// Read every render from the derived map, never cached by the UI.
    pub fn should_celebrate(&self, week: &str) -> bool {
        self.roadmap.celebration.get(week).copied().unwrap_or(false)
    }
}
