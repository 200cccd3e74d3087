use super::*;

impl LearnscapeApp {
    /// Checked days over total days across the whole curriculum, as 0..=100.
    /// An empty curriculum reports 0 rather than dividing by zero.
    pub fn progress_percent(&self) -> f32 {
        let total = self.curriculum.total_days();
        if total == 0 {
            return 0.0;
        }
        self.completed_days() as f32 / total as f32 * 100.0
    }

    pub fn completed_days(&self) -> usize {
        self.curriculum
            .weeks
            .iter()
            .map(|w| self.checked_days_in(&w.label))
            .sum()
    }

    /// True when every day of the week is checked. False for unknown weeks.
    pub fn is_week_completed(&self, week: &str) -> bool {
        self.curriculum.week(week).is_some_and(|w| {
            w.days
                .iter()
                .all(|d| self.is_day_checked(&w.label, &d.label))
        })
    }
}
