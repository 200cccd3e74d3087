use super::*;

impl LearnscapeApp {
    /// Precomputes per-week card data so the render loop can iterate without
    /// holding a borrow of app state.
    pub fn week_cards(&self) -> Vec<WeekCard> {
        self.curriculum
            .weeks
            .iter()
            .map(|w| WeekCard {
                label: w.label.clone(),
                expanded: self.is_week_expanded(&w.label),
                completed: self.is_week_completed(&w.label),
                celebrate: self.should_celebrate(&w.label),
                checked_days: self.checked_days_in(&w.label),
                total_days: w.days.len(),
            })
            .collect()
    }

    /// Checklist rows for one week, in curriculum order.
    pub fn day_rows(&self, week: &str) -> Vec<DayRow> {
        self.curriculum
            .week(week)
            .map(|w| {
                w.days
                    .iter()
                    .map(|d| DayRow {
                        label: d.label.clone(),
                        topic: d.topic.clone(),
                        checked: self.is_day_checked(week, &d.label),
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}
