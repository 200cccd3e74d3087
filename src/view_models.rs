// src/view_models.rs

/// Render-ready snapshot of one week's card, precomputed per frame so the
/// render loop never holds a borrow of app state.
#[derive(Clone, Debug)]
pub struct WeekCard {
    pub label: String,
    pub expanded: bool,
    pub completed: bool,
    pub celebrate: bool,
    pub checked_days: usize,
    pub total_days: usize,
}

/// One checklist line inside an expanded week.
#[derive(Clone, Debug)]
pub struct DayRow {
    pub label: String,
    pub topic: String,
    pub checked: bool,
}

impl WeekCard {
    pub fn header_label(&self) -> String {
        let chevron = if self.expanded { "⏶" } else { "⏷" };
        if self.completed {
            format!("📅 {}  ✅  {}", self.label, chevron)
        } else {
            format!("📅 {}  {}", self.label, chevron)
        }
    }

    pub fn days_summary(&self) -> String {
        format!("{}/{} days done", self.checked_days, self.total_days)
    }
}
