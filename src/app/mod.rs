use crate::data::read_curriculum_embedded;
use crate::model::{Curriculum, Route};
use std::collections::HashMap;

pub mod actions;
pub mod navigation;
pub mod progress;
pub mod queries;
pub mod view_models;

// Re-export of the view models used by the UI layer
pub use crate::view_models::{DayRow, WeekCard};

/// In-memory UI state of the roadmap checklist. Nothing here is persisted;
/// it lives and dies with the app instance.
#[derive(Clone, Debug, Default)]
pub struct RoadmapState {
    /// The single week open via the per-week toggle, if any.
    pub expanded_week: Option<String>,
    /// week -> day -> checked. Absent entries count as unchecked.
    pub checked: HashMap<String, HashMap<String, bool>>,
    /// week -> "all days checked", recomputed on every completion toggle.
    pub celebration: HashMap<String, bool>,
    /// Overrides `expanded_week` while on: every week renders expanded.
    pub expand_all: bool,
}

pub struct LearnscapeApp {
    pub curriculum: Curriculum,
    pub roadmap: RoadmapState,
    pub route: Route,
    pub message: String,
}

impl LearnscapeApp {
    pub fn new() -> Self {
        Self::with_curriculum(read_curriculum_embedded())
    }

    pub fn with_curriculum(curriculum: Curriculum) -> Self {
        Self {
            curriculum,
            roadmap: RoadmapState::default(),
            route: Route::default(),
            message: String::new(),
        }
    }
}

impl Default for LearnscapeApp {
    fn default() -> Self {
        Self::new()
    }
}
