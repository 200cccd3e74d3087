use serde::{Deserialize, Serialize};

/// The two addressable views of the site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Landing,
    Roadmap,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Day {
    pub label: String,
    pub topic: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Week {
    pub label: String,
    pub days: Vec<Day>,
}

/// The full curriculum, in document order. Loaded once, never mutated.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Curriculum {
    pub weeks: Vec<Week>,
}

impl Curriculum {
    pub fn week(&self, label: &str) -> Option<&Week> {
        self.weeks.iter().find(|w| w.label == label)
    }

    pub fn total_days(&self) -> usize {
        self.weeks.iter().map(|w| w.days.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }
}
