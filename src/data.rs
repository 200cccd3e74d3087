// src/data.rs

use crate::model::{Curriculum, Day, Week};
use serde_json::Value;

/// Loads the curriculum from the embedded JSON document.
pub fn read_curriculum_embedded() -> Curriculum {
    let file_content = include_str!("data/roadmap.json");
    parse_curriculum(file_content)
}

/// Parses a `{ week: { day: topic } }` document into an ordered `Curriculum`.
///
/// Malformed pieces are skipped with a warning instead of failing the load:
/// a week whose value is not an object, a day whose topic is not a string,
/// and a week left with no days are all dropped. A document that is not a
/// JSON object at all yields an empty curriculum.
pub fn parse_curriculum(raw: &str) -> Curriculum {
    let root: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(err) => {
            log::warn!("curriculum document is not valid JSON: {err}");
            return Curriculum::default();
        }
    };

    let Some(week_entries) = root.as_object() else {
        log::warn!("curriculum root is not an object");
        return Curriculum::default();
    };

    let mut weeks = Vec::new();
    for (week_label, days_value) in week_entries {
        let Some(day_entries) = days_value.as_object() else {
            log::warn!("skipping week {week_label:?}: value is not an object");
            continue;
        };

        let mut days = Vec::new();
        for (day_label, topic) in day_entries {
            match topic.as_str() {
                Some(text) => days.push(Day {
                    label: day_label.clone(),
                    topic: text.to_owned(),
                }),
                None => {
                    log::warn!("skipping day {day_label:?} in {week_label:?}: topic is not a string");
                }
            }
        }

        if days.is_empty() {
            log::warn!("skipping week {week_label:?}: no usable days");
            continue;
        }

        weeks.push(Week {
            label: week_label.clone(),
            days,
        });
    }

    Curriculum { weeks }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_curriculum_is_well_formed() {
        let curriculum = read_curriculum_embedded();
        assert!(!curriculum.is_empty());
        for week in &curriculum.weeks {
            assert!(!week.days.is_empty(), "week {:?} has no days", week.label);
        }
    }

    #[test]
    fn preserves_document_order() {
        let curriculum = parse_curriculum(
            r#"{ "Week 2": { "Mon": "b" }, "Week 10": { "Mon": "c" }, "Week 1": { "Mon": "a" } }"#,
        );
        let labels: Vec<&str> = curriculum.weeks.iter().map(|w| w.label.as_str()).collect();
        assert_eq!(labels, ["Week 2", "Week 10", "Week 1"]);
    }

    #[test]
    fn malformed_document_yields_empty_curriculum() {
        assert!(parse_curriculum("not json at all").is_empty());
        assert!(parse_curriculum("[1, 2, 3]").is_empty());
    }

    #[test]
    fn skips_non_string_topics_and_empty_weeks() {
        let curriculum = parse_curriculum(
            r#"{
                "Week 1": { "Mon": "Intro", "Tue": 42 },
                "Week 2": { "Mon": null },
                "Week 3": "nope"
            }"#,
        );
        assert_eq!(curriculum.weeks.len(), 1);
        assert_eq!(curriculum.weeks[0].days.len(), 1);
        assert_eq!(curriculum.weeks[0].days[0].label, "Mon");
    }
}
