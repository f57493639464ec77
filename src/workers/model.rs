//! Worker data model.

use serde::{Deserialize, Serialize};

/// A registered worker profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub skills: Vec<String>,
    pub rate: f64,
    pub location: String,
    pub contact: String,
    pub rating: f64,
    pub tasks_completed: u32,
}

impl Worker {
    /// Materialize a worker from its creation payload. Rating and completed
    /// count start at zero; no exposed operation mutates them.
    pub fn new(id: u64, input: NewWorker) -> Self {
        Self {
            id,
            name: input.name,
            category: input.category,
            skills: input.skills,
            rate: input.rate,
            location: input.location,
            contact: input.contact,
            rating: 0.0,
            tasks_completed: 0,
        }
    }
}

/// Creation payload for `POST /workers`. `name` and `category` are required
/// (checked by the handler); everything else defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorker {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub contact: String,
}

/// Search filters for `GET /workers/search`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkerQuery {
    pub category: Option<String>,
    pub location: Option<String>,
}

impl WorkerQuery {
    /// Category matches exactly; location matches as a case-insensitive
    /// substring. An absent filter passes every record.
    pub fn matches(&self, worker: &Worker) -> bool {
        let category_ok = self
            .category
            .as_ref()
            .is_none_or(|category| &worker.category == category);
        let location_ok = self.location.as_ref().is_none_or(|location| {
            worker
                .location
                .to_lowercase()
                .contains(&location.to_lowercase())
        });
        category_ok && location_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worker_at(location: &str) -> Worker {
        Worker::new(
            1,
            NewWorker {
                name: "Alice".into(),
                category: "plumbing".into(),
                location: location.into(),
                ..NewWorker::default()
            },
        )
    }

    #[test]
    fn new_worker_defaults() {
        let worker = Worker::new(
            1,
            NewWorker {
                name: "Alice".into(),
                category: "plumbing".into(),
                ..NewWorker::default()
            },
        );
        assert_eq!(worker.id, 1);
        assert!(worker.skills.is_empty());
        assert_eq!(worker.rate, 0.0);
        assert_eq!(worker.location, "");
        assert_eq!(worker.contact, "");
        assert_eq!(worker.rating, 0.0);
        assert_eq!(worker.tasks_completed, 0);
    }

    #[test]
    fn worker_serializes_camel_case() {
        let worker = worker_at("Downtown");
        let json = serde_json::to_value(&worker).unwrap();
        assert_eq!(json["tasksCompleted"], 0);
        assert_eq!(json["rating"], 0.0);
        assert!(json.get("tasks_completed").is_none());
    }

    #[test]
    fn new_worker_deserializes_with_optional_fields_absent() {
        let input: NewWorker =
            serde_json::from_str(r#"{"name": "Bob", "category": "electrical"}"#).unwrap();
        assert_eq!(input.name, "Bob");
        assert!(input.skills.is_empty());
        assert_eq!(input.rate, 0.0);
    }

    #[test]
    fn query_category_is_exact() {
        let worker = worker_at("Downtown");
        let hit = WorkerQuery {
            category: Some("plumbing".into()),
            location: None,
        };
        let miss = WorkerQuery {
            category: Some("plumb".into()),
            location: None,
        };
        assert!(hit.matches(&worker));
        assert!(!miss.matches(&worker));
    }

    #[test]
    fn query_location_is_case_insensitive_substring() {
        let query = WorkerQuery {
            category: None,
            location: Some("town".into()),
        };
        // Substring, not prefix: both Downtown and Uptown contain "town".
        assert!(query.matches(&worker_at("Downtown")));
        assert!(query.matches(&worker_at("Uptown")));
        assert!(!query.matches(&worker_at("Riverside")));
    }

    #[test]
    fn empty_query_matches_everything() {
        let query = WorkerQuery::default();
        assert!(query.matches(&worker_at("anywhere")));
    }

    #[test]
    fn both_filters_must_match() {
        let worker = worker_at("Downtown");
        let query = WorkerQuery {
            category: Some("plumbing".into()),
            location: Some("uptown".into()),
        };
        assert!(!query.matches(&worker));
    }
}
