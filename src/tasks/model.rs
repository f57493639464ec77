//! Task data model — records, creation payloads, and partial updates.

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};

/// A posted task.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub task_type: String,
    /// ISO calendar date (YYYY-MM-DD).
    pub date: String,
    pub location: String,
    pub category: String,
    /// No referential check against the workers collection.
    pub assigned_worker_id: Option<u64>,
    /// Free-form lifecycle label; "pending" at creation, any string accepted
    /// on update.
    pub status: String,
}

impl Task {
    /// Materialize a task from its creation payload. An absent, null, or
    /// empty `date` defaults to the current UTC calendar date.
    pub fn new(id: u64, input: NewTask) -> Self {
        let date = match input.date {
            Some(date) if !date.is_empty() => date,
            _ => Utc::now().date_naive().to_string(),
        };
        Self {
            id,
            title: input.title,
            description: input.description,
            task_type: input.task_type,
            date,
            location: input.location,
            category: input.category,
            assigned_worker_id: None,
            status: "pending".to_string(),
        }
    }

    /// Merge a partial update: fields present in the patch replace, absent
    /// fields stay untouched. The id is not patchable.
    pub fn apply(&mut self, patch: TaskPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(task_type) = patch.task_type {
            self.task_type = task_type;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(assigned) = patch.assigned_worker_id {
            self.assigned_worker_id = assigned;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

/// Creation payload for `POST /tasks`. `title`, `type`, and `category` are
/// required (checked by the handler).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "type")]
    pub task_type: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
}

/// Partial update for `PUT /tasks/{id}` — every patchable field optional.
/// Unknown fields in the body are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub task_type: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    /// `Some(None)` unassigns (explicit null in the body); outer `None`
    /// means the key was absent and the field stays untouched.
    #[serde(default, deserialize_with = "present_or_null")]
    pub assigned_worker_id: Option<Option<u64>>,
    pub status: Option<String>,
}

/// Deserialize a nullable field so that an explicit `null` and an absent
/// key are distinguishable.
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<u64>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<u64>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fix_sink() -> Task {
        Task::new(
            1,
            NewTask {
                title: "Fix sink".into(),
                task_type: "repair".into(),
                category: "plumbing".into(),
                ..NewTask::default()
            },
        )
    }

    #[test]
    fn new_task_defaults() {
        let task = fix_sink();
        assert_eq!(task.id, 1);
        assert_eq!(task.description, "");
        assert_eq!(task.location, "");
        assert_eq!(task.status, "pending");
        assert!(task.assigned_worker_id.is_none());
        assert_eq!(task.date, Utc::now().date_naive().to_string());
    }

    #[test]
    fn new_task_keeps_supplied_date() {
        let task = Task::new(
            1,
            NewTask {
                title: "Fix sink".into(),
                task_type: "repair".into(),
                category: "plumbing".into(),
                date: Some("2030-01-15".into()),
                ..NewTask::default()
            },
        );
        assert_eq!(task.date, "2030-01-15");
    }

    #[test]
    fn new_task_defaults_date_when_null_or_empty() {
        let today = Utc::now().date_naive().to_string();
        for body in [
            r#"{"title": "T", "type": "repair", "category": "general", "date": null}"#,
            r#"{"title": "T", "type": "repair", "category": "general", "date": ""}"#,
        ] {
            let input: NewTask = serde_json::from_str(body).unwrap();
            assert_eq!(Task::new(1, input).date, today);
        }
    }

    #[test]
    fn task_serializes_wire_shape() {
        let json = serde_json::to_value(fix_sink()).unwrap();
        assert_eq!(json["type"], "repair");
        assert_eq!(json["assignedWorkerId"], serde_json::Value::Null);
        assert_eq!(json["status"], "pending");
        assert!(json.get("task_type").is_none());
    }

    #[test]
    fn apply_merges_only_present_fields() {
        let mut task = fix_sink();
        let patch: TaskPatch = serde_json::from_str(r#"{"status": "done"}"#).unwrap();
        task.apply(patch);
        assert_eq!(task.status, "done");
        assert_eq!(task.title, "Fix sink");
        assert_eq!(task.category, "plumbing");
        assert!(task.assigned_worker_id.is_none());
    }

    #[test]
    fn apply_assigns_and_unassigns_worker() {
        let mut task = fix_sink();

        let assign: TaskPatch = serde_json::from_str(r#"{"assignedWorkerId": 4}"#).unwrap();
        task.apply(assign);
        assert_eq!(task.assigned_worker_id, Some(4));

        // A patch without the key leaves the assignment alone.
        let unrelated: TaskPatch = serde_json::from_str(r#"{"status": "assigned"}"#).unwrap();
        task.apply(unrelated);
        assert_eq!(task.assigned_worker_id, Some(4));

        // An explicit null unassigns.
        let unassign: TaskPatch = serde_json::from_str(r#"{"assignedWorkerId": null}"#).unwrap();
        task.apply(unassign);
        assert!(task.assigned_worker_id.is_none());
    }

    #[test]
    fn status_is_unconstrained() {
        let mut task = fix_sink();
        for status in ["done", "pending", "whatever the client says"] {
            let patch = TaskPatch {
                status: Some(status.into()),
                ..TaskPatch::default()
            };
            task.apply(patch);
            assert_eq!(task.status, status);
        }
    }

    #[test]
    fn patch_ignores_unknown_fields() {
        let patch: TaskPatch =
            serde_json::from_str(r#"{"status": "done", "bogus": 12, "id": 99}"#).unwrap();
        let mut task = fix_sink();
        task.apply(patch);
        assert_eq!(task.id, 1);
        assert_eq!(task.status, "done");
    }

    #[test]
    fn task_serde_roundtrip() {
        let task = fix_sink();
        let json = serde_json::to_string(&task).unwrap();
        let parsed: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, task.id);
        assert_eq!(parsed.title, task.title);
        assert_eq!(parsed.task_type, task.task_type);
        assert_eq!(parsed.date, task.date);
    }
}
