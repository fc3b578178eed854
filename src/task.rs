//! Task model for tasknest.
//!
//! Tasks are owned by the remote service; the client never assigns ids or
//! mutates a task in place. Categories are a closed set and travel on the
//! wire with their capitalized names.

use serde::{Deserialize, Serialize};

/// Category label attached to every task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum Category {
    Today,
    Upcoming,
    Completed,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Today => "Today",
            Category::Upcoming => "Upcoming",
            Category::Completed => "Completed",
        };
        f.write_str(name)
    }
}

/// A task record as returned by the service.
///
/// The service names the identifier field `_id`; deserialization accepts
/// either spelling, client-side reports always use `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    pub category: Category,
}

/// Input for a create request. Never persisted locally.
#[derive(Debug, Clone, Serialize)]
pub struct TaskDraft {
    pub title: String,
    pub category: Category,
}

impl TaskDraft {
    /// Build a draft from raw input, trimming the title.
    ///
    /// Returns `None` when the trimmed title is empty; a draft with an
    /// empty title must never reach the wire.
    pub fn new(title: &str, category: Category) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
            category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_uses_capitalized_wire_names() {
        let json = serde_json::to_string(&Category::Upcoming).expect("serialize");
        assert_eq!(json, "\"Upcoming\"");

        let parsed: Category = serde_json::from_str("\"Completed\"").expect("deserialize");
        assert_eq!(parsed, Category::Completed);
    }

    #[test]
    fn task_accepts_mongo_style_id_field() {
        let task: Task =
            serde_json::from_str(r#"{"_id":"abc123","title":"X","category":"Today"}"#)
                .expect("deserialize");
        assert_eq!(task.id, "abc123");

        let task: Task = serde_json::from_str(r#"{"id":"abc123","title":"X","category":"Today"}"#)
            .expect("deserialize");
        assert_eq!(task.id, "abc123");
    }

    #[test]
    fn task_serializes_with_plain_id() {
        let task = Task {
            id: "1".to_string(),
            title: "X".to_string(),
            category: Category::Today,
        };
        let json = serde_json::to_value(&task).expect("serialize");
        assert_eq!(json["id"], "1");
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn draft_trims_title() {
        let draft = TaskDraft::new("  Buy milk  ", Category::Today).expect("draft");
        assert_eq!(draft.title, "Buy milk");
    }

    #[test]
    fn draft_rejects_blank_title() {
        assert!(TaskDraft::new("", Category::Today).is_none());
        assert!(TaskDraft::new("   ", Category::Upcoming).is_none());
    }

    #[test]
    fn draft_body_has_title_and_category() {
        let draft = TaskDraft::new("Y", Category::Upcoming).expect("draft");
        let json = serde_json::to_value(&draft).expect("serialize");
        assert_eq!(json["title"], "Y");
        assert_eq!(json["category"], "Upcoming");
    }
}
