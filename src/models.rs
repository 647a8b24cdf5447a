//! Frontend Models
//!
//! Data structures matching the CRM backend API.

use serde::{Deserialize, Serialize};

/// Contact lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Active,
    Inactive,
}

impl ContactStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::Active => "active",
            ContactStatus::Inactive => "inactive",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "active" => Some(ContactStatus::Active),
            "inactive" => Some(ContactStatus::Inactive),
            _ => None,
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "low" => Some(TaskPriority::Low),
            "medium" => Some(TaskPriority::Medium),
            "high" => Some(TaskPriority::High),
            _ => None,
        }
    }
}

/// Contact record (matches backend serializer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u32,
    pub full_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub status: ContactStatus,
    pub created_at: String,
    /// Count of not-done tasks, annotated server-side
    #[serde(default)]
    pub open_tasks_count: u32,
}

/// Task record, always owned by exactly one contact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    /// Owning contact id
    pub contact: u32,
    pub title: String,
    pub due_date: Option<String>,
    pub priority: TaskPriority,
    pub is_done: bool,
    pub created_at: String,
}

/// Access/refresh token pair from POST /api/token/
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// One page of a paginated list endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// List endpoints return either a DRF page object or a bare array
/// depending on backend pagination settings. Accept both.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Paginated(Page<T>),
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    /// Normalize to a page; a bare array becomes a single unpaginated page.
    pub fn into_page(self) -> Page<T> {
        match self {
            Listing::Paginated(page) => page,
            Listing::Plain(results) => Page {
                count: results.len() as u32,
                next: None,
                previous: None,
                results,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_status_roundtrips_lowercase() {
        let contact: Contact = serde_json::from_str(
            r#"{"id":1,"full_name":"Ada Lovelace","phone":null,"email":"ada@example.com",
                "status":"inactive","created_at":"2026-01-02T10:00:00Z","open_tasks_count":3}"#,
        )
        .unwrap();
        assert_eq!(contact.status, ContactStatus::Inactive);
        assert_eq!(contact.open_tasks_count, 3);

        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(json["status"], "inactive");
    }

    #[test]
    fn open_tasks_count_defaults_to_zero() {
        let contact: Contact = serde_json::from_str(
            r#"{"id":2,"full_name":"Bob","phone":null,"email":null,
                "status":"active","created_at":"2026-01-02T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(contact.open_tasks_count, 0);
    }

    #[test]
    fn task_priority_parses_lowercase() {
        let task: Task = serde_json::from_str(
            r#"{"id":7,"contact":1,"title":"Call back","due_date":null,
                "priority":"high","is_done":false,"created_at":"2026-01-03T09:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(task.priority, TaskPriority::High);
        assert!(task.due_date.is_none());
    }

    #[test]
    fn listing_accepts_paginated_body() {
        let listing: Listing<Task> = serde_json::from_str(
            r#"{"count":1,"next":null,"previous":null,
                "results":[{"id":1,"contact":1,"title":"Email intro","due_date":"2026-09-01",
                            "priority":"low","is_done":true,"created_at":"2026-01-03T09:00:00Z"}]}"#,
        )
        .unwrap();
        let page = listing.into_page();
        assert_eq!(page.count, 1);
        assert_eq!(page.results[0].title, "Email intro");
    }

    #[test]
    fn listing_accepts_bare_array() {
        let listing: Listing<Task> = serde_json::from_str(
            r#"[{"id":1,"contact":1,"title":"Email intro","due_date":null,
                 "priority":"medium","is_done":false,"created_at":"2026-01-03T09:00:00Z"}]"#,
        )
        .unwrap();
        let page = listing.into_page();
        assert_eq!(page.count, 1);
        assert!(page.next.is_none());
    }
}
