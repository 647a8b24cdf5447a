//! List Query Parameters
//!
//! Query-string building for the contacts list and client-side filtering
//! for one contact's tasks.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::models::{ContactStatus, Task, TaskPriority};

/// Characters escaped inside a query parameter value.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'=')
    .add(b'?');

/// Sort orders offered by the contacts list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactOrdering {
    #[default]
    NewestFirst,
    OldestFirst,
    NameAsc,
    NameDesc,
}

/// All orderings, in the order the select box shows them
pub const CONTACT_ORDERINGS: &[ContactOrdering] = &[
    ContactOrdering::NewestFirst,
    ContactOrdering::OldestFirst,
    ContactOrdering::NameAsc,
    ContactOrdering::NameDesc,
];

impl ContactOrdering {
    pub fn as_param(&self) -> &'static str {
        match self {
            ContactOrdering::NewestFirst => "-created_at",
            ContactOrdering::OldestFirst => "created_at",
            ContactOrdering::NameAsc => "full_name",
            ContactOrdering::NameDesc => "-full_name",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactOrdering::NewestFirst => "Newest First",
            ContactOrdering::OldestFirst => "Oldest First",
            ContactOrdering::NameAsc => "Name A-Z",
            ContactOrdering::NameDesc => "Name Z-A",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "-created_at" => Some(ContactOrdering::NewestFirst),
            "created_at" => Some(ContactOrdering::OldestFirst),
            "full_name" => Some(ContactOrdering::NameAsc),
            "-full_name" => Some(ContactOrdering::NameDesc),
            _ => None,
        }
    }
}

/// Parameters of GET /api/contacts/
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactQuery {
    pub search: String,
    pub status: Option<ContactStatus>,
    pub ordering: ContactOrdering,
    pub page: u32,
}

impl ContactQuery {
    /// Build the query string, omitting empty parameters. Page 0 and 1
    /// both mean the first page and are left out.
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if !self.search.is_empty() {
            params.push(format!(
                "search={}",
                utf8_percent_encode(&self.search, QUERY_VALUE)
            ));
        }
        if let Some(status) = self.status {
            params.push(format!("status={}", status.as_str()));
        }
        params.push(format!("ordering={}", self.ordering.as_param()));
        if self.page > 1 {
            params.push(format!("page={}", self.page));
        }
        params.join("&")
    }
}

/// Completion filter for the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatusFilter {
    #[default]
    All,
    Pending,
    Done,
}

impl TaskStatusFilter {
    pub fn from_param(value: &str) -> Self {
        match value {
            "pending" => TaskStatusFilter::Pending,
            "done" => TaskStatusFilter::Done,
            _ => TaskStatusFilter::All,
        }
    }

    fn matches(&self, task: &Task) -> bool {
        match self {
            TaskStatusFilter::All => true,
            TaskStatusFilter::Pending => !task.is_done,
            TaskStatusFilter::Done => task.is_done,
        }
    }
}

/// Filter a contact's tasks by completion and priority. Both filters must
/// match; tasks are already scoped to one contact by the fetch.
pub fn filter_tasks(
    tasks: &[Task],
    status: TaskStatusFilter,
    priority: Option<TaskPriority>,
) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| status.matches(task))
        .filter(|task| priority.map_or(true, |p| task.priority == p))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u32, is_done: bool, priority: TaskPriority) -> Task {
        Task {
            id,
            contact: 1,
            title: format!("Task {id}"),
            due_date: None,
            priority,
            is_done,
            created_at: "2026-01-05T12:00:00Z".to_string(),
        }
    }

    #[test]
    fn default_query_only_carries_ordering() {
        let query = ContactQuery::default();
        assert_eq!(query.to_query_string(), "ordering=-created_at");
    }

    #[test]
    fn full_query_includes_every_parameter() {
        let query = ContactQuery {
            search: "ada".to_string(),
            status: Some(ContactStatus::Active),
            ordering: ContactOrdering::NameAsc,
            page: 3,
        };
        assert_eq!(
            query.to_query_string(),
            "search=ada&status=active&ordering=full_name&page=3"
        );
    }

    #[test]
    fn search_term_is_percent_encoded() {
        let query = ContactQuery {
            search: "ada lovelace & co".to_string(),
            ..Default::default()
        };
        assert_eq!(
            query.to_query_string(),
            "search=ada%20lovelace%20%26%20co&ordering=-created_at"
        );
    }

    #[test]
    fn first_page_is_omitted() {
        let query = ContactQuery {
            page: 1,
            ..Default::default()
        };
        assert!(!query.to_query_string().contains("page="));
    }

    #[test]
    fn status_and_priority_filters_are_conjunctive() {
        let tasks = vec![
            task(1, true, TaskPriority::High),
            task(2, true, TaskPriority::Low),
            task(3, false, TaskPriority::High),
            task(4, false, TaskPriority::Medium),
        ];
        let filtered = filter_tasks(&tasks, TaskStatusFilter::Done, Some(TaskPriority::High));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 1);
    }

    #[test]
    fn pending_filter_alone_keeps_all_priorities() {
        let tasks = vec![
            task(1, true, TaskPriority::High),
            task(2, false, TaskPriority::Low),
            task(3, false, TaskPriority::High),
        ];
        let filtered = filter_tasks(&tasks, TaskStatusFilter::Pending, None);
        assert_eq!(
            filtered.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![2, 3]
        );
    }

    #[test]
    fn all_filter_is_identity() {
        let tasks = vec![task(1, true, TaskPriority::Low), task(2, false, TaskPriority::High)];
        assert_eq!(filter_tasks(&tasks, TaskStatusFilter::All, None), tasks);
    }
}
