//! Task List Component
//!
//! Rows for one contact's (already filtered) tasks with toggle and
//! delete actions.

use leptos::prelude::*;

use crate::models::{Task, TaskPriority};

#[component]
pub fn TaskList(
    #[prop(into)] tasks: Signal<Vec<Task>>,
    #[prop(into)] on_toggle: Callback<Task>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !tasks.get().is_empty()
            fallback=|| view! {
                <div class="empty-state">
                    <p>"No tasks found"</p>
                </div>
            }
        >
            // is_done is part of the key so a toggle re-renders that row
            <div class="task-list">
                <For
                    each=move || tasks.get()
                    key=|task| (task.id, task.is_done)
                    children=move |task| {
                        let row_class = if task.is_done { "task-card done" } else { "task-card" };
                        let title_class = if task.is_done { "task-title done" } else { "task-title" };
                        let priority_class = match task.priority {
                            TaskPriority::High => "priority-badge high",
                            TaskPriority::Medium => "priority-badge medium",
                            TaskPriority::Low => "priority-badge low",
                        };
                        let toggle_label = if task.is_done { "Completed" } else { "Mark Done" };
                        let due = task.due_date.clone().unwrap_or_else(|| "No date".to_string());
                        let task_id = task.id;
                        let task_for_toggle = task.clone();

                        view! {
                            <div class=row_class>
                                <div class="task-info">
                                    <div class="task-heading">
                                        <h3 class=title_class>{task.title.clone()}</h3>
                                        <span class=priority_class>{task.priority.as_str()}</span>
                                    </div>
                                    <p class="task-due">"Due: " {due}</p>
                                </div>
                                <div class="task-actions">
                                    <button
                                        class="toggle-btn"
                                        on:click=move |_| on_toggle.run(task_for_toggle.clone())
                                    >
                                        {toggle_label}
                                    </button>
                                    <button
                                        class="delete-link"
                                        on:click=move |_| on_delete.run(task_id)
                                    >
                                        "Delete"
                                    </button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
