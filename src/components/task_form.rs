//! Task Form Component
//!
//! Form for attaching a new task to a contact. Due date is optional and
//! sent as null when left empty.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError, TaskPayload};
use crate::context::AppContext;
use crate::models::{Task, TaskPriority};

#[component]
pub fn TaskForm(contact_id: u32, #[prop(into)] on_saved: Callback<Task>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());
    let (priority, set_priority) = signal(TaskPriority::Medium);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get();
        if title_value.trim().is_empty() {
            return;
        }
        let due_value = due_date.get();
        let priority_value = priority.get();

        spawn_local(async move {
            let payload = TaskPayload {
                contact: contact_id,
                title: &title_value,
                due_date: (!due_value.is_empty()).then_some(due_value.as_str()),
                priority: priority_value,
            };
            match api::create_task(&payload).await {
                Ok(created) => {
                    set_title.set(String::new());
                    set_due_date.set(String::new());
                    set_priority.set(TaskPriority::Medium);
                    on_saved.run(created);
                }
                Err(ApiError::Unauthorized) => ctx.session_expired(),
                Err(err) => ctx.notify_error(err.notification()),
            }
        });
    };

    view! {
        <form class="task-form" on:submit=on_submit>
            <div class="form-grid">
                <input
                    type="text"
                    placeholder="Task title *"
                    required
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || due_date.get()
                    on:input=move |ev| set_due_date.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || priority.get().as_str()
                    on:change=move |ev| {
                        if let Some(parsed) = TaskPriority::from_param(&event_target_value(&ev)) {
                            set_priority.set(parsed);
                        }
                    }
                >
                    <option value="low">"Low"</option>
                    <option value="medium">"Medium"</option>
                    <option value="high">"High"</option>
                </select>
            </div>
            <button type="submit" class="primary-btn">"Save Task"</button>
        </form>
    }
}
