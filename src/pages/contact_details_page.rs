//! Contact Details Page
//!
//! One contact's card with edit form, confirmed deletion, and its task
//! list (create, toggle done, delete, client-side filters).

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::components::{ConfirmModal, ContactForm, TaskForm, TaskList};
use crate::context::{AppContext, Screen};
use crate::models::{Contact, ContactStatus, Task, TaskPriority};
use crate::query::{filter_tasks, TaskStatusFilter};
use crate::store::{
    store_insert_task, store_remove_task, store_update_task, use_app_store, AppStateStoreFields,
};

/// Which destructive action is awaiting confirmation
#[derive(Clone, Copy, PartialEq)]
enum PendingDelete {
    Contact,
    Task(u32),
}

#[component]
pub fn ContactDetailsPage(contact_id: u32) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (contact, set_contact) = signal::<Option<Contact>>(None);
    let (is_loading, set_is_loading) = signal(true);
    let (is_error, set_is_error) = signal(false);
    let (is_editing, set_is_editing) = signal(false);
    let (show_task_form, set_show_task_form) = signal(false);
    let (status_filter, set_status_filter) = signal(TaskStatusFilter::All);
    let (priority_filter, set_priority_filter) = signal::<Option<TaskPriority>>(None);
    let (pending_delete, set_pending_delete) = signal::<Option<PendingDelete>>(None);

    // Load the contact and its tasks on mount.
    Effect::new(move |_| {
        set_is_loading.set(true);
        spawn_local(async move {
            let loaded = async {
                let contact = api::get_contact(contact_id).await?;
                let tasks = api::list_tasks(contact_id).await?;
                Ok::<_, ApiError>((contact, tasks))
            }
            .await;
            match loaded {
                Ok((fetched_contact, fetched_tasks)) => {
                    web_sys::console::log_1(
                        &format!(
                            "[DETAILS] Loaded contact {} with {} tasks",
                            contact_id,
                            fetched_tasks.len()
                        )
                        .into(),
                    );
                    set_contact.set(Some(fetched_contact));
                    *store.tasks().write() = fetched_tasks;
                }
                Err(ApiError::Unauthorized) => ctx.session_expired(),
                Err(_) => set_is_error.set(true),
            }
            set_is_loading.set(false);
        });
    });

    let on_edited = Callback::new(move |updated: Contact| {
        set_contact.set(Some(updated));
        set_is_editing.set(false);
        ctx.notify_success("Contact updated");
    });

    let on_task_created = Callback::new(move |created: Task| {
        store_insert_task(&store, created);
        set_show_task_form.set(false);
        ctx.notify_success("Task added");
    });

    let on_toggle = Callback::new(move |task: Task| {
        spawn_local(async move {
            match api::set_task_done(task.id, !task.is_done).await {
                Ok(updated) => store_update_task(&store, updated),
                Err(ApiError::Unauthorized) => ctx.session_expired(),
                Err(err) => ctx.notify_error(err.notification()),
            }
        });
    });

    let on_task_delete = Callback::new(move |task_id: u32| {
        set_pending_delete.set(Some(PendingDelete::Task(task_id)));
    });

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(pending) = pending_delete.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match pending {
                PendingDelete::Contact => match api::delete_contact(contact_id).await {
                    Ok(()) => {
                        ctx.notify_success("Contact deleted");
                        ctx.navigate(Screen::Contacts);
                    }
                    Err(ApiError::Unauthorized) => ctx.session_expired(),
                    Err(err) => ctx.notify_error(err.notification()),
                },
                PendingDelete::Task(task_id) => match api::delete_task(task_id).await {
                    Ok(()) => store_remove_task(&store, task_id),
                    Err(ApiError::Unauthorized) => ctx.session_expired(),
                    Err(err) => ctx.notify_error(err.notification()),
                },
            }
            set_pending_delete.set(None);
        });
    });

    let filtered_tasks = Signal::derive(move || {
        filter_tasks(&store.tasks().get(), status_filter.get(), priority_filter.get())
    });

    view! {
        <div class="page">
            <div class="page-header">
                <button class="view-link" on:click=move |_| ctx.navigate(Screen::Contacts)>
                    "← Back to Contacts"
                </button>
                <Show when=move || contact.read().is_some()>
                    <div class="header-actions">
                        <button
                            class="secondary-btn"
                            on:click=move |_| set_is_editing.update(|editing| *editing = !*editing)
                        >
                            {move || if is_editing.get() { "Cancel" } else { "Edit Contact" }}
                        </button>
                        <button
                            class="danger-btn"
                            on:click=move |_| set_pending_delete.set(Some(PendingDelete::Contact))
                        >
                            "Delete Contact"
                        </button>
                    </div>
                </Show>
            </div>

            {move || {
                if is_loading.get() {
                    return view! { <div class="empty-state">"Loading contact details..."</div> }
                        .into_any();
                }
                let Some(current) = contact.get() else {
                    return view! {
                        <div class="empty-state">
                            <p class="error-text">
                                {if is_error.get() { "Failed to load contact." } else { "Contact not found." }}
                            </p>
                        </div>
                    }
                    .into_any();
                };
                if is_editing.get() {
                    view! { <ContactForm initial=current on_saved=on_edited /> }.into_any()
                } else {
                    let status_class = match current.status {
                        ContactStatus::Active => "status-badge active",
                        ContactStatus::Inactive => "status-badge inactive",
                    };
                    view! {
                        <div class="contact-card">
                            <div class="contact-card-header">
                                <div>
                                    <h1>{current.full_name.clone()}</h1>
                                    <p class="contact-id">"Contact ID: " {current.id}</p>
                                </div>
                                <span class=status_class>{current.status.as_str()}</span>
                            </div>
                            <div class="contact-card-fields">
                                <div>
                                    <p class="field-label">"Email"</p>
                                    <p>{current.email.clone().unwrap_or_else(|| "—".to_string())}</p>
                                </div>
                                <div>
                                    <p class="field-label">"Phone"</p>
                                    <p>{current.phone.clone().unwrap_or_else(|| "—".to_string())}</p>
                                </div>
                                <div>
                                    <p class="field-label">"Open Tasks"</p>
                                    <p class="open-tasks">{current.open_tasks_count}</p>
                                </div>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}

            <Show when=move || contact.read().is_some()>
                <div class="page-header">
                    <h2>"Tasks"</h2>
                    <button
                        class="primary-btn"
                        on:click=move |_| set_show_task_form.update(|show| *show = !*show)
                    >
                        {move || if show_task_form.get() { "Cancel" } else { "+ Add Task" }}
                    </button>
                </div>

                <Show when=move || show_task_form.get()>
                    <TaskForm contact_id=contact_id on_saved=on_task_created />
                </Show>

                <div class="filter-bar">
                    <select on:change=move |ev| {
                        set_status_filter.set(TaskStatusFilter::from_param(&event_target_value(&ev)));
                    }>
                        <option value="">"All Tasks"</option>
                        <option value="pending">"Pending"</option>
                        <option value="done">"Completed"</option>
                    </select>
                    <select on:change=move |ev| {
                        set_priority_filter.set(TaskPriority::from_param(&event_target_value(&ev)));
                    }>
                        <option value="">"All Priorities"</option>
                        <option value="low">"Low"</option>
                        <option value="medium">"Medium"</option>
                        <option value="high">"High"</option>
                    </select>
                </div>

                <TaskList tasks=filtered_tasks on_toggle=on_toggle on_delete=on_task_delete />
            </Show>

            {move || {
                pending_delete.get().map(|pending| {
                    let message = match pending {
                        PendingDelete::Contact => {
                            "Delete this contact and all their tasks?".to_string()
                        }
                        PendingDelete::Task(_) => "Delete this task?".to_string(),
                    };
                    view! {
                        <ConfirmModal
                            message=message
                            on_confirm=confirm_delete
                            on_cancel=Callback::new(move |_| set_pending_delete.set(None))
                        />
                    }
                })
            }}
        </div>
    }
}
