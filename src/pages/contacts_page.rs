//! Contacts Page
//!
//! Searchable, filterable, sortable contact list with inline creation
//! and confirmed deletion. Refetches whenever a query parameter changes;
//! any non-page parameter change resets to the first page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::components::{ConfirmModal, ContactForm};
use crate::context::{AppContext, Screen};
use crate::models::{Contact, ContactStatus};
use crate::query::{ContactOrdering, ContactQuery, CONTACT_ORDERINGS};
use crate::store::{store_insert_contact, store_remove_contact, use_app_store, AppStateStoreFields};

#[component]
pub fn ContactsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal::<Option<ContactStatus>>(None);
    let (ordering, set_ordering) = signal(ContactOrdering::NewestFirst);
    let (page, set_page) = signal(1u32);
    let (total_count, set_total_count) = signal(0u32);
    let (has_next, set_has_next) = signal(false);
    let (has_previous, set_has_previous) = signal(false);
    let (is_loading, set_is_loading) = signal(true);
    let (is_error, set_is_error) = signal(false);
    let (show_add_form, set_show_add_form) = signal(false);
    let (pending_delete, set_pending_delete) = signal::<Option<Contact>>(None);

    // Fetch whenever search, filter, ordering, or page changes. No
    // cancellation of in-flight requests: last response wins.
    Effect::new(move |_| {
        let query = ContactQuery {
            search: search.get(),
            status: status_filter.get(),
            ordering: ordering.get(),
            page: page.get(),
        };
        set_is_loading.set(true);
        spawn_local(async move {
            match api::list_contacts(&query).await {
                Ok(fetched) => {
                    web_sys::console::log_1(
                        &format!("[CONTACTS] Loaded {} of {}", fetched.results.len(), fetched.count)
                            .into(),
                    );
                    set_total_count.set(fetched.count);
                    set_has_next.set(fetched.next.is_some());
                    set_has_previous.set(fetched.previous.is_some());
                    *store.contacts().write() = fetched.results;
                    set_is_error.set(false);
                }
                Err(ApiError::Unauthorized) => ctx.session_expired(),
                Err(_) => set_is_error.set(true),
            }
            set_is_loading.set(false);
        });
    });

    let on_created = Callback::new(move |created: Contact| {
        store_insert_contact(&store, created);
        set_show_add_form.set(false);
        ctx.notify_success("Contact created");
    });

    let confirm_delete = Callback::new(move |_: ()| {
        let Some(contact) = pending_delete.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::delete_contact(contact.id).await {
                Ok(()) => {
                    store_remove_contact(&store, contact.id);
                    ctx.notify_success("Contact deleted");
                }
                Err(ApiError::Unauthorized) => ctx.session_expired(),
                Err(err) => ctx.notify_error(err.notification()),
            }
            set_pending_delete.set(None);
        });
    });

    let contacts = store.contacts();

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Contacts"</h1>
                <button
                    class="primary-btn"
                    on:click=move |_| set_show_add_form.update(|show| *show = !*show)
                >
                    {move || if show_add_form.get() { "Cancel" } else { "+ New Contact" }}
                </button>
            </div>

            <Show when=move || show_add_form.get()>
                <ContactForm on_saved=on_created />
            </Show>

            <div class="filter-bar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search by name, phone, or email..."
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        set_page.set(1);
                        set_search.set(event_target_value(&ev));
                    }
                />
                <select on:change=move |ev| {
                    set_page.set(1);
                    set_status_filter.set(ContactStatus::from_param(&event_target_value(&ev)));
                }>
                    <option value="">"All Status"</option>
                    <option value="active">"Active"</option>
                    <option value="inactive">"Inactive"</option>
                </select>
                <select on:change=move |ev| {
                    if let Some(parsed) = ContactOrdering::from_param(&event_target_value(&ev)) {
                        set_page.set(1);
                        set_ordering.set(parsed);
                    }
                }>
                    {CONTACT_ORDERINGS
                        .iter()
                        .map(|choice| {
                            view! { <option value=choice.as_param()>{choice.label()}</option> }
                        })
                        .collect_view()}
                </select>
            </div>

            <Show when=move || is_error.get()>
                <div class="error-banner">
                    "Failed to connect to the server. Make sure the backend is running."
                </div>
            </Show>

            {move || {
                if is_loading.get() {
                    view! { <div class="empty-state">"Loading contacts..."</div> }.into_any()
                } else if contacts.get().is_empty() {
                    view! {
                        <div class="empty-state">
                            <p>"No contacts found"</p>
                            <p class="empty-hint">"Add your first contact to get started"</p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <table class="contact-table">
                            <thead>
                                <tr>
                                    <th>"Name"</th>
                                    <th>"Phone"</th>
                                    <th>"Email"</th>
                                    <th>"Status"</th>
                                    <th>"Open Tasks"</th>
                                    <th class="actions-col">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || contacts.get()
                                    key=|contact| contact.id
                                    children=move |contact| {
                                        let id = contact.id;
                                        let status_class = match contact.status {
                                            ContactStatus::Active => "status-badge active",
                                            ContactStatus::Inactive => "status-badge inactive",
                                        };
                                        let for_delete = contact.clone();
                                        view! {
                                            <tr>
                                                <td class="contact-name">{contact.full_name.clone()}</td>
                                                <td>{contact.phone.clone().unwrap_or_else(|| "—".to_string())}</td>
                                                <td>{contact.email.clone().unwrap_or_else(|| "—".to_string())}</td>
                                                <td>
                                                    <span class=status_class>{contact.status.as_str()}</span>
                                                </td>
                                                <td>{contact.open_tasks_count}</td>
                                                <td class="actions-col">
                                                    <button
                                                        class="view-link"
                                                        on:click=move |_| ctx.navigate(Screen::ContactDetails(id))
                                                    >
                                                        "View"
                                                    </button>
                                                    <button
                                                        class="delete-link"
                                                        on:click=move |_| set_pending_delete.set(Some(for_delete.clone()))
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    }
                    .into_any()
                }
            }}

            <Show when=move || has_next.get() || has_previous.get()>
                <div class="pagination">
                    <button
                        disabled=move || !has_previous.get()
                        on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
                    >
                        "Previous"
                    </button>
                    <span>{move || format!("Page {} · {} contacts", page.get(), total_count.get())}</span>
                    <button
                        disabled=move || !has_next.get()
                        on:click=move |_| set_page.update(|p| *p += 1)
                    >
                        "Next"
                    </button>
                </div>
            </Show>

            {move || {
                pending_delete.get().map(|contact| {
                    let message = format!(
                        "Delete {} and all their tasks? This cannot be undone.",
                        contact.full_name
                    );
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
