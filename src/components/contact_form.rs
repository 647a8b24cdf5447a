//! Contact Form Component
//!
//! Create and edit form for contacts. With an initial value it PATCHes
//! that contact; without one it POSTs a new contact. On success the
//! server's returned representation is handed to `on_saved`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError, ContactPayload};
use crate::context::AppContext;
use crate::models::{Contact, ContactStatus};

#[component]
pub fn ContactForm(
    #[prop(into, optional)] initial: Option<Contact>,
    #[prop(into)] on_saved: Callback<Contact>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let contact_id = initial.as_ref().map(|contact| contact.id);
    let (full_name, set_full_name) = signal(
        initial.as_ref().map(|c| c.full_name.clone()).unwrap_or_default(),
    );
    let (phone, set_phone) = signal(
        initial.as_ref().and_then(|c| c.phone.clone()).unwrap_or_default(),
    );
    let (email, set_email) = signal(
        initial.as_ref().and_then(|c| c.email.clone()).unwrap_or_default(),
    );
    let (status, set_status) = signal(
        initial.as_ref().map(|c| c.status).unwrap_or(ContactStatus::Active),
    );

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = full_name.get();
        if name.trim().is_empty() {
            return;
        }
        let phone_value = phone.get();
        let email_value = email.get();
        let status_value = status.get();

        spawn_local(async move {
            let payload = ContactPayload {
                full_name: &name,
                phone: (!phone_value.is_empty()).then_some(phone_value.as_str()),
                email: (!email_value.is_empty()).then_some(email_value.as_str()),
                status: status_value,
            };
            let result = match contact_id {
                Some(id) => api::update_contact(id, &payload).await,
                None => api::create_contact(&payload).await,
            };
            match result {
                Ok(saved) => {
                    if contact_id.is_none() {
                        set_full_name.set(String::new());
                        set_phone.set(String::new());
                        set_email.set(String::new());
                        set_status.set(ContactStatus::Active);
                    }
                    on_saved.run(saved);
                }
                Err(ApiError::Unauthorized) => ctx.session_expired(),
                Err(err) => ctx.notify_error(err.notification()),
            }
        });
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <h2>{if contact_id.is_some() { "Edit Contact" } else { "New Contact" }}</h2>
            <div class="form-grid">
                <input
                    type="text"
                    placeholder="Full Name *"
                    required
                    prop:value=move || full_name.get()
                    on:input=move |ev| set_full_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Phone"
                    prop:value=move || phone.get()
                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                />
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || status.get().as_str()
                    on:change=move |ev| {
                        if let Some(parsed) = ContactStatus::from_param(&event_target_value(&ev)) {
                            set_status.set(parsed);
                        }
                    }
                >
                    <option value="active">"Active"</option>
                    <option value="inactive">"Inactive"</option>
                </select>
            </div>
            <button type="submit" class="primary-btn">
                {if contact_id.is_some() { "Save Changes" } else { "Save Contact" }}
            </button>
        </form>
    }
}
