//! Confirm Modal Component
//!
//! Blocking confirmation dialog for destructive actions. No request is
//! issued until the user confirms; the backdrop cancels.

use leptos::prelude::*;

#[component]
pub fn ConfirmModal(
    #[prop(into)] message: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal-overlay">
            <div class="modal-backdrop" on:click=move |_| on_cancel.run(())></div>
            <div class="modal">
                <p class="modal-title">"Are you sure?"</p>
                <p class="modal-message">{message}</p>
                <div class="modal-actions">
                    <button class="cancel-btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="danger-btn" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
