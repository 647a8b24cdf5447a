//! Screens
//!
//! One module per screen; each fetches its own data on mount.

mod contact_details_page;
mod contacts_page;
mod login_page;

pub use contact_details_page::ContactDetailsPage;
pub use contacts_page::ContactsPage;
pub use login_page::LoginPage;
