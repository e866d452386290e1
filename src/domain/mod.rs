pub mod contact;
pub mod controller;
pub mod form;
pub mod state;

pub use contact::{Contact, ContactDraft, ContactId};
pub use controller::{Action, Controller, Field};
pub use form::ContactForm;
pub use state::AppState;
