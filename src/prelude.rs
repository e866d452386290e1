pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::{Contact, ContactDraft, ContactId},
    controller::{Action, Controller, Field},
    form::ContactForm,
    state::AppState,
};
pub use crate::errors::AppError;
pub use crate::storage::{memory::MemStore, parse_store, remote::RemoteStore, ContactStore};
