pub mod memory;
pub mod remote;

use crate::domain::contact::{Contact, ContactDraft, ContactId};
use crate::errors::AppError;
use crate::helper;

/// The remote collection of contact records, seen as four operations.
pub trait ContactStore {
    fn list(&self) -> Result<Vec<Contact>, AppError>;

    fn create(&self, draft: &ContactDraft) -> Result<Contact, AppError>;

    fn update(&self, id: ContactId, draft: &ContactDraft) -> Result<Contact, AppError>;

    fn delete(&self, id: ContactId) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

#[derive(Debug)]
pub enum StoreChoice {
    Remote,
    Mem,
}

impl StoreChoice {
    pub fn from(str: &str) -> Result<Self, AppError> {
        match str {
            "remote" => Ok(StoreChoice::Remote),
            "mem" => Ok(StoreChoice::Mem),
            _ => Err(AppError::Validation(
                "Not a recognized store backend".to_string(),
            )),
        }
    }
}

/// Resolves the backend to use: explicit choice first, then the
/// `STORE_CHOICE` env value, defaulting to remote.
pub fn parse_store(
    choice: Option<StoreChoice>,
    base_url: Option<&str>,
) -> Result<Box<dyn ContactStore>, AppError> {
    let choice = match choice {
        Some(choice) => choice,
        None => {
            let value = helper::get_env_value_or("STORE_CHOICE", "remote");
            StoreChoice::from(&value)?
        }
    };

    match choice {
        StoreChoice::Remote => match base_url {
            Some(base) => Ok(Box::new(remote::RemoteStore::with_base_url(base)?)),
            None => Ok(Box::new(remote::RemoteStore::new()?)),
        },
        StoreChoice::Mem => Ok(Box::new(memory::MemStore::default())),
    }
}
