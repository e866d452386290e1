use std::cell::RefCell;

use super::{Contact, ContactDraft, ContactId, ContactStore};
use crate::errors::AppError;

/// In-memory stand-in for the remote collection. Assigns ids the way the
/// remote side would; state lives only as long as the process.
pub struct MemStore {
    pub medium: String,
    contacts: RefCell<Vec<Contact>>,
    next_id: RefCell<ContactId>,
}

impl Default for MemStore {
    fn default() -> Self {
        Self {
            medium: "mem".to_string(),
            contacts: RefCell::new(Vec::new()),
            next_id: RefCell::new(1),
        }
    }
}

impl MemStore {
    /// A store pre-populated with contacts. Ids continue after the highest
    /// seeded one.
    pub fn seeded(contacts: Vec<Contact>) -> Self {
        let highest = contacts.iter().filter_map(|c| c.id).max().unwrap_or(0);

        Self {
            medium: "mem".to_string(),
            contacts: RefCell::new(contacts),
            next_id: RefCell::new(highest + 1),
        }
    }

    fn assign_id(&self) -> ContactId {
        let mut next = self.next_id.borrow_mut();
        let id = *next;
        *next += 1;
        id
    }
}

impl ContactStore for MemStore {
    fn get_medium(&self) -> &str {
        &self.medium
    }

    fn list(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.contacts.borrow().clone())
    }

    fn create(&self, draft: &ContactDraft) -> Result<Contact, AppError> {
        let contact = Contact {
            id: Some(self.assign_id()),
            name: draft.name.clone(),
            phone: draft.phone.clone(),
            email: draft.email.clone(),
        };

        self.contacts.borrow_mut().push(contact.clone());
        Ok(contact)
    }

    fn update(&self, id: ContactId, draft: &ContactDraft) -> Result<Contact, AppError> {
        let mut contacts = self.contacts.borrow_mut();

        match contacts.iter_mut().find(|c| c.id == Some(id)) {
            Some(entry) => {
                entry.name = draft.name.clone();
                entry.phone = draft.phone.clone();
                entry.email = draft.email.clone();
                Ok(entry.clone())
            }
            None => Err(AppError::NotFound("Contact".to_string())),
        }
    }

    fn delete(&self, id: ContactId) -> Result<(), AppError> {
        // Like the remote side, deleting an absent id is not an error
        self.contacts.borrow_mut().retain(|c| c.id != Some(id));
        Ok(())
    }
}
