use super::contact::{Contact, ContactDraft};
use crate::validation::{filter_email, filter_name, filter_phone};

/// The three edit-form field buffers.
///
/// Typed input goes through the matching character filter; copying an
/// existing contact in for editing does not, so a stored value round-trips
/// exactly as the store holds it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    phone: String,
    email: String,
}

impl ContactForm {
    pub fn set_name(&mut self, input: &str) {
        self.name = filter_name(input);
    }

    pub fn set_phone(&mut self, input: &str) {
        self.phone = filter_phone(input);
    }

    pub fn set_email(&mut self, input: &str) {
        self.email = filter_email(input);
    }

    /// Copies a contact's fields into the form verbatim. The filters apply
    /// to keystrokes only; stored values must not be rewritten by an edit.
    pub fn mirror(&mut self, contact: &Contact) {
        self.name = contact.name.clone();
        self.phone = contact.phone.clone();
        self.email = contact.email.clone();
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.phone.clear();
        self.email.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.phone.is_empty() && self.email.is_empty()
    }

    /// The request body the current field values produce.
    pub fn draft(&self) -> ContactDraft {
        ContactDraft::new(&self.name, &self.phone, &self.email)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}
