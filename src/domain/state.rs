use super::contact::{Contact, ContactId};
use super::form::ContactForm;

/// The single bundle of mutable state: contact list, form buffers, and the
/// editing cursor. All mutation goes through the reconcile functions below,
/// and only the controller calls them, one confirmed response at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppState {
    pub contacts: Vec<Contact>,
    pub form: ContactForm,
    pub editing: Option<ContactId>,
}

impl AppState {
    pub fn find(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == Some(id))
    }

    /// Replaces the whole list with a fresh listing, order preserved.
    pub fn reconcile_listing(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
    }

    /// Appends the store-returned representation of a created contact and
    /// clears the form.
    pub fn reconcile_created(&mut self, contact: Contact) {
        self.contacts.push(contact);
        self.form.clear();
    }

    /// Replaces the entry the cursor pointed at with the store-returned
    /// representation, then clears form and cursor.
    pub fn reconcile_updated(&mut self, id: ContactId, contact: Contact) {
        for entry in self.contacts.iter_mut() {
            if entry.id == Some(id) {
                *entry = contact.clone();
            }
        }
        self.form.clear();
        self.editing = None;
    }

    /// Drops the id from the list. The store's response content plays no part.
    pub fn reconcile_removed(&mut self, id: ContactId) {
        self.contacts.retain(|c| c.id != Some(id));
    }

    /// Copies the matching contact's fields into the form and sets the cursor.
    /// Returns false (and changes nothing) when the id is not in the list.
    pub fn begin_edit(&mut self, id: ContactId) -> bool {
        let found = match self.find(id) {
            Some(contact) => contact.clone(),
            None => return false,
        };

        self.form.mirror(&found);
        self.editing = Some(id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: ContactId, name: &str, phone: &str, email: &str) -> Contact {
        Contact {
            id: Some(id),
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn listing_replaces_in_order() {
        let mut state = AppState::default();
        state.contacts = vec![contact(9, "Old", "000", "")];

        state.reconcile_listing(vec![
            contact(1, "Ann", "123", "a@x.com"),
            contact(2, "Bob", "456", "b@x.com"),
        ]);

        assert_eq!(state.contacts.len(), 2);
        assert_eq!(state.contacts[0].id, Some(1));
        assert_eq!(state.contacts[1].id, Some(2));
    }

    #[test]
    fn created_appends_and_clears_form() {
        let mut state = AppState::default();
        state.contacts = vec![contact(1, "Ann", "123", "a@x.com")];
        state.form.set_name("Bob");

        state.reconcile_created(contact(2, "Bob", "456", "b@x.com"));

        assert_eq!(state.contacts.len(), 2);
        assert_eq!(state.contacts[1].name, "Bob");
        assert!(state.form.is_empty());
    }

    #[test]
    fn updated_replaces_entry_and_clears_cursor() {
        let mut state = AppState::default();
        state.contacts = vec![
            contact(1, "Ann", "123", "a@x.com"),
            contact(2, "Bob", "456", "b@x.com"),
        ];
        assert!(state.begin_edit(1));

        state.reconcile_updated(1, contact(1, "Ann", "999", "a@x.com"));

        assert_eq!(state.contacts[0].phone, "999");
        assert_eq!(state.contacts[1].phone, "456");
        assert!(state.form.is_empty());
        assert_eq!(state.editing, None);
    }

    #[test]
    fn removed_drops_only_the_target_id() {
        let mut state = AppState::default();
        state.contacts = vec![
            contact(1, "Ann", "123", "a@x.com"),
            contact(2, "Bob", "456", "b@x.com"),
        ];

        state.reconcile_removed(1);

        assert_eq!(state.contacts.len(), 1);
        assert_eq!(state.contacts[0].id, Some(2));
    }

    #[test]
    fn begin_edit_mirrors_fields() {
        let mut state = AppState::default();
        state.contacts = vec![contact(1, "Ann", "123", "a@x.com")];

        assert!(state.begin_edit(1));
        assert_eq!(state.editing, Some(1));
        assert_eq!(state.form.name(), "Ann");
        assert_eq!(state.form.phone(), "123");
        assert_eq!(state.form.email(), "a@x.com");
    }

    #[test]
    fn begin_edit_of_unknown_id_changes_nothing() {
        let mut state = AppState::default();
        state.contacts = vec![contact(1, "Ann", "123", "a@x.com")];
        let before = state.clone();

        assert!(!state.begin_edit(42));
        assert_eq!(state, before);
    }
}
