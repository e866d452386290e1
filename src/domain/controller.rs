use tracing::{debug, warn};

use super::contact::ContactId;
use super::state::AppState;
use crate::storage::ContactStore;

/// Which form field an input event targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
}

/// The events the controller reacts to. One action corresponds to one user
/// gesture: typing into a field, pressing the add/update button, clicking
/// edit or remove on a row, or the initial page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Load,
    Input(Field, String),
    BeginEdit(ContactId),
    Submit,
    Remove(ContactId),
}

/// Owns the application state and the store handle, and is the only thing
/// that mutates either. Actions are processed to completion one at a time,
/// so two store calls can never interleave their state updates.
///
/// Store failures follow the silent-failure policy: log to the diagnostic
/// channel, leave state untouched, surface nothing else. No retries.
pub struct Controller {
    state: AppState,
    store: Box<dyn ContactStore>,
}

impl Controller {
    pub fn new(store: Box<dyn ContactStore>) -> Self {
        Controller {
            state: AppState::default(),
            store,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Load => self.load(),
            Action::Input(Field::Name, text) => self.state.form.set_name(&text),
            Action::Input(Field::Phone, text) => self.state.form.set_phone(&text),
            Action::Input(Field::Email, text) => self.state.form.set_email(&text),
            Action::BeginEdit(id) => {
                if !self.state.begin_edit(id) {
                    // Unknown id is a no-op, not an error
                    debug!("edit requested for unknown contact {id}");
                }
            }
            Action::Submit => match self.state.editing {
                Some(id) => self.update(id),
                None => self.create(),
            },
            Action::Remove(id) => self.remove(id),
        }
    }

    fn load(&mut self) {
        match self.store.list() {
            Ok(contacts) => self.state.reconcile_listing(contacts),
            Err(err) => warn!("error fetching contacts: {err}"),
        }
    }

    fn create(&mut self) {
        let draft = self.state.form.draft();
        match self.store.create(&draft) {
            Ok(created) => self.state.reconcile_created(created),
            Err(err) => warn!("error adding contact: {err}"),
        }
    }

    fn update(&mut self, id: ContactId) {
        let draft = self.state.form.draft();
        match self.store.update(id, &draft) {
            Ok(updated) => self.state.reconcile_updated(id, updated),
            Err(err) => warn!("error updating contact {id}: {err}"),
        }
    }

    fn remove(&mut self, id: ContactId) {
        // Removal is optimistic: once the call returns without error the id
        // is dropped locally, whatever the response contained.
        match self.store.delete(id) {
            Ok(()) => self.state.reconcile_removed(id),
            Err(err) => warn!("error removing contact {id}: {err}"),
        }
    }
}
