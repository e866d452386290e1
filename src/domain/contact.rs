use serde::{Deserialize, Serialize};

/// Identifier assigned by the remote store.
pub type ContactId = u64;

/// A contact as the remote collection represents it.
///
/// The field set is assumed, not guaranteed: the store may return extra fields
/// (ignored) or omit some (defaulted). The id is absent until the creation
/// response arrives and is never serialized while absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ContactId>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub email: String,
}

/// Request body for create and update calls: the three form fields, nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: String, phone: String, email: String) -> Self {
        Contact {
            id: None,
            name,
            phone,
            email,
        }
    }
}

impl ContactDraft {
    pub fn new(name: &str, phone: &str, email: &str) -> Self {
        ContactDraft {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        }
    }
}
