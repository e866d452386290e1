use reqwest::blocking;
use url::Url;

use super::{Contact, ContactDraft, ContactId, ContactStore};
use crate::errors::AppError;
use crate::helper;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Client for the remote contact collection: a fixed REST resource exposing
/// list/create/update/delete on `/users` with JSON bodies.
///
/// Non-success statuses are turned into errors here rather than being parsed
/// as contact data; the response body of a delete is ignored entirely.
pub struct RemoteStore {
    pub medium: String,
    base_url: String,
    client: blocking::Client,
}

impl RemoteStore {
    /// Builds a client against `REMOTE_STORE_URL` from the environment (or
    /// `.env`), falling back to the public placeholder backend.
    pub fn new() -> Result<Self, AppError> {
        let base = helper::get_env_value_or("REMOTE_STORE_URL", DEFAULT_BASE_URL);
        Self::with_base_url(&base)
    }

    pub fn with_base_url(base: &str) -> Result<Self, AppError> {
        // Reject unparseable bases up front instead of on the first request
        Url::parse(base)?;

        Ok(Self {
            medium: "remote".to_string(),
            base_url: base.trim_end_matches('/').to_string(),
            client: blocking::Client::new(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn member_url(&self, id: ContactId) -> String {
        format!("{}/users/{}", self.base_url, id)
    }
}

impl ContactStore for RemoteStore {
    fn get_medium(&self) -> &str {
        &self.medium
    }

    fn list(&self) -> Result<Vec<Contact>, AppError> {
        let response = self.client.get(self.collection_url()).send()?;

        let response = response.error_for_status()?;
        let contacts: Vec<Contact> = serde_json::from_str(&response.text()?)?;
        Ok(contacts)
    }

    fn create(&self, draft: &ContactDraft) -> Result<Contact, AppError> {
        let response = self
            .client
            .post(self.collection_url())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(draft)?)
            .send()?;

        let response = response.error_for_status()?;
        let created: Contact = serde_json::from_str(&response.text()?)?;
        Ok(created)
    }

    fn update(&self, id: ContactId, draft: &ContactDraft) -> Result<Contact, AppError> {
        let response = self
            .client
            .put(self.member_url(id))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(draft)?)
            .send()?;

        let response = response.error_for_status()?;
        let updated: Contact = serde_json::from_str(&response.text()?)?;
        Ok(updated)
    }

    fn delete(&self, id: ContactId) -> Result<(), AppError> {
        let response = self.client.delete(self.member_url(id)).send()?;

        // Body deliberately ignored; only the status matters
        response.error_for_status()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{mock, server_url, Matcher};

    // Each test uses its own path prefix so mocks registered on the shared
    // server cannot shadow one another across parallel tests.
    fn store_at(prefix: &str) -> RemoteStore {
        RemoteStore::with_base_url(&format!("{}/{}", server_url(), prefix)).unwrap()
    }

    #[test]
    fn list_fetches_contacts_in_response_order() {
        let listing = r#"
        [
            {"id":1,"name":"Leanne","phone":"1-770-736-8031","email":"leanne@april.biz"},
            {"id":2,"name":"Ervin","phone":"010-692-6593","email":"ervin@melissa.tv"},
            {"id":3,"name":"Clementine","phone":"1-463-123-4447","email":"clem@yesenia.net"}
        ]
        "#;

        let _m = mock("GET", "/list/users")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(listing)
            .create();

        let contacts = store_at("list").list().unwrap();

        assert_eq!(contacts.len(), 3);
        assert_eq!(contacts[0].id, Some(1));
        assert_eq!(contacts[1].name, "Ervin");
        assert_eq!(contacts[2].email, "clem@yesenia.net");
    }

    #[test]
    fn create_posts_draft_and_returns_assigned_id() {
        let m = mock("POST", "/create/users")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({
                "name": "Ann",
                "phone": "123",
                "email": "a@x.com"
            })))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":11,"name":"Ann","phone":"123","email":"a@x.com"}"#)
            .create();

        let created = store_at("create")
            .create(&ContactDraft::new("Ann", "123", "a@x.com"))
            .unwrap();

        assert_eq!(created.id, Some(11));
        assert_eq!(created.name, "Ann");
        m.assert();
    }

    #[test]
    fn update_puts_to_the_member_path() {
        let m = mock("PUT", "/update/users/1")
            .match_body(Matcher::Json(serde_json::json!({
                "name": "Ann",
                "phone": "999",
                "email": "a@x.com"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":1,"name":"Ann","phone":"999","email":"a@x.com"}"#)
            .create();

        let updated = store_at("update")
            .update(1, &ContactDraft::new("Ann", "999", "a@x.com"))
            .unwrap();

        assert_eq!(updated.phone, "999");
        m.assert();
    }

    #[test]
    fn delete_ignores_the_response_body() {
        let _m = mock("DELETE", "/delete/users/7")
            .with_status(200)
            .with_body(r#"{"whatever":"the server says"}"#)
            .create();

        assert!(store_at("delete").delete(7).is_ok());
    }

    #[test]
    fn non_success_status_is_an_error() {
        let _m = mock("GET", "/failing/users").with_status(500).create();

        let result = store_at("failing").list();
        assert!(result.is_err());
    }

    #[test]
    fn error_body_is_not_mistaken_for_a_contact() {
        let _m = mock("POST", "/errbody/users")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"bad request"}"#)
            .create();

        let result = store_at("errbody").create(&ContactDraft::new("Ann", "123", "a@x.com"));
        assert!(matches!(result, Err(AppError::Http(_))));
    }

    #[test]
    fn rejects_unparseable_base_url() {
        assert!(RemoteStore::with_base_url("not a url").is_err());
        assert!(RemoteStore::with_base_url(DEFAULT_BASE_URL).is_ok());
    }
}
