//! REST API Client
//!
//! Typed wrappers over browser fetch for the CRM backend. Authenticated
//! calls attach `Authorization: Bearer <access>` from session storage.
//! No retries and no cancellation: when requests overlap, the last
//! response to resolve wins.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::models::{Contact, ContactStatus, Listing, Page, Task, TaskPriority, TokenPair};
use crate::query::ContactQuery;
use crate::session;

pub const API_URL: &str = "http://127.0.0.1:8000";

/// Tasks for one contact are fetched as a single page so the client-side
/// filters see the full set.
const TASK_PAGE_SIZE: u32 = 100;

/// Failure taxonomy for a single request. Every failure is terminal for
/// the triggering action; the user re-initiates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("could not reach the server")]
    Network,
    #[error("authentication required")]
    Unauthorized,
    #[error("validation failed")]
    Validation(Vec<(String, String)>),
    #[error("server returned status {0}")]
    Status(u16),
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// User-facing notification text.
    pub fn notification(&self) -> String {
        match self {
            ApiError::Network => {
                "Could not reach the server. Check that the backend is running.".to_string()
            }
            ApiError::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            ApiError::Validation(errors) => errors
                .iter()
                .map(|(field, message)| format!("{field}: {message}"))
                .collect::<Vec<_>>()
                .join(" "),
            ApiError::Status(status) => format!("Request failed (HTTP {status})."),
            ApiError::Decode(_) => "The server sent an unexpected response.".to_string(),
        }
    }
}

/// Parse a DRF error body: an object mapping field names to message
/// arrays (or single strings). Returns None for anything else.
fn parse_field_errors(body: &str) -> Option<Vec<(String, String)>> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;
    let mut errors = Vec::new();
    for (field, messages) in object {
        match messages {
            serde_json::Value::Array(items) => {
                for item in items {
                    if let Some(message) = item.as_str() {
                        errors.push((field.clone(), message.to_string()));
                    }
                }
            }
            serde_json::Value::String(message) => {
                errors.push((field.clone(), message.clone()));
            }
            _ => {}
        }
    }
    if errors.is_empty() {
        None
    } else {
        Some(errors)
    }
}

// ========================
// Fetch Plumbing
// ========================

async fn send(method: &str, path: &str, body: Option<String>, auth: bool) -> Result<Response, ApiError> {
    let headers = Headers::new().map_err(|_| ApiError::Network)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|_| ApiError::Network)?;
    if auth {
        // A missing token short-circuits without issuing the request.
        let token = session::access_token().ok_or(ApiError::Unauthorized)?;
        headers
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(|_| ApiError::Network)?;
    }

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_headers(&headers);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let url = format!("{API_URL}{path}");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|_| ApiError::Network)?;
    let window = web_sys::window().ok_or(ApiError::Network)?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| ApiError::Network)?;
    let response: Response = response.dyn_into().map_err(|_| ApiError::Network)?;

    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    web_sys::console::warn_1(&format!("[API] {method} {path} -> {status}").into());
    match status {
        401 => Err(ApiError::Unauthorized),
        400 => {
            let body = response_text(&response).await.unwrap_or_default();
            match parse_field_errors(&body) {
                Some(errors) => Err(ApiError::Validation(errors)),
                None => Err(ApiError::Status(400)),
            }
        }
        status => Err(ApiError::Status(status)),
    }
}

async fn response_text(response: &Response) -> Result<String, ApiError> {
    let promise = response.text().map_err(|_| ApiError::Network)?;
    let text = JsFuture::from(promise).await.map_err(|_| ApiError::Network)?;
    Ok(text.as_string().unwrap_or_default())
}

async fn fetch_json<T: DeserializeOwned>(
    method: &str,
    path: &str,
    body: Option<String>,
    auth: bool,
) -> Result<T, ApiError> {
    let response = send(method, path, body, auth).await?;
    let text = response_text(&response).await?;
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<T: Serialize>(payload: &T) -> Result<String, ApiError> {
    serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))
}

// ========================
// Request Payloads
// ========================

#[derive(Serialize)]
struct LoginPayload<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
pub struct ContactPayload<'a> {
    pub full_name: &'a str,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub status: ContactStatus,
}

#[derive(Serialize)]
pub struct TaskPayload<'a> {
    pub contact: u32,
    pub title: &'a str,
    pub due_date: Option<&'a str>,
    pub priority: TaskPriority,
}

#[derive(Serialize)]
struct TaskDonePatch {
    is_done: bool,
}

// ========================
// Auth
// ========================

pub async fn login(username: &str, password: &str) -> Result<TokenPair, ApiError> {
    let body = encode(&LoginPayload { username, password })?;
    fetch_json("POST", "/api/token/", Some(body), false).await
}

// ========================
// Contacts
// ========================

pub async fn list_contacts(query: &ContactQuery) -> Result<Page<Contact>, ApiError> {
    let path = format!("/api/contacts/?{}", query.to_query_string());
    let listing: Listing<Contact> = fetch_json("GET", &path, None, true).await?;
    Ok(listing.into_page())
}

pub async fn get_contact(id: u32) -> Result<Contact, ApiError> {
    fetch_json("GET", &format!("/api/contacts/{id}/"), None, true).await
}

pub async fn create_contact(payload: &ContactPayload<'_>) -> Result<Contact, ApiError> {
    let body = encode(payload)?;
    fetch_json("POST", "/api/contacts/", Some(body), true).await
}

pub async fn update_contact(id: u32, payload: &ContactPayload<'_>) -> Result<Contact, ApiError> {
    let body = encode(payload)?;
    fetch_json("PATCH", &format!("/api/contacts/{id}/"), Some(body), true).await
}

pub async fn delete_contact(id: u32) -> Result<(), ApiError> {
    send("DELETE", &format!("/api/contacts/{id}/"), None, true).await?;
    Ok(())
}

// ========================
// Tasks
// ========================

pub async fn list_tasks(contact_id: u32) -> Result<Vec<Task>, ApiError> {
    let path = format!("/api/tasks/?contact_id={contact_id}&page_size={TASK_PAGE_SIZE}");
    let listing: Listing<Task> = fetch_json("GET", &path, None, true).await?;
    Ok(listing.into_page().results)
}

pub async fn create_task(payload: &TaskPayload<'_>) -> Result<Task, ApiError> {
    let body = encode(payload)?;
    fetch_json("POST", "/api/tasks/", Some(body), true).await
}

pub async fn set_task_done(id: u32, is_done: bool) -> Result<Task, ApiError> {
    let body = encode(&TaskDonePatch { is_done })?;
    fetch_json("PATCH", &format!("/api/tasks/{id}/"), Some(body), true).await
}

pub async fn delete_task(id: u32) -> Result<(), ApiError> {
    send("DELETE", &format!("/api/tasks/{id}/"), None, true).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_arrays_are_flattened() {
        let body = r#"{"full_name":["Ensure this field has at least 3 characters."],
                       "phone":["Phone must be numeric with optional leading +"]}"#;
        let errors = parse_field_errors(body).unwrap();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].0, "full_name");
        assert_eq!(errors[0].1, "Ensure this field has at least 3 characters.");
    }

    #[test]
    fn detail_string_is_recognized() {
        let errors = parse_field_errors(r#"{"detail":"Not found."}"#).unwrap();
        assert_eq!(errors, vec![("detail".to_string(), "Not found.".to_string())]);
    }

    #[test]
    fn non_object_bodies_yield_none() {
        assert!(parse_field_errors("<html>Server Error</html>").is_none());
        assert!(parse_field_errors(r#"["oops"]"#).is_none());
        assert!(parse_field_errors(r#"{"count":3}"#).is_none());
    }

    #[test]
    fn validation_notification_surfaces_messages_verbatim() {
        let error = ApiError::Validation(vec![(
            "due_date".to_string(),
            "Due date cannot be in the past".to_string(),
        )]);
        assert_eq!(
            error.notification(),
            "due_date: Due date cannot be in the past"
        );
    }

    #[test]
    fn contact_payload_serializes_null_optionals() {
        let payload = ContactPayload {
            full_name: "Ada Lovelace",
            phone: None,
            email: Some("ada@example.com"),
            status: ContactStatus::Active,
        };
        let json: serde_json::Value = serde_json::from_str(&encode(&payload).unwrap()).unwrap();
        assert_eq!(json["full_name"], "Ada Lovelace");
        assert!(json["phone"].is_null());
        assert_eq!(json["status"], "active");
    }
}
