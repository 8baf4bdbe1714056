//! HTTP request handlers

pub mod api;
pub mod complaints;
pub mod middleware;
pub mod pages;

pub use api::*;
pub use complaints::*;
pub use pages::*;

use crate::services::ComplaintService;
use crate::views::{Language, NavShell};
use askama::Template;
use axum::{
    extract::multipart::MultipartError,
    http::{header, HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use std::sync::Arc;

/// Cookie holding the header language label
pub const LANGUAGE_COOKIE: &str = "mcp_lang";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub complaints: Arc<dyn ComplaintService>,
    pub is_production: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    #[error("Failed to render page: {0}")]
    Render(#[from] askama::Error),

    #[error("Failed to read form upload: {0}")]
    Multipart(#[from] MultipartError),
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        match self {
            PortalError::Render(e) => {
                tracing::error!("Template rendering failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Something went wrong while rendering this page.",
                )
                    .into_response()
            }
            PortalError::Multipart(e) => {
                tracing::warn!("Multipart parsing error: {}", e);
                let message = if e.to_string().contains("length limit") {
                    "Upload too large. Evidence files may be at most 10 MB each."
                } else {
                    "Failed to process the form. Please try again."
                };
                (StatusCode::BAD_REQUEST, message).into_response()
            }
        }
    }
}

/// Render a template into an HTML body
pub fn render<T: Template>(template: &T) -> Result<Html<String>, PortalError> {
    Ok(Html(template.render()?))
}

/// Build the navigation shell for the current request
pub fn nav_shell(uri: &Uri, headers: &HeaderMap) -> NavShell {
    let menu_open = uri
        .query()
        .map(|q| q.split('&').any(|pair| pair == "menu=open"))
        .unwrap_or(false);
    let language = language_from_cookie(headers).unwrap_or_default();

    NavShell::new(uri.path(), language, menu_open)
}

pub fn language_from_cookie(headers: &HeaderMap) -> Option<Language> {
    let cookie_header = headers.get(header::COOKIE)?.to_str().ok()?;

    for cookie in cookie_header.split(';') {
        let cookie = cookie.trim();
        if let Some(value) = cookie.strip_prefix(&format!("{}=", LANGUAGE_COOKIE)) {
            return Some(Language::from_code(value));
        }
    }

    None
}
