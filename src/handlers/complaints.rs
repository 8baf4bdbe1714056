//! Complaint submission and tracking pages

use crate::models::{Attachment, ComplaintCategory, ComplaintDraft, Priority};
use crate::validation::{validate_attachment, validate_draft};
use crate::views::{NavShell, SubmissionView, TrackingView};
use askama::Template;
use axum::{
    extract::{Multipart, Query, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use std::collections::HashMap;

use super::{nav_shell, render, AppState, PortalError};

// =============================================================================
// Templates
// =============================================================================

#[derive(Template)]
#[template(path = "submit.html")]
struct SubmitFormTemplate {
    shell: NavShell,
    full_name: String,
    phone: String,
    email: String,
    location: String,
    description: String,
    selected_category: &'static str,
    selected_priority: &'static str,
    error: String,
    categories: &'static [ComplaintCategory],
    priorities: &'static [Priority],
}

impl SubmitFormTemplate {
    fn new(shell: NavShell, draft: ComplaintDraft, error: Option<String>) -> Self {
        Self {
            shell,
            full_name: draft.full_name,
            phone: draft.phone,
            email: draft.email.unwrap_or_default(),
            location: draft.location,
            description: draft.description,
            selected_category: draft.category.map(|c| c.value()).unwrap_or_default(),
            selected_priority: draft.priority.map(|p| p.value()).unwrap_or_default(),
            error: error.unwrap_or_default(),
            categories: &ComplaintCategory::ALL,
            priorities: &Priority::ALL,
        }
    }
}

#[derive(Template)]
#[template(path = "submitted.html")]
struct SubmittedTemplate {
    shell: NavShell,
    complaint_id: String,
    attachment_count: usize,
}

#[derive(Template)]
#[template(path = "track.html")]
struct TrackTemplate {
    shell: NavShell,
    /// Value of the search input
    query: String,
    view: TrackingView,
}

// =============================================================================
// Submission
// =============================================================================

/// Blank complaint form
pub async fn submit_form(uri: Uri, headers: HeaderMap) -> Result<Response, PortalError> {
    render_submission(nav_shell(&uri, &headers), SubmissionView::default())
}

/// Accept the complaint form and show the confirmation screen
pub async fn submit_complaint(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Response, PortalError> {
    let shell = nav_shell(&uri, &headers);
    let draft = read_complaint_form(&mut multipart).await?;

    let view = match validate_draft(&draft) {
        Err(e) => {
            tracing::info!(field = ?e.field(), "Complaint form incomplete: {}", e);
            SubmissionView::rejected(draft, e.to_string())
        }
        Ok(()) => {
            let complaint_id = state.complaints.issue_identifier().await;
            tracing::info!(
                complaint_id = %complaint_id,
                category = ?draft.category,
                priority = ?draft.priority,
                attachments = draft.attachments.len(),
                "Complaint submitted"
            );
            SubmissionView::Editing { draft, error: None }.submit(complaint_id)
        }
    };

    render_submission(shell, view)
}

fn render_submission(shell: NavShell, view: SubmissionView) -> Result<Response, PortalError> {
    match view {
        SubmissionView::Editing { draft, error } => {
            let status = if error.is_some() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::OK
            };
            let page = render(&SubmitFormTemplate::new(shell, draft, error))?;
            Ok((status, page).into_response())
        }
        SubmissionView::Submitted {
            complaint_id,
            attachment_count,
        } => {
            let page = render(&SubmittedTemplate {
                shell,
                complaint_id: complaint_id.to_string(),
                attachment_count,
            })?;
            Ok(page.into_response())
        }
    }
}

/// Collect the multipart form into a draft; file inputs become attachments
async fn read_complaint_form(multipart: &mut Multipart) -> Result<ComplaintDraft, PortalError> {
    let mut fields: HashMap<String, String> = HashMap::new();
    let mut attachments = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        let filename = field.file_name().map(str::to_string);

        match filename {
            Some(filename) => {
                let data = field.bytes().await?;
                // An untouched file input still posts an empty part
                if data.is_empty() {
                    continue;
                }
                if let Some(attachment) = accept_attachment(&filename, &data) {
                    attachments.push(attachment);
                }
            }
            None => {
                let value = field.text().await?;
                fields.insert(name, value);
            }
        }
    }

    Ok(draft_from_fields(fields, attachments))
}

fn draft_from_fields(
    mut fields: HashMap<String, String>,
    attachments: Vec<Attachment>,
) -> ComplaintDraft {
    let mut take = |key: &str| fields.remove(key).unwrap_or_default();

    ComplaintDraft {
        full_name: take("name"),
        phone: take("phone"),
        email: Some(take("email")),
        category: ComplaintCategory::from_value(&take("category")),
        location: take("location"),
        description: take("description"),
        priority: Priority::from_value(&take("priority")),
        attachments,
    }
    .normalized()
}

/// Keep the metadata of a supported evidence file; anything else is dropped
fn accept_attachment(filename: &str, data: &[u8]) -> Option<Attachment> {
    let content_type = infer::get(data)
        .map(|kind| kind.mime_type())
        .unwrap_or("application/octet-stream");

    if let Err(e) = validate_attachment(content_type, data.len()) {
        tracing::warn!(filename = %filename, "Skipping evidence file: {}", e);
        return None;
    }

    let basename = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    Some(Attachment {
        filename: basename.to_string(),
        content_type: content_type.to_string(),
        size: data.len(),
    })
}

// =============================================================================
// Tracking
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct TrackQuery {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TrackForm {
    #[serde(default)]
    pub complaint_id: String,
}

/// Search form, optionally pre-filled from `?id=`
pub async fn track_page(
    uri: Uri,
    headers: HeaderMap,
    Query(query): Query<TrackQuery>,
) -> Result<impl IntoResponse, PortalError> {
    render(&TrackTemplate {
        shell: nav_shell(&uri, &headers),
        query: query.id.unwrap_or_default(),
        view: TrackingView::Idle,
    })
}

/// Run a search and render the result
pub async fn track_complaint(
    State(state): State<AppState>,
    uri: Uri,
    headers: HeaderMap,
    Form(form): Form<TrackForm>,
) -> Result<impl IntoResponse, PortalError> {
    let view = TrackingView::Idle.begin_search(form.complaint_id);
    let result = state.complaints.lookup(view.query()).await;
    let view = view.complete(result);

    match &view {
        TrackingView::Found { .. } => tracing::info!("Complaint found"),
        _ => tracing::info!("Complaint not found"),
    }

    render(&TrackTemplate {
        shell: nav_shell(&uri, &headers),
        query: view.query().to_string(),
        view,
    })
}
