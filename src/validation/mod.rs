//! Input validation module

use crate::models::ComplaintDraft;
use thiserror::Error;
use validator::Validate;

/// Maximum size of a single evidence file
pub const MAX_ATTACHMENT_SIZE: usize = 10 * 1024 * 1024;

/// Evidence types the form advertises: JPG, PNG, MP3, MP4
const ALLOWED_ATTACHMENT_TYPES: &[&str] = &["image/jpeg", "image/png", "audio/mpeg", "video/mp4"];

/// Draft fields in form order, so the first missing field is reported first
const DRAFT_FIELDS: &[(&str, &str)] = &[
    ("full_name", "Full Name"),
    ("phone", "Phone Number"),
    ("email", "Email Address"),
    ("category", "Complaint Category"),
    ("location", "Location"),
    ("description", "Complaint Description"),
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{label} is required")]
    Required { field: String, label: String },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Unsupported evidence type: {content_type}")]
    InvalidFileType { content_type: String },

    #[error("Evidence file too large (max {max_mb} MB)")]
    FileTooLarge { max_mb: usize },
}

impl ValidationError {
    /// Form field the error belongs to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::Required { field, .. } => Some(field),
            ValidationError::InvalidEmail => Some("email"),
            _ => None,
        }
    }
}

/// Validate a complaint draft the way the browser's `required` and
/// `type="email"` checks would
pub fn validate_draft(draft: &ComplaintDraft) -> Result<(), ValidationError> {
    match draft.validate() {
        Ok(()) => Ok(()),
        Err(errors) => Err(first_failure(&errors)),
    }
}

/// Pick the error to show: first failing field in form order, then any other
fn first_failure(errors: &validator::ValidationErrors) -> ValidationError {
    let field_errors = errors.field_errors();

    for (field, label) in DRAFT_FIELDS {
        let Some(failures) = field_errors.get(field) else {
            continue;
        };
        if *field == "email" || failures.iter().any(|f| f.code == "email") {
            return ValidationError::InvalidEmail;
        }
        return ValidationError::Required {
            field: field.to_string(),
            label: label.to_string(),
        };
    }

    tracing::warn!("Unmapped draft validation errors: {}", errors);
    let field = field_errors.keys().min().copied().unwrap_or("form");
    ValidationError::Required {
        field: field.to_string(),
        label: field.to_string(),
    }
}

/// Check an evidence file's detected type and size
pub fn validate_attachment(content_type: &str, size: usize) -> Result<(), ValidationError> {
    if size > MAX_ATTACHMENT_SIZE {
        return Err(ValidationError::FileTooLarge {
            max_mb: MAX_ATTACHMENT_SIZE / (1024 * 1024),
        });
    }

    if !ALLOWED_ATTACHMENT_TYPES.contains(&content_type) {
        return Err(ValidationError::InvalidFileType {
            content_type: content_type.to_string(),
        });
    }

    Ok(())
}
