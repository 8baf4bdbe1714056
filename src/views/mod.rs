//! Per-request view state
//!
//! Each page owns its state for the lifetime of one request. Nothing here is
//! shared between requests or pages.

use crate::models::{ComplaintDraft, ComplaintId, ComplaintRecord};
use chrono::{Datelike, Utc};

// =============================================================================
// Navigation shell
// =============================================================================

pub const NAVIGATION: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Submit Complaint", "/submit"),
    ("Track Complaint", "/track"),
    ("Departments", "/departments"),
    ("About", "/about"),
    ("Contact", "/contact"),
    ("Admin", "/admin"),
];

/// Header language label. Toggling it does not translate any page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
        }
    }

    pub fn from_code(code: &str) -> Self {
        match code {
            "hi" => Language::Hindi,
            _ => Language::English,
        }
    }

    /// Short label on the header button
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "EN",
            Language::Hindi => "हिं",
        }
    }

    /// Mobile panel wording, naming the language a click switches to
    pub fn switch_label(&self) -> &'static str {
        match self {
            Language::English => "Switch to हिंदी",
            Language::Hindi => "Switch to English",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::English => Language::Hindi,
            Language::Hindi => Language::English,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavShell {
    pub path: String,
    pub language: Language,
    pub menu_open: bool,
    /// Copyright year in the footer
    pub year: i32,
}

impl NavShell {
    pub fn new(path: impl Into<String>, language: Language, menu_open: bool) -> Self {
        Self {
            path: path.into(),
            language,
            menu_open,
            year: Utc::now().year(),
        }
    }

    /// Navigation items, with the current route marked by exact path match
    pub fn links(&self) -> Vec<NavLink> {
        NAVIGATION
            .iter()
            .map(|&(name, href)| NavLink {
                name,
                href,
                active: self.path == href,
            })
            .collect()
    }
}

// =============================================================================
// Submission flow
// =============================================================================

/// `Editing → Submitted`; there is no way back short of a fresh form
#[derive(Debug, Clone)]
pub enum SubmissionView {
    Editing {
        draft: ComplaintDraft,
        error: Option<String>,
    },
    Submitted {
        complaint_id: ComplaintId,
        attachment_count: usize,
    },
}

impl Default for SubmissionView {
    fn default() -> Self {
        SubmissionView::Editing {
            draft: ComplaintDraft::default(),
            error: None,
        }
    }
}

impl SubmissionView {
    /// Keep the citizen's input and show why it was not accepted
    pub fn rejected(draft: ComplaintDraft, error: impl Into<String>) -> Self {
        SubmissionView::Editing {
            draft,
            error: Some(error.into()),
        }
    }

    /// Consume the draft and move to the confirmation screen
    pub fn submit(self, complaint_id: ComplaintId) -> Self {
        match self {
            SubmissionView::Editing { draft, .. } => SubmissionView::Submitted {
                complaint_id,
                attachment_count: draft.attachments.len(),
            },
            submitted @ SubmissionView::Submitted { .. } => submitted,
        }
    }
}

// =============================================================================
// Tracking flow
// =============================================================================

/// `Idle → Searching → {Found | NotFound}`, re-enterable from any state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TrackingView {
    #[default]
    Idle,
    Searching {
        query: String,
    },
    Found {
        query: String,
        record: Box<ComplaintRecord>,
    },
    NotFound {
        query: String,
    },
}

impl TrackingView {
    pub fn begin_search(self, query: impl Into<String>) -> Self {
        TrackingView::Searching {
            query: query.into(),
        }
    }

    /// Settle an in-flight search; outside `Searching` the result is ignored
    pub fn complete(self, result: Option<ComplaintRecord>) -> Self {
        match (self, result) {
            (TrackingView::Searching { query }, Some(record)) => TrackingView::Found {
                query,
                record: Box::new(record),
            },
            (TrackingView::Searching { query }, None) => TrackingView::NotFound { query },
            (other, _) => other,
        }
    }

    pub fn query(&self) -> &str {
        match self {
            TrackingView::Idle => "",
            TrackingView::Searching { query }
            | TrackingView::Found { query, .. }
            | TrackingView::NotFound { query } => query,
        }
    }

    pub fn record(&self) -> Option<&ComplaintRecord> {
        match self {
            TrackingView::Found { record, .. } => Some(record.as_ref()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, TrackingView::NotFound { .. })
    }

    /// The help panel shows whenever no record is on screen
    pub fn shows_help(&self) -> bool {
        self.record().is_none()
    }
}
