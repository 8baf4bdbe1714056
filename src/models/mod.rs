//! Data models for the portal

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

// =============================================================================
// Enums
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintCategory {
    Water,
    Electricity,
    Roads,
    Waste,
    Drainage,
    Other,
}

impl ComplaintCategory {
    pub const ALL: [ComplaintCategory; 6] = [
        ComplaintCategory::Water,
        ComplaintCategory::Electricity,
        ComplaintCategory::Roads,
        ComplaintCategory::Waste,
        ComplaintCategory::Drainage,
        ComplaintCategory::Other,
    ];

    /// Form value, as posted by the category select
    pub fn value(&self) -> &'static str {
        match self {
            ComplaintCategory::Water => "water",
            ComplaintCategory::Electricity => "electricity",
            ComplaintCategory::Roads => "roads",
            ComplaintCategory::Waste => "waste",
            ComplaintCategory::Drainage => "drainage",
            ComplaintCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ComplaintCategory::Water => "Water Supply",
            ComplaintCategory::Electricity => "Electricity",
            ComplaintCategory::Roads => "Roads & Infrastructure",
            ComplaintCategory::Waste => "Waste Management",
            ComplaintCategory::Drainage => "Drainage & Sewerage",
            ComplaintCategory::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Emergency,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Emergency,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Emergency => "emergency",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Emergency => "Emergency",
        }
    }

    /// Guidance shown next to each option in the priority select
    pub fn hint(&self) -> &'static str {
        match self {
            Priority::Low => "Can wait for regular processing",
            Priority::Medium => "Needs attention soon",
            Priority::High => "Urgent issue affecting daily life",
            Priority::Emergency => "Immediate danger/risk",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Submitted,
    Acknowledged,
    InProgress,
    FieldInspection,
    Resolved,
}

impl ComplaintStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ComplaintStatus::Submitted => "Submitted",
            ComplaintStatus::Acknowledged => "Acknowledged",
            ComplaintStatus::InProgress => "In Progress",
            ComplaintStatus::FieldInspection => "Field Inspection",
            ComplaintStatus::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartmentStatus {
    Available,
    Busy,
    Unavailable,
}

impl DepartmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DepartmentStatus::Available => "Available",
            DepartmentStatus::Busy => "Busy",
            DepartmentStatus::Unavailable => "Unavailable",
        }
    }
}

// =============================================================================
// Complaint
// =============================================================================

/// Identifier handed to the citizen at submission time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplaintId(String);

impl ComplaintId {
    pub const PREFIX: &'static str = "MCP";
    pub const SUFFIX_LEN: usize = 9;

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Evidence file metadata; the bytes themselves are never retained
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub filename: String,
    pub content_type: String,
    pub size: usize,
}

/// Form contents between the first keystroke and submission
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ComplaintDraft {
    #[validate(length(min = 1))]
    pub full_name: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(required)]
    pub category: Option<ComplaintCategory>,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(length(min = 1))]
    pub description: String,
    pub priority: Option<Priority>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

impl ComplaintDraft {
    /// Treat blank optional inputs as absent, the way an unfilled field is
    pub fn normalized(mut self) -> Self {
        if self.email.as_deref().map(str::trim).unwrap_or_default().is_empty() {
            self.email = None;
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "at")]
pub enum StepTime {
    At(NaiveDateTime),
    Pending,
}

impl StepTime {
    pub fn display(&self) -> String {
        match self {
            StepTime::At(at) => at.format("%Y-%m-%d %I:%M %p").to_string(),
            StepTime::Pending => "Pending".to_string(),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, StepTime::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineStep {
    pub label: String,
    pub time: StepTime,
    pub description: String,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplaintRecord {
    pub id: ComplaintId,
    pub category: String,
    pub description: String,
    pub location: String,
    pub submitted_on: NaiveDate,
    pub status: ComplaintStatus,
    pub assigned_department: String,
    pub priority: Priority,
    pub timeline: Vec<TimelineStep>,
}

impl ComplaintRecord {
    pub fn completed_steps(&self) -> usize {
        self.timeline.iter().filter(|s| s.completed).count()
    }
}

// =============================================================================
// Department
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentRecord {
    pub name: &'static str,
    pub head: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub address: &'static str,
    pub hours: &'static str,
    pub services: &'static [&'static str],
    pub status: DepartmentStatus,
}

impl DepartmentRecord {
    /// `tel:` link with the display spacing removed
    pub fn tel_link(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{}", digits)
    }

    pub fn mailto_link(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

// =============================================================================
// API Responses
// =============================================================================

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IssuedComplaint {
    pub complaint_id: ComplaintId,
}
