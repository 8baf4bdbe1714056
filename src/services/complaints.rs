//! Complaint identifier issuance and lookup

use crate::models::{
    ComplaintId, ComplaintRecord, ComplaintStatus, Priority, StepTime, TimelineStep,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use rand::Rng;
use std::time::Duration;

const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// The two operations the portal needs from a complaint backend
#[async_trait]
pub trait ComplaintService: Send + Sync {
    /// Issue an identifier for a freshly submitted complaint
    async fn issue_identifier(&self) -> ComplaintId;

    /// Look up a complaint by the identifier the citizen typed in
    async fn lookup(&self, query: &str) -> Option<ComplaintRecord>;
}

/// Stand-in backend: random identifiers, one fixed record, simulated latency
#[derive(Debug, Clone)]
pub struct MockComplaintService {
    search_delay: Duration,
}

impl MockComplaintService {
    pub fn new(search_delay: Duration) -> Self {
        Self { search_delay }
    }
}

#[async_trait]
impl ComplaintService for MockComplaintService {
    async fn issue_identifier(&self) -> ComplaintId {
        let id = generate_complaint_id();
        tracing::info!(complaint_id = %id, "Issued complaint identifier");
        id
    }

    async fn lookup(&self, query: &str) -> Option<ComplaintRecord> {
        if !self.search_delay.is_zero() {
            tokio::time::sleep(self.search_delay).await;
        }

        // Every non-blank query resolves to the same record
        if query.trim().is_empty() {
            tracing::debug!("Blank complaint query");
            None
        } else {
            tracing::debug!(query = %query.trim(), "Returning mock complaint record");
            Some(mock_record())
        }
    }
}

/// `MCP` followed by nine random uppercase base-36 characters.
///
/// Nothing checks for collisions; two calls may return the same value.
pub fn generate_complaint_id() -> ComplaintId {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ComplaintId::SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    ComplaintId::new(format!("{}{}", ComplaintId::PREFIX, suffix))
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> StepTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .map(StepTime::At)
        .unwrap_or(StepTime::Pending)
}

fn step(label: &str, time: StepTime, description: &str, completed: bool) -> TimelineStep {
    TimelineStep {
        label: label.to_string(),
        time,
        description: description.to_string(),
        completed,
    }
}

/// The record every successful search returns
pub fn mock_record() -> ComplaintRecord {
    ComplaintRecord {
        id: ComplaintId::new("MCP12345ABCD"),
        category: "Water Supply".to_string(),
        description: "No water supply in our area since yesterday morning. Multiple houses affected."
            .to_string(),
        location: "Sector 15, Block A, Street 23".to_string(),
        submitted_on: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap_or_default(),
        status: ComplaintStatus::InProgress,
        assigned_department: "Water Supply Department".to_string(),
        priority: Priority::High,
        timeline: vec![
            step(
                "Submitted",
                at(2024, 1, 10, 9, 30),
                "Complaint submitted by citizen",
                true,
            ),
            step(
                "Acknowledged",
                at(2024, 1, 10, 10, 15),
                "Complaint acknowledged and assigned case number",
                true,
            ),
            step(
                "In Progress",
                at(2024, 1, 10, 14, 30),
                "Forwarded to Water Supply Department for investigation",
                true,
            ),
            step(
                "Field Inspection",
                at(2024, 1, 11, 11, 0),
                "Technical team dispatched for field inspection",
                false,
            ),
            step(
                "Resolution",
                StepTime::Pending,
                "Issue resolution and completion confirmation",
                false,
            ),
        ],
    }
}
