//! Backing services for the portal pages

pub mod complaints;
pub mod departments;

pub use complaints::{ComplaintService, MockComplaintService};
