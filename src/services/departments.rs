//! Municipal department directory

use crate::models::{DepartmentRecord, DepartmentStatus};
use serde::Serialize;

static DEPARTMENTS: [DepartmentRecord; 6] = [
    DepartmentRecord {
        name: "Water Supply Department",
        head: "Dr. Rajesh Kumar",
        phone: "+91 11 2345 6789",
        email: "water@municipal.gov.in",
        address: "Block A, Municipal Building",
        hours: "Mon-Fri: 9 AM - 5 PM",
        services: &["Water Supply", "Pipeline Maintenance", "Water Quality"],
        status: DepartmentStatus::Available,
    },
    DepartmentRecord {
        name: "Electricity Department",
        head: "Eng. Priya Sharma",
        phone: "+91 11 2345 6790",
        email: "electricity@municipal.gov.in",
        address: "Block B, Municipal Building",
        hours: "24/7 Emergency Service",
        services: &["Power Distribution", "Street Lighting", "Electrical Safety"],
        status: DepartmentStatus::Available,
    },
    DepartmentRecord {
        name: "Roads & Infrastructure",
        head: "Mr. Amit Singh",
        phone: "+91 11 2345 6791",
        email: "roads@municipal.gov.in",
        address: "Block C, Municipal Building",
        hours: "Mon-Sat: 8 AM - 6 PM",
        services: &["Road Maintenance", "Traffic Management", "Construction"],
        status: DepartmentStatus::Busy,
    },
    DepartmentRecord {
        name: "Waste Management",
        head: "Mrs. Sunita Patel",
        phone: "+91 11 2345 6792",
        email: "waste@municipal.gov.in",
        address: "Block D, Municipal Building",
        hours: "Mon-Sun: 6 AM - 8 PM",
        services: &["Garbage Collection", "Recycling", "Sanitation"],
        status: DepartmentStatus::Available,
    },
    DepartmentRecord {
        name: "Drainage & Sewerage",
        head: "Dr. Mohammed Ali",
        phone: "+91 11 2345 6793",
        email: "drainage@municipal.gov.in",
        address: "Block E, Municipal Building",
        hours: "24/7 Emergency Service",
        services: &["Drain Cleaning", "Sewage Treatment", "Flood Control"],
        status: DepartmentStatus::Available,
    },
    DepartmentRecord {
        name: "Health & Sanitation",
        head: "Dr. Kavita Mehta",
        phone: "+91 11 2345 6794",
        email: "health@municipal.gov.in",
        address: "Block F, Municipal Building",
        hours: "Mon-Fri: 9 AM - 5 PM",
        services: &["Public Health", "Disease Control", "Food Safety"],
        status: DepartmentStatus::Available,
    },
];

/// All departments, in directory order
pub fn directory() -> &'static [DepartmentRecord] {
    &DEPARTMENTS
}

/// Headline numbers shown above the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DirectorySummary {
    pub total: usize,
    pub available: usize,
}

pub fn summary(departments: &[DepartmentRecord]) -> DirectorySummary {
    DirectorySummary {
        total: departments.len(),
        available: departments
            .iter()
            .filter(|d| d.status == DepartmentStatus::Available)
            .count(),
    }
}
