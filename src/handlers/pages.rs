//! Static pages: home, department directory, language toggle, fallback

use crate::models::DepartmentRecord;
use crate::services::departments::{self, DirectorySummary};
use crate::views::NavShell;
use askama::Template;
use axum::{
    http::{header, HeaderMap, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use super::{language_from_cookie, nav_shell, render, PortalError, LANGUAGE_COOKIE};

// =============================================================================
// Home
// =============================================================================

pub struct ServiceCard {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct QuickAction {
    pub title: &'static str,
    pub description: &'static str,
    pub href: &'static str,
}

const SERVICES: &[ServiceCard] = &[
    ServiceCard {
        title: "Water Supply",
        description: "Report water shortage, leakage, or quality issues",
    },
    ServiceCard {
        title: "Electricity",
        description: "Report power cuts, street light issues, or electrical problems",
    },
    ServiceCard {
        title: "Roads & Infrastructure",
        description: "Report potholes, damaged roads, or traffic issues",
    },
    ServiceCard {
        title: "Waste Management",
        description: "Report garbage collection issues or cleanliness problems",
    },
];

const QUICK_ACTIONS: &[QuickAction] = &[
    QuickAction {
        title: "Submit Complaint",
        description: "File a new complaint about municipal services",
        href: "/submit",
    },
    QuickAction {
        title: "Track Complaint",
        description: "Check the status of your existing complaint",
        href: "/track",
    },
    QuickAction {
        title: "Contact Departments",
        description: "Find contact information for municipal departments",
        href: "/departments",
    },
    QuickAction {
        title: "Emergency Contact",
        description: "Get immediate help for urgent issues",
        href: "/contact",
    },
];

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    shell: NavShell,
    services: &'static [ServiceCard],
    actions: &'static [QuickAction],
}

pub async fn home(uri: Uri, headers: HeaderMap) -> Result<impl IntoResponse, PortalError> {
    render(&HomeTemplate {
        shell: nav_shell(&uri, &headers),
        services: SERVICES,
        actions: QUICK_ACTIONS,
    })
}

// =============================================================================
// Departments
// =============================================================================

#[derive(Template)]
#[template(path = "departments.html")]
struct DepartmentsTemplate {
    shell: NavShell,
    departments: &'static [DepartmentRecord],
    summary: DirectorySummary,
}

pub async fn departments_page(
    uri: Uri,
    headers: HeaderMap,
) -> Result<impl IntoResponse, PortalError> {
    let departments = departments::directory();
    render(&DepartmentsTemplate {
        shell: nav_shell(&uri, &headers),
        departments,
        summary: departments::summary(departments),
    })
}

// =============================================================================
// Language toggle
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct LanguageToggle {
    pub return_to: Option<String>,
}

/// Flip the header language label and go back where the citizen came from
pub async fn toggle_language(headers: HeaderMap, Form(input): Form<LanguageToggle>) -> Response {
    let next = language_from_cookie(&headers).unwrap_or_default().toggled();
    let target = input
        .return_to
        .as_deref()
        .filter(|path| is_local_path(path))
        .unwrap_or("/");

    tracing::debug!(language = next.code(), "Language label toggled");

    (
        [(
            header::SET_COOKIE,
            format!(
                "{}={}; Path=/; Max-Age=31536000; SameSite=Lax",
                LANGUAGE_COOKIE,
                next.code()
            ),
        )],
        Redirect::to(target),
    )
        .into_response()
}

/// Same-site paths that fit a `Location` header; rejects `//host` and `/\host`
fn is_local_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && !path.starts_with("/\\")
        && HeaderValue::from_str(path).is_ok()
}

// =============================================================================
// Fallback
// =============================================================================

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {
    shell: NavShell,
}

/// Routes linked from the chrome that this portal does not serve
pub async fn not_found(uri: Uri, headers: HeaderMap) -> Result<impl IntoResponse, PortalError> {
    tracing::debug!(path = %uri.path(), "No page for path");
    let page = render(&NotFoundTemplate {
        shell: nav_shell(&uri, &headers),
    })?;
    Ok((StatusCode::NOT_FOUND, page))
}

/// Liveness probe
pub async fn health() -> &'static str {
    "ok"
}
