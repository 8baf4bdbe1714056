use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use complaint_portal::{
    app,
    config::{Config, Environment},
    handlers::AppState,
    services::MockComplaintService,
};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

const BOUNDARY: &str = "portal-test-boundary";

fn test_app() -> Router {
    let config = Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        static_dir: "./static".to_string(),
        search_delay: Duration::ZERO,
        max_form_size: 32 * 1024 * 1024,
        cors_origins: Vec::new(),
        environment: Environment::Development,
    };
    let state = AppState {
        complaints: Arc::new(MockComplaintService::new(config.search_delay)),
        is_production: false,
    };
    app(state, &config)
}

async fn send(request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(uri: &str) -> (StatusCode, String) {
    let (status, _, body) = send(Request::get(uri).body(Body::empty()).unwrap()).await;
    (status, body)
}

fn multipart_body(fields: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        ));
    }
    // Untouched file input
    body.push_str(&format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"attachments\"; filename=\"\"\r\nContent-Type: application/octet-stream\r\n\r\n\r\n"
    ));
    body.push_str(&format!("--{BOUNDARY}--\r\n"));
    body
}

async fn submit(fields: &[(&str, &str)]) -> (StatusCode, String) {
    let request = Request::post("/submit")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(fields)))
        .unwrap();
    let (status, _, body) = send(request).await;
    (status, body)
}

/// Form fields plus evidence files as `(filename, bytes)`
fn multipart_with_files(fields: &[(&str, &str)], files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    for (filename, data) in files {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"attachments\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

async fn submit_with_files(files: &[(&str, &[u8])]) -> (StatusCode, String) {
    let request = Request::post("/submit")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_with_files(JANE_DOE, files)))
        .unwrap();
    let (status, _, body) = send(request).await;
    (status, body)
}

async fn track(query: &str) -> (StatusCode, String) {
    let request = Request::post("/track")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!("complaint_id={query}")))
        .unwrap();
    let (status, _, body) = send(request).await;
    (status, body)
}

fn extract_complaint_id(body: &str) -> Option<String> {
    let marker = "id=\"complaint-id\">";
    let start = body.find(marker)? + marker.len();
    let end = start + body[start..].find('<')?;
    Some(body[start..end].to_string())
}

fn is_complaint_id(id: &str) -> bool {
    id.len() == 12
        && id.starts_with("MCP")
        && id[3..]
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

const JANE_DOE: &[(&str, &str)] = &[
    ("name", "Jane Doe"),
    ("phone", "+91 98765 43210"),
    ("email", ""),
    ("category", "water"),
    ("location", "Sector 9"),
    ("description", "No water since Monday"),
    ("priority", ""),
];

#[tokio::test]
async fn submit_form_issues_identifier() {
    let (status, body) = submit(JANE_DOE).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Complaint Submitted Successfully!"));

    let id = extract_complaint_id(&body).expect("confirmation shows an id");
    assert!(is_complaint_id(&id), "unexpected id {id}");
    assert!(body.contains(&format!("Your complaint ID is: {id}")));
    assert!(body.contains(&format!("href=\"/track?id={id}\"")));
    assert!(body.contains("href=\"/submit\""));
}

const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];

#[tokio::test]
async fn submit_form_accepts_evidence_file() {
    let (status, body) = submit_with_files(&[("leak.png", PNG_HEADER)]).await;
    assert_eq!(status, StatusCode::OK);
    assert!(extract_complaint_id(&body).is_some());
    assert!(body.contains("1 evidence file(s) received."));
}

#[tokio::test]
async fn submit_form_skips_unsupported_evidence() {
    let mut oversized = PNG_HEADER.to_vec();
    oversized.resize(10 * 1024 * 1024 + 1, 0);

    let (status, body) = submit_with_files(&[
        ("notes.txt", b"just some text".as_slice()),
        ("huge.png", oversized.as_slice()),
        ("leak.png", PNG_HEADER),
    ])
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(extract_complaint_id(&body).is_some());
    assert!(body.contains("1 evidence file(s) received."));

    let (status, body) = submit_with_files(&[("notes.txt", b"just some text".as_slice())]).await;
    assert_eq!(status, StatusCode::OK);
    assert!(extract_complaint_id(&body).is_some());
    assert!(!body.contains("evidence file(s) received"));
}

#[tokio::test]
async fn submit_form_missing_required_field() {
    let fields: Vec<(&str, &str)> = JANE_DOE
        .iter()
        .copied()
        .filter(|(name, _)| *name != "location")
        .collect();
    let (status, body) = submit(&fields).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("Location is required"));
    assert!(extract_complaint_id(&body).is_none());
    // Input is kept
    assert!(body.contains("value=\"Jane Doe\""));
}

#[tokio::test]
async fn blank_form_page() {
    let (status, body) = get("/submit").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Submit a Complaint"));
    assert!(body.contains("<option value=\"drainage\">Drainage &amp; Sewerage</option>"));
    assert!(!body.contains("id=\"form-error\""));
}

#[tokio::test]
async fn track_known_format_returns_mock_record() {
    let (status, body) = track("MCP12345ABCD").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<span class=\"badge\" id=\"complaint-status\">In Progress</span>"));
    assert!(body.contains("High Priority"));
    assert!(body.contains("<dd id=\"complaint-department\">Water Supply Department</dd>"));
    assert_eq!(body.matches("class=\"step-completed\"").count(), 3);
    assert_eq!(body.matches("class=\"step-pending\"").count(), 2);
    assert!(!body.contains("id=\"tracking-help\""));
}

#[tokio::test]
async fn track_ignores_query_content() {
    let (_, a) = track("MCP12345ABCD").await;
    let (_, b) = track("whatever").await;
    let record = |body: &str| {
        let start = body.find("id=\"complaint-result\"").unwrap();
        let end = body.find("Need Help?").unwrap();
        body[start..end].to_string()
    };
    assert_eq!(record(&a), record(&b));
}

#[tokio::test]
async fn track_timeline_order() {
    let (_, body) = track("MCP12345ABCD").await;
    let positions: Vec<usize> = [
        "<h3>Submitted</h3>",
        "<h3>Acknowledged</h3>",
        "<h3>In Progress</h3>",
        "<h3>Field Inspection</h3>",
        "<h3>Resolution</h3>",
    ]
    .iter()
    .map(|label| body.find(label).unwrap())
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(!body.contains("<time>Pending</time>"));
}

#[tokio::test]
async fn track_empty_query_shows_help() {
    for query in ["", "+++"] {
        let (status, body) = track(query).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("id=\"not-found\""));
        assert!(body.contains("Can't find your complaint?"));
        assert!(body.contains("Submit New Complaint"));
        assert!(!body.contains("id=\"complaint-result\""));
    }
}

#[tokio::test]
async fn track_page_prefills_identifier() {
    let (status, body) = get("/track?id=MCPABC123XYZ").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("value=\"MCPABC123XYZ\""));
    assert!(!body.contains("id=\"complaint-result\""));
    assert!(!body.contains("id=\"not-found\""));
}

#[tokio::test]
async fn departments_page_lists_directory() {
    let (status, body) = get("/departments").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("<strong id=\"department-total\">6</strong>"));
    assert!(body.contains("<strong id=\"department-available\">5</strong>"));
    assert!(body.contains("href=\"tel:+911123456789\""));
    assert!(body.contains("href=\"mailto:water@municipal.gov.in\""));
    assert!(body.contains("status-busy"));
}

#[tokio::test]
async fn nav_highlights_exact_route() {
    let (_, body) = get("/departments").await;
    assert!(body.contains("<a href=\"/departments\" class=\"active\" aria-current=\"page\">Departments</a>"));
    assert!(body.contains("<a href=\"/\">Home</a>"));
}

#[tokio::test]
async fn mobile_panel_opens_with_flag() {
    let (_, closed) = get("/").await;
    assert!(!closed.contains("id=\"mobile-panel\""));
    let (_, open) = get("/?menu=open").await;
    assert!(open.contains("id=\"mobile-panel\""));
    assert!(open.contains("Switch to हिंदी"));
}

#[tokio::test]
async fn language_toggle_sets_cookie_and_redirects() {
    let request = Request::post("/language")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .header(header::COOKIE, "mcp_lang=en")
        .body(Body::from("return_to=%2Fdepartments"))
        .unwrap();
    let (status, headers, _) = send(request).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(headers.get(header::LOCATION).unwrap(), "/departments");
    let cookie = headers.get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cookie.starts_with("mcp_lang=hi;"));

    let request = Request::get("/")
        .header(header::COOKIE, "mcp_lang=hi")
        .body(Body::empty())
        .unwrap();
    let (_, _, body) = send(request).await;
    assert!(body.contains("<button type=\"submit\" id=\"language-label\">हिं</button>"));
}

#[tokio::test]
async fn language_toggle_rejects_external_redirect() {
    let request = Request::post("/language")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("return_to=%2F%2Fevil.example"))
        .unwrap();
    let (_, headers, _) = send(request).await;
    assert_eq!(headers.get(header::LOCATION).unwrap(), "/");

    // A control character cannot go into a Location header
    let request = Request::post("/language")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("return_to=%2Ffoo%0Abar"))
        .unwrap();
    let (status, headers, _) = send(request).await;
    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(headers.get(header::LOCATION).unwrap(), "/");
}

#[tokio::test]
async fn unimplemented_routes_render_not_available() {
    for path in ["/about", "/contact", "/admin", "/privacy"] {
        let (status, body) = get(path).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page not available"));
    }
}

#[tokio::test]
async fn security_headers_present() {
    let (_, headers, _) = send(Request::get("/").body(Body::empty()).unwrap()).await;
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert!(headers.get(header::STRICT_TRANSPORT_SECURITY).is_none());
}

#[tokio::test]
async fn api_create_complaint() {
    let payload = serde_json::json!({
        "full_name": "Jane Doe",
        "phone": "+91 98765 43210",
        "email": null,
        "category": "water",
        "location": "Sector 9",
        "description": "No water since Monday",
        "priority": "high"
    });
    let request = Request::post("/api/complaints")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let (status, _, body) = send(request).await;
    assert_eq!(status, StatusCode::CREATED);

    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["success"], true);
    let id = json["data"]["complaint_id"].as_str().unwrap();
    assert!(is_complaint_id(id));
}

#[tokio::test]
async fn api_create_complaint_missing_category() {
    let payload = serde_json::json!({
        "full_name": "Jane Doe",
        "phone": "+91 98765 43210",
        "email": null,
        "category": null,
        "location": "Sector 9",
        "description": "No water since Monday",
        "priority": null
    });
    let request = Request::post("/api/complaints")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let (status, _, body) = send(request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"], "Complaint Category is required");
}

#[tokio::test]
async fn api_get_complaint() {
    let (status, body) = get("/api/complaints/ANYTHING").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["data"]["id"], "MCP12345ABCD");
    assert_eq!(json["data"]["status"], "in_progress");
    assert_eq!(json["data"]["timeline"].as_array().unwrap().len(), 5);

    let (status, _) = get("/api/complaints/%20%20").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn api_departments() {
    let (status, body) = get("/api/departments").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["data"].as_array().unwrap().len(), 6);
    assert_eq!(json["data"][2]["status"], "busy");
}

#[tokio::test]
async fn health_check() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}
