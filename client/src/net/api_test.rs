use super::*;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;

// =============================================================
// Helpers
// =============================================================

const COURSES_JSON: &str = r#"[
    {"id":"1","title":"Intro","price":100},
    {"id":"2","title":"Advanced","price":1500,"instructor":"Somchai"}
]"#;

const USERS_JSON: &str = r#"[{"id":"1","name":"Malee","bio":"Instructor"}]"#;

/// Serve `router` on an ephemeral local port and return its base URL.
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn catalog_router() -> Router {
    Router::new()
        .route(COURSE_PATH, get(|| async { COURSES_JSON }))
        .route(USER_PATH, get(|| async { USERS_JSON }))
}

// =============================================================
// Pure status/body handling
// =============================================================

#[test]
fn check_status_accepts_2xx() {
    assert!(check_status(200).is_ok());
    assert!(check_status(204).is_ok());
    assert!(check_status(299).is_ok());
}

#[test]
fn check_status_rejects_everything_else() {
    assert_eq!(check_status(500), Err(ApiError::Http { status: 500 }));
    assert_eq!(check_status(404), Err(ApiError::Http { status: 404 }));
    assert_eq!(check_status(301), Err(ApiError::Http { status: 301 }));
    assert_eq!(check_status(199), Err(ApiError::Http { status: 199 }));
}

#[test]
fn parse_list_decodes_array() {
    let courses: Vec<Course> = parse_list(COURSES_JSON).unwrap();
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[1].instructor.as_deref(), Some("Somchai"));
}

#[test]
fn parse_list_rejects_malformed_json() {
    let result = parse_list::<User>("not json");
    assert!(matches!(result, Err(ApiError::Parse(_))));
}

#[test]
fn parse_list_rejects_object_body() {
    let result = parse_list::<User>(r#"{"id":"1","name":"a","bio":"b"}"#);
    assert!(matches!(result, Err(ApiError::Parse(_))));
}

#[test]
fn endpoint_joins_base_without_double_slash() {
    let client = MockApiClient::new("https://example.test/", None).unwrap();
    assert_eq!(client.base_url(), "https://example.test");
    assert_eq!(client.endpoint(COURSE_PATH), "https://example.test/api/v1/course");
}

// =============================================================
// Live requests against a local server
// =============================================================

#[tokio::test]
async fn list_courses_returns_parsed_records() {
    let base = serve(catalog_router()).await;
    let client = MockApiClient::new(&base, None).unwrap();

    let courses = client.list_courses().await.unwrap();
    assert_eq!(courses.len(), 2);
    assert_eq!(courses[0].id, "1");
    assert_eq!(courses[0].title, "Intro");
    assert!((courses[1].price - 1500.0).abs() < f64::EPSILON);
}

#[tokio::test]
async fn list_users_returns_parsed_records() {
    let base = serve(catalog_router()).await;
    let client = MockApiClient::new(&base, None).unwrap();

    let users = client.list_users().await.unwrap();
    assert_eq!(users, vec![User { id: "1".into(), name: "Malee".into(), bio: "Instructor".into() }]);
}

#[tokio::test]
async fn server_error_maps_to_http_error() {
    let router = Router::new().route(
        COURSE_PATH,
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, COURSES_JSON) }),
    );
    let base = serve(router).await;
    let client = MockApiClient::new(&base, None).unwrap();

    let err = client.list_courses().await.unwrap_err();
    assert_eq!(err, ApiError::Http { status: 500 });
}

#[tokio::test]
async fn missing_route_maps_to_404() {
    let base = serve(Router::new()).await;
    let client = MockApiClient::new(&base, None).unwrap();

    let err = client.list_users().await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn malformed_body_maps_to_parse_error() {
    let router = Router::new().route(USER_PATH, get(|| async { "[{\"id\":" }));
    let base = serve(router).await;
    let client = MockApiClient::new(&base, None).unwrap();

    let err = client.list_users().await.unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn refused_connection_maps_to_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = MockApiClient::new(&format!("http://{addr}"), None).unwrap();
    let err = client.list_courses().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn request_timeout_maps_to_network_error() {
    let router = Router::new().route(
        COURSE_PATH,
        get(|| async {
            tokio::time::sleep(std::time::Duration::from_secs(5)).await;
            COURSES_JSON
        }),
    );
    let base = serve(router).await;
    let client = MockApiClient::new(&base, Some(Duration::from_millis(100))).unwrap();

    let err = client.list_courses().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}
