use axum::http::StatusCode;
use axum_test::TestServer;
use keyrace_services::{config::Config, races::MockRaceStorage, routes};

#[tokio::test]
async fn test_health_check_integration() {
    let server = TestServer::new(routes(MockRaceStorage::new(), Config::new_for_test()))
        .expect("test server starts");

    let response = server.get("/is-health").await;
    response.assert_status(StatusCode::OK);
    response.assert_text("OK");
    assert_eq!(response.header("x-service-env"), "test");

    let server = TestServer::new(routes(
        MockRaceStorage::disconnected(),
        Config::new_for_test(),
    ))
    .expect("test server starts");

    let response = server.get("/is-health").await;
    response.assert_status(StatusCode::BAD_GATEWAY);
}
