use httpmock::prelude::*;
use rust_roadmap::days::day_27::{fetch_user, render_user};

#[tokio::test]
async fn test_fetch_user_parses_the_response() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/users/1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "id": 1,
                "name": "Leanne Graham",
                "email": "Sincere@april.biz",
                "company": {"name": "Romaguera-Crona"}
            }));
    });

    let user = fetch_user(&server.url("/users/1")).await.unwrap();
    mock.assert();

    assert_eq!(user["id"], 1);
    let rendered = render_user(&user);
    assert!(rendered.contains("User: Leanne Graham"));
    assert!(rendered.contains("Email: Sincere@april.biz"));
    assert!(rendered.contains("Company: Romaguera-Crona"));
}

#[tokio::test]
async fn test_fetch_user_reports_http_errors() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/users/404");
        then.status(404);
    });

    let result = fetch_user(&server.url("/users/404")).await;

    mock.assert();
    assert!(result.is_err());
}

#[tokio::test]
async fn test_fetch_user_rejects_non_json_bodies() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/users/1");
        then.status(200)
            .header("Content-Type", "text/html")
            .body("<html>not json</html>");
    });

    let result = fetch_user(&server.url("/users/1")).await;

    mock.assert();
    assert!(result.is_err());
}
