//! End-to-end tests for guarded access, the credential header, and the
//! login session flow.

mod common;

use axum::Router;
use version_inspector::{InspectorExt, AUTHORIZATION_HEADER};

#[tokio::test]
async fn test_guarded_version_requires_a_known_secret() {
    let app = Router::new().with_inspector(|x| {
        x.environment("development")
            .authenticate_with_secrets(["one", "two"]);
    });
    let addr = common::serve(app).await;
    let client = reqwest::Client::new();

    let bare = client
        .get(format!("http://{addr}/version"))
        .send()
        .await
        .unwrap();
    assert_eq!(bare.status(), reqwest::StatusCode::UNAUTHORIZED);

    let wrong = client
        .get(format!("http://{addr}/version"))
        .header(AUTHORIZATION_HEADER, "three")
        .send()
        .await
        .unwrap();
    assert_eq!(wrong.status(), reqwest::StatusCode::UNAUTHORIZED);

    let accepted = client
        .get(format!("http://{addr}/version"))
        .header(AUTHORIZATION_HEADER, "two")
        .send()
        .await
        .unwrap();
    assert_eq!(accepted.status(), reqwest::StatusCode::OK);
    assert_eq!(
        accepted.text().await.unwrap(),
        r#"{"Environment":"development"}"#
    );
}

#[tokio::test]
async fn test_empty_credential_is_rejected() {
    let app = Router::new().with_inspector(|x| {
        x.environment("development").authenticate_with_secrets(["one"]);
    });
    let addr = common::serve(app).await;

    let response = reqwest::Client::new()
        .get(format!("http://{addr}/version"))
        .header(AUTHORIZATION_HEADER, "")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_predicate_guard_decides_access() {
    let app = Router::new().with_inspector(|x| {
        x.environment("development")
            .authenticate_with(|password| password == "Monday");
    });
    let addr = common::serve(app).await;
    let client = reqwest::Client::new();

    let denied = client
        .get(format!("http://{addr}/version"))
        .header(AUTHORIZATION_HEADER, "Wednesday")
        .send()
        .await
        .unwrap();
    assert_eq!(denied.status(), reqwest::StatusCode::UNAUTHORIZED);

    let granted = client
        .get(format!("http://{addr}/version"))
        .header(AUTHORIZATION_HEADER, "Monday")
        .send()
        .await
        .unwrap();
    assert_eq!(granted.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn test_panicking_predicate_denies_instead_of_erroring() {
    let app = Router::new().with_inspector(|x| {
        x.environment("development")
            .authenticate_with(|_| panic!("boom"));
    });
    let addr = common::serve(app).await;

    let response = reqwest::Client::new()
        .get(format!("http://{addr}/version"))
        .header(AUTHORIZATION_HEADER, "anything")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_form_is_reachable_without_credentials() {
    let app = Router::new().with_inspector(|x| {
        x.environment("development").authenticate_with_secrets(["one"]);
    });
    let addr = common::serve(app).await;

    let response = reqwest::get(format!("http://{addr}/version-login"))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("<form"));
    assert!(body.contains(r#"action="/version-login""#));
}

#[tokio::test]
async fn test_login_form_is_absent_when_unguarded() {
    let app = Router::new().with_inspector(|x| {
        x.environment("development");
    });
    let addr = common::serve(app).await;

    let response = reqwest::get(format!("http://{addr}/version-login"))
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_successful_login_establishes_a_session() {
    let app = Router::new().with_inspector(|x| {
        x.environment("development").authenticate_with_secrets(["one"]);
    });
    let addr = common::serve(app).await;
    let client = reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap();

    // Redirect is followed into the now-authorized version endpoint.
    let response = client
        .post(format!("http://{addr}/version-login"))
        .form(&[("password", "one")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response.text().await.unwrap(),
        r#"{"Environment":"development"}"#
    );

    // The session marker keeps working without the credential header.
    let followup = client
        .get(format!("http://{addr}/version"))
        .send()
        .await
        .unwrap();
    assert_eq!(followup.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn test_failed_login_rerenders_the_form() {
    let app = Router::new().with_inspector(|x| {
        x.environment("development").authenticate_with_secrets(["one"]);
    });
    let addr = common::serve(app).await;

    let response = reqwest::Client::new()
        .post(format!("http://{addr}/version-login"))
        .form(&[("password", "wrong")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
    let body = response.text().await.unwrap();
    assert!(body.contains("Invalid password"));
    assert!(body.contains("<form"));
}

#[tokio::test]
async fn test_login_flow_under_a_base_endpoint() {
    let app = Router::new().with_inspector(|x| {
        x.environment("development")
            .base_endpoint("/inspector/ins")
            .authenticate_with_secrets(["one"]);
    });
    let addr = common::serve(app).await;
    let client = reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap();

    let form = client
        .get(format!("http://{addr}/inspector/ins/version-login"))
        .send()
        .await
        .unwrap();
    assert_eq!(form.status(), reqwest::StatusCode::OK);
    assert!(form
        .text()
        .await
        .unwrap()
        .contains(r#"action="/inspector/ins/version-login""#));

    let response = client
        .post(format!("http://{addr}/inspector/ins/version-login"))
        .form(&[("password", "one")])
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response.text().await.unwrap(),
        r#"{"Environment":"development"}"#
    );
}
