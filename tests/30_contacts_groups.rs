mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use common::ids;

#[tokio::test]
async fn contacts_are_scoped_to_the_caller() -> Result<()> {
    let app = common::TestApp::new();
    let alice = app.user("alice").await;
    let bob = app.user("bob").await;
    let ada = app.store.add_contact(alice.id, "Ada", "Lovelace").await;
    let grace = app.store.add_contact(alice.id, "Grace", "Hopper").await;
    app.store.add_contact(bob.id, "Alan", "Turing").await;

    let res = app.get("/api/contacts", Some(&app.token_for(&alice))).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(ids(&res.data_array()), vec![ada.id, grace.id]);

    let res = app.get("/api/contacts", Some(&app.token_for(&bob))).await?;
    let contacts = res.data_array();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0]["last_name"], "Turing");
    Ok(())
}

#[tokio::test]
async fn contact_fields_hide_owner_and_timestamps() -> Result<()> {
    let app = common::TestApp::new();
    let alice = app.user("alice").await;
    app.store.add_contact(alice.id, "Ada", "Lovelace").await;

    let res = app.get("/api/contacts", Some(&app.token_for(&alice))).await?;
    let contact = &res.data_array()[0];
    assert_eq!(contact["first_name"], "Ada");
    for hidden in ["owner_id", "date_created", "last_edit"] {
        assert!(contact.get(hidden).is_none(), "{hidden} leaked: {}", res.body);
    }
    Ok(())
}

#[tokio::test]
async fn contact_id_narrows_without_leaking() -> Result<()> {
    let app = common::TestApp::new();
    let alice = app.user("alice").await;
    let bob = app.user("bob").await;
    let ada = app.store.add_contact(alice.id, "Ada", "Lovelace").await;
    app.store.add_contact(alice.id, "Grace", "Hopper").await;
    let alan = app.store.add_contact(bob.id, "Alan", "Turing").await;
    let token = app.token_for(&alice);

    let res = app.get(&format!("/api/contacts/{}", ada.id), Some(&token)).await?;
    assert_eq!(ids(&res.data_array()), vec![ada.id]);

    // Someone else's contact and a missing id look the same: empty, not an error
    let res = app.get(&format!("/api/contacts/{}", alan.id), Some(&token)).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.data_array().is_empty());

    let res = app.get("/api/contacts/424242", Some(&token)).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.data_array().is_empty());

    // Id 0 is an ordinary narrowing id, not "list everything"
    let res = app.get("/api/contacts/0", Some(&token)).await?;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.data_array().is_empty());
    Ok(())
}

#[tokio::test]
async fn non_numeric_id_is_rejected() -> Result<()> {
    let app = common::TestApp::new();
    let alice = app.user("alice").await;

    let res = app.get("/api/contacts/abc", Some(&app.token_for(&alice))).await?;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn groups_are_scoped_to_the_caller() -> Result<()> {
    let app = common::TestApp::new();
    let alice = app.user("alice").await;
    let bob = app.user("bob").await;
    let family = app.store.add_group(alice.id, "Family").await;
    let chess = app.store.add_group(bob.id, "Chess club").await;
    let token = app.token_for(&alice);

    let res = app.get("/api/groups", Some(&token)).await?;
    let groups = res.data_array();
    assert_eq!(ids(&groups), vec![family.id]);
    assert_eq!(groups[0]["name"], "Family");
    assert!(groups[0].get("owner_id").is_none());

    let res = app.get(&format!("/api/groups/{}", family.id), Some(&token)).await?;
    assert_eq!(ids(&res.data_array()), vec![family.id]);

    let res = app.get(&format!("/api/groups/{}", chess.id), Some(&token)).await?;
    assert!(res.data_array().is_empty());
    Ok(())
}

#[tokio::test]
async fn read_only_resources_reject_writes() -> Result<()> {
    let app = common::TestApp::new();
    let alice = app.user("alice").await;
    let contact = app.store.add_contact(alice.id, "Ada", "Lovelace").await;
    let token = app.token_for(&alice);

    let paths = [
        "/api/contacts".to_string(),
        format!("/api/contacts/{}", contact.id),
        "/api/groups".to_string(),
        "/api/jots/daily".to_string(),
        "/api/jots/contact".to_string(),
        "/api/jots/group".to_string(),
    ];
    for path in &paths {
        for method in [Method::POST, Method::PUT, Method::DELETE] {
            let res = app.send(method.clone(), path, Some(&token), None).await?;
            assert_eq!(res.status, StatusCode::METHOD_NOT_ALLOWED, "{method} {path}");
        }
    }
    Ok(())
}

#[tokio::test]
async fn missing_or_bad_tokens_are_unauthorized() -> Result<()> {
    let app = common::TestApp::new();
    let alice = app.user("alice").await;
    app.store.add_contact(alice.id, "Ada", "Lovelace").await;

    let res = app.get("/api/contacts", None).await?;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    assert_eq!(res.body, "Missing Authorization header");

    let res = app.get("/api/groups", Some("not-a-jwt")).await?;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);

    let mut other = app.config.security.clone();
    other.jwt_secret = "someone-elses-secret".to_string();
    let forged = jot_api::auth::generate_jwt(&jot_api::auth::Claims::new(&alice, 1), &other)?;
    let res = app.get("/api/contacts", Some(&forged)).await?;
    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
    Ok(())
}
