// src/tests/router_tests/dashboard_tests.rs

use crate::domain::Status;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_store, seed};

#[test]
fn empty_dashboard_renders() {
    let (_dir, store) = init_test_store();

    let resp = handle(get("/"), &store).expect("Failed to handle request");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Dashboard"));
    assert!(body.contains("Nenhuma conversa registrada ainda."));
}

#[test]
fn dashboard_shows_counts_and_recent_cards() {
    let (_dir, store) = init_test_store();
    seed(&store, "Ana Silva", "11999990000", "SP", Status::InProgress);
    seed(&store, "Bruno Costa", "21988880000", "RJ", Status::Completed);
    seed(&store, "Carla Dias", "11977770000", "SP", Status::Started);

    let resp = handle(get("/"), &store).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Ana Silva"));
    assert!(body.contains("Bruno Costa"));
    // SP leads the region list with two of three records.
    assert!(body.contains("/regions/SP"));
    assert!(body.contains("2 (67%)"));
    assert!(body.contains("https://wa.me/11999990000"));
}
