use crate::domain::Status;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_store, post_form, post_json, seed};

fn drag_trace(id: &str, target: &str) -> String {
    format!(
        r#"{{"record_id": "{id}", "pointer": "mouse", "events": [
            {{"kind": "down", "at": {{"x": 10.0, "y": 10.0}}, "t_ms": 0}},
            {{"kind": "move", "at": {{"x": 60.0, "y": 12.0}}, "t_ms": 40}},
            {{"kind": "up", "at": {{"x": 320.0, "y": 14.0}}, "t_ms": 120, "target": "{target}"}}
        ]}}"#
    )
}

#[test]
fn board_has_one_column_per_status() {
    let (_dir, store) = init_test_store();
    seed(&store, "Ana Silva", "11999990000", "SP", Status::AwaitingReply);

    let resp = handle(get("/flow"), &store).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    for status in Status::ALL {
        assert!(body.contains(&format!(r#"data-status="{}""#, status.label())));
    }
    assert!(body.contains("Ana Silva"));
    assert!(body.contains(r#"action="/flow/move""#));
}

#[test]
fn move_form_reassigns_status() {
    let (_dir, store) = init_test_store();
    let id = seed(&store, "Ana Silva", "11999990000", "SP", Status::Started);

    let form = format!("id={id}&status=Conclu%C3%ADda");
    let resp = handle(post_form("/flow/move", &form), &store).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/flow");

    assert_eq!(store.find(&id).unwrap().status, Status::Completed);
}

#[test]
fn move_of_unknown_id_redirects_silently() {
    let (_dir, store) = init_test_store();
    seed(&store, "Ana Silva", "11999990000", "SP", Status::Started);

    let resp = handle(post_form("/flow/move", "id=gone&status=Perdida"), &store).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(store.load_all()[0].status, Status::Started);
}

#[test]
fn move_with_unknown_status_is_rejected() {
    let (_dir, store) = init_test_store();
    let id = seed(&store, "Ana Silva", "11999990000", "SP", Status::Started);

    let err = handle(post_form("/flow/move", &format!("id={id}&status=Arquivada")), &store)
        .unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn dragged_card_is_dropped_on_target_column() {
    let (_dir, store) = init_test_store();
    let id = seed(&store, "Ana Silva", "11999990000", "SP", Status::Started);

    let resp = handle(post_json("/flow/gesture", &drag_trace(&id, "Concluída")), &store).unwrap();
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(body["outcome"], "drop");
    assert_eq!(body["status"], "Concluída");
    assert_eq!(store.find(&id).unwrap().status, Status::Completed);
}

#[test]
fn tap_opens_record_without_touching_it() {
    let (_dir, store) = init_test_store();
    let id = seed(&store, "Ana Silva", "11999990000", "SP", Status::Started);
    let before = store.find(&id).unwrap();

    let trace = format!(
        r#"{{"record_id": "{id}", "pointer": "touch", "events": [
            {{"kind": "down", "at": {{"x": 10.0, "y": 10.0}}, "t_ms": 0}},
            {{"kind": "move", "at": {{"x": 13.0, "y": 11.0}}, "t_ms": 50}},
            {{"kind": "up", "at": {{"x": 13.0, "y": 11.0}}, "t_ms": 90, "target": "Perdida"}}
        ]}}"#
    );
    let resp = handle(post_json("/flow/gesture", &trace), &store).unwrap();

    let body: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(body["outcome"], "tap");
    assert_eq!(body["record_id"], id.as_str());
    assert_eq!(store.find(&id).unwrap(), before);
}

#[test]
fn drop_on_vanished_record_reports_cancelled() {
    let (_dir, store) = init_test_store();

    let resp = handle(post_json("/flow/gesture", &drag_trace("gone", "Perdida")), &store).unwrap();
    let body: serde_json::Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(body["outcome"], "cancelled");
}

#[test]
fn malformed_trace_is_bad_request() {
    let (_dir, store) = init_test_store();

    let err = handle(post_json("/flow/gesture", "{\"record_id\": 1"), &store).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    let unfinished = r#"{"record_id": "x", "pointer": "mouse", "events": [
        {"kind": "down", "at": {"x": 0.0, "y": 0.0}, "t_ms": 0}
    ]}"#;
    let err = handle(post_json("/flow/gesture", unfinished), &store).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}
