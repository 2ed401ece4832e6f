use crate::domain::Status;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_sqlite_store, init_test_store, seed};

#[test]
fn blank_query_goes_back_to_dashboard() {
    let (_dir, store) = init_test_store();
    seed(&store, "Ana Silva", "11999990000", "SP", Status::Started);

    for uri in ["/search", "/search?q=", "/search?q=+++"] {
        let resp = handle(get(uri), &store).unwrap();
        assert_eq!(resp.status(), 303, "{uri}");
        assert_eq!(resp.headers().get("Location").unwrap(), "/");
    }
}

#[test]
fn query_matches_case_insensitively() {
    let (_dir, store) = init_test_store();
    seed(&store, "Ana Silva", "11999990000", "SP", Status::Started);
    seed(&store, "Bruno Costa", "21988880000", "RJ", Status::Started);

    let resp = handle(get("/search?q=SILVA"), &store).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Ana Silva"));
    assert!(!body.contains("Bruno Costa"));
    // The header search box keeps the query.
    assert!(body.contains(r#"value="SILVA""#));
}

#[test]
fn region_code_and_phone_are_searchable() {
    let (_dir, store) = init_test_store();
    seed(&store, "Ana Silva", "11999990000", "SP", Status::Started);
    seed(&store, "Bruno Costa", "21988880000", "RJ", Status::Started);

    let body = body_string(handle(get("/search?q=rj"), &store).unwrap());
    assert!(body.contains("Bruno Costa"));
    assert!(!body.contains("Ana Silva"));

    let body = body_string(handle(get("/search?q=9999"), &store).unwrap());
    assert!(body.contains("Ana Silva"));
}

#[test]
fn no_hits_shows_message() {
    let (_dir, store) = init_test_store();
    seed(&store, "Ana Silva", "11999990000", "SP", Status::Started);

    let body = body_string(handle(get("/search?q=zzz"), &store).unwrap());
    assert!(body.contains("Nenhum resultado encontrado."));
}

#[test]
fn sqlite_search_matches_like_the_snapshot() {
    let (_dir, store) = init_test_sqlite_store();
    seed(&store, "Ana Silva", "11999990000", "SP", Status::Started);
    seed(&store, "Bruno Costa", "21988880000", "RJ", Status::Started);

    let body = body_string(handle(get("/search?q=ana"), &store).unwrap());
    assert!(body.contains("Ana Silva"));
    assert!(!body.contains("Bruno Costa"));
}
