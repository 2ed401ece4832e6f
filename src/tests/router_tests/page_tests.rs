use crate::domain::Status;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_store, seed};

#[test]
fn categories_lists_every_category() {
    let (_dir, store) = init_test_store();
    seed(&store, "Ana Silva", "11999990000", "SP", Status::Started);

    let body = body_string(handle(get("/categories"), &store).unwrap());
    for label in ["Compra", "Venda", "Consórcio", "Pergunta rápida", "Outro"] {
        assert!(body.contains(label), "{label}");
    }
    assert!(body.contains("Ana Silva"));
}

#[test]
fn regions_map_has_all_tiles() {
    let (_dir, store) = init_test_store();

    let body = body_string(handle(get("/regions"), &store).unwrap());
    assert_eq!(body.matches(r#"href="/regions/"#).count(), 27);
}

#[test]
fn region_detail_accepts_lowercase_code() {
    let (_dir, store) = init_test_store();
    seed(&store, "Bruno Costa", "21988880000", "RJ", Status::Started);
    seed(&store, "Ana Silva", "11999990000", "SP", Status::Started);

    let resp = handle(get("/regions/rj"), &store).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Rio de Janeiro"));
    assert!(body.contains("Bruno Costa"));
    assert!(!body.contains("Ana Silva"));
}

#[test]
fn unknown_region_is_not_found() {
    let (_dir, store) = init_test_store();
    let err = handle(get("/regions/XX"), &store).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn settings_shows_name_version_and_backend() {
    let (_dir, store) = init_test_store();

    let body = body_string(handle(get("/settings"), &store).unwrap());
    assert!(body.contains("Mapa de Contatos"));
    assert!(body.contains(env!("CARGO_PKG_VERSION")));
    assert!(body.contains("local snapshot"));
}

#[test]
fn export_downloads_a_workbook() {
    let (_dir, store) = init_test_store();
    seed(&store, "Ana Silva", "11999990000", "SP", Status::Started);

    let resp = handle(get("/export.xlsx"), &store).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert!(resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("conversas.xlsx"));
}

#[test]
fn unknown_route_is_not_found() {
    let (_dir, store) = init_test_store();
    let err = handle(get("/nope"), &store).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
