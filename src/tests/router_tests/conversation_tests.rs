use crate::domain::{Category, Source, Status};
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, init_test_sqlite_store, init_test_store, post_form, seed};

const VALID_FORM: &str = "name=Ana+Silva&phone=%2811%29+99999-0000&category=Venda&region=SP\
&source=Indica%C3%A7%C3%A3o&description=quer+simular&conversation_date=2026-03-10&status=Iniciada";

#[test]
fn add_form_loads_with_defaults() {
    let (_dir, store) = init_test_store();

    let resp = handle(get("/conversations/new"), &store).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(r#"action="/conversations""#));
    assert!(body.contains(r#"name="phone""#));
    assert!(body.contains("Pergunta rápida"));
}

#[test]
fn posting_a_valid_form_stores_and_redirects() {
    let (_dir, store) = init_test_store();

    let resp = handle(post_form("/conversations", VALID_FORM), &store).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(resp.headers().get("Location").unwrap(), "/");

    let records = store.load_all();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.name, "Ana Silva");
    assert_eq!(record.phone, "(11) 99999-0000");
    assert_eq!(record.category, Category::Sale);
    assert_eq!(record.region.code(), "SP");
    assert_eq!(record.source, Source::Referral);
    assert_eq!(record.status, Status::Started);
    assert_eq!(record.created_at, record.updated_at);
}

#[test]
fn missing_name_rerenders_form_with_400() {
    let (_dir, store) = init_test_store();
    let form = VALID_FORM.replace("name=Ana+Silva", "name=+++");

    let resp = handle(post_form("/conversations", &form), &store).unwrap();
    assert_eq!(resp.status(), 400);

    let body = body_string(resp);
    assert!(body.contains("Nome é obrigatório."));
    // The rest of the draft is echoed back.
    assert!(body.contains("quer simular"));
    assert!(store.load_all().is_empty());
}

#[test]
fn unknown_region_is_a_validation_error() {
    let (_dir, store) = init_test_store();
    let form = VALID_FORM.replace("region=SP", "region=XX");

    let resp = handle(post_form("/conversations", &form), &store).unwrap();
    assert_eq!(resp.status(), 400);
    assert!(body_string(resp).contains("Estado é obrigatório."));
    assert!(store.load_all().is_empty());
}

#[test]
fn detail_page_shows_record() {
    let (_dir, store) = init_test_store();
    let id = seed(&store, "Ana Silva", "11999990000", "SP", Status::Started);

    let resp = handle(get(&format!("/conversations/{id}")), &store).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Ana Silva"));
    assert!(body.contains("São Paulo"));
    assert!(body.contains("10/03/2026"));
}

#[test]
fn detail_of_unknown_id_is_not_found() {
    let (_dir, store) = init_test_store();

    let err = handle(get("/conversations/nope"), &store).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn sqlite_backend_serves_the_same_routes() {
    let (_dir, store) = init_test_sqlite_store();

    let resp = handle(post_form("/conversations", VALID_FORM), &store).unwrap();
    assert_eq!(resp.status(), 303);

    let records = store.load_all();
    assert_eq!(records.len(), 1);

    let resp = handle(get(&format!("/conversations/{}", records[0].id)), &store).unwrap();
    assert!(body_string(resp).contains("Ana Silva"));
}

#[test]
fn oversize_form_is_refused_and_nothing_is_stored() {
    let (_dir, store) = init_test_store();
    let long = "a".repeat(crate::router::MAX_BODY_BYTES as usize);
    let form = format!("{VALID_FORM}&description={long}");

    let err = handle(post_form("/conversations", &form), &store).unwrap_err();
    assert!(matches!(err, ServerError::PayloadTooLarge));
    assert!(store.load_all().is_empty());
}

#[test]
fn long_description_under_the_limit_is_kept_verbatim() {
    let (_dir, store) = init_test_store();
    let long = "b".repeat(60 * 1024);
    let form = VALID_FORM.replace("description=quer+simular", &format!("description={long}"));

    let resp = handle(post_form("/conversations", &form), &store).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(store.load_all()[0].description, long);
}
