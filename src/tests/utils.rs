use crate::db::RemoteQueryStore;
use crate::domain::{Category, RecordInput, Region, Source, Status};
use crate::store::{LocalSnapshotStore, RecordStore};
use astra::{Body, Response};
use chrono::{NaiveDate, Utc};
use http::{Method, Request};
use std::io::Read;
use tempfile::TempDir;

/// A record store over a fresh snapshot directory. Keep the `TempDir` alive.
pub fn init_test_store() -> (TempDir, RecordStore) {
    let dir = TempDir::new().expect("temp dir");
    let store = RecordStore::new(LocalSnapshotStore::open(dir.path()).expect("snapshot store"));
    (dir, store)
}

/// Same, over a scratch SQLite file.
pub fn init_test_sqlite_store() -> (TempDir, RecordStore) {
    let dir = TempDir::new().expect("temp dir");
    let store = RecordStore::new(
        RemoteQueryStore::open(dir.path().join("test.sqlite3")).expect("sqlite store"),
    );
    (dir, store)
}

pub fn draft(name: &str, phone: &str, region: &str, status: Status) -> RecordInput {
    RecordInput {
        name: name.to_string(),
        phone: phone.to_string(),
        category: Some(Category::Purchase),
        region: Region::from_code(region),
        source: Some(Source::WhatsApp),
        description: String::new(),
        conversation_date: NaiveDate::from_ymd_opt(2026, 3, 10),
        status: Some(status),
    }
}

pub fn seed(store: &RecordStore, name: &str, phone: &str, region: &str, status: Status) -> String {
    store
        .insert(draft(name, phone, region, status), Utc::now())
        .expect("seed insert")
        .id
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.as_bytes().to_vec()))
        .unwrap()
}

pub fn post_json(uri: &str, json: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(json.as_bytes().to_vec()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
