use std::collections::HashMap;
use std::io::Read;

use astra::Request;
use chrono::Utc;
use tracing::{debug, info};
use url::form_urlencoded;

use crate::domain::drag::{GestureOutcome, GestureTrace};
use crate::domain::{views, RecordInput, Region, Status};
use crate::errors::{ServerError, StoreError};
use crate::responses::{html_response, html_with_status, json_response, see_other, ResultResp};
use crate::spreadsheets::export_conversations_xlsx;
use crate::store::RecordStore;
use crate::templates::pages::{self, DashboardVm};

/// Request bodies larger than this are refused.
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

pub fn handle(mut req: Request, store: &RecordStore) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    debug!(%method, %path, "request");

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => dashboard(store),

        ("GET", ["conversations", "new"]) => html_response(pages::add_conversation_page(
            &RecordInput::blank(Utc::now().date_naive()),
            None,
        )),
        ("POST", ["conversations"]) => create_conversation(&mut req, store),
        ("GET", ["conversations", id]) => {
            let record = store.find(id).ok_or(ServerError::NotFound)?;
            html_response(pages::conversation_detail_page(&record))
        }

        ("GET", ["categories"]) => {
            let records = store.load_all();
            html_response(pages::categories_page(&views::group_by_category(&records)))
        }

        ("GET", ["regions"]) => {
            let records = store.load_all();
            html_response(pages::regions_page(&views::region_counts(&records)))
        }
        ("GET", ["regions", code]) => {
            let region = Region::from_code(code).ok_or(ServerError::NotFound)?;
            let records = store.load_all();
            html_response(pages::region_detail_page(
                region,
                &views::group_by_region(&records, region),
            ))
        }

        ("GET", ["flow"]) => {
            let records = store.load_all();
            html_response(pages::status_flow_page(&views::status_board(&records)))
        }
        ("POST", ["flow", "move"]) => move_card(&mut req, store),
        ("POST", ["flow", "gesture"]) => apply_gesture(&mut req, store),

        ("GET", ["search"]) => {
            let params = parse_query(&req);
            let query = params.get("q").map(|q| q.trim()).unwrap_or("");
            if query.is_empty() {
                return see_other("/");
            }
            html_response(pages::search_results_page(query, &store.search(query)))
        }

        ("GET", ["settings"]) => html_response(pages::settings_page(&store.describe())),

        ("GET", ["export.xlsx"]) => export_conversations_xlsx(&store.load_all()),

        _ => Err(ServerError::NotFound),
    }
}

fn dashboard(store: &RecordStore) -> ResultResp {
    let records = store.load_all();
    let vm = DashboardVm {
        stats: views::summary_stats(&records, Utc::now().date_naive()),
        categories: views::category_counts(&records),
        recent: &records,
    };
    html_response(pages::dashboard_page(&vm))
}

fn create_conversation(req: &mut Request, store: &RecordStore) -> ResultResp {
    let form = read_form(req)?;
    let draft = RecordInput::from_form(&form);

    match store.insert(draft.clone(), Utc::now()) {
        Ok(_) => see_other("/"),
        Err(StoreError::Validation { field }) => {
            let message = format!("{} é obrigatório.", pages::field_label(field));
            html_with_status(400, pages::add_conversation_page(&draft, Some(&message)))
        }
        Err(err) => Err(err.into()),
    }
}

fn move_card(req: &mut Request, store: &RecordStore) -> ResultResp {
    let form = read_form(req)?;
    let id = form
        .get("id")
        .ok_or_else(|| ServerError::BadRequest("missing id".into()))?;
    let status = form
        .get("status")
        .and_then(|s| Status::from_label(s))
        .ok_or_else(|| ServerError::BadRequest("unknown status".into()))?;

    match store.update_status(id, status, Utc::now()) {
        Ok(_) => see_other("/flow"),
        Err(StoreError::NotFound(id)) => {
            debug!(%id, "move of a vanished conversation ignored");
            see_other("/flow")
        }
        Err(err) => Err(err.into()),
    }
}

fn apply_gesture(req: &mut Request, store: &RecordStore) -> ResultResp {
    let body = read_body(req)?;
    let trace: GestureTrace = serde_json::from_slice(&body)
        .map_err(|e| ServerError::BadRequest(format!("invalid gesture trace: {e}")))?;

    let outcome = trace
        .resolve()
        .ok_or_else(|| ServerError::BadRequest("gesture did not resolve".into()))?;

    let outcome = match outcome {
        GestureOutcome::Drop { record_id, status } => {
            match store.update_status(&record_id, status, Utc::now()) {
                Ok(_) => GestureOutcome::Drop { record_id, status },
                Err(StoreError::NotFound(_)) => {
                    debug!(%record_id, "drop on a vanished conversation ignored");
                    GestureOutcome::Cancelled { record_id }
                }
                Err(err) => return Err(err.into()),
            }
        }
        other => other,
    };

    info!(?outcome, "gesture resolved");
    json_response(&outcome)
}

fn read_body(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;
    if buf.len() as u64 > MAX_BODY_BYTES {
        return Err(ServerError::PayloadTooLarge);
    }
    Ok(buf)
}

fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let body = read_body(req)?;
    Ok(form_urlencoded::parse(&body).into_owned().collect())
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
