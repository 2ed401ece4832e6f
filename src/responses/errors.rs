use crate::errors::{ServerError, StoreError};
use crate::templates::components::error_page;
use crate::templates::pages::field_label;
use astra::{Body, Response, ResponseBuilder};
use tracing::{error, warn};

pub type ResultResp = Result<Response, ServerError>;

const SAVE_FAILED: &str = "Não foi possível salvar. Tente novamente.";

/// Convert a ServerError into a proper HTML response
pub fn error_to_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => html_error_response(404, "Página não encontrada."),
        ServerError::BadRequest(msg) => {
            warn!(reason = %msg, "bad request");
            html_error_response(400, &msg)
        }
        ServerError::PayloadTooLarge => {
            warn!("request body over limit");
            html_error_response(413, "Conteúdo grande demais. Nada foi salvo.")
        }
        ServerError::Store(StoreError::Validation { field }) => html_error_response(
            400,
            &format!("{} é obrigatório.", field_label(field)),
        ),
        ServerError::Store(StoreError::NotFound(_)) => {
            html_error_response(404, "Conversa não encontrada.")
        }
        ServerError::Store(err) => {
            error!(error = %err, "store failure");
            html_error_response(500, SAVE_FAILED)
        }
        ServerError::XlsxError(msg) => {
            error!(reason = %msg, "spreadsheet export failed");
            html_error_response(500, "Não foi possível gerar a planilha.")
        }
        ServerError::InternalError => html_error_response(500, "Erro interno."),
    }
}

/// Build an HTML error page
pub fn html_error_response(status: u16, message: &str) -> Response {
    let html = error_page(status, message).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.to_string())
        .body(Body::from(html))
        .unwrap_or_else(|_| Response::new(Body::from(message.to_string())))
}
