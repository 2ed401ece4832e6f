use crate::domain::ConversationRecord;
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use rust_xlsxwriter::{Format, Workbook, XlsxError};

const HEADERS: [&str; 11] = [
    "ID",
    "Nome",
    "Telefone",
    "Categoria",
    "Estado",
    "Origem",
    "Descrição",
    "Data da conversa",
    "Status",
    "Criada em",
    "Atualizada em",
];

fn xlsx_err(what: &str) -> impl Fn(XlsxError) -> ServerError + '_ {
    move |e| ServerError::XlsxError(format!("Failed to write {what}: {e}"))
}

/// One row per record, in store order.
pub fn export_conversations_xlsx(records: &[ConversationRecord]) -> ResultResp {
    let buffer = build_workbook(records)?;
    xlsx_response(buffer, "conversas.xlsx")
}

pub fn build_workbook(records: &[ConversationRecord]) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let bold = Format::new().set_bold();

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(xlsx_err("header"))?;
    }

    for (i, record) in records.iter().enumerate() {
        let r = (i + 1) as u32;
        let cells = [
            record.id.clone(),
            record.name.clone(),
            record.phone.clone(),
            record.category.label().to_string(),
            record.region.code().to_string(),
            record.source.label().to_string(),
            record.description.clone(),
            record.conversation_date.format("%Y-%m-%d").to_string(),
            record.status.label().to_string(),
            record.created_at.to_rfc3339(),
            record.updated_at.to_rfc3339(),
        ];

        for (col, value) in cells.iter().enumerate() {
            worksheet
                .write_string(r, col as u16, value)
                .map_err(xlsx_err(HEADERS[col]))?;
        }
    }

    worksheet.autofit();

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}
