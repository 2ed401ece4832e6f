use crate::domain::{Category, ConversationRecord, RecordInput, Region, Source, Status};
use crate::templates::components::status_badge;
use crate::templates::desktop_layout;
use maud::{html, Markup};

const FIELD_STYLE: &str = "display: block; width: 100%; padding: 8px; margin: 4px 0 12px; border: 1px solid #d1d5db; border-radius: 6px; box-sizing: border-box;";

/// Form label of a draft field, for validation messages.
pub fn field_label(field: &str) -> &'static str {
    match field {
        "name" => "Nome",
        "phone" => "Telefone",
        "category" => "Categoria",
        "region" => "Estado",
        "source" => "Origem",
        "conversation_date" => "Data da conversa",
        "status" => "Status",
        _ => "Campo",
    }
}

/// The add form. `error` is shown above the fields and the draft is echoed back.
pub fn add_conversation_page(draft: &RecordInput, error: Option<&str>) -> Markup {
    let date = draft
        .conversation_date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default();

    desktop_layout(
        "Nova conversa",
        None,
        html! {
            main class="container" style="max-width: 640px;" {
                h1 { "Nova conversa" }

                @if let Some(message) = error {
                    p role="alert" style="background: #fee2e2; color: #991b1b; padding: 0.75rem 1rem; border-radius: 6px;" {
                        (message)
                    }
                }

                form class="card" action="/conversations" method="post" {
                    label for="name" { "Nome *" }
                    input type="text" id="name" name="name" value=(draft.name) required style=(FIELD_STYLE);

                    label for="phone" { "Telefone *" }
                    input type="tel" id="phone" name="phone" value=(draft.phone) placeholder="(11) 99999-0000" required style=(FIELD_STYLE);

                    label for="category" { "Categoria *" }
                    select id="category" name="category" style=(FIELD_STYLE) {
                        @for category in Category::ALL {
                            option value=(category.label()) selected[draft.category == Some(*category)] { (category.label()) }
                        }
                    }

                    label for="region" { "Estado *" }
                    select id="region" name="region" style=(FIELD_STYLE) {
                        @for region in Region::all() {
                            option value=(region.code()) selected[draft.region == Some(region)] {
                                (region.code()) " · " (region.name())
                            }
                        }
                    }

                    label for="source" { "Origem *" }
                    select id="source" name="source" style=(FIELD_STYLE) {
                        @for source in Source::ALL {
                            option value=(source.label()) selected[draft.source == Some(*source)] { (source.label()) }
                        }
                    }

                    label for="conversation_date" { "Data da conversa *" }
                    input type="date" id="conversation_date" name="conversation_date" value=(date) required style=(FIELD_STYLE);

                    label for="status" { "Status *" }
                    select id="status" name="status" style=(FIELD_STYLE) {
                        @for status in Status::ALL {
                            option value=(status.label()) selected[draft.status == Some(*status)] { (status.label()) }
                        }
                    }

                    label for="description" { "Descrição" }
                    textarea id="description" name="description" rows="4" style=(FIELD_STYLE) { (draft.description) }

                    button type="submit" style="background: #0B3C5D; color: white; padding: 10px 20px; border: none; border-radius: 6px; cursor: pointer;" {
                        "Salvar"
                    }
                }
            }
        },
    )
}

pub fn conversation_detail_page(record: &ConversationRecord) -> Markup {
    desktop_layout(
        &record.name,
        None,
        html! {
            main class="container" style="max-width: 640px;" {
                p { a href="/flow" { "← Fluxo" } }
                section class="card" {
                    div style="display: flex; justify-content: space-between; align-items: center;" {
                        h1 style="margin: 0;" { (record.name) }
                        (status_badge(record.status))
                    }
                    dl style="display: grid; grid-template-columns: max-content 1fr; gap: 0.5rem 1.5rem; margin-top: 1.5rem;" {
                        dt class="muted" { "Telefone" }
                        dd style="margin: 0;" {
                            a href=(record.whatsapp_link()) target="_blank" rel="noopener noreferrer" { (record.phone) }
                        }
                        dt class="muted" { "Categoria" }
                        dd style="margin: 0;" { (record.category.label()) }
                        dt class="muted" { "Estado" }
                        dd style="margin: 0;" {
                            a href=(format!("/regions/{}", record.region.code())) { (record.region.code()) " · " (record.region.name()) }
                        }
                        dt class="muted" { "Origem" }
                        dd style="margin: 0;" { (record.source.label()) }
                        dt class="muted" { "Data da conversa" }
                        dd style="margin: 0;" { (record.conversation_date.format("%d/%m/%Y")) }
                        dt class="muted" { "Criada em" }
                        dd style="margin: 0;" { (record.created_at.format("%d/%m/%Y %H:%M UTC")) }
                        dt class="muted" { "Atualizada em" }
                        dd style="margin: 0;" { (record.updated_at.format("%d/%m/%Y %H:%M UTC")) }
                    }
                    @if !record.description.is_empty() {
                        h3 { "Descrição" }
                        p style="white-space: pre-wrap;" { (record.description) }
                    }
                }
            }
        },
    )
}
