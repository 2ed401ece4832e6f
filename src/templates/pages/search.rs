use crate::domain::ConversationRecord;
use crate::templates::components::{conversation_card, empty_note};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn search_results_page(query: &str, hits: &[ConversationRecord]) -> Markup {
    desktop_layout(
        "Busca",
        Some(query),
        html! {
            main class="container" {
                h1 { "Resultados para “" (query) "”" }
                @if hits.is_empty() {
                    (empty_note("Nenhum resultado encontrado."))
                } @else {
                    p class="muted" { (hits.len()) " resultado(s)" }
                    div class="grid" {
                        @for record in hits {
                            (conversation_card(record))
                        }
                    }
                }
            }
        },
    )
}
