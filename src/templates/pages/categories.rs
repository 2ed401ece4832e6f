use crate::domain::{Category, ConversationRecord};
use crate::templates::components::{category_color, conversation_card};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn categories_page(groups: &[(Category, Vec<ConversationRecord>)]) -> Markup {
    desktop_layout(
        "Categorias",
        None,
        html! {
            main class="container" {
                h1 { "Categorias" }
                @for (category, records) in groups {
                    section style="margin-bottom: 2rem;" {
                        h2 style=(format!("border-left: 6px solid {}; padding-left: 0.5rem;", category_color(*category))) {
                            (category.label()) " "
                            span class="muted" style="font-size: 1rem;" { "(" (records.len()) ")" }
                        }
                        @if records.is_empty() {
                            p class="muted" { "Nenhuma conversa nesta categoria." }
                        } @else {
                            div class="grid" {
                                @for record in records {
                                    (conversation_card(record))
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
