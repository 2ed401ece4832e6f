use crate::domain::{ConversationRecord, Region};
use crate::templates::components::{conversation_card, empty_note};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Tile shade by count: grey when empty, darker with more conversations.
fn tile_color(count: usize) -> &'static str {
    match count {
        0 => "#f3f4f6",
        1..=2 => "#d1fae5",
        3..=5 => "#6ee7b7",
        _ => "#10b981",
    }
}

pub fn regions_page(counts: &[(Region, usize)]) -> Markup {
    desktop_layout(
        "Estados",
        None,
        html! {
            main class="container" {
                h1 { "Estados" }
                div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(110px, 1fr)); gap: 0.75rem;" {
                    @for (region, count) in counts {
                        a href=(format!("/regions/{}", region.code()))
                          title=(region.name())
                          style=(format!("display: block; padding: 1rem; border-radius: 8px; text-align: center; color: #111827; text-decoration: none; background: {};", tile_color(*count))) {
                            strong style="font-size: 1.25rem;" { (region.code()) }
                            div class="muted" { (count) }
                        }
                    }
                }
            }
        },
    )
}

pub fn region_detail_page(region: Region, records: &[ConversationRecord]) -> Markup {
    desktop_layout(
        region.name(),
        None,
        html! {
            main class="container" {
                p { a href="/regions" { "← Estados" } }
                h1 { (region.name()) " (" (region.code()) ")" }
                p class="muted" { (records.len()) " conversa(s)" }
                @if records.is_empty() {
                    (empty_note("Nenhuma conversa neste estado."))
                } @else {
                    div class="grid" {
                        @for record in records {
                            (conversation_card(record))
                        }
                    }
                }
            }
        },
    )
}
