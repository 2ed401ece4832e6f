use maud::{html, Markup};

use crate::domain::{ConversationRecord, Status};

pub mod error;
pub mod palette;

pub use error::error_page;
pub use palette::{category_color, status_badge_colors, status_border};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h3 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

pub fn stat_card(label: &str, value: usize, color: &str) -> Markup {
    html! {
        div class="card" style=(format!("border-left: 6px solid {color};")) {
            p class="muted" style="margin: 0;" { (label) }
            p style="font-size: 2rem; font-weight: bold; margin: 0.25rem 0 0;" { (value) }
        }
    }
}

pub fn status_badge(status: Status) -> Markup {
    let (bg, fg) = status_badge_colors(status);
    html! {
        span class="badge" style=(format!("background: {bg}; color: {fg};")) { (status.label()) }
    }
}

/// A conversation as a card: name, status, WhatsApp link, region, category, date.
pub fn conversation_card(record: &ConversationRecord) -> Markup {
    html! {
        div class="card" data-id=(record.id) {
            div style="display: flex; justify-content: space-between; align-items: start; gap: 0.5rem;" {
                h4 style="margin: 0;" {
                    a href=(format!("/conversations/{}", record.id)) style="color: inherit;" { (record.name) }
                }
                (status_badge(record.status))
            }
            ul style="list-style: none; padding: 0; margin: 0.75rem 0 0; line-height: 1.6;" {
                li {
                    a href=(record.whatsapp_link()) target="_blank" rel="noopener noreferrer" style="color: #25D366;" {
                        (record.phone)
                    }
                }
                li class="muted" { (record.region.code()) " · " (record.region.name()) }
                li class="muted" { (record.category.label()) }
                li class="muted" { (record.conversation_date.format("%d/%m/%Y")) }
            }
            @if !record.description.is_empty() {
                p class="muted" style="margin: 0.75rem 0 0;" { (record.description) }
            }
        }
    }
}

pub fn empty_note(text: &str) -> Markup {
    html! {
        p class="muted" style="text-align: center; padding: 2rem 0;" { (text) }
    }
}
