use crate::domain::views::SummaryStats;
use crate::domain::{Category, ConversationRecord};
use crate::templates::components::{category_color, conversation_card, empty_note, stat_card};
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Cards shown under "Recentes".
pub const RECENT_LIMIT: usize = 6;

pub struct DashboardVm<'a> {
    pub stats: SummaryStats,
    pub categories: Vec<(Category, usize)>,
    pub recent: &'a [ConversationRecord],
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    desktop_layout(
        "Dashboard",
        None,
        html! {
            main class="container" {
                div style="display: flex; justify-content: space-between; align-items: center;" {
                    h1 { "Dashboard" }
                    div {
                        a href="/export.xlsx" style="margin-right: 1rem;" { "Exportar planilha" }
                        a href="/conversations/new" { "+ Nova conversa" }
                    }
                }

                div class="grid" {
                    (stat_card("Total de conversas", vm.stats.total, "#0B3C5D"))
                    (stat_card("Hoje", vm.stats.created_today, "#3b82f6"))
                    (stat_card("Em andamento", vm.stats.in_progress, "#eab308"))
                    (stat_card("Concluídas", vm.stats.completed, "#22c55e"))
                }

                div class="grid" style="margin-top: 1rem;" {
                    (category_section(&vm.categories))
                    (top_regions_section(&vm.stats))
                }

                h2 { "Recentes" }
                @if vm.recent.is_empty() {
                    (empty_note("Nenhuma conversa registrada ainda."))
                } @else {
                    div class="grid" {
                        @for record in vm.recent.iter().take(RECENT_LIMIT) {
                            (conversation_card(record))
                        }
                    }
                }
            }
        },
    )
}

fn category_section(categories: &[(Category, usize)]) -> Markup {
    html! {
        section class="card" {
            h3 { "Por categoria" }
            @if categories.is_empty() {
                p class="muted" { "Sem dados." }
            }
            ul style="list-style: none; padding: 0; margin: 0;" {
                @for (category, count) in categories {
                    li style="display: flex; justify-content: space-between; padding: 4px 0;" {
                        span {
                            span style=(format!("display: inline-block; width: 10px; height: 10px; border-radius: 50%; margin-right: 8px; background: {};", category_color(*category))) {}
                            (category.label())
                        }
                        strong { (count) }
                    }
                }
            }
        }
    }
}

fn top_regions_section(stats: &SummaryStats) -> Markup {
    html! {
        section class="card" {
            h3 { "Estados com mais conversas" }
            @if stats.top_regions.is_empty() {
                p class="muted" { "Sem dados." }
            }
            @for share in &stats.top_regions {
                div style="margin-bottom: 0.5rem;" {
                    div style="display: flex; justify-content: space-between;" {
                        a href=(format!("/regions/{}", share.region.code())) { (share.region.code()) " · " (share.region.name()) }
                        span { (share.count) " (" (format!("{:.0}", share.percent)) "%)" }
                    }
                    div style="background: #e5e7eb; height: 6px; border-radius: 3px;" {
                        div style=(format!("background: #5BE38C; height: 6px; border-radius: 3px; width: {:.1}%;", share.percent)) {}
                    }
                }
            }
        }
    }
}
