use crate::templates::components::card;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub const APP_NAME: &str = "Mapa de Contatos";

pub fn settings_page(backend: &str) -> Markup {
    desktop_layout(
        "Configurações",
        None,
        html! {
            main class="container" style="max-width: 640px;" {
                h1 { "Configurações" }
                (card("Sobre", html! {
                    p { strong { (APP_NAME) } " versão " (env!("CARGO_PKG_VERSION")) }
                    p class="muted" { "Registro de conversas e contatos por categoria, estado e status." }
                }))
                (card("Armazenamento", html! {
                    p { (backend) }
                    p class="muted" { "Definido por CONVERSAS_BACKEND ao iniciar." }
                }))
                (card("Exportar", html! {
                    a href="/export.xlsx" { "Baixar todas as conversas (.xlsx)" }
                }))
            }
        },
    )
}
