use maud::{html, Markup, DOCTYPE};

/// Stand-alone error page; does not depend on the store being readable.
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                title { "Erro " (status) }
                style {
                    "body { font-family: system-ui, sans-serif; max-width: 720px; margin: 4rem auto; padding: 1rem; }"
                    "h1 { font-size: 2rem; margin-bottom: 1rem; }"
                    "p { font-size: 1.1rem; color: #444; }"
                }
            }
            body {
                h1 { "Erro " (status) }
                p { (message) }
                p { a href="/" { "← Voltar ao início" } }
            }
        }
    }
}
