use maud::{html, Markup, DOCTYPE};

const NAV: &[(&str, &str)] = &[
    ("/", "Dashboard"),
    ("/conversations/new", "Adicionar"),
    ("/categories", "Categorias"),
    ("/regions", "Estados"),
    ("/flow", "Fluxo"),
    ("/settings", "Configurações"),
];

const BASE_CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f9fafb; color: #111827; }
header { display: flex; align-items: center; justify-content: space-between; gap: 1rem; padding: 0.75rem 1.5rem; background: #0B3C5D; color: white; flex-wrap: wrap; }
header a { color: white; text-decoration: none; }
header nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; flex-wrap: wrap; }
main.container { max-width: 1200px; margin: 0 auto; padding: 1.5rem; }
.card { background: white; border-radius: 8px; box-shadow: 0 1px 2px rgba(0,0,0,0.08); padding: 1rem 1.25rem; margin-bottom: 1rem; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 1rem; }
.badge { padding: 2px 8px; border-radius: 999px; font-size: 0.75rem; font-weight: 600; white-space: nowrap; }
.muted { color: #6b7280; }
.board { display: flex; gap: 1rem; overflow-x: auto; padding-bottom: 1rem; }
.column { flex: 0 0 300px; background: white; border-radius: 8px; border-top: 4px solid #9ca3af; min-height: 200px; }
.column.drop-hover { outline: 2px dashed #5BE38C; }
.draggable { cursor: move; touch-action: none; user-select: none; }
"#;

pub fn desktop_layout(title: &str, search: Option<&str>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Mapa de Contatos" }
                style { (maud::PreEscaped(BASE_CSS)) }
            }
            body {
                header {
                    a href="/" { h3 style="margin: 0;" { "Mapa de Contatos" } }
                    nav {
                        ul {
                            @for (href, label) in NAV {
                                li { a href=(href) { (label) } }
                            }
                        }
                    }
                    form action="/search" method="get" style="margin: 0;" {
                        input
                            type="search"
                            id="q"
                            name="q"
                            aria-label="Buscar"
                            value=(search.unwrap_or(""))
                            placeholder="Buscar nome, telefone, categoria, estado"
                            style="padding: 6px 10px; border-radius: 6px; border: none; min-width: 260px;";
                    }
                }
                (content)
            }
        }
    }
}
