use crate::domain::{ConversationRecord, Status};
use crate::templates::components::{conversation_card, status_border};
use crate::templates::desktop_layout;
use maud::{html, Markup, PreEscaped};

// Records pointer events for one card and hands the trace to the server,
// which decides tap, drop or cancel.
const GESTURE_SCRIPT: &str = r#"
(function () {
  var HOLD_MS = 200;
  document.querySelectorAll('.draggable').forEach(function (card) {
    var trace = null, timer = null, start = null;

    function point(e) { return { x: e.clientX, y: e.clientY }; }
    function now() { return Math.round(performance.now()); }
    function columnAt(e) {
      card.style.visibility = 'hidden';
      var el = document.elementFromPoint(e.clientX, e.clientY);
      card.style.visibility = '';
      var col = el && el.closest('.column');
      return col ? col.dataset.status : null;
    }
    function highlight(status) {
      document.querySelectorAll('.column').forEach(function (col) {
        col.classList.toggle('drop-hover', col.dataset.status === status);
      });
    }
    function finish() {
      clearTimeout(timer);
      card.style.transform = '';
      highlight(null);
      var body = JSON.stringify(trace);
      trace = null;
      fetch('/flow/gesture', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: body
      }).then(function (r) { return r.json(); }).then(function (out) {
        if (out.outcome === 'tap') { window.location = '/conversations/' + out.record_id; }
        else if (out.outcome === 'drop') { window.location.reload(); }
      });
    }

    card.addEventListener('pointerdown', function (e) {
      if (e.target.closest('a, button, select')) return;
      start = point(e);
      trace = { record_id: card.dataset.id, pointer: e.pointerType === 'touch' ? 'touch' : 'mouse', events: [] };
      trace.events.push({ kind: 'down', at: start, t_ms: now() });
      card.setPointerCapture(e.pointerId);
      if (trace.pointer === 'touch') {
        timer = setTimeout(function () { if (trace) trace.events.push({ kind: 'tick', t_ms: now() }); }, HOLD_MS);
      }
    });
    card.addEventListener('pointermove', function (e) {
      if (!trace) return;
      var p = point(e);
      trace.events.push({ kind: 'move', at: p, t_ms: now() });
      card.style.transform = 'translate(' + (p.x - start.x) + 'px,' + (p.y - start.y) + 'px)';
      highlight(columnAt(e));
    });
    card.addEventListener('pointerup', function (e) {
      if (!trace) return;
      trace.events.push({ kind: 'up', at: point(e), t_ms: now(), target: columnAt(e) });
      finish();
    });
    card.addEventListener('pointercancel', function () {
      if (!trace) return;
      trace.events.push({ kind: 'interrupt' });
      finish();
    });
  });
})();
"#;

pub fn status_flow_page(board: &[(Status, Vec<ConversationRecord>)]) -> Markup {
    desktop_layout(
        "Fluxo",
        None,
        html! {
            main class="container" style="max-width: none;" {
                h1 { "Fluxo de atendimento" }
                p class="muted" { "Arraste um cartão para outra coluna para mudar o status." }
                div class="board" {
                    @for (status, records) in board {
                        section class="column" data-status=(status.label())
                            style=(format!("border-top-color: {};", status_border(*status))) {
                            h3 style="padding: 0.75rem 1rem; margin: 0;" {
                                (status.label()) " "
                                span class="muted" { "(" (records.len()) ")" }
                            }
                            div style="padding: 0 0.75rem 0.75rem;" {
                                @for record in records {
                                    div class="draggable" data-id=(record.id) {
                                        (conversation_card(record))
                                        (move_form(record))
                                    }
                                }
                            }
                        }
                    }
                }
                script { (PreEscaped(GESTURE_SCRIPT)) }
            }
        },
    )
}

/// Plain form for moving a card without pointer gestures.
fn move_form(record: &ConversationRecord) -> Markup {
    html! {
        form action="/flow/move" method="post" style="display: flex; gap: 4px; margin: -0.5rem 0 1rem;" {
            input type="hidden" name="id" value=(record.id);
            select name="status" aria-label="Mover para" style="flex: 1;" {
                @for status in Status::ALL {
                    option value=(status.label()) selected[*status == record.status] { (status.label()) }
                }
            }
            button type="submit" { "Mover" }
        }
    }
}
