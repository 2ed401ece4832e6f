// src/domain/drag.rs

//! Pointer gesture on a status-board card.
//!
//! `Idle -> Candidate -> Dragging -> (Dropped | Cancelled)`. A contact that
//! lifts while still a candidate is a tap and never moves the card.
//! Mouse contacts become drags once they travel past a small threshold; touch
//! contacts become drags after a short hold, or when they travel past a
//! (larger) threshold.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::conversation::Status;

pub const MOUSE_DRAG_THRESHOLD_PX: f64 = 5.0;
pub const TOUCH_DRAG_THRESHOLD_PX: f64 = 10.0;
pub const TOUCH_HOLD_MS: u64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    Mouse,
    Touch,
}

impl PointerKind {
    fn threshold(self) -> f64 {
        match self {
            PointerKind::Mouse => MOUSE_DRAG_THRESHOLD_PX,
            PointerKind::Touch => TOUCH_DRAG_THRESHOLD_PX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Events as reported by the page. `t_ms` is milliseconds on the page's clock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PointerEvent {
    Down {
        at: Point,
        t_ms: u64,
    },
    Move {
        at: Point,
        t_ms: u64,
    },
    /// The hold timer fired.
    Tick {
        t_ms: u64,
    },
    /// `target` is the status column under the contact, if any.
    Up {
        at: Point,
        t_ms: u64,
        #[serde(default)]
        target: Option<Status>,
    },
    Interrupt,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Candidate { origin: Point, started_ms: u64 },
    Dragging,
    Dropped { status: Status },
    Cancelled,
}

impl DragState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, DragState::Dropped { .. } | DragState::Cancelled)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum GestureOutcome {
    /// Contact lifted before the gesture became a drag: open the record.
    Tap { record_id: String },
    /// Dropped on a column: reassign the status.
    Drop { record_id: String, status: Status },
    Cancelled { record_id: String },
}

/// One card's gesture.
#[derive(Debug, Clone)]
pub struct DragGesture {
    record_id: String,
    pointer: PointerKind,
    state: DragState,
}

impl DragGesture {
    pub fn new(record_id: impl Into<String>, pointer: PointerKind) -> Self {
        Self {
            record_id: record_id.into(),
            pointer,
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// Feed one event. Returns an outcome when the gesture resolves.
    pub fn handle(&mut self, event: &PointerEvent) -> Option<GestureOutcome> {
        if self.state.is_terminal() {
            return None;
        }

        match event {
            PointerEvent::Down { at, t_ms } => {
                self.on_down(*at, *t_ms);
                None
            }
            PointerEvent::Move { at, t_ms } => {
                self.on_move(*at, *t_ms);
                None
            }
            PointerEvent::Tick { t_ms } => {
                self.on_tick(*t_ms);
                None
            }
            PointerEvent::Up { at, t_ms, target } => self.on_up(*at, *t_ms, *target),
            PointerEvent::Interrupt => self.on_interrupt(),
        }
    }

    fn on_down(&mut self, at: Point, t_ms: u64) {
        if self.state == DragState::Idle {
            self.state = DragState::Candidate {
                origin: at,
                started_ms: t_ms,
            };
        }
    }

    fn on_move(&mut self, at: Point, t_ms: u64) {
        self.promote_if_held(t_ms);

        if let DragState::Candidate { origin, .. } = self.state {
            if origin.distance(at) > self.pointer.threshold() {
                self.state = DragState::Dragging;
            }
        }
    }

    fn on_tick(&mut self, t_ms: u64) {
        self.promote_if_held(t_ms);
    }

    fn on_up(&mut self, at: Point, t_ms: u64, target: Option<Status>) -> Option<GestureOutcome> {
        // The release position counts as the last movement.
        self.on_move(at, t_ms);

        match self.state {
            DragState::Idle => None,
            DragState::Candidate { .. } => {
                self.state = DragState::Idle;
                Some(GestureOutcome::Tap {
                    record_id: self.record_id.clone(),
                })
            }
            DragState::Dragging => match target {
                Some(status) => {
                    self.state = DragState::Dropped { status };
                    Some(GestureOutcome::Drop {
                        record_id: self.record_id.clone(),
                        status,
                    })
                }
                None => {
                    self.state = DragState::Cancelled;
                    Some(GestureOutcome::Cancelled {
                        record_id: self.record_id.clone(),
                    })
                }
            },
            DragState::Dropped { .. } | DragState::Cancelled => None,
        }
    }

    fn on_interrupt(&mut self) -> Option<GestureOutcome> {
        match self.state {
            DragState::Candidate { .. } => {
                self.state = DragState::Idle;
                None
            }
            DragState::Dragging => {
                self.state = DragState::Cancelled;
                Some(GestureOutcome::Cancelled {
                    record_id: self.record_id.clone(),
                })
            }
            _ => None,
        }
    }

    /// Touch only: a candidate held long enough becomes a drag, whether the
    /// page reported the timer or a later event reveals it has elapsed.
    fn promote_if_held(&mut self, t_ms: u64) {
        if self.pointer != PointerKind::Touch {
            return;
        }
        if let DragState::Candidate { started_ms, .. } = self.state {
            if t_ms.saturating_sub(started_ms) >= TOUCH_HOLD_MS {
                self.state = DragState::Dragging;
            }
        }
    }
}

/// Replay a recorded trace. `None` means the trace ended unresolved.
pub fn resolve(record_id: &str, pointer: PointerKind, events: &[PointerEvent]) -> Option<GestureOutcome> {
    let mut gesture = DragGesture::new(record_id, pointer);
    let outcome = events.iter().find_map(|event| gesture.handle(event));
    if outcome.is_none() {
        debug!(record_id, state = ?gesture.state(), "gesture trace ended unresolved");
    }
    outcome
}

/// A card's recorded gesture as posted by the board page.
#[derive(Debug, Clone, Deserialize)]
pub struct GestureTrace {
    pub record_id: String,
    pub pointer: PointerKind,
    pub events: Vec<PointerEvent>,
}

impl GestureTrace {
    pub fn resolve(&self) -> Option<GestureOutcome> {
        resolve(&self.record_id, self.pointer, &self.events)
    }
}
