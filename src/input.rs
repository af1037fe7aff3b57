use egui::{Context, Event, Pos2, PointerButton, Rect, TouchId, TouchPhase};

/// Input on the canvas, in surface coordinates (origin at the canvas'
/// top-left corner).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed inside the canvas
    PointerDown { pos: Pos2 },
    /// Pointer moved while inside the canvas, button held or not
    PointerMove { pos: Pos2 },
    /// Primary button released inside the canvas
    PointerUp,
    /// Pointer crossed out of the canvas or left the window
    PointerLeave,
    /// First finger touched down inside the canvas
    TouchStart { pos: Pos2 },
    /// The tracked finger moved
    TouchMove { pos: Pos2 },
    /// The tracked finger lifted or the touch was cancelled
    TouchEnd,
}

/// Converts raw egui events into canvas [`InputEvent`]s.
///
/// egui backends synthesise pointer events from the primary touch. In any
/// frame with touch activity those are ignored, so one finger produces one
/// gesture rather than two interleaved ones.
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Rect,
    pointer_inside: bool,
    active_touch: Option<TouchId>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            pointer_inside: false,
            active_touch: None,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_canvas(&self, pos: Pos2) -> Pos2 {
        pos - self.canvas_rect.min.to_vec2()
    }

    /// Process this frame's egui input
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|input| self.process_events(&input.events))
    }

    pub fn process_events(&mut self, raw: &[Event]) -> Vec<InputEvent> {
        let touch_frame = self.active_touch.is_some()
            || raw.iter().any(|event| matches!(event, Event::Touch { .. }));
        let mut events = Vec::new();

        for event in raw {
            match event {
                Event::Touch { id, phase, pos, .. } => {
                    self.on_touch(*id, *phase, *pos, &mut events);
                }
                _ if touch_frame => {}
                Event::PointerButton {
                    pos,
                    button: PointerButton::Primary,
                    pressed,
                    ..
                } => {
                    if !self.canvas_rect.contains(*pos) {
                        continue;
                    }
                    self.pointer_inside = true;
                    events.push(if *pressed {
                        InputEvent::PointerDown { pos: self.to_canvas(*pos) }
                    } else {
                        InputEvent::PointerUp
                    });
                }
                Event::PointerMoved(pos) => {
                    if self.canvas_rect.contains(*pos) {
                        self.pointer_inside = true;
                        events.push(InputEvent::PointerMove { pos: self.to_canvas(*pos) });
                    } else if self.pointer_inside {
                        self.pointer_inside = false;
                        events.push(InputEvent::PointerLeave);
                    }
                }
                Event::PointerGone => {
                    if self.pointer_inside {
                        self.pointer_inside = false;
                        events.push(InputEvent::PointerLeave);
                    }
                }
                _ => {}
            }
        }

        events
    }

    fn on_touch(
        &mut self,
        id: TouchId,
        phase: TouchPhase,
        pos: Pos2,
        events: &mut Vec<InputEvent>,
    ) {
        match phase {
            TouchPhase::Start => {
                if self.active_touch.is_none() && self.canvas_rect.contains(pos) {
                    self.active_touch = Some(id);
                    events.push(InputEvent::TouchStart { pos: self.to_canvas(pos) });
                }
            }
            TouchPhase::Move => {
                if self.active_touch == Some(id) {
                    events.push(InputEvent::TouchMove { pos: self.to_canvas(pos) });
                }
            }
            TouchPhase::End | TouchPhase::Cancel => {
                if self.active_touch == Some(id) {
                    self.active_touch = None;
                    events.push(InputEvent::TouchEnd);
                }
            }
        }
    }
}
