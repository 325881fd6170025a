use crate::domain::input::PointerEvent;
use crate::systems::Splat;

/// Remembers the last pointer position so a held drag can be turned into
/// an impulse.
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct PointerTracker {
    last: Option<(f32, f32)>,
}

impl PointerTracker {
    /// Record `event` and return the splat for this tick, if any.
    ///
    /// No event means the pointer left the canvas: history is dropped so the
    /// next press does not produce a jump from a stale position.
    pub(super) fn advance(&mut self, event: Option<PointerEvent>, scale: f32) -> Option<Splat> {
        let Some(event) = event else {
            self.last = None;
            return None;
        };
        let previous = self.last.replace(event.position);
        if !event.button_held {
            return None;
        }
        let (px, py) = previous?;
        let (x, y) = event.position;
        Some(Splat {
            position: event.position,
            impulse: ((x - px) * scale, (y - py) * scale),
        })
    }

    pub(super) fn reset(&mut self) {
        self.last = None;
    }
}
