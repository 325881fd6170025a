//! Host input delivered with a tick

/// Pointer state for one tick, already in simulation (cell) coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub position: (f32, f32),
    pub button_held: bool,
}

impl PointerEvent {
    /// Pointer dragging with the button down
    pub fn held(x: f32, y: f32) -> Self {
        PointerEvent { position: (x, y), button_held: true }
    }

    /// Pointer moving with the button up
    pub fn hover(x: f32, y: f32) -> Self {
        PointerEvent { position: (x, y), button_held: false }
    }
}
