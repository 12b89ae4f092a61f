use glam::{Quat, Vec3};
use std::cell::Cell;
use std::rc::Rc;

/// Pointer as seen by the particle field: a world-space point plus whether the
/// primary button is held.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Vec3,
    pub engaged: bool,
}

impl PointerState {
    /// The same pointer in the field's unrotated frame, given the Y rotation
    /// the renderer applies to every particle.
    #[inline]
    pub fn to_model(self, rotation: f32) -> Self {
        Self {
            position: Quat::from_rotation_y(-rotation) * self.position,
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct PointerSlot {
    position: Option<Vec3>,
    engaged: bool,
}

/// Shared pointer cell written by input handlers and read once per frame.
///
/// Both sides run on the same event loop, so a plain `Cell` is enough: the
/// reader sees whatever was written last.
#[derive(Clone, Default)]
pub struct SharedPointer {
    slot: Rc<Cell<PointerSlot>>,
}

impl SharedPointer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_position(&self, position: Vec3) {
        let mut s = self.slot.get();
        s.position = Some(position);
        self.slot.set(s);
    }

    pub fn set_engaged(&self, engaged: bool) {
        let mut s = self.slot.get();
        s.engaged = engaged;
        self.slot.set(s);
    }

    /// Forget the position (pointer left the canvas). Also releases the button.
    pub fn clear(&self) {
        self.slot.set(PointerSlot::default());
    }

    /// Latest pointer state, or `None` until a position has been written.
    pub fn snapshot(&self) -> Option<PointerState> {
        let s = self.slot.get();
        s.position.map(|position| PointerState {
            position,
            engaged: s.engaged,
        })
    }
}
