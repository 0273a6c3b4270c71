//! Pad state tracking with edge detection

use bitflags::bitflags;

bitflags! {
    /// Digital buttons of a standard six-button pad.
    ///
    /// The core binds `A` to jump and `B` to the run modifier; the rest
    /// are carried so a host can map them without widening this type.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Buttons: u8 {
        const A = 1 << 0;
        const B = 1 << 1;
        const X = 1 << 2;
        const Y = 1 << 3;
        const L = 1 << 4;
        const R = 1 << 5;
    }
}

/// One tick's worth of input: signed axes plus the button set.
///
/// Axes are -1, 0 or 1. Horizontal is right-positive; vertical is
/// down-positive, so `v < 0` means the up direction is held.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub h: i8,
    pub v: i8,
    pub buttons: Buttons,
}

impl InputSnapshot {
    /// Sets the horizontal axis.
    pub fn with_h(mut self, h: i8) -> Self {
        self.h = h;
        self
    }

    /// Sets the vertical axis.
    pub fn with_v(mut self, v: i8) -> Self {
        self.v = v;
        self
    }

    /// Sets the button set.
    pub fn with_buttons(mut self, buttons: Buttons) -> Self {
        self.buttons = buttons;
        self
    }
}

/// Current and previous input snapshots.
///
/// Keeping exactly one tick of history is what makes edge detection
/// ([`pressed`](Self::pressed)) possible without callbacks: the host
/// polls whatever device it likes, then [`push`](Self::push)es one
/// snapshot per tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pad {
    pub current: InputSnapshot,
    pub previous: InputSnapshot,
}

impl Pad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances one tick: `current` becomes `previous`, `next` becomes
    /// `current`.
    pub fn push(&mut self, next: InputSnapshot) {
        self.previous = self.current;
        self.current = next;
    }

    /// True while every button in `buttons` is down this tick.
    pub fn held(&self, buttons: Buttons) -> bool {
        self.current.buttons.contains(buttons)
    }

    /// True only on the tick a button went down: down now, up last tick.
    pub fn pressed(&self, buttons: Buttons) -> bool {
        self.current.buttons.contains(buttons) && !self.previous.buttons.contains(buttons)
    }
}
