//! Sound cue events and the sink they are delivered to

/// An audio event raised by the movement core. Cues carry no payload and
/// get no reply; whether anything is audible is the host's business.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundCue {
    /// A body hit a ceiling tile from below.
    Bump,
    /// The player left the ground.
    Jump,
}

/// Receiver for [`SoundCue`]s, injected into the resolver and the player
/// controller so the core never talks to an audio device directly.
///
/// [`NullCues`] discards everything. `Vec<SoundCue>` records cues in
/// emission order, which tests use to assert on them.
pub trait CueSink {
    fn play(&mut self, cue: SoundCue);
}

/// A sink that discards every cue.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullCues;

impl CueSink for NullCues {
    fn play(&mut self, _cue: SoundCue) {}
}

impl CueSink for Vec<SoundCue> {
    fn play(&mut self, cue: SoundCue) {
        self.push(cue);
    }
}
