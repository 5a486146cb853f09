use std::time::Duration;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Playback {
    Paused,                            // Index frozen, nothing scheduled
    Playing { remaining: Duration },   // One advancement pending after `remaining`
}

impl Playback {
    pub fn is_playing(&self) -> bool {
        matches!(self, Playback::Playing { .. })
    }
}
