use crate::tween::Fade;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Phase {
    Idle,                          // Accepting navigation requests
    FadingOut(Fade),               // Current image going from opaque to transparent
    Swapping { since: f64 },       // New source set, waiting for load or error
    FadingIn(Fade),                // New image going from transparent to opaque
}

impl Phase {
    /// True while a transition is in flight.
    pub fn is_loading(&self) -> bool {
        !matches!(self, Phase::Idle)
    }
}
