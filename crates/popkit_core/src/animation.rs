//! Animation specification forwarded to the host
//!
//! The engine never interpolates. It hands the host a target offset plus
//! this spec and expects the host to run the transition and report
//! completion exactly once.

/// Easing curve for a host-run transition
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

/// Declarative description of a show/hide transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AnimationSpec {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl AnimationSpec {
    pub const fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            easing,
        }
    }

    pub const fn ease_out(duration_ms: u32) -> Self {
        Self::new(duration_ms, Easing::EaseOut)
    }

    pub const fn ease_in_out(duration_ms: u32) -> Self {
        Self::new(duration_ms, Easing::EaseInOut)
    }

    pub const fn linear(duration_ms: u32) -> Self {
        Self::new(duration_ms, Easing::Linear)
    }

    /// Instant show/hide
    pub const fn none() -> Self {
        Self::new(0, Easing::Linear)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::ease_out(300)
    }
}
