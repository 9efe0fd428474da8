/// Lifecycle states of a crawl engine
///
/// An engine starts `Idle`, becomes `Running` when a valid run begins, and
/// ends `Done` once its frontier is drained. A failed start leaves it `Idle`.
use std::fmt;

/// Represents the current state of a crawl engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EngineState {
    /// Created, not started (or a start attempt was rejected)
    #[default]
    Idle,

    /// Draining the frontier batch by batch
    Running,

    /// Frontier empty and no batch in flight
    Done,
}

impl EngineState {
    /// Checks whether a transition to `to` is allowed from this state
    ///
    /// Valid transitions:
    /// - Idle → Running
    /// - Running → Done
    pub fn can_transition_to(&self, to: EngineState) -> bool {
        matches!(
            (self, to),
            (Self::Idle, Self::Running) | (Self::Running, Self::Done)
        )
    }

    /// Returns a lowercase label for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for EngineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
