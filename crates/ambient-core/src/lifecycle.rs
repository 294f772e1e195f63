// Idle -> Running -> Stopped. No pause, no restart.

use crate::error::LifecycleError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
    Stopped,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Lifecycle {
    state: LoopState,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn start(&mut self) -> Result<(), LifecycleError> {
        match self.state {
            LoopState::Idle => {
                self.state = LoopState::Running;
                Ok(())
            }
            from => Err(LifecycleError::IllegalTransition {
                from,
                to: LoopState::Running,
            }),
        }
    }

    /// Records the handle of the next scheduled frame. A running loop with no
    /// frame pending never ticks again, so a `None` handle stops it.
    pub fn track_frame<T>(&mut self, handle: Option<T>) -> Option<T> {
        if handle.is_none() && self.is_running() {
            self.stop();
        }
        handle
    }

    /// Stops from any state. Returns true only on the first call that
    /// actually changed the state.
    pub fn stop(&mut self) -> bool {
        if self.state == LoopState::Stopped {
            return false;
        }
        self.state = LoopState::Stopped;
        true
    }
}
