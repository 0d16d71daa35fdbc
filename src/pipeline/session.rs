//! The render loop bound to one surface.
//!
//! Each tick is exactly one poll, at most one dispatch, and one full render.
//! [`Session::run`] yields to the runtime between ticks and returns once a
//! handler closes the session or the surface reports an interrupt.

use tracing::{debug, trace, warn};

use crate::engine::EventBus;
use crate::error::{Error, Result};
use crate::surface::Surface;
use crate::view::Controller;

/// Reason recorded when the surface reports an interrupt.
pub const INTERRUPT_REASON: &str = "interrupt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, no tick yet.
    Idle,
    Running,
    /// Torn down. Further ticks do nothing.
    Closed,
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseReason {
    /// A handler returned [`Error::Close`].
    Requested(String),
    /// The surface reported an interrupt.
    Interrupted,
    /// Some other error escaped a tick. Nothing is reported for it.
    Failed,
}

impl CloseReason {
    /// Text handed to [`Surface::report`]. Empty for [`CloseReason::Failed`].
    pub fn as_str(&self) -> &str {
        match self {
            CloseReason::Requested(reason) => reason,
            CloseReason::Interrupted => INTERRUPT_REASON,
            CloseReason::Failed => "",
        }
    }
}

pub struct Session<S: Surface> {
    surface: S,
    bus: EventBus,
    state: SessionState,
    closed_by: Option<CloseReason>,
    ticks: u64,
}

impl<S: Surface> Session<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            bus: EventBus::new(),
            state: SessionState::Idle,
            closed_by: None,
            ticks: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The reported reason, once closed by a request or an interrupt.
    pub fn close_reason(&self) -> Option<&str> {
        self.closed_by
            .as_ref()
            .map(CloseReason::as_str)
            .filter(|reason| !reason.is_empty())
    }

    pub fn closed_by(&self) -> Option<&CloseReason> {
        self.closed_by.as_ref()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Run one tick.
    ///
    /// A close request or interrupt tears the session down and returns
    /// `Ok(SessionState::Closed)`. Any other error also tears down, then is
    /// returned.
    pub fn tick<C>(&mut self, controller: &mut C) -> Result<SessionState>
    where
        C: Controller + ?Sized,
    {
        if self.state == SessionState::Closed {
            return Ok(SessionState::Closed);
        }
        if self.state == SessionState::Idle {
            debug!("session started");
            self.state = SessionState::Running;
        }

        self.ticks += 1;
        match self.step(controller) {
            Ok(()) => Ok(SessionState::Running),
            Err(Error::Close(reason)) => {
                self.teardown(CloseReason::Requested(reason))?;
                Ok(SessionState::Closed)
            }
            Err(Error::Interrupted) => {
                self.teardown(CloseReason::Interrupted)?;
                Ok(SessionState::Closed)
            }
            Err(err) => {
                warn!(error = %err, "session failed");
                if let Err(restore_err) = self.teardown(CloseReason::Failed) {
                    warn!(error = %restore_err, "teardown after failure");
                }
                Err(err)
            }
        }
    }

    /// Tick until closed, yielding between ticks. Returns the close reason.
    pub async fn run<C>(&mut self, controller: &mut C) -> Result<String>
    where
        C: Controller + ?Sized,
    {
        while self.tick(controller)? != SessionState::Closed {
            tokio::task::yield_now().await;
        }
        Ok(self.close_reason().unwrap_or_default().to_string())
    }

    fn step<C>(&mut self, controller: &mut C) -> Result<()>
    where
        C: Controller + ?Sized,
    {
        if let Some(event) = self.surface.poll_event()? {
            self.bus.propagate(controller, &event, &mut self.surface)?;
        }

        self.surface.clear();
        controller.screen().render(&mut self.surface);
        self.surface.apply_cursor_position();
        self.surface.flush()?;
        trace!(tick = self.ticks, "frame");
        Ok(())
    }

    fn teardown(&mut self, cause: CloseReason) -> Result<()> {
        if self.state == SessionState::Closed {
            return Ok(());
        }
        self.state = SessionState::Closed;
        debug!(reason = cause.as_str(), ticks = self.ticks, "session closed");

        let restored = self.surface.restore();
        if !cause.as_str().is_empty() {
            self.surface.report(cause.as_str());
        }
        self.closed_by = Some(cause);
        restored
    }
}
