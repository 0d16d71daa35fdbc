//! Event dispatch along the focus path.
//!
//! One call to [`EventBus::propagate`] is one full dispatch: the active view's
//! focus stack is walked from the leaf back up to the view, then the
//! controller gets the event if no handler stopped it.

use tracing::trace;

use crate::error::Result;
use crate::input::Event;
use crate::surface::Surface;
use crate::view::Controller;

use super::focus::{FocusStack, resolve_mut};

#[derive(Debug, Default)]
pub struct EventBus {
    stack: FocusStack,
    dispatched: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` leaf to root, then to `controller`.
    ///
    /// Empty slots on the path are skipped. The first handler error ends the
    /// walk and is returned as is.
    pub fn propagate<C>(&mut self, controller: &mut C, event: &Event, surface: &mut dyn Surface) -> Result<()>
    where
        C: Controller + ?Sized,
    {
        self.dispatched += 1;
        self.stack.clear();
        controller.screen().focus_stack(&mut self.stack);
        trace!(code = event.code(), depth = self.stack.len(), "dispatch");

        for entry in self.stack.iter().rev() {
            if !event.should_handle() {
                break;
            }
            if !entry.is_present() {
                continue;
            }
            let Some(view) = controller.screen_mut().active_view_mut() else {
                break;
            };
            match resolve_mut(view, entry.path()) {
                Some(target) => target.handle_event(event, surface)?,
                None => trace!(path = ?entry.path(), "focus entry gone"),
            }
        }

        if event.should_handle() {
            controller.handle_event(event, surface)?;
        } else {
            trace!(code = event.code(), "stopped before controller");
        }
        Ok(())
    }

    /// Focus path used by the most recent dispatch.
    pub fn last_stack(&self) -> &FocusStack {
        &self.stack
    }

    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }
}
