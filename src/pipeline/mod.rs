//! Session driver.
//!
//! ```text
//! poll one event → dispatch along the focus path → clear → render tree
//!   → apply cursor → flush → yield
//! ```

pub mod session;

pub use session::{CloseReason, INTERRUPT_REASON, Session, SessionState};
