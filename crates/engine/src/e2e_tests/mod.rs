//! End-to-end loadout flows.
//!
//! Full `App` over an in-memory `JsonActorStore`, with scripted confirmation
//! answers and recorded notifications.

mod e2e_helpers;

pub use e2e_helpers::*;
