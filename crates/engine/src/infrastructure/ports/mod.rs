//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Host document access (actor/item documents and their flags)
//! - Confirmation dialogs
//! - User notifications
//! - Localization

mod error;
mod external;
mod repos;
pub mod types;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::SpellcastingEntryRepo;

#[cfg(test)]
pub use repos::MockSpellcastingEntryRepo;

// =============================================================================
// Types
// =============================================================================
pub use types::{
    ConfirmIcon, ConfirmRequest, EntryRef, FlagKey, ModuleId, NotificationLevel, RenderedEntry,
    RenderedSheet, SheetKind,
};

// =============================================================================
// Host UI Ports
// =============================================================================
pub use external::{format_localized, ConfirmPort, LocalizationPort, NotificationPort};

#[cfg(test)]
pub use external::{MockConfirmPort, MockLocalizationPort, MockNotificationPort};

// =============================================================================
// Error Types
// =============================================================================
pub use error::RepoError;
