//! Document store adapters.

mod actor_document;
mod json_store;

pub use actor_document::{ActorDocument, ItemDocument, SPELLCASTING_ENTRY_TYPE};
pub use json_store::JsonActorStore;
