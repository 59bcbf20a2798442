//! Value objects - Immutable objects defined by their attributes

mod loadout_name;
mod panel_state;
mod selection;

pub use loadout_name::{
    sanitize_loadout_name, LoadoutName, LoadoutNameError, NameBounds, DEFAULT_MAX_NAME_LENGTH,
    DEFAULT_MIN_NAME_LENGTH, RESERVED_LOADOUT_NAME,
};
pub use panel_state::PanelState;
pub use selection::Selection;
