//! Application state and composition.

use std::sync::Arc;

use crate::api::{CommandHandler, SheetHooks};
use crate::entities::LoadoutStore;
use crate::infrastructure::{
    ports::{ConfirmPort, LocalizationPort, NotificationPort, SpellcastingEntryRepo},
    settings::SpellkitsConfig,
};
use crate::use_cases;
use crate::use_cases::loadouts::{ApplyLoadout, DeleteLoadout, SaveLoadout};

/// Main application state.
///
/// Holds the entity modules and use cases, wired once at startup.
pub struct App {
    pub config: SpellkitsConfig,
    pub loadout_store: Arc<LoadoutStore>,
    pub use_cases: UseCases,
    notifier: Arc<dyn NotificationPort>,
    localization: Arc<dyn LocalizationPort>,
}

/// Container for all use cases.
pub struct UseCases {
    pub loadouts: use_cases::LoadoutUseCases,
    pub render_panels: Arc<use_cases::RenderLoadoutPanels>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(
        config: SpellkitsConfig,
        repo: Arc<dyn SpellcastingEntryRepo>,
        confirm: Arc<dyn ConfirmPort>,
        notifier: Arc<dyn NotificationPort>,
        localization: Arc<dyn LocalizationPort>,
    ) -> Self {
        let loadout_store = Arc::new(LoadoutStore::new(repo, config.module_id.clone()));

        let loadouts = use_cases::LoadoutUseCases::new(
            Arc::new(SaveLoadout::new(
                loadout_store.clone(),
                confirm.clone(),
                localization.clone(),
                config.name_bounds,
            )),
            Arc::new(ApplyLoadout::new(loadout_store.clone())),
            Arc::new(DeleteLoadout::new(
                loadout_store.clone(),
                confirm,
                localization.clone(),
            )),
        );

        let render_panels = Arc::new(use_cases::RenderLoadoutPanels::new(
            loadout_store.clone(),
            localization.clone(),
        ));

        Self {
            config,
            loadout_store,
            use_cases: UseCases {
                loadouts,
                render_panels,
            },
            notifier,
            localization,
        }
    }

    /// Fresh hook registration for the host's ready event.
    pub fn sheet_hooks(&self) -> SheetHooks {
        SheetHooks::new(self.use_cases.render_panels.clone())
    }

    pub fn command_handler(&self) -> CommandHandler {
        CommandHandler::new(
            self.use_cases.loadouts.clone(),
            self.notifier.clone(),
            self.localization.clone(),
        )
    }
}
