//! Render hook registration.
//!
//! The host calls back after every sheet render. Each callback rebuilds the
//! panels from the document, so there is nothing to tear down between renders.

use std::sync::Arc;

use crate::infrastructure::ports::{RenderedSheet, SheetKind};
use crate::use_cases::sheet::{LoadoutPanel, RenderLoadoutPanels};

/// Hook registration, consumed once the host is ready.
pub struct SheetHooks {
    render: Arc<RenderLoadoutPanels>,
}

impl SheetHooks {
    pub fn new(render: Arc<RenderLoadoutPanels>) -> Self {
        Self { render }
    }

    /// Subscribe to renders of one sheet kind.
    pub fn ready(self, kind: SheetKind) -> RenderSubscription {
        tracing::info!(sheet = ?kind, "Registered spellkits render hook");
        RenderSubscription {
            kind,
            render: self.render,
        }
    }
}

/// Active subscription to sheet renders.
pub struct RenderSubscription {
    kind: SheetKind,
    render: Arc<RenderLoadoutPanels>,
}

impl RenderSubscription {
    pub fn kind(&self) -> SheetKind {
        self.kind
    }

    /// Panels for a freshly rendered sheet. Other sheet kinds get none.
    pub async fn on_render(&self, sheet: &RenderedSheet) -> Vec<LoadoutPanel> {
        if sheet.kind != self.kind {
            tracing::debug!(sheet = ?sheet.kind, "Ignoring render of unhooked sheet kind");
            return Vec::new();
        }
        self.render.execute(sheet).await
    }
}
