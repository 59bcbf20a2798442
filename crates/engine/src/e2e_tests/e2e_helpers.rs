//! Shared fixtures for end-to-end tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use spellkits_domain::{ActorId, EntryId, SlotState, SpellSlot};

use crate::infrastructure::localization::StaticLocalizer;
use crate::infrastructure::persistence::{ActorDocument, JsonActorStore};
use crate::infrastructure::ports::{
    ConfirmPort, ConfirmRequest, EntryRef, NotificationLevel, NotificationPort,
};
use crate::infrastructure::settings::SpellkitsConfig;
use crate::App;

/// Answers confirmation prompts from a script; declines once it runs dry.
#[derive(Default)]
pub struct ScriptedConfirm {
    answers: Mutex<VecDeque<bool>>,
    asked: Mutex<Vec<ConfirmRequest>>,
}

impl ScriptedConfirm {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: Mutex::new(answers.iter().copied().collect()),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<ConfirmRequest> {
        self.asked.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfirmPort for ScriptedConfirm {
    async fn confirm(&self, request: ConfirmRequest) -> bool {
        self.asked.lock().unwrap().push(request);
        self.answers.lock().unwrap().pop_front().unwrap_or(false)
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(NotificationLevel, String)>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<(NotificationLevel, String)> {
        self.messages.lock().unwrap().clone()
    }
}

impl NotificationPort for RecordingNotifier {
    fn notify(&self, level: NotificationLevel, message: &str) {
        self.messages.lock().unwrap().push((level, message.to_string()));
    }
}

pub struct TestHost {
    pub app: App,
    pub store: Arc<JsonActorStore>,
    pub confirm: Arc<ScriptedConfirm>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestHost {
    /// `answers` scripts the confirmation prompts in order.
    pub fn new(answers: &[bool]) -> Self {
        Self::with_document(wizard(), answers)
    }

    pub fn with_document(document: ActorDocument, answers: &[bool]) -> Self {
        let store = Arc::new(JsonActorStore::in_memory(document));
        let confirm = Arc::new(ScriptedConfirm::answering(answers));
        let notifier = Arc::new(RecordingNotifier::default());
        let app = App::new(
            SpellkitsConfig::default(),
            store.clone(),
            confirm.clone(),
            notifier.clone(),
            Arc::new(StaticLocalizer::english()),
        );
        Self {
            app,
            store,
            confirm,
            notifier,
        }
    }
}

/// Actor with one prepared entry holding `[a, b]` in `slot1` and one focus
/// entry that gets no panel.
pub fn wizard() -> ActorDocument {
    serde_json::from_value(json!({
        "_id": "actor1",
        "name": "Ezren",
        "type": "character",
        "items": [
            {
                "_id": "entry1",
                "name": "Arcane Prepared Spells",
                "type": "spellcastingEntry",
                "system": {
                    "prepared": { "value": "prepared" },
                    "slots": {
                        "slot0": { "max": 5, "prepared": [{ "id": "shield" }] },
                        "slot1": {
                            "max": 2,
                            "prepared": [{ "id": "a", "expended": false }, { "id": "b" }]
                        }
                    }
                }
            },
            {
                "_id": "entry2",
                "name": "Bloodline Spells",
                "type": "spellcastingEntry",
                "system": { "prepared": { "value": "focus" } }
            }
        ]
    }))
    .unwrap()
}

pub fn prepared_entry() -> EntryRef {
    EntryRef::new(ActorId::new("actor1").unwrap(), EntryId::new("entry1").unwrap())
}

/// Live slots with `slot1` prepared as `ids`, `slot0` as in [`wizard`].
pub fn slots_with(ids: &[&str]) -> SlotState {
    SlotState::new()
        .with_slot(
            "slot0",
            SpellSlot::from_spell_ids([Some("shield")]).with_field("max", json!(5)),
        )
        .with_slot(
            "slot1",
            SpellSlot::from_spell_ids(ids.iter().copied().map(Some)).with_field("max", json!(2)),
        )
}
