//! Common test utilities for engine integration tests

use std::sync::{Arc, Mutex};

use uuid::Uuid;

use nutriquest_gamification::engine::GamificationEngine;
use nutriquest_gamification::identity::FixedIdentity;
use nutriquest_gamification::notify::{GamificationEvent, Notifier};
use nutriquest_gamification::store::InMemoryProfileStore;

/// Notifier that records every event for later assertions.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<GamificationEvent>>>,
}

impl RecordingNotifier {
    pub fn events(&self) -> Vec<GamificationEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, event: GamificationEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Engine wired to an in-memory store and a recording notifier, with the
/// store and notifier handles kept for assertions.
pub struct TestHarness {
    pub engine: GamificationEngine<Arc<InMemoryProfileStore>, RecordingNotifier, FixedIdentity>,
    pub store: Arc<InMemoryProfileStore>,
    pub notifier: RecordingNotifier,
    pub user_id: Uuid,
}

pub fn harness() -> TestHarness {
    let user_id = Uuid::new_v4();
    let store = Arc::new(InMemoryProfileStore::new());
    let notifier = RecordingNotifier::default();
    let engine = GamificationEngine::new(
        store.clone(),
        notifier.clone(),
        FixedIdentity::new(user_id),
    );
    TestHarness {
        engine,
        store,
        notifier,
        user_id,
    }
}
