//! Browser bindings

use wasm_bindgen::prelude::*;

use crate::best_score::BestScore;
use crate::input::{HostSignal, InputEvent, InputMapper};
use crate::persistence::{PersistenceAdapter, PersistenceError, flush};
use crate::sim::Session;
use crate::tuning::Tuning;

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<web_sys::Storage, PersistenceError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(PersistenceError::Unavailable)
    }
}

impl PersistenceAdapter for LocalStorageStore {
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| PersistenceError::Backend(format!("{:?}", e)))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| PersistenceError::Backend(format!("{:?}", e)))
    }
}

/// Game handle exported to the page script
#[wasm_bindgen]
pub struct WebGame {
    session: Session,
    mapper: InputMapper,
    store: LocalStorageStore,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a game; `tuning_json` may be empty for defaults
    #[wasm_bindgen(constructor)]
    pub fn new(tuning_json: &str) -> WebGame {
        let _ = console_log::init_with_level(log::Level::Info);
        console_error_panic_hook::set_once();

        let mut tuning = if tuning_json.trim().is_empty() {
            Tuning::default()
        } else {
            Tuning::from_json(tuning_json).unwrap_or_else(|e| {
                log::warn!("Bad tuning JSON, using defaults: {}", e);
                Tuning::default()
            })
        };
        // Fresh gaps every page load
        tuning.seed = (js_sys::Math::random() * u32::MAX as f64) as u64;

        let store = LocalStorageStore;
        let mut session = Session::new(tuning);
        session.apply_loaded_best(BestScore::load(&store).value);

        WebGame {
            session,
            mapper: InputMapper::new(),
            store,
        }
    }

    pub fn start(&mut self) {
        self.dispatch(InputEvent::Start);
    }

    pub fn restart(&mut self) {
        self.dispatch(InputEvent::Restart);
    }

    pub fn jump(&mut self) {
        self.dispatch(InputEvent::Jump);
    }

    /// Space key down; `repeat` keydowns are filtered by the mapper
    pub fn space_down(&mut self) {
        self.signal(HostSignal::SpaceDown);
    }

    pub fn space_up(&mut self) {
        self.signal(HostSignal::SpaceUp);
    }

    /// Hardware side button
    pub fn side_click(&mut self) {
        self.signal(HostSignal::SideClick);
    }

    /// Hardware scroll wheel up
    pub fn scroll_up(&mut self) {
        self.signal(HostSignal::ScrollUp);
    }

    /// Window lost focus
    pub fn blur(&mut self) {
        self.mapper.reset();
    }

    /// `requestAnimationFrame` callback body. Returns whether to request
    /// another frame.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        let keep_going = self.session.frame(now_ms);
        self.flush_storage();
        keep_going
    }

    pub fn score(&self) -> u32 {
        self.session.score()
    }

    pub fn best_score(&self) -> u32 {
        self.session.best_score()
    }

    /// Current frame as JSON
    pub fn snapshot_json(&self) -> String {
        self.session.snapshot().to_json().unwrap_or_else(|e| {
            log::error!("Snapshot serialization failed: {}", e);
            String::from("{}")
        })
    }

    /// Game events since the last call, as JSON
    pub fn events_json(&mut self) -> String {
        serde_json::to_string(&self.session.take_events()).unwrap_or_else(|_| String::from("[]"))
    }
}

impl WebGame {
    fn signal(&mut self, signal: HostSignal) {
        if let Some(event) = self.mapper.map(signal, self.session.phase()) {
            self.dispatch(event);
        }
    }

    fn dispatch(&mut self, event: InputEvent) {
        self.session.handle(event);
    }

    fn flush_storage(&mut self) {
        let requests = self.session.take_persist_requests();
        if !requests.is_empty() {
            flush(requests, &mut self.store);
        }
    }
}
