//! WebAssembly bindings for d2power
//!
//! JSON in, JSON out. Manifest and profile are passed as the JSON text the
//! host already holds.

use crate::compute::compute_character_data as rust_compute;
use crate::manifest::Manifest;
use crate::power::PowerCaps;
use crate::profile::ProfileData;
use crate::session::{
    LockCandidate, RefreshObserver, RefreshOutcome, RefreshSession, RefreshTicket,
};
use wasm_bindgen::prelude::*;

fn parse_inputs(
    manifest_json: &str,
    profile_json: &str,
) -> Result<(Manifest, ProfileData), JsValue> {
    let manifest = Manifest::from_json(manifest_json)
        .map_err(|e| JsValue::from_str(&format!("Manifest parse failed: {}", e)))?;
    let profile = ProfileData::from_json(profile_json)
        .map_err(|e| JsValue::from_str(&format!("Profile parse failed: {}", e)))?;
    Ok((manifest, profile))
}

/// Compute power data for every character
///
/// # Arguments
/// * `manifest_json` - Manifest tables as JSON
/// * `profile_json` - Profile response as JSON
///
/// # Returns
/// Computed data as JSON
#[wasm_bindgen(js_name = computeCharacterData)]
pub fn compute_character_data(manifest_json: &str, profile_json: &str) -> Result<String, JsValue> {
    let (manifest, profile) = parse_inputs(manifest_json, profile_json)?;
    let data = rust_compute(&manifest, &profile)
        .map_err(|e| JsValue::from_str(&format!("Compute failed: {}", e)))?;
    data.to_json()
        .map_err(|e| JsValue::from_str(&format!("Serialize failed: {}", e)))
}

/// Forwards session notifications to JavaScript callbacks
struct JsObserver<'a> {
    on_fetching: Option<&'a js_sys::Function>,
    on_lock: Option<&'a js_sys::Function>,
}

impl RefreshObserver for JsObserver<'_> {
    fn on_fetching_changed(&mut self, fetching: bool) {
        if let Some(callback) = self.on_fetching {
            if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_bool(fetching)) {
                tracing::warn!("fetching callback threw: {:?}", e);
            }
        }
    }

    fn on_lock_candidates(&mut self, candidates: &[LockCandidate]) {
        let Some(callback) = self.on_lock else {
            return;
        };
        match serde_json::to_string(candidates) {
            Ok(json) => {
                if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
                    tracing::warn!("lock candidates callback threw: {:?}", e);
                }
            }
            Err(e) => tracing::warn!("failed to serialize lock candidates: {}", e),
        }
    }
}

/// JavaScript-friendly refresh session
#[wasm_bindgen]
pub struct PowerSession {
    inner: RefreshSession,
    ticket: Option<RefreshTicket>,
    on_fetching: Option<js_sys::Function>,
    on_lock: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl PowerSession {
    /// Create a session; `caps_json` overrides the season power caps
    #[wasm_bindgen(constructor)]
    pub fn new(caps_json: Option<String>) -> Result<PowerSession, JsValue> {
        let caps = match caps_json {
            Some(json) => serde_json::from_str::<PowerCaps>(&json)
                .map_err(|e| JsValue::from_str(&format!("Caps parse failed: {}", e)))?,
            None => PowerCaps::default(),
        };
        Ok(PowerSession {
            inner: RefreshSession::new(caps),
            ticket: None,
            on_fetching: None,
            on_lock: None,
        })
    }

    /// Register a callback receiving `true`/`false` as fetching starts and ends
    #[wasm_bindgen(js_name = onFetchingChanged)]
    pub fn on_fetching_changed(&mut self, callback: js_sys::Function) {
        self.on_fetching = Some(callback);
    }

    /// Register a callback receiving lock candidates as JSON
    #[wasm_bindgen(js_name = onLockCandidates)]
    pub fn on_lock_candidates(&mut self, callback: js_sys::Function) {
        self.on_lock = Some(callback);
    }

    /// Start a refresh. Returns false when one is already running.
    #[wasm_bindgen(js_name = tryBegin)]
    pub fn try_begin(&mut self) -> bool {
        if self.ticket.is_some() {
            return false;
        }
        let mut observer = JsObserver {
            on_fetching: self.on_fetching.as_ref(),
            on_lock: self.on_lock.as_ref(),
        };
        self.ticket = self.inner.try_begin(&mut observer);
        self.ticket.is_some()
    }

    /// Abandon the running refresh
    #[wasm_bindgen(js_name = abort)]
    pub fn abort(&mut self) {
        if let Some(ticket) = self.ticket.take() {
            let mut observer = JsObserver {
                on_fetching: self.on_fetching.as_ref(),
                on_lock: self.on_lock.as_ref(),
            };
            self.inner.abort(ticket, &mut observer);
        }
    }

    /// Finish the running refresh and return the current data as JSON,
    /// or `undefined` when a stale profile arrived before any result
    #[wasm_bindgen(js_name = finish)]
    pub fn finish(
        &mut self,
        manifest_json: &str,
        profile_json: &str,
    ) -> Result<Option<String>, JsValue> {
        let ticket = self
            .ticket
            .take()
            .ok_or_else(|| JsValue::from_str("Finish failed: no refresh in flight"))?;
        let mut observer = JsObserver {
            on_fetching: self.on_fetching.as_ref(),
            on_lock: self.on_lock.as_ref(),
        };
        let inputs = parse_inputs(manifest_json, profile_json);
        let (manifest, profile) = match inputs {
            Ok(inputs) => inputs,
            Err(e) => {
                self.inner.abort(ticket, &mut observer);
                return Err(e);
            }
        };

        let outcome = self
            .inner
            .finish(ticket, &manifest, &profile, &mut observer)
            .map_err(|e| JsValue::from_str(&format!("Compute failed: {}", e)))?;
        match outcome {
            RefreshOutcome::Updated(data) | RefreshOutcome::Stale(Some(data)) => data
                .to_json()
                .map(Some)
                .map_err(|e| JsValue::from_str(&format!("Serialize failed: {}", e))),
            RefreshOutcome::Stale(None) => Ok(None),
        }
    }

    /// Latest computed data as JSON
    #[wasm_bindgen(js_name = latest)]
    pub fn latest(&self) -> Result<Option<String>, JsValue> {
        self.inner
            .latest()
            .map(|data| data.to_json())
            .transpose()
            .map_err(|e| JsValue::from_str(&format!("Serialize failed: {}", e)))
    }

    #[wasm_bindgen(getter, js_name = isFetching)]
    pub fn is_fetching(&self) -> bool {
        self.inner.is_fetching()
    }
}
