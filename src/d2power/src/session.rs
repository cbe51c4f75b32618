//! Refresh session
//!
//! Keeps the state that has to survive between refreshes: the last
//! computed result, the minted timestamp it was computed from, and the
//! instance ids already handed to the auto-lock collaborator. Only one
//! refresh may run at a time; [`RefreshSession::try_begin`] hands out a
//! ticket that releases the guard when dropped.

use crate::compute::{compute_with_caps, ComputeError, ComputedData};
use crate::manifest::Manifest;
use crate::power::PowerCaps;
use crate::profile::ProfileData;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A winning item that is not locked yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockCandidate {
    pub character_id: String,
    pub instance_id: String,
    pub item_hash: u32,
    pub name: String,
}

/// Receives refresh notifications. Both methods default to no-ops.
pub trait RefreshObserver {
    fn on_fetching_changed(&mut self, _fetching: bool) {}

    /// Called once per updated refresh with the items to lock
    fn on_lock_candidates(&mut self, _candidates: &[LockCandidate]) {}
}

/// Observer that ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RefreshObserver for NoopObserver {}

#[derive(Debug, Clone)]
pub enum RefreshOutcome {
    /// A new result replaced the previous one
    Updated(Arc<ComputedData>),
    /// The profile was not newer than the last one; the previous result
    /// (if any) stays current
    Stale(Option<Arc<ComputedData>>),
}

impl RefreshOutcome {
    pub fn data(&self) -> Option<&Arc<ComputedData>> {
        match self {
            Self::Updated(data) => Some(data),
            Self::Stale(previous) => previous.as_ref(),
        }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, Self::Stale(_))
    }
}

/// Proof that a refresh is in flight. Dropping it releases the guard.
#[derive(Debug)]
pub struct RefreshTicket {
    in_flight: Arc<AtomicBool>,
}

impl Drop for RefreshTicket {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}

#[derive(Debug, Default)]
pub struct RefreshSession {
    caps: PowerCaps,
    in_flight: Arc<AtomicBool>,
    latest: Option<Arc<ComputedData>>,
    last_minted: Option<DateTime<Utc>>,
    requested_locks: HashSet<String>,
}

impl RefreshSession {
    pub fn new(caps: PowerCaps) -> Self {
        Self {
            caps,
            ..Self::default()
        }
    }

    pub fn is_fetching(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Claim the in-flight guard. `None` while another refresh is running;
    /// the request is dropped, not queued.
    pub fn try_begin(&self, observer: &mut dyn RefreshObserver) -> Option<RefreshTicket> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("refresh already in flight, skipping");
            return None;
        }
        observer.on_fetching_changed(true);
        Some(RefreshTicket {
            in_flight: Arc::clone(&self.in_flight),
        })
    }

    /// Give up a refresh whose fetch failed
    pub fn abort(&self, ticket: RefreshTicket, observer: &mut dyn RefreshObserver) {
        drop(ticket);
        observer.on_fetching_changed(false);
    }

    /// Complete a refresh with freshly fetched data.
    ///
    /// Stale profiles (minted timestamp not newer than the last one) are
    /// discarded without computing. Otherwise the new result replaces the
    /// previous one and the observer receives the lock candidates.
    pub fn finish(
        &mut self,
        ticket: RefreshTicket,
        manifest: &Manifest,
        profile: &ProfileData,
        observer: &mut dyn RefreshObserver,
    ) -> Result<RefreshOutcome, ComputeError> {
        let outcome = self.run(manifest, profile, observer);
        self.abort(ticket, observer);
        outcome
    }

    fn run(
        &mut self,
        manifest: &Manifest,
        profile: &ProfileData,
        observer: &mut dyn RefreshObserver,
    ) -> Result<RefreshOutcome, ComputeError> {
        let minted = profile.response_minted_timestamp;
        if let (Some(new), Some(last)) = (minted, self.last_minted) {
            if new <= last {
                tracing::info!(
                    minted = %new,
                    last = %last,
                    "profile is stale, keeping previous result"
                );
                return Ok(RefreshOutcome::Stale(self.latest.clone()));
            }
        }

        let data = Arc::new(compute_with_caps(manifest, profile, &self.caps)?);
        let candidates = self.lock_candidates(&data);
        observer.on_lock_candidates(&candidates);

        self.latest = Some(Arc::clone(&data));
        if minted.is_some() {
            self.last_minted = minted;
        }
        tracing::info!(
            characters = data.characters.len(),
            lock_candidates = candidates.len(),
            "power data updated"
        );
        Ok(RefreshOutcome::Updated(data))
    }

    /// Unlocked winning items not requested before. Marks them requested.
    fn lock_candidates(&mut self, data: &ComputedData) -> Vec<LockCandidate> {
        let mut candidates = Vec::new();
        for (character_id, character) in &data.characters {
            for pick in character.top_items() {
                let item = &pick.item;
                if item.is_locked || !self.requested_locks.insert(item.instance_id.clone()) {
                    continue;
                }
                candidates.push(LockCandidate {
                    character_id: character_id.clone(),
                    instance_id: item.instance_id.clone(),
                    item_hash: item.item_hash,
                    name: item.name.clone(),
                });
            }
        }
        candidates
    }

    /// Last successfully computed result
    pub fn latest(&self) -> Option<Arc<ComputedData>> {
        self.latest.clone()
    }

    pub fn last_minted(&self) -> Option<DateTime<Utc>> {
        self.last_minted
    }
}
