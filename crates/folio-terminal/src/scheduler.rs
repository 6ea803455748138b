//! One-shot deferred actions.
//!
//! Handlers queue actions here; the session fires them from its `tick`,
//! outside any dispatch. There is no cancellation: every queued action
//! eventually fires, so targets must tolerate repeats.

use std::time::{Duration, Instant};

/// An action to run later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    /// Close the named panel.
    ClosePanel(String),
}

#[derive(Debug)]
struct Pending {
    due: Instant,
    seq: u64,
    action: Deferred,
}

/// Queue of deferred actions ordered by due time.
#[derive(Debug, Default)]
pub struct Scheduler {
    pending: Vec<Pending>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `action` to fire at `due`.
    pub fn schedule_at(&mut self, due: Instant, action: Deferred) {
        log::debug!("scheduled {action:?}");
        self.pending.push(Pending {
            due,
            seq: self.next_seq,
            action,
        });
        self.next_seq += 1;
    }

    /// Queue `action` to fire `delay` from now.
    pub fn schedule_after(&mut self, delay: Duration, action: Deferred) {
        self.schedule_at(Instant::now() + delay, action);
    }

    /// Remove and return every action due at or before `now`, earliest
    /// first; ties keep scheduling order.
    pub fn take_due(&mut self, now: Instant) -> Vec<Deferred> {
        let (mut due, rest): (Vec<Pending>, Vec<Pending>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = rest;
        due.sort_by_key(|p| (p.due, p.seq));
        due.into_iter().map(|p| p.action).collect()
    }

    /// Number of actions still waiting.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Earliest due time, for sizing the front end's poll timeout.
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|p| p.due).min()
    }
}
