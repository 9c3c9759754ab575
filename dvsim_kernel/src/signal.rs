//! Per-signal, per-driver waveform store (component B).
//!
//! Each [`Signal`] owns one ordered waveform list per driver. A driver's
//! list is a plain `Vec<Waveform>`; the first entry is always the
//! *committed* transaction (invariant W1), and the rest are pending,
//! ordered by non-decreasing `when` (invariant I5).

use bitflags::bitflags;
use dvsim_common::time::Time;

/// Identifies a signal within a [`SignalStore`]'s arena.
pub type SignalId = u32;

bitflags! {
    /// Per-signal status bits, cleared at the end of every cycle
    /// (invariant AS1).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SignalFlags: u8 {
        /// The signal was committed (a driver update ran) this cycle.
        const ACTIVE = 0b01;
        /// The committed value differs from the previous cycle's.
        const EVENT  = 0b10;
    }
}

/// One scheduled (or committed) transaction: a value effective from `when`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Waveform {
    /// The opaque 64-bit value word; equality for `EVENT` is bitwise.
    pub value: u64,
    /// The time this transaction takes effect.
    pub when: Time,
}

/// One driver's ordered waveform list. Index 0 is always the
/// already-committed transaction (invariant W1); later entries are
/// pending, transport-delay scheduled transactions (non-goal: no
/// inertial cancellation).
#[derive(Debug, Default)]
struct Driver {
    waveforms: Vec<Waveform>,
}

impl Driver {
    /// Schedule `(value, when)`, preserving non-decreasing `when` with
    /// stable ties (new entries at an existing `when` are appended
    /// after the ones already there).
    ///
    /// The very first transaction ever scheduled on a driver plays
    /// double duty as the invariant-W2 dummy head: it is duplicated so
    /// the real transaction appears as an immediately-committable
    /// successor, letting the commit step (below) treat every driver
    /// uniformly from its first cycle onward rather than special-casing
    /// brand-new drivers.
    fn schedule(&mut self, value: u64, when: Time) {
        if self.waveforms.is_empty() {
            self.waveforms.push(Waveform { value, when });
            self.waveforms.push(Waveform { value, when });
            return;
        }
        let mut pos = self.waveforms.len();
        for i in 1..self.waveforms.len() {
            if self.waveforms[i].when > when {
                pos = i;
                break;
            }
        }
        self.waveforms.insert(pos, Waveform { value, when });
    }

    /// If the successor to the committed head is due at `now`, promote
    /// it (freeing the old head) and return the newly committed value.
    fn try_commit(&mut self, now: Time) -> Option<u64> {
        if self.waveforms.len() > 1 && self.waveforms[1].when == now {
            self.waveforms.remove(0);
            Some(self.waveforms[0].value)
        } else {
            None
        }
    }
}

/// One elaborated signal: current value, status flags, and one
/// waveform list per driver.
#[derive(Debug)]
pub struct Signal {
    name: String,
    resolved: u64,
    flags: SignalFlags,
    drivers: Vec<Driver>,
}

impl Signal {
    /// The signal's current (last-committed) value.
    #[inline]
    pub fn resolved(&self) -> u64 {
        self.resolved
    }

    /// `ACTIVE`/`EVENT` status for the current cycle.
    #[inline]
    pub fn flags(&self) -> SignalFlags {
        self.flags
    }

    /// The identifier this signal was declared with.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The driver count `D` fixed at elaboration.
    #[inline]
    pub fn driver_count(&self) -> u32 {
        self.drivers.len() as u32
    }
}

/// Arena of [`Signal`]s plus the bounded-but-growable active-signal set
/// (invariant AS1) used to clear flags at the end of every cycle.
#[derive(Debug, Default)]
pub struct SignalStore {
    signals: Vec<Signal>,
    active: Vec<SignalId>,
}

impl SignalStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new signal with `driver_count` driver slots. Returns
    /// its arena index.
    pub fn allocate(&mut self, name: impl Into<String>, driver_count: u32) -> SignalId {
        let id = self.signals.len() as SignalId;
        self.signals.push(Signal {
            name: name.into(),
            resolved: 0,
            flags: SignalFlags::empty(),
            drivers: (0..driver_count).map(|_| Driver::default()).collect(),
        });
        id
    }

    /// Borrow a signal by id.
    #[inline]
    pub fn get(&self, id: SignalId) -> &Signal {
        &self.signals[id as usize]
    }

    /// Number of signals in the arena.
    #[inline]
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// Schedule `(value, when)` on `signal`'s `driver_index`-th driver.
    /// Returns `None` if `driver_index` is out of range for the signal.
    #[must_use]
    pub fn schedule(&mut self, id: SignalId, driver_index: u32, value: u64, when: Time) -> Option<()> {
        let sig = self.signals.get_mut(id as usize)?;
        let driver = sig.drivers.get_mut(driver_index as usize)?;
        driver.schedule(value, when);
        Some(())
    }

    /// Commit-at-`now` for every driver of `signal` (`rt_update_driver`).
    ///
    /// Per the non-goal on multi-driver resolution, when more than one
    /// driver commits in the same cycle the highest-indexed one wins —
    /// "last-scheduled value per driver", generalised to "last driver
    /// examined" in the absence of a resolution function.
    pub fn commit(&mut self, id: SignalId, now: Time, iteration: i32) {
        let idx = id as usize;
        let old = self.signals[idx].resolved;

        let mut new_value = None;
        for driver in self.signals[idx].drivers.iter_mut() {
            if let Some(v) = driver.try_commit(now) {
                new_value = Some(v);
            }
        }
        let Some(value) = new_value else { return };

        self.signals[idx].resolved = value;

        // First-cycle rule: the initial value is not an "event".
        if iteration == 0 && now == Time::ZERO {
            return;
        }

        let mut flags = SignalFlags::ACTIVE;
        if value != old {
            flags |= SignalFlags::EVENT;
        }
        if !self.signals[idx].flags.contains(SignalFlags::ACTIVE) {
            self.active.push(id);
        }
        self.signals[idx].flags |= flags;
    }

    /// Clear `ACTIVE`/`EVENT` on every signal touched this cycle and
    /// empty the active-signal set (end of cycle, invariant AS1).
    pub fn clear_active(&mut self) {
        for id in self.active.drain(..) {
            self.signals[id as usize].flags = SignalFlags::empty();
        }
    }

    /// The number of signals currently flagged active — exposed for
    /// the cycle driver's defensive assertion against pathological
    /// growth (design note: "growth of the active-signal set").
    #[inline]
    pub fn active_len(&self) -> usize {
        self.active.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_schedule_installs_dummy_head_then_commits_cleanly() {
        let mut store = SignalStore::new();
        let x = store.allocate("x", 1);

        store.schedule(x, 0, 42, Time::ZERO).unwrap();
        store.commit(x, Time::ZERO, 0);

        assert_eq!(store.get(x).resolved(), 42);
        assert!(store.get(x).flags().is_empty(), "first cycle must not set flags");
    }

    #[test]
    fn event_set_only_when_value_changes() {
        let mut store = SignalStore::new();
        let x = store.allocate("x", 1);
        store.schedule(x, 0, 0, Time::ZERO).unwrap();
        store.commit(x, Time::ZERO, 0); // init cycle: resolved=0, no flags
        store.clear_active();

        // Same value scheduled later: ACTIVE but not EVENT.
        store.schedule(x, 0, 0, Time::from_fs(1000)).unwrap();
        store.commit(x, Time::from_fs(1000), 0);
        assert_eq!(store.get(x).resolved(), 0);
        assert!(store.get(x).flags().contains(SignalFlags::ACTIVE));
        assert!(!store.get(x).flags().contains(SignalFlags::EVENT));
        store.clear_active();

        // Different value: both ACTIVE and EVENT.
        store.schedule(x, 0, 1, Time::from_fs(2000)).unwrap();
        store.commit(x, Time::from_fs(2000), 0);
        assert!(store.get(x).flags().contains(SignalFlags::EVENT));
    }

    #[test]
    fn schedule_preserves_non_decreasing_order_with_stable_ties() {
        let mut store = SignalStore::new();
        let x = store.allocate("x", 1);
        store.schedule(x, 0, 0, Time::ZERO).unwrap(); // dummy head + successor at 0
        store.schedule(x, 0, 10, Time::from_fs(500)).unwrap();
        store.schedule(x, 0, 20, Time::from_fs(500)).unwrap(); // tie -> appended after 10
        store.schedule(x, 0, 30, Time::from_fs(100)).unwrap(); // out of order call, in-order time

        // Commit through every due transaction and observe the order.
        store.commit(x, Time::ZERO, 0);
        assert_eq!(store.get(x).resolved(), 0);

        store.commit(x, Time::from_fs(100), 1);
        assert_eq!(store.get(x).resolved(), 30);

        store.commit(x, Time::from_fs(500), 1);
        assert_eq!(store.get(x).resolved(), 10);

        store.commit(x, Time::from_fs(500), 1);
        assert_eq!(store.get(x).resolved(), 20);
    }

    #[test]
    fn schedule_rejects_out_of_range_driver_index() {
        let mut store = SignalStore::new();
        let x = store.allocate("x", 1);
        assert!(store.schedule(x, 5, 1, Time::ZERO).is_none());
    }

    #[test]
    fn active_set_dedupes_within_a_cycle() {
        let mut store = SignalStore::new();
        let x = store.allocate("x", 2);
        store.schedule(x, 0, 1, Time::from_fs(10)).unwrap();
        store.schedule(x, 1, 2, Time::from_fs(10)).unwrap();
        store.commit(x, Time::ZERO, 0);
        store.clear_active();

        // Both drivers commit in the same cycle; the signal is only
        // pushed onto the active set once.
        store.commit(x, Time::from_fs(10), 1);
        assert_eq!(store.active_len(), 1);
    }
}
