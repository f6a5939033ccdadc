//! Per-region progress state shared between the control, the sequencer, and
//! the scheduler thread.
//!
//! The mask is split into five vertical regions, indexed 0..=4 from left to
//! right. Each region carries one progress value: 0.0 means the region covers
//! nothing, 1.0 means it covers its full band. All writes happen on the
//! scheduler thread; reads may come from any thread (typically the host's
//! render pass).

use smallvec::SmallVec;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Number of mask regions
pub const REGION_COUNT: usize = 5;

/// Width weights of the band partition
///
/// Entry 0 is a zero lead-in: band `i` starts at the cumulative sum through
/// entry `i` and spans entry `i + 1`. Entries 1..=5 sum to 1.0, giving the
/// center band twice the width of its neighbors.
pub const BAND_WEIGHTS: [f32; REGION_COUNT + 1] = [0.0, 0.1, 0.2, 0.4, 0.2, 0.1];

/// Errors from region lookups
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskError {
    /// A region index outside `0..REGION_COUNT` was used
    #[error("invalid region index: {0}")]
    InvalidRegion(usize),
}

/// Callback invoked once for every observed progress change
pub type RedrawListener = Arc<dyn Fn() + Send + Sync>;

struct RegionStateInner {
    progress: Mutex<[f32; REGION_COUNT]>,
    listeners: Mutex<SmallVec<[RedrawListener; 2]>>,
}

/// Shared progress storage for the five regions
///
/// Cheap to clone; clones share the same storage, which is how the control,
/// the sequencer, and the scheduler thread all observe one set of values.
/// Every write that changes a stored value notifies each subscribed redraw
/// listener exactly once.
#[derive(Clone)]
pub struct RegionState {
    inner: Arc<RegionStateInner>,
}

impl RegionState {
    /// Create state with every region at 0.0 (mask fully withdrawn)
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RegionStateInner {
                progress: Mutex::new([0.0; REGION_COUNT]),
                listeners: Mutex::new(SmallVec::new()),
            }),
        }
    }

    /// Progress of one region, checked
    pub fn try_progress(&self, region: usize) -> Result<f32, MaskError> {
        if region >= REGION_COUNT {
            return Err(MaskError::InvalidRegion(region));
        }
        Ok(self.inner.progress.lock().unwrap()[region])
    }

    /// Progress of one region
    ///
    /// # Panics
    ///
    /// Panics if `region` is outside `0..REGION_COUNT`; an out-of-range index
    /// here is a programming defect, not a recoverable condition. Use
    /// `try_progress()` for a checked lookup.
    pub fn progress(&self, region: usize) -> f32 {
        match self.try_progress(region) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Copy of all five progress values
    pub fn snapshot(&self) -> [f32; REGION_COUNT] {
        *self.inner.progress.lock().unwrap()
    }

    /// Write one region's progress, notifying listeners if the value changed
    ///
    /// # Panics
    ///
    /// Panics if `region` is outside `0..REGION_COUNT`.
    pub fn set_progress(&self, region: usize, value: f32) {
        assert!(region < REGION_COUNT, "invalid region index: {region}");
        let changed = {
            let mut progress = self.inner.progress.lock().unwrap();
            if progress[region] == value {
                false
            } else {
                progress[region] = value;
                true
            }
        };
        if changed {
            self.notify();
        }
    }

    /// Write every region's progress in one locked batch
    ///
    /// Listeners are notified once per region whose value actually changed,
    /// mirroring per-region change events.
    pub fn set_all(&self, value: f32) {
        let changed = {
            let mut progress = self.inner.progress.lock().unwrap();
            let mut changed = 0;
            for slot in progress.iter_mut() {
                if *slot != value {
                    *slot = value;
                    changed += 1;
                }
            }
            changed
        };
        for _ in 0..changed {
            self.notify();
        }
    }

    /// Subscribe a redraw listener
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.inner
            .listeners
            .lock()
            .unwrap()
            .push(Arc::new(listener));
    }

    // Listeners run with the progress lock released so they may read state
    fn notify(&self) {
        let listeners: SmallVec<[RedrawListener; 2]> =
            self.inner.listeners.lock().unwrap().clone();
        for listener in listeners {
            listener();
        }
    }
}

impl Default for RegionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn test_starts_fully_withdrawn() {
        let state = RegionState::new();
        assert_eq!(state.snapshot(), [0.0; REGION_COUNT]);
    }

    #[test]
    fn test_weights_cover_unit_span() {
        let sum: f32 = BAND_WEIGHTS.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert_eq!(BAND_WEIGHTS[0], 0.0);
    }

    #[test]
    fn test_clones_share_storage() {
        let state = RegionState::new();
        let alias = state.clone();
        state.set_progress(2, 0.5);
        assert_eq!(alias.progress(2), 0.5);
    }

    #[test]
    fn test_try_progress_bounds() {
        let state = RegionState::new();
        assert_eq!(state.try_progress(4), Ok(0.0));
        assert_eq!(state.try_progress(5), Err(MaskError::InvalidRegion(5)));
    }

    #[test]
    #[should_panic(expected = "invalid region index")]
    fn test_progress_panics_out_of_range() {
        RegionState::new().progress(REGION_COUNT);
    }

    #[test]
    fn test_notifies_only_on_change() {
        let state = RegionState::new();
        let count = Arc::new(AtomicU32::new(0));

        let count_in_listener = Arc::clone(&count);
        state.subscribe(move || {
            count_in_listener.fetch_add(1, Ordering::Relaxed);
        });

        state.set_progress(0, 0.5);
        assert_eq!(count.load(Ordering::Relaxed), 1);

        // Same value again is not a change
        state.set_progress(0, 0.5);
        assert_eq!(count.load(Ordering::Relaxed), 1);

        state.set_progress(0, 0.6);
        assert_eq!(count.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_set_all_notifies_per_changed_region() {
        let state = RegionState::new();
        let count = Arc::new(AtomicU32::new(0));

        let count_in_listener = Arc::clone(&count);
        state.subscribe(move || {
            count_in_listener.fetch_add(1, Ordering::Relaxed);
        });

        state.set_progress(1, 1.0);
        assert_eq!(count.load(Ordering::Relaxed), 1);

        // Region 1 already holds 1.0, so only four regions change
        state.set_all(1.0);
        assert_eq!(count.load(Ordering::Relaxed), 5);

        // No region changes, no notification
        state.set_all(1.0);
        assert_eq!(count.load(Ordering::Relaxed), 5);
    }

    #[test]
    fn test_listener_may_read_state() {
        let state = RegionState::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let state_in_listener = state.clone();
        let seen_in_listener = Arc::clone(&seen);
        state.subscribe(move || {
            seen_in_listener
                .lock()
                .unwrap()
                .push(state_in_listener.snapshot());
        });

        state.set_progress(2, 0.25);
        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0][2], 0.25);
    }
}
