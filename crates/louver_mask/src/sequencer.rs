//! Staggered open/close sequencing.
//!
//! A [`MaskSequencer`] turns a single open or close request into five
//! per-region tweens launched center-out (closing) or edges-in (opening).
//! The whole run lives on the scheduler thread: `start` only bumps the
//! generation counter and queues a launch task, so it is safe to call from
//! any thread and returns immediately.
//!
//! Starting a new sequence supersedes the running one. The superseded run
//! notices the generation change at its next frame and stops without
//! touching region values again, so the new run's reset is never clobbered.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use louver_animation::{Easing, SchedulerHandle, Tween};
use tracing::{debug, warn};

use crate::region::{RegionState, REGION_COUNT};

/// Which way a sequence drives the regions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceDirection {
    /// Sweep from withdrawn to full coverage
    Opening,
    /// Sweep from full coverage back to withdrawn
    Closing,
}

impl SequenceDirection {
    /// Value every region is reset to when the sequence launches
    pub fn start_value(self) -> f32 {
        match self {
            SequenceDirection::Opening => 0.0,
            SequenceDirection::Closing => 1.0,
        }
    }

    /// Value every region is pinned to when the sequence completes
    pub fn terminal_value(self) -> f32 {
        match self {
            SequenceDirection::Opening => 1.0,
            SequenceDirection::Closing => 0.0,
        }
    }

    /// Easing curve used by every region in this direction
    ///
    /// Opening decelerates into place; closing accelerates away.
    pub fn easing(self) -> Easing {
        match self {
            SequenceDirection::Opening => Easing::QuartOut,
            SequenceDirection::Closing => Easing::QuadIn,
        }
    }

    fn active_phase(self) -> MaskPhase {
        match self {
            SequenceDirection::Opening => MaskPhase::Opening,
            SequenceDirection::Closing => MaskPhase::Closing,
        }
    }

    fn terminal_phase(self) -> MaskPhase {
        match self {
            SequenceDirection::Opening => MaskPhase::Open,
            SequenceDirection::Closing => MaskPhase::Closed,
        }
    }

    /// Region launch order with the stagger multiplier for each
    ///
    /// Opening leads with the outer edges and the center arrives last;
    /// closing is the mirror image, center first and edges last. The middle
    /// pair sits at three quarters of the stagger in both directions.
    fn launch_plan(self) -> [(usize, f32); REGION_COUNT] {
        match self {
            SequenceDirection::Opening => {
                [(0, 0.0), (4, 0.0), (1, 0.75), (3, 0.75), (2, 1.0)]
            }
            SequenceDirection::Closing => {
                [(2, 0.0), (1, 0.75), (3, 0.75), (0, 1.0), (4, 1.0)]
            }
        }
    }
}

/// Where the mask currently is in its open/close lifecycle
///
/// Updated on the scheduler thread when a sequence launches and when it
/// completes. A `start` call therefore does not change the phase until the
/// launch task has run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MaskPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// How a sequence run ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceOutcome {
    /// Every region reached the terminal value
    Completed,
    /// A newer sequence took over before this one finished
    Superseded,
}

/// Completion side of a started sequence
///
/// The sequencer itself is fire-and-forget; hold on to the handle only when
/// the caller needs to know how the run ended. Dropping it is fine.
pub struct SequenceHandle {
    rx: Receiver<SequenceOutcome>,
}

impl SequenceHandle {
    /// Block until the run ends
    ///
    /// Returns `None` when the scheduler shut down before the run finished.
    pub fn wait(self) -> Option<SequenceOutcome> {
        self.rx.recv().ok()
    }

    /// Block until the run ends or the timeout elapses
    pub fn wait_timeout(&self, timeout: Duration) -> Option<SequenceOutcome> {
        self.rx.recv_timeout(timeout).ok()
    }

    /// Check for an outcome without blocking
    pub fn try_wait(&self) -> Option<SequenceOutcome> {
        self.rx.try_recv().ok()
    }
}

fn stagger_delay(stagger_ms: u32, multiplier: f32) -> u32 {
    (stagger_ms as f32 * multiplier) as u32
}

/// Drives staggered open/close sweeps over a [`RegionState`]
///
/// At most one sequence is live at a time. Every `start` call bumps a shared
/// generation counter immediately on the calling thread, so even launch
/// tasks still sitting in the scheduler's queue know they have been
/// overtaken.
pub struct MaskSequencer {
    state: RegionState,
    scheduler: SchedulerHandle,
    generation: Arc<AtomicU64>,
    phase: Arc<Mutex<MaskPhase>>,
}

impl MaskSequencer {
    pub fn new(state: RegionState, scheduler: SchedulerHandle) -> Self {
        Self {
            state,
            scheduler,
            generation: Arc::new(AtomicU64::new(0)),
            phase: Arc::new(Mutex::new(MaskPhase::default())),
        }
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> MaskPhase {
        *self.phase.lock().unwrap()
    }

    /// Start a sequence, superseding any run in flight
    ///
    /// `duration_ms` is the per-region tween length, floored to 1ms.
    /// `stagger_ms` spreads the launches; zero launches every region at
    /// once. Returns immediately; the reset and the tween launches happen on
    /// the scheduler's next frame.
    pub fn start(
        &self,
        direction: SequenceDirection,
        duration_ms: u32,
        stagger_ms: u32,
    ) -> SequenceHandle {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        let duration_ms = duration_ms.max(1);

        let (tx, rx) = mpsc::channel();
        let mut run = SequenceRun::new(
            direction,
            generation,
            Arc::clone(&self.generation),
            self.state.clone(),
            Arc::clone(&self.phase),
            duration_ms,
            stagger_ms,
            tx,
        );

        debug!(
            "mask sequence {generation} queued: {direction:?} \
             duration={duration_ms}ms stagger={stagger_ms}ms"
        );

        let scheduler = self.scheduler.clone();
        let launch = move || {
            if run.is_stale() {
                run.report(SequenceOutcome::Superseded);
                return;
            }
            run.begin();
            if scheduler
                .register_tick_callback(Box::new(move |dt_ms| run.tick(dt_ms)))
                .is_none()
            {
                warn!("scheduler dropped while launching mask sequence");
            }
        };
        if let Err(err) = self.scheduler.dispatch(launch) {
            warn!("mask sequence {generation} dropped: {err}");
        }

        SequenceHandle { rx }
    }
}

struct RegionTween {
    region: usize,
    tween: Tween,
    done: bool,
}

/// One live sweep, owned by its scheduler tick callback
struct SequenceRun {
    direction: SequenceDirection,
    generation: u64,
    live_generation: Arc<AtomicU64>,
    state: RegionState,
    phase: Arc<Mutex<MaskPhase>>,
    regions: [RegionTween; REGION_COUNT],
    completion: Option<Sender<SequenceOutcome>>,
}

impl SequenceRun {
    #[allow(clippy::too_many_arguments)]
    fn new(
        direction: SequenceDirection,
        generation: u64,
        live_generation: Arc<AtomicU64>,
        state: RegionState,
        phase: Arc<Mutex<MaskPhase>>,
        duration_ms: u32,
        stagger_ms: u32,
        completion: Sender<SequenceOutcome>,
    ) -> Self {
        let from = direction.start_value();
        let to = direction.terminal_value();
        let easing = direction.easing();
        let regions = direction.launch_plan().map(|(region, multiplier)| RegionTween {
            region,
            tween: Tween::new(from, to, duration_ms, easing)
                .with_delay(stagger_delay(stagger_ms, multiplier)),
            done: false,
        });
        Self {
            direction,
            generation,
            live_generation,
            state,
            phase,
            regions,
            completion: Some(completion),
        }
    }

    fn is_stale(&self) -> bool {
        self.live_generation.load(Ordering::Acquire) != self.generation
    }

    /// Reset every region to the start value and mark the phase active
    fn begin(&self) {
        *self.phase.lock().unwrap() = self.direction.active_phase();
        self.state.set_all(self.direction.start_value());
    }

    fn report(&mut self, outcome: SequenceOutcome) {
        if let Some(tx) = self.completion.take() {
            let _ = tx.send(outcome);
        }
    }

    /// Advance one frame. Returns `false` once the run is over.
    ///
    /// Staleness is checked before any region write, so a superseded run can
    /// never undo the reset performed by the run that replaced it.
    fn tick(&mut self, dt_ms: f32) -> bool {
        if self.is_stale() {
            debug!("mask sequence {} superseded", self.generation);
            self.report(SequenceOutcome::Superseded);
            return false;
        }

        let mut all_done = true;
        for entry in &mut self.regions {
            if entry.done {
                continue;
            }
            entry.tween.tick(dt_ms);
            if entry.tween.is_pending() {
                all_done = false;
                continue;
            }
            self.state.set_progress(entry.region, entry.tween.value());
            if entry.tween.is_finished() {
                entry.done = true;
            } else {
                all_done = false;
            }
        }

        if all_done {
            // Pin the exact terminal value in case sampling drifted
            self.state.set_all(self.direction.terminal_value());
            *self.phase.lock().unwrap() = self.direction.terminal_phase();
            debug!(
                "mask sequence {} complete: {:?}",
                self.generation, self.direction
            );
            self.report(SequenceOutcome::Completed);
            return false;
        }
        true
    }
}
