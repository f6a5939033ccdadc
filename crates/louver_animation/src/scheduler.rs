//! Animation scheduler
//!
//! Owns the thread on which all animation state is mutated. Work reaches that
//! thread two ways:
//! - **Tasks**: one-shot closures queued with `dispatch()`/`dispatch_wait()`,
//!   drained at the start of every frame in submission order
//! - **Tick callbacks**: per-frame closures registered with
//!   `register_tick_callback()`, called with the frame delta until they
//!   return `false`
//!
//! Callers hold a `SchedulerHandle`, a weak reference that degrades to
//! errors/no-ops once the scheduler is gone.

use slotmap::{new_key_type, SlotMap};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex, Weak};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::debug;

/// Errors from scheduling operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    /// The scheduler was dropped, or an operation needed its thread and the
    /// thread is not running
    #[error("animation scheduler is not running")]
    NotRunning,
    /// The scheduler shut down before completing a waited-on task
    #[error("animation scheduler disconnected while waiting for a task")]
    Disconnected,
}

new_key_type! {
    /// Handle to a registered tick callback
    pub struct TickCallbackId;
}

/// A one-shot closure run on the scheduler thread
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// A per-frame closure; receives the frame delta in milliseconds and returns
/// whether it should stay registered
pub type TickCallback = Box<dyn FnMut(f32) -> bool + Send + 'static>;

/// Internal state of the animation scheduler
struct SchedulerInner {
    /// Callbacks are parked as `None` while their body runs, so the body can
    /// re-enter the scheduler through a handle without deadlocking
    callbacks: SlotMap<TickCallbackId, Option<TickCallback>>,
    tasks: VecDeque<Task>,
    last_frame: Instant,
    target_fps: u32,
    /// Whether the background thread is running (gates `dispatch_wait`)
    running: bool,
}

/// The scheduler that owns the animation thread
///
/// Typically started once at application startup and shared through
/// `SchedulerHandle`:
///
/// ```rust
/// use louver_animation::AnimationScheduler;
///
/// let mut scheduler = AnimationScheduler::new();
/// scheduler.start_background();
/// let handle = scheduler.handle();
/// scheduler.stop_background();
/// # drop(handle);
/// ```
///
/// Without the background thread, `tick()`/`tick_with()` drive frames
/// manually, which is how the unit tests and headless tools run.
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
    /// Stop signal for the background thread
    stop_flag: Arc<AtomicBool>,
    /// Background thread handle (if running)
    thread_handle: Option<JoinHandle<()>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                callbacks: SlotMap::with_key(),
                tasks: VecDeque::new(),
                last_frame: Instant::now(),
                target_fps: 120,
                running: false,
            })),
            stop_flag: Arc::new(AtomicBool::new(false)),
            thread_handle: None,
        }
    }

    /// Start the scheduler on a background thread
    ///
    /// The thread drains tasks and ticks callbacks at the configured target
    /// FPS (default 120). Idempotent while already running.
    pub fn start_background(&mut self) {
        if self.thread_handle.is_some() {
            return; // Already running
        }

        self.inner.lock().unwrap().running = true;
        let inner = Arc::clone(&self.inner);
        let stop_flag = Arc::clone(&self.stop_flag);

        self.thread_handle = Some(thread::spawn(move || {
            debug!("animation thread started");

            while !stop_flag.load(Ordering::Relaxed) {
                let start = Instant::now();

                let fps = inner.lock().unwrap().target_fps.max(1);
                let frame_duration = Duration::from_micros(1_000_000 / fps as u64);

                run_frame(&inner, None);

                // Sleep for remaining frame time
                let elapsed = start.elapsed();
                if elapsed < frame_duration {
                    thread::sleep(frame_duration - elapsed);
                }
            }

            debug!("animation thread stopped");
        }));
    }

    /// Stop the background thread
    ///
    /// Queued tasks that have not run yet are dropped; a `dispatch_wait`
    /// caller blocked on one of them observes `ScheduleError::Disconnected`.
    pub fn stop_background(&mut self) {
        self.stop_flag.store(true, Ordering::Relaxed);
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
        self.stop_flag.store(false, Ordering::Relaxed);
        let mut guard = self.inner.lock().unwrap();
        guard.running = false;
        guard.tasks.clear();
    }

    /// Check if the background thread is running
    pub fn is_background_running(&self) -> bool {
        self.thread_handle.is_some()
    }

    pub fn set_target_fps(&self, fps: u32) {
        self.inner.lock().unwrap().target_fps = fps.max(1);
    }

    /// Get a handle to this scheduler for passing to components
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Run one frame manually, measuring the delta from the last frame
    ///
    /// Returns true if any tick callback is still registered. Only useful
    /// when the background thread is not running.
    pub fn tick(&self) -> bool {
        run_frame(&self.inner, None)
    }

    /// Run one frame manually with an explicit delta
    ///
    /// Deterministic variant of `tick()` for tests and headless stepping.
    pub fn tick_with(&self, dt_ms: f32) -> bool {
        run_frame(&self.inner, Some(dt_ms))
    }

    /// Number of registered tick callbacks
    pub fn callback_count(&self) -> usize {
        self.inner.lock().unwrap().callbacks.len()
    }

    /// Number of tasks waiting for the next frame
    pub fn pending_task_count(&self) -> usize {
        self.inner.lock().unwrap().tasks.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AnimationScheduler {
    fn drop(&mut self) {
        // Stop background thread when scheduler is dropped
        self.stop_background();
    }
}

/// Run a single frame: drain tasks, then tick callbacks
///
/// Both phases release the state lock while user code runs, so tasks and
/// callback bodies are free to call back into the scheduler via a handle.
fn run_frame(inner: &Arc<Mutex<SchedulerInner>>, dt_override: Option<f32>) -> bool {
    let tasks: Vec<Task> = {
        let mut guard = inner.lock().unwrap();
        guard.tasks.drain(..).collect()
    };
    for task in tasks {
        task();
    }

    let (dt_ms, keys) = {
        let mut guard = inner.lock().unwrap();
        let now = Instant::now();
        let dt_ms = dt_override
            .unwrap_or_else(|| (now - guard.last_frame).as_secs_f32() * 1000.0);
        guard.last_frame = now;
        let keys: Vec<TickCallbackId> = guard.callbacks.keys().collect();
        (dt_ms, keys)
    };

    let mut any_registered = false;
    for key in keys {
        // Park the callback while it runs
        let taken = {
            let mut guard = inner.lock().unwrap();
            guard.callbacks.get_mut(key).and_then(Option::take)
        };
        let Some(mut callback) = taken else {
            continue;
        };

        let keep = callback(dt_ms);

        let mut guard = inner.lock().unwrap();
        if keep {
            any_registered = true;
            if let Some(slot) = guard.callbacks.get_mut(key) {
                *slot = Some(callback);
            }
        } else {
            guard.callbacks.remove(key);
        }
    }
    any_registered
}

/// A weak handle to the animation scheduler
///
/// This is what components hold to enqueue work and register callbacks. It
/// does not keep the scheduler alive; once the scheduler is dropped every
/// operation returns `ScheduleError::NotRunning` or `None`.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Queue a task for the next frame, without waiting for it
    pub fn dispatch<F>(&self, task: F) -> Result<(), ScheduleError>
    where
        F: FnOnce() + Send + 'static,
    {
        let inner = self.inner.upgrade().ok_or(ScheduleError::NotRunning)?;
        inner.lock().unwrap().tasks.push_back(Box::new(task));
        Ok(())
    }

    /// Queue a task and block until it has run on the scheduler thread
    ///
    /// Returns the task's value. Requires the background thread: calling this
    /// with the thread stopped fails with `NotRunning` instead of hanging.
    /// Must not be called from the scheduler thread itself, which would
    /// deadlock waiting for its own frame.
    pub fn dispatch_wait<T, F>(&self, task: F) -> Result<T, ScheduleError>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        {
            let inner = self.inner.upgrade().ok_or(ScheduleError::NotRunning)?;
            if !inner.lock().unwrap().running {
                return Err(ScheduleError::NotRunning);
            }
        }

        let (tx, rx) = mpsc::channel();
        self.dispatch(move || {
            let _ = tx.send(task());
        })?;
        rx.recv().map_err(|_| ScheduleError::Disconnected)
    }

    /// Register a per-frame callback, called until it returns `false`
    ///
    /// Returns `None` if the scheduler has been dropped.
    pub fn register_tick_callback(&self, callback: TickCallback) -> Option<TickCallbackId> {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().unwrap().callbacks.insert(Some(callback)))
    }

    /// Remove a registered tick callback
    pub fn remove_tick_callback(&self, id: TickCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().callbacks.remove(id);
        }
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}
