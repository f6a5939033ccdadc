//! The slanted mask itself.
//!
//! [`SlantedMask`] ties the pieces together: it owns the region state, a
//! [`MaskSequencer`] bound to a scheduler, and the visual configuration.
//! Rendering is pull-based: the host calls [`SlantedMask::render`] with its
//! surface size and a paint context whenever it draws, and can subscribe via
//! [`SlantedMask::on_redraw`] to learn when region values changed and a new
//! frame is worth drawing.

use louver_animation::SchedulerHandle;
use louver_core::{Brush, Color, PaintContext, Size};

use crate::geometry::build_region_quads;
use crate::region::RegionState;
use crate::sequencer::{MaskPhase, MaskSequencer, SequenceDirection, SequenceHandle};

/// Visual and timing configuration for a [`SlantedMask`]
#[derive(Clone, Debug, PartialEq)]
pub struct MaskConfig {
    /// Brush the region quads are filled with
    pub fill: Brush,
    /// Height of the slanted edge; non-positive means the full surface height
    pub slant_height: f32,
    /// Per-region tween length in milliseconds, floored to 1
    pub region_duration_ms: u32,
    /// Stagger between launch stages in milliseconds
    pub stage_stagger_ms: u32,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            fill: Brush::Solid(Color::BLACK),
            slant_height: 80.0,
            region_duration_ms: 300,
            stage_stagger_ms: 120,
        }
    }
}

impl MaskConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    pub fn with_slant_height(mut self, slant_height: f32) -> Self {
        self.slant_height = slant_height;
        self
    }

    pub fn with_region_duration(mut self, duration_ms: u32) -> Self {
        self.region_duration_ms = duration_ms;
        self
    }

    pub fn with_stage_stagger(mut self, stagger_ms: u32) -> Self {
        self.stage_stagger_ms = stagger_ms;
        self
    }
}

/// A five-band slanted transition mask
///
/// The mask is either opened (covering the surface) or closed (invisible),
/// and animates between the two with a center-weighted staggered sweep.
/// All animation runs on the scheduler the mask was created with; the mask
/// itself can live on any thread.
pub struct SlantedMask {
    state: RegionState,
    sequencer: MaskSequencer,
    config: MaskConfig,
    opened: bool,
}

impl SlantedMask {
    /// Create a closed mask with default configuration
    pub fn new(scheduler: SchedulerHandle) -> Self {
        Self::with_config(scheduler, MaskConfig::default())
    }

    pub fn with_config(scheduler: SchedulerHandle, config: MaskConfig) -> Self {
        let state = RegionState::new();
        let sequencer = MaskSequencer::new(state.clone(), scheduler);
        Self {
            state,
            sequencer,
            config,
            opened: false,
        }
    }

    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    /// Mutable configuration access; changes apply from the next sequence
    pub fn config_mut(&mut self) -> &mut MaskConfig {
        &mut self.config
    }

    /// Shared handle to the per-region progress values
    pub fn state(&self) -> &RegionState {
        &self.state
    }

    /// Current lifecycle phase of the sequencer
    pub fn phase(&self) -> MaskPhase {
        self.sequencer.phase()
    }

    /// The target the mask was last asked to move toward
    pub fn is_opened(&self) -> bool {
        self.opened
    }

    /// Set the target coverage, starting a sweep on changes
    ///
    /// Setting the value it already has does nothing; in particular it does
    /// not restart a finished animation.
    pub fn set_opened(&mut self, opened: bool) {
        if self.opened == opened {
            return;
        }
        self.opened = opened;
        if opened {
            self.open();
        } else {
            self.close();
        }
    }

    /// Start the opening sweep, superseding any run in flight
    pub fn open(&self) -> SequenceHandle {
        self.sequencer.start(
            SequenceDirection::Opening,
            self.config.region_duration_ms,
            self.config.stage_stagger_ms,
        )
    }

    /// Start the closing sweep, superseding any run in flight
    pub fn close(&self) -> SequenceHandle {
        self.sequencer.start(
            SequenceDirection::Closing,
            self.config.region_duration_ms,
            self.config.stage_stagger_ms,
        )
    }

    /// Be notified whenever any region value changes
    ///
    /// The listener fires on the scheduler thread, once per changed region.
    /// Hosts typically request a redraw here.
    pub fn on_redraw<F>(&self, listener: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.state.subscribe(listener);
    }

    /// Paint the current mask coverage onto `ctx`
    ///
    /// Draws nothing for a degenerate surface or a fully withdrawn mask.
    pub fn render(&self, surface: Size, ctx: &mut dyn PaintContext) {
        if surface.is_empty() {
            return;
        }
        let progress = self.state.snapshot();
        for quad in build_region_quads(surface, self.config.slant_height, &progress) {
            ctx.fill_path(&quad.to_path(), self.config.fill.clone());
        }
    }
}
