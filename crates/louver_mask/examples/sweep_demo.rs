//! Slanted Mask Sweep Demo
//!
//! Drives one full open/close cycle headlessly, ticking the scheduler by
//! hand and printing the top edge of the surface each frame: `#` where a
//! band covers it, `.` where the surface shows through. The edges lead the
//! open and the center leads the close.
//!
//! Run with: cargo run -p louver_mask --example sweep_demo

use louver_animation::AnimationScheduler;
use louver_core::Size;
use louver_mask::geometry::{effective_slant_height, slant_run};
use louver_mask::{build_region_quads, MaskConfig, MaskPhase, SlantedMask};

const SURFACE: Size = Size::new(1000.0, 100.0);
const COLUMNS: usize = 64;
const FRAME_MS: f32 = 16.0;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let scheduler = AnimationScheduler::new();
    let config = MaskConfig::new()
        .with_region_duration(300)
        .with_stage_stagger(120);
    let mut mask = SlantedMask::with_config(scheduler.handle(), config);

    println!("opening:");
    mask.set_opened(true);
    run_until(&scheduler, &mask, MaskPhase::Open);

    println!("closing:");
    mask.set_opened(false);
    run_until(&scheduler, &mask, MaskPhase::Closed);
}

fn run_until(scheduler: &AnimationScheduler, mask: &SlantedMask, target: MaskPhase) {
    for frame in 1..=120u32 {
        scheduler.tick_with(FRAME_MS);
        println!("{:>5.0}ms |{}|", frame as f32 * FRAME_MS, coverage_row(mask));
        if mask.phase() == target {
            break;
        }
    }
}

/// One text row sampling the top edge of the surface
fn coverage_row(mask: &SlantedMask) -> String {
    let slant = effective_slant_height(mask.config().slant_height, SURFACE.height);
    let total = SURFACE.width + slant_run(slant);
    let quads = build_region_quads(
        SURFACE,
        mask.config().slant_height,
        &mask.state().snapshot(),
    );

    (0..COLUMNS)
        .map(|col| {
            let x = (col as f32 + 0.5) / COLUMNS as f32 * total;
            let covered = quads
                .iter()
                .any(|quad| x >= quad.top_left.x && x <= quad.top_right.x);
            if covered {
                '#'
            } else {
                '.'
            }
        })
        .collect()
}
