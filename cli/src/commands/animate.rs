use anyhow::{bail, Result};
use std::io::Write;
use std::time::Duration;
use tracing::info;
use trip_estimator_core::format::format_display_value;
use trip_estimator_core::{Clock, EstimatorConfig, SystemClock, ValueTransitionPresenter};

/// Execute the animate command
///
/// The first total is shown as the settled value; each following total is
/// presented in turn. With `retarget_after_ms`, every target but the last is
/// interrupted after that long, which shows the restart-from-current-value
/// behaviour.
pub fn execute(
    config: &EstimatorConfig,
    totals: &[i64],
    retarget_after_ms: Option<u64>,
    fps: u32,
) -> Result<()> {
    let Some((&initial, targets)) = totals.split_first() else {
        bail!("at least one starting total is required");
    };
    if fps == 0 {
        bail!("--fps must be > 0");
    }
    let frame_interval = Duration::from_secs(1) / fps;

    let clock = SystemClock::new();
    let mut presenter = ValueTransitionPresenter::new(initial, clock, &config.presenter);
    let mut out = std::io::stdout().lock();

    writeln!(out, "{}", format_display_value(initial as f64))?;

    for (index, &target) in targets.iter().enumerate() {
        let is_last = index + 1 == targets.len();
        let token = presenter.present_transition(target)?;
        let started = presenter.clock().now();
        info!(id = token.id(), target, "animating");

        loop {
            std::thread::sleep(frame_interval);
            let Some(frame) = presenter.tick() else { break };
            write!(out, "\r{:<20}", format_display_value(frame.value))?;
            out.flush()?;

            if frame.finished {
                break;
            }
            if let (Some(limit), false) = (retarget_after_ms, is_last) {
                if presenter.clock().now() - started >= Duration::from_millis(limit) {
                    break;
                }
            }
        }
        writeln!(out)?;
    }

    presenter.dispose();
    info!(baseline = presenter.baseline(), "animation finished");
    Ok(())
}
