use crate::config::{MAX_SPEED, MIN_SPEED};
use crate::state::{SortState, Status};

pub fn status_text(state: &SortState) -> &'static str {
    match state.status() {
        Status::Idle => "Status: IDLE",
        Status::Running if state.single_step_mode() => "Status: STEP",
        Status::Running => "Status: SORTING",
        Status::Paused => "Status: PAUSED",
        Status::Finished => "Status: FINISHED",
    }
}

pub fn play_label(state: &SortState) -> &'static str {
    if state.status() == Status::Running {
        "Pause"
    } else {
        "Play"
    }
}

pub fn speed_label(speed: f64) -> String {
    format!("{:.1} steps/s", speed)
}

/// Linear slider: `fraction` 0.0 at the left edge, 1.0 at the right.
pub fn speed_from_slider(fraction: f64) -> f64 {
    if fraction.is_nan() {
        return MIN_SPEED;
    }
    (fraction * MAX_SPEED).clamp(MIN_SPEED, MAX_SPEED)
}

pub fn slider_fraction(speed: f64) -> f64 {
    (speed / MAX_SPEED).clamp(0.0, 1.0)
}
