use std::time::Duration;
use log::{debug, trace};
use crate::engine::{Progress, StepEngine};
use crate::error::VizError;
use crate::state::{SortState, Status};

impl SortState {
    fn time_per_step(&self) -> f64 {
        1.0 / self.speed
    }

    // one engine call; finishes the state on Done
    fn step_once(&mut self) -> Progress {
        let progress = match self.engine.as_mut() {
            Some(engine) => engine.step(self.values.as_mut_slice()),
            None => Progress::Done,
        };
        if progress == Progress::Done {
            self.finish();
        }
        progress
    }

    /// Advances the clock by `dt` seconds, returning how many steps ran.
    pub fn update(&mut self, dt: f64) -> usize {
        if self.status != Status::Running || self.engine.is_none() || self.single_step_mode {
            return 0;
        }

        self.accumulator += dt;
        let time_per_step = self.time_per_step();

        let mut steps = 0;
        while self.accumulator >= time_per_step && self.status == Status::Running {
            self.accumulator -= time_per_step;
            steps += 1;
            if self.step_once() == Progress::Done {
                break;
            }
        }

        // cap catch-up after a long stall
        if self.accumulator > time_per_step * 2.0 {
            self.accumulator = time_per_step * 2.0;
        }
        if steps > 0 {
            trace!("{} steps this frame, {:.4}s carried over", steps, self.accumulator);
        }
        steps
    }

    pub fn update_elapsed(&mut self, elapsed: Duration) -> usize {
        self.update(elapsed.as_secs_f64())
    }

    /// Exactly one engine call on explicit request; leaves the state paused or finished.
    pub fn single_step(&mut self) -> Result<Progress, VizError> {
        if self.algorithm.is_none() {
            return Err(VizError::NoAlgorithmSelected);
        }
        if self.values.is_empty() {
            return Err(VizError::EmptyArray);
        }
        if self.status == Status::Finished {
            return Ok(Progress::Done);
        }
        if self.engine.is_none() {
            self.restart();
        }

        self.single_step_mode = true;
        self.status = Status::Running;
        let progress = self.step_once();
        if progress == Progress::Running {
            self.status = Status::Paused;
        }
        debug!("Single step: {:?}", progress);
        Ok(progress)
    }
}
