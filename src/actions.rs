use log::{debug, info};
use crate::engine::Algorithm;
use crate::error::VizError;
use crate::state::{SortState, Status};

/// What the user can ask for from the menu and the control panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    SelectAlgorithm(Algorithm),
    Reset,
    TogglePlay,
    SingleStep,
    SetSpeed(f64),
    SetSize(usize),
    BackToMenu,
}

impl SortState {
    pub fn apply(&mut self, action: Action) -> Result<(), VizError> {
        debug!("Applying {:?} in {:?}", action, self.status);
        match action {
            Action::SelectAlgorithm(algorithm) => self.select_algorithm(algorithm),
            Action::Reset => self.reset(),
            Action::TogglePlay => self.toggle_play()?,
            Action::SingleStep => {
                self.single_step()?;
            }
            Action::SetSpeed(speed) => self.set_speed(speed)?,
            Action::SetSize(size) => self.resize(size)?,
            Action::BackToMenu => self.back_to_menu(),
        }
        Ok(())
    }

    pub fn toggle_play(&mut self) -> Result<(), VizError> {
        if self.algorithm.is_none() {
            return Err(VizError::NoAlgorithmSelected);
        }
        if self.values.is_empty() {
            return Err(VizError::EmptyArray);
        }

        match self.status {
            Status::Finished => {}
            Status::Running => {
                self.status = Status::Paused;
                self.single_step_mode = false;
                info!("Paused");
            }
            Status::Paused | Status::Idle => {
                if self.engine.is_none() {
                    self.reset();
                }
                self.single_step_mode = false;
                self.status = Status::Running;
                info!("Running at {:.1} steps/s", self.speed);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::config::{Config, MAX_SPEED};
    use super::*;

    fn state() -> SortState {
        SortState::new(&Config::default().with_seed(12345).with_size(10))
    }

    #[test]
    fn play_pause_cycle() {
        let mut s = state();
        s.apply(Action::SelectAlgorithm(Algorithm::BubbleSort)).unwrap();
        assert_eq!(s.status(), Status::Paused);
        s.apply(Action::TogglePlay).unwrap();
        assert_eq!(s.status(), Status::Running);
        s.apply(Action::TogglePlay).unwrap();
        assert_eq!(s.status(), Status::Paused);
    }

    #[test]
    fn play_leaves_step_mode() {
        let mut s = state();
        s.apply(Action::SelectAlgorithm(Algorithm::Quicksort)).unwrap();
        s.apply(Action::SingleStep).unwrap();
        assert!(s.single_step_mode());
        s.apply(Action::TogglePlay).unwrap();
        assert!(!s.single_step_mode());
        assert_eq!(s.status(), Status::Running);
        assert!(s.update(1.0) > 0);
    }

    #[test]
    fn play_without_algorithm_is_rejected() {
        let mut s = state();
        assert!(matches!(s.apply(Action::TogglePlay), Err(VizError::NoAlgorithmSelected)));
        assert!(matches!(s.apply(Action::SingleStep), Err(VizError::NoAlgorithmSelected)));
        assert_eq!(s.status(), Status::Idle);
    }

    #[test]
    fn toggle_after_finish_is_noop() {
        let mut s = state();
        s.apply(Action::SelectAlgorithm(Algorithm::InsertionSort)).unwrap();
        while s.status() != Status::Finished {
            s.apply(Action::SingleStep).unwrap();
        }
        s.apply(Action::TogglePlay).unwrap();
        assert_eq!(s.status(), Status::Finished);

        s.apply(Action::Reset).unwrap();
        assert_eq!(s.status(), Status::Paused);
    }

    #[test]
    fn speed_and_size() {
        let mut s = state();
        s.apply(Action::SetSpeed(1e6)).unwrap();
        assert_eq!(s.speed(), MAX_SPEED);
        assert!(s.apply(Action::SetSpeed(f64::INFINITY)).is_err());
        assert_eq!(s.speed(), MAX_SPEED);

        s.apply(Action::SetSize(7)).unwrap();
        assert_eq!(s.len(), 7);
        assert!(matches!(s.apply(Action::SetSize(0)), Err(VizError::EmptyArray)));
    }

    #[test]
    fn back_to_menu_from_running() {
        let mut s = state();
        s.apply(Action::SelectAlgorithm(Algorithm::Quicksort)).unwrap();
        s.apply(Action::TogglePlay).unwrap();
        s.apply(Action::BackToMenu).unwrap();
        assert_eq!(s.status(), Status::Idle);
        assert_eq!(s.algorithm(), None);
        assert_eq!(s.update(10.0), 0);
    }
}
