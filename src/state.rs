use std::fmt;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::array::SortArray;
use crate::config::{clamp_speed, Config};
use crate::engine::{Algorithm, Engine, Highlights, StepEngine};
use crate::error::VizError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Running,
    Paused,
    Finished,
}

/// Everything the pacing controller and the projection need, owned in one place.
#[derive(Debug)]
pub struct SortState {
    pub(crate) values: SortArray,
    pub(crate) status: Status,
    pub(crate) algorithm: Option<Algorithm>,
    pub(crate) engine: Option<Engine>,
    pub(crate) speed: f64,
    pub(crate) accumulator: f64,
    pub(crate) single_step_mode: bool,
    rng: StdRng,
}

impl SortState {
    pub fn new(config: &Config) -> SortState {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let values = SortArray::random(config.size, &mut rng);
        info!("Created state with {} values, speed {}", config.size, config.speed);
        SortState {
            values,
            status: Status::Idle,
            algorithm: None,
            engine: None,
            speed: clamp_speed(config.speed).unwrap_or(crate::config::DEFAULT_SPEED),
            accumulator: 0.0,
            single_step_mode: false,
            rng,
        }
    }

    /// A state over fixed values; nothing is randomized until the next reset.
    pub fn with_values(values: Vec<i32>, config: &Config) -> SortState {
        let mut state = SortState::new(&config.clone().with_size(0));
        state.values = SortArray::from(values);
        state
    }

    pub fn values(&self) -> &[i32] {
        self.values.as_slice()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    pub fn engine(&self) -> Option<&Engine> {
        self.engine.as_ref()
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn single_step_mode(&self) -> bool {
        self.single_step_mode
    }

    /// Cursor view for rendering; all inactive unless running or paused.
    pub fn highlights(&self) -> Highlights {
        match (self.status, &self.engine) {
            (Status::Running | Status::Paused, Some(engine)) => engine.highlights(),
            _ => Highlights::NONE,
        }
    }

    /// New random values and a freshly seeded engine. Speed and step mode survive.
    pub fn reset(&mut self) {
        self.values.regenerate(&mut self.rng);
        self.restart();
    }

    // re-seed the engine over the current values; nothing to sort stays idle
    pub(crate) fn restart(&mut self) {
        self.accumulator = 0.0;
        match self.algorithm {
            Some(algorithm) if !self.values.is_empty() => {
                self.engine = Some(Engine::new(algorithm, self.values.len()));
                self.status = Status::Paused;
                debug!("Reset {} over {} values", algorithm, self.values.len());
            }
            _ => {
                self.engine = None;
                self.status = Status::Idle;
            }
        }
    }

    pub fn select_algorithm(&mut self, algorithm: Algorithm) {
        info!("Selected {}", algorithm);
        self.algorithm = Some(algorithm);
        self.reset();
    }

    /// Replaces the values and restarts the active algorithm over them.
    pub fn load_values(&mut self, values: Vec<i32>) -> Result<(), VizError> {
        if values.is_empty() {
            return Err(VizError::EmptyArray);
        }
        self.values = SortArray::from(values);
        self.restart();
        Ok(())
    }

    pub fn resize(&mut self, size: usize) -> Result<(), VizError> {
        if size == 0 {
            return Err(VizError::EmptyArray);
        }
        self.values.resize(size, &mut self.rng);
        self.restart();
        Ok(())
    }

    /// Also caps any carried-over time at two steps of the new speed.
    pub fn set_speed(&mut self, speed: f64) -> Result<(), VizError> {
        self.speed = clamp_speed(speed)?;
        self.accumulator = self.accumulator.min(2.0 / self.speed);
        Ok(())
    }

    pub fn back_to_menu(&mut self) {
        info!("Back to menu");
        self.algorithm = None;
        self.engine = None;
        self.status = Status::Idle;
        self.accumulator = 0.0;
    }

    pub(crate) fn finish(&mut self) {
        info!("{} finished", self.algorithm.map_or("Sort", |a| a.name()));
        self.status = Status::Finished;
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::render::TerminalView::numbers(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> SortState {
        SortState::new(&Config::default().with_seed(12345).with_size(16))
    }

    #[test]
    fn starts_idle() {
        let state = seeded();
        assert_eq!(state.status(), Status::Idle);
        assert_eq!(state.algorithm(), None);
        assert_eq!(state.len(), 16);
        assert_eq!(state.highlights(), Highlights::NONE);
    }

    #[test]
    fn selecting_seeds_without_starting() {
        let mut state = seeded();
        state.select_algorithm(Algorithm::Quicksort);
        assert_eq!(state.status(), Status::Paused);
        let quick = state.engine().and_then(|e| e.as_quick()).unwrap();
        assert_eq!(quick.stack().len(), 1);
        assert_eq!(state.highlights().range, Some((0, 15)));
    }

    #[test]
    fn reset_regenerates_and_keeps_settings() {
        let mut state = seeded();
        state.set_speed(42.0).unwrap();
        state.single_step_mode = true;
        state.select_algorithm(Algorithm::BubbleSort);
        let before = state.values().to_vec();
        state.accumulator = 0.1;
        state.reset();
        assert_ne!(state.values(), &before[..]);
        assert_eq!(state.len(), before.len());
        assert_eq!(state.speed(), 42.0);
        assert!(state.single_step_mode());
        assert_eq!(state.accumulator(), 0.0);
        assert_eq!(state.status(), Status::Paused);
    }

    #[test]
    fn back_to_menu_drops_algorithm() {
        let mut state = seeded();
        state.select_algorithm(Algorithm::InsertionSort);
        state.back_to_menu();
        assert_eq!(state.status(), Status::Idle);
        assert!(state.engine().is_none());
        assert_eq!(state.len(), 16);
    }

    #[test]
    fn resize_rejects_zero() {
        let mut state = seeded();
        assert!(matches!(state.resize(0), Err(VizError::EmptyArray)));
        state.resize(8).unwrap();
        assert_eq!(state.len(), 8);
    }

    #[test]
    fn empty_values_never_start_an_engine() {
        let mut state = SortState::with_values(vec![], &Config::default());
        state.select_algorithm(Algorithm::Quicksort);
        assert_eq!(state.status(), Status::Idle);
        assert!(state.engine().is_none());
        assert_eq!(state.highlights(), Highlights::NONE);

        assert!(matches!(state.load_values(vec![]), Err(VizError::EmptyArray)));
        assert_eq!(state.status(), Status::Idle);

        state.load_values(vec![2, 1]).unwrap();
        assert_eq!(state.status(), Status::Paused);
        assert_eq!(state.engine().and_then(|e| e.as_quick()).unwrap().stack().len(), 1);
    }

    #[test]
    fn speed_change_caps_carried_time() {
        let mut state = seeded();
        state.set_speed(0.1).unwrap();
        state.accumulator = 9.9;
        state.set_speed(200.0).unwrap();
        assert!((state.accumulator() - 0.01).abs() < 1e-12);

        // slowing down keeps what is already there
        state.set_speed(1.0).unwrap();
        assert!((state.accumulator() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn with_values_keeps_input() {
        let mut state = SortState::with_values(vec![5, 2, 4, 1, 3], &Config::default());
        assert_eq!(state.values(), &[5, 2, 4, 1, 3]);
        state.algorithm = Some(Algorithm::BubbleSort);
        state.restart();
        assert_eq!(state.values(), &[5, 2, 4, 1, 3]);
        assert_eq!(state.status(), Status::Paused);
    }
}
