use log::debug;
use crate::engine::{Highlights, Progress, StepEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionPhase {
    /// Next call loads `values[i]` as the key.
    Prepare { i: usize },
    /// Scanning backwards from `j`; `j == None` means the scan ran off the front.
    Scan { i: usize, j: Option<usize>, key: i32 },
    Done,
}

/// Insertion sort, one shift or one placement per step.
///
/// The key value lives in the phase rather than in the array, since the first shift
/// overwrites the slot it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionSort {
    len: usize,
    phase: InsertionPhase,
}

impl InsertionSort {
    pub fn new(len: usize) -> InsertionSort {
        InsertionSort {
            len,
            phase: InsertionPhase::Prepare { i: 1 },
        }
    }

    pub fn phase(&self) -> InsertionPhase {
        self.phase
    }

    fn finish(&mut self) -> Progress {
        self.phase = InsertionPhase::Done;
        Progress::Done
    }
}

impl StepEngine for InsertionSort {
    fn step(&mut self, values: &mut [i32]) -> Progress {
        debug_assert_eq!(values.len(), self.len);
        let n = self.len;

        let (i, j, key) = match self.phase {
            InsertionPhase::Done => return Progress::Done,
            InsertionPhase::Prepare { i } => {
                if i >= n {
                    return self.finish();
                }
                (i, Some(i - 1), values[i])
            }
            InsertionPhase::Scan { i, j, key } => (i, j, key),
        };

        match j {
            Some(j) if values[j] > key => {
                values[j + 1] = values[j];
                self.phase = InsertionPhase::Scan { i, j: j.checked_sub(1), key };
                Progress::Running
            }
            _ => {
                let slot = j.map_or(0, |j| j + 1);
                values[slot] = key;
                let next = i + 1;
                if next < n {
                    self.phase = InsertionPhase::Prepare { i: next };
                    Progress::Running
                } else {
                    debug!("Insertion sort finished: {:?}", values);
                    self.finish()
                }
            }
        }
    }

    fn highlights(&self) -> Highlights {
        match self.phase {
            InsertionPhase::Done => Highlights::NONE,
            InsertionPhase::Prepare { i } => Highlights {
                primary: Some(i).filter(|&i| i < self.len),
                secondary: None,
                tertiary: None,
                range: Some((0, i - 1)),
            },
            InsertionPhase::Scan { i, j, .. } => Highlights {
                primary: Some(i),
                secondary: j,
                tertiary: Some(i),
                range: Some((0, i - 1)),
            },
        }
    }

    fn is_done(&self) -> bool {
        self.phase == InsertionPhase::Done
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::run_to_completion;
    use super::*;

    #[test]
    fn shift_then_place() {
        let mut values = vec![3, 1, 2];
        let mut engine = InsertionSort::new(3);
        assert_eq!(engine.highlights().range, Some((0, 0)));

        assert_eq!(engine.step(&mut values), Progress::Running);
        assert_eq!(values, vec![3, 3, 2]);
        assert_eq!(engine.phase(), InsertionPhase::Scan { i: 1, j: None, key: 1 });

        assert_eq!(engine.step(&mut values), Progress::Running);
        assert_eq!(values, vec![1, 3, 2]);
        assert_eq!(engine.phase(), InsertionPhase::Prepare { i: 2 });
        assert_eq!(engine.highlights().range, Some((0, 1)));

        assert_eq!(engine.step(&mut values), Progress::Running);
        assert_eq!(values, vec![1, 3, 3]);

        // placing the last key finishes
        assert_eq!(engine.step(&mut values), Progress::Done);
        assert_eq!(values, vec![1, 2, 3]);
        assert_eq!(engine.highlights(), Highlights::NONE);
    }

    #[test]
    fn key_survives_long_shift() {
        let mut values = vec![9, 8, 7, 6, 5, 1];
        let mut engine = InsertionSort::new(values.len());
        run_to_completion(&mut engine, &mut values);
        assert_eq!(values, vec![1, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn sorted_input_places_without_shifting() {
        let mut values = vec![1, 2, 3, 4];
        let mut engine = InsertionSort::new(4);
        // one placement per key
        assert_eq!(run_to_completion(&mut engine, &mut values), 3);
        assert_eq!(values, vec![1, 2, 3, 4]);
    }

    #[test]
    fn done_is_idempotent() {
        let mut values = vec![2, 1];
        let mut engine = InsertionSort::new(2);
        run_to_completion(&mut engine, &mut values);
        assert_eq!(engine.step(&mut values), Progress::Done);
        assert!(engine.is_done());
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn single_element_finishes_immediately() {
        let mut values = vec![42];
        let mut engine = InsertionSort::new(1);
        assert_eq!(engine.step(&mut values), Progress::Done);
        assert_eq!(values, vec![42]);
    }
}
