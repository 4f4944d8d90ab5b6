use log::debug;
use crate::engine::{Highlights, Progress, StepEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BubbleCursor {
    // i: completed passes
    pub pass: usize,
    // j: left side of the next comparison
    pub index: usize,
    pub compared: Option<usize>,
}

/// Bubble sort, one neighbour comparison per step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BubbleSort {
    len: usize,
    cursor: Option<BubbleCursor>,
}

impl BubbleSort {
    pub fn new(len: usize) -> BubbleSort {
        BubbleSort {
            len,
            cursor: Some(BubbleCursor { pass: 0, index: 0, compared: None }),
        }
    }

    pub fn cursor(&self) -> Option<BubbleCursor> {
        self.cursor
    }
}

impl StepEngine for BubbleSort {
    fn step(&mut self, values: &mut [i32]) -> Progress {
        debug_assert_eq!(values.len(), self.len);
        let n = self.len;
        let Some(mut cursor) = self.cursor else {
            return Progress::Done;
        };

        if n < 2 || cursor.pass >= n - 1 {
            debug!("Bubble sort finished: {:?}", values);
            self.cursor = None;
            return Progress::Done;
        }

        if cursor.index < n - cursor.pass - 1 {
            let j = cursor.index;
            cursor.compared = Some(j + 1);
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
            }
            cursor.index += 1;
        } else {
            debug!("Pass {} done, {} elements in place", cursor.pass, cursor.pass + 1);
            cursor.pass += 1;
            cursor.index = 0;
            cursor.compared = None;
        }

        self.cursor = Some(cursor);
        Progress::Running
    }

    fn highlights(&self) -> Highlights {
        match self.cursor {
            None => Highlights::NONE,
            Some(c) => Highlights {
                primary: Some(c.pass),
                secondary: Some(c.index),
                tertiary: c.compared,
                // suffix that has already bubbled into place
                range: if c.pass > 0 { Some((self.len - c.pass, self.len - 1)) } else { None },
            },
        }
    }

    fn is_done(&self) -> bool {
        self.cursor.is_none()
    }
}
