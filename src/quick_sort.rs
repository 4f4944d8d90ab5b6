use log::debug;
use crate::engine::{Highlights, Progress, StepEngine};

/// Where a frame is in its simulated call.
///
/// The partition runs to completion inside one step, so a frame goes straight from
/// `Start` to `PushLeft`; there is no resumable mid-partition stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    PushLeft { partition: usize },
    PushRight { partition: usize },
    Pop { partition: usize },
}

impl Stage {
    pub fn code(self) -> u8 {
        match self {
            Stage::Start => 0,
            Stage::PushLeft { .. } => 2,
            Stage::PushRight { .. } => 3,
            Stage::Pop { .. } => 4,
        }
    }

    pub fn partition(self) -> Option<usize> {
        match self {
            Stage::Start => None,
            Stage::PushLeft { partition }
            | Stage::PushRight { partition }
            | Stage::Pop { partition } => Some(partition),
        }
    }
}

/// One pending recursive call on `values[low..=high]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub low: usize,
    pub high: usize,
    pub stage: Stage,
}

impl Frame {
    fn new(low: usize, high: usize) -> Frame {
        Frame { low, high, stage: Stage::Start }
    }
}

/// Cursor positions left behind by the last partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionTrace {
    // last index holding an element smaller than the pivot
    pub boundary: Option<usize>,
    pub scan: usize,
    pub pivot: usize,
}

/// Quicksort with recursion replaced by an explicit frame stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickSort {
    stack: Vec<Frame>,
    range: Option<(usize, usize)>,
    trace: Option<PartitionTrace>,
    frames_pushed: usize,
    max_depth: usize,
}

impl QuickSort {
    pub fn new(len: usize) -> QuickSort {
        let mut sorter = QuickSort {
            stack: Vec::new(),
            range: None,
            trace: None,
            frames_pushed: 0,
            max_depth: 0,
        };
        if len > 0 {
            sorter.push(0, len - 1);
            sorter.range = Some((0, len - 1));
        }
        sorter
    }

    pub fn stack(&self) -> &[Frame] {
        &self.stack
    }

    /// Frames pushed so far, the seed frame included.
    pub fn frames_pushed(&self) -> usize {
        self.frames_pushed
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    fn push(&mut self, low: usize, high: usize) {
        self.stack.push(Frame::new(low, high));
        self.frames_pushed += 1;
        self.max_depth = self.max_depth.max(self.stack.len());
    }

    fn pop(&mut self) -> Progress {
        self.stack.pop();
        match self.stack.last() {
            Some(top) => {
                self.range = Some((top.low, top.high));
                Progress::Running
            }
            None => {
                debug!("Quicksort finished after {} frames, max depth {}", self.frames_pushed, self.max_depth);
                self.range = None;
                self.trace = None;
                Progress::Done
            }
        }
    }
}

// Lomuto partition of values[low..=high] around values[high].
fn partition(values: &mut [i32], low: usize, high: usize) -> (usize, PartitionTrace) {
    let pivot = values[high];
    let mut store = low;
    for j in low..high {
        if values[j] < pivot {
            values.swap(store, j);
            store += 1;
        }
    }
    values.swap(store, high);

    let trace = PartitionTrace {
        boundary: if store > low { Some(store - 1) } else { None },
        scan: high - 1,
        pivot: high,
    };
    (store, trace)
}

impl StepEngine for QuickSort {
    fn step(&mut self, values: &mut [i32]) -> Progress {
        let Some(top) = self.stack.last_mut() else {
            return Progress::Done;
        };
        let Frame { low, high, stage } = *top;

        if low >= high {
            return self.pop();
        }

        match stage {
            Stage::Start => {
                let (p, trace) = partition(values, low, high);
                top.stage = Stage::PushLeft { partition: p };
                debug!("Partitioned [{low}, {high}] at {p}: {:?}", &values[low..=high]);
                self.trace = Some(trace);
                self.range = Some((low, high));
            }
            Stage::PushLeft { partition } => {
                top.stage = Stage::PushRight { partition };
                if low + 1 < partition {
                    self.push(low, partition - 1);
                }
            }
            Stage::PushRight { partition } => {
                top.stage = Stage::Pop { partition };
                if partition + 1 < high {
                    self.push(partition + 1, high);
                }
            }
            Stage::Pop { .. } => return self.pop(),
        }
        Progress::Running
    }

    fn highlights(&self) -> Highlights {
        if self.stack.is_empty() {
            return Highlights::NONE;
        }
        Highlights {
            primary: self.trace.and_then(|t| t.boundary),
            secondary: self.trace.map(|t| t.scan),
            tertiary: self.trace.map(|t| t.pivot),
            range: self.range,
        }
    }

    fn is_done(&self) -> bool {
        self.stack.is_empty()
    }
}
