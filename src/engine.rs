use std::fmt;
use std::str::FromStr;
use crate::bubble_sort::BubbleSort;
use crate::error::VizError;
use crate::insertion_sort::InsertionSort;
use crate::quick_sort::QuickSort;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Quicksort,
    BubbleSort,
    InsertionSort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Quicksort, Algorithm::BubbleSort, Algorithm::InsertionSort];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Quicksort => "Quicksort",
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::InsertionSort => "Insertion Sort",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quick" | "quicksort" => Ok(Algorithm::Quicksort),
            "bubble" | "bubblesort" => Ok(Algorithm::BubbleSort),
            "insertion" | "insertionsort" => Ok(Algorithm::InsertionSort),
            _ => Err(VizError::UnknownCommand(s.to_string())),
        }
    }
}

/// Result of a single engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    Running,
    Done,
}

impl Progress {
    pub fn is_running(self) -> bool {
        self == Progress::Running
    }
}

/// Indices the projection paints. `None` is "inactive".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Highlights {
    pub primary: Option<usize>,
    pub secondary: Option<usize>,
    pub tertiary: Option<usize>,
    /// Inclusive span.
    pub range: Option<(usize, usize)>,
}

impl Highlights {
    pub const NONE: Highlights = Highlights {
        primary: None,
        secondary: None,
        tertiary: None,
        range: None,
    };

    pub fn in_range(&self, index: usize) -> bool {
        matches!(self.range, Some((start, end)) if index >= start && index <= end)
    }
}

/// One resumable sorting algorithm.
///
/// `step` does one bounded unit of work on `values` and must be idempotent once it has
/// returned [`Progress::Done`]: further calls return `Done` and leave `values` alone.
pub trait StepEngine {
    fn step(&mut self, values: &mut [i32]) -> Progress;

    fn highlights(&self) -> Highlights;

    fn is_done(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Engine {
    Bubble(BubbleSort),
    Insertion(InsertionSort),
    Quick(QuickSort),
}

impl Engine {
    /// Seeds `algorithm` for an array of length `len`.
    pub fn new(algorithm: Algorithm, len: usize) -> Engine {
        match algorithm {
            Algorithm::Quicksort => Engine::Quick(QuickSort::new(len)),
            Algorithm::BubbleSort => Engine::Bubble(BubbleSort::new(len)),
            Algorithm::InsertionSort => Engine::Insertion(InsertionSort::new(len)),
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        match self {
            Engine::Bubble(_) => Algorithm::BubbleSort,
            Engine::Insertion(_) => Algorithm::InsertionSort,
            Engine::Quick(_) => Algorithm::Quicksort,
        }
    }

    pub fn as_quick(&self) -> Option<&QuickSort> {
        match self {
            Engine::Quick(q) => Some(q),
            _ => None,
        }
    }
}

impl StepEngine for Engine {
    fn step(&mut self, values: &mut [i32]) -> Progress {
        match self {
            Engine::Bubble(e) => e.step(values),
            Engine::Insertion(e) => e.step(values),
            Engine::Quick(e) => e.step(values),
        }
    }

    fn highlights(&self) -> Highlights {
        match self {
            Engine::Bubble(e) => e.highlights(),
            Engine::Insertion(e) => e.highlights(),
            Engine::Quick(e) => e.highlights(),
        }
    }

    fn is_done(&self) -> bool {
        match self {
            Engine::Bubble(e) => e.is_done(),
            Engine::Insertion(e) => e.is_done(),
            Engine::Quick(e) => e.is_done(),
        }
    }
}

/// Steps `engine` until it reports `Done`, returning the number of calls made.
pub fn run_to_completion<E: StepEngine + ?Sized>(engine: &mut E, values: &mut [i32]) -> usize {
    let mut steps = 0;
    loop {
        steps += 1;
        if engine.step(values) == Progress::Done {
            return steps;
        }
    }
}
