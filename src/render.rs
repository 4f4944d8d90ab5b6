use std::fmt;
use crate::config::{BAR_AREA_PADDING, BAR_SCALE, LABEL_MAX_SIZE, MIN_BAR_HEIGHT, WIDE_GAP_MAX_SIZE};
use crate::engine::{Algorithm, Highlights};
use crate::state::{SortState, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarColor {
    Default,
    Primary,
    Secondary,
    Tertiary,
    PartitionRange,
    Sorted,
}

impl BarColor {
    pub fn rgba(self) -> [u8; 4] {
        match self {
            BarColor::Default => [200, 200, 200, 255],
            BarColor::Primary => [0, 228, 48, 255],
            BarColor::Secondary => [230, 41, 55, 255],
            BarColor::Tertiary => [253, 249, 0, 255],
            BarColor::PartitionRange => [0, 121, 241, 255],
            BarColor::Sorted => [102, 191, 255, 255],
        }
    }

    pub fn ansi(self) -> &'static str {
        match self {
            BarColor::Default => "\x1b[37m",
            BarColor::Primary => "\x1b[32m",
            BarColor::Secondary => "\x1b[31m",
            BarColor::Tertiary => "\x1b[33m",
            BarColor::PartitionRange => "\x1b[34m",
            BarColor::Sorted => "\x1b[36m",
        }
    }
}

const ANSI_RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Rect {
        Rect { x, y, width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub rect: Rect,
    pub color: BarColor,
    /// Value to print above the bar, only for small arrays.
    pub label: Option<i32>,
}

fn color_for(state: &SortState, highlights: &Highlights, index: usize) -> BarColor {
    if state.status() == Status::Finished {
        return BarColor::Sorted;
    }
    let index = Some(index);
    if index == highlights.tertiary {
        BarColor::Tertiary
    } else if index == highlights.secondary {
        BarColor::Secondary
    } else if index == highlights.primary {
        BarColor::Primary
    } else if index.is_some_and(|i| highlights.in_range(i)) {
        match state.algorithm() {
            Some(Algorithm::Quicksort) => BarColor::PartitionRange,
            Some(Algorithm::BubbleSort | Algorithm::InsertionSort) => BarColor::Sorted,
            None => BarColor::Default,
        }
    } else {
        BarColor::Default
    }
}

pub fn bar_color(state: &SortState, index: usize) -> BarColor {
    color_for(state, &state.highlights(), index)
}

/// Lays out one bar per value inside `bounds`, bottom aligned.
pub fn project(state: &SortState, bounds: Rect) -> Vec<Bar> {
    let n = state.len();
    if n == 0 {
        return Vec::new();
    }

    let panel_width = bounds.width - 2.0 * BAR_AREA_PADDING;
    let panel_height = bounds.height - 2.0 * BAR_AREA_PADDING;
    let bar_width = panel_width / n as f32;
    let gap = if n > WIDE_GAP_MAX_SIZE { 1.0 } else { 2.0 };
    let start_x = bounds.x + BAR_AREA_PADDING;
    let bottom = bounds.y + bounds.height - BAR_AREA_PADDING;
    let highlights = state.highlights();

    state
        .values()
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let height = (value as f32 / BAR_SCALE as f32 * panel_height).max(MIN_BAR_HEIGHT);
            Bar {
                rect: Rect::new(start_x + i as f32 * bar_width, bottom - height, (bar_width - gap).max(0.0), height),
                color: color_for(state, &highlights, i),
                label: if n <= LABEL_MAX_SIZE { Some(value) } else { None },
            }
        })
        .collect()
}

enum ViewMode {
    Numbers,
    Bars { rows: usize },
}

/// ANSI coloured rendering of a state for terminals.
pub struct TerminalView<'a> {
    state: &'a SortState,
    mode: ViewMode,
}

impl<'a> TerminalView<'a> {
    pub fn numbers(state: &'a SortState) -> Self {
        TerminalView { state, mode: ViewMode::Numbers }
    }

    pub fn bars(state: &'a SortState, rows: usize) -> Self {
        TerminalView { state, mode: ViewMode::Bars { rows: rows.max(1) } }
    }
}

impl fmt::Display for TerminalView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let highlights = self.state.highlights();
        let values = self.state.values();

        match self.mode {
            ViewMode::Numbers => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}{}", color_for(self.state, &highlights, i).ansi(), value)?;
                }
                write!(f, "{}]", ANSI_RESET)
            }
            ViewMode::Bars { rows } => {
                let heights: Vec<usize> = values
                    .iter()
                    .map(|&v| ((v.max(0) as usize * rows + BAR_SCALE as usize - 1) / BAR_SCALE as usize).max(1))
                    .collect();
                for row in (1..=rows).rev() {
                    for (i, &height) in heights.iter().enumerate() {
                        if height >= row {
                            write!(f, "{}\u{2588}", color_for(self.state, &highlights, i).ansi())?;
                        } else {
                            f.write_str(" ")?;
                        }
                    }
                    writeln!(f, "{}", ANSI_RESET)?;
                }
                Ok(())
            }
        }
    }
}
