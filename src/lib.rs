pub mod actions;
pub mod array;
pub mod bubble_sort;
pub mod config;
pub mod controls;
pub mod engine;
pub mod error;
pub mod insertion_sort;
mod pacing;
pub mod quick_sort;
pub mod render;
pub mod state;

pub use actions::Action;
pub use array::SortArray;
pub use config::Config;
pub use engine::{run_to_completion, Algorithm, Engine, Highlights, Progress, StepEngine};
pub use error::VizError;
pub use render::{bar_color, project, Bar, BarColor, Rect, TerminalView};
pub use state::{SortState, Status};
