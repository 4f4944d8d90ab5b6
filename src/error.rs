use thiserror::Error;

#[derive(Error, Debug)]
pub enum VizError {
    #[error("No algorithm selected")]
    NoAlgorithmSelected,
    #[error("Cannot sort an empty array")]
    EmptyArray,
    #[error("Speed must be a finite number of steps per second, got {0}")]
    InvalidSpeed(f64),
    #[error("Invalid value for {key}: {value:?}")]
    InvalidConfig { key: &'static str, value: String },
    #[error("Unknown command: {0:?}")]
    UnknownCommand(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
