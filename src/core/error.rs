use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    InvalidDimensions { height: i64, width: i64 },
    InvalidColor(String),
    OutOfRange { axis: Axis, value: i64, bound: usize },
    UninitializedGrid,
    UnrecognizedCommand(String),
    InvalidArgument(String),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { height, width } => {
                write!(f, "invalid dimensions: {}x{} (height and width must be positive)", height, width)
            }
            Self::InvalidColor(c) => write!(f, "color not recognized: {:?}", c),
            Self::OutOfRange { axis, value, bound } => {
                write!(f, "{} value {} is out of range [0, {})", axis, value, bound)
            }
            Self::UninitializedGrid => write!(f, "image hasn't been created yet"),
            Self::UnrecognizedCommand(cmd) => write!(f, "command not recognized: {:?}", cmd),
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
        }
    }
}

impl std::error::Error for EditorError {}

pub type Result<T> = std::result::Result<T, EditorError>;
