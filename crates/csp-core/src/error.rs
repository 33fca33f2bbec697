use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    #[error("Control polygon is empty")]
    EmptyControlPolygon,

    #[error("Curve order {order} must be lower than the control point count {count}")]
    OrderTooHigh { order: usize, count: usize },

    #[error("Parameter {t} is outside the curve domain [0, {count})")]
    ParameterOutOfDomain { t: f64, count: usize },

    #[error("Control point index {index} out of range (count {count})")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SplineError>;
