use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExposureError {
    #[error("{got} sensor samples, at least {required} needed for a pollution surface")]
    InsufficientSensorData { got: usize, required: usize },

    #[error("sensor columns differ in length: {lats} lats, {lons} lons, {values} values")]
    MismatchedColumns { lats: usize, lons: usize, values: usize },

    #[error("estimator returned {got} values for {expected} points")]
    WrongBatchSize { expected: usize, got: usize },

    #[error("estimator failure: {0}")]
    Estimator(String),

    #[error("sensor sample parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ExposureResult<T> = Result<T, ExposureError>;
