use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tracker needs at least one threshold")]
    EmptyThresholds,
    #[error("threshold {0} is outside [0, 1]")]
    ThresholdOutOfRange(f64),
    #[error("bottom cutoff {0}% is outside [0, 100)")]
    CutoffOutOfRange(f64),
    #[error("{field} must be a non-negative length, got {value}")]
    NegativeLength { field: &'static str, value: f64 },
    #[error("settle scheduler needs at least one frame")]
    ZeroSettleFrames,
}
