use thiserror::Error;

/// Raised when a request would divide by zero or produce a degenerate period.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SampleError {
    #[error(
        "invalid parameter `{name}`: {value} (must be positive and finite)"
    )]
    InvalidParameter { name: &'static str, value: f64 },
}
