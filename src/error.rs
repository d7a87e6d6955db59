#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ColorError {
    #[error("{channel} out of range [0, 1]: {value}")]
    OutOfRange { channel: &'static str, value: f64 },
}
