use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CabinetError {
    /// A grid dimension or selection count outside its allowed range.
    #[error("invalid parameter {name}={value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: i64,
        reason: &'static str,
    },
}

impl CabinetError {
    pub fn invalid(name: &'static str, value: i64, reason: &'static str) -> Self {
        CabinetError::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    /// Process exit status for the CLI. Argument parse failures exit with 2
    /// from clap, so rejected parameters use 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            CabinetError::InvalidParameter { .. } => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CabinetError>;
