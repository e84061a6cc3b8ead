use thiserror::Error;

/// Failures of the salinity calculation itself.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SalinityError {
    #[error("Malformed input: {0}")]
    InputMalformed(String),

    #[error("Invalid value for {field} in measurement {index}: {value}")]
    ValueInvalid {
        index: usize,
        field: &'static str,
        value: String,
    },

    #[error("Salinity could not be computed for measurement {index}: {reason}")]
    ComputationError { index: usize, reason: String },
}

impl SalinityError {
    pub fn malformed(msg: impl Into<String>) -> Self {
        SalinityError::InputMalformed(msg.into())
    }
}

/// Process exit codes of the binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    InvalidInput = 1,
    Computation = 2,
    Io = 3,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Error reading from stdin: {source}")]
    ReadStdin {
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading file '{path}': {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not serialize output to JSON: {source}")]
    SerializeOutput {
        #[source]
        source: serde_json::Error,
    },

    #[error("Error writing to stdout: {source}")]
    WriteOutput {
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Salinity(#[from] SalinityError),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::ReadStdin { .. } | AppError::ReadFile { .. } | AppError::WriteOutput { .. } => {
                ExitCode::Io
            }
            AppError::SerializeOutput { .. }
            | AppError::Salinity(SalinityError::ComputationError { .. }) => ExitCode::Computation,
            AppError::Salinity(_) => ExitCode::InvalidInput,
        }
    }
}
