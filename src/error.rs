//! Error types
//!
//! Every failure the integrator can report happens while the run is being
//! configured: an unsupported mode of deformation, a missing geometric
//! parameter, or an unusable step configuration. Once stepping starts the
//! integrator never fails; numerical blow-up propagates into the output
//! arrays and has to be inspected by the caller.

use thiserror::Error;

/// Root error type for fabric-rs.
#[derive(Error, Debug)]
pub enum FabricError {
    /// The mode descriptor did not carry a `type` tag.
    #[error("mode of deformation has no type")]
    MissingModeType,

    /// The `type` tag is not one of the known kinematic modes.
    #[error("Mode of deformation type=\"{tag}\" not supported")]
    UnknownMode { tag: String },

    /// The mode is recognised but not implemented (rigid rotation).
    #[error("type=\"{tag}\" not yet supported")]
    Unimplemented { tag: String },

    /// A geometric parameter required by the mode is absent.
    #[error("mode \"{mode}\" requires parameter \"{parameter}\"")]
    MissingParameter {
        mode: &'static str,
        parameter: &'static str,
    },

    /// A geometric parameter is present but outside its domain.
    #[error("invalid parameter \"{parameter}\": {reason}")]
    InvalidParameter {
        parameter: &'static str,
        reason: String,
    },

    /// Step count, step size or strain target cannot drive a run.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Exported data failed validation.
    #[error("export error: {0}")]
    Export(String),

    /// Underlying I/O failure while writing output.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type FabricResult<T> = Result<T, FabricError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_mode_message_names_the_tag() {
        let err = FabricError::UnknownMode { tag: "twist".to_string() };
        assert_eq!(err.to_string(), "Mode of deformation type=\"twist\" not supported");
    }

    #[test]
    fn test_unimplemented_message_names_the_tag() {
        let err = FabricError::Unimplemented { tag: "rr".to_string() };
        assert!(err.to_string().contains("\"rr\""));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: FabricError = io.into();
        assert!(matches!(err, FabricError::Io(_)));
    }
}
