/// Kinematics error.
///
/// Every error is detected at the boundary of the operation that raised it. No
/// partial results are returned alongside an error.
#[derive(Clone, Copy, PartialEq)]
pub enum Error {
    /// Number of supplied values does not match the chain.
    ///
    /// When raised during construction `expected` is the minimum number of joints.
    ShapeMismatch { expected: usize, got: usize },
    /// Structural joint parameter is not finite.
    InvalidGeometry {
        joint: usize,
        parameter: &'static str,
        value: f64,
    },
    /// Link index is past the end of the chain.
    LinkOutOfRange { link: usize, len: usize },
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::ShapeMismatch { expected, got } => {
                write!(f, "ShapeMismatch({}, {})", expected, got)
            }
            Self::InvalidGeometry {
                joint,
                parameter,
                value,
            } => write!(f, "InvalidGeometry({}, {}, {})", joint, parameter, value),
            Self::LinkOutOfRange { link, len } => write!(f, "LinkOutOfRange({}, {})", link, len),
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {} values, got {}", expected, got)
            }
            Self::InvalidGeometry {
                joint,
                parameter,
                value,
            } => write!(
                f,
                "invalid geometry: joint {} parameter '{}' is {}",
                joint, parameter, value
            ),
            Self::LinkOutOfRange { link, len } => {
                write!(f, "link {} out of range for chain of {} joints", link, len)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let error = Error::ShapeMismatch {
            expected: 3,
            got: 2,
        };
        assert_eq!(error.to_string(), "shape mismatch: expected 3 values, got 2");

        let error = Error::InvalidGeometry {
            joint: 1,
            parameter: "alpha",
            value: f64::NAN,
        };
        assert_eq!(
            error.to_string(),
            "invalid geometry: joint 1 parameter 'alpha' is NaN"
        );
    }
}
