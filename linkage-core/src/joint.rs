use serde::Deserialize;

use crate::{algorithm::dh::dh_transform, Error, Pose};

/// Structural description of one revolute joint in Denavit-Hartenberg form.
///
/// The joint angle is not part of the description, it is supplied on every
/// evaluation as a [`JointState`].
///
/// Parameters missing from a deserialized description default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct JointSpec {
    /// Link offset along the previous z axis.
    #[serde(default)]
    pub d: f64,
    /// Link length along the common normal.
    #[serde(default)]
    pub a: f64,
    /// Link twist about the common normal in radians.
    #[serde(default)]
    pub alpha: f64,
}

impl JointSpec {
    pub const fn new(d: f64, a: f64, alpha: f64) -> Self {
        Self { d, a, alpha }
    }

    /// Local transform from the previous link frame to this link frame.
    #[inline]
    pub fn transform(&self, theta: f64) -> Pose {
        Pose::from(dh_transform(theta, self.d, self.a, self.alpha))
    }

    /// Verify all structural parameters are finite.
    ///
    /// The `joint` index is only used to report the failing joint.
    pub(crate) fn validate(&self, joint: usize) -> Result<(), Error> {
        for (parameter, value) in [("d", self.d), ("a", self.a), ("alpha", self.alpha)] {
            if !value.is_finite() {
                return Err(Error::InvalidGeometry {
                    joint,
                    parameter,
                    value,
                });
            }
        }

        Ok(())
    }
}

impl std::fmt::Display for JointSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "d={:.3} a={:.3} α={:.3}rad/{:.1}°",
            self.d,
            self.a,
            self.alpha,
            self.alpha.to_degrees()
        )
    }
}

/// Variable joint angle in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JointState {
    pub theta: f64,
}

impl JointState {
    pub const fn new(theta: f64) -> Self {
        Self { theta }
    }

    /// Get the joint angle in degrees.
    pub fn theta_degree(&self) -> f64 {
        self.theta.to_degrees()
    }
}

impl From<f64> for JointState {
    fn from(theta: f64) -> Self {
        Self::new(theta)
    }
}
