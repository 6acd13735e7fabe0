// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

//! The `linkage-core` library computes forward kinematics for serial-link manipulators.
//!
//! A manipulator is described once as a [`KinematicChain`] of [`JointSpec`]s using the
//! Denavit-Hartenberg convention. Every evaluation takes one joint angle per joint and
//! returns a fresh [`FkResult`] with the origin of every link frame and the pose of the
//! end effector. The chain is immutable after construction and can be shared between
//! threads without coordination.
//!
//! The library has no I/O and no global state. Rendering, tracing and trajectory
//! generation belong to the caller.
//!
//! ```
//! use linkage_core::{build_chain, evaluate, JointSpec};
//!
//! let chain = build_chain([
//!     JointSpec::new(0.0, 0.1, std::f64::consts::FRAC_PI_2),
//!     JointSpec::new(0.0, 0.1, 0.0),
//! ])
//! .unwrap();
//!
//! let result = evaluate(&chain, &[0.0, 0.0]).unwrap();
//! assert_eq!(result.positions.len(), 3);
//! assert!((result.end_effector().x - 0.2).abs() < 1e-12);
//! ```

pub mod algorithm;
pub mod chain;
pub mod error;
pub mod joint;
pub mod pose;

#[macro_use]
extern crate log;

pub use nalgebra;

pub use self::chain::KinematicChain;
pub use self::error::Error;
pub use self::joint::{JointSpec, JointState};
pub use self::pose::{FkResult, Pose};

/// Build a kinematic chain from an ordered list of joint specifications.
///
/// The first specification is the joint closest to the base. Fails with
/// [`Error::ShapeMismatch`] when `specs` is empty and with [`Error::InvalidGeometry`]
/// when any structural parameter is not finite.
pub fn build_chain(specs: impl IntoIterator<Item = JointSpec>) -> Result<KinematicChain, Error> {
    KinematicChain::new(specs)
}

/// Evaluate the chain for one configuration of joint angles (radians).
///
/// Fails with [`Error::ShapeMismatch`] when the number of angles differs from the
/// number of joints in the chain.
pub fn evaluate(chain: &KinematicChain, angles: &[f64]) -> Result<FkResult, Error> {
    chain.evaluate(angles)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_and_evaluate() {
        let chain = build_chain([
            JointSpec::new(0.0, 0.1, std::f64::consts::FRAC_PI_2),
            JointSpec::new(0.0, 0.1, 0.0),
        ])
        .unwrap();

        let result = evaluate(&chain, &[0.0, 0.0]).unwrap();

        assert_eq!(result.positions.len(), 3);
        assert!((result.end_effector().x - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_build_empty() {
        assert_eq!(
            build_chain(Vec::<JointSpec>::new()).unwrap_err(),
            Error::ShapeMismatch {
                expected: 1,
                got: 0
            }
        );
    }
}
