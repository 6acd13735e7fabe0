use crate::{algorithm::fk::ForwardKinematics, Error, FkResult, JointSpec, JointState};

/// Serial kinematic chain.
///
/// Joints are stored in physical order, index 0 is attached to the base and the
/// last joint carries the end effector. The chain cannot be modified once built.
#[derive(Clone, Debug, PartialEq)]
pub struct KinematicChain {
    joints: Vec<JointSpec>,
}

impl KinematicChain {
    /// Construct a new chain from joint specifications.
    ///
    /// The chain must contain at least one joint and every structural
    /// parameter must be finite.
    pub fn new(specs: impl IntoIterator<Item = JointSpec>) -> Result<Self, Error> {
        let joints: Vec<JointSpec> = specs.into_iter().collect();

        if joints.is_empty() {
            return Err(Error::ShapeMismatch {
                expected: 1,
                got: 0,
            });
        }

        for (idx, joint) in joints.iter().enumerate() {
            joint.validate(idx)?;
        }

        debug!("Configured chain with {} joints", joints.len());

        Ok(Self { joints })
    }

    #[inline]
    pub fn joints(&self) -> &[JointSpec] {
        &self.joints
    }

    #[inline]
    pub fn joint(&self, index: usize) -> Option<&JointSpec> {
        self.joints.get(index)
    }

    /// Number of joints in the chain.
    #[inline]
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    /// A chain is never empty. Present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// Upper bound on the distance between the base and the end effector.
    pub fn reach(&self) -> f64 {
        self.joints
            .iter()
            .map(|joint| joint.a.hypot(joint.d))
            .sum()
    }

    /// Evaluate the chain for the given joint angles in radians.
    pub fn evaluate(&self, angles: &[f64]) -> Result<FkResult, Error> {
        ForwardKinematics::new(self).solve(angles)
    }

    /// Evaluate the chain for the given joint states.
    pub fn evaluate_states(&self, states: &[JointState]) -> Result<FkResult, Error> {
        let angles: Vec<f64> = states.iter().map(|state| state.theta).collect();

        self.evaluate(&angles)
    }
}

impl std::fmt::Display for KinematicChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chain: Joints: {}; Reach: {:.3}",
            self.joints.len(),
            self.reach()
        )
    }
}
