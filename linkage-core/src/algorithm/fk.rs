use nalgebra::Point3;

use crate::{Error, FkResult, KinematicChain, Pose};

/// Forward kinematics solver over a borrowed chain.
///
/// The solver holds no state of its own. Joints are composed strictly from the
/// base to the tip, one after another, so that the floating point evaluation
/// order is always the same.
pub struct ForwardKinematics<'a> {
    chain: &'a KinematicChain,
}

impl<'a> ForwardKinematics<'a> {
    pub fn new(chain: &'a KinematicChain) -> Self {
        Self { chain }
    }

    fn check_shape(&self, angles: &[f64]) -> Result<(), Error> {
        if angles.len() != self.chain.len() {
            return Err(Error::ShapeMismatch {
                expected: self.chain.len(),
                got: angles.len(),
            });
        }

        Ok(())
    }

    /// Compute the origin of every link frame and the end effector pose.
    pub fn solve(&self, angles: &[f64]) -> Result<FkResult, Error> {
        self.check_shape(angles)?;

        let mut pose = Pose::identity();
        let mut positions = Vec::with_capacity(self.chain.len() + 1);
        positions.push(Point3::origin());

        for (joint, theta) in self.chain.joints().iter().zip(angles) {
            pose = pose.compose(&joint.transform(*theta));
            positions.push(pose.origin());
        }

        trace!("Solved {} joints: endpoint {}", self.chain.len(), pose);

        Ok(FkResult {
            positions,
            end_effector_pose: pose,
        })
    }

    /// Compute the accumulated pose of link frame `link`.
    ///
    /// All angles must be supplied even though only the first `link + 1` are used.
    pub fn solve_link(&self, angles: &[f64], link: usize) -> Result<Pose, Error> {
        self.check_shape(angles)?;

        if link >= self.chain.len() {
            return Err(Error::LinkOutOfRange {
                link,
                len: self.chain.len(),
            });
        }

        let pose = self.chain.joints()[..=link]
            .iter()
            .zip(angles)
            .fold(Pose::identity(), |pose, (joint, theta)| {
                pose.compose(&joint.transform(*theta))
            });

        Ok(pose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JointSpec;

    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6};

    const TOLERANCE: f64 = 1e-12;

    fn arm_3dof() -> KinematicChain {
        KinematicChain::new([
            JointSpec::new(0.0, 0.1, FRAC_PI_2),
            JointSpec::new(0.0, 0.1, 0.0),
            JointSpec::new(0.0, 0.1, 0.0),
        ])
        .unwrap()
    }

    fn assert_point(point: &Point3<f64>, expected: [f64; 3]) {
        assert!(
            (point.x - expected[0]).abs() < TOLERANCE
                && (point.y - expected[1]).abs() < TOLERANCE
                && (point.z - expected[2]).abs() < TOLERANCE,
            "{} != {:?}",
            point,
            expected
        );
    }

    #[test]
    fn test_home_position() {
        let chain = arm_3dof();
        let result = ForwardKinematics::new(&chain).solve(&[0.0, 0.0, 0.0]).unwrap();

        assert_point(&result.positions[0], [0.0, 0.0, 0.0]);
        assert_point(&result.positions[1], [0.1, 0.0, 0.0]);
        assert_point(&result.positions[2], [0.2, 0.0, 0.0]);
        assert_point(&result.positions[3], [0.3, 0.0, 0.0]);
        assert_eq!(result.end_effector(), result.positions[3]);
    }

    #[test]
    fn test_golden_1() {
        let chain = arm_3dof();
        let result = ForwardKinematics::new(&chain)
            .solve(&[FRAC_PI_2, FRAC_PI_4, -FRAC_PI_4])
            .unwrap();

        assert_point(&result.positions[1], [0.0, 0.1, 0.0]);
        assert_point(&result.positions[2], [0.0, 0.17071067811865476, 0.07071067811865475]);
        assert_point(&result.positions[3], [0.0, 0.2707106781186548, 0.07071067811865475]);

        let rotation = result.end_effector_pose.rotation();
        assert!((rotation[(0, 2)] - 1.0).abs() < TOLERANCE);
        assert!((rotation[(1, 0)] - 1.0).abs() < TOLERANCE);
        assert!((rotation[(2, 1)] - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_golden_2() {
        let chain = arm_3dof();
        let result = ForwardKinematics::new(&chain)
            .solve(&[FRAC_PI_6, FRAC_PI_3, FRAC_PI_2])
            .unwrap();

        assert_point(&result.positions[1], [0.08660254037844388, 0.05, 0.0]);
        assert_point(
            &result.positions[2],
            [0.1299038105676658, 0.075, 0.08660254037844387],
        );
        assert_point(
            &result.positions[3],
            [0.0549038105676658, 0.031698729810778085, 0.13660254037844388],
        );

        let rotation = result.end_effector_pose.rotation();
        assert!((rotation[(0, 0)] + 0.75).abs() < TOLERANCE);
        assert!((rotation[(0, 1)] + 0.4330127018922195).abs() < TOLERANCE);
        assert!((rotation[(2, 1)] + 0.8660254037844386).abs() < TOLERANCE);
    }

    #[test]
    fn test_shape_mismatch() {
        let chain = arm_3dof();
        let solver = ForwardKinematics::new(&chain);

        assert_eq!(
            solver.solve(&[0.0, 0.0]),
            Err(Error::ShapeMismatch {
                expected: 3,
                got: 2
            })
        );
        assert_eq!(
            solver.solve(&[0.0, 0.0, 0.0, 0.0]),
            Err(Error::ShapeMismatch {
                expected: 3,
                got: 4
            })
        );
        assert!(solver.solve(&[]).is_err());
    }

    #[test]
    fn test_composition_order() {
        let chain = arm_3dof();
        let angles = [FRAC_PI_6, FRAC_PI_3, FRAC_PI_2];

        let result = ForwardKinematics::new(&chain).solve(&angles).unwrap();

        let reversed = chain
            .joints()
            .iter()
            .zip(&angles)
            .fold(Pose::identity(), |pose, (joint, theta)| {
                joint.transform(*theta).compose(&pose)
            });

        let difference = (result.end_effector_pose.translation() - reversed.translation()).norm();
        assert!(difference > 1e-3);
    }

    #[test]
    fn test_solve_link() {
        let chain = arm_3dof();
        let solver = ForwardKinematics::new(&chain);
        let angles = [FRAC_PI_6, FRAC_PI_3, FRAC_PI_2];

        let result = solver.solve(&angles).unwrap();

        for link in 0..chain.len() {
            let pose = solver.solve_link(&angles, link).unwrap();
            assert_eq!(pose.origin(), result.positions[link + 1]);
        }

        assert_eq!(
            solver.solve_link(&angles, 2).unwrap(),
            result.end_effector_pose
        );
        assert_eq!(
            solver.solve_link(&angles, 3),
            Err(Error::LinkOutOfRange { link: 3, len: 3 })
        );
        assert!(matches!(
            solver.solve_link(&angles[..2], 0),
            Err(Error::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_deterministic() {
        let chain = arm_3dof();
        let solver = ForwardKinematics::new(&chain);
        let angles = [0.123, -1.5, 2.75];

        let lhs = solver.solve(&angles).unwrap();
        let rhs = solver.solve(&angles).unwrap();

        for (l, r) in lhs.positions.iter().zip(&rhs.positions) {
            for (l, r) in l.coords.iter().zip(r.coords.iter()) {
                assert_eq!(l.to_bits(), r.to_bits());
            }
        }
        for (l, r) in lhs
            .end_effector_pose
            .matrix()
            .iter()
            .zip(rhs.end_effector_pose.matrix().iter())
        {
            assert_eq!(l.to_bits(), r.to_bits());
        }
    }

    #[test]
    fn test_continuity() {
        let chain = arm_3dof();
        let solver = ForwardKinematics::new(&chain);

        let samples = 100;
        let mut previous: Option<Point3<f64>> = None;

        for idx in 0..samples {
            let theta_1 = FRAC_PI_2 * idx as f64 / (samples - 1) as f64;
            let point = solver.solve(&[theta_1, 0.0, 0.0]).unwrap().end_effector();

            if let Some(previous) = previous {
                assert!(nalgebra::distance(&previous, &point) < 0.01);
            }

            previous = Some(point);
        }

        assert_point(&previous.unwrap(), [0.0, 0.3, 0.0]);
    }

    #[test]
    fn test_rotation_orthonormal() {
        let chain = KinematicChain::new([
            JointSpec::new(0.3, 0.0, -FRAC_PI_2),
            JointSpec::new(0.0, 0.5, 0.0),
            JointSpec::new(0.1, 0.2, FRAC_PI_2),
            JointSpec::new(0.4, 0.0, -FRAC_PI_2),
            JointSpec::new(0.0, 0.0, FRAC_PI_2),
            JointSpec::new(0.08, 0.0, 0.0),
        ])
        .unwrap();

        let result = ForwardKinematics::new(&chain)
            .solve(&[0.1, -0.7, 1.3, 2.1, -0.4, 3.0])
            .unwrap();

        let rotation = result.end_effector_pose.rotation();
        let product = rotation * rotation.transpose();

        assert!((product - nalgebra::Matrix3::identity()).amax() < TOLERANCE);
        assert!((rotation.determinant() - 1.0).abs() < TOLERANCE);
        assert_eq!(result.positions.len(), 7);
    }
}
