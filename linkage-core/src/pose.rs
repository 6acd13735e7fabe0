use nalgebra::{Matrix3, Matrix4, Point3, Rotation3, Vector3};

/// Homogeneous rigid-body transform.
///
/// Either the local transform of a single joint or the accumulated transform
/// from the base frame to some link frame.
#[derive(Clone, Copy, PartialEq)]
pub struct Pose(Matrix4<f64>);

impl Pose {
    #[inline]
    pub fn identity() -> Self {
        Self(Matrix4::identity())
    }

    /// Compose this frame with a frame expressed relative to it.
    ///
    /// Returns `self × local`. The product does not commute.
    #[inline]
    pub fn compose(&self, local: &Pose) -> Self {
        Self(self.0 * local.0)
    }

    #[inline]
    pub fn matrix(&self) -> &Matrix4<f64> {
        &self.0
    }

    /// Translation column of the transform.
    #[inline]
    pub fn translation(&self) -> Vector3<f64> {
        Vector3::new(self.0[(0, 3)], self.0[(1, 3)], self.0[(2, 3)])
    }

    /// Origin of the frame expressed in the base frame.
    #[inline]
    pub fn origin(&self) -> Point3<f64> {
        Point3::from(self.translation())
    }

    /// Rotation block of the transform.
    #[inline]
    pub fn rotation(&self) -> Matrix3<f64> {
        self.0.fixed_view::<3, 3>(0, 0).into_owned()
    }

    /// Orientation of the frame as roll, pitch and yaw.
    pub fn euler_angles(&self) -> EulerAngles {
        let (roll, pitch, yaw) = Rotation3::from_matrix_unchecked(self.rotation()).euler_angles();

        EulerAngles { roll, pitch, yaw }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<Matrix4<f64>> for Pose {
    fn from(value: Matrix4<f64>) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Pose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let point = self.origin();

        write!(f, "[{:.3}, {:.3}, {:.3}]", point.x, point.y, point.z)
    }
}

impl std::fmt::Debug for Pose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pose {} {:?}", self, self.euler_angles())
    }
}

/// Free axes of frame rotation.
#[derive(Clone, Copy, PartialEq)]
pub struct EulerAngles {
    /// Rotation about the x axis.
    pub roll: f64,
    /// Rotation about the y axis.
    pub pitch: f64,
    /// Rotation about the z axis.
    pub yaw: f64,
}

impl EulerAngles {
    /// Get the roll in degrees.
    pub fn roll_degree(&self) -> f64 {
        self.roll.to_degrees()
    }

    /// Get the pitch in degrees.
    pub fn pitch_degree(&self) -> f64 {
        self.pitch.to_degrees()
    }

    /// Get the yaw in degrees.
    pub fn yaw_degree(&self) -> f64 {
        self.yaw.to_degrees()
    }
}

impl std::fmt::Debug for EulerAngles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Roll: {:+.3}rad ({:+.1}°) Pitch: {:+.3}rad ({:+.1}°) Yaw: {:+.3}rad ({:+.1}°)",
            self.roll,
            self.roll_degree(),
            self.pitch,
            self.pitch_degree(),
            self.yaw,
            self.yaw_degree()
        )
    }
}

/// Outcome of a single forward kinematics evaluation.
///
/// Owned by the caller and unrelated to any previous result.
#[derive(Clone, Debug, PartialEq)]
pub struct FkResult {
    /// Base origin followed by the origin of every link frame.
    pub positions: Vec<Point3<f64>>,
    /// Accumulated transform from the base to the end effector.
    pub end_effector_pose: Pose,
}

impl FkResult {
    /// Origin of the end effector.
    #[inline]
    pub fn end_effector(&self) -> Point3<f64> {
        self.end_effector_pose.origin()
    }

    /// Number of joints that produced this result.
    #[inline]
    pub fn joint_count(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }
}

impl std::fmt::Display for FkResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (idx, point) in self.positions.iter().enumerate() {
            write!(f, "{}=[{:.3}, {:.3}, {:.3}] ", idx, point.x, point.y, point.z)?;
        }

        write!(f, "Endpoint {}", self.end_effector_pose)
    }
}
