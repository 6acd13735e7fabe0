use std::path::Path;

use anyhow::Context;
use linkage_core::{JointSpec, KinematicChain};
use serde_derive::Deserialize;

use crate::trajectory::{Profile, Trajectory};

/// Default number of frames when the configuration does not specify any.
const DEFAULT_FRAMES: usize = 200;

fn default_frames() -> usize {
    DEFAULT_FRAMES
}

/// Single joint in the configuration file.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct JointConfig {
    /// Denavit-Hartenberg parameters `d`, `a` and `alpha`.
    #[serde(flatten)]
    pub spec: JointSpec,
    /// Motion of the joint over the trajectory.
    pub profile: Profile,
}

/// Trace configuration.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct TraceConfig {
    /// Name of the manipulator, used to name trace files.
    pub name: String,
    /// Number of frames in the trajectory.
    #[serde(default = "default_frames")]
    pub frames: usize,
    /// Joints ordered from base to end effector.
    #[serde(rename = "joint")]
    pub joints: Vec<JointConfig>,
}

impl TraceConfig {
    /// Read and validate the configuration from a TOML file.
    pub fn try_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();

        let str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        Self::parse(&str).with_context(|| format!("invalid configuration {}", path.display()))
    }

    pub fn parse(str: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(str)?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.frames == 0 {
            anyhow::bail!("frames must be at least 1");
        }
        if self.joints.is_empty() {
            anyhow::bail!("at least one joint is required");
        }

        Ok(())
    }

    pub fn chain(&self) -> Result<KinematicChain, linkage_core::Error> {
        linkage_core::build_chain(self.joints.iter().map(|joint| joint.spec))
    }

    pub fn trajectory(&self) -> Trajectory {
        Trajectory::new(
            self.joints.iter().map(|joint| joint.profile.clone()).collect(),
            self.frames,
        )
    }
}

impl Default for TraceConfig {
    /// Three joint arm with 0.1m links sweeping through its workspace.
    fn default() -> Self {
        use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

        Self {
            name: "arm_3dof".to_string(),
            frames: DEFAULT_FRAMES,
            joints: vec![
                JointConfig {
                    spec: JointSpec::new(0.0, 0.1, FRAC_PI_2),
                    profile: Profile::Sine {
                        amplitude: FRAC_PI_4,
                        cycles: 1.0,
                        offset: 0.0,
                    },
                },
                JointConfig {
                    spec: JointSpec::new(0.0, 0.1, 0.0),
                    profile: Profile::Linear { from: 0.0, to: PI },
                },
                JointConfig {
                    spec: JointSpec::new(0.0, 0.1, 0.0),
                    profile: Profile::Cosine {
                        amplitude: FRAC_PI_4,
                        cycles: 1.0,
                        offset: 0.0,
                    },
                },
            ],
        }
    }
}
