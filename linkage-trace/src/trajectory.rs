use serde_derive::Deserialize;

fn default_cycles() -> f64 {
    1.0
}

/// Motion profile of a single joint over the length of a trajectory.
///
/// Profiles are sampled on a normalized time `t` in `[0, 1]`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Profile {
    /// Joint is held at a fixed angle.
    Constant { value: f64 },
    /// Joint moves linearly between two angles.
    Linear { from: f64, to: f64 },
    /// Joint oscillates as `offset + amplitude * sin(2π * cycles * t)`.
    Sine {
        amplitude: f64,
        #[serde(default = "default_cycles")]
        cycles: f64,
        #[serde(default)]
        offset: f64,
    },
    /// Joint oscillates as `offset + amplitude * cos(2π * cycles * t)`.
    Cosine {
        amplitude: f64,
        #[serde(default = "default_cycles")]
        cycles: f64,
        #[serde(default)]
        offset: f64,
    },
}

impl Profile {
    pub fn sample(&self, t: f64) -> f64 {
        use std::f64::consts::TAU;

        match self {
            Self::Constant { value } => *value,
            Self::Linear { from, to } => from + (to - from) * t,
            Self::Sine {
                amplitude,
                cycles,
                offset,
            } => offset + amplitude * (TAU * cycles * t).sin(),
            Self::Cosine {
                amplitude,
                cycles,
                offset,
            } => offset + amplitude * (TAU * cycles * t).cos(),
        }
    }
}

/// Joint angle sequence with one angle vector per frame.
pub struct Trajectory {
    profiles: Vec<Profile>,
    frames: usize,
}

impl Trajectory {
    pub fn new(profiles: Vec<Profile>, frames: usize) -> Self {
        Self { profiles, frames }
    }

    /// Number of frames in the trajectory.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames == 0
    }

    /// Normalized time of a frame. First and last frame are included.
    fn time(&self, frame: usize) -> f64 {
        if self.frames > 1 {
            frame as f64 / (self.frames - 1) as f64
        } else {
            0.0
        }
    }

    /// Joint angles for the given frame.
    pub fn angles(&self, frame: usize) -> Vec<f64> {
        let t = self.time(frame);

        self.profiles.iter().map(|profile| profile.sample(t)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec<f64>> + '_ {
        (0..self.frames).map(|frame| self.angles(frame))
    }
}
