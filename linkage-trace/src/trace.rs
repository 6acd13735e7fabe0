use std::path::{Path, PathBuf};

use linkage_core::{nalgebra::Point3, FkResult};
use serde_derive::Serialize;

pub trait TraceWriter {
    fn write_record<T: serde::Serialize>(&mut self, record: T) -> anyhow::Result<()>;

    fn flush(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

pub trait Tracer {
    type Instance: TraceWriter;

    /// Open a trace writer for the named trace.
    fn instance(&self, name: &str) -> anyhow::Result<Self::Instance>;
}

pub struct NullTracer;

impl Tracer for NullTracer {
    type Instance = NullTracerInstance;

    fn instance(&self, _: &str) -> anyhow::Result<Self::Instance> {
        Ok(Self::Instance {})
    }
}

pub struct NullTracerInstance;

impl TraceWriter for NullTracerInstance {
    fn write_record<T: serde::Serialize>(&mut self, _: T) -> anyhow::Result<()> {
        Ok(())
    }
}

pub struct CsvTracer(PathBuf);

impl CsvTracer {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        Self(path.as_ref().to_path_buf())
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.0.join(name.to_owned() + ".csv")
    }
}

impl Tracer for CsvTracer {
    type Instance = CsvTracerInstance;

    fn instance(&self, name: &str) -> anyhow::Result<Self::Instance> {
        let writer = csv::WriterBuilder::new()
            .quote_style(csv::QuoteStyle::NonNumeric)
            .has_headers(true)
            .from_path(self.path(name))?;

        Ok(Self::Instance { writer })
    }
}

pub struct CsvTracerInstance {
    writer: csv::Writer<std::fs::File>,
}

impl TraceWriter for CsvTracerInstance {
    fn write_record<T: serde::Serialize>(&mut self, record: T) -> anyhow::Result<()> {
        Ok(self.writer.serialize(record)?)
    }

    fn flush(&mut self) -> anyhow::Result<()> {
        Ok(self.writer.flush()?)
    }
}

/// Origin of one link frame in one frame of the trajectory.
#[derive(Debug, Serialize)]
pub struct LinkRecord {
    pub frame: usize,
    pub link: usize,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl LinkRecord {
    pub fn from_result(frame: usize, result: &FkResult) -> impl Iterator<Item = LinkRecord> + '_ {
        result
            .positions
            .iter()
            .enumerate()
            .map(move |(link, point)| LinkRecord {
                frame,
                link,
                x: point.x,
                y: point.y,
                z: point.z,
            })
    }
}

/// End effector pose in one frame of the trajectory.
#[derive(Debug, Serialize)]
pub struct EffectorRecord {
    pub frame: usize,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub roll: f64,
    pub pitch: f64,
    pub yaw: f64,
}

impl EffectorRecord {
    pub fn from_result(frame: usize, result: &FkResult) -> Self {
        let point = result.end_effector();
        let angles = result.end_effector_pose.euler_angles();

        Self {
            frame,
            x: point.x,
            y: point.y,
            z: point.z,
            roll: angles.roll,
            pitch: angles.pitch,
            yaw: angles.yaw,
        }
    }
}

/// History of end effector positions over a trajectory.
#[derive(Debug, Default)]
pub struct Trace {
    points: Vec<Point3<f64>>,
}

impl Trace {
    pub fn push(&mut self, point: Point3<f64>) {
        self.points.push(point);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    fn steps(&self) -> impl Iterator<Item = f64> + '_ {
        self.points
            .windows(2)
            .map(|pair| linkage_core::nalgebra::distance(&pair[0], &pair[1]))
    }

    /// Total distance travelled by the end effector.
    pub fn path_length(&self) -> f64 {
        self.steps().sum()
    }

    /// Largest distance between two consecutive frames.
    pub fn max_step(&self) -> f64 {
        self.steps().fold(0.0, f64::max)
    }
}
