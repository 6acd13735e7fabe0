use linkage_core::{FkResult, KinematicChain};

use crate::trace::{EffectorRecord, LinkRecord, Trace, TraceWriter, Tracer};
use crate::trajectory::Trajectory;

/// Evaluate every frame of the trajectory, in frame order.
///
/// With more than one worker the frames are split into contiguous ranges that are
/// evaluated on scoped threads sharing the same chain.
pub fn evaluate_frames(
    chain: &KinematicChain,
    trajectory: &Trajectory,
    workers: usize,
) -> Result<Vec<FkResult>, linkage_core::Error> {
    let workers = workers.clamp(1, trajectory.len().max(1));

    if workers == 1 {
        return trajectory
            .iter()
            .map(|angles| chain.evaluate(&angles))
            .collect();
    }

    let chunk_size = trajectory.len().div_ceil(workers);

    log::debug!(
        "Evaluating {} frames on {} workers ({} frames each)",
        trajectory.len(),
        workers,
        chunk_size
    );

    std::thread::scope(|s| -> Result<Vec<FkResult>, linkage_core::Error> {
        let handles: Vec<_> = (0..trajectory.len())
            .step_by(chunk_size)
            .map(|start| {
                let end = (start + chunk_size).min(trajectory.len());

                s.spawn(move || {
                    (start..end)
                        .map(|frame| chain.evaluate(&trajectory.angles(frame)))
                        .collect::<Result<Vec<_>, _>>()
                })
            })
            .collect();

        let mut results = Vec::with_capacity(trajectory.len());
        for handle in handles {
            match handle.join() {
                Ok(chunk) => results.extend(chunk?),
                Err(panic) => std::panic::resume_unwind(panic),
            }
        }

        Ok(results)
    })
}

/// Replay a trajectory through the chain and record the results.
///
/// Returns the end effector history of the replay.
pub fn replay<T: Tracer>(
    name: &str,
    chain: &KinematicChain,
    trajectory: &Trajectory,
    tracer: &T,
    workers: usize,
) -> anyhow::Result<Trace> {
    let results = evaluate_frames(chain, trajectory, workers)?;

    let mut link_writer = tracer.instance(&format!("{}_links", name))?;
    let mut effector_writer = tracer.instance(&format!("{}_effector", name))?;

    let mut trace = Trace::default();

    for (frame, result) in results.iter().enumerate() {
        log::trace!("Frame {:4}: {}", frame, result);

        for record in LinkRecord::from_result(frame, result) {
            link_writer.write_record(record)?;
        }
        effector_writer.write_record(EffectorRecord::from_result(frame, result))?;

        trace.push(result.end_effector());
    }

    link_writer.flush()?;
    effector_writer.flush()?;

    Ok(trace)
}
