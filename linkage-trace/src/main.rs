// Copyright (C) 2024 Laixer Equipment B.V.
// All rights reserved.
//
// This software may be modified and distributed under the terms
// of the included license.  See the LICENSE file for details.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueHint};

mod config;
mod replay;
mod trace;
mod trajectory;

#[derive(Parser)]
#[command(author = "Copyright (C) 2024 Laixer Equipment B.V.")]
#[command(version, propagate_version = true)]
#[command(about = "Replay joint trajectories through a kinematic chain", long_about = None)]
struct Args {
    /// Chain and trajectory configuration file.
    #[arg(value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Override the number of frames.
    #[arg(short, long)]
    frames: Option<usize>,

    /// Write CSV traces to directory.
    #[arg(short, long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    output: Option<PathBuf>,

    /// Number of evaluation workers.
    #[arg(short, long, default_value_t = 1)]
    workers: usize,

    /// Report the initial position and exit.
    #[arg(long)]
    initial: bool,

    /// Disable timestamps in log output.
    #[arg(long)]
    no_time: bool,

    /// Level of verbosity.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut log_config = simplelog::ConfigBuilder::new();
    if args.no_time {
        log_config.set_time_level(log::LevelFilter::Off);
        log_config.set_thread_level(log::LevelFilter::Off);
    } else {
        log_config.set_time_offset_to_local().ok();
        log_config.set_time_format_rfc2822();
    }

    log_config.set_target_level(log::LevelFilter::Off);
    log_config.set_location_level(log::LevelFilter::Off);

    let log_level = match args.verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    simplelog::TermLogger::init(
        log_level,
        log_config.build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let mut config = match &args.config {
        Some(path) => config::TraceConfig::try_from_file(path)?,
        None => config::TraceConfig::default(),
    };

    if let Some(frames) = args.frames {
        if frames == 0 {
            anyhow::bail!("frames must be at least 1");
        }
        config.frames = frames;
    }

    log::trace!("{:#?}", config);

    let chain = config
        .chain()
        .with_context(|| format!("invalid chain '{}'", config.name))?;

    log::debug!("Configured: {} {}", config.name, chain);
    for (idx, joint) in chain.joints().iter().enumerate() {
        log::debug!("Joint {}: {}", idx, joint);
    }

    if args.initial {
        report_initial(&chain)?;
        return Ok(());
    }

    let trajectory = config.trajectory();

    let trace = match &args.output {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;

            log::info!("Writing traces to {}", dir.display());

            let tracer = trace::CsvTracer::from_path(dir);
            replay::replay(&config.name, &chain, &trajectory, &tracer, args.workers)?
        }
        None => replay::replay(
            &config.name,
            &chain,
            &trajectory,
            &trace::NullTracer,
            args.workers,
        )?,
    };

    log::info!(
        "Replayed {} frames of '{}' through {} joints",
        trace.len(),
        config.name,
        chain.len()
    );

    if let Some(point) = trace.points().last() {
        log::info!(
            "Final end effector   [{:.3}, {:.3}, {:.3}]",
            point.x,
            point.y,
            point.z
        );
    }

    log::info!("Path length          {:.4}m", trace.path_length());
    log::info!("Largest frame step   {:.4}m", trace.max_step());

    Ok(())
}

/// Evaluate the chain with every joint at zero and log the link origins.
fn report_initial(
    chain: &linkage_core::KinematicChain,
) -> anyhow::Result<linkage_core::FkResult> {
    let result = linkage_core::evaluate(chain, &vec![0.0; chain.len()])?;

    for (idx, point) in result.positions.iter().enumerate() {
        log::info!(
            "Link {:2}              [{:.3}, {:.3}, {:.3}]",
            idx,
            point.x,
            point.y,
            point.z
        );
    }

    log::info!("End effector {:?}", result.end_effector_pose);

    Ok(result)
}
