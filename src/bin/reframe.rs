use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "reframe", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a project file.
    Check(CheckArgs),
    /// Print the target camera pose at one time.
    Pose(PoseArgs),
    /// Run the frame loop over the trim range and print one JSON line per frame.
    Track(TrackArgs),
    /// Print the overlays and crop shown at one time.
    Visible(VisibleArgs),
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct PoseArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Playback time in seconds.
    #[arg(long)]
    time: f64,
}

#[derive(Parser, Debug)]
struct TrackArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Frames per second of the simulated render loop.
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// End time when the project has no trim range.
    #[arg(long, default_value_t = 10.0)]
    until: f64,

    /// Snap every frame (scrubbing) instead of smoothing (playback).
    #[arg(long, default_value_t = false)]
    paused: bool,
}

#[derive(Parser, Debug)]
struct VisibleArgs {
    /// Input project JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Playback time in seconds.
    #[arg(long)]
    time: f64,

    /// Overlay id selected for editing.
    #[arg(long)]
    selected: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Pose(args) => cmd_pose(args),
        Command::Track(args) => cmd_track(args),
        Command::Visible(args) => cmd_visible(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load(path: &std::path::Path) -> anyhow::Result<reframe::Project> {
    reframe::Project::from_path(path).with_context(|| format!("load project '{}'", path.display()))
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let project = load(&args.in_path)?;
    eprintln!(
        "ok: {} events, {} overlays",
        project.events.len(),
        project.overlays.len()
    );
    Ok(())
}

fn cmd_pose(args: PoseArgs) -> anyhow::Result<()> {
    let project = load(&args.in_path)?;
    let mut clock = reframe::PlaybackClock::new(project.trim);
    clock.set_time(args.time)?;
    let solved =
        reframe::CameraSolver::solve_detailed(clock.current_time(), &project.events, &project.settings);
    let out = serde_json::json!({
        "time": clock.current_time(),
        "pose": solved.pose,
        "phase": solved.phase,
        "transform": solved.pose.css_transform(),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_track(args: TrackArgs) -> anyhow::Result<()> {
    if !(args.fps.is_finite() && args.fps > 0.0) {
        anyhow::bail!("--fps must be > 0");
    }
    let project = load(&args.in_path)?;
    let range = match project.trim {
        Some(r) => r,
        None => reframe::TimeRange::new(0.0, args.until)?,
    };
    let container = reframe::ContainerSize::new(1920.0, 1080.0)?;
    let mut editor = reframe::Editor::new(project, container)?;
    editor.seek(range.start)?;

    let dt = 1.0 / args.fps;
    let frames = (range.len_secs() * args.fps).floor() as u64;
    if !args.paused {
        editor.play();
    }
    for i in 0..frames {
        let pose = if args.paused {
            editor.seek(range.start + i as f64 * dt)?
        } else if i == 0 {
            editor.camera_pose()
        } else {
            editor.frame(dt)
        };
        let line = serde_json::json!({
            "frame": i,
            "time": editor.clock().current_time(),
            "pose": pose,
            "target": editor.target().pose,
        });
        println!("{line}");
    }
    Ok(())
}

fn cmd_visible(args: VisibleArgs) -> anyhow::Result<()> {
    let project = load(&args.in_path)?;
    let mut selection = reframe::Selection::default();
    if let Some(id) = args.selected {
        if project.overlay(&id).is_none() {
            anyhow::bail!("no overlay with id '{id}'");
        }
        selection.select_overlay(id);
    }
    let mut clock = reframe::PlaybackClock::new(project.trim);
    clock.set_time(args.time)?;
    let visible = reframe::VisibilitySelector::select(clock.current_time(), &project, &selection);
    println!("{}", serde_json::to_string_pretty(&visible)?);
    Ok(())
}
