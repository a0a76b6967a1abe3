use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use radial_gauge::{
    AnimationDriver, DEFAULT_TOLERANCE, Ease, Fps, GaugeConfig, ManualScheduler, resolve_at,
};

#[derive(Parser, Debug)]
#[command(name = "gauge", version)]
struct Cli {
    /// Log more (-v debug, -vv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved gauge geometry as JSON.
    Resolve(ResolveArgs),
    /// Replay the animation on a simulated frame clock, one JSON line per frame.
    Simulate(SimulateArgs),
    /// Print samples of an easing curve.
    Ease(EaseArgs),
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Input gauge config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Resolve at this value instead of the configured one.
    #[arg(long, allow_negative_numbers = true)]
    value: Option<f64>,

    /// Include SVG path data for every segment.
    #[arg(long)]
    paths: bool,

    /// Fail if the configuration needed any fallback.
    #[arg(long)]
    strict: bool,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input gauge config JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Simulated display refresh rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Animate towards this value instead of the configured one.
    #[arg(long, allow_negative_numbers = true)]
    target: Option<f64>,

    /// Override the configured easing.
    #[arg(long)]
    easing: Option<Ease>,
}

#[derive(Parser, Debug)]
struct EaseArgs {
    /// Easing name, e.g. `easeOutBack`.
    #[arg(long)]
    name: Ease,

    /// Number of intervals to sample.
    #[arg(long, default_value_t = 10)]
    samples: u32,
}

/// Upper bound on the frames one `simulate` run may print.
const MAX_SIMULATED_FRAMES: u64 = 1_000_000;

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct FrameLine {
    frame: u64,
    t_ms: f64,
    displayed: f64,
    fraction: f64,
    fill_span: f64,
    animating: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Resolve(args) => cmd_resolve(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Ease(args) => cmd_ease(args),
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

fn read_config(path: &Path) -> anyhow::Result<GaugeConfig> {
    GaugeConfig::from_path(path).with_context(|| format!("load gauge config '{}'", path.display()))
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let cfg = read_config(&args.in_path)?;
    let res = resolve_at(&cfg, args.value.unwrap_or(cfg.value));

    for issue in &res.issues {
        tracing::warn!(%issue, "gauge configuration degraded");
    }
    if args.strict && !res.is_clean() {
        let issues: Vec<String> = res.issues.iter().map(ToString::to_string).collect();
        anyhow::bail!("configuration rejected: {}", issues.join("; "));
    }

    let mut out = serde_json::to_value(&res).context("serialize resolution")?;
    if args.paths {
        out["paths"] = serde_json::to_value(res.geometry.segment_paths(DEFAULT_TOLERANCE))
            .context("serialize segment paths")?;
    }
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let cfg = read_config(&args.in_path)?;
    let fps = Fps::new(args.fps, 1)?;

    let mut opts = cfg.animation;
    if let Some(easing) = args.easing {
        opts.easing = easing;
    }
    // One spare frame absorbs rounding in the frame clock.
    let last_frame = fps
        .ms_to_frames_ceil(opts.duration_ms.max(0.0))
        .saturating_add(1);
    if last_frame > MAX_SIMULATED_FRAMES {
        anyhow::bail!(
            "animation needs {last_frame} frames at {} fps (limit {MAX_SIMULATED_FRAMES})",
            args.fps
        );
    }

    let target = args.target.unwrap_or(cfg.value);
    let mut driver = AnimationDriver::new(target, ManualScheduler::new(), opts);
    driver.replay();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut emit = |frame: u64, t_ms: f64, driver: &AnimationDriver<ManualScheduler>| {
        let g = resolve_at(&cfg, driver.displayed_value()).geometry;
        let line = FrameLine {
            frame,
            t_ms,
            displayed: driver.displayed_value(),
            fraction: g.fraction,
            fill_span: g.fill_span(),
            animating: driver.is_animating(),
        };
        writeln!(out, "{}", serde_json::to_string(&line)?).context("write frame line")
    };

    emit(0, 0.0, &driver)?;
    for frame in 1..=last_frame {
        if !driver.is_animating() {
            break;
        }
        let t_ms = fps.frames_to_ms(frame);
        driver.pump(t_ms);
        emit(frame, t_ms, &driver)?;
    }
    Ok(())
}

fn cmd_ease(args: EaseArgs) -> anyhow::Result<()> {
    let samples = args.samples.max(1);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for i in 0..=samples {
        let t = f64::from(i) / f64::from(samples);
        writeln!(out, "{t:.3}\t{:.6}", args.name.apply(t))?;
    }
    Ok(())
}
