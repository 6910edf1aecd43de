//! Terminal front end: list algorithms, print traces, play animations.

use std::cell::Cell;
use std::io::{self, Write};
use std::ops::ControlFlow;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use sortscope::algorithms::{AlgorithmInfo, AlgorithmRegistry, SharedAlgorithm};
use sortscope::error::SortscopeError;
use sortscope::options::{ColorOptions, Options};
use sortscope::playback::{Frame, PlaybackEngine, RealtimeLoop, RunState};
use sortscope::step::{Step, Trace, TraceStats};
use sortscope::validation::{random_array, validate, ValidatedArray};
use web_time::Instant;

#[derive(Parser)]
#[command(name = "sortscope")]
#[command(about = "Step-by-step sorting algorithm animations")]
struct Cli {
    /// TOML options file; defaults apply to anything it leaves out.
    #[arg(long, global = true)]
    options: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the available algorithms.
    List,
    /// Print the step trace for an input.
    Trace {
        #[command(flatten)]
        run: RunArgs,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Play the animation in the terminal.
    Play {
        #[command(flatten)]
        run: RunArgs,
        /// Speed multiplier (clamped to the configured range).
        #[arg(long)]
        speed: Option<f32>,
        /// Draw the bars after every step.
        #[arg(long)]
        bars: bool,
        /// Plain bars without ANSI colours.
        #[arg(long)]
        no_color: bool,
    },
    /// Print the JSON schema of the options file.
    Schema,
    /// Print the effective options, or write them to a file.
    Config {
        /// Write to this path instead of stdout.
        #[arg(long)]
        write: Option<PathBuf>,
    },
}

#[derive(Args)]
struct RunArgs {
    /// Algorithm key or name (see `list`).
    algorithm: String,
    /// Comma-separated integers; a random array when omitted.
    input: Option<String>,
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let options = match &cli.options {
        Some(path) => Options::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => Options::default(),
    };
    let registry = AlgorithmRegistry::default();

    match cli.command {
        Command::List => list(&registry),
        Command::Trace { run, json } => {
            let (algorithm, trace) = prepare(&registry, &run, &options)?;
            if json {
                print_json(&algorithm.info(), &trace)
            } else {
                print_trace(&algorithm.info(), &trace)
            }
        }
        Command::Play {
            run,
            speed,
            bars,
            no_color,
        } => {
            let (algorithm, trace) = prepare(&registry, &run, &options)?;
            let display = BarDisplay {
                enabled: bars,
                color: !no_color,
                palette: options.colors,
            };
            play(&algorithm.info(), trace, &options, speed, display)
        }
        Command::Schema => {
            let mut out = io::stdout().lock();
            serde_json::to_writer_pretty(&mut out, &Options::json_schema())?;
            writeln!(out)?;
            Ok(())
        }
        Command::Config { write } => match write {
            Some(path) => Ok(options.save(&path)?),
            None => {
                let text = toml::to_string_pretty(&options)?;
                write!(io::stdout().lock(), "{text}")?;
                Ok(())
            }
        },
    }
}

fn list(registry: &AlgorithmRegistry) -> Result<()> {
    let mut out = io::stdout().lock();
    for algorithm in registry.iter() {
        let info = algorithm.info();
        writeln!(
            out,
            "{:<10} {:<15} time {:<11} space {:<9} {}",
            info.key,
            info.name,
            info.time_complexity,
            info.space_complexity,
            if info.stable { "stable" } else { "unstable" }
        )?;
    }
    Ok(())
}

fn prepare(
    registry: &AlgorithmRegistry,
    args: &RunArgs,
    options: &Options,
) -> Result<(SharedAlgorithm, Trace)> {
    let algorithm = registry
        .get(&args.algorithm)
        .cloned()
        .ok_or_else(|| {
            SortscopeError::UnknownAlgorithm(args.algorithm.clone())
        })
        .with_context(|| {
            format!("available: {}", registry.keys().join(", "))
        })?;

    let input = resolve_input(args.input.as_deref(), options)?;
    log::info!("{}: {}", algorithm.info().name, input.summary());

    let trace = algorithm.generate_trace(&input);
    trace.check().map_err(SortscopeError::from)?;
    Ok((algorithm, trace))
}

fn resolve_input(
    raw: Option<&str>,
    options: &Options,
) -> Result<ValidatedArray> {
    if let Some(raw) = raw {
        let array =
            validate(raw, &options.input).map_err(SortscopeError::from)?;
        return Ok(array);
    }
    let mut rng = match options.random.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    Ok(random_array(options.random.length, &options.input, &mut rng))
}

// -- trace --------------------------------------------------------------

#[derive(Serialize)]
struct TraceReport<'a> {
    algorithm: &'a AlgorithmInfo,
    initial: &'a [i64],
    result: Vec<i64>,
    stats: TraceStats,
    steps: &'a [Step],
}

fn print_json(info: &AlgorithmInfo, trace: &Trace) -> Result<()> {
    let report = TraceReport {
        algorithm: info,
        initial: trace.initial(),
        result: trace.replay(),
        stats: trace.stats(),
        steps: trace.steps(),
    };
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &report)?;
    writeln!(out)?;
    Ok(())
}

fn print_trace(info: &AlgorithmInfo, trace: &Trace) -> Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "{} ({})", info.name, info.description)?;
    writeln!(
        out,
        "time {}, space {}",
        info.time_complexity, info.space_complexity
    )?;
    writeln!(out, "input:  {}", join(trace.initial()))?;
    for (i, step) in trace.steps().iter().enumerate() {
        let number = i + 1;
        writeln!(out, "{number:>5}. {:<11} {}", step.kind, step.narration)?;
    }
    writeln!(out, "result: {}", join(&trace.replay()))?;
    write_stats(&mut out, trace.len(), trace.stats())?;
    Ok(())
}

fn write_stats(
    out: &mut impl Write,
    total: usize,
    stats: TraceStats,
) -> io::Result<()> {
    writeln!(out, "Steps: {total}")?;
    writeln!(out, "Comparisons: {}", stats.comparisons)?;
    writeln!(out, "Swaps: {}", stats.swaps)
}

fn join(values: &[i64]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// -- play ---------------------------------------------------------------

#[derive(Clone, Copy)]
struct BarDisplay {
    enabled: bool,
    color: bool,
    palette: ColorOptions,
}

const LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

impl BarDisplay {
    fn render(&self, frame: &Frame) -> String {
        let lo = frame.values.iter().copied().min().unwrap_or(0);
        let hi = frame.values.iter().copied().max().unwrap_or(0);
        let span = (hi - lo).max(1);

        let mut line = String::new();
        for bar in &frame.bars {
            let level = ((bar.value - lo) * 7 / span).clamp(0, 7) as usize;
            if self.color {
                let [r, g, b] = self.palette.rgb8(bar.role);
                line.push_str(&format!("\x1b[38;2;{r};{g};{b}m"));
            }
            line.push(LEVELS[level]);
        }
        if self.color {
            line.push_str("\x1b[0m");
        }
        line
    }
}

fn play(
    info: &AlgorithmInfo,
    trace: Trace,
    options: &Options,
    speed: Option<f32>,
    display: BarDisplay,
) -> Result<()> {
    let trace = Arc::new(trace);
    let total = trace.len();
    let mut host = RealtimeLoop::new(options.playback.frame_rate);
    let mut engine = PlaybackEngine::new(options.playback, host.scheduler());

    engine.on_step(move |number, narration| {
        let mut out = io::stdout().lock();
        if let Err(e) = writeln!(out, "Step {number}/{total}: {narration}") {
            log::warn!("narration not written: {e}");
        }
    });
    if display.enabled {
        engine.on_frame(move |frame| {
            if frame.sub_frame == 0 {
                writeln!(io::stdout().lock(), "{}", display.render(frame))?;
            }
            Ok(())
        });
    }
    let finished = Rc::new(Cell::new(false));
    let flag = Rc::clone(&finished);
    engine.on_complete(move || flag.set(true));

    if let Some(speed) = speed {
        engine.set_speed(speed);
    }
    let mut out = io::stdout().lock();
    writeln!(
        out,
        "{} on {} values at {:.1}x",
        info.name,
        trace.initial().len(),
        engine.state().speed
    )?;
    drop(out);

    let started = Instant::now();
    engine.load_trace(Arc::clone(&trace));
    engine.play();
    host.run(&mut engine, |engine| match engine.run_state() {
        RunState::Completed => ControlFlow::Break(()),
        _ => ControlFlow::Continue(()),
    });

    let mut out = io::stdout().lock();
    if finished.get() {
        writeln!(out, "Sort Complete!")?;
    }
    write_stats(&mut out, total, trace.stats())?;
    writeln!(out, "Time: {:.2}s", started.elapsed().as_secs_f32())?;
    Ok(())
}
