//! The `sortreplay` command line.
//!
//! Every subcommand resolves configuration the same way (defaults, file,
//! preset, environment, flags) and reports failures through [`ExitCode`].

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use sr_common::{Error, OutputFormat, Result};
use sr_config::{
    list_presets, resolve_config, ConfigOverrides, ConfigPaths, InputSize, PlaybackConfig,
    PresetName, ResolvedConfig,
};
use sr_trace::AlgorithmKind;
use tracing::{debug, info};

use crate::clock::{Clock, ManualClock, SystemClock};
use crate::exit_codes::ExitCode;
use crate::export::{write_json, write_jsonl};
use crate::input::{parse_input, random_input_in, seeded_rng};
use crate::logging::{init_logging, LogFormat};
use crate::playback::{AutoPlay, AutoPlayReport, PlaybackController, TickOutcome};
use crate::render::render_step;
use crate::report::{compare_algorithms, render_comparison, render_summary};

#[derive(Parser, Debug)]
#[command(name = "sortreplay", version, about = "Record and replay sorting algorithms step by step")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log line format on stderr
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    /// Config file (TOML, or JSON with a .json extension)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Record a trace and print it
    Trace(TraceArgs),
    /// Auto-play a trace in the terminal
    Play(PlayArgs),
    /// Run every algorithm on the same input and compare counts
    Compare(CompareArgs),
    /// Show the resolved configuration
    Config(ConfigArgs),
}

/// Where the input array comes from and which algorithm sorts it.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// bubble, selection, insertion, quick or merge
    #[arg(short, long)]
    pub algorithm: Option<String>,

    /// Explicit values, e.g. "5,3,1"; overrides --size and --seed
    #[arg(short, long, value_name = "VALUES", allow_hyphen_values = true)]
    pub input: Option<String>,

    /// Number of random values to generate
    #[arg(short, long)]
    pub size: Option<String>,

    /// Seed for random values
    #[arg(long)]
    pub seed: Option<u64>,

    /// classroom, default or stress
    #[arg(long)]
    pub preset: Option<String>,
}

#[derive(Args, Debug)]
pub struct TraceArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Milliseconds per step
    #[arg(long = "speed", value_name = "MS")]
    pub speed_ms: Option<u64>,

    /// Emit one JSON snapshot per frame instead of text
    #[arg(long)]
    pub json: bool,

    /// Advance a simulated clock instead of sleeping
    #[arg(long)]
    pub instant: bool,

    /// Pause after this many timer firings
    #[arg(long, value_name = "N")]
    pub max_ticks: Option<usize>,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigFormat {
    #[default]
    Toml,
    Json,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[arg(short, long, value_enum, default_value_t = ConfigFormat::Toml)]
    pub format: ConfigFormat,

    /// List the built-in presets instead
    #[arg(long)]
    pub presets: bool,
}

/// Parse the process arguments and run. Never panics on bad input.
pub fn run() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::ConfigError
            } else {
                ExitCode::Clean
            };
        }
    };

    // A second subscriber only happens when embedded; keep going without it.
    let _ = init_logging(cli.log_format, cli.verbose);

    match dispatch(&cli) {
        Ok(()) => ExitCode::Clean,
        Err(err) => {
            eprintln!("sortreplay: {err}");
            ExitCode::from_error(&err)
        }
    }
}

fn dispatch(cli: &Cli) -> Result<()> {
    let paths = ConfigPaths::new(cli.config.clone());
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Commands::Trace(args) => run_trace(&paths, args, &mut out),
        Commands::Play(args) => run_play(&paths, args, &mut out),
        Commands::Compare(args) => run_compare(&paths, args, &mut out),
        Commands::Config(args) => run_config(&paths, args, &mut out),
    }
}

impl InputArgs {
    fn overrides(&self) -> Result<ConfigOverrides> {
        Ok(ConfigOverrides {
            algorithm: self
                .algorithm
                .as_deref()
                .map(str::parse::<AlgorithmKind>)
                .transpose()?,
            speed_ms: None,
            size: self.size.as_deref().map(str::parse::<InputSize>).transpose()?,
            seed: self.seed,
            preset: self.preset.as_deref().map(str::parse::<PresetName>).transpose()?,
        })
    }

    /// Explicit values if given, otherwise random ones per `config`.
    fn values(&self, config: &PlaybackConfig) -> Result<Vec<i32>> {
        if let Some(raw) = &self.input {
            return parse_input(raw);
        }
        let mut rng = seeded_rng(config.seed);
        Ok(random_input_in(
            config.input_size()?,
            config.value_min..=config.value_max,
            &mut rng,
        ))
    }
}

fn resolve(paths: &ConfigPaths, overrides: &ConfigOverrides) -> Result<ResolvedConfig> {
    let resolved = resolve_config(paths, overrides)?;
    if let Some(source) = &resolved.source {
        info!(path = %source.display(), "loaded config file");
    }
    Ok(resolved)
}

fn run_trace<W: Write>(paths: &ConfigPaths, args: &TraceArgs, out: &mut W) -> Result<()> {
    let config = resolve(paths, &args.input.overrides()?)?.config;
    let values = args.input.values(&config)?;
    let trace = config.algorithm.generate(&values);
    debug!(algorithm = %config.algorithm, steps = trace.len(), "trace recorded");

    match args.format {
        OutputFormat::Summary => out.write_all(render_summary(&trace).as_bytes())?,
        OutputFormat::Json => write_json(&trace, &mut *out)?,
        OutputFormat::Jsonl => write_jsonl(&trace, &mut *out)?,
    }
    out.flush()?;
    Ok(())
}

fn run_play<W: Write>(paths: &ConfigPaths, args: &PlayArgs, out: &mut W) -> Result<()> {
    let overrides = ConfigOverrides {
        speed_ms: args.speed_ms,
        ..args.input.overrides()?
    };
    let config = resolve(paths, &overrides)?.config;
    let values = args.input.values(&config)?;

    let report = if args.instant {
        let mut controller = PlaybackController::from_config(&config, values, ManualClock::new())?;
        drive(&mut controller, args, out)?
    } else {
        let mut controller = PlaybackController::from_config(&config, values, SystemClock)?;
        drive(&mut controller, args, out)?
    };

    if !args.json {
        let status = if report.finished { "finished" } else { "paused" };
        writeln!(
            out,
            "{status} at step {} after {} ticks ({} ms)",
            report.final_cursor + 1,
            report.ticks,
            report.elapsed.as_millis()
        )?;
    }
    out.flush()?;
    Ok(())
}

/// Print the opening frame, then one frame per advanced step.
fn drive<C: Clock, W: Write>(
    controller: &mut PlaybackController<C>,
    args: &PlayArgs,
    out: &mut W,
) -> Result<AutoPlayReport> {
    controller.ensure_trace();
    write_frame(controller, args.json, out)?;

    let mut failure: Option<Error> = None;
    let mut fired = 0usize;
    let report = AutoPlay::run(controller, |controller, outcome| {
        fired += 1;
        if outcome == TickOutcome::Advanced {
            if let Err(err) = write_frame(controller, args.json, &mut *out) {
                failure = Some(err);
                controller.pause();
                return;
            }
        }
        if args.max_ticks.is_some_and(|max| fired >= max) {
            controller.pause();
        }
    });

    match failure {
        Some(err) => Err(err),
        None => Ok(report),
    }
}

fn write_frame<C: Clock, W: Write>(
    controller: &PlaybackController<C>,
    json: bool,
    out: &mut W,
) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, &controller.snapshot())?;
        writeln!(out)?;
    } else {
        writeln!(
            out,
            "{:>9}  {}",
            controller.progress_label(),
            render_step(&controller.current_step())
        )?;
    }
    Ok(())
}

fn run_compare<W: Write>(paths: &ConfigPaths, args: &CompareArgs, out: &mut W) -> Result<()> {
    let config = resolve(paths, &args.input.overrides()?)?.config;
    let values = args.input.values(&config)?;
    let rows = compare_algorithms(&values);

    match args.format {
        OutputFormat::Summary => {
            writeln!(out, "input ({} values): {values:?}", values.len())?;
            out.write_all(render_comparison(&rows).as_bytes())?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &rows)?;
            writeln!(out)?;
        }
        OutputFormat::Jsonl => {
            for row in &rows {
                serde_json::to_writer(&mut *out, row)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn run_config<W: Write>(paths: &ConfigPaths, args: &ConfigArgs, out: &mut W) -> Result<()> {
    if args.presets {
        let presets = list_presets();
        match args.format {
            ConfigFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &presets)?;
                writeln!(out)?;
            }
            ConfigFormat::Toml => {
                for preset in presets {
                    writeln!(out, "{:<10} {}", preset.name, preset.description)?;
                }
            }
        }
        return Ok(());
    }

    let resolved = resolve(paths, &args.input.overrides()?)?;
    match args.format {
        ConfigFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &resolved.config)?;
            writeln!(out)?;
        }
        ConfigFormat::Toml => {
            if let Some(source) = &resolved.source {
                writeln!(out, "# source: {}", source.display())?;
            }
            out.write_all(toml::to_string_pretty(&resolved.config)?.as_bytes())?;
        }
    }
    out.flush()?;
    Ok(())
}
