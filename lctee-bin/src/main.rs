mod file_finder;

use anyhow::{Result, anyhow};
use clap::{ArgAction, Parser, Subcommand};
use lctee_android::{AndroidLogProvider, ThreadtimeParser, check_adb_available, clear_logcat};
use lctee_framework::{OutputFormat, ReaderProvider, TeeDesc, start_with_writer};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};
use std::convert::Infallible;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "lctee", version, about = "logcat and run tee.")]
struct Cli {
    /// Show log home.
    #[arg(long)]
    loghome: bool,

    /// Print without color.
    #[arg(short = 'n', long = "no-color")]
    no_color: bool,

    /// Directory holding saved logs (default: ~/.lctee/logs).
    #[arg(long = "loghome-dir", env = "LCTEE_LOGHOME", value_name = "DIR")]
    loghome_dir: Option<PathBuf>,

    /// Diagnostics on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Extra arguments for adb logcat, e.g. `-- *:W`.
    #[arg(last = true, value_name = "LOGCAT_ARGS")]
    logcat_args: Vec<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Input external logcat data from stdin or files.
    #[command(visible_alias = "i")]
    Input {
        /// Set output format, pidcat,json,ltsv.
        #[arg(short, long, default_value = "pidcat", value_parser = parse_format)]
        format: OutputFormat,

        /// Print without color.
        #[arg(short = 'n', long = "no-color")]
        no_color: bool,

        /// Logcat dumps to read, stdin when omitted.
        files: Vec<PathBuf>,
    },

    /// Clear the logs. adb logcat -c
    #[command(visible_alias = "c")]
    Clear,

    /// Show log files
    #[command(visible_alias = "f")]
    File,
}

/// a named input file does not exist
#[derive(Debug, thiserror::Error)]
#[error("Not exist file: {}", .0.display())]
struct MissingInputFile(PathBuf);

fn parse_format(name: &str) -> Result<OutputFormat, Infallible> {
    Ok(OutputFormat::from_name(name))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        // the reader went away (`lctee input dump.txt | head`)
        Err(err) if is_broken_pipe(&err) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<MissingInputFile>() {
                Some(missing) => eprintln!("{}", missing),
                None => eprintln!("Error: {:?}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    // stdout carries the formatted logs, diagnostics go to stderr
    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    if let Err(e) = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("Failed to initialize logger: {}", e);
    }
}

fn run(cli: Cli) -> Result<()> {
    color_eyre::install().or(Err(anyhow!("Error installing color_eyre")))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(cli, dirs::home_dir(), &mut out)
}

fn execute<W: Write>(cli: Cli, home: Option<PathBuf>, out: &mut W) -> Result<()> {
    // only --loghome and `file` look at the log home
    if cli.loghome {
        let log_home = file_finder::resolve_log_home(cli.loghome_dir.as_deref(), home)?;
        writeln!(out, "{}", log_home.display())?;
        return Ok(());
    }

    match cli.command {
        None => stream_device(&cli.logcat_args, !cli.no_color, out),
        Some(Commands::Input {
            format,
            no_color,
            files,
        }) => input(&files, format, !(cli.no_color || no_color), out),
        Some(Commands::Clear) => {
            ensure_adb();
            clear_logcat()?;
            writeln!(out, "cleared")?;
            Ok(())
        }
        Some(Commands::File) => {
            let log_home = file_finder::resolve_log_home(cli.loghome_dir.as_deref(), home)?;
            list_log_files(&log_home, out)
        }
    }
}

fn ensure_adb() {
    if let Err(e) = check_adb_available() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn stream_device<W: Write>(logcat_args: &[String], color: bool, out: &mut W) -> Result<()> {
    ensure_adb();

    let mut desc = TeeDesc::new(Arc::new(ThreadtimeParser::new()));
    desc.color = color;

    let provider = AndroidLogProvider::new().with_args(logcat_args);
    let count = start_with_writer(provider, &desc, out)?;
    log::info!("adb logcat: {} lines", count);
    Ok(())
}

fn input<W: Write>(files: &[PathBuf], format: OutputFormat, color: bool, out: &mut W) -> Result<()> {
    let mut desc = TeeDesc::new(Arc::new(ThreadtimeParser::new()));
    desc.format = format;
    desc.color = color;

    if files.is_empty() {
        let count = start_with_writer(ReaderProvider::stdin(), &desc, out)?;
        log::info!("stdin: {} lines", count);
        return Ok(());
    }

    for file in files {
        if !file.exists() {
            out.flush()?;
            return Err(MissingInputFile(file.clone()).into());
        }

        let count = start_with_writer(ReaderProvider::open(file)?, &desc, out)?;
        log::info!("{}: {} lines", file.display(), count);
    }

    Ok(())
}

fn list_log_files<W: Write>(log_home: &Path, out: &mut W) -> Result<()> {
    if !log_home.exists() {
        log::info!("Log home {} does not exist", log_home.display());
        return Ok(());
    }

    for path in file_finder::find_log_files(log_home) {
        writeln!(out, "{}", path.display())?;
    }
    Ok(())
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}
