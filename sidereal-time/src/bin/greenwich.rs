use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use sidereal_time::parsing::{now_utc, parse_timestamp};
use sidereal_time::{GreenwichCalculator, InputScale, Instant, TableConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "greenwich")]
#[command(about = "Greenwich sidereal time (ERA, EO, GAST, GMST, EE), IAU 2006/2000A")]
struct Cli {
    /// YYYYMMDD, YYYYMMDDHHMMSS or YYYYMMDDHHMMSSffffff; current UTC if omitted
    timestamp: Option<String>,

    /// Time scale of the timestamp argument
    #[arg(long, value_enum, default_value = "utc")]
    scale: InputScale,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Also print JD, ΔT, precession and nutation angles, the NPB matrix, x, y and s
    #[arg(long)]
    verbose: bool,

    /// Raise log level on stderr (-v info, -vv debug)
    #[arg(short = 'v', action = ArgAction::Count)]
    log_level: u8,

    /// Luni-solar nutation table
    #[arg(long, env = "SIDEREAL_NUTATION_LS")]
    ls_table: Option<PathBuf>,

    /// Planetary nutation table
    #[arg(long, env = "SIDEREAL_NUTATION_PL")]
    pl_table: Option<PathBuf>,
}

fn init_logging(level: u8) {
    let default = match level {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level);

    let timestamp = match &cli.timestamp {
        Some(arg) => parse_timestamp(arg)
            .with_context(|| format!("invalid timestamp argument '{}'", arg))?,
        None => now_utc(),
    };
    let instant = Instant::new(cli.scale, timestamp)?;

    let config = TableConfig::resolve(cli.ls_table, cli.pl_table)
        .context("cannot locate nutation coefficient tables")?;
    let tables = config.load().with_context(|| {
        format!(
            "cannot load nutation tables {} and {}",
            config.lunisolar.display(),
            config.planetary.display()
        )
    })?;

    let calculator = GreenwichCalculator::new(tables);
    let times = calculator
        .compute(&instant)
        .with_context(|| format!("computation failed for TT {}", instant.tt))?;

    match cli.format {
        OutputFormat::Text if cli.verbose => print!("{:#}", times),
        OutputFormat::Text => print!("{}", times),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&times)?),
    }

    Ok(())
}
