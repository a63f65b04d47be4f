use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use dasha_base::dasha::{MAX_DASHA_LEVEL, birth_balance};
use dasha_base::{BirthData, Nakshatra, dasha_breakdown, dasha_hierarchy};
use dasha_config::DashaConfig;
use dasha_time::parse_utc;
use tracing::debug;

mod logging;
mod render;

#[derive(Parser)]
#[command(name = "dasha", about = "Vimshottari dasha timing CLI")]
struct Cli {
    /// Config file (default: $DASHA_CONFIG, then ~/.config/dasha/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Active mahadasha, antardasha and pratyantardasha at an instant
    Snapshot {
        /// Birth UTC datetime (YYYY-MM-DD or YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        birth: String,
        /// Birth nakshatra of the Moon (e.g. rohini, "purva ashadha")
        #[arg(long)]
        nakshatra: String,
        /// Reference UTC datetime (default: now)
        #[arg(long)]
        at: Option<String>,
        /// Moon sidereal longitude at birth, for birth balance
        #[arg(long, allow_hyphen_values = true)]
        moon_lon: Option<f64>,
        /// Mahadashas to list after the active one (0-8, default from config)
        #[arg(long)]
        upcoming: Option<usize>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Full period timeline from birth
    Timeline {
        /// Birth UTC datetime (YYYY-MM-DD or YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        birth: String,
        /// Birth nakshatra of the Moon
        #[arg(long)]
        nakshatra: String,
        /// Moon sidereal longitude at birth, for birth balance
        #[arg(long, allow_hyphen_values = true)]
        moon_lon: Option<f64>,
        /// Maximum depth (0-2, default from config)
        #[arg(long)]
        max_level: Option<u8>,
    },
    /// Ruling graha of a nakshatra
    Ruler {
        /// Nakshatra name
        nakshatra: String,
    },
    /// Nakshatra and birth balance from a Moon sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
}

fn birth_data(birth: &str, nakshatra: &str, moon_lon: Option<f64>) -> Result<BirthData> {
    let instant = parse_utc(birth).with_context(|| format!("invalid --birth '{birth}'"))?;
    let nakshatra: Nakshatra = nakshatra.parse()?;
    let data = BirthData::new(instant, nakshatra);
    Ok(match moon_lon {
        Some(lon) => data.with_moon_longitude(lon),
        None => data,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let logging = logging::Logging::init(cli.verbose);
    let config = DashaConfig::load(cli.config.as_deref()).context("loading config")?;
    logging
        .apply_level(&config.log.level.to_ascii_lowercase(), cli.verbose)
        .context("applying log level")?;
    debug!(?config, "effective config");

    match cli.command {
        Commands::Snapshot {
            birth,
            nakshatra,
            at,
            moon_lon,
            upcoming,
            json,
        } => {
            let birth_data = birth_data(&birth, &nakshatra, moon_lon)?;
            let reference = match at {
                Some(s) => parse_utc(&s).with_context(|| format!("invalid --at '{s}'"))?,
                None => Utc::now(),
            };
            let mut options = config.dasha_options();
            if let Some(n) = upcoming {
                options.upcoming_count = n;
            }
            let breakdown = dasha_breakdown(&birth_data, reference, &options)?;
            let balance = moon_lon.map(birth_balance).transpose()?;

            if json {
                let report = render::SnapshotReport::new(&breakdown, balance);
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", render::snapshot(&breakdown, balance.as_ref()));
            }
        }
        Commands::Timeline {
            birth,
            nakshatra,
            moon_lon,
            max_level,
        } => {
            let birth_data = birth_data(&birth, &nakshatra, moon_lon)?;
            let level = max_level.unwrap_or(config.dasha.max_level);
            if level > MAX_DASHA_LEVEL {
                anyhow::bail!("--max-level must be 0..={MAX_DASHA_LEVEL}, got {level}");
            }
            let hierarchy = dasha_hierarchy(&birth_data, level)?;
            print!(
                "{}",
                render::timeline(&hierarchy, birth_data.nakshatra, render::DISPLAY_LIMIT)
            );
        }
        Commands::Ruler { nakshatra } => {
            let nakshatra: Nakshatra = nakshatra.parse()?;
            println!("{}", render::ruler(nakshatra));
        }
        Commands::Nakshatra { lon } => {
            let balance = birth_balance(lon)?;
            print!("{}", render::balance(lon, &balance));
        }
    }

    Ok(())
}
