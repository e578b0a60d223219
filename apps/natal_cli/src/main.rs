use anyhow::Context;
use clap::{Parser, Subcommand};
use natal::input::{parse_birth_data, parse_birth_date};
use natal::{BirthData, NatalEngine, ZodiacSign};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Natal charts and sign compatibility")]
struct Args {
    /// Engine settings (defaults to configs/natal.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct Birth {
    /// Birth date, YYYY-MM-DD
    date: String,

    /// Birth time, HH:mm (24-hour)
    #[arg(long)]
    time: Option<String>,

    #[arg(long, requires = "lon", allow_negative_numbers = true)]
    lat: Option<f64>,

    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    lon: Option<f64>,

    #[arg(long)]
    name: Option<String>,
}

impl Birth {
    fn parse(&self) -> anyhow::Result<BirthData> {
        let place = self.lat.zip(self.lon);
        parse_birth_data(&self.date, self.time.as_deref(), place, self.name.as_deref())
            .with_context(|| format!("invalid birth data for {}", self.date))
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a natal chart
    Chart {
        #[command(flatten)]
        birth: Birth,
    },
    /// Score two sun signs, or two full charts with --date-a/--date-b
    Match {
        #[arg(conflicts_with = "date_a")]
        sign_a: Option<String>,
        #[arg(conflicts_with = "date_b")]
        sign_b: Option<String>,

        #[arg(long, requires = "date_b")]
        date_a: Option<String>,
        #[arg(long)]
        time_a: Option<String>,
        #[arg(long, requires = "date_a")]
        date_b: Option<String>,
        #[arg(long)]
        time_b: Option<String>,
    },
    /// Reference data for the twelve signs
    Signs,
    /// Celebrity sun-sign matches for a birth date
    Celebrities {
        /// Birth date, YYYY-MM-DD
        date: String,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChartReport<'a> {
    chart: &'a natal::NatalChart,
    balance: natal::ChartBalance,
    dignities: Vec<natal::DignityResult>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignReport {
    sign: ZodiacSign,
    element: natal::Element,
    modality: natal::Modality,
    ruler: natal::CelestialBody,
    compatible: &'static [ZodiacSign],
    traits: &'static [&'static str],
    weaknesses: &'static [&'static str],
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", text);
    Ok(())
}

fn run(args: Args) -> anyhow::Result<()> {
    let settings = natal_config::load_engine_settings(args.config.as_deref())?;
    let engine = NatalEngine::new(settings).context("invalid engine settings")?;

    match args.command {
        Command::Chart { birth } => {
            let chart = engine.compute_chart(&birth.parse()?)?;
            let report = ChartReport { balance: chart.balance(), dignities: chart.dignities(), chart: &chart };
            print_json(&report, args.pretty)
        }
        Command::Match { sign_a, sign_b, date_a, time_a, date_b, time_b } => match (date_a, date_b) {
            (Some(date_a), Some(date_b)) => {
                let a = engine.compute_chart(&parse_birth_data(&date_a, time_a.as_deref(), None, None)?)?;
                let b = engine.compute_chart(&parse_birth_data(&date_b, time_b.as_deref(), None, None)?)?;
                print_json(&engine.score_detailed_compatibility(&a, &b), args.pretty)
            }
            _ => {
                let (Some(sign_a), Some(sign_b)) = (sign_a, sign_b) else {
                    anyhow::bail!("match needs two signs or --date-a and --date-b");
                };
                let result = engine.score_compatibility(sign_a.parse()?, sign_b.parse()?);
                print_json(&result, args.pretty)
            }
        },
        Command::Signs => {
            let signs: Vec<SignReport> = ZodiacSign::ALL
                .iter()
                .map(|&sign| {
                    let p = sign.profile();
                    SignReport {
                        sign,
                        element: p.element,
                        modality: p.modality,
                        ruler: p.ruler,
                        compatible: p.compatible,
                        traits: p.traits,
                        weaknesses: p.weaknesses,
                    }
                })
                .collect();
            print_json(&signs, args.pretty)
        }
        Command::Celebrities { date } => {
            let chart = engine.compute_chart(&BirthData::new(parse_birth_date(&date)?))?;
            print_json(&engine.match_celebrities(&chart), args.pretty)
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    run(Args::parse())
}
