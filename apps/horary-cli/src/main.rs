use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use horary::{
    EphemerisProvider, GeoLocation, HoraryEngine, HouseProvider, JudgeOptions, Judgment, Moment, StaticEphemeris,
    SwissEphemerisAdapter,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "horary", about = "Judge a yes/no question from the chart of the moment it is asked")]
struct Args {
    /// The question, e.g. "Will I get the job?"
    #[arg(long, short)]
    question: String,
    /// Moment of asking (RFC 3339); defaults to now
    #[arg(long)]
    at: Option<String>,
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Path to horary.toml
    #[arg(long)]
    config: Option<PathBuf>,
    /// Replay positions from a snapshot JSON file instead of the Swiss Ephemeris
    #[arg(long)]
    positions: Option<PathBuf>,
    /// Print the full judgment as JSON
    #[arg(long)]
    json: bool,
}

fn parse_moment(at: Option<&str>) -> anyhow::Result<DateTime<Utc>> {
    match at {
        Some(text) => Ok(DateTime::parse_from_rfc3339(text)
            .with_context(|| format!("--at must be RFC 3339, got {text:?}"))?
            .with_timezone(&Utc)),
        None => Ok(Utc::now()),
    }
}

fn resolve_location(args: &Args, configured: Option<GeoLocation>) -> anyhow::Result<GeoLocation> {
    let lat = args.lat.or(configured.map(|l| l.lat));
    let lon = args.lon.or(configured.map(|l| l.lon));
    match (lat, lon) {
        (Some(lat), Some(lon)) => Ok(GeoLocation::new(lat, lon)),
        _ => anyhow::bail!("No location: pass --lat and --lon or set [location] in horary.toml"),
    }
}

fn run<P>(provider: P, options: JudgeOptions, question: &str, moment: &Moment) -> anyhow::Result<Judgment>
where
    P: EphemerisProvider + HouseProvider,
{
    let engine = HoraryEngine::new(provider, options);
    Ok(engine.judge(question, moment)?)
}

fn render_text(judgment: &Judgment) -> String {
    let mut out = String::new();
    let sig = &judgment.significators;
    let verdict = &judgment.verdict;

    out.push_str(&format!("Question:  {}\n", judgment.question));
    out.push_str(&format!(
        "Category:  {} (house {})\n",
        judgment.category,
        judgment.category.house()
    ));
    out.push_str(&format!(
        "Ascendant: {:.2}° {}\n",
        judgment.chart.ascendant(),
        judgment.chart.ascendant_sign()
    ));
    out.push_str(&format!(
        "Querent:   {} (ruler of house {} in {})\n",
        sig.querent.body, sig.querent.house, sig.querent.sign
    ));
    out.push_str(&format!(
        "Quesited:  {} (ruler of house {} in {})\n",
        sig.quesited.body, sig.quesited.house, sig.quesited.sign
    ));
    out.push_str(&format!(
        "\nVerdict:   {} ({} confidence), yes {} / no {}\n",
        verdict.determination, verdict.confidence, verdict.yes_score, verdict.no_score
    ));

    out.push_str("\nFactors:\n");
    for factor in &verdict.factors {
        out.push_str(&format!("  - {factor}\n"));
    }

    let timing = &judgment.timing;
    out.push_str(&format!(
        "\nTiming:    about {:.1} days ({:.1} to {:.1})\n           {}\n",
        timing.days, timing.low, timing.high, timing.rationale
    ));

    if !judgment.cautions.is_empty() {
        out.push_str("\nCautions:\n");
        for caution in &judgment.cautions {
            out.push_str(&format!("  ! {caution}\n"));
        }
    }
    out
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let settings = horary_config::load_settings_or_default(args.config.as_deref())?;
    let location = resolve_location(&args, settings.location)?;
    let moment = Moment::new(parse_moment(args.at.as_deref())?, location);

    let judgment = match &args.positions {
        Some(path) => {
            let text = fs::read_to_string(path).with_context(|| format!("Could not read {}", path.display()))?;
            let provider = StaticEphemeris::from_json(&text)
                .with_context(|| format!("Invalid position snapshot {}", path.display()))?;
            log::info!("Replaying positions from {}", path.display());
            run(provider, settings.judge, &args.question, &moment)?
        }
        None => {
            let provider = SwissEphemerisAdapter::new(settings.ephemeris_path.clone())?;
            run(provider, settings.judge, &args.question, &moment)?
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&judgment)?);
    } else {
        print!("{}", render_text(&judgment));
    }
    Ok(())
}
