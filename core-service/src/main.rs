//! Wildfire AI - command line predictor
//!
//! Loads the model artifacts once, builds an incident from a preset plus
//! any field overrides, and prints the severity prediction.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use wildfire_core::constants::{APP_NAME, APP_VERSION};
use wildfire_core::{
    presets, ArtifactConfig, IncidentInput, MajorIncident, PredictionError, PredictionPipeline,
    PredictionResult, PRESETS,
};

/// Exit code when artifacts are missing or invalid
const EXIT_UNAVAILABLE: u8 = 2;

#[derive(Parser)]
#[command(name = "wildfire-predict", version, about = "Predict wildfire severity from incident parameters")]
struct Cli {
    /// Directory containing best_fire_model.onnx and scaler.json
    #[arg(long, global = true)]
    model_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List demo presets and their values
    Presets,
    /// Load the model and report engine status
    Status {
        #[arg(long)]
        json: bool,
    },
    /// Run a prediction
    Predict(PredictArgs),
}

#[derive(Args)]
struct PredictArgs {
    /// Preset to start from (custom, minor, moderate, severe, contained)
    #[arg(long, default_value = "custom")]
    preset: String,

    /// County code (0-60)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=60))]
    county: Option<u8>,

    #[arg(long, allow_negative_numbers = true)]
    latitude: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    longitude: Option<f64>,

    /// Containment percent (0-100)
    #[arg(long)]
    percent_contained: Option<f64>,

    #[arg(long)]
    personnel: Option<u32>,

    #[arg(long)]
    engines: Option<u32>,

    #[arg(long)]
    helicopters: Option<u32>,

    #[arg(long)]
    dozers: Option<u32>,

    #[arg(long)]
    water_tenders: Option<u32>,

    /// Yes or No
    #[arg(long)]
    major_incident: Option<MajorIncident>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl PredictArgs {
    /// Preset values with any explicit overrides applied
    fn to_input(&self) -> anyhow::Result<(&'static str, IncidentInput)> {
        let preset = presets::find(&self.preset)
            .with_context(|| format!("unknown preset '{}'", self.preset))?;

        let mut input = preset.input;
        if let Some(v) = self.county { input.county = v; }
        if let Some(v) = self.latitude { input.latitude = v; }
        if let Some(v) = self.longitude { input.longitude = v; }
        if let Some(v) = self.percent_contained { input.percent_contained = v; }
        if let Some(v) = self.personnel { input.personnel = v; }
        if let Some(v) = self.engines { input.engines = v; }
        if let Some(v) = self.helicopters { input.helicopters = v; }
        if let Some(v) = self.dozers { input.dozers = v; }
        if let Some(v) = self.water_tenders { input.water_tenders = v; }
        if let Some(v) = self.major_incident { input.major_incident = v; }

        Ok((preset.name, input.clamped()))
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    match run(Cli::parse()) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut config = ArtifactConfig::from_env();
    if let Some(dir) = cli.model_dir {
        config = config.with_model_dir(dir);
    }

    match cli.command {
        Command::Presets => {
            print_presets();
            Ok(ExitCode::SUCCESS)
        }
        Command::Status { json } => {
            let pipeline = PredictionPipeline::load(&config);
            let status = pipeline.status();
            if json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                println!("{} v{}", APP_NAME, APP_VERSION);
                match &status.unavailable_reason {
                    None => println!("✅ Model Ready"),
                    Some(reason) => println!("❌ Model Error: {}", reason),
                }
                if let Some(meta) = &status.metadata {
                    println!("  Algorithm: {}", meta.algorithm);
                    println!("  Model:     {}", meta.model_path);
                    println!("  SHA-256:   {}", meta.model_sha256);
                    println!("  Scaler:    {} ({})", meta.scaler_path, meta.scaler_kind);
                    println!("  Features:  {} (layout {:08x})", meta.features, meta.layout_hash);
                }
            }
            Ok(if status.model_loaded { ExitCode::SUCCESS } else { ExitCode::from(EXIT_UNAVAILABLE) })
        }
        Command::Predict(args) => {
            let (preset_name, input) = args.to_input()?;
            let pipeline = PredictionPipeline::load(&config);

            match pipeline.predict_input(&input) {
                Ok(result) => {
                    if args.json {
                        let body = serde_json::json!({
                            "preset": preset_name,
                            "input": input,
                            "result": result,
                        });
                        println!("{}", serde_json::to_string_pretty(&body)?);
                    } else {
                        print_result(preset_name, &result);
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(e @ PredictionError::ResourceUnavailable(_)) => {
                    eprintln!("❌ {}", e);
                    eprintln!("   Place the model artifacts in {}", config.resolve_dir().display());
                    Ok(ExitCode::from(EXIT_UNAVAILABLE))
                }
                Err(e) => {
                    log::error!("{}", e);
                    eprintln!("❌ Prediction failed. Check the input values and model files.");
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

fn print_presets() {
    println!(
        "{:<10} {:<28} {:>6} {:>8} {:>9} {:>6} {:>9} {:>7} {:>5} {:>6} {:>7} {:>5}  {}",
        "SLUG", "NAME", "COUNTY", "LAT", "LON", "CONT%", "PERSONNEL", "ENGINES", "HELI",
        "DOZERS", "TENDERS", "MAJOR", "EXPECTED"
    );
    for p in PRESETS {
        let i = &p.input;
        println!(
            "{:<10} {:<28} {:>6} {:>8.4} {:>9.4} {:>6.1} {:>9} {:>7} {:>5} {:>6} {:>7} {:>5}  {}",
            p.slug,
            p.name,
            i.county,
            i.latitude,
            i.longitude,
            i.percent_contained,
            i.personnel,
            i.engines,
            i.helicopters,
            i.dozers,
            i.water_tenders,
            i.major_incident,
            p.expected.map(|t| t.as_str()).unwrap_or("-"),
        );
    }
}

fn print_result(preset_name: &str, result: &PredictionResult) {
    let bundle = &result.bundle;

    println!("Scenario: {}", preset_name);
    println!();
    println!("  {} Acres Predicted", result.display_acres);
    println!();
    println!("  {} {}", bundle.icon, result.tier.title());
    println!("  {}", bundle.message);
    println!();
    println!("  {}:", bundle.heading);
    for action in bundle.actions {
        println!("    - {}", action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predict_args(args: &[&str]) -> PredictArgs {
        let argv = ["wildfire-predict", "predict"].iter().chain(args.iter()).copied();
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Predict(args) => args,
            _ => panic!("expected predict subcommand"),
        }
    }

    #[test]
    fn test_overrides_apply_on_top_of_preset() {
        let (name, input) = predict_args(&["--preset", "severe", "--engines", "3", "--longitude", "-118.5"])
            .to_input()
            .unwrap();

        assert_eq!(name, "Severe Fire (Critical)");
        assert_eq!(input.engines, 3);
        assert_eq!(input.longitude, -118.5);
        assert_eq!(input.personnel, 500);
        assert_eq!(input.major_incident, MajorIncident::Yes);
    }

    #[test]
    fn test_containment_is_clamped() {
        let (_, input) = predict_args(&["--percent-contained", "140"]).to_input().unwrap();
        assert_eq!(input.percent_contained, 100.0);
    }

    #[test]
    fn test_county_out_of_range_rejected_by_parser() {
        let argv = ["wildfire-predict", "predict", "--county", "61"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_unknown_preset_is_error() {
        assert!(predict_args(&["--preset", "inferno"]).to_input().is_err());
    }
}
