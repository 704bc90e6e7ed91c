//! Detect command handler
//!
//! Reads a JSON array of temperature reports, runs hotspot detection,
//! and prints the result through an output formatter.

use crate::config::Config;
use crate::format::{available_formats, get_formatter};
use crate::geo::Coordinates;
use crate::hotspot::{analyze, DetectorParams, TemperatureReport};
use clap::Args;
use std::io::Read;

/// Detect command arguments
#[derive(Args)]
pub struct DetectArgs {
    /// Input file with a JSON array of reports ("-" for stdin)
    #[arg(long, short = 'i', default_value = "-")]
    pub input: String,

    /// Neighborhood radius in degrees
    #[arg(long)]
    pub eps: Option<f64>,

    /// Minimum neighborhood size for a core point
    #[arg(long)]
    pub min_samples: Option<usize>,

    /// Minimum eligible report temperature
    #[arg(long, short = 't')]
    pub temp_threshold: Option<f64>,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the detect command
pub fn run(args: DetectArgs) -> crate::error::Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    // Load config
    let config = Config::load()?;

    // Read reports
    let content = if args.input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&args.input)?
    };
    let reports: Vec<TemperatureReport> = serde_json::from_str(&content)?;

    // Validate report coordinates at the boundary, as the API does
    for report in &reports {
        Coordinates::new(report.latitude, report.longitude).validate()?;
    }

    // Get parameters with config defaults
    let defaults = config.detector_params();
    let params = DetectorParams {
        eps: args.eps.unwrap_or(defaults.eps),
        min_samples: args.min_samples.unwrap_or(defaults.min_samples),
        temp_threshold: args.temp_threshold.unwrap_or(defaults.temp_threshold),
    };
    params.validate()?;

    let response = analyze(&reports, &params);

    // Format output
    let format = args.format.unwrap_or_else(|| config.defaults.format.clone());
    let formatter = get_formatter(&format)
        .ok_or_else(|| crate::error::Error::Config(format!("Unknown format: {}", format)))?;
    let output = formatter.format(&response, &config)?;

    // Write output
    if let Some(path) = args.output {
        std::fs::write(&path, &output)?;
        eprintln!("Output written to {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

/// Print available output formats
fn list_formats() {
    println!("Available output formats:");
    for format in available_formats() {
        println!("  {:8} - {}", format.name, format.description);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::env;
    use tempfile::TempDir;

    fn detect_args(input: &str, output: Option<String>) -> DetectArgs {
        DetectArgs {
            input: input.to_string(),
            eps: None,
            min_samples: None,
            temp_threshold: None,
            format: None,
            output,
            list_formats: false,
        }
    }

    #[test]
    fn test_out_of_range_report_rejected() {
        let temp_dir = TempDir::new().unwrap();
        env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        let input = temp_dir.path().join("reports.json");
        std::fs::write(
            &input,
            r#"[{"latitude": 91.0, "longitude": -74.0, "temperature": 36.0}]"#,
        )
        .unwrap();

        let result = run(detect_args(input.to_str().unwrap(), None));
        assert!(matches!(result, Err(Error::InvalidCoordinates(_))));
    }

    #[test]
    fn test_valid_reports_accepted() {
        let temp_dir = TempDir::new().unwrap();
        env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        let input = temp_dir.path().join("reports.json");
        std::fs::write(
            &input,
            r#"[
                {"latitude": 40.000, "longitude": -74.000, "temperature": 36.0},
                {"latitude": 40.002, "longitude": -74.001, "temperature": 34.0},
                {"latitude": 40.001, "longitude": -74.002, "temperature": 33.0}
            ]"#,
        )
        .unwrap();

        let output = temp_dir.path().join("result.json");
        run(detect_args(
            input.to_str().unwrap(),
            Some(output.to_str().unwrap().to_string()),
        ))
        .unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["hotspots"].as_array().unwrap().len(), 1);
    }
}
