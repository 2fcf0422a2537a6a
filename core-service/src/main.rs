//! Insider Threat Detection - Batch Entry Point
//!
//! Loads the four CSV logs, runs detection, prints one finding per line.
//! Logs go to stderr so stdout carries only findings.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use insider_threat_core::constants::{APP_NAME, APP_VERSION, BATCH_DATA_DIR_ENV, DEFAULT_DATA_DIR};
use insider_threat_core::logic::{dataset, threat};

#[derive(Debug, Parser)]
#[command(name = "insider-threat", version, about = "Flag anomalous user behavior in activity logs")]
struct Cli {
    /// Directory containing logon.csv, device.csv, file.csv and email.csv
    #[arg(long, env = BATCH_DATA_DIR_ENV, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Print {"threats": [...]} instead of plain lines
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ThreatsOutput<'a> {
    threats: &'a [threat::Finding],
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let cli = Cli::parse();
    log::info!("Starting {} v{}...", APP_NAME, APP_VERSION);

    let bundle = dataset::load_bundle(&cli.data_dir);
    let findings = threat::detect(&bundle);

    print!("{}", render(&findings, cli.json)?);

    Ok(())
}

/// Format findings for stdout: one per line, or a `{"threats": [...]}` document
fn render(findings: &[threat::Finding], json: bool) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(&ThreatsOutput { threats: findings })?;
        out.push('\n');
        return Ok(out);
    }

    Ok(findings.iter().map(|finding| format!("{}\n", finding)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use threat::Finding;

    fn sample() -> Vec<Finding> {
        vec![
            Finding::new("User 'alice' has an unusually high number of logons."),
            Finding::new("File 'confidential.txt' accessed by user 'alice'."),
        ]
    }

    #[test]
    fn test_render_one_finding_per_line() {
        let out = render(&sample(), false).unwrap();
        assert_eq!(
            out,
            "User 'alice' has an unusually high number of logons.\n\
             File 'confidential.txt' accessed by user 'alice'.\n"
        );
    }

    #[test]
    fn test_render_json_shape() {
        let out = render(&sample(), true).unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "threats": [
                    "User 'alice' has an unusually high number of logons.",
                    "File 'confidential.txt' accessed by user 'alice'."
                ]
            })
        );
    }

    #[test]
    fn test_render_sentinel_finding() {
        let findings = vec![Finding::new(threat::NO_THREATS_FINDING)];
        assert_eq!(render(&findings, false).unwrap(), "No threats detected.\n");
    }

    #[test]
    fn test_data_dir_flag_and_env() {
        let cmd = Cli::command();
        let arg = cmd
            .get_arguments()
            .find(|a| a.get_id() == "data_dir")
            .unwrap();
        assert_eq!(arg.get_env().unwrap(), "INSIDER_DATA_DIR");

        let cli = Cli::try_parse_from(["insider-threat", "--data-dir", "/var/logs", "--json"]).unwrap();
        assert_eq!(cli.data_dir, PathBuf::from("/var/logs"));
        assert!(cli.json);
    }
}
