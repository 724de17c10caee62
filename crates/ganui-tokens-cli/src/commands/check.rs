//! `ganui-tokens check`

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use console::style;
use ganui_tokens::{PresetError, PresetSheet};
use tracing::{info, warn};

use crate::cli::CheckArgs;

/// Result of loading one preset sheet.
pub struct Outcome {
    pub path: PathBuf,
    pub result: Result<PresetSheet, PresetError>,
}

impl Outcome {
    fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

pub fn execute(args: &CheckArgs, color: bool) -> Result<ExitCode> {
    let outcomes = check_files(&args.files);

    for outcome in &outcomes {
        println!("{}", summary_line(outcome, color));
        if let (true, Ok(sheet)) = (args.print, &outcome.result) {
            print!("{}", sheet.to_yaml()?);
        }
    }

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    if failed > 0 {
        warn!(failed, total = outcomes.len(), "preset check failed");
        Ok(ExitCode::FAILURE)
    } else {
        info!(total = outcomes.len(), "all preset sheets valid");
        Ok(ExitCode::SUCCESS)
    }
}

pub fn check_files(paths: &[PathBuf]) -> Vec<Outcome> {
    paths
        .iter()
        .map(|path| Outcome {
            path: path.clone(),
            result: PresetSheet::from_path(path),
        })
        .collect()
}

fn summary_line(outcome: &Outcome, color: bool) -> String {
    let path = outcome.path.display();
    match &outcome.result {
        Ok(sheet) => format!(
            "{} {} ({} presets)",
            style("ok").green().force_styling(color),
            path,
            sheet.len()
        ),
        Err(err) => format!(
            "{} {}: {}",
            style("error").red().bold().force_styling(color),
            path,
            err
        ),
    }
}
