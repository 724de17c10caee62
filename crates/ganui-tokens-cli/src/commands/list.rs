//! `ganui-tokens list`

use std::fmt::Write as _;
use std::process::ExitCode;

use anyhow::{Context, Result};
use console::style;
use ganui_tokens::{StyleTokenRegistry, TokenError, TokenFamily};

use crate::cli::{ListArgs, OutputFormat};

pub fn execute(args: &ListArgs, color: bool) -> Result<ExitCode> {
    let registry = StyleTokenRegistry::builtin();
    let families = select(registry, args.family.as_deref())?;
    print!("{}", render(&families, args.output, color)?);
    Ok(ExitCode::SUCCESS)
}

fn select<'a>(
    registry: &'a StyleTokenRegistry,
    name: Option<&str>,
) -> Result<Vec<&'a TokenFamily>> {
    match name {
        None => Ok(registry.families().iter().collect()),
        Some(name) => {
            let family = registry.family(name).ok_or_else(|| TokenError::UnknownFamily {
                family: name.to_string(),
                available: registry.names().collect(),
            })?;
            Ok(vec![family])
        }
    }
}

fn render(families: &[&TokenFamily], format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(families)
                .context("failed to serialize families as JSON")?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Yaml => {
            serde_yaml::to_string(families).context("failed to serialize families as YAML")
        }
        OutputFormat::Text => Ok(render_text(families, color)),
    }
}

fn render_text(families: &[&TokenFamily], color: bool) -> String {
    let mut out = String::new();
    for family in families {
        let _ = writeln!(
            out,
            "{} {}",
            style(family.name()).bold().force_styling(color),
            style(format!("({})", family.concern())).dim().force_styling(color),
        );
        let labels: Vec<String> = family
            .labels()
            .iter()
            .map(|label| style(label).cyan().force_styling(color).to_string())
            .collect();
        let _ = writeln!(out, "  {}", labels.join("  "));
    }
    out
}
