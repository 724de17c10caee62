//! `ganui-tokens parse`

use std::process::ExitCode;

use anyhow::Result;
use ganui_tokens::StyleTokenRegistry;
use tracing::debug;

use crate::cli::ParseArgs;

pub fn execute(args: &ParseArgs) -> Result<ExitCode> {
    let label = resolve(StyleTokenRegistry::builtin(), &args.family, &args.label)?;
    println!("{}", label);
    Ok(ExitCode::SUCCESS)
}

fn resolve(registry: &StyleTokenRegistry, family: &str, label: &str) -> Result<&'static str> {
    let canonical = registry.resolve(family, label)?;
    debug!(family, input = label, canonical, "resolved label");
    Ok(canonical)
}
