use std::fs;
use std::io::Write;
use std::path::{
    Path,
    PathBuf,
};

use anyhow::{
    Context,
    bail,
};
use cf_core::prelude::*;
use cf_provider::{
    Diagnostic,
    Provider,
    ProviderError,
    ProviderService,
    has_errors,
};
use serde_json::Value;
use tracing::*;

#[derive(clap::Args)]
pub struct RenderArgs {
    #[arg(long_help = "resource type of the config")]
    pub resource_type: String,

    #[arg(long_help = "resource config file (YAML or JSON), using the attribute names from the schema")]
    pub config_path: PathBuf,

    #[arg(long, long_help = "print the full resulting state instead of just the manifest")]
    pub state: bool,
}

#[derive(clap::Args)]
pub struct ValidateArgs {
    #[arg(long_help = "resource type of the config")]
    pub resource_type: String,

    #[arg(long_help = "resource config file (YAML or JSON), using the attribute names from the schema")]
    pub config_path: PathBuf,
}

pub(super) fn read_config(path: &Path) -> anyhow::Result<Value> {
    let contents = fs::read_to_string(path).with_context(|| format!("reading config file {}", path.display()))?;
    serde_yaml::from_str(&contents).with_context(|| format!("parsing config file {}", path.display()))
}

fn print_diagnostics(diags: &[Diagnostic], out: &mut impl Write) -> EmptyResult {
    for d in diags {
        writeln!(out, "{d}")?;
    }
    Ok(())
}

fn report(err: ProviderError, out: &mut impl Write) -> EmptyResult {
    let diags = err.into_diagnostics();
    print_diagnostics(&diags, out)?;
    bail!("{} error(s) found", diags.iter().filter(|d| d.is_error()).count());
}

pub fn validate_cmd(args: &ValidateArgs, provider: &Provider, out: &mut impl Write) -> EmptyResult {
    let config = read_config(&args.config_path)?;
    let diags = match provider.validate(&args.resource_type, &config) {
        Ok(diags) => diags,
        Err(err) => return report(err, out),
    };

    print_diagnostics(&diags, out)?;
    if has_errors(&diags) {
        bail!("{} is not a valid {} config", args.config_path.display(), args.resource_type);
    }
    writeln!(out, "{} is a valid {} config", args.config_path.display(), args.resource_type)?;
    Ok(())
}

pub fn render_cmd(args: &RenderArgs, provider: &Provider, out: &mut impl Write) -> EmptyResult {
    let config = read_config(&args.config_path)?;
    if !args.state {
        // previewing the manifest doesn't need an id
        let res = provider.resource(&args.resource_type).and_then(|r| r.render(&config));
        return match res {
            Ok(yaml) => Ok(write!(out, "{yaml}")?),
            Err(err) => report(err, out),
        };
    }

    let state = match provider.create(&args.resource_type, &config) {
        Ok(state) => state,
        Err(err) => return report(err, out),
    };
    info!("rendered {} with id {}", args.resource_type, state[ID_ATTR]);
    writeln!(out, "{}", serde_json::to_string_pretty(&state)?)?;
    Ok(())
}
