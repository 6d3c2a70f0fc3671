#![cfg_attr(coverage, feature(coverage_attribute))]
mod completions;
mod inspect;
mod manifest;

use std::io;
use std::path::PathBuf;

use cf_core::logging;
use cf_core::prelude::*;
use cf_provider::{
    Provider,
    ProviderConfig,
};
use clap::{
    CommandFactory,
    Parser,
    Subcommand,
    crate_version,
};
use tracing::*;

#[derive(Parser)]
#[command(
    about = "command-line app for inspecting and rendering crdform manifest resources",
    version,
    propagate_version = true
)]
struct CfCommandRoot {
    #[command(subcommand)]
    subcommand: CfSubcommand,

    #[arg(short, long, global = true, default_value = DEFAULT_CLI_VERBOSITY)]
    verbosity: String,

    #[arg(short = 'c', long, global = true, long_help = "provider configuration file")]
    config_file: Option<String>,

    #[arg(long, global = true, long_help = "additional descriptor file or directory (can be repeated)")]
    catalog: Vec<PathBuf>,
}

#[derive(Subcommand)]
enum CfSubcommand {
    #[command(about = "generate shell completions for crdform")]
    Completions(completions::Args),

    #[command(about = "print the JSON schema for resource descriptor files")]
    DescriptorSchema,

    #[command(about = "render the manifest for a resource config", visible_alias = "r")]
    Render(manifest::RenderArgs),

    #[command(about = "list all resource types the provider serves", visible_aliases = &["ls", "list"])]
    Resources(inspect::ResourcesArgs),

    #[command(about = "print the schema for a resource type")]
    Schema(inspect::SchemaArgs),

    #[command(about = "check a resource config", visible_alias = "val")]
    Validate(manifest::ValidateArgs),

    #[command(about = "crdform version")]
    Version,
}

impl CfCommandRoot {
    // The provider sees exactly what it would see when started by a host: the config file (or
    // the defaults), plus anything passed on the command line.
    fn provider(&self) -> anyhow::Result<Provider> {
        let mut config = match &self.config_file {
            Some(filename) => ProviderConfig::load(filename)?,
            None => ProviderConfig::default(),
        };
        config.catalog_paths.extend(self.catalog.iter().cloned());
        debug!("provider config: {config:?}");
        Provider::from_config(&config)
    }
}

fn main() -> EmptyResult {
    let args = CfCommandRoot::parse();
    logging::setup_for_cli(&args.verbosity);

    let mut out = io::stdout().lock();
    match &args.subcommand {
        CfSubcommand::Completions(cargs) => completions::cmd(cargs, CfCommandRoot::command(), &mut out),
        CfSubcommand::DescriptorSchema => inspect::descriptor_schema_cmd(&mut out),
        CfSubcommand::Render(rargs) => manifest::render_cmd(rargs, &args.provider()?, &mut out),
        CfSubcommand::Resources(rargs) => inspect::resources_cmd(rargs, &args.provider()?, &mut out),
        CfSubcommand::Schema(sargs) => inspect::schema_cmd(sargs, &args.provider()?, &mut out),
        CfSubcommand::Validate(vargs) => manifest::validate_cmd(vargs, &args.provider()?, &mut out),
        CfSubcommand::Version => {
            println!("crdform {}", crate_version!());
            Ok(())
        },
    }
}

#[cfg(test)]
mod tests;
