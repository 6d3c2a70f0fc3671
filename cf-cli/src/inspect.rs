use std::io::Write;

use cf_core::prelude::*;
use cf_provider::{
    Provider,
    ProviderService,
};
use cf_schema::ResourceDescriptor;
use clap::{
    ValueEnum,
    value_parser,
};
use serde::Serialize;

#[derive(Clone, ValueEnum)]
pub enum PrintFormat {
    Json,
    List,
    Table,
    Yaml,
}

#[derive(Clone, ValueEnum)]
pub enum SchemaFormat {
    Json,
    Yaml,
}

#[derive(clap::Args)]
pub struct ResourcesArgs {
    #[arg(
        short,
        long,
        long_help = "format to display the resource types",
        default_value = "list",
        value_parser = value_parser!(PrintFormat),
    )]
    pub format: PrintFormat,
}

#[derive(clap::Args)]
pub struct SchemaArgs {
    #[arg(long_help = "resource type to print the schema for, e.g. k8s_cert_manager_io_certificate_v1")]
    pub resource_type: String,

    #[arg(
        short,
        long,
        long_help = "output format for the schema",
        default_value = "yaml",
        value_parser = value_parser!(SchemaFormat),
    )]
    pub format: SchemaFormat,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ResourceSummary {
    type_name: String,
    api_version: String,
    kind: String,
    namespaced: bool,
}

fn summaries(provider: &Provider) -> anyhow::Result<Vec<ResourceSummary>> {
    let mut out = vec![];
    for type_name in provider.resource_types() {
        let schema = provider.schema(type_name)?;
        out.push(ResourceSummary {
            type_name: schema.type_name.clone(),
            api_version: schema.api_version.clone(),
            kind: schema.kind.clone(),
            namespaced: schema.namespaced,
        });
    }
    Ok(out)
}

pub fn resources_cmd(args: &ResourcesArgs, provider: &Provider, out: &mut impl Write) -> EmptyResult {
    let resources = summaries(provider)?;
    match args.format {
        PrintFormat::Json => writeln!(out, "{}", serde_json::to_string(&resources)?)?,
        PrintFormat::List => {
            for r in &resources {
                writeln!(out, "{} ({}/{})", r.type_name, r.api_version, r.kind)?;
            }
        },
        PrintFormat::Table => {
            writeln!(out, "| resource type | apiVersion | kind | namespaced |")?;
            writeln!(out, "|---|---|---|---|")?;
            for r in &resources {
                writeln!(out, "| {} | {} | {} | {} |", r.type_name, r.api_version, r.kind, r.namespaced)?;
            }
        },
        PrintFormat::Yaml => write!(out, "{}", serde_yaml::to_string(&resources)?)?,
    }
    Ok(())
}

pub fn schema_cmd(args: &SchemaArgs, provider: &Provider, out: &mut impl Write) -> EmptyResult {
    let schema = provider.schema(&args.resource_type)?;
    match args.format {
        SchemaFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(schema.as_ref())?)?,
        SchemaFormat::Yaml => write!(out, "{}", serde_yaml::to_string(schema.as_ref())?)?,
    }
    Ok(())
}

pub fn descriptor_schema_cmd(out: &mut impl Write) -> EmptyResult {
    let schema = schemars::schema_for!(ResourceDescriptor);
    writeln!(out, "{}", serde_json::to_string_pretty(&schema)?)?;
    Ok(())
}
