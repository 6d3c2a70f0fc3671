use std::io::Write;
use std::path::PathBuf;

use cf_core::prelude::*;
use clap_complete::{
    Shell,
    generate,
    generate_to,
};

const BIN_NAME: &str = "crdform";

#[derive(clap::Args)]
pub struct Args {
    #[arg(long_help = "shell to generate the completion script for")]
    pub shell: Shell,

    #[arg(
        long,
        long_help = "write the script into this directory (named the way the shell expects) instead of printing it"
    )]
    pub dir: Option<PathBuf>,
}

pub fn cmd(args: &Args, mut cmd: clap::Command, out: &mut impl Write) -> EmptyResult {
    match &args.dir {
        None => generate(args.shell, &mut cmd, BIN_NAME, out),
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let path = generate_to(args.shell, &mut cmd, BIN_NAME, dir)?;
            writeln!(out, "{} completions written to {}", args.shell, path.display())?;
        },
    }
    Ok(())
}
