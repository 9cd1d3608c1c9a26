use std::process::ExitCode;

use argbind_cli::arguments::apply_assignments;
use argbind_cli::cli_args::Args;
use argbind_cli::listing::render;
use argbind_core::error::Result;
use argbind_core::{config, file_handling};
use clap::Parser;
use log::debug;

fn execute() -> Result<()> {
    let args = Args::parse();

    let definitions_path = config::get_definitions_path(args.config_path.as_deref());
    debug!("Definitions path: `{definitions_path}`");

    let definition = file_handling::get_parameter_definitions(&definitions_path)?;
    let mut command = definition.register()?;

    apply_assignments(&mut command, &args.parameters)?;

    println!("{}:", command.name());
    for line in render(&command, args.show_hidden) {
        println!("  {line}");
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
