//! Sample proxy service configured through appconfig.
//!
//! Declares its parameters, resolves them from defaults, `polyverse.json`,
//! the environment and the command line, then prints what it found.

mod catalog;
mod error;
mod logging;

use appconfig::Catalog;
use colored::Colorize;

use error::Result;

const DESCRIPTION: &str = "This app is a sample implementation of the appconfig crate.";

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logging::init()?;

    let catalog = catalog::build();
    let config = catalog.resolve()?;

    if config.usage_requested().is_some() {
        config.print_usage(&usage_header(&program_name()))?;
        return Ok(());
    }

    if config.get_bool("debug") {
        print_catalog(&catalog)?;
    }

    println!("{}", "Result:".bold());
    for spec in &catalog {
        let Some(value) = config.get(spec.name()) else {
            continue;
        };
        println!(
            "param = {}, value = {}, type = {}",
            spec.name(),
            value,
            value.type_name()
        );
    }
    Ok(())
}

fn program_name() -> String {
    std::env::args()
        .next()
        .and_then(|arg0| {
            std::path::Path::new(&arg0)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| env!("CARGO_BIN_NAME").to_string())
}

fn usage_header(program: &str) -> String {
    format!("{DESCRIPTION}\n\nUsage: {program} [options]\n\noptions:\n")
}

fn print_catalog(catalog: &Catalog) -> Result<()> {
    println!("The following parameters have been defined:");
    println!("{}", serde_json::to_string_pretty(catalog)?);
    Ok(())
}
