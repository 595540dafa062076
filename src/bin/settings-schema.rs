//! Prints the JSON schema of the ringclock settings file.
use std::{error::Error, fs, path::PathBuf};

use clap::Parser;
use ringclock::settings::Settings;
use schemars::schema_for;

#[derive(Parser)]
#[command(name = "settings-schema")]
#[command(about = "Print the JSON schema of the ringclock settings file")]
struct Cli {
    /// Write the schema to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let schema = schema_for!(Settings);
    let json = serde_json::to_string_pretty(&schema)?;

    match cli.output {
        Some(path) => {
            fs::write(&path, json)?;
            println!("Wrote settings schema to {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}
