use clap::{Parser, Subcommand};
use event_photos::{config, output, scan};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "event-photos")]
#[command(about = "Build a photo manifest from a year/month/event folder tree")]
#[command(long_about = "\
Build a photo manifest from a year/month/event folder tree

Run with no arguments next to a photos/ directory. Every image inside a
correctly named event folder becomes one record in photos.json and in
photosData.js (const photos = [...];).

Folder structure:

  photos/
  ├── 2025/                              # Year
  │   └── 01/                            # Month
  │       ├── 06-01-2025 - Gala/         # Event: dd-mm-yyyy - Label
  │       │   ├── a.jpg                  # → date 2025-01-06, name \"Gala\"
  │       │   └── extra/b.png            # Nested photos keep the event
  │       └── bad-name/                  # Not dd-mm-yyyy: skipped entirely
  └── 2024/
      └── ...

Images: .jpg .jpeg .png .webp .gif (any case). Other files are ignored.

Settings can also be placed in event-photos.toml next to photos/.
Run 'event-photos gen-config' to print a documented default file.")]
#[command(version)]
struct Cli {
    /// Directory containing the photo tree; outputs are written here
    #[arg(long, default_value = ".", global = true)]
    base: PathBuf,

    /// Photo tree root, relative to the base directory
    #[arg(long, global = true)]
    source: Option<String>,

    /// File name of the JSON manifest
    #[arg(long, global = true)]
    json_output: Option<String>,

    /// File name of the script manifest
    #[arg(long, global = true)]
    js_output: Option<String>,

    /// List skipped event folders and stray photos on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Scan the photo tree and write both manifest files (default)
    Build,
    /// Scan the photo tree and report what would be written
    Check,
    /// Print a stock event-photos.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Build);

    if let Command::GenConfig = command {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    let config = resolve_config(&cli)?;
    let source = Path::new(&config.source_dir);
    let result = scan::scan(&cli.base, source)?;

    if cli.verbose || config.report_skipped {
        output::print_diagnostics(&result);
    }

    match command {
        Command::Build => {
            let written = output::write_outputs(&cli.base, &config, &result.photos)?;
            output::print_written(&written);
        }
        Command::Check => {
            output::print_scan_summary(&result, source);
        }
        Command::GenConfig => {}
    }

    Ok(())
}

/// Load the config file from the base directory and apply command-line
/// overrides on top.
fn resolve_config(cli: &Cli) -> Result<config::EventPhotosConfig, config::ConfigError> {
    let mut config = config::load_config(&cli.base)?;
    if let Some(source) = &cli.source {
        config.source_dir = source.clone();
    }
    if let Some(json_output) = &cli.json_output {
        config.json_output = json_output.clone();
    }
    if let Some(js_output) = &cli.js_output {
        config.js_output = js_output.clone();
    }
    config.validate()?;
    Ok(config)
}
