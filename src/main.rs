//! tikzit-styles command line
//!
//! Lists the palette for a style file or prints its canonical rewrite.

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use env_logger::Env;

use tikzit_styles::{PaletteSettings, StylePalette, StyleSheet};

#[derive(Parser)]
#[command(name = "tikzit-styles")]
#[command(about = "Inspect and tidy TikZiT style files", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (defaults to the user config directory)
    #[arg(long, global = true, value_hint = clap::ValueHint::FilePath)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the node styles the palette would offer
    List {
        /// Style file; the remembered one is used when omitted
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: Option<PathBuf>,

        /// Remember FILE as the palette's style file
        #[arg(long)]
        remember: bool,
    },

    /// Print the canonical form of a style file
    Fmt {
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let env = Env::default().default_filter_or("warn");
    env_logger::Builder::from_env(env).init();

    match cli.command {
        Commands::List { file, remember } => {
            let settings_path = cli.settings.or_else(PaletteSettings::default_path);
            let settings = settings_path
                .as_deref()
                .map(|path| PaletteSettings::load_from(path))
                .unwrap_or_default();
            let mut palette = StylePalette::new(settings);

            match file {
                Some(file) => {
                    palette
                        .open_style_file(&file)
                        .with_context(|| format!("failed to open {}", file.display()))?;
                }
                None => {
                    palette
                        .refresh_style_file()
                        .context("no style file given and none remembered")?;
                }
            }

            println!("{}", palette.source_label());
            for entry in palette.entries() {
                match &entry.category {
                    Some(category) => println!("  {} [{}]", entry.name, category),
                    None => println!("  {}", entry.name),
                }
            }

            if remember {
                let Some(path) = settings_path else {
                    bail!("no settings location available; pass --settings");
                };
                palette
                    .settings()
                    .save_to(&path)
                    .with_context(|| format!("failed to save settings to {}", path.display()))?;
            }
        }
        Commands::Fmt { file } => {
            let sheet = StyleSheet::load(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            print!("{}", sheet.to_tikzstyles());
        }
    }

    Ok(())
}
