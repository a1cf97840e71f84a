use anyhow::Context;
use clap::Parser;
use demineur_core::{Coord, GameConfig, Preset};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod app;
mod command;
mod presets;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Terminal grid-reveal puzzle", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Preset to start with, defaults to the first one
    #[arg(short, long, conflicts_with = "width")]
    preset: Option<String>,

    /// Custom grid width
    #[arg(long, requires_all = ["height", "probability"])]
    width: Option<Coord>,

    /// Custom grid height
    #[arg(long, requires_all = ["width", "probability"])]
    height: Option<Coord>,

    /// Custom chance for each cell to hold a mine
    #[arg(long, requires_all = ["width", "height"])]
    probability: Option<f64>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with extra `[[preset]]` tables
    #[arg(long)]
    presets: Option<PathBuf>,

    /// Open cascades at once instead of layer by layer
    #[arg(long)]
    instant: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.verbose.tracing_level_filter())
        .with_writer(io::stderr)
        .init();
    log::debug!("seed: {:?}", args.seed);

    let mut presets = Preset::builtin();
    if let Some(path) = &args.presets {
        let extra = presets::load(path)?;
        log::info!("Loaded {} presets from {}", extra.len(), path.display());
        presets.extend(extra);
    }

    let (label, config) = match (args.width, args.height, args.probability) {
        (Some(width), Some(height), Some(probability)) => {
            let config = GameConfig::new((width, height), probability)
                .context("Invalid custom grid")?;
            (format!("Custom ({width}x{height})"), config)
        }
        _ => {
            let preset = match &args.preset {
                Some(name) => Preset::find(&presets, name)
                    .with_context(|| format!("No preset named {name:?}"))?,
                None => presets.first().context("No presets available")?,
            };
            let config = preset
                .config()
                .with_context(|| format!("Preset {:?}", preset.name))?;
            (preset.to_string(), config)
        }
    };

    let mut app = app::App::new(presets, label, config, args.seed, !args.instant);
    let mut stdout = io::stdout().lock();
    app.render(&mut stdout)?;
    writeln!(stdout, "Type `h` for help.")?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Could not read input")?;
        if line.trim().is_empty() {
            continue;
        }
        match line.parse() {
            Ok(command) => {
                if !app.handle(command, &mut stdout)? {
                    break;
                }
            }
            Err(err) => writeln!(stdout, "{err:#}")?,
        }
        stdout.flush()?;
    }

    log::debug!("Bye");
    Ok(())
}
