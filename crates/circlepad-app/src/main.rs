//! Circlepad entry point: replays a script and prints the final surface.

use circlepad_app::{ScriptResult, ShortcutRegistry, load_script, run_script};
use circlepad_core::{Surface, SurfaceConfig};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "circlepad",
    about = "Replay an input script against an annotation surface and print its final state",
    after_help = ShortcutRegistry::help_text()
)]
struct Cli {
    /// Surface config (JSON). Defaults apply when omitted.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Script file (JSON array of commands), or `-` to read stdin.
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,
}

fn run(cli: &Cli) -> ScriptResult<()> {
    let config = match &cli.config {
        Some(path) => SurfaceConfig::load(path)?,
        None => SurfaceConfig::default(),
    };
    let mut surface = Surface::new(&config);

    let commands = load_script(&cli.script)?;
    log::info!("Replaying {} commands", commands.len());
    run_script(&mut surface, &commands)?;

    println!("{}", serde_json::to_string_pretty(&surface.snapshot())?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
