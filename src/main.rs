use std::path::PathBuf;
use std::process::ExitCode;

use adventure::engine::{ConsolePort, Session};
use adventure::world::{self, World};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "adventure", version, about = "Explore a text adventure world")]
struct Args {
    /// World file to play
    #[arg(default_value = "worlds/crowther.toml")]
    world: PathBuf,

    /// Log filter, e.g. "adventure=debug" (defaults to RUST_LOG, then adventure=warn)
    #[arg(long)]
    log: Option<String>,

    /// Text shown when waiting for a command
    #[arg(long, default_value = "> ")]
    prompt: String,

    /// Load and validate the world, print a summary, and exit
    #[arg(long)]
    check: bool,
}

fn init_logging(filter: Option<&str>) {
    let filter = match filter {
        Some(f) => EnvFilter::new(f),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("adventure=warn")),
    };
    // game text owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_summary(world: &World) {
    let name = if world.name().is_empty() { "(unnamed)" } else { world.name() };
    println!("World: {}", name);
    println!("Start: {}", world.start_room());
    println!(
        "{} rooms, {} objects, {} synonyms",
        world.rooms().count(),
        world.objects().count(),
        world.vocabulary().len()
    );
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.log.as_deref());

    let world = match world::load_world_from_file(&args.world) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Failed to load world file '{}': {e}", args.world.display());
            return ExitCode::FAILURE;
        }
    };

    if args.check {
        print_summary(&world);
        return ExitCode::SUCCESS;
    }

    info!(world = world.name(), "starting session");
    let mut session = Session::new(world);
    let mut port = ConsolePort::stdio();

    match session.run(&mut port, &args.prompt) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "session aborted");
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}
