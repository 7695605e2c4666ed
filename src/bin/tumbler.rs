//! Randomizer CLI
//!
//! Runs draws and group allocations against a project JSON file:
//! - `spin` — one or more full rounds across every slot
//! - `draw` — a single slot by id
//! - `group` — allocate members into balanced groups
//! - `check` — validate the project configuration

use clap::Parser;
use clap::Subcommand;
use colored::Colorize;
use tumbler::*;

#[derive(Parser)]
#[command(name = "tumbler", about = "randomized draws and group allocation")]
struct Args {
    /// Path to the project JSON file.
    project: std::path::PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Draw every slot once per round.
    Spin {
        /// Number of rounds to run against one session.
        #[arg(default_value_t = 1)]
        rounds: usize,
    },
    /// Draw a single slot by id.
    Draw { slot: SlotId },
    /// Allocate members into groups.
    Group,
    /// Validate the project configuration.
    Check,
}

fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let file = std::fs::read_to_string(&args.project)?;
    let project = serde_json::from_str::<Project>(&file)?;
    match args.command {
        Command::Spin { rounds } => spin(&project, rounds),
        Command::Draw { slot } => draw(&project, slot),
        Command::Group => group(&project),
        Command::Check => check(&project),
    }
}

fn spin(project: &Project, rounds: usize) -> anyhow::Result<()> {
    let ref mut engine = project.engine()?;
    let slots = engine.slots().to_vec();
    for round in 1..=rounds {
        log::info!("round {}", round);
        for (slot, outcome) in slots.iter().zip(engine.spin()) {
            show(slot, &outcome);
        }
    }
    println!("remaining: {}", engine.remaining());
    Ok(())
}

fn draw(project: &Project, slot: SlotId) -> anyhow::Result<()> {
    let ref mut engine = project.engine()?;
    let Some(target) = engine.slots().iter().find(|s| s.id() == slot).cloned() else {
        anyhow::bail!("no slot with id {}", slot);
    };
    show(&target, &engine.draw(slot));
    Ok(())
}

fn group(project: &Project) -> anyhow::Result<()> {
    for group in project.allocate()? {
        println!("{}", group);
    }
    Ok(())
}

fn check(project: &Project) -> anyhow::Result<()> {
    project.validate()?;
    println!("{}", "configuration is valid".green());
    Ok(())
}

fn show(slot: &Slot, outcome: &Outcome) {
    match outcome.hit() {
        Some(value) => println!("{:>16}  {}", slot.label(), value.bold()),
        None => println!("{:>16}  {}", slot.label(), EXHAUSTED.dimmed()),
    }
}

/// Terminal-only logging for the CLI.
fn log() {
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        simplelog::ConfigBuilder::new()
            .set_location_level(log::LevelFilter::Off)
            .set_target_level(log::LevelFilter::Off)
            .set_thread_level(log::LevelFilter::Off)
            .build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
