//! Armiger - Entry Point
//!
//! Reads the player's starting stats, builds the player and an
//! auto-generated enemy, runs the timed stat progression with re-equip
//! passes, and resolves a single battle with printed narration.

use armiger::character::{Character, Role};
use armiger::core::config::ENEMY_STAT_RANGE;
use armiger::core::error::{ArmigerError, Result};

use clap::Parser;
use rand::Rng;
use std::io::{self, BufRead};
use tokio::runtime::Runtime;

/// Equip a knight and duel an auto-generated demon
#[derive(Parser, Debug)]
#[command(name = "armiger")]
#[command(about = "Equip a knight and duel an auto-generated demon")]
struct Args {
    /// Starting strength (prompted interactively when omitted)
    #[arg(long)]
    strength: Option<i32>,

    /// Starting agility (prompted interactively when omitted)
    #[arg(long)]
    agility: Option<i32>,

    /// Player character name
    #[arg(long, default_value = "Knight")]
    name: String,
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("armiger=info")
        .init();

    tracing::info!("Armiger starting...");

    let args = Args::parse();

    let strength = resolve_stat(args.strength, "strength")?;
    let agility = resolve_stat(args.agility, "agility")?;

    let mut rng = rand::thread_rng();
    let mut player = Character::new(args.name, Role::Player, strength, agility);
    let mut enemy = Character::new(
        "Demon",
        Role::Enemy,
        rng.gen_range(ENEMY_STAT_RANGE),
        rng.gen_range(ENEMY_STAT_RANGE),
    );
    tracing::info!(
        enemy_strength = enemy.strength(),
        enemy_agility = enemy.agility(),
        "rolled enemy stats"
    );

    // Wire the stat-threshold check into both fighters
    player.attach_equip_check(Character::can_equip);
    enemy.attach_equip_check(Character::can_equip);

    // Initial equip pass for the player
    player.equip_all_items();

    // Timed progression: five stat raises, each followed by a re-equip pass
    let rt = Runtime::new()?;
    rt.block_on(player.increase_stats());

    // The enemy gears up once, just before the fight
    enemy.equip_all_items();

    player.start_battle(&enemy);

    player.detach_equip_check();
    enemy.detach_equip_check();

    tracing::info!("Armiger finished");
    Ok(())
}

/// Use the CLI-provided stat if present, otherwise prompt for it.
/// Either way a negative value is fatal.
fn resolve_stat(flag: Option<i32>, label: &'static str) -> Result<i32> {
    let value = match flag {
        Some(v) => v,
        None => prompt_stat(label)?,
    };
    if value < 0 {
        return Err(ArmigerError::NegativeStat { stat: label, value });
    }
    Ok(value)
}

/// Prompt until a line parses as an integer. Parse failures re-prompt
/// indefinitely; end of input is an IO error.
fn prompt_stat(label: &str) -> Result<i32> {
    println!("Enter your {}:", label);
    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin closed before a stat was entered",
            )
            .into());
        }
        match line.trim().parse::<i32>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid input! Enter a whole number:"),
        }
    }
}
