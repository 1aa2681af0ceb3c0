use std::io::{self, Write};
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

use colored::Colorize;

use ordo_core::RotationDirection;
use ordo_ritual::{Ritual, RitualState};

/// Render cadence for the typewriter reveal.
const TICK: Duration = Duration::from_millis(25);

pub fn run(
    rules: Option<&Path>,
    seed: Option<u64>,
    voice: &str,
    mute: bool,
    quick: bool,
) -> Result<(), String> {
    let catalog = super::load_catalog(rules)?;
    let speech = super::build_speech(mute);
    let config = super::build_config(seed, voice, quick);

    let mut ritual = Ritual::new(catalog, speech, config);
    ritual.start(Instant::now());

    println!();
    println!("  {} the signs...", "Reading".bold().magenta());

    let mut title_shown = false;
    let mut printed = 0usize;
    let mut description: Vec<char> = Vec::new();
    let mut direction = String::new();

    loop {
        ritual.tick(Instant::now());
        let view = ritual.view();

        if view.state == RitualState::Decree {
            if let Some(decree) = view.decree {
                if !title_shown {
                    description = decree.rule.description.chars().collect();
                    direction = match decree.direction {
                        RotationDirection::Clockwise => {
                            format!("{} \u{21bb}", decree.direction)
                        }
                        RotationDirection::CounterClockwise => {
                            format!("{} \u{21ba}", decree.direction)
                        }
                    };
                    println!();
                    println!("  {}", decree.rule.title.bold());
                    print!("  \"");
                    title_shown = true;
                }
            }

            let target = view.revealed_chars.min(description.len());
            while printed < target {
                print!("{}", description[printed]);
                printed += 1;
            }
            io::stdout().flush().map_err(|e| e.to_string())?;

            if printed >= description.len() && !view.is_speaking {
                break;
            }
        }

        thread::sleep(TICK);
    }

    println!("\"");
    println!();
    println!("  Rotation: {}", direction.bold().green());

    Ok(())
}
