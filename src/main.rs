//! Terminal FreeCell.
//!
//! Type zone keys and press Enter. Two keys make a move: the first picks the
//! source, the second the destination.
//!
//! ```text
//! tableau      a s d f j k l ;
//! free cells   q w e r
//! foundations  u i o p
//! ```
//!
//! `?` lists legal moves, `!` abandons a half-entered move, `quit` exits.
//! Set `FOURCELL_SEED` to replay a deal and `RUST_LOG=debug` to see why moves
//! are rejected.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use fourcell::{GameConfig, GameState, KeyBindings, MoveDecoder, MoveIntent, ZoneId, ZoneKind, ZoneLayout};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::from_env().context("reading FOURCELL_* configuration")?;
    let mut game = GameState::new_game(&config);
    let mut decoder = MoveDecoder::new(KeyBindings::standard(game.layout()));

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut echo = String::new();

    loop {
        draw(&mut stdout, &game, &decoder, &echo)?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();

        match line {
            "quit" | "exit" => break,
            "?" => {
                print_hints(&mut stdout, &game, decoder.bindings())?;
                continue;
            }
            "!" => {
                decoder.reset();
                echo.clear();
                continue;
            }
            _ => {}
        }

        for key in line.chars() {
            if let Some(intent) = decoder.feed(key) {
                echo = label(game.layout(), decoder.bindings(), intent);
                // Rejections are silent on screen; the reason goes to the log.
                let _ = game.apply(intent);
            }
        }
    }

    writeln!(stdout, "seed {} | {} moves", game.seed(), game.moves_made())?;
    Ok(())
}

fn draw(out: &mut impl Write, game: &GameState, decoder: &MoveDecoder, echo: &str) -> Result<()> {
    writeln!(out)?;
    write!(out, "{}", game.view())?;

    let pending: String = decoder
        .pending()
        .iter()
        .filter_map(|&zone| decoder.bindings().key_for(zone))
        .collect();
    writeln!(out, "[{}] last: {}", pending, echo)?;
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

fn print_hints(out: &mut impl Write, game: &GameState, keys: &KeyBindings) -> Result<()> {
    let moves = game.legal_moves();
    if moves.is_empty() {
        writeln!(out, "no legal moves")?;
        return Ok(());
    }
    let hints: Vec<String> = moves.into_iter().map(|m| label(game.layout(), keys, m)).collect();
    writeln!(out, "{}", hints.join(" "))?;
    Ok(())
}

fn label(layout: &ZoneLayout, keys: &KeyBindings, intent: MoveIntent) -> String {
    format!("{}{}", zone_label(layout, keys, intent.from), zone_label(layout, keys, intent.to))
}

/// The zone's key, or `[t9]`-style kind and position for zones without one.
fn zone_label(layout: &ZoneLayout, keys: &KeyBindings, zone: ZoneId) -> String {
    if let Some(key) = keys.key_for(zone) {
        return key.to_string();
    }
    match layout.position_of(zone) {
        Some((ZoneKind::Tableau, i)) => format!("[t{}]", i),
        Some((ZoneKind::FreeCell, i)) => format!("[c{}]", i),
        Some((ZoneKind::Foundation, i)) => format!("[f{}]", i),
        None => "?".to_string(),
    }
}
