//! Line-oriented play without a terminal UI.
//!
//! Each non-blank input line is one guess; each guess produces one JSON
//! object on its own output line.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::info;

use crate::games::globe::DistanceGame;

pub fn run<R: BufRead, W: Write>(game: &mut DistanceGame, input: R, mut output: W) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let result = game.submit_guess(&line);
        serde_json::to_writer(&mut output, &result)?;
        writeln!(output)?;
        output.flush()?;
    }
    info!(score = game.score(), won = !game.is_active(), "input exhausted");
    Ok(())
}
