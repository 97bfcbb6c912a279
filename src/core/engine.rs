use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::debug;

use crate::core::game::{Context, Game};

/// Idle wake-up for games without a tick, so input keeps getting polled
const IDLE_POLL: Duration = Duration::from_millis(16);

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Run until Esc, then hand the game back so the caller can report on it.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<G> {
        let mut last_tick = Instant::now();
        let (ctx, mut outbox_rx) = Context::<G::Message>::channel();

        loop {
            terminal.draw(|f| self.game.render(f))?;

            // INPUT (Non-blocking)
            if event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if key.code == KeyCode::Esc {
                            debug!("escape pressed, leaving engine loop");
                            break;
                        }
                        self.game.handle_input(key, &ctx);
                    }
                }
            }

            let tick_rate = self.game.tick_rate();
            let tick_fused = tokio::time::sleep(tick_rate.unwrap_or(IDLE_POLL));

            tokio::select! {
                // Messages posted by the game during input handling
                Some(msg) = outbox_rx.recv() => {
                    self.game.handle_message(msg);
                }

                // Game heartbeat
                _ = tick_fused => {
                    if tick_rate.is_some() {
                        let dt = last_tick.elapsed().as_millis() as u32;
                        last_tick = Instant::now();
                        self.game.on_tick(dt, &ctx);
                    }
                }
            }
        }

        Ok(self.game)
    }
}
