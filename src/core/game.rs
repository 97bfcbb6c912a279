/// Core game interface for the globeterm framework
use std::time::Duration;

use crossterm::event::KeyEvent;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Handle a game uses to post messages back to the engine loop
pub struct Context<M> {
    tx: UnboundedSender<M>,
}

impl<M> Context<M> {
    /// Create a context together with the receiving end of its outbox
    pub fn channel() -> (Self, UnboundedReceiver<M>) {
        let (tx, rx) = unbounded_channel();
        (Self { tx }, rx)
    }

    /// Queue a message; it comes back through `Game::handle_message` on the next loop turn
    pub fn send(&self, msg: M) {
        // receiver lives as long as the engine, so a failed send only happens during shutdown
        let _ = self.tx.send(msg);
    }
}

/// Main game trait that all games must implement
pub trait Game {
    /// Messages the game posts to itself through the engine, e.g. globe markers
    type Message: Send + 'static;

    /// `None` disables `on_tick`
    fn tick_rate(&self) -> Option<Duration>;

    /// Called once per tick with the elapsed milliseconds
    fn on_tick(&mut self, dt: u32, ctx: &Context<Self::Message>);

    fn handle_input(&mut self, event: KeyEvent, ctx: &Context<Self::Message>);

    fn handle_message(&mut self, msg: Self::Message);

    /// Draw the current state into the Ratatui Frame
    fn render(&self, frame: &mut ratatui::Frame);
}
