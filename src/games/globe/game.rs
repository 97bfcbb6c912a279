use std::time::Duration;

use anyhow::{Context as _, Result};
use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::{GameConfig, MAX_INPUT_CHARS, ROTATE_STEP_DEG};
use crate::core::game::{Context, Game};
use crate::games::globe::renderer;
use crate::games::globe::state::{DistanceGame, GuessResult, Marker};
use crate::geo::{CountryCatalog, Orthographic};

/// Terminal front end for the distance game: a spinning globe plus a guess box.
pub struct GlobeGame {
    game: DistanceGame,
    rng: StdRng,
    view: Orthographic,
    spinning: bool,
    spin_rad_per_sec: f64,
    tick_rate: Duration,
    stars: Vec<(f64, f64)>,
    markers: Vec<Marker>,
    current_input: String,
    last_result: Option<GuessResult>,
}

impl GlobeGame {
    pub fn new(catalog: CountryCatalog, config: &GameConfig) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let game = match &config.target {
            Some(name) => DistanceGame::with_target(catalog, name).context("invalid --target")?,
            None => DistanceGame::new(catalog, &mut rng),
        };

        // unit square; the renderer stretches it over the canvas
        let stars = (0..config.star_count)
            .map(|_| (rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)))
            .collect();

        Ok(Self {
            game,
            rng,
            view: Orthographic::default(),
            spinning: true,
            spin_rad_per_sec: config.spin_deg_per_sec.to_radians(),
            tick_rate: config.tick_rate,
            stars,
            markers: Vec::new(),
            current_input: String::new(),
            last_result: None,
        })
    }

    pub fn distance_game(&self) -> &DistanceGame {
        &self.game
    }

    pub(crate) fn view(&self) -> &Orthographic {
        &self.view
    }

    pub(crate) fn stars(&self) -> &[(f64, f64)] {
        &self.stars
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    pub fn last_result(&self) -> Option<&GuessResult> {
        self.last_result.as_ref()
    }

    pub fn is_spinning(&self) -> bool {
        self.spinning
    }

    fn submit(&mut self, ctx: &Context<Marker>) {
        let result = self.game.submit_guess(&self.current_input);
        if let Some(marker) = result.marker() {
            ctx.send(marker);
        }
        // keep a mistyped name around so it can be fixed
        if !matches!(result, GuessResult::Invalid { .. }) {
            self.current_input.clear();
        }
        self.last_result = Some(result);
    }

    fn start_new_round(&mut self) {
        info!(score = self.game.score(), "starting new round");
        self.game.new_round(&mut self.rng);
        self.markers.clear();
        self.current_input.clear();
        self.last_result = None;
        self.spinning = true;
    }
}

impl Game for GlobeGame {
    type Message = Marker;

    fn tick_rate(&self) -> Option<Duration> {
        Some(self.tick_rate)
    }

    fn on_tick(&mut self, dt: u32, _ctx: &Context<Self::Message>) {
        if self.spinning {
            let step = self.spin_rad_per_sec * f64::from(dt) / 1000.0;
            self.view.rotate(step, 0.0);
        }
    }

    fn handle_input(&mut self, event: KeyEvent, ctx: &Context<Self::Message>) {
        let step = ROTATE_STEP_DEG.to_radians();
        match event.code {
            KeyCode::Char(c) => {
                if self.current_input.chars().count() < MAX_INPUT_CHARS {
                    self.current_input.push(c);
                }
            }
            KeyCode::Backspace => {
                self.current_input.pop();
            }
            KeyCode::Enter => {
                if self.game.is_active() {
                    self.submit(ctx);
                } else {
                    self.start_new_round();
                }
            }
            KeyCode::Left => self.view.rotate(-step, 0.0),
            KeyCode::Right => self.view.rotate(step, 0.0),
            KeyCode::Up => self.view.rotate(0.0, step),
            KeyCode::Down => self.view.rotate(0.0, -step),
            KeyCode::Tab => self.spinning = !self.spinning,
            _ => {}
        }
    }

    fn handle_message(&mut self, marker: Marker) {
        info!(name = %marker.name, lat = marker.point.lat_deg, lon = marker.point.lon_deg, "placing marker");
        self.view.look_at(marker.point.coordinate());
        self.spinning = false;
        self.markers.push(marker);
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        renderer::render(frame, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_line(game: &mut GlobeGame, text: &str, ctx: &Context<Marker>) {
        for c in text.chars() {
            game.handle_input(key(KeyCode::Char(c)), ctx);
        }
        game.handle_input(key(KeyCode::Enter), ctx);
    }

    fn globe(target: &str) -> GlobeGame {
        let config = GameConfig {
            seed: Some(1),
            target: Some(target.to_string()),
            ..GameConfig::default()
        };
        GlobeGame::new(CountryCatalog::load().unwrap(), &config).unwrap()
    }

    #[test]
    fn typed_guess_posts_a_marker() {
        let mut game = globe("Kenya");
        let (ctx, mut rx) = Context::channel();

        type_line(&mut game, "Uganda", &ctx);
        assert_eq!(game.current_input(), "");
        assert!(matches!(game.last_result(), Some(GuessResult::Accepted { .. })));

        let marker = rx.try_recv().unwrap();
        assert_eq!(marker.name, "Uganda");
        game.handle_message(marker);
        assert_eq!(game.markers().len(), 1);
        assert!(!game.is_spinning());
    }

    #[test]
    fn invalid_guess_keeps_the_input() {
        let mut game = globe("Kenya");
        let (ctx, mut rx) = Context::channel();

        type_line(&mut game, "Ugnda", &ctx);
        assert_eq!(game.current_input(), "Ugnda");
        assert!(rx.try_recv().is_err());

        game.handle_input(key(KeyCode::Backspace), &ctx);
        assert_eq!(game.current_input(), "Ugnd");
    }

    #[test]
    fn enter_after_a_win_starts_a_new_round() {
        let mut game = globe("Kenya");
        let (ctx, mut rx) = Context::channel();

        type_line(&mut game, "kenya", &ctx);
        game.handle_message(rx.try_recv().unwrap());
        assert!(!game.distance_game().is_active());

        game.handle_input(key(KeyCode::Enter), &ctx);
        assert!(game.distance_game().is_active());
        assert!(game.markers().is_empty());
        assert_eq!(game.distance_game().score(), 0);
    }

    #[test]
    fn input_stops_growing_at_the_cap() {
        let mut game = globe("Kenya");
        let (ctx, _rx) = Context::channel();
        for _ in 0..70_000 {
            game.handle_input(key(KeyCode::Char('a')), &ctx);
        }
        assert_eq!(game.current_input().chars().count(), MAX_INPUT_CHARS);
    }

    #[test]
    fn spin_follows_ticks_and_tab() {
        let mut game = globe("Kenya");
        let (ctx, _rx) = Context::channel();
        let before = game.view().center().lon;

        game.on_tick(1000, &ctx);
        assert!(game.view().center().lon > before);

        game.handle_input(key(KeyCode::Tab), &ctx);
        let paused = game.view().center().lon;
        game.on_tick(1000, &ctx);
        assert_eq!(game.view().center().lon, paused);
    }

    #[test]
    fn unknown_target_is_rejected() {
        let config = GameConfig { target: Some("Atlantis".into()), ..GameConfig::default() };
        assert!(GlobeGame::new(CountryCatalog::load().unwrap(), &config).is_err());
    }
}
