use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::geo::{haversine_km, ColorHint, Coordinate, Country, CountryCatalog, NotFound};

/// Latitude/longitude in degrees, for display and markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

impl GeoPoint {
    fn of(country: &Country) -> Self {
        Self { lat_deg: country.lat_deg(), lon_deg: country.lon_deg() }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::from_degrees(self.lon_deg, self.lat_deg)
    }
}

/// Where to pin a processed guess on the globe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub name: String,
    pub point: GeoPoint,
    /// `None` for repeat guesses and for the winning guess.
    pub hint: Option<ColorHint>,
    pub is_target: bool,
}

/// Outcome of one submitted guess.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GuessResult {
    /// Not a catalog country. Nothing changes.
    Invalid { guess: String },
    /// Already guessed this round. Nothing changes.
    Duplicate { name: String, point: GeoPoint },
    Accepted {
        name: String,
        distance_km: f64,
        color_hint: ColorHint,
        point: GeoPoint,
    },
    /// Guess was the target. The round is over.
    Correct { name: String, score: u32, point: GeoPoint },
    /// Guess arrived after the round was won.
    GameOver { score: u32 },
}

impl GuessResult {
    pub fn marker(&self) -> Option<Marker> {
        match self {
            GuessResult::Duplicate { name, point } => Some(Marker {
                name: name.clone(),
                point: *point,
                hint: None,
                is_target: false,
            }),
            GuessResult::Accepted { name, color_hint, point, .. } => Some(Marker {
                name: name.clone(),
                point: *point,
                hint: Some(*color_hint),
                is_target: false,
            }),
            GuessResult::Correct { name, point, .. } => Some(Marker {
                name: name.clone(),
                point: *point,
                hint: None,
                is_target: true,
            }),
            GuessResult::Invalid { .. } | GuessResult::GameOver { .. } => None,
        }
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuessResult::Invalid { guess } => write!(f, "'{}' is not a valid country", guess),
            GuessResult::Duplicate { name, .. } => write!(f, "Already guessed {}.", name),
            GuessResult::Accepted { name, distance_km, .. } => {
                write!(f, "{} is about {:.0} kilometers away.", name, distance_km)
            }
            GuessResult::Correct { name, score, .. } => {
                write!(f, "Nice job! It was {}. Your score was {}", name, score)
            }
            GuessResult::GameOver { score } => {
                write!(f, "Round is over with score {}. Start a new round to keep playing.", score)
            }
        }
    }
}

/// One accepted, non-winning guess.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuessRecord {
    pub name: String,
    pub distance_km: f64,
    pub color_hint: ColorHint,
}

/// State of a single round.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    pub target: Country,
    pub score: u32,
    /// Upper-cased names, for case-insensitive duplicate checks.
    #[serde(skip)]
    guessed: HashSet<String>,
    pub history: Vec<GuessRecord>,
    pub active: bool,
}

impl GameState {
    pub fn new(target: Country) -> Self {
        Self {
            target,
            score: 0,
            guessed: HashSet::new(),
            history: Vec::new(),
            active: true,
        }
    }

    fn has_guessed(&self, name: &str) -> bool {
        self.guessed.contains(&name.to_uppercase())
    }
}

/// Distance guessing engine: owns the catalog and the current round.
#[derive(Debug, Clone)]
pub struct DistanceGame {
    catalog: CountryCatalog,
    state: GameState,
}

impl DistanceGame {
    /// Start a round against a uniformly drawn target.
    pub fn new<R: Rng + ?Sized>(catalog: CountryCatalog, rng: &mut R) -> Self {
        let target = catalog.random_country_with(rng).clone();
        debug!(target = %target.name(), "new round");
        Self { state: GameState::new(target), catalog }
    }

    /// Start a round against a named target.
    pub fn with_target(catalog: CountryCatalog, target: &str) -> Result<Self, NotFound> {
        let target = catalog
            .get(target)
            .cloned()
            .ok_or_else(|| NotFound(target.to_string()))?;
        Ok(Self { state: GameState::new(target), catalog })
    }

    /// Throw away the current round and draw a new target.
    pub fn new_round<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let target = self.catalog.random_country_with(rng).clone();
        debug!(target = %target.name(), "new round");
        self.state = GameState::new(target);
    }

    pub fn submit_guess(&mut self, raw: &str) -> GuessResult {
        if !self.state.active {
            return GuessResult::GameOver { score: self.state.score };
        }

        let raw = raw.trim();
        let Some(guess) = self.catalog.get(raw) else {
            debug!(guess = raw, "invalid guess");
            return GuessResult::Invalid { guess: raw.to_string() };
        };
        let name = guess.name().to_string();
        let point = GeoPoint::of(guess);

        if self.state.has_guessed(&name) {
            debug!(name = %name, "duplicate guess");
            return GuessResult::Duplicate { name, point };
        }

        let distance_km = haversine_km(guess.coordinate(), self.state.target.coordinate());

        if distance_km == 0.0 {
            self.state.score += 1;
            self.state.active = false;
            info!(name = %name, score = self.state.score, "target found");
            return GuessResult::Correct { name, score: self.state.score, point };
        }

        let color_hint = ColorHint::from_distance(distance_km);
        self.state.guessed.insert(name.to_uppercase());
        self.state.history.push(GuessRecord {
            name: name.clone(),
            distance_km,
            color_hint,
        });
        self.state.score += 1;
        info!(name = %name, distance_km, score = self.state.score, "guess accepted");

        GuessResult::Accepted { name, distance_km, color_hint, point }
    }

    pub fn catalog(&self) -> &CountryCatalog {
        &self.catalog
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn target(&self) -> &Country {
        &self.state.target
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    pub fn history(&self) -> &[GuessRecord] {
        &self.state.history
    }

    pub fn guessed_names(&self) -> impl Iterator<Item = &str> {
        self.state.history.iter().map(|r| r.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game(target: &str) -> DistanceGame {
        DistanceGame::with_target(CountryCatalog::load().unwrap(), target).unwrap()
    }

    #[test]
    fn guessing_the_target_wins() {
        let mut g = game("Peru");
        let result = g.submit_guess("peru");
        assert!(matches!(result, GuessResult::Correct { score: 1, ref name, .. } if name == "Peru"));
        assert!(!g.is_active());
        assert_eq!(g.guessed_names().count(), 0);
    }

    #[test]
    fn unknown_names_change_nothing() {
        let mut g = game("Peru");
        assert_eq!(g.submit_guess("Narnia"), GuessResult::Invalid { guess: "Narnia".into() });
        assert_eq!(g.score(), 0);
        assert_eq!(g.guessed_names().count(), 0);
        assert!(g.is_active());
    }

    #[test]
    fn accepted_guess_is_recorded_and_scored() {
        let mut g = game("Germany");
        let GuessResult::Accepted { name, distance_km, color_hint, .. } = g.submit_guess("France") else {
            panic!("expected accepted");
        };
        assert_eq!(name, "France");
        assert!((480.0..=500.0).contains(&distance_km));
        assert_eq!(color_hint, ColorHint::from_distance(distance_km));
        assert_eq!(g.score(), 1);
        assert_eq!(g.guessed_names().collect::<Vec<_>>(), vec!["France"]);
    }

    #[test]
    fn repeat_guess_is_a_duplicate() {
        let mut g = game("Germany");
        assert!(matches!(g.submit_guess("France"), GuessResult::Accepted { .. }));
        assert!(matches!(g.submit_guess("FRANCE"), GuessResult::Duplicate { ref name, .. } if name == "France"));
        assert_eq!(g.score(), 1);
        assert_eq!(g.history().len(), 1);
    }

    #[test]
    fn score_counts_every_unique_guess_including_the_win() {
        let mut g = game("Chile");
        g.submit_guess("Peru");
        g.submit_guess("Bolivia");
        g.submit_guess("peru");
        g.submit_guess("Mordor");
        assert!(matches!(g.submit_guess("Chile"), GuessResult::Correct { score: 3, .. }));
    }

    #[test]
    fn guesses_after_the_win_are_refused() {
        let mut g = game("Chile");
        g.submit_guess("Chile");
        assert_eq!(g.submit_guess("Peru"), GuessResult::GameOver { score: 1 });
        assert_eq!(g.submit_guess("Chile"), GuessResult::GameOver { score: 1 });
        assert_eq!(g.score(), 1);
    }

    #[test]
    fn input_is_trimmed_but_not_folded() {
        let mut g = game("Chile");
        assert!(matches!(g.submit_guess("  Peru \n"), GuessResult::Accepted { .. }));
        assert!(matches!(g.submit_guess("Sao Tome and Principe"), GuessResult::Invalid { .. }));
        assert!(matches!(g.submit_guess("São Tomé and Príncipe"), GuessResult::Accepted { .. }));
    }

    #[test]
    fn new_round_resets_state() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut g = DistanceGame::new(CountryCatalog::load().unwrap(), &mut rng);
        let target = g.target().name().to_string();
        g.submit_guess(&target);
        assert!(!g.is_active());

        g.new_round(&mut rng);
        assert!(g.is_active());
        assert_eq!(g.score(), 0);
        assert!(g.history().is_empty());
    }

    #[test]
    fn markers_follow_processed_guesses() {
        let mut g = game("Chile");
        assert_eq!(g.submit_guess("Atlantis").marker(), None);

        let accepted = g.submit_guess("Peru").marker().unwrap();
        assert_eq!(accepted.name, "Peru");
        assert!(accepted.hint.is_some());
        assert_eq!(accepted.point, GeoPoint { lat_deg: -9.189967, lon_deg: -75.015152 });

        assert!(g.submit_guess("peru").marker().unwrap().hint.is_none());

        let win = g.submit_guess("Chile").marker().unwrap();
        assert!(win.is_target);
        assert_eq!(g.submit_guess("Chile").marker(), None);
    }

    #[test]
    fn results_serialize_with_a_kind_tag() {
        let mut g = game("Germany");
        let json = serde_json::to_value(g.submit_guess("France")).unwrap();
        assert_eq!(json["kind"], "accepted");
        assert_eq!(json["name"], "France");
        assert!(json["color_hint"]["red"].is_i64());

        let json = serde_json::to_value(g.submit_guess("nope")).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "invalid", "guess": "nope" }));
    }
}
