use globeterm::headless;
use globeterm::{CountryCatalog, DistanceGame};
use serde_json::Value;

fn play(target: &str, input: &str) -> Vec<Value> {
    let catalog = CountryCatalog::load().unwrap();
    let mut game = DistanceGame::with_target(catalog, target).unwrap();
    let mut out = Vec::new();
    headless::run(&mut game, input.as_bytes(), &mut out).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

#[test]
fn one_result_per_guess() {
    let results = play("Germany", "France\n\nfrance\nAtlantis\nGermany\nSpain\n");
    let kinds: Vec<&str> = results.iter().map(|r| r["kind"].as_str().unwrap()).collect();
    assert_eq!(kinds, ["accepted", "duplicate", "invalid", "correct", "game_over"]);

    let km = results[0]["distance_km"].as_f64().unwrap();
    assert!((480.0..=500.0).contains(&km));
    assert_eq!(results[3]["score"], 2);
    assert_eq!(results[4]["score"], 2);
}

#[test]
fn far_guesses_turn_red() {
    let results = play("New Zealand", "Spain\n");
    let hint = &results[0]["color_hint"];
    assert!(hint["red"].as_i64().unwrap() > 255);
    assert!(hint["green"].as_i64().unwrap() < 0);
}
