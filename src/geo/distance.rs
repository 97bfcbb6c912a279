use serde::{Deserialize, Serialize};

use crate::config::{COLOR_STEP_KM, EARTH_RADIUS_KM};

/// A point on the sphere in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn from_degrees(lon_deg: f64, lat_deg: f64) -> Self {
        Self {
            lon: lon_deg.to_radians(),
            lat: lat_deg.to_radians(),
        }
    }
}

/// Great-circle distance on a spherical earth of radius 6371 km.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = a.lat - b.lat;
    let d_lon = a.lon - b.lon;

    let h = (d_lat / 2.0).sin().powi(2) + a.lat.cos() * b.lat.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Red/green feedback for a guess: close guesses are green, far ones red.
///
/// Components are left unclamped; very distant guesses push `red` past 255
/// and `green` below zero. Use [`ColorHint::to_rgb`] for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorHint {
    pub red: i64,
    pub green: i64,
}

impl ColorHint {
    pub fn from_distance(distance_km: f64) -> Self {
        let t = distance_km / COLOR_STEP_KM;
        Self {
            red: round_half_up(t),
            green: round_half_up(255.0 - t),
        }
    }

    /// Clamped (r, g, b) for terminals.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        let clamp = |v: i64| v.clamp(0, 255) as u8;
        (clamp(self.red), clamp(self.green), 0)
    }
}

// Ties go towards +inf, so -0.5 rounds to 0 rather than -1.
fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}
