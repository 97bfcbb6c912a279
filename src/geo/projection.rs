//! Orthographic view of the globe.
//!
//! Maps a coordinate onto the unit disc as seen from far above
//! `(center_lon, center_lat)`. Points on the far hemisphere are culled,
//! which is the terminal stand-in for a back-face test.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::distance::Coordinate;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orthographic {
    center_lon: f64,
    center_lat: f64,
}

impl Default for Orthographic {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Orthographic {
    /// Centre in radians.
    pub fn new(center_lon: f64, center_lat: f64) -> Self {
        let mut view = Self { center_lon: 0.0, center_lat: 0.0 };
        view.look_at(Coordinate { lon: center_lon, lat: center_lat });
        view
    }

    pub fn center(&self) -> Coordinate {
        Coordinate { lon: self.center_lon, lat: self.center_lat }
    }

    pub fn look_at(&mut self, c: Coordinate) {
        self.center_lon = wrap_lon(c.lon);
        self.center_lat = c.lat.clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    /// Spin the view. Longitude wraps, latitude stops at the poles.
    pub fn rotate(&mut self, d_lon: f64, d_lat: f64) {
        self.look_at(Coordinate {
            lon: self.center_lon + d_lon,
            lat: self.center_lat + d_lat,
        });
    }

    /// Disc position of `c`, or `None` when it faces away from the viewer.
    pub fn project(&self, c: Coordinate) -> Option<(f64, f64)> {
        let d_lon = c.lon - self.center_lon;
        let (sin_lat, cos_lat) = c.lat.sin_cos();
        let (sin_lat0, cos_lat0) = self.center_lat.sin_cos();

        let cos_c = sin_lat0 * sin_lat + cos_lat0 * cos_lat * d_lon.cos();
        if cos_c < 0.0 {
            return None;
        }

        let x = cos_lat * d_lon.sin();
        let y = cos_lat0 * sin_lat - sin_lat0 * cos_lat * d_lon.cos();
        Some((x, y))
    }
}

fn wrap_lon(lon: f64) -> f64 {
    let wrapped = (lon + PI).rem_euclid(TAU) - PI;
    // keep +180 rather than folding it to -180
    if wrapped == -PI && lon > 0.0 { PI } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deg(lon: f64, lat: f64) -> Coordinate {
        Coordinate::from_degrees(lon, lat)
    }

    #[test]
    fn centre_maps_to_origin() {
        let view = Orthographic::new(0.3, 0.6);
        let (x, y) = view.project(Coordinate { lon: 0.3, lat: 0.6 }).unwrap();
        assert!(x.abs() < 1e-12 && y.abs() < 1e-12);
    }

    #[test]
    fn far_side_is_hidden() {
        let view = Orthographic::default();
        assert!(view.project(deg(180.0, 0.0)).is_none());
        assert!(view.project(deg(100.0, 0.0)).is_none());
        assert!(view.project(deg(80.0, 0.0)).is_some());
    }

    #[test]
    fn projected_points_stay_on_the_disc() {
        let view = Orthographic::new(1.0, -0.4);
        for lon in (-180..180).step_by(15) {
            for lat in (-90..=90).step_by(15) {
                if let Some((x, y)) = view.project(deg(lon as f64, lat as f64)) {
                    assert!(x * x + y * y <= 1.0 + 1e-9);
                }
            }
        }
    }

    #[test]
    fn east_is_right_and_north_is_up() {
        let view = Orthographic::default();
        let (x, _) = view.project(deg(30.0, 0.0)).unwrap();
        let (_, y) = view.project(deg(0.0, 30.0)).unwrap();
        assert!(x > 0.0 && y > 0.0);
    }

    #[test]
    fn rotation_wraps_and_clamps() {
        let mut view = Orthographic::new(PI - 0.1, FRAC_PI_2 - 0.1);
        view.rotate(0.2, 0.5);
        let c = view.center();
        assert!((c.lon - (-PI + 0.1)).abs() < 1e-9);
        assert_eq!(c.lat, FRAC_PI_2);
    }
}
