use std::collections::HashMap;

use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use super::countries::COUNTRIES;
use super::distance::Coordinate;

#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("country table is empty")]
    Empty,
    #[error("country '{0}' appears more than once")]
    DuplicateName(String),
    #[error("country '{name}' has out-of-range coordinates ({lon}, {lat})")]
    OutOfRange { name: String, lon: f64, lat: f64 },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{0}' is not a known country")]
pub struct NotFound(pub String);

/// A catalog entry. Degrees are kept as loaded, radians are cached alongside.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Country {
    name: String,
    lon_deg: f64,
    lat_deg: f64,
    #[serde(skip)]
    radians: Coordinate,
}

impl Country {
    fn new(name: &str, lon_deg: f64, lat_deg: f64) -> Self {
        Self {
            name: name.to_string(),
            lon_deg,
            lat_deg,
            radians: Coordinate::from_degrees(lon_deg, lat_deg),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lon_deg(&self) -> f64 {
        self.lon_deg
    }

    pub fn lat_deg(&self) -> f64 {
        self.lat_deg
    }

    pub fn coordinate(&self) -> Coordinate {
        self.radians
    }
}

/// Case-insensitive key. No whitespace or diacritic folding.
fn key(name: &str) -> String {
    name.to_uppercase()
}

/// Fixed table of countries, immutable after load.
#[derive(Debug, Clone)]
pub struct CountryCatalog {
    countries: Vec<Country>,
    index: HashMap<String, usize>,
}

impl CountryCatalog {
    /// Load the built-in table.
    pub fn load() -> Result<Self, DataError> {
        Self::from_entries(COUNTRIES)
    }

    pub fn from_entries(entries: &[(&str, f64, f64)]) -> Result<Self, DataError> {
        if entries.is_empty() {
            return Err(DataError::Empty);
        }

        let mut countries = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());

        for &(name, lon, lat) in entries {
            if !(-180.0..=180.0).contains(&lon) || !(-90.0..=90.0).contains(&lat) {
                return Err(DataError::OutOfRange { name: name.to_string(), lon, lat });
            }
            if index.insert(key(name), countries.len()).is_some() {
                return Err(DataError::DuplicateName(name.to_string()));
            }
            countries.push(Country::new(name, lon, lat));
        }

        Ok(Self { countries, index })
    }

    pub fn get(&self, name: &str) -> Option<&Country> {
        self.index.get(&key(name)).map(|&i| &self.countries[i])
    }

    /// Coordinates (radians) of a country, matched case-insensitively.
    pub fn lookup(&self, name: &str) -> Result<Coordinate, NotFound> {
        self.get(name)
            .map(Country::coordinate)
            .ok_or_else(|| NotFound(name.to_string()))
    }

    pub fn is_valid_name(&self, name: &str) -> bool {
        self.index.contains_key(&key(name))
    }

    /// Uniform pick over every entry.
    pub fn random_country(&self) -> &Country {
        self.random_country_with(&mut rand::rng())
    }

    pub fn random_country_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &Country {
        &self.countries[rng.random_range(0..self.countries.len())]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Country> {
        self.countries.iter()
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}
