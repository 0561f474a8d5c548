//! Address geocoding: remote maps API client plus a deterministic
//! offline fallback.
//!
//! The offline geocoder exists so development and tests never need an
//! API key: it maps known city names to fixed centers and spreads
//! individual street addresses around them with a small deterministic
//! hash offset.

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::geo::Coordinate;
use crate::traits::Geocoder;

/// A resolved address.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedAddress {
    pub coordinate: Coordinate,
    pub formatted_address: Option<String>,
}

#[derive(Error, Debug)]
pub enum GeocodeError {
    #[error("geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("geocoding returned no usable result (status {status})")]
    NoResults { status: String },
}

// ============================================================================
// Remote maps API client
// ============================================================================

#[derive(Debug, Clone)]
pub struct MapsGeocoderConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout_secs: u64,
}

impl MapsGeocoderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: "https://maps.googleapis.com".to_string(),
            api_key: api_key.into(),
            timeout_secs: 10,
        }
    }
}

/// Blocking client for a Google-style geocoding endpoint.
#[derive(Debug, Clone)]
pub struct MapsGeocoder {
    config: MapsGeocoderConfig,
    client: reqwest::blocking::Client,
}

impl MapsGeocoder {
    pub fn new(config: MapsGeocoderConfig) -> Result<Self, GeocodeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl Geocoder for MapsGeocoder {
    fn geocode(&self, address: &str) -> Result<GeocodedAddress, GeocodeError> {
        let url = format!("{}/maps/api/geocode/json", self.config.base_url);

        let response: GeocodeResponse = self
            .client
            .get(url)
            .query(&[("address", address), ("key", self.config.api_key.as_str())])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json())?;

        if response.status != "OK" {
            return Err(GeocodeError::NoResults {
                status: response.status,
            });
        }

        let Some(result) = response.results.into_iter().next() else {
            return Err(GeocodeError::NoResults {
                status: "OK".to_string(),
            });
        };

        Ok(GeocodedAddress {
            coordinate: Coordinate::new(result.geometry.location.lat, result.geometry.location.lng),
            formatted_address: result.formatted_address,
        })
    }
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: GeocodeGeometry,
    formatted_address: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeGeometry {
    location: GeocodeLocation,
}

#[derive(Debug, Deserialize)]
struct GeocodeLocation {
    lat: f64,
    lng: f64,
}

// ============================================================================
// Deterministic offline geocoder
// ============================================================================

/// Sacramento-area city centers for offline lookups.
const CITY_CENTERS: &[(&str, f64, f64)] = &[
    ("sacramento, ca", 38.5816, -121.4944),
    ("roseville, ca", 38.7521, -121.2880),
    ("elk grove, ca", 38.4088, -121.3716),
    ("folsom, ca", 38.6780, -121.1761),
    ("west sacramento, ca", 38.5804, -121.5302),
    ("davis, ca", 38.5449, -121.7405),
    ("woodland, ca", 38.6785, -121.7733),
    ("rancho cordova, ca", 38.5891, -121.3027),
    ("citrus heights, ca", 38.7071, -121.2811),
    ("carmichael, ca", 38.6252, -121.3283),
];

/// Fallback center when no city matches (downtown Sacramento).
const DEFAULT_CENTER: (f64, f64) = (38.5816, -121.4944);

/// Offline geocoder: city-table lookup with a small per-address
/// deterministic offset so distinct street addresses in the same city
/// do not collapse onto one point.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockGeocoder;

impl MockGeocoder {
    /// 32-bit wrapping string hash, mapped to small lat/lng offsets
    /// (a few hundredths of a degree, roughly a mile or two).
    fn address_offset(street: &str) -> (f64, f64) {
        let mut hash: i32 = 0;
        for unit in street.encode_utf16() {
            hash = hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(i32::from(unit));
        }

        let lat_offset = f64::from(hash % 100) / 100.0 * 0.02 - 0.01;
        let lng_offset = f64::from((hash >> 8) % 100) / 100.0 * 0.02 - 0.01;
        (lat_offset, lng_offset)
    }
}

impl Geocoder for MockGeocoder {
    fn geocode(&self, address: &str) -> Result<GeocodedAddress, GeocodeError> {
        let normalized = address.to_lowercase().trim().to_string();
        let street = normalized
            .split(',')
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(&normalized);

        let (center, offset_source) = CITY_CENTERS
            .iter()
            .find(|(city, _, _)| normalized.contains(city))
            .map_or((DEFAULT_CENTER, normalized.as_str()), |&(_, lat, lng)| {
                ((lat, lng), street)
            });

        let (lat_offset, lng_offset) = Self::address_offset(offset_source);

        Ok(GeocodedAddress {
            coordinate: Coordinate::new(center.0 + lat_offset, center.1 + lng_offset),
            formatted_address: Some(address.to_string()),
        })
    }
}

// ============================================================================
// Remote-then-offline composition
// ============================================================================

/// Tries the remote maps API first and falls back to the offline
/// geocoder on any remote failure, so address edits keep working
/// through API outages.
#[derive(Debug, Clone)]
pub struct FallbackGeocoder {
    remote: MapsGeocoder,
    offline: MockGeocoder,
}

impl FallbackGeocoder {
    pub fn new(remote: MapsGeocoder) -> Self {
        Self {
            remote,
            offline: MockGeocoder,
        }
    }
}

impl Geocoder for FallbackGeocoder {
    fn geocode(&self, address: &str) -> Result<GeocodedAddress, GeocodeError> {
        match self.remote.geocode(address) {
            Ok(geocoded) => Ok(geocoded),
            Err(err) => {
                warn!(error = %err, "remote geocoding failed, using offline fallback");
                self.offline.geocode(address)
            }
        }
    }
}
