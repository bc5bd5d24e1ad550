//! Known location table
//!
//! The service only fetches weather for a fixed set of named cities. The
//! table is the configuration surface for that set; handlers never carry
//! coordinates of their own.

/// A named location the weather adapter can resolve.
#[derive(Debug, Clone)]
pub struct Location {
    pub key: &'static str,
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// Cities the adapter knows about, keyed by lowercase name.
pub const KNOWN_LOCATIONS: &[Location] = &[
    Location {
        key: "chennai",
        name: "Chennai",
        latitude: 13.0827,
        longitude: 80.2707,
    },
    Location {
        key: "mumbai",
        name: "Mumbai",
        latitude: 19.0760,
        longitude: 72.8777,
    },
    Location {
        key: "delhi",
        name: "Delhi",
        latitude: 28.7041,
        longitude: 77.1025,
    },
    Location {
        key: "bengaluru",
        name: "Bengaluru",
        latitude: 12.9716,
        longitude: 77.5946,
    },
    Location {
        key: "kolkata",
        name: "Kolkata",
        latitude: 22.5726,
        longitude: 88.3639,
    },
];

/// Resolve a city key against the table. Keys are matched
/// case-insensitively and with surrounding whitespace ignored.
pub fn resolve(key: &str) -> Option<&'static Location> {
    let normalized = key.trim().to_lowercase();
    KNOWN_LOCATIONS.iter().find(|l| l.key == normalized)
}
