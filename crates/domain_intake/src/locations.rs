//! City to location-tier lookup

use domain_underwriting::LocationTier;

const METRO_CITIES: [&str; 8] = [
    "mumbai", "delhi", "bangalore", "chennai", "kolkata", "hyderabad", "pune",
    "ahmedabad",
];

const TIER2_CITIES: [&str; 8] = [
    "nagpur", "indore", "bhopal", "lucknow", "kanpur", "patna", "chandigarh",
    "amritsar",
];

/// Resolves a city name to its pricing tier, case-insensitively.
///
/// Unrecognized cities fall back to [`LocationTier::Rural`].
pub fn tier_for_city(city: &str) -> LocationTier {
    let city = city.trim().to_lowercase();
    if METRO_CITIES.contains(&city.as_str()) {
        LocationTier::Metro
    } else if TIER2_CITIES.contains(&city.as_str()) {
        LocationTier::TierTwo
    } else {
        LocationTier::Rural
    }
}
