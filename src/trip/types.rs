use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const MIN_DURATION_DAYS: u8 = 1;
pub const MAX_DURATION_DAYS: u8 = 30;
pub const DEFAULT_DURATION_DAYS: u8 = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown budget '{0}'. Choose one of: Low, Moderate, Luxury")]
    UnknownBudget(String),
    #[error("Trip duration must be between 1 and 30 days, got {0}")]
    DurationOutOfRange(u32),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Budget {
    #[default]
    Low,
    Moderate,
    Luxury,
}

impl Budget {
    pub const ALL: [Budget; 3] = [Budget::Low, Budget::Moderate, Budget::Luxury];

    pub fn label(self) -> &'static str {
        match self {
            Budget::Low => "Low",
            Budget::Moderate => "Moderate",
            Budget::Luxury => "Luxury",
        }
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Budget {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Budget::Low),
            "moderate" => Ok(Budget::Moderate),
            "luxury" => Ok(Budget::Luxury),
            _ => Err(FormError::UnknownBudget(s.trim().to_string())),
        }
    }
}

/// Number of days, always within 1..=30.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripDuration(u8);

impl TripDuration {
    pub fn new(days: u32) -> Result<Self, FormError> {
        if (MIN_DURATION_DAYS as u32..=MAX_DURATION_DAYS as u32).contains(&days) {
            Ok(Self(days as u8))
        } else {
            Err(FormError::DurationOutOfRange(days))
        }
    }

    pub fn days(self) -> u8 {
        self.0
    }
}

impl Default for TripDuration {
    fn default() -> Self {
        Self(DEFAULT_DURATION_DAYS)
    }
}

impl fmt::Display for TripDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TripDuration {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let days = s
            .trim()
            .parse::<u32>()
            .map_err(|_| FormError::DurationOutOfRange(0))?;
        Self::new(days)
    }
}

/// The free-text inputs that must be filled before an itinerary is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Origin,
    Destination,
    Purpose,
    Preferences,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::Origin => "Starting Location",
            FormField::Destination => "Destination",
            FormField::Purpose => "Purpose of Trip",
            FormField::Preferences => "Your Preferences",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripRequest {
    pub origin: String,
    pub destination: String,
    pub budget: Budget,
    pub duration: TripDuration,
    pub purpose: String,
    pub preferences: String,
}

impl TripRequest {
    /// Required fields that are empty or whitespace-only, in form order.
    pub fn missing_fields(&self) -> Vec<FormField> {
        [
            (FormField::Origin, &self.origin),
            (FormField::Destination, &self.destination),
            (FormField::Purpose, &self.purpose),
            (FormField::Preferences, &self.preferences),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}
