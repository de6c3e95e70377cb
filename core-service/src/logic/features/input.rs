//! Incident Input - raw user-facing fields
//!
//! The values a user enters (or a preset supplies) before they are
//! packed into a [`FeatureVector`]. Bounds mirror the input widgets:
//! county and containment are clamped, resource counts are unsigned.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::vector::{FeatureVector, FeatureVectorBuilder};

/// Lowest county code
pub const COUNTY_MIN: u8 = 0;
/// Highest county code
pub const COUNTY_MAX: u8 = 60;
/// Containment lower bound (percent)
pub const PERCENT_MIN: f64 = 0.0;
/// Containment upper bound (percent)
pub const PERCENT_MAX: f64 = 100.0;

// ============================================================================
// MAJOR INCIDENT
// ============================================================================

/// "Major Incident" selector. Serializes as `"No"` / `"Yes"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "MajorIncidentRepr")]
pub enum MajorIncident {
    #[default]
    No,
    Yes,
}

impl MajorIncident {
    /// Model encoding: Yes → 1, No → 0
    pub fn as_flag(&self) -> u8 {
        match self {
            MajorIncident::No => 0,
            MajorIncident::Yes => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MajorIncident::No => "No",
            MajorIncident::Yes => "Yes",
        }
    }
}

impl From<bool> for MajorIncident {
    fn from(value: bool) -> Self {
        if value { MajorIncident::Yes } else { MajorIncident::No }
    }
}

impl fmt::Display for MajorIncident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for MajorIncident {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "true" | "1" => Ok(MajorIncident::Yes),
            "no" | "n" | "false" | "0" => Ok(MajorIncident::No),
            other => Err(format!("invalid major incident value '{}' (expected Yes or No)", other)),
        }
    }
}

/// Accepted wire forms: `"Yes"`/`"No"` (any case), `true`/`false`, `1`/`0`
#[derive(Deserialize)]
#[serde(untagged)]
enum MajorIncidentRepr {
    Flag(bool),
    Code(u8),
    Label(String),
}

impl TryFrom<MajorIncidentRepr> for MajorIncident {
    type Error = String;

    fn try_from(repr: MajorIncidentRepr) -> Result<Self, Self::Error> {
        match repr {
            MajorIncidentRepr::Flag(flag) => Ok(flag.into()),
            MajorIncidentRepr::Code(0) => Ok(MajorIncident::No),
            MajorIncidentRepr::Code(1) => Ok(MajorIncident::Yes),
            MajorIncidentRepr::Code(other) => Err(format!("invalid major incident flag {}", other)),
            MajorIncidentRepr::Label(label) => label.parse(),
        }
    }
}

// ============================================================================
// INCIDENT INPUT
// ============================================================================

/// One fire incident snapshot as entered by the user
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncidentInput {
    pub county: u8,
    pub latitude: f64,
    pub longitude: f64,
    pub percent_contained: f64,
    pub personnel: u32,
    pub engines: u32,
    pub helicopters: u32,
    pub dozers: u32,
    pub water_tenders: u32,
    #[serde(default)]
    pub major_incident: MajorIncident,
}

impl IncidentInput {
    /// Apply the input widgets' bounds (county 0-60, containment 0-100)
    pub fn clamped(mut self) -> Self {
        self.county = self.county.clamp(COUNTY_MIN, COUNTY_MAX);
        self.percent_contained = clamp_percent(self.percent_contained);
        self
    }

    /// Pack into the fixed-order model input
    pub fn to_feature_vector(&self) -> FeatureVector {
        FeatureVectorBuilder::new()
            .county(self.county)
            .latitude(self.latitude)
            .longitude(self.longitude)
            .percent_contained(self.percent_contained)
            .personnel(self.personnel)
            .engines(self.engines)
            .helicopters(self.helicopters)
            .dozers(self.dozers)
            .water_tenders(self.water_tenders)
            .major_incident(self.major_incident)
            .build()
    }
}

impl From<&IncidentInput> for FeatureVector {
    fn from(input: &IncidentInput) -> Self {
        input.to_feature_vector()
    }
}

pub(crate) fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        PERCENT_MIN
    } else {
        value.clamp(PERCENT_MIN, PERCENT_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_major_incident_flag() {
        assert_eq!(MajorIncident::Yes.as_flag(), 1);
        assert_eq!(MajorIncident::No.as_flag(), 0);
        assert_eq!(MajorIncident::default(), MajorIncident::No);
    }

    #[test]
    fn test_major_incident_from_str() {
        assert_eq!("Yes".parse::<MajorIncident>(), Ok(MajorIncident::Yes));
        assert_eq!("no".parse::<MajorIncident>(), Ok(MajorIncident::No));
        assert_eq!("TRUE".parse::<MajorIncident>(), Ok(MajorIncident::Yes));
        assert!("maybe".parse::<MajorIncident>().is_err());
    }

    #[test]
    fn test_major_incident_serde() {
        assert_eq!(serde_json::to_string(&MajorIncident::Yes).unwrap(), "\"Yes\"");

        let parsed: MajorIncident = serde_json::from_str("\"yes\"").unwrap();
        assert_eq!(parsed, MajorIncident::Yes);
        let parsed: MajorIncident = serde_json::from_str("false").unwrap();
        assert_eq!(parsed, MajorIncident::No);
        let parsed: MajorIncident = serde_json::from_str("1").unwrap();
        assert_eq!(parsed, MajorIncident::Yes);

        assert!(serde_json::from_str::<MajorIncident>("7").is_err());
        assert!(serde_json::from_str::<MajorIncident>("\"sometimes\"").is_err());
    }

    #[test]
    fn test_clamped() {
        let input = IncidentInput {
            county: 99,
            latitude: 38.5,
            longitude: -121.5,
            percent_contained: 140.0,
            personnel: 1,
            engines: 1,
            helicopters: 0,
            dozers: 0,
            water_tenders: 0,
            major_incident: MajorIncident::No,
        }
        .clamped();

        assert_eq!(input.county, COUNTY_MAX);
        assert_eq!(input.percent_contained, PERCENT_MAX);
    }

    #[test]
    fn test_clamp_percent_nan() {
        assert_eq!(clamp_percent(f64::NAN), PERCENT_MIN);
        assert_eq!(clamp_percent(-5.0), PERCENT_MIN);
        assert_eq!(clamp_percent(42.5), 42.5);
    }
}
