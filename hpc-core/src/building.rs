//! Choices offered by the form selects.
//!
//! The backend receives the `code()` string verbatim; the label is only for display.

use std::str::FromStr;

/// BDEW standard load profile building category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildingType {
    #[default]
    SingleFamily,
    MultiFamily,
    Commercial,
}

impl BuildingType {
    pub const ALL: [BuildingType; 3] = [
        BuildingType::SingleFamily,
        BuildingType::MultiFamily,
        BuildingType::Commercial,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            BuildingType::SingleFamily => "HEF",
            BuildingType::MultiFamily => "HMF",
            BuildingType::Commercial => "GHD",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BuildingType::SingleFamily => "Einfamilienhaus",
            BuildingType::MultiFamily => "Mehrfamilienhaus",
            BuildingType::Commercial => "Gewerbe/Handel/Dienstleistungen",
        }
    }
}

/// Where the heat pump draws its heat from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeatSource {
    #[default]
    Luft,
    Erdreich,
}

impl HeatSource {
    pub const ALL: [HeatSource; 2] = [HeatSource::Luft, HeatSource::Erdreich];

    pub fn code(&self) -> &'static str {
        match self {
            HeatSource::Luft => "Luft",
            HeatSource::Erdreich => "Erdreich",
        }
    }

    /// Only ground-source pumps use the ground temperature input.
    pub fn needs_ground_temperature(&self) -> bool {
        matches!(self, HeatSource::Erdreich)
    }
}

impl FromStr for HeatSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeatSource::ALL
            .into_iter()
            .find(|h| h.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown heat source: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn building_codes_are_distinct() {
        let mut codes: Vec<&str> = BuildingType::ALL.iter().map(|b| b.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes, vec!["GHD", "HEF", "HMF"]);
        assert_eq!(BuildingType::default().code(), "HEF");
    }

    #[test]
    fn only_ground_source_needs_ground_temperature() {
        assert!(HeatSource::Erdreich.needs_ground_temperature());
        assert!(!HeatSource::Luft.needs_ground_temperature());
        assert_eq!("erdreich".parse::<HeatSource>(), Ok(HeatSource::Erdreich));
        assert!("Wasser".parse::<HeatSource>().is_err());
    }
}
