#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Terrorism incident record types and chart dimension definitions.
//!
//! This crate defines the canonical incident row shared by the dataset
//! loader, the filter/aggregation engines and the API layer, along with
//! the enumerations that drive the dashboard's dropdowns.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Label used for the sentinel row emitted when an aggregation is empty.
pub const NO_DATA_LABEL: &str = "No Data";

/// A single terrorism incident.
///
/// Text fields hold an empty string when the source left them blank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Incident {
    /// Year the incident occurred.
    pub year: i32,
    /// Month (1-12), if known.
    pub month: Option<u8>,
    /// Day of month (1-31), if known.
    pub day: Option<u8>,
    /// World region (e.g. "South Asia").
    pub region: String,
    /// Country name.
    pub country: String,
    /// Province, state or other administrative area.
    pub subregion: String,
    /// City or locality.
    pub locality: String,
    /// Primary attack type.
    pub attack_type: String,
    /// Nationality of the primary target.
    pub target_nationality: String,
    /// Primary target type.
    pub target_type: String,
    /// Primary weapon type.
    pub weapon_type: String,
    /// Name of the perpetrator organization.
    pub organization: String,
    /// Number of fatalities, if recorded.
    pub fatalities: Option<u32>,
    /// Latitude.
    pub latitude: Option<f64>,
    /// Longitude.
    pub longitude: Option<f64>,
}

/// Dimension an aggregation groups incidents by.
///
/// Parses from either the snake_case name or the raw CSV column name, so
/// both `"organization"` and `"gname"` resolve to [`Self::Organization`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(ascii_case_insensitive)]
pub enum ChartDimension {
    /// Perpetrator organization (`gname`).
    #[serde(alias = "gname")]
    #[strum(to_string = "organization", serialize = "gname")]
    Organization,
    /// Target nationality (`natlty1_txt`).
    #[serde(alias = "natlty1_txt")]
    #[strum(to_string = "target_nationality", serialize = "natlty1_txt")]
    TargetNationality,
    /// Target type (`targtype1_txt`).
    #[serde(alias = "targtype1_txt")]
    #[strum(to_string = "target_type", serialize = "targtype1_txt")]
    TargetType,
    /// Attack type (`attacktype1_txt`).
    #[serde(alias = "attacktype1_txt")]
    #[strum(to_string = "attack_type", serialize = "attacktype1_txt")]
    AttackType,
    /// Weapon type (`weaptype1_txt`).
    #[serde(alias = "weaptype1_txt")]
    #[strum(to_string = "weapon_type", serialize = "weaptype1_txt")]
    WeaponType,
    /// World region (`region_txt`).
    #[serde(alias = "region_txt")]
    #[strum(to_string = "region", serialize = "region_txt")]
    Region,
    /// Country attacked (`country_txt`).
    #[serde(alias = "country_txt")]
    #[strum(to_string = "country", serialize = "country_txt")]
    Country,
}

impl ChartDimension {
    /// Returns the human-readable label shown in the chart dropdown.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Organization => "Terrorist Organisation",
            Self::TargetNationality => "Target Nationality",
            Self::TargetType => "Target Type",
            Self::AttackType => "Type of Attack",
            Self::WeaponType => "Weapon Type",
            Self::Region => "Region",
            Self::Country => "Country Attacked",
        }
    }

    /// Returns the CSV column this dimension is read from.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Organization => "gname",
            Self::TargetNationality => "natlty1_txt",
            Self::TargetType => "targtype1_txt",
            Self::AttackType => "attacktype1_txt",
            Self::WeaponType => "weaptype1_txt",
            Self::Region => "region_txt",
            Self::Country => "country_txt",
        }
    }

    /// Returns this dimension's value for the given incident.
    #[must_use]
    pub fn value_of(self, incident: &Incident) -> &str {
        match self {
            Self::Organization => &incident.organization,
            Self::TargetNationality => &incident.target_nationality,
            Self::TargetType => &incident.target_type,
            Self::AttackType => &incident.attack_type,
            Self::WeaponType => &incident.weapon_type,
            Self::Region => &incident.region,
            Self::Country => &incident.country,
        }
    }

    /// Returns all variants in dropdown order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Organization,
            Self::TargetNationality,
            Self::TargetType,
            Self::AttackType,
            Self::WeaponType,
            Self::Region,
            Self::Country,
        ]
    }
}

/// Calendar month used by the month filter dropdown.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Month {
    January = 1,
    February = 2,
    March = 3,
    April = 4,
    May = 5,
    June = 6,
    July = 7,
    August = 8,
    September = 9,
    October = 10,
    November = 11,
    December = 12,
}

impl Month {
    /// Returns the month number (1-12).
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Creates a month from its number. Returns `None` outside 1-12.
    #[must_use]
    pub const fn from_number(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::January),
            2 => Some(Self::February),
            3 => Some(Self::March),
            4 => Some(Self::April),
            5 => Some(Self::May),
            6 => Some(Self::June),
            7 => Some(Self::July),
            8 => Some(Self::August),
            9 => Some(Self::September),
            10 => Some(Self::October),
            11 => Some(Self::November),
            12 => Some(Self::December),
            _ => None,
        }
    }

    /// Returns all months in calendar order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::January,
            Self::February,
            Self::March,
            Self::April,
            Self::May,
            Self::June,
            Self::July,
            Self::August,
            Self::September,
            Self::October,
            Self::November,
            Self::December,
        ]
    }
}
