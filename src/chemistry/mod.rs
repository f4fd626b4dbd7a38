//! Chemistry module: field enumeration, equivalent weights and charge sums.
//!
//! This module provides:
//! - The closed `Field` enumeration of the ten measurable sample properties
//! - Equivalent weights (mg per meq) for the nine ion/alkalinity fields
//! - The conductivity conversion factor relating summed meq/L to µS/cm
//! - Cation/anion charge-sum helpers, with "excluding" variants used when a
//!   field is the unknown being solved for
//!
//! Units conventions:
//! - Ion concentrations are mg/L; total alkalinity is mg/L as CaCO3
//! - Conductivity is µS/cm
//! - Charge sums are meq/L (mass concentration divided by equivalent weight)
//!
//! Design notes:
//! - Field dispatch is enum-keyed throughout; there is no string matching, so
//!   an unrecognized field cannot reach the weight table. The only invariant
//!   gap left is `Conductivity`, which has no equivalent weight and yields
//!   `None` from the lookup.
//! - Sums skip absent fields; a missing value contributes zero charge.
//!
//! # Panics
//! None of the functions panic; absent values and the weight-less
//! conductivity field are handled via `Option`.

use crate::models::WaterSample;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Equivalent weights (mg per meq) used to convert mass concentration to
/// charge-equivalent concentration.
pub const CALCIUM_WEIGHT: f64 = 20.0;
pub const MAGNESIUM_WEIGHT: f64 = 12.0;
pub const SODIUM_WEIGHT: f64 = 23.0;
pub const POTASSIUM_WEIGHT: f64 = 39.0;
pub const CHLORIDE_WEIGHT: f64 = 35.5;
pub const FLUORIDE_WEIGHT: f64 = 19.0;
pub const NITRATE_WEIGHT: f64 = 14.0;
pub const SULFATE_WEIGHT: f64 = 48.0;
pub const ALKALINITY_WEIGHT: f64 = 50.0;

/// Empirical factor relating total ionic strength (meq/L) to electrical
/// conductivity (µS/cm).
pub const CONDUCTIVITY_CONVERSION_FACTOR: f64 = 100.0;

/// Charge side of an ion field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Cation,
    Anion,
}

/// The ten measurable properties of a water sample.
///
/// Serializes to the lab-report spelling of each name ("Calcium",
/// "TotalAlkalinity", ...), which is also what `BalanceResult` reports as
/// the solved property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Calcium,
    Magnesium,
    Sodium,
    Potassium,
    Chloride,
    Fluoride,
    Nitrate,
    Sulfate,
    TotalAlkalinity,
    Conductivity,
}

impl Field {
    /// The four cation fields, in display order.
    pub const CATIONS: [Field; 4] = [
        Field::Calcium,
        Field::Magnesium,
        Field::Sodium,
        Field::Potassium,
    ];

    /// The five anion-side fields (total alkalinity counts as an anion).
    pub const ANIONS: [Field; 5] = [
        Field::Chloride,
        Field::Fluoride,
        Field::Nitrate,
        Field::Sulfate,
        Field::TotalAlkalinity,
    ];

    /// All ten fields, ions first, conductivity last.
    pub const ALL: [Field; 10] = [
        Field::Calcium,
        Field::Magnesium,
        Field::Sodium,
        Field::Potassium,
        Field::Chloride,
        Field::Fluoride,
        Field::Nitrate,
        Field::Sulfate,
        Field::TotalAlkalinity,
        Field::Conductivity,
    ];

    /// Lab-report spelling of the field name.
    pub fn name(self) -> &'static str {
        match self {
            Field::Calcium => "Calcium",
            Field::Magnesium => "Magnesium",
            Field::Sodium => "Sodium",
            Field::Potassium => "Potassium",
            Field::Chloride => "Chloride",
            Field::Fluoride => "Fluoride",
            Field::Nitrate => "Nitrate",
            Field::Sulfate => "Sulfate",
            Field::TotalAlkalinity => "TotalAlkalinity",
            Field::Conductivity => "Conductivity",
        }
    }

    /// Charge side of the field; `None` for conductivity.
    pub fn side(self) -> Option<Side> {
        match self {
            Field::Calcium | Field::Magnesium | Field::Sodium | Field::Potassium => {
                Some(Side::Cation)
            }
            Field::Chloride
            | Field::Fluoride
            | Field::Nitrate
            | Field::Sulfate
            | Field::TotalAlkalinity => Some(Side::Anion),
            Field::Conductivity => None,
        }
    }

    /// Equivalent weight (mg per meq) of the field; `None` for conductivity,
    /// which is not an ion and carries no weight.
    pub fn equivalent_weight(self) -> Option<f64> {
        match self {
            Field::Calcium => Some(CALCIUM_WEIGHT),
            Field::Magnesium => Some(MAGNESIUM_WEIGHT),
            Field::Sodium => Some(SODIUM_WEIGHT),
            Field::Potassium => Some(POTASSIUM_WEIGHT),
            Field::Chloride => Some(CHLORIDE_WEIGHT),
            Field::Fluoride => Some(FLUORIDE_WEIGHT),
            Field::Nitrate => Some(NITRATE_WEIGHT),
            Field::Sulfate => Some(SULFATE_WEIGHT),
            Field::TotalAlkalinity => Some(ALKALINITY_WEIGHT),
            Field::Conductivity => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sum of cation charge equivalents (meq/L) over the present cation fields.
pub fn cations_sum(sample: &WaterSample) -> f64 {
    Field::CATIONS
        .iter()
        .filter_map(|&f| Some(sample.get(f)? / f.equivalent_weight()?))
        .sum()
}

/// Sum of anion-side charge equivalents (meq/L) over the present anion
/// fields, total alkalinity included.
pub fn anions_sum(sample: &WaterSample) -> f64 {
    Field::ANIONS
        .iter()
        .filter_map(|&f| Some(sample.get(f)? / f.equivalent_weight()?))
        .sum()
}

/// Cation charge sum (meq/L) skipping `exclude`, whether or not that field
/// holds a value. Used when `exclude` is the unknown being solved for.
pub fn cations_sum_excluding(sample: &WaterSample, exclude: Field) -> f64 {
    Field::CATIONS
        .iter()
        .filter(|&&f| f != exclude)
        .filter_map(|&f| Some(sample.get(f)? / f.equivalent_weight()?))
        .sum()
}

/// Anion-side charge sum (meq/L) skipping `exclude`.
pub fn anions_sum_excluding(sample: &WaterSample, exclude: Field) -> f64 {
    Field::ANIONS
        .iter()
        .filter(|&&f| f != exclude)
        .filter_map(|&f| Some(sample.get(f)? / f.equivalent_weight()?))
        .sum()
}

/// Round a floating-point value to a specified number of decimal digits.
/// Display-layer helper; the core keeps full precision.
pub fn round_to(x: f64, digits: i32) -> f64 {
    let p = 10f64.powi(digits);
    (x * p).round() / p
}
