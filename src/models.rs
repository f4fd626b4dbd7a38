use crate::chemistry::Field;
use core::fmt;
use serde::{Deserialize, Serialize};

/// A water sample as reported by the lab: ten independently optional values.
///
/// Units: mg/L for the eight ions, mg/L as CaCO3 for total alkalinity,
/// µS/cm for conductivity. A `None` field is "not measured / left blank";
/// zero is a legitimate measurement. Negative values are rejected by the
/// validator, not here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct WaterSample {
    pub calcium: Option<f64>,
    pub magnesium: Option<f64>,
    pub sodium: Option<f64>,
    pub potassium: Option<f64>,
    pub chloride: Option<f64>,
    pub fluoride: Option<f64>,
    pub nitrate: Option<f64>,
    pub sulfate: Option<f64>,
    pub total_alkalinity: Option<f64>,
    pub conductivity: Option<f64>,
}

impl WaterSample {
    /// Read a field by its enum key.
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::Calcium => self.calcium,
            Field::Magnesium => self.magnesium,
            Field::Sodium => self.sodium,
            Field::Potassium => self.potassium,
            Field::Chloride => self.chloride,
            Field::Fluoride => self.fluoride,
            Field::Nitrate => self.nitrate,
            Field::Sulfate => self.sulfate,
            Field::TotalAlkalinity => self.total_alkalinity,
            Field::Conductivity => self.conductivity,
        }
    }

    /// Write a field by its enum key. The explicit setter replaces the
    /// name-based reflective assignment the presentation layer would
    /// otherwise need.
    pub fn set(&mut self, field: Field, value: f64) {
        *self.slot(field) = Some(value);
    }

    /// Mark a field as unknown (blank input).
    pub fn clear(&mut self, field: Field) {
        *self.slot(field) = None;
    }

    fn slot(&mut self, field: Field) -> &mut Option<f64> {
        match field {
            Field::Calcium => &mut self.calcium,
            Field::Magnesium => &mut self.magnesium,
            Field::Sodium => &mut self.sodium,
            Field::Potassium => &mut self.potassium,
            Field::Chloride => &mut self.chloride,
            Field::Fluoride => &mut self.fluoride,
            Field::Nitrate => &mut self.nitrate,
            Field::Sulfate => &mut self.sulfate,
            Field::TotalAlkalinity => &mut self.total_alkalinity,
            Field::Conductivity => &mut self.conductivity,
        }
    }

    /// Copy of this sample with the solved value(s) from `result` filled in.
    /// Unchanged clone if the result carries no solved fields.
    pub fn completed_with(&self, result: &BalanceResult) -> WaterSample {
        let mut completed = self.clone();
        if let (Some(field), Some(value)) = (result.solved_property, result.solved_value) {
            completed.set(field, value);
        }
        if let (Some(field), Some(value)) =
            (result.second_solved_property, result.second_solved_value)
        {
            completed.set(field, value);
        }
        completed
    }
}

/// Outcome category of a balance calculation.
///
/// Serializes to (and displays as) the report wording the original lab tool
/// used, so callers can match on the enum while rendered output stays stable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "Calculation Complete")]
    Complete,
    #[serde(rename = "Calculation Complete (Cations only)")]
    CompleteCationsOnly,
    #[serde(rename = "Calculation Complete (Anions only)")]
    CompleteAnionsOnly,
    #[serde(rename = "Calculation Complete (Cations and anions)")]
    CompleteCationsAndAnions,
    #[serde(rename = "Invalid Input")]
    InvalidInput,
    #[serde(rename = "Invalid Result")]
    InvalidResult,
    #[serde(rename = "Calculation Error")]
    CalculationError,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Complete => "Calculation Complete",
            Status::CompleteCationsOnly => "Calculation Complete (Cations only)",
            Status::CompleteAnionsOnly => "Calculation Complete (Anions only)",
            Status::CompleteCationsAndAnions => "Calculation Complete (Cations and anions)",
            Status::InvalidInput => "Invalid Input",
            Status::InvalidResult => "Invalid Result",
            Status::CalculationError => "Calculation Error",
        }
    }

    /// True for the success statuses.
    pub fn is_complete(self) -> bool {
        matches!(
            self,
            Status::Complete
                | Status::CompleteCationsOnly
                | Status::CompleteAnionsOnly
                | Status::CompleteCationsAndAnions
        )
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a balance calculation.
///
/// Invariant: when `error_message` is set the status is a failure category
/// and no solved fields are populated; otherwise the status is a success
/// category and at least one solved property/value pair is present.
/// `second_solved_*` is only populated in the cations+anions mode.
///
/// Sums are meq/L; solved values are in the natural unit of the solved field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BalanceResult {
    pub cations_sum: Option<f64>,
    pub anions_sum: Option<f64>,
    pub status: Status,
    pub solved_property: Option<Field>,
    pub solved_value: Option<f64>,
    pub second_solved_property: Option<Field>,
    pub second_solved_value: Option<f64>,
    pub error_message: Option<String>,
}

impl BalanceResult {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::failure(Status::InvalidInput, message)
    }

    pub fn invalid_result(message: impl Into<String>) -> Self {
        Self::failure(Status::InvalidResult, message)
    }

    pub fn calculation_error(message: impl Into<String>) -> Self {
        Self::failure(Status::CalculationError, message)
    }

    fn failure(status: Status, message: impl Into<String>) -> Self {
        BalanceResult {
            cations_sum: None,
            anions_sum: None,
            status,
            solved_property: None,
            solved_value: None,
            second_solved_property: None,
            second_solved_value: None,
            error_message: Some(message.into()),
        }
    }

    /// Success result with a single solved field.
    pub fn solved(
        status: Status,
        cations_sum: Option<f64>,
        anions_sum: Option<f64>,
        property: Field,
        value: f64,
    ) -> Self {
        BalanceResult {
            cations_sum,
            anions_sum,
            status,
            solved_property: Some(property),
            solved_value: Some(value),
            second_solved_property: None,
            second_solved_value: None,
            error_message: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status.is_complete()
    }
}
