use crate::chemistry::Field;
use crate::models::WaterSample;

/// Which closed-form procedure applies to a sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalculationMode {
    /// Exactly one unknown, solved against the complementary charge side
    /// (or, for conductivity, from the average of both sides).
    SingleUnknown,
    /// One cation unknown, no anion data at all; solved against the
    /// conductivity-derived total.
    CationsOnly,
    /// One anion unknown, no cation data at all; solved against the
    /// conductivity-derived total.
    AnionsOnly,
    /// One unknown per side, both solved against the conductivity-derived
    /// total.
    CationsAndAnions,
}

/// Classification of a sample: either a calculation mode with its unknown
/// field(s), or a rejection with the reason in `message`.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
    pub mode: Option<CalculationMode>,
    pub unknown_field: Option<Field>,
    /// Anion-side unknown; only populated in `CationsAndAnions` mode, where
    /// `unknown_field` holds the cation-side unknown.
    pub second_unknown_field: Option<Field>,
}

impl ValidationResult {
    fn rejected(message: impl Into<String>) -> Self {
        ValidationResult {
            is_valid: false,
            message: message.into(),
            mode: None,
            unknown_field: None,
            second_unknown_field: None,
        }
    }

    fn valid(message: impl Into<String>, mode: CalculationMode, unknown: Field) -> Self {
        ValidationResult {
            is_valid: true,
            message: message.into(),
            mode: Some(mode),
            unknown_field: Some(unknown),
            second_unknown_field: None,
        }
    }
}

/// Classify a sample into a calculation mode or reject it.
///
/// Pure and total: every input maps to a `ValidationResult`, nothing panics.
/// The special conductivity-referenced modes are tried before the generic
/// single-unknown rule because they overlap structurally with it but weigh
/// the unknown against the conductivity-derived total rather than against
/// the complementary charge side.
pub fn validate(sample: Option<&WaterSample>) -> ValidationResult {
    let Some(sample) = sample else {
        return ValidationResult::rejected("Water sample cannot be null.");
    };

    let negatives: Vec<&str> = Field::ALL
        .iter()
        .filter(|&&f| sample.get(f).is_some_and(|v| v < 0.0))
        .map(|&f| f.name())
        .collect();
    if !negatives.is_empty() {
        return ValidationResult::rejected(format!(
            "Negative values not allowed: {}",
            negatives.join(", ")
        ));
    }

    let missing_cations: Vec<Field> = Field::CATIONS
        .iter()
        .copied()
        .filter(|&f| sample.get(f).is_none())
        .collect();
    let missing_anions: Vec<Field> = Field::ANIONS
        .iter()
        .copied()
        .filter(|&f| sample.get(f).is_none())
        .collect();
    let has_conductivity = sample.conductivity.is_some();

    if has_conductivity && missing_cations.len() == 1 && missing_anions.len() == 1 {
        return ValidationResult {
            second_unknown_field: Some(missing_anions[0]),
            ..ValidationResult::valid(
                "Valid for cations+anions calculation",
                CalculationMode::CationsAndAnions,
                missing_cations[0],
            )
        };
    }

    if has_conductivity && missing_cations.len() == 1 && missing_anions.len() == Field::ANIONS.len()
    {
        return ValidationResult::valid(
            "Valid for cations-only calculation",
            CalculationMode::CationsOnly,
            missing_cations[0],
        );
    }

    if has_conductivity && missing_anions.len() == 1 && missing_cations.len() == Field::CATIONS.len()
    {
        return ValidationResult::valid(
            "Valid for anions-only calculation",
            CalculationMode::AnionsOnly,
            missing_anions[0],
        );
    }

    // Generic rules over the nine ion fields; conductivity is unconstrained
    // here, it only decides between the ion and conductivity cases below.
    let missing_ions = missing_cations.len() + missing_anions.len();

    if missing_ions == 1 {
        let unknown = missing_cations
            .first()
            .or_else(|| missing_anions.first())
            .copied();
        if let Some(unknown) = unknown {
            return ValidationResult::valid(
                "Valid for calculation",
                CalculationMode::SingleUnknown,
                unknown,
            );
        }
    }

    if missing_ions == 0 && !has_conductivity {
        return ValidationResult::valid(
            "Valid for conductivity calculation",
            CalculationMode::SingleUnknown,
            Field::Conductivity,
        );
    }

    if missing_ions == 0 {
        return ValidationResult::rejected(
            "All values are provided. At least one value must be unknown.",
        );
    }

    ValidationResult::rejected("Multiple unknown values with no matching calculation mode.")
}
