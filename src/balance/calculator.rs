use crate::balance::validator::{CalculationMode, validate};
use crate::chemistry::{
    CONDUCTIVITY_CONVERSION_FACTOR, Field, Side, anions_sum, anions_sum_excluding, cations_sum,
    cations_sum_excluding,
};
use crate::models::{BalanceResult, Status, WaterSample};
use thiserror::Error;

/// Internal invariant violations. These cannot occur when the validator's
/// mode table is consistent with the dispatch below; if one does occur it is
/// caught at the `calculate` boundary and reported as a "Calculation Error"
/// result rather than propagated.
#[derive(Error, Debug)]
enum CalcError {
    #[error("no equivalent weight defined for {0}")]
    NoEquivalentWeight(Field),
    #[error("validation did not identify the unknown field")]
    UnknownFieldMissing,
    #[error("validation accepted the sample without selecting a calculation mode")]
    ModeMissing,
    #[error("conductivity value missing for conductivity-referenced mode")]
    ConductivityMissing,
}

/// Validate a sample and solve for its unknown value(s).
///
/// Always returns a complete `BalanceResult`; callers distinguish success
/// from failure by inspecting `status`/`error_message`, never by catching
/// anything. Invalid samples come back with status `Invalid Input` carrying
/// the validator's message; a negative closed-form solution comes back as
/// `Invalid Result`; internal invariant violations as `Calculation Error`.
pub fn calculate(sample: Option<&WaterSample>) -> BalanceResult {
    let validation = validate(sample);
    if !validation.is_valid {
        return BalanceResult::invalid_input(validation.message);
    }
    let Some(sample) = sample else {
        // Unreachable past a valid classification; kept as a data error to
        // honor the no-panic boundary.
        return BalanceResult::invalid_input("Water sample cannot be null.");
    };

    let outcome = match validation.mode {
        Some(CalculationMode::SingleUnknown) => {
            solve_single_unknown(sample, validation.unknown_field)
        }
        Some(CalculationMode::CationsOnly) => {
            solve_side_only(sample, validation.unknown_field, Side::Cation)
        }
        Some(CalculationMode::AnionsOnly) => {
            solve_side_only(sample, validation.unknown_field, Side::Anion)
        }
        Some(CalculationMode::CationsAndAnions) => solve_both_sides(
            sample,
            validation.unknown_field,
            validation.second_unknown_field,
        ),
        None => Err(CalcError::ModeMissing),
    };

    outcome.unwrap_or_else(|e| BalanceResult::calculation_error(format!("Error: {e}")))
}

fn solve_single_unknown(
    sample: &WaterSample,
    unknown: Option<Field>,
) -> Result<BalanceResult, CalcError> {
    let field = unknown.ok_or(CalcError::UnknownFieldMissing)?;
    if field == Field::Conductivity {
        return Ok(solve_conductivity(sample));
    }
    solve_ion(sample, field)
}

/// Conductivity from the average of the two charge sums, converted to µS/cm.
fn solve_conductivity(sample: &WaterSample) -> BalanceResult {
    let cations = cations_sum(sample);
    let anions = anions_sum(sample);
    let value = ((cations + anions) / 2.0) * CONDUCTIVITY_CONVERSION_FACTOR;

    BalanceResult::solved(
        Status::Complete,
        Some(cations),
        Some(anions),
        Field::Conductivity,
        value,
    )
}

/// Missing ion from electroneutrality: its charge equivalents are whatever
/// the complementary side has in excess over the rest of its own side.
fn solve_ion(sample: &WaterSample, field: Field) -> Result<BalanceResult, CalcError> {
    let side = field
        .side()
        .ok_or(CalcError::NoEquivalentWeight(field))?;
    let weight = field
        .equivalent_weight()
        .ok_or(CalcError::NoEquivalentWeight(field))?;

    let meq = match side {
        Side::Cation => anions_sum(sample) - cations_sum_excluding(sample, field),
        Side::Anion => cations_sum(sample) - anions_sum_excluding(sample, field),
    };
    let value = meq * weight;
    if value < 0.0 {
        return Ok(BalanceResult::invalid_result(format!(
            "Negative result for {field}"
        )));
    }

    let (cations, anions) = match side {
        Side::Cation => (cations_sum_excluding(sample, field) + meq, anions_sum(sample)),
        Side::Anion => (cations_sum(sample), anions_sum_excluding(sample, field) + meq),
    };

    Ok(BalanceResult::solved(
        Status::Complete,
        Some(cations),
        Some(anions),
        field,
        value,
    ))
}

/// Cations-only / anions-only modes: the opposite side is entirely absent,
/// so the conductivity-derived total stands in as the reference.
fn solve_side_only(
    sample: &WaterSample,
    unknown: Option<Field>,
    side: Side,
) -> Result<BalanceResult, CalcError> {
    let field = unknown.ok_or(CalcError::UnknownFieldMissing)?;
    let total_meq = conductivity_total_meq(sample)?;
    let weight = field
        .equivalent_weight()
        .ok_or(CalcError::NoEquivalentWeight(field))?;

    let known = match side {
        Side::Cation => cations_sum_excluding(sample, field),
        Side::Anion => anions_sum_excluding(sample, field),
    };
    let value = (total_meq - known) * weight;
    if value < 0.0 {
        return Ok(BalanceResult::invalid_result(format!(
            "Negative result for {field}"
        )));
    }

    let result = match side {
        Side::Cation => BalanceResult::solved(
            Status::CompleteCationsOnly,
            Some(total_meq),
            None,
            field,
            value,
        ),
        Side::Anion => BalanceResult::solved(
            Status::CompleteAnionsOnly,
            None,
            Some(total_meq),
            field,
            value,
        ),
    };
    Ok(result)
}

/// One unknown per side, each resolved independently against the shared
/// conductivity-derived total. This is not a coupled two-equation solve;
/// see the acceptance tests for the consequences.
fn solve_both_sides(
    sample: &WaterSample,
    cation_unknown: Option<Field>,
    anion_unknown: Option<Field>,
) -> Result<BalanceResult, CalcError> {
    let cation_field = cation_unknown.ok_or(CalcError::UnknownFieldMissing)?;
    let anion_field = anion_unknown.ok_or(CalcError::UnknownFieldMissing)?;
    let total_meq = conductivity_total_meq(sample)?;

    let cation_weight = cation_field
        .equivalent_weight()
        .ok_or(CalcError::NoEquivalentWeight(cation_field))?;
    let anion_weight = anion_field
        .equivalent_weight()
        .ok_or(CalcError::NoEquivalentWeight(anion_field))?;

    let cation_value = (total_meq - cations_sum_excluding(sample, cation_field)) * cation_weight;
    let anion_value = (total_meq - anions_sum_excluding(sample, anion_field)) * anion_weight;

    let mut offenders: Vec<&str> = Vec::new();
    if cation_value < 0.0 {
        offenders.push(cation_field.name());
    }
    if anion_value < 0.0 {
        offenders.push(anion_field.name());
    }
    if !offenders.is_empty() {
        return Ok(BalanceResult::invalid_result(format!(
            "Negative result for {}",
            offenders.join(", ")
        )));
    }

    Ok(BalanceResult {
        second_solved_property: Some(anion_field),
        second_solved_value: Some(anion_value),
        ..BalanceResult::solved(
            Status::CompleteCationsAndAnions,
            Some(total_meq),
            Some(total_meq),
            cation_field,
            cation_value,
        )
    })
}

/// Total ionic strength (meq/L) implied by the measured conductivity.
fn conductivity_total_meq(sample: &WaterSample) -> Result<f64, CalcError> {
    let conductivity = sample
        .conductivity
        .ok_or(CalcError::ConductivityMissing)?;
    Ok(conductivity / CONDUCTIVITY_CONVERSION_FACTOR)
}
