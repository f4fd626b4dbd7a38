use water_balance_rs::chemistry::{anions_sum, cations_sum};
use water_balance_rs::{Field, Status, WaterSample, calculate};

/// Reference sample: every value equals its equivalent weight, so each field
/// contributes exactly 1 meq/L (cations total 4.0, anions total 5.0), and the
/// solved values come out as round numbers.
fn reference_sample() -> WaterSample {
    WaterSample {
        calcium: Some(20.0),
        magnesium: Some(12.0),
        sodium: Some(23.0),
        potassium: Some(39.0),
        chloride: Some(35.5),
        fluoride: Some(19.0),
        nitrate: Some(14.0),
        sulfate: Some(48.0),
        total_alkalinity: Some(50.0),
        conductivity: Some(250.0),
    }
}

fn without(fields: &[Field]) -> WaterSample {
    let mut sample = reference_sample();
    for &field in fields {
        sample.clear(field);
    }
    sample
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn solves_calcium_from_anion_excess() {
    let sample = without(&[Field::Calcium]);
    let result = calculate(Some(&sample));

    assert_eq!(result.status, Status::Complete);
    assert_eq!(result.solved_property, Some(Field::Calcium));
    // Anions carry 5.0 meq/L, the remaining cations 3.0; the 2.0 meq gap
    // times the calcium equivalent weight of 20 gives 40 mg/L.
    assert_close(result.solved_value.unwrap(), 40.0);
    assert_close(result.cations_sum.unwrap(), 5.0);
    assert_close(result.anions_sum.unwrap(), 5.0);
    assert_eq!(result.error_message, None);
}

#[test]
fn solves_each_ion_with_a_nonnegative_value() {
    let ions = Field::CATIONS.iter().chain(Field::ANIONS.iter());
    for &field in ions {
        let sample = without(&[field]);
        let result = calculate(Some(&sample));

        assert_eq!(result.status, Status::Complete, "failed for {field}");
        assert_eq!(result.solved_property, Some(field));
        assert!(result.solved_value.unwrap() >= 0.0, "failed for {field}");
        assert!(result.cations_sum.unwrap() >= 0.0);
        assert!(result.anions_sum.unwrap() >= 0.0);
    }
}

#[test]
fn solves_conductivity_from_average_of_both_sides() {
    let sample = without(&[Field::Conductivity]);
    let result = calculate(Some(&sample));

    assert_eq!(result.status, Status::Complete);
    assert_eq!(result.solved_property, Some(Field::Conductivity));
    // ((4.0 + 5.0) / 2) * 100
    assert_close(result.solved_value.unwrap(), 450.0);
    assert_close(result.cations_sum.unwrap(), 4.0);
    assert_close(result.anions_sum.unwrap(), 5.0);
}

#[test]
fn solves_an_ion_without_conductivity_present() {
    let sample = without(&[Field::Sodium, Field::Conductivity]);
    let result = calculate(Some(&sample));

    assert_eq!(result.status, Status::Complete);
    assert_eq!(result.solved_property, Some(Field::Sodium));
    // Electroneutrality alone: 5.0 anion meq minus 3.0 known cation meq.
    assert_close(result.solved_value.unwrap(), 2.0 * 23.0);
}

#[test]
fn reinserting_the_solved_value_reproduces_the_reported_sums() {
    for &field in Field::CATIONS.iter().chain(Field::ANIONS.iter()) {
        let sample = without(&[field]);
        let result = calculate(Some(&sample));
        assert_eq!(result.status, Status::Complete, "failed for {field}");

        let completed = sample.completed_with(&result);
        assert_close(cations_sum(&completed), result.cations_sum.unwrap());
        assert_close(anions_sum(&completed), result.anions_sum.unwrap());
    }
}

#[test]
fn negative_closed_form_solution_is_an_invalid_result() {
    // Known cations carry far less charge than the known anions, so the
    // missing sulfate would need a negative concentration to balance.
    let sample = WaterSample {
        calcium: Some(2.0),
        magnesium: Some(1.2),
        sodium: Some(2.3),
        potassium: Some(3.9),
        chloride: Some(35.5),
        fluoride: Some(19.0),
        nitrate: Some(14.0),
        sulfate: None,
        total_alkalinity: Some(50.0),
        conductivity: Some(100.0),
    };
    let result = calculate(Some(&sample));

    assert_eq!(result.status, Status::InvalidResult);
    assert!(
        result
            .error_message
            .as_deref()
            .unwrap()
            .contains("Negative result for Sulfate"),
    );
    assert_eq!(result.solved_property, None);
    assert_eq!(result.solved_value, None);
}

#[test]
fn cations_only_mode_solves_against_the_conductivity_total() {
    let sample = WaterSample {
        calcium: None,
        magnesium: Some(12.0),
        sodium: Some(23.0),
        potassium: Some(39.0),
        conductivity: Some(500.0),
        ..WaterSample::default()
    };
    let result = calculate(Some(&sample));

    assert_eq!(result.status, Status::CompleteCationsOnly);
    assert_eq!(result.solved_property, Some(Field::Calcium));
    // 500 µS/cm / 100 = 5.0 meq/L total; 3.0 known, gap of 2.0 times 20.
    assert_close(result.solved_value.unwrap(), 40.0);
    assert_close(result.cations_sum.unwrap(), 5.0);
    assert_eq!(result.anions_sum, None);
}

#[test]
fn anions_only_mode_solves_against_the_conductivity_total() {
    let sample = WaterSample {
        chloride: Some(35.5),
        fluoride: Some(19.0),
        nitrate: Some(14.0),
        sulfate: None,
        total_alkalinity: Some(50.0),
        conductivity: Some(500.0),
        ..WaterSample::default()
    };
    let result = calculate(Some(&sample));

    assert_eq!(result.status, Status::CompleteAnionsOnly);
    assert_eq!(result.solved_property, Some(Field::Sulfate));
    assert_close(result.solved_value.unwrap(), 48.0);
    assert_eq!(result.cations_sum, None);
    assert_close(result.anions_sum.unwrap(), 5.0);
}

#[test]
fn side_only_mode_reports_invalid_result_when_known_side_exceeds_total() {
    // Known cations alone already carry 3.0 meq/L, more than the 2.5 the
    // conductivity reading allows for the whole side.
    let sample = WaterSample {
        calcium: None,
        magnesium: Some(12.0),
        sodium: Some(23.0),
        potassium: Some(39.0),
        conductivity: Some(250.0),
        ..WaterSample::default()
    };
    let result = calculate(Some(&sample));

    assert_eq!(result.status, Status::InvalidResult);
    assert!(
        result
            .error_message
            .as_deref()
            .unwrap()
            .contains("Calcium"),
    );
}

// The cations+anions mode resolves the two unknowns independently against
// the same conductivity-derived total, not as a coupled electroneutrality
// system. Each completed side therefore lands exactly on the conductivity
// total regardless of how unbalanced the known values were; a simultaneous
// solve would need a constraint this calculation does not carry.
#[test]
fn cations_and_anions_mode_solves_each_side_independently() {
    let sample = {
        let mut s = without(&[Field::Calcium, Field::Sulfate]);
        s.conductivity = Some(500.0);
        s
    };
    let result = calculate(Some(&sample));

    assert_eq!(result.status, Status::CompleteCationsAndAnions);
    assert_eq!(result.solved_property, Some(Field::Calcium));
    assert_eq!(result.second_solved_property, Some(Field::Sulfate));
    // Cation side: 5.0 total - 3.0 known = 2.0 meq -> 40 mg/L.
    assert_close(result.solved_value.unwrap(), 40.0);
    // Anion side: 5.0 total - 4.0 known = 1.0 meq -> 48 mg/L.
    assert_close(result.second_solved_value.unwrap(), 48.0);
    // Both reported sums are the shared conductivity total.
    assert_close(result.cations_sum.unwrap(), 5.0);
    assert_close(result.anions_sum.unwrap(), 5.0);
}

#[test]
fn cations_and_anions_mode_names_every_negative_side() {
    // 100 µS/cm allows only 1.0 meq/L per side; both known sides already
    // exceed it, so both unknowns would come out negative.
    let sample = {
        let mut s = without(&[Field::Calcium, Field::Sulfate]);
        s.conductivity = Some(100.0);
        s
    };
    let result = calculate(Some(&sample));

    assert_eq!(result.status, Status::InvalidResult);
    let message = result.error_message.as_deref().unwrap();
    assert!(message.contains("Calcium"), "{message}");
    assert!(message.contains("Sulfate"), "{message}");
}

#[test]
fn calculate_mirrors_validation_rejections_as_invalid_input() {
    let result = calculate(Some(&reference_sample()));
    assert_eq!(result.status, Status::InvalidInput);
    assert!(
        result
            .error_message
            .as_deref()
            .unwrap()
            .contains("must be unknown"),
    );
    assert_eq!(result.solved_property, None);

    let result = calculate(None);
    assert_eq!(result.status, Status::InvalidInput);
    assert!(
        result
            .error_message
            .as_deref()
            .unwrap()
            .contains("cannot be null"),
    );

    let mut negative = reference_sample();
    negative.calcium = Some(-1.0);
    let result = calculate(Some(&negative));
    assert_eq!(result.status, Status::InvalidInput);
    assert!(
        result
            .error_message
            .as_deref()
            .unwrap()
            .contains("Negative values not allowed"),
    );
}
