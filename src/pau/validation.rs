use thiserror::Error;

use super::engine::GradeInput;

/// Accepted range for the bachillerato average. Below 5 there is no exam
/// to sit, so the calculator refuses the input instead of clamping it.
pub const BACHILLERATO_RANGE: (f64, f64) = (5.0, 10.0);

/// Accepted range for every exam grade.
pub const EXAM_RANGE: (f64, f64) = (0.0, 10.0);

/// A grade outside the range its field accepts.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field}: {value} is outside the accepted range {min}..={max}")]
pub struct OutOfRangeInput {
    pub field: &'static str,
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

/// Validate a full set of grades before scoring.
/// Returns all offending fields at once (not just the first).
///
/// NaN never satisfies a range check, so it is rejected along with
/// out-of-range values.
pub fn validate_grades(grades: &GradeInput) -> Result<(), Vec<OutOfRangeInput>> {
    let checks = [
        ("bachillerato", grades.bachillerato, BACHILLERATO_RANGE),
        ("lengua", grades.lengua, EXAM_RANGE),
        ("historia", grades.historia, EXAM_RANGE),
        ("ingles", grades.ingles, EXAM_RANGE),
        ("matematicas", grades.matematicas, EXAM_RANGE),
        ("fisica", grades.fisica, EXAM_RANGE),
        ("dibujo", grades.dibujo, EXAM_RANGE),
    ];

    let errors: Vec<OutOfRangeInput> = checks
        .into_iter()
        .filter(|(_, value, (min, max))| !(*min..=*max).contains(value))
        .map(|(field, value, (min, max))| OutOfRangeInput {
            field,
            value,
            min,
            max,
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
