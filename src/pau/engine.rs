use serde::Serialize;

/// Weight applied to every elective grade before ranking.
pub const ELECTIVE_WEIGHT: f64 = 0.2;

const BACHILLERATO_WEIGHT: f64 = 0.6;
const GENERAL_PHASE_WEIGHT: f64 = 0.4;

/// Subjects eligible for the best-two elective bonus.
///
/// Declaration order doubles as the tie-break order when two weighted
/// values are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Subject {
    Matematicas,
    Fisica,
    Dibujo,
}

impl Subject {
    /// Display name as it appears on the transcript.
    pub fn label(self) -> &'static str {
        match self {
            Subject::Matematicas => "Matemáticas II",
            Subject::Fisica => "Física",
            Subject::Dibujo => "Dibujo Técnico II",
        }
    }
}

/// The six grades the calculator works from.
///
/// Exam grades are on a 0-10 scale; the bachillerato average is 5-10
/// (below 5 there is no exam to sit). The input layer clamps or rejects
/// out-of-range values before they get here, see
/// [`validate_grades`](super::validate_grades).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GradeInput {
    pub bachillerato: f64,
    pub lengua: f64,
    pub historia: f64,
    pub ingles: f64,
    pub matematicas: f64,
    pub fisica: f64,
    pub dibujo: f64,
}

/// One elective candidate with its weighted contribution.
#[derive(Debug, Clone, Serialize)]
pub struct WeightedElective {
    pub subject: Subject,
    /// Raw grade, 0-10.
    pub grade: f64,
    /// `grade` x [`ELECTIVE_WEIGHT`], the unit used for ranking.
    pub weighted: f64,
}

/// Scores derived from one set of grades.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    /// Access score on the 0-10 scale: 60% bachillerato, 40% general phase.
    pub access_score: f64,
    /// Final score on the 0-14 scale: access score plus the two best
    /// weighted electives.
    pub final_score: f64,
    /// All elective candidates, best weighted value first.
    pub electives: Vec<WeightedElective>,
}

impl ScoreResult {
    /// The two electives that actually count toward the final score.
    pub fn selected(&self) -> &[WeightedElective] {
        &self.electives[..2]
    }
}

/// Compute the access and final scores for one set of grades.
///
/// The general phase average is the mean of the four mandatory subjects.
/// Matemáticas II counts there *and* as an elective candidate; the double
/// role is how the UPM weighting table works, not an accident.
///
/// Candidates with equal weighted values keep their declared order
/// (Matemáticas II, Física, Dibujo Técnico II): the sort is stable.
pub fn compute_score(grades: &GradeInput) -> ScoreResult {
    let general_phase =
        (grades.lengua + grades.historia + grades.ingles + grades.matematicas) / 4.0;
    let access_score =
        BACHILLERATO_WEIGHT * grades.bachillerato + GENERAL_PHASE_WEIGHT * general_phase;

    let mut electives: Vec<WeightedElective> = [
        (Subject::Matematicas, grades.matematicas),
        (Subject::Fisica, grades.fisica),
        (Subject::Dibujo, grades.dibujo),
    ]
    .into_iter()
    .map(|(subject, grade)| WeightedElective {
        subject,
        grade,
        weighted: grade * ELECTIVE_WEIGHT,
    })
    .collect();

    // sort_by is stable, so equal weights keep the declared order
    electives.sort_by(|a, b| {
        b.weighted
            .partial_cmp(&a.weighted)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let final_score = access_score + electives[0].weighted + electives[1].weighted;

    ScoreResult {
        access_score,
        final_score,
        electives,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn sample_grades() -> GradeInput {
        GradeInput {
            bachillerato: 9.75,
            lengua: 8.0,
            historia: 8.0,
            ingles: 8.0,
            matematicas: 8.0,
            fisica: 8.0,
            dibujo: 8.0,
        }
    }

    #[test]
    fn test_default_grades_golden_values() {
        // general phase = 8.0, access = 0.6*9.75 + 0.4*8.0 = 9.05,
        // bonus = 2 * 8.0*0.2 = 3.2, final = 12.25
        let result = compute_score(&sample_grades());
        assert!((result.access_score - 9.05).abs() < EPS);
        assert!((result.final_score - 12.25).abs() < EPS);
    }

    #[test]
    fn test_final_equals_access_plus_selected() {
        let grades = GradeInput {
            bachillerato: 7.3,
            lengua: 6.1,
            historia: 5.5,
            ingles: 9.0,
            matematicas: 7.75,
            fisica: 4.2,
            dibujo: 8.9,
        };
        let result = compute_score(&grades);
        let bonus: f64 = result.selected().iter().map(|e| e.weighted).sum();
        assert!((result.final_score - (result.access_score + bonus)).abs() < EPS);
    }

    #[test]
    fn test_invariant_holds_over_grade_grid() {
        for bach in [5.0, 6.5, 8.0, 10.0] {
            for grade in [0.0, 2.5, 5.0, 7.5, 10.0] {
                let grades = GradeInput {
                    bachillerato: bach,
                    lengua: grade,
                    historia: 10.0 - grade,
                    ingles: grade,
                    matematicas: grade,
                    fisica: 10.0 - grade,
                    dibujo: grade,
                };
                let result = compute_score(&grades);
                let bonus: f64 = result.selected().iter().map(|e| e.weighted).sum();
                assert!((result.final_score - (result.access_score + bonus)).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_electives_ranked_descending() {
        let mut grades = sample_grades();
        grades.matematicas = 6.0;
        grades.fisica = 9.0;
        grades.dibujo = 7.5;

        let result = compute_score(&grades);
        assert_eq!(result.electives[0].subject, Subject::Fisica);
        assert_eq!(result.electives[1].subject, Subject::Dibujo);
        assert_eq!(result.electives[2].subject, Subject::Matematicas);
        assert!((result.electives[0].weighted - 1.8).abs() < EPS);
    }

    #[test]
    fn test_top_two_bonus_invariant_under_permutation() {
        // Any assignment of the same three distinct values to the elective
        // subjects yields the same top-two bonus.
        let values = [9.0, 7.0, 5.0];
        let expected_bonus = (9.0 + 7.0) * ELECTIVE_WEIGHT;
        let perms: [[usize; 3]; 6] = [
            [0, 1, 2],
            [0, 2, 1],
            [1, 0, 2],
            [1, 2, 0],
            [2, 0, 1],
            [2, 1, 0],
        ];
        for perm in perms {
            let grades = GradeInput {
                bachillerato: 8.0,
                lengua: 7.0,
                historia: 7.0,
                ingles: 7.0,
                matematicas: values[perm[0]],
                fisica: values[perm[1]],
                dibujo: values[perm[2]],
            };
            let result = compute_score(&grades);
            let bonus: f64 = result.selected().iter().map(|e| e.weighted).sum();
            assert!((bonus - expected_bonus).abs() < EPS);
        }
    }

    #[test]
    fn test_tie_break_keeps_declared_order() {
        // All electives equal: ranking must fall back to declared order.
        let result = compute_score(&sample_grades());
        assert_eq!(result.electives[0].subject, Subject::Matematicas);
        assert_eq!(result.electives[1].subject, Subject::Fisica);
        assert_eq!(result.electives[2].subject, Subject::Dibujo);
    }

    #[test]
    fn test_matematicas_counts_twice() {
        // Raising matematicas moves both the general phase average and the
        // elective pool when it ranks in the top two.
        let mut low = sample_grades();
        low.matematicas = 6.0;
        let mut high = sample_grades();
        high.matematicas = 10.0;

        let low_result = compute_score(&low);
        let high_result = compute_score(&high);

        // +4.0 on matematicas: access moves by 0.4 * (4.0 / 4) = 0.4
        assert!((high_result.access_score - low_result.access_score - 0.4).abs() < EPS);
        // and the bonus picks up matematicas at 2.0 in place of a 1.6
        // elective, so the final score moves by more than the access did
        assert!(high_result.final_score > low_result.final_score + 0.4);
    }

    #[test]
    fn test_selected_returns_two() {
        let result = compute_score(&sample_grades());
        assert_eq!(result.selected().len(), 2);
        assert_eq!(result.electives.len(), 3);
    }

    #[test]
    fn test_subject_labels() {
        assert_eq!(Subject::Matematicas.label(), "Matemáticas II");
        assert_eq!(Subject::Fisica.label(), "Física");
        assert_eq!(Subject::Dibujo.label(), "Dibujo Técnico II");
    }
}
