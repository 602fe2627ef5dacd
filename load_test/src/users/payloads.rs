//! Request bodies sent by simulated students.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const STUDENT_ID_RANGE: RangeInclusive<u32> = 1..=100_000;
pub const COURSE_ID_RANGE: RangeInclusive<u32> = 1..=200;
pub const FILENAME_NUMBER_RANGE: RangeInclusive<u32> = 1..=1000;

const CONTENT_LINE: &str = "Hello Madrasati";
const CONTENT_REPEAT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new("student", "secret")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentSubmission {
    pub student_id: String,
    pub course_id: String,
    pub filename: String,
    pub content: String,
}

impl AssignmentSubmission {
    /// A fresh synthetic upload: random student, course and file number,
    /// fixed text body.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            student_id: format!("s-{}", rng.gen_range(STUDENT_ID_RANGE)),
            course_id: format!("c-{}", rng.gen_range(COURSE_ID_RANGE)),
            filename: format!("assignment_{}.txt", rng.gen_range(FILENAME_NUMBER_RANGE)),
            content: CONTENT_LINE.repeat(CONTENT_REPEAT),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn numeric_suffix(value: &str, prefix: &str) -> u32 {
        value
            .strip_prefix(prefix)
            .unwrap_or_else(|| panic!("{value} lacks prefix {prefix}"))
            .parse()
            .unwrap()
    }

    #[test]
    fn generated_ids_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let submission = AssignmentSubmission::random(&mut rng);
            assert!(STUDENT_ID_RANGE.contains(&numeric_suffix(&submission.student_id, "s-")));
            assert!(COURSE_ID_RANGE.contains(&numeric_suffix(&submission.course_id, "c-")));

            let number = submission
                .filename
                .strip_prefix("assignment_")
                .and_then(|rest| rest.strip_suffix(".txt"))
                .unwrap()
                .parse::<u32>()
                .unwrap();
            assert!(FILENAME_NUMBER_RANGE.contains(&number));
        }
    }

    #[test]
    fn course_range_is_covered_at_both_ends() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..20_000 {
            let submission = AssignmentSubmission::random(&mut rng);
            seen_min |= submission.course_id == "c-1";
            seen_max |= submission.course_id == "c-200";
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn content_is_fixed_repeated_text() {
        let submission = AssignmentSubmission::random(&mut StdRng::seed_from_u64(1));
        assert_eq!(submission.content.len(), CONTENT_LINE.len() * CONTENT_REPEAT);
        assert!(submission.content.starts_with("Hello MadrasatiHello Madrasati"));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let submission = AssignmentSubmission {
            student_id: "s-1".into(),
            course_id: "c-2".into(),
            filename: "assignment_3.txt".into(),
            content: "x".into(),
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "studentId": "s-1",
                "courseId": "c-2",
                "filename": "assignment_3.txt",
                "content": "x"
            })
        );
    }
}
