//! Commit-time constraint validation
//!
//! The whole staged batch is validated before anything touches the
//! database, so a single violation rejects the batch as a unit.

use std::collections::HashSet;

use rollbook_core::errors::RollbookError;
use rollbook_core::model::Student;
use rollbook_core::schema::{
    CONSTRAINT_EMAIL_LENGTH, CONSTRAINT_GRADE_RANGE, CONSTRAINT_ID_PK, CONSTRAINT_UNIQUE_EMAIL,
    EMAIL_MAX_LEN, GRADE_MAX, GRADE_MIN,
};

use crate::errors::Result;

/// Validate a staged batch against the schema constraints
///
/// `persisted_emails` holds the email values already durable in the
/// store; uniqueness is checked both against those and within the batch.
pub(crate) fn validate_batch(batch: &[Student], persisted_emails: &HashSet<String>) -> Result<()> {
    let mut batch_emails: HashSet<&str> = HashSet::new();

    for record in batch {
        if record.id.is_some() {
            return Err(RollbookError::ConstraintViolation {
                constraint: CONSTRAINT_ID_PK.to_string(),
                record: record.to_string(),
                reason: "record is already persisted; ids are immutable".to_string(),
            });
        }

        if !(GRADE_MIN..=GRADE_MAX).contains(&record.grade) {
            return Err(RollbookError::ConstraintViolation {
                constraint: CONSTRAINT_GRADE_RANGE.to_string(),
                record: record.to_string(),
                reason: format!(
                    "grade {} is outside [{}, {}]",
                    record.grade, GRADE_MIN, GRADE_MAX
                ),
            });
        }

        if record.email.chars().count() > EMAIL_MAX_LEN as usize {
            return Err(RollbookError::ConstraintViolation {
                constraint: CONSTRAINT_EMAIL_LENGTH.to_string(),
                record: record.to_string(),
                reason: format!("email exceeds {} characters", EMAIL_MAX_LEN),
            });
        }

        if persisted_emails.contains(&record.email) || !batch_emails.insert(&record.email) {
            return Err(RollbookError::ConstraintViolation {
                constraint: CONSTRAINT_UNIQUE_EMAIL.to_string(),
                record: record.to_string(),
                reason: format!("email '{}' is already in use", record.email),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_student(name: &str, email: &str, grade: i32) -> Student {
        Student::new(name, email, grade)
    }

    #[test]
    fn test_valid_batch_passes() {
        let batch = vec![
            valid_student("Albert Einstein", "albert.einstein@zurich.edu", 6),
            valid_student("Alan Turing", "alan.turing@sherborne.edu", 11),
        ];
        assert!(validate_batch(&batch, &HashSet::new()).is_ok());
    }

    #[test]
    fn test_grade_out_of_range_rejected() {
        for grade in [0, 13, -5, 100] {
            let batch = vec![valid_student("A", "a@example.edu", grade)];
            let err = validate_batch(&batch, &HashSet::new()).unwrap_err();
            assert_eq!(err.constraint(), Some(CONSTRAINT_GRADE_RANGE));
        }
    }

    #[test]
    fn test_grade_bounds_are_inclusive() {
        for grade in [1, 12] {
            let batch = vec![valid_student("A", "a@example.edu", grade)];
            assert!(validate_batch(&batch, &HashSet::new()).is_ok());
        }
    }

    #[test]
    fn test_duplicate_email_within_batch_rejected() {
        let batch = vec![
            valid_student("A", "same@example.edu", 3),
            valid_student("B", "same@example.edu", 4),
        ];
        let err = validate_batch(&batch, &HashSet::new()).unwrap_err();
        assert_eq!(err.constraint(), Some(CONSTRAINT_UNIQUE_EMAIL));
    }

    #[test]
    fn test_email_already_persisted_rejected() {
        let mut persisted = HashSet::new();
        persisted.insert("taken@example.edu".to_string());

        let batch = vec![valid_student("A", "taken@example.edu", 3)];
        let err = validate_batch(&batch, &persisted).unwrap_err();
        assert_eq!(err.constraint(), Some(CONSTRAINT_UNIQUE_EMAIL));
    }

    #[test]
    fn test_overlong_email_rejected() {
        let email = format!("{}@example.edu", "x".repeat(60));
        let batch = vec![valid_student("A", &email, 3)];
        let err = validate_batch(&batch, &HashSet::new()).unwrap_err();
        assert_eq!(err.constraint(), Some(CONSTRAINT_EMAIL_LENGTH));
    }

    #[test]
    fn test_already_persisted_record_rejected() {
        let mut student = valid_student("A", "a@example.edu", 3);
        student.id = Some(7);

        let err = validate_batch(&[student], &HashSet::new()).unwrap_err();
        assert_eq!(err.constraint(), Some(CONSTRAINT_ID_PK));
    }
}
