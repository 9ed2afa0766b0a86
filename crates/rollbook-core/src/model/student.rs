use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Student - the single entity type managed by the record store
///
/// Instances are created freely in memory and may violate constraints
/// until they are committed; the store validates at commit time and
/// assigns the primary key on first successful insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Store-assigned primary key (None until the record is persisted)
    pub id: Option<i64>,

    /// Full name, indexed for lookup
    pub name: String,

    /// Contact email; unique across all records, at most 55 characters
    pub email: String,

    /// School grade; must lie in [1, 12] to be persisted
    pub grade: i32,

    /// Date of birth
    pub birthday: Option<DateTime<Utc>>,

    /// Enrollment timestamp; filled in at insert time when absent
    pub enrolled_date: Option<DateTime<Utc>>,
}

impl Student {
    /// Create a new unpersisted Student
    pub fn new(name: impl Into<String>, email: impl Into<String>, grade: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            grade,
            birthday: None,
            enrolled_date: None,
        }
    }

    /// Set the date of birth
    pub fn with_birthday(mut self, birthday: DateTime<Utc>) -> Self {
        self.birthday = Some(birthday);
        self
    }

    /// Check whether the store has assigned this record an id
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "Student {}: {}, Grade {}", id, self.name, self.grade),
            None => write!(f, "Student ?: {}, Grade {}", self.name, self.grade),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_student_is_unpersisted() {
        let student = Student::new("Albert Einstein", "albert.einstein@zurich.edu", 6);

        assert_eq!(student.id, None);
        assert!(!student.is_persisted());
        assert_eq!(student.name, "Albert Einstein");
        assert_eq!(student.grade, 6);
        assert!(student.birthday.is_none());
        assert!(student.enrolled_date.is_none());
    }

    #[test]
    fn test_with_birthday() {
        let birthday = Utc.with_ymd_and_hms(1912, 6, 23, 0, 0, 0).unwrap();
        let student =
            Student::new("Alan Turing", "alan.turing@sherborne.edu", 11).with_birthday(birthday);

        assert_eq!(student.birthday, Some(birthday));
    }

    #[test]
    fn test_display_persisted() {
        let mut student = Student::new("Albert Einstein", "albert.einstein@zurich.edu", 6);
        student.id = Some(1);

        assert_eq!(student.to_string(), "Student 1: Albert Einstein, Grade 6");
    }

    #[test]
    fn test_display_unpersisted_uses_placeholder() {
        let student = Student::new("Alan Turing", "alan.turing@sherborne.edu", 11);

        assert_eq!(student.to_string(), "Student ?: Alan Turing, Grade 11");
    }
}
