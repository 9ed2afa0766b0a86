// Property tests for the grade range constraint

use proptest::prelude::*;
use rollbook_core::model::Student;
use rollbook_core::schema::student_table;
use rollbook_store::Store;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn commit_accepts_exactly_the_grades_in_range(grade in -100i32..=120) {
        let mut store = Store::in_memory().unwrap();
        store.materialize(&student_table()).unwrap();
        store
            .add([Student::new("Ada Lovelace", "ada.lovelace@example.edu", grade)])
            .unwrap();

        let result = store.commit();
        if (1..=12).contains(&grade) {
            let persisted = result.unwrap();
            prop_assert_eq!(persisted[0].id, Some(1));
            prop_assert_eq!(store.record_count().unwrap(), 1);
        } else {
            let err = result.unwrap_err();
            prop_assert_eq!(err.code(), "ERR_CONSTRAINT_VIOLATION");
            prop_assert_eq!(store.record_count().unwrap(), 0);
        }
    }
}
