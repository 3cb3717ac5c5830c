//! Persistence tests against a file-backed SQLite pool.

use campus_connect::database::{
    self, action,
    model::{club::NewClub, student::NewStudent},
};

fn student(n: usize) -> NewStudent {
    NewStudent {
        name: format!("Student {n}"),
        email: format!("student{n}@x.edu"),
        course: "CS".into(),
        password: "p1".into(),
    }
}

#[test]
fn concurrent_signups_with_distinct_emails_all_persist() {
    let dir = tempfile::tempdir().unwrap();
    let pool = database::initialize_db_pool(dir.path().join("cc.db").to_str().unwrap(), 10);

    let failures: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..64)
            .map(|n| {
                let pool = pool.clone();
                scope.spawn(move || -> Result<(), String> {
                    let mut conn = pool.get().map_err(|e| e.to_string())?;
                    action::student::insert_new_student(&mut conn, &student(n), "hash")
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                })
            })
            .collect();

        handles
            .into_iter()
            .filter_map(|handle| handle.join().unwrap().err())
            .collect()
    });

    assert!(failures.is_empty(), "failed inserts: {failures:?}");

    let mut conn = pool.get().unwrap();
    for n in 0..64 {
        assert!(
            action::student::get_student_by_email(&mut conn, &format!("student{n}@x.edu"))
                .unwrap()
                .is_some(),
            "student{n} missing"
        );
    }
}

#[test]
fn unique_email_is_enforced_by_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let pool = database::initialize_db_pool(dir.path().join("cc.db").to_str().unwrap(), 2);
    let mut conn = pool.get().unwrap();

    let club = NewClub {
        name: "Chess".into(),
        email: "chess@x.edu".into(),
        description: None,
        password: "secret".into(),
    };
    action::club::insert_new_club(&mut conn, &club, "hash").unwrap();

    let err = action::club::insert_new_club(&mut conn, &club, "hash").unwrap_err();
    assert!(matches!(
        err,
        diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            _
        )
    ));
}
