use diesel::prelude::*;
use uuid::Uuid;

use crate::database::model::student::{NewStudent, Student};

/// Insert a student whose password has already been hashed.
///
/// A duplicate email surfaces as a `UniqueViolation` database error.
pub fn insert_new_student(
    conn: &mut SqliteConnection,
    new_student: &NewStudent,
    password_hash: &str,
) -> QueryResult<Student> {
    use crate::database::schema::students::dsl::*;

    let student = Student {
        id: Uuid::new_v4().to_string(),
        name: new_student.name.clone(),
        email: new_student.email.clone(),
        course: new_student.course.clone(),
        password: password_hash.to_string(),
    };

    diesel::insert_into(students).values(&student).execute(conn)?;

    Ok(student)
}

pub fn get_student_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> QueryResult<Option<Student>> {
    use crate::database::schema::students::dsl::{email as email_column, students};

    students
        .filter(email_column.eq(email))
        .first::<Student>(conn)
        .optional()
}
