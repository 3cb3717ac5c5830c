use serde::Deserialize;

use crate::database::model::student::NewStudent;
use crate::error::SignupError;

#[derive(Deserialize, Default, Debug)]
pub struct StudentSignupData {
    pub name: String,
    pub email: String,
    pub course: String,
    pub password: String,
}

impl StudentSignupData {
    pub fn validate(self) -> Result<NewStudent, SignupError> {
        Ok(NewStudent {
            name: super::required("Name", &self.name)?,
            email: super::email(&self.email)?,
            course: super::required("Course", &self.course)?,
            password: super::password(&self.password)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(name: &str, email: &str, course: &str, password: &str) -> StudentSignupData {
        StudentSignupData {
            name: name.into(),
            email: email.into(),
            course: course.into(),
            password: password.into(),
        }
    }

    #[test]
    fn trims_fields_and_lowercases_email() {
        let student = data("  Ada ", " Ada@X.edu ", "CS ", " p1 ").validate().unwrap();

        assert_eq!(student.name, "Ada");
        assert_eq!(student.email, "ada@x.edu");
        assert_eq!(student.course, "CS");
        assert_eq!(student.password, " p1 ");
    }

    #[test]
    fn rejects_first_blank_required_field() {
        let err = data("Ada", "ada@x.edu", "   ", "p1").validate().unwrap_err();
        assert_eq!(err.to_string(), "Course is required");

        let err = data("", "", "", "").validate().unwrap_err();
        assert_eq!(err.to_string(), "Name is required");
    }

    #[test]
    fn rejects_malformed_email() {
        let err = data("Ada", "not-an-email", "CS", "p1").validate().unwrap_err();
        assert_eq!(err.to_string(), "Please provide a valid email address");
    }
}
