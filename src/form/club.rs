use serde::Deserialize;

use crate::database::model::club::NewClub;
use crate::error::SignupError;

#[derive(Deserialize, Default, Debug)]
pub struct ClubSignupData {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub description: String,
    pub password: String,
}

impl ClubSignupData {
    pub fn validate(self) -> Result<NewClub, SignupError> {
        let description = self.description.trim();

        Ok(NewClub {
            name: super::required("Name", &self.name)?,
            email: super::email(&self.email)?,
            description: (!description.is_empty()).then(|| description.to_string()),
            password: super::password(&self.password)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_is_optional() {
        let club = ClubSignupData {
            name: "Chess".into(),
            email: "chess@x.edu".into(),
            description: "  ".into(),
            password: "secret".into(),
        }
        .validate()
        .unwrap();

        assert_eq!(club.description, None);
    }

    #[test]
    fn missing_description_deserializes_as_empty() {
        let data: ClubSignupData = serde_json::from_value(serde_json::json!({
            "name": "Chess",
            "email": "chess@x.edu",
            "password": "secret",
        }))
        .unwrap();

        assert_eq!(data.description, "");
    }

    #[test]
    fn required_fields_are_enforced() {
        for (name, email, password, expected) in [
            ("", "chess@x.edu", "secret", "Name is required"),
            ("Chess", "", "secret", "Email is required"),
            ("Chess", "chess@x.edu", "", "Password is required"),
        ] {
            let err = ClubSignupData {
                name: name.into(),
                email: email.into(),
                description: "Board games".into(),
                password: password.into(),
            }
            .validate()
            .unwrap_err();

            assert_eq!(err.to_string(), expected);
        }
    }
}
