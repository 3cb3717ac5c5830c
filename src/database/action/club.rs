use diesel::prelude::*;
use uuid::Uuid;

use crate::database::model::club::{Club, NewClub};

pub fn insert_new_club(
    conn: &mut SqliteConnection,
    new_club: &NewClub,
    password_hash: &str,
) -> QueryResult<Club> {
    use crate::database::schema::clubs::dsl::*;

    let club = Club {
        id: Uuid::new_v4().to_string(),
        name: new_club.name.clone(),
        email: new_club.email.clone(),
        description: new_club.description.clone(),
        password: password_hash.to_string(),
    };

    diesel::insert_into(clubs).values(&club).execute(conn)?;

    Ok(club)
}

pub fn get_club_by_email(conn: &mut SqliteConnection, email: &str) -> QueryResult<Option<Club>> {
    use crate::database::schema::clubs::dsl::{clubs, email as email_column};

    clubs
        .filter(email_column.eq(email))
        .first::<Club>(conn)
        .optional()
}
