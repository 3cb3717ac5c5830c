pub mod action;
pub mod model;
pub mod schema;

use std::time::Duration;

use diesel::{connection::SimpleConnection, prelude::*, r2d2};

pub type Pool = r2d2::Pool<r2d2::ConnectionManager<SqliteConnection>>;

const CONNECTION_PRAGMAS: &str = "
    PRAGMA busy_timeout = 5000;
    PRAGMA journal_mode = WAL;
    PRAGMA synchronous = NORMAL;
";

const CREATE_TABLES: &str = "
    CREATE TABLE IF NOT EXISTS students (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        course TEXT NOT NULL,
        password TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS clubs (
        id TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        description TEXT,
        password TEXT NOT NULL
    );
";

/// Prepares every new pooled connection: concurrent writers wait on the lock
/// instead of failing, and the record tables exist even if the database only
/// became reachable after boot.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionSetup;

impl r2d2::CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionSetup {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(CONNECTION_PRAGMAS)
            .and_then(|()| conn.batch_execute(CREATE_TABLES))
            .map_err(r2d2::Error::QueryError)
    }
}

/// Initialize the database connection pool.
///
/// The pool is built lazily: an unreachable database is logged and the server keeps
/// running, so individual requests fail instead of the process refusing to start.
pub fn initialize_db_pool(database_url: &str, max_size: u32) -> Pool {
    let manager = r2d2::ConnectionManager::<SqliteConnection>::new(database_url);

    let pool = r2d2::Pool::builder()
        .max_size(max_size.max(1))
        .connection_timeout(Duration::from_secs(5))
        .connection_customizer(Box::new(ConnectionSetup))
        .build_unchecked(manager);

    match pool.get() {
        Ok(_) => log::info!("connected to database at {database_url}"),
        Err(e) => log::error!("database connection error: {e}"),
    }

    pool
}
