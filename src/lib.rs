//! Campus Connect signup portal: the HTTP signup router backed by a SQLite pool,
//! plus the client-side signup form controller that talks to it.

pub mod client;
pub mod config;
pub mod database;
pub mod error;
pub mod form;
pub mod handler;
pub mod middleware;
pub mod security;
