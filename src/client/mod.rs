//! Client side of the signup portal: the form controller and its HTTP transport.

pub mod api;
pub mod config;
pub mod controller;
pub mod draft;
pub mod notification;

pub use api::{ApiError, HttpSignupApi, SignupApi, SignupReceipt};
pub use config::ClientConfig;
pub use controller::{Navigator, Route, SignupController, SubmitOutcome};
pub use draft::{ClubDraft, Draft, DraftError, EntityKind, StudentDraft};
pub use notification::{Notification, Notifier, Severity};
