use std::sync::{Mutex, MutexGuard};

use super::api::{SignupApi, SignupReceipt};
use super::draft::{ClubDraft, Draft, DraftError, EntityKind, StudentDraft};
use super::notification::{Notification, Notifier, Severity};

pub const PROCESSING_LABEL: &str = "Processing...";

/// Views the signup form can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
}

pub trait Navigator {
    fn navigate(&self, route: Route);
}

impl<F> Navigator for F
where
    F: Fn(Route),
{
    fn navigate(&self, route: Route) {
        self(route)
    }
}

/// What a call to [`SignupController::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Registered(SignupReceipt),
    /// The request failed; carries the message shown to the user.
    Failed(String),
    /// Another submission is still outstanding. Nothing was sent.
    Busy,
    /// A required field is empty. Nothing was sent.
    Incomplete,
}

#[derive(Debug, Default)]
struct FormState {
    active: EntityKind,
    student: StudentDraft,
    club: ClubDraft,
    in_flight: bool,
}

impl FormState {
    fn draft(&self, kind: EntityKind) -> Draft {
        match kind {
            EntityKind::Student => Draft::Student(self.student.clone()),
            EntityKind::Club => Draft::Club(self.club.clone()),
        }
    }

    fn is_complete(&self, kind: EntityKind) -> bool {
        match kind {
            EntityKind::Student => self.student.is_complete(),
            EntityKind::Club => self.club.is_complete(),
        }
    }

    fn reset(&mut self, kind: EntityKind) {
        match kind {
            EntityKind::Student => self.student = StudentDraft::default(),
            EntityKind::Club => self.club = ClubDraft::default(),
        }
    }
}

/// Marks the form in flight for as long as it lives.
///
/// Dropping it clears the flag on every exit path, including when the submit
/// future itself is dropped mid-request.
struct InFlightGuard<'a> {
    state: &'a Mutex<FormState>,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(state: &'a Mutex<FormState>) -> Option<Self> {
        let mut guard = lock(state);
        if guard.in_flight {
            return None;
        }
        guard.in_flight = true;

        Some(Self { state })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        lock(self.state).in_flight = false;
    }
}

fn lock(state: &Mutex<FormState>) -> MutexGuard<'_, FormState> {
    state.lock().unwrap_or_else(|e| e.into_inner())
}

/// State machine behind the student/club signup form.
///
/// Holds one draft per kind regardless of the active tab, allows a single
/// outstanding submission at a time, and reports results through a
/// [`Notifier`]. Errors never escape `submit`; they become notifications.
pub struct SignupController<A, N> {
    api: A,
    navigator: N,
    state: Mutex<FormState>,
    notifier: Notifier,
}

impl<A, N> SignupController<A, N>
where
    A: SignupApi,
    N: Navigator,
{
    pub fn new(api: A, navigator: N) -> Self {
        Self::with_notifier(api, navigator, Notifier::default())
    }

    pub fn with_notifier(api: A, navigator: N, notifier: Notifier) -> Self {
        Self {
            api,
            navigator,
            state: Mutex::default(),
            notifier,
        }
    }

    pub fn select_tab(&self, kind: EntityKind) {
        lock(&self.state).active = kind;
    }

    pub fn active_tab(&self) -> EntityKind {
        lock(&self.state).active
    }

    pub fn update_field(
        &self,
        kind: EntityKind,
        field: &str,
        value: impl Into<String>,
    ) -> Result<(), DraftError> {
        let mut state = lock(&self.state);
        match kind {
            EntityKind::Student => state.student.set_field(field, value.into()),
            EntityKind::Club => state.club.set_field(field, value.into()),
        }
    }

    pub fn student_draft(&self) -> StudentDraft {
        lock(&self.state).student.clone()
    }

    pub fn club_draft(&self) -> ClubDraft {
        lock(&self.state).club.clone()
    }

    pub fn is_in_flight(&self) -> bool {
        lock(&self.state).in_flight
    }

    /// Recomputed from the current draft and in-flight flag on every call.
    pub fn is_submit_disabled(&self, kind: EntityKind) -> bool {
        let state = lock(&self.state);
        state.in_flight || !state.is_complete(kind)
    }

    pub fn submit_label(&self, kind: EntityKind) -> &'static str {
        if self.is_in_flight() {
            PROCESSING_LABEL
        } else {
            kind.submit_label()
        }
    }

    pub fn notification(&self) -> Notification {
        self.notifier.current()
    }

    pub fn dismiss_notification(&self) {
        self.notifier.dismiss();
    }

    /// Sends the `kind` draft, at most one request at a time.
    ///
    /// On success the draft is cleared and the form navigates to the login view;
    /// on failure the draft is left as typed so the user can fix it and retry.
    pub async fn submit(&self, kind: EntityKind) -> SubmitOutcome {
        if !lock(&self.state).is_complete(kind) {
            return SubmitOutcome::Incomplete;
        }

        let Some(_in_flight) = InFlightGuard::acquire(&self.state) else {
            log::debug!("{kind} signup ignored, a submission is already in flight");
            return SubmitOutcome::Busy;
        };

        let draft = lock(&self.state).draft(kind);

        match self.api.signup(&draft).await {
            Ok(receipt) => {
                self.notifier.show(kind.success_message(), Severity::Success);
                lock(&self.state).reset(kind);
                self.navigator.navigate(Route::Login);

                SubmitOutcome::Registered(receipt)
            }
            Err(err) => {
                log::error!("{kind} signup error: {err}");

                let message = err.user_message();
                self.notifier.show(message.clone(), Severity::Error);

                SubmitOutcome::Failed(message)
            }
        }
    }
}
