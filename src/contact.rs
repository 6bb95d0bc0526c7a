use std::{
    future::Future,
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use chrono::Utc;
use thiserror::Error;

use crate::store::{StorageError, SubmissionRecord, SubmissionStore};

pub const VALIDATION_NOTICE: &str = "Please fill in all fields";
pub const SUCCESS_NOTICE: &str = "Message transmitted successfully!";
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl Draft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    /// Fields that are empty or only whitespace.
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).trim().is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Idle,
    Sending,
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("missing required fields: {0:?}")]
    Validation(Vec<Field>),
    #[error("a message is already being sent")]
    InFlight,
    #[error("contact form is no longer mounted")]
    Detached,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: Draft,
    status: Status,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == Status::Sending
    }

    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value.into());
    }

    /// Moves to `Sending` and hands back a snapshot of the draft to send.
    /// Leaves everything untouched on error.
    pub fn begin_submit(&mut self) -> Result<Draft, SubmitError> {
        if self.is_sending() {
            return Err(SubmitError::InFlight);
        }
        let missing = self.draft.missing();
        if !missing.is_empty() {
            return Err(SubmitError::Validation(missing));
        }
        self.status = Status::Sending;
        Ok(self.draft.clone())
    }

    pub fn finish(&mut self) {
        self.draft = Draft::default();
        self.status = Status::Idle;
    }

    pub fn abort(&mut self) {
        self.status = Status::Idle;
    }
}

/// Receives user-facing notices. Fire and forget.
pub trait Notifier {
    fn success(&self, msg: &str);
    fn error(&self, msg: &str);
}

/// Stands in for the network round trip of a submission.
pub trait Delay {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Somewhere a [`ContactForm`] lives. Returns `None` once its owner is gone.
pub trait FormCell {
    fn update_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R>;
}

// a panic elsewhere while holding the lock leaves the form usable
impl FormCell for Arc<Mutex<ContactForm>> {
    fn update_form<R>(&self, f: impl FnOnce(&mut ContactForm) -> R) -> Option<R> {
        Some(f(&mut self.lock().unwrap_or_else(PoisonError::into_inner)))
    }
}

#[derive(Debug, Clone)]
pub struct ContactService<S, N, D> {
    store: S,
    notices: N,
    delay: D,
    latency: Duration,
}

impl<S, N, D> ContactService<S, N, D>
where
    S: SubmissionStore,
    N: Notifier,
    D: Delay,
{
    pub fn new(store: S, notices: N, delay: D) -> Self {
        Self {
            store,
            notices,
            delay,
            latency: DEFAULT_LATENCY,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn submit<C: FormCell>(&self, form: &C) -> Result<SubmissionRecord, SubmitError> {
        let draft = match form.update_form(ContactForm::begin_submit) {
            Some(Ok(draft)) => draft,
            Some(Err(e)) => {
                if let SubmitError::Validation(missing) = &e {
                    log::debug!("contact form missing {missing:?}");
                    self.notices.error(VALIDATION_NOTICE);
                }
                return Err(e);
            }
            None => return Err(SubmitError::Detached),
        };

        self.delay.wait(self.latency).await;

        let record = SubmissionRecord::new(draft, Utc::now());
        let mut records = self.store.read();
        records.push(record.clone());
        if let Err(e) = self.store.write(records) {
            log::error!("couldn't save contact message: {e}");
            self.notices.error(&format!("Transmission failed: {e}"));
            form.update_form(ContactForm::abort);
            return Err(e.into());
        }

        log::info!("saved contact message from {}", record.email);
        self.notices.success(SUCCESS_NOTICE);
        if form.update_form(ContactForm::finish).is_none() {
            log::debug!("contact form unmounted before submission finished");
        }
        Ok(record)
    }
}
