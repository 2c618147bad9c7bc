//! One appointment slot and its booking flow.
//!
//! A slot owns a `ModeStack<AppointmentMode>` and drives it through the
//! create/edit/delete flow:
//!
//! | action         | legal in            | stack change          |
//! |----------------|---------------------|-----------------------|
//! | `add`          | EMPTY               | push CREATE           |
//! | `edit`         | SHOW                | push EDIT             |
//! | `save`         | CREATE, EDIT        | replace SAVING        |
//! | `delete`       | SHOW                | push CONFIRM          |
//! | `confirm`      | CONFIRM             | replace DELETING      |
//! | `cancel`       | CREATE, EDIT, CONFIRM | back                |
//! | `dismiss_error`| ERROR_SAVE, ERROR_DELETE | back             |
//!
//! Writes are returned as effects. Their outcome is applied with
//! `resolve_save` / `resolve_delete`, which replace the pending mode with
//! SHOW/EMPTY on success or the matching error mode on failure. Resolutions
//! are applied whatever the slot shows by then; the last one wins.

use crate::appointment::api::BookingApi;
use crate::appointment::error::{BookingError, SlotError};
use crate::appointment::form::InterviewDraft;
use crate::appointment::mode::AppointmentMode;
use crate::appointment::schedule::{Appointment, AppointmentId, Interview, InterviewerId};
use crate::core::{ModeChange, ModeStack, SubscriptionId};
use stillwater::effect::{BoxedEffect, Effect};
use stillwater::prelude::*;
use tracing::{info, warn};

/// Interaction state of a single appointment.
#[derive(Debug)]
pub struct AppointmentSlot {
    id: AppointmentId,
    time: String,
    interview: Option<Interview>,
    draft: InterviewDraft,
    /// Draft of the last rejected save, restored by the next `add`/`edit`
    /// while the booking it was written for still stands
    retained: Option<InterviewDraft>,
    modes: ModeStack<AppointmentMode>,
}

impl AppointmentSlot {
    /// Slot for an appointment: SHOW when booked, EMPTY otherwise.
    pub fn for_appointment(appointment: &Appointment) -> Self {
        let initial = if appointment.is_booked() {
            AppointmentMode::Show
        } else {
            AppointmentMode::Empty
        };
        Self {
            id: appointment.id,
            time: appointment.time.clone(),
            interview: appointment.interview.clone(),
            draft: InterviewDraft::default(),
            retained: None,
            modes: ModeStack::new(initial),
        }
    }

    /// The appointment this slot renders.
    pub fn id(&self) -> AppointmentId {
        self.id
    }

    /// Start time label, e.g. "12pm".
    pub fn time(&self) -> &str {
        &self.time
    }

    /// The booking as last confirmed by the backend.
    pub fn interview(&self) -> Option<&Interview> {
        self.interview.as_ref()
    }

    /// Current form contents.
    pub fn draft(&self) -> &InterviewDraft {
        &self.draft
    }

    /// The mode to render.
    pub fn mode(&self) -> AppointmentMode {
        *self.modes.current_mode()
    }

    /// The underlying mode stack, for inspecting history.
    pub fn modes(&self) -> &ModeStack<AppointmentMode> {
        &self.modes
    }

    /// Observe every mode change of this slot.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&ModeChange<AppointmentMode>) + 'static,
    {
        self.modes.subscribe(observer)
    }

    /// Stop an observer. Returns `false` if the id was unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.modes.unsubscribe(id)
    }

    /// Open the form for a new booking.
    pub fn add(&mut self) -> Result<(), SlotError> {
        self.require("add", &[AppointmentMode::Empty])?;
        self.draft = self.retained.take().unwrap_or_default();
        self.modes.push(AppointmentMode::Create);
        Ok(())
    }

    /// Open the form pre-filled with the current booking.
    pub fn edit(&mut self) -> Result<(), SlotError> {
        self.require("edit", &[AppointmentMode::Show])?;
        let prefill = self.interview.as_ref().map(InterviewDraft::from);
        self.draft = self.retained.take().or(prefill).unwrap_or_default();
        self.modes.push(AppointmentMode::Edit);
        Ok(())
    }

    pub fn set_student(&mut self, student: impl Into<String>) -> Result<(), SlotError> {
        self.require(
            "change the student",
            &[AppointmentMode::Create, AppointmentMode::Edit],
        )?;
        self.draft.student = student.into();
        Ok(())
    }

    pub fn select_interviewer(&mut self, interviewer: InterviewerId) -> Result<(), SlotError> {
        self.require(
            "select an interviewer",
            &[AppointmentMode::Create, AppointmentMode::Edit],
        )?;
        self.draft.interviewer = Some(interviewer);
        Ok(())
    }

    /// Leave the form or the delete confirmation.
    pub fn cancel(&mut self) -> Result<(), SlotError> {
        self.require(
            "cancel",
            &[
                AppointmentMode::Create,
                AppointmentMode::Edit,
                AppointmentMode::Confirm,
            ],
        )?;
        self.modes.back();
        Ok(())
    }

    /// Ask for confirmation before deleting.
    pub fn delete(&mut self) -> Result<(), SlotError> {
        self.require("delete", &[AppointmentMode::Show])?;
        self.modes.push(AppointmentMode::Confirm);
        Ok(())
    }

    /// Close an error message and return to the previous checkpoint.
    pub fn dismiss_error(&mut self) -> Result<(), SlotError> {
        self.require(
            "dismiss",
            &[AppointmentMode::ErrorSave, AppointmentMode::ErrorDelete],
        )?;
        self.modes.back();
        Ok(())
    }

    /// Submit the form.
    ///
    /// An invalid draft leaves the slot in its form mode. Otherwise the slot
    /// shows SAVING and the returned effect performs the write; feed its
    /// outcome to `resolve_save`.
    pub fn save<Env>(&mut self) -> Result<BoxedEffect<Interview, BookingError, Env>, SlotError>
    where
        Env: BookingApi + Clone + Send + Sync + 'static,
    {
        self.require("save", &[AppointmentMode::Create, AppointmentMode::Edit])?;
        let interview = self
            .draft
            .clone()
            .into_interview()
            .map_err(SlotError::InvalidForm)?;

        self.modes.replace(AppointmentMode::Saving);
        info!(appointment = %self.id, student = %interview.student, "saving interview");

        let id = self.id;
        let write = from_fn(move |env: &Env| -> Result<Interview, BookingError> {
            env.book_interview(id, &interview)?;
            Ok(interview.clone())
        })
        .boxed();
        Ok(write)
    }

    /// Apply the outcome of a save.
    pub fn resolve_save(&mut self, outcome: Result<Interview, BookingError>) -> AppointmentMode {
        match outcome {
            Ok(interview) => {
                info!(appointment = %self.id, "interview saved");
                self.interview = Some(interview);
                self.retained = None;
                self.modes.replace(AppointmentMode::Show);
            }
            Err(error) => {
                warn!(appointment = %self.id, error = %error, "could not save interview");
                self.retained = Some(self.draft.clone());
                self.modes.replace(AppointmentMode::ErrorSave);
            }
        }
        self.mode()
    }

    /// Confirm the deletion.
    ///
    /// The slot shows DELETING and the returned effect performs the cancel;
    /// feed its outcome to `resolve_delete`.
    pub fn confirm<Env>(&mut self) -> Result<BoxedEffect<(), BookingError, Env>, SlotError>
    where
        Env: BookingApi + Clone + Send + Sync + 'static,
    {
        self.require("confirm", &[AppointmentMode::Confirm])?;

        self.modes.replace(AppointmentMode::Deleting);
        info!(appointment = %self.id, "deleting interview");

        let id = self.id;
        Ok(from_fn(move |env: &Env| env.cancel_interview(id)).boxed())
    }

    /// Apply the outcome of a delete.
    pub fn resolve_delete(&mut self, outcome: Result<(), BookingError>) -> AppointmentMode {
        match outcome {
            Ok(()) => {
                info!(appointment = %self.id, "interview deleted");
                self.interview = None;
                self.retained = None;
                self.modes.replace(AppointmentMode::Empty);
            }
            Err(error) => {
                warn!(appointment = %self.id, error = %error, "could not delete interview");
                self.modes.replace(AppointmentMode::ErrorDelete);
            }
        }
        self.mode()
    }

    /// Save and wait for the outcome.
    pub async fn submit<Env>(&mut self, env: &Env) -> Result<AppointmentMode, SlotError>
    where
        Env: BookingApi + Clone + Send + Sync + 'static,
    {
        let write = self.save::<Env>()?;
        let outcome = write.run(env).await;
        Ok(self.resolve_save(outcome))
    }

    /// Confirm the deletion and wait for the outcome.
    pub async fn confirm_with<Env>(&mut self, env: &Env) -> Result<AppointmentMode, SlotError>
    where
        Env: BookingApi + Clone + Send + Sync + 'static,
    {
        let write = self.confirm::<Env>()?;
        let outcome = write.run(env).await;
        Ok(self.resolve_delete(outcome))
    }

    fn require(&self, action: &'static str, allowed: &[AppointmentMode]) -> Result<(), SlotError> {
        let mode = self.mode();
        if allowed.contains(&mode) {
            Ok(())
        } else {
            Err(SlotError::InvalidAction { action, mode })
        }
    }
}
