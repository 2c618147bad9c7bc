//! Errors raised around appointment slots.

use crate::appointment::mode::AppointmentMode;
use crate::appointment::schedule::{AppointmentId, InterviewerId};
use thiserror::Error;

/// Failures reported by the booking backend.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookingError {
    #[error("Could not book appointment {0}")]
    SaveRejected(AppointmentId),

    #[error("Could not cancel appointment {0}")]
    DeleteRejected(AppointmentId),

    #[error("Unknown appointment {0}")]
    UnknownAppointment(AppointmentId),

    #[error("Unknown interviewer {0}")]
    UnknownInterviewer(InterviewerId),

    #[error("Booking backend unavailable: {0}")]
    Unavailable(String),
}

/// Problems with the interview form contents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Student name cannot be blank")]
    BlankStudent,

    #[error("Please select an interviewer")]
    MissingInterviewer,
}

/// Errors from user actions on a slot.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SlotError {
    #[error("Cannot {action} while the appointment is in {mode} mode")]
    InvalidAction {
        action: &'static str,
        mode: AppointmentMode,
    },

    #[error("Interview form is invalid: {}", describe(.0))]
    InvalidForm(Vec<FormError>),
}

fn describe(errors: &[FormError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_form_lists_every_problem() {
        let errors = vec![FormError::BlankStudent, FormError::MissingInterviewer];
        let error = SlotError::InvalidForm(errors);
        assert_eq!(
            error.to_string(),
            "Interview form is invalid: Student name cannot be blank; Please select an interviewer"
        );
    }

    #[test]
    fn invalid_action_names_mode_label() {
        let error = SlotError::InvalidAction {
            action: "edit",
            mode: AppointmentMode::Saving,
        };
        assert_eq!(
            error.to_string(),
            "Cannot edit while the appointment is in SAVING mode"
        );
    }
}
