//! Visual modes of an appointment slot.

use crate::mode_enum;

mode_enum! {
    /// What an appointment slot is currently showing.
    pub enum AppointmentMode {
        /// Free slot with an "Add" affordance
        Empty => "EMPTY",
        /// Booked slot showing student and interviewer
        Show => "SHOW",
        /// Form for a new booking
        Create => "CREATE",
        /// Form pre-filled from the current booking
        Edit => "EDIT",
        Saving => "SAVING",
        /// "Are you sure you would like to delete?"
        Confirm => "CONFIRM",
        Deleting => "DELETING",
        ErrorSave => "ERROR_SAVE",
        ErrorDelete => "ERROR_DELETE",
    }
    error: [ErrorSave, ErrorDelete]
    pending: [Saving, Deleting]
}

impl AppointmentMode {
    /// Whether the slot shows the interview form.
    pub fn is_form(&self) -> bool {
        matches!(self, Self::Create | Self::Edit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mode;

    #[test]
    fn labels_match_screen_names() {
        let labels: Vec<&str> = AppointmentMode::ALL.iter().map(|m| m.name()).collect();
        assert_eq!(
            labels,
            vec![
                "EMPTY",
                "SHOW",
                "CREATE",
                "EDIT",
                "SAVING",
                "CONFIRM",
                "DELETING",
                "ERROR_SAVE",
                "ERROR_DELETE"
            ]
        );
    }

    #[test]
    fn pending_and_error_modes() {
        assert!(AppointmentMode::Saving.is_pending());
        assert!(AppointmentMode::Deleting.is_pending());
        assert!(AppointmentMode::ErrorSave.is_error());
        assert!(AppointmentMode::ErrorDelete.is_error());
        assert!(!AppointmentMode::Show.is_error());
        assert!(!AppointmentMode::Confirm.is_pending());
    }

    #[test]
    fn form_modes() {
        assert!(AppointmentMode::Create.is_form());
        assert!(AppointmentMode::Edit.is_form());
        assert!(!AppointmentMode::Saving.is_form());
    }
}
