//! Interview form contents and their validation.
//!
//! Validation uses Stillwater's `Validation` so that a submit reports every
//! problem with the form at once instead of the first one found.

use crate::appointment::error::FormError;
use crate::appointment::schedule::{Interview, InterviewerId};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// What the user has typed and picked so far.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InterviewDraft {
    pub student: String,
    pub interviewer: Option<InterviewerId>,
}

impl InterviewDraft {
    pub fn new(student: impl Into<String>, interviewer: Option<InterviewerId>) -> Self {
        Self {
            student: student.into(),
            interviewer,
        }
    }

    /// Check every field, accumulating ALL problems.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<FormError>> {
        let checks: Vec<Validation<(), NonEmptyVec<FormError>>> = vec![
            if self.student.trim().is_empty() {
                Validation::fail(FormError::BlankStudent)
            } else {
                Validation::success(())
            },
            if self.interviewer.is_none() {
                Validation::fail(FormError::MissingInterviewer)
            } else {
                Validation::success(())
            },
        ];

        Validation::all_vec(checks).map(|_| ())
    }

    /// Turn a valid draft into a booking with a trimmed student name.
    pub fn into_interview(self) -> Result<Interview, Vec<FormError>> {
        if let Validation::Failure(errors) = self.validate() {
            return Err(errors.iter().cloned().collect());
        }
        match self.interviewer {
            Some(interviewer) => Ok(Interview {
                student: self.student.trim().to_string(),
                interviewer,
            }),
            None => Err(vec![FormError::MissingInterviewer]),
        }
    }
}

impl From<&Interview> for InterviewDraft {
    fn from(interview: &Interview) -> Self {
        Self {
            student: interview.student.clone(),
            interviewer: Some(interview.interviewer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_draft_is_valid() {
        let draft = InterviewDraft::new("Lydia Miller-Jones", Some(InterviewerId(1)));
        assert!(draft.validate().is_success());
    }

    #[test]
    fn validation_accumulates_all_problems() {
        let draft = InterviewDraft::new("   ", None);

        match draft.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors.iter().any(|e| *e == FormError::BlankStudent));
                assert!(errors.iter().any(|e| *e == FormError::MissingInterviewer));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn blank_student_alone_is_reported() {
        let draft = InterviewDraft::new("", Some(InterviewerId(2)));
        let errors = draft.into_interview().unwrap_err();
        assert_eq!(errors, vec![FormError::BlankStudent]);
    }

    #[test]
    fn into_interview_trims_student() {
        let draft = InterviewDraft::new("  Archie Cohen ", Some(InterviewerId(2)));
        let interview = draft.into_interview().unwrap();

        assert_eq!(interview.student, "Archie Cohen");
        assert_eq!(interview.interviewer, InterviewerId(2));
    }

    #[test]
    fn draft_prefills_from_interview() {
        let interview = Interview {
            student: "Archie Cohen".to_string(),
            interviewer: InterviewerId(2),
        };
        let draft = InterviewDraft::from(&interview);

        assert_eq!(draft.student, "Archie Cohen");
        assert_eq!(draft.interviewer, Some(InterviewerId(2)));
    }
}
