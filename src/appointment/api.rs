//! The booking capability a slot commits to.
//!
//! Slots never talk to a network themselves. They hand the write to a
//! `BookingApi` implementation through an effect, and the caller decides
//! when and where that effect runs.

use crate::appointment::error::BookingError;
use crate::appointment::schedule::{AppointmentId, Interview, Schedule};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

/// Commit and cancel operations for interviews.
pub trait BookingApi {
    fn book_interview(&self, id: AppointmentId, interview: &Interview) -> Result<(), BookingError>;

    fn cancel_interview(&self, id: AppointmentId) -> Result<(), BookingError>;
}

/// `BookingApi` backed by a shared in-memory `Schedule`.
///
/// Clones share the same schedule. `fail_next_save` and `fail_next_delete`
/// make the next matching call fail once, leaving the schedule untouched.
#[derive(Clone, Default)]
pub struct InMemoryBookings {
    schedule: Arc<Mutex<Schedule>>,
    fail_save: Arc<AtomicBool>,
    fail_delete: Arc<AtomicBool>,
}

impl InMemoryBookings {
    /// Serve bookings from `schedule`.
    pub fn new(schedule: Schedule) -> Self {
        Self {
            schedule: Arc::new(Mutex::new(schedule)),
            fail_save: Arc::new(AtomicBool::new(false)),
            fail_delete: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Reject the next `book_interview` call.
    pub fn fail_next_save(&self) {
        self.fail_save.store(true, Ordering::SeqCst);
    }

    /// Reject the next `cancel_interview` call.
    pub fn fail_next_delete(&self) {
        self.fail_delete.store(true, Ordering::SeqCst);
    }

    /// Copy of the current schedule.
    pub fn snapshot(&self) -> Result<Schedule, BookingError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Schedule>, BookingError> {
        self.schedule
            .lock()
            .map_err(|e| BookingError::Unavailable(e.to_string()))
    }
}

impl BookingApi for InMemoryBookings {
    fn book_interview(&self, id: AppointmentId, interview: &Interview) -> Result<(), BookingError> {
        if self.fail_save.swap(false, Ordering::SeqCst) {
            return Err(BookingError::SaveRejected(id));
        }
        self.lock()?.book_interview(id, interview.clone())
    }

    fn cancel_interview(&self, id: AppointmentId) -> Result<(), BookingError> {
        if self.fail_delete.swap(false, Ordering::SeqCst) {
            return Err(BookingError::DeleteRejected(id));
        }
        self.lock()?.cancel_interview(id)
    }
}
