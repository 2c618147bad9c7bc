//! Appointment slots built on the mode stack.
//!
//! This is the caller side of the mode stack: the booking flow that
//! decides which mode follows which, plus the small data model it needs.
//! Writes go through the `BookingApi` capability as Stillwater effects, so
//! the slot itself stays free of I/O.

pub mod api;
pub mod error;
pub mod form;
pub mod mode;
pub mod schedule;
pub mod slot;

pub use api::{BookingApi, InMemoryBookings};
pub use error::{BookingError, FormError, SlotError};
pub use form::InterviewDraft;
pub use mode::AppointmentMode;
pub use schedule::{
    spots_label, Appointment, AppointmentId, Day, Interview, Interviewer, InterviewerId, Schedule,
};
pub use slot::AppointmentSlot;
