//! Days, appointments and interviewers, as served by the scheduler API.

use crate::appointment::error::BookingError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppointmentId(pub u32);

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InterviewerId(pub u32);

impl fmt::Display for InterviewerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interviewer {
    pub id: InterviewerId,
    pub name: String,
    pub avatar: String,
}

/// A booking: who is interviewed and by whom.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Interview {
    pub student: String,
    pub interviewer: InterviewerId,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub time: String,
    pub interview: Option<Interview>,
}

impl Appointment {
    pub fn is_booked(&self) -> bool {
        self.interview.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Day {
    pub name: String,
    pub appointments: Vec<AppointmentId>,
    pub interviewers: Vec<InterviewerId>,
    /// Free appointments left on this day
    pub spots: usize,
}

/// Human-readable remaining-spots line for a day.
pub fn spots_label(spots: usize) -> String {
    match spots {
        0 => "no spots remaining".to_string(),
        1 => "1 spot remaining".to_string(),
        n => format!("{n} spots remaining"),
    }
}

/// In-memory view of the scheduler data.
///
/// Booking and cancelling keep each day's `spots` in step with its
/// appointments.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Schedule {
    days: Vec<Day>,
    appointments: BTreeMap<AppointmentId, Appointment>,
    interviewers: BTreeMap<InterviewerId, Interviewer>,
}

impl Schedule {
    /// Assemble a schedule; spots are recomputed from the appointments.
    pub fn new(
        days: Vec<Day>,
        appointments: Vec<Appointment>,
        interviewers: Vec<Interviewer>,
    ) -> Self {
        let mut schedule = Self {
            days,
            appointments: appointments.into_iter().map(|a| (a.id, a)).collect(),
            interviewers: interviewers.into_iter().map(|i| (i.id, i)).collect(),
        };
        for index in 0..schedule.days.len() {
            let spots = schedule.free_slots(&schedule.days[index]);
            schedule.days[index].spots = spots;
        }
        schedule
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn day(&self, name: &str) -> Option<&Day> {
        self.days.iter().find(|d| d.name == name)
    }

    pub fn appointment(&self, id: AppointmentId) -> Option<&Appointment> {
        self.appointments.get(&id)
    }

    pub fn interviewer(&self, id: InterviewerId) -> Option<&Interviewer> {
        self.interviewers.get(&id)
    }

    /// Appointments of a day in the order the day lists them.
    pub fn appointments_for_day(&self, name: &str) -> Vec<&Appointment> {
        self.day(name)
            .map(|day| {
                day.appointments
                    .iter()
                    .filter_map(|id| self.appointments.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn interviewers_for_day(&self, name: &str) -> Vec<&Interviewer> {
        self.day(name)
            .map(|day| {
                day.interviewers
                    .iter()
                    .filter_map(|id| self.interviewers.get(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Resolve the interviewer of a booking.
    pub fn interview_details<'a>(
        &'a self,
        interview: &'a Interview,
    ) -> Option<(&'a str, &'a Interviewer)> {
        self.interviewer(interview.interviewer)
            .map(|interviewer| (interview.student.as_str(), interviewer))
    }

    /// Store a booking, replacing any existing one for the appointment.
    pub fn book_interview(
        &mut self,
        id: AppointmentId,
        interview: Interview,
    ) -> Result<(), BookingError> {
        if !self.interviewers.contains_key(&interview.interviewer) {
            return Err(BookingError::UnknownInterviewer(interview.interviewer));
        }
        let appointment = self
            .appointments
            .get_mut(&id)
            .ok_or(BookingError::UnknownAppointment(id))?;
        appointment.interview = Some(interview);
        self.refresh_spots(id);
        Ok(())
    }

    /// Remove the booking of an appointment. Cancelling a free slot is allowed.
    pub fn cancel_interview(&mut self, id: AppointmentId) -> Result<(), BookingError> {
        let appointment = self
            .appointments
            .get_mut(&id)
            .ok_or(BookingError::UnknownAppointment(id))?;
        appointment.interview = None;
        self.refresh_spots(id);
        Ok(())
    }

    fn free_slots(&self, day: &Day) -> usize {
        day.appointments
            .iter()
            .filter_map(|id| self.appointments.get(id))
            .filter(|a| !a.is_booked())
            .count()
    }

    fn refresh_spots(&mut self, changed: AppointmentId) {
        let Some(index) = self
            .days
            .iter()
            .position(|d| d.appointments.contains(&changed))
        else {
            return;
        };
        let spots = self.free_slots(&self.days[index]);
        self.days[index].spots = spots;
    }
}
