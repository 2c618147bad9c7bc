//! Walk one slot through a booking, a failed edit and a deletion.
//!
//! Run with `RUST_LOG=visual_mode=debug cargo run --example booking_flow`
//! to see every mode change.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use visual_mode::appointment::{
    spots_label, Appointment, AppointmentId, AppointmentSlot, Day, InMemoryBookings, Interviewer,
    InterviewerId, Schedule, SlotError,
};

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn print_day(bookings: &InMemoryBookings) {
    if let Ok(schedule) = bookings.snapshot() {
        for day in schedule.days() {
            println!("  {}: {}", day.name, spots_label(day.spots));
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), SlotError> {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let schedule = Schedule::new(
        vec![Day {
            name: "Monday".to_string(),
            appointments: vec![AppointmentId(1)],
            interviewers: vec![InterviewerId(1)],
            spots: 0,
        }],
        vec![Appointment {
            id: AppointmentId(1),
            time: "12pm".to_string(),
            interview: None,
        }],
        vec![Interviewer {
            id: InterviewerId(1),
            name: "Sylvia Palmer".to_string(),
            avatar: "https://i.imgur.com/LpaY82x.png".to_string(),
        }],
    );
    let bookings = InMemoryBookings::new(schedule);

    let mut slot = AppointmentSlot::for_appointment(&Appointment {
        id: AppointmentId(1),
        time: "12pm".to_string(),
        interview: None,
    });
    slot.subscribe(|change| {
        println!("  [{}] {} -> {}", change.kind, change.from, change.to)
    });

    println!("Booking 12pm:");
    slot.add()?;
    slot.set_student("Lydia Miller-Jones")?;
    slot.select_interviewer(InterviewerId(1))?;
    slot.submit(&bookings).await?;
    print_day(&bookings);

    println!("Editing with the backend down:");
    bookings.fail_next_save();
    slot.edit()?;
    slot.set_student("Archie Cohen")?;
    slot.submit(&bookings).await?;
    slot.dismiss_error()?;

    println!("Deleting:");
    slot.delete()?;
    slot.confirm_with(&bookings).await?;
    print_day(&bookings);

    Ok(())
}
