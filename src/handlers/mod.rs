pub mod next_appointment;
pub mod webhook;
