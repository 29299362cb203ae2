pub mod appointment;
pub mod query;
pub mod slot;
