pub mod display;
pub mod locale;
