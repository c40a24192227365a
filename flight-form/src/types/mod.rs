pub mod config;

pub mod flight_details;

pub mod form_error;

pub mod report;
