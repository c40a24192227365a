use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use distance::DistanceCalculator;

use super::form_error::FormError;

pub const DEFAULT_DEPARTURE: (u32, u32) = (12, 0);
pub const DEFAULT_ELAPSED_MINUTES: u32 = 120;
pub const MAX_ELAPSED_MINUTES: u32 = 1000;

const DATE_FORMAT: &str = "%d-%m-%Y";
const TIME_FORMAT: &str = "%H:%M";

/// The details of one flight as entered in the console, plus the values derived from them
/// that a delay model consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightDetails {
    pub date: NaiveDate,
    pub carrier: String,
    pub origin: String,
    pub destination: String,
    pub departure: NaiveTime,
    pub scheduled_elapsed_minutes: u32,
    pub distance_miles: f64,
}

/// Raw answers to the console prompts. Empty fields take their defaults.
#[derive(Debug, Clone, Default)]
pub struct FlightForm<'a> {
    pub date: &'a str,
    pub carrier: &'a str,
    pub origin: &'a str,
    pub destination: &'a str,
    pub departure: &'a str,
    pub scheduled_elapsed: &'a str,
}

impl FlightDetails {
    /// Creates the flight details from the answers given in the console.
    ///
    /// Airport and carrier codes are trimmed and uppercased. Both airports must be in the
    /// calculator's table; an empty date means `today`.
    pub fn new_from_console(
        calculator: &DistanceCalculator,
        form: &FlightForm,
        today: NaiveDate,
    ) -> Result<Self, FormError> {
        let carrier = normalize_code(form.carrier);
        if !is_carrier_code(&carrier) {
            return Err(FormError::InvalidCarrier(form.carrier.trim().to_string()));
        }

        let origin = normalize_code(form.origin);
        let destination = normalize_code(form.destination);
        let distance_miles = match calculator.distance_miles(&origin, &destination) {
            Some(distance) => distance,
            None => {
                let unknown = if calculator.table().lookup(&origin).is_none() {
                    origin
                } else {
                    destination
                };
                return Err(FormError::UnknownAirport(unknown));
            }
        };

        Ok(FlightDetails {
            date: parse_date(form.date, today)?,
            carrier,
            origin,
            destination,
            departure: parse_departure(form.departure)?,
            scheduled_elapsed_minutes: parse_elapsed(form.scheduled_elapsed)?,
            distance_miles,
        })
    }

    /// ISO day of week, Monday = 1 through Sunday = 7.
    pub fn day_of_week(&self) -> u32 {
        self.date.weekday().number_from_monday()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Departure time as the HHMM integer used by the on-time performance data (e.g. 1435).
    pub fn dep_time(&self) -> u32 {
        self.departure.hour() * 100 + self.departure.minute()
    }

    pub fn dep_hour(&self) -> u32 {
        self.dep_time() / 100
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.day_of_week(), 6 | 7)
    }

    /// Departures from 05:00 through 12:59.
    pub fn is_morning_flight(&self) -> bool {
        (5..=12).contains(&self.dep_hour())
    }

    /// Lines shown to the user after the form is submitted.
    pub fn summary(&self) -> Vec<String> {
        vec![
            format!(
                "Flight {} {} -> {} on {}",
                self.carrier,
                self.origin,
                self.destination,
                self.date.format(DATE_FORMAT)
            ),
            format!("Distance: {:.1} miles", self.distance_miles),
            format!("DayOfWeek: {}", self.day_of_week()),
            format!("Month: {}", self.month()),
            format!("Day: {}", self.day()),
            format!("DepTime: {:04}", self.dep_time()),
            format!("DepHour: {}", self.dep_hour()),
            format!("IsWeekend: {}", u8::from(self.is_weekend())),
            format!("IsMorningFlight: {}", u8::from(self.is_morning_flight())),
            format!("CRSElapsedTime: {} min", self.scheduled_elapsed_minutes),
        ]
    }
}

/// Trims and uppercases a code typed by the user.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

fn is_carrier_code(code: &str) -> bool {
    (2..=3).contains(&code.len()) && code.bytes().all(|b| b.is_ascii_alphanumeric())
}

fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate, FormError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(today);
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| FormError::InvalidDate(input.to_string()))
}

fn parse_departure(input: &str) -> Result<NaiveTime, FormError> {
    let input = input.trim();
    if input.is_empty() {
        let (hour, minute) = DEFAULT_DEPARTURE;
        return NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| FormError::InvalidTime(format!("{:02}:{:02}", hour, minute)));
    }
    NaiveTime::parse_from_str(input, TIME_FORMAT)
        .map_err(|_| FormError::InvalidTime(input.to_string()))
}

fn parse_elapsed(input: &str) -> Result<u32, FormError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(DEFAULT_ELAPSED_MINUTES);
    }
    match input.parse::<u32>() {
        Ok(minutes) if minutes <= MAX_ELAPSED_MINUTES => Ok(minutes),
        _ => Err(FormError::ElapsedTimeOutOfRange(input.to_string())),
    }
}
