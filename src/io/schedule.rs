//! Calendar handling for daily grids
//!
//! Grids are numbered by day code: the number of days since the first published grid.

use crate::io::configuration::{DATE_FORMAT, DEFAULT_DATE, FIRST_GRID_DATE, PUBLICATION_LAG_DAYS};
use crate::io::error::{Result, invalid_parameter};
use chrono::{Days, NaiveDate};

/// Date of the grid with day code 0
///
/// # Errors
///
/// Returns `SolveError::InvalidParameter` if the configured date is not a calendar date
pub fn first_grid_date() -> Result<NaiveDate> {
    let (year, month, day) = FIRST_GRID_DATE;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        invalid_parameter(
            "first grid date",
            &format!("{year}-{month}-{day}"),
            &"not a calendar date",
        )
    })
}

/// Turn a date argument into a calendar date
///
/// `today` (any case) selects the newest published grid, which is the one for the
/// previous day. Anything else must follow [`DATE_FORMAT`].
///
/// # Errors
///
/// Returns `SolveError::InvalidParameter` if the argument cannot be parsed
pub fn resolve_date(argument: &str, today: NaiveDate) -> Result<NaiveDate> {
    if argument.eq_ignore_ascii_case(DEFAULT_DATE) {
        return today
            .checked_sub_days(Days::new(PUBLICATION_LAG_DAYS))
            .ok_or_else(|| invalid_parameter("date", &argument, &"date out of range"));
    }
    NaiveDate::parse_from_str(argument.trim(), DATE_FORMAT)
        .map_err(|error| invalid_parameter("date", &argument, &format!("{error}, expected dd-mm-yyyy")))
}

/// Days elapsed between the first grid and `date`
///
/// # Errors
///
/// Returns `SolveError::InvalidParameter` for dates before the first grid
pub fn day_code(date: NaiveDate) -> Result<i64> {
    let first = first_grid_date()?;
    let days = date.signed_duration_since(first).num_days();
    if days < 0 {
        return Err(invalid_parameter(
            "date",
            &format_date(date),
            &format!("no grids were published before {}", format_date(first)),
        ));
    }
    Ok(days)
}

/// Render a date the way it is accepted on the command line
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
