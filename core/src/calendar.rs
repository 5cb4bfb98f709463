// glucoin/core/src/calendar.rs

//! Month grid for the booking date picker.

use chrono::{Datelike, Duration, NaiveDate};

/// One month as week rows, Monday first. Cells outside the month are `None`
/// so the picker can render them as blanks.
pub fn month_grid(year: i32, month: u32) -> Option<Vec<[Option<NaiveDate>; 7]>> {
  let first = NaiveDate::from_ymd_opt(year, month, 1)?;
  let days_in_month = match month {
    12 => NaiveDate::from_ymd_opt(year + 1, 1, 1)?,
    _ => NaiveDate::from_ymd_opt(year, month + 1, 1)?,
  }
  .signed_duration_since(first)
  .num_days() as u32;

  let leading_blanks = first.weekday().num_days_from_monday() as usize;

  let mut weeks = Vec::with_capacity(6);
  let mut week: [Option<NaiveDate>; 7] = [None; 7];
  let mut column = leading_blanks;

  for day in 0..days_in_month {
    week[column] = Some(first + Duration::days(day as i64));
    column += 1;
    if column == 7 {
      weeks.push(week);
      week = [None; 7];
      column = 0;
    }
  }
  if column > 0 {
    weeks.push(week);
  }

  Some(weeks)
}
