//! Date and timestamp generators.
//!
//! All windows are computed relative to a reference `now` handed in by the
//! caller so the generator can pin the clock.

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};
use rand::Rng;

/// Oldest age a generated profile can have.
pub const MAX_AGE_YEARS: u32 = 115;

/// First day of the decade `today` falls into.
pub fn start_of_decade(today: NaiveDate) -> NaiveDate {
    let year = today.year() - today.year().rem_euclid(10);
    NaiveDate::from_yo_opt(year, 1).unwrap_or(today)
}

/// First instant of the year `now` falls into.
pub fn start_of_year(now: NaiveDateTime) -> NaiveDateTime {
    NaiveDate::from_yo_opt(now.year(), 1)
        .map(|d| d.and_time(NaiveTime::MIN))
        .unwrap_or(now)
}

/// Pick a date uniformly in `[start, end]`.
pub fn generate_date_between<R: Rng + ?Sized>(
    rng: &mut R,
    start: NaiveDate,
    end: NaiveDate,
) -> NaiveDate {
    let days = (end - start).num_days();
    if days <= 0 {
        return start;
    }
    let offset = rng.random_range(0..=days);
    start + chrono::Duration::days(offset)
}

/// Generate a creation date within the current decade, up to today.
///
/// The value is a midnight timestamp because the target columns are
/// `TIMESTAMP` while only the date part is meaningful.
pub fn generate_date_this_decade<R: Rng + ?Sized>(
    rng: &mut R,
    now: NaiveDateTime,
) -> NaiveDateTime {
    let today = now.date();
    generate_date_between(rng, start_of_decade(today), today).and_time(NaiveTime::MIN)
}

/// Generate a timestamp between the start of the current year and `now`.
pub fn generate_datetime_this_year<R: Rng + ?Sized>(
    rng: &mut R,
    now: NaiveDateTime,
) -> NaiveDateTime {
    let start = start_of_year(now);
    let seconds = (now - start).num_seconds();
    if seconds <= 0 {
        return start;
    }
    start + chrono::Duration::seconds(rng.random_range(0..=seconds))
}

/// Generate a date of birth between `MAX_AGE_YEARS` ago and today.
pub fn generate_birthdate<R: Rng + ?Sized>(rng: &mut R, today: NaiveDate) -> NaiveDate {
    let earliest = today
        .checked_sub_months(Months::new(MAX_AGE_YEARS * 12))
        .unwrap_or(NaiveDate::MIN);
    generate_date_between(rng, earliest, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_start_of_decade() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(
            start_of_decade(today),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );

        let boundary = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
        assert_eq!(start_of_decade(boundary), boundary);
    }

    #[test]
    fn test_generate_date_this_decade() {
        let mut rng = StdRng::seed_from_u64(42);
        let lower = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();

        for _ in 0..200 {
            let value = generate_date_this_decade(&mut rng, now());
            assert!(value.date() >= lower);
            assert!(value.date() <= now().date());
            assert_eq!(value.time(), NaiveTime::MIN);
        }
    }

    #[test]
    fn test_generate_datetime_this_year() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..200 {
            let value = generate_datetime_this_year(&mut rng, now());
            assert_eq!(value.year(), 2026);
            assert!(value <= now());
        }
    }

    #[test]
    fn test_datetime_this_year_at_new_year() {
        let mut rng = StdRng::seed_from_u64(42);
        let new_year = NaiveDate::from_ymd_opt(2027, 1, 1)
            .unwrap()
            .and_time(NaiveTime::MIN);

        assert_eq!(generate_datetime_this_year(&mut rng, new_year), new_year);
    }

    #[test]
    fn test_generate_birthdate() {
        let mut rng = StdRng::seed_from_u64(42);
        let today = now().date();
        let earliest = NaiveDate::from_ymd_opt(1911, 10, 19).unwrap();

        for _ in 0..200 {
            let birthdate = generate_birthdate(&mut rng, today);
            assert!(birthdate >= earliest);
            assert!(birthdate <= today);
        }
    }
}
