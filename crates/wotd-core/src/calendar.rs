use chrono::{Datelike, FixedOffset, NaiveDate, Utc};

/// Supplies "today" as a day of the year (1..=366)
pub trait DayOfYearSource: Send + Sync {
    fn day_of_year(&self) -> u32;
}

/// Wall clock at a fixed UTC offset
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCalendar {
    pub utc_offset_hours: i32,
}

impl SystemCalendar {
    pub fn new(utc_offset_hours: i32) -> Self {
        Self { utc_offset_hours }
    }

    pub fn today(&self) -> NaiveDate {
        let now = Utc::now();
        match FixedOffset::east_opt(self.utc_offset_hours * 3600) {
            Some(offset) => now.with_timezone(&offset).date_naive(),
            None => now.date_naive(),
        }
    }
}

impl DayOfYearSource for SystemCalendar {
    fn day_of_year(&self) -> u32 {
        day_of_year(self.today())
    }
}

/// Always reports the same day
#[derive(Debug, Clone, Copy)]
pub struct FixedDay(pub u32);

impl DayOfYearSource for FixedDay {
    fn day_of_year(&self) -> u32 {
        self.0
    }
}

pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ordinal_days() {
        assert_eq!(day_of_year(date(2025, 1, 1)), 1);
        assert_eq!(day_of_year(date(2025, 12, 31)), 365);
        assert_eq!(day_of_year(date(2024, 12, 31)), 366);
        assert_eq!(day_of_year(date(2024, 3, 1)), 61);
    }

    #[test]
    fn system_calendar_stays_in_range() {
        for offset in [-12, 0, 9, 14] {
            let day = SystemCalendar::new(offset).day_of_year();
            assert!((1..=366).contains(&day));
        }
    }

    #[test]
    fn out_of_range_offset_falls_back_to_utc() {
        let before = Utc::now().date_naive();
        let today = SystemCalendar::new(99).today();
        let after = Utc::now().date_naive();
        assert!(today == before || today == after);
    }
}
