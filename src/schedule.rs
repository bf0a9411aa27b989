//! Weekly business-hours editor for salon operators.

use chrono::{NaiveTime, Weekday};

use crate::forms::ValidationError;

/// Monday first, like the editor lists them
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Segunda-feira",
        Weekday::Tue => "Terça-feira",
        Weekday::Wed => "Quarta-feira",
        Weekday::Thu => "Quinta-feira",
        Weekday::Fri => "Sexta-feira",
        Weekday::Sat => "Sábado",
        Weekday::Sun => "Domingo",
    }
}

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Selectable times: every half hour from 08:00 to 22:00
pub fn time_slots() -> Vec<NaiveTime> {
    (16..=44).map(|half_hours| hm(half_hours / 2, (half_hours % 2) * 30)).collect()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M").ok()
}

/// Which time of a day is being edited
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeField {
    Open,
    Close,
    BreakStart,
    BreakEnd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DaySchedule {
    pub enabled: bool,
    pub open: NaiveTime,
    pub close: NaiveTime,
    pub has_break: bool,
    pub break_start: NaiveTime,
    pub break_end: NaiveTime,
}

impl DaySchedule {
    fn weekday() -> Self {
        Self {
            enabled: true,
            open: hm(9, 0),
            close: hm(19, 0),
            has_break: true,
            break_start: hm(12, 0),
            break_end: hm(13, 0),
        }
    }

    fn short_day(enabled: bool) -> Self {
        Self {
            enabled,
            open: hm(9, 0),
            close: hm(16, 0),
            has_break: false,
            break_start: hm(12, 0),
            break_end: hm(13, 0),
        }
    }

    pub fn time(&self, field: TimeField) -> NaiveTime {
        match field {
            TimeField::Open => self.open,
            TimeField::Close => self.close,
            TimeField::BreakStart => self.break_start,
            TimeField::BreakEnd => self.break_end,
        }
    }

    /// "09:00 – 19:00", or "Fechado"
    pub fn summary(&self) -> String {
        if !self.enabled {
            return "Fechado".to_string();
        }
        format!("{} – {}", format_time(self.open), format_time(self.close))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekSchedule {
    days: [DaySchedule; 7],
}

impl Default for WeekSchedule {
    /// Mon–Fri 09:00–19:00 with a lunch break, Saturday until 16:00, closed Sunday
    fn default() -> Self {
        let weekday = DaySchedule::weekday();
        Self {
            days: [
                weekday,
                weekday,
                weekday,
                weekday,
                weekday,
                DaySchedule::short_day(true),
                DaySchedule::short_day(false),
            ],
        }
    }
}

impl WeekSchedule {
    pub fn day(&self, day: Weekday) -> &DaySchedule {
        &self.days[day.num_days_from_monday() as usize]
    }

    fn day_mut(&mut self, day: Weekday) -> &mut DaySchedule {
        &mut self.days[day.num_days_from_monday() as usize]
    }

    pub fn toggle_day(&mut self, day: Weekday) {
        let d = self.day_mut(day);
        d.enabled = !d.enabled;
    }

    pub fn toggle_break(&mut self, day: Weekday) {
        let d = self.day_mut(day);
        d.has_break = !d.has_break;
    }

    pub fn set_time(&mut self, day: Weekday, field: TimeField, time: NaiveTime) {
        let d = self.day_mut(day);
        match field {
            TimeField::Open => d.open = time,
            TimeField::Close => d.close = time,
            TimeField::BreakStart => d.break_start = time,
            TimeField::BreakEnd => d.break_end = time,
        }
    }

    /// Copy one day's schedule onto the six others
    pub fn copy_to_all(&mut self, source: Weekday) {
        let template = *self.day(source);
        self.days = [template; 7];
    }

    /// Enabled days must open before closing, and a break must sit inside
    /// opening hours. Reports the first offending day.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for day in WEEK {
            let d = self.day(day);
            if !d.enabled {
                continue;
            }
            if d.open >= d.close {
                return Err(ValidationError::ClosesBeforeOpening {
                    day: day_name(day),
                });
            }
            if d.has_break
                && (d.break_start >= d.break_end
                    || d.break_start < d.open
                    || d.break_end > d.close)
            {
                return Err(ValidationError::BreakOutsideHours {
                    day: day_name(day),
                });
            }
        }
        Ok(())
    }

    pub fn open_days(&self) -> usize {
        self.days.iter().filter(|d| d.enabled).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_cover_business_day_in_half_hours() {
        let slots = time_slots();
        assert_eq!(slots.len(), 29);
        assert_eq!(format_time(slots[0]), "08:00");
        assert_eq!(format_time(slots[1]), "08:30");
        assert_eq!(format_time(*slots.last().unwrap()), "22:00");
    }

    #[test]
    fn default_week_closes_on_sunday() {
        let week = WeekSchedule::default();
        assert_eq!(week.open_days(), 6);
        assert!(!week.day(Weekday::Sun).enabled);
        assert_eq!(week.day(Weekday::Sat).summary(), "09:00 – 16:00");
        assert!(week.validate().is_ok());
    }

    #[test]
    fn toggles_flip_single_day() {
        let mut week = WeekSchedule::default();
        week.toggle_day(Weekday::Sun);
        week.toggle_break(Weekday::Mon);
        assert!(week.day(Weekday::Sun).enabled);
        assert!(!week.day(Weekday::Mon).has_break);
        assert!(week.day(Weekday::Tue).has_break);
    }

    #[test]
    fn copy_to_all_duplicates_source_day() {
        let mut week = WeekSchedule::default();
        week.set_time(Weekday::Wed, TimeField::Close, hm(21, 0));
        week.copy_to_all(Weekday::Wed);
        for day in WEEK {
            assert_eq!(week.day(day), week.day(Weekday::Wed));
        }
        assert_eq!(week.open_days(), 7);
    }

    #[test]
    fn closing_before_opening_is_rejected() {
        let mut week = WeekSchedule::default();
        week.set_time(Weekday::Tue, TimeField::Close, hm(8, 30));
        assert_eq!(
            week.validate(),
            Err(ValidationError::ClosesBeforeOpening {
                day: "Terça-feira"
            })
        );
    }

    #[test]
    fn break_must_fit_inside_hours() {
        let mut week = WeekSchedule::default();
        week.set_time(Weekday::Fri, TimeField::BreakEnd, hm(20, 0));
        assert_eq!(
            week.validate(),
            Err(ValidationError::BreakOutsideHours {
                day: "Sexta-feira"
            })
        );

        // Disabled days are not checked
        week.toggle_day(Weekday::Fri);
        assert!(week.validate().is_ok());
    }

    #[test]
    fn parse_time_accepts_slot_labels() {
        assert_eq!(parse_time("12:30"), Some(hm(12, 30)));
        assert_eq!(parse_time("noon"), None);
    }
}
