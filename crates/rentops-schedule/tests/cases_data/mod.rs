use chrono::{NaiveDateTime, NaiveTime};
use rentops_schedule::{Event, EventType, Weekday, WeekdaySet};

pub struct GenerationCase {
    pub name: &'static str,
    pub event_type: &'static str,
    pub mobilization: &'static str,
    pub demobilization: &'static str,
    pub cleaning_time: &'static str,
    pub weekdays: &'static [u8],
    /// `(operation type, instant)` pairs in output order.
    pub expected: Option<&'static [(&'static str, &'static str)]>,
    pub expected_len: Option<usize>,
}

impl GenerationCase {
    pub fn event(&self) -> Event {
        let weekdays: WeekdaySet = self
            .weekdays
            .iter()
            .filter_map(|&index| Weekday::from_index(index))
            .collect();

        Event::new(
            self.name,
            EventType::parse(self.event_type),
            instant(self.mobilization),
            instant(self.demobilization),
        )
        .with_cleaning_time(
            NaiveTime::parse_from_str(self.cleaning_time, "%H:%M").expect("case cleaning time"),
        )
        .with_cleaning_weekdays(weekdays)
    }
}

pub fn instant(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").expect("case instant")
}

#[expect(clippy::too_many_lines)]
pub fn generation_cases() -> Vec<GenerationCase> {
    vec![
        GenerationCase {
            name: "intermittent_mon_fri_week",
            event_type: "INTERMITTENT",
            mobilization: "2024-01-01T08:00:00",
            demobilization: "2024-01-08T18:00:00",
            cleaning_time: "19:00",
            weekdays: &[1, 5],
            expected: Some(&[
                ("MOBILIZATION", "2024-01-01T08:00:00"),
                ("CLEANING", "2024-01-01T19:00:00"),
                ("CLEANING", "2024-01-05T19:00:00"),
                ("DEMOBILIZATION", "2024-01-08T18:00:00"),
                ("CLEANING", "2024-01-08T19:00:00"),
            ]),
            expected_len: None,
        },
        GenerationCase {
            name: "continuous_mon_fri_week",
            event_type: "CONTINUOUS",
            mobilization: "2024-01-01T08:00:00",
            demobilization: "2024-01-08T18:00:00",
            cleaning_time: "19:00",
            weekdays: &[1, 5],
            expected: Some(&[
                ("MOBILIZATION", "2024-01-01T08:00:00"),
                ("CLEANING", "2024-01-05T19:00:00"),
                ("DEMOBILIZATION", "2024-01-08T18:00:00"),
            ]),
            expected_len: None,
        },
        GenerationCase {
            name: "unique_two_day_rental",
            event_type: "UNIQUE",
            mobilization: "2024-01-01T08:00:00",
            demobilization: "2024-01-02T16:00:00",
            cleaning_time: "17:30",
            weekdays: &[],
            expected: Some(&[
                ("MOBILIZATION", "2024-01-01T08:00:00"),
                ("DEMOBILIZATION", "2024-01-02T16:00:00"),
                ("CLEANING", "2024-01-02T17:30:00"),
            ]),
            expected_len: None,
        },
        GenerationCase {
            name: "unique_cleaning_before_teardown",
            event_type: "UNIQUE",
            mobilization: "2024-05-10T07:00:00",
            demobilization: "2024-05-10T22:00:00",
            cleaning_time: "21:00",
            weekdays: &[],
            expected: Some(&[
                ("MOBILIZATION", "2024-05-10T07:00:00"),
                ("CLEANING", "2024-05-10T21:00:00"),
                ("DEMOBILIZATION", "2024-05-10T22:00:00"),
            ]),
            expected_len: None,
        },
        GenerationCase {
            name: "intermittent_leap_february_weekends",
            event_type: "INTERMITTENT",
            mobilization: "2024-02-01T09:00:00",
            demobilization: "2024-02-29T17:00:00",
            cleaning_time: "10:00",
            weekdays: &[0, 6],
            // 3-4, 10-11, 17-18, 24-25
            expected: None,
            expected_len: Some(10),
        },
        GenerationCase {
            name: "continuous_every_day_across_year_end",
            event_type: "CONTINUOUS",
            mobilization: "2023-12-30T12:00:00",
            demobilization: "2024-01-03T12:00:00",
            cleaning_time: "08:00",
            weekdays: &[0, 1, 2, 3, 4, 5, 6],
            expected: Some(&[
                ("MOBILIZATION", "2023-12-30T12:00:00"),
                ("CLEANING", "2023-12-31T08:00:00"),
                ("CLEANING", "2024-01-01T08:00:00"),
                ("CLEANING", "2024-01-02T08:00:00"),
                ("DEMOBILIZATION", "2024-01-03T12:00:00"),
            ]),
            expected_len: None,
        },
        GenerationCase {
            name: "intermittent_early_cleaning_precedes_setup",
            event_type: "INTERMITTENT",
            mobilization: "2024-03-04T09:00:00",
            demobilization: "2024-03-06T09:00:00",
            cleaning_time: "06:00",
            weekdays: &[1, 3],
            expected: Some(&[
                ("CLEANING", "2024-03-04T06:00:00"),
                ("MOBILIZATION", "2024-03-04T09:00:00"),
                ("CLEANING", "2024-03-06T06:00:00"),
                ("DEMOBILIZATION", "2024-03-06T09:00:00"),
            ]),
            expected_len: None,
        },
        GenerationCase {
            name: "continuous_quarter_wednesdays",
            event_type: "CONTINUOUS",
            mobilization: "2024-04-01T08:00:00",
            demobilization: "2024-06-30T18:00:00",
            cleaning_time: "14:00",
            weekdays: &[3],
            // Wednesdays 2024-04-03 through 2024-06-26
            expected: None,
            expected_len: Some(15),
        },
    ]
}
