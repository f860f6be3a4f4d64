//! Aggregate counts and date range over generated occurrences, for reporting.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{Occurrence, OperationType};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceSummary {
    pub total: usize,
    pub mobilizations: usize,
    pub cleanings: usize,
    pub demobilizations: usize,
    /// Earliest occurrence date, `None` when there are no occurrences.
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    /// Distinct cleaning dates, ascending.
    pub cleaning_dates: Vec<NaiveDate>,
}

impl OccurrenceSummary {
    #[must_use]
    pub const fn count(&self, operation_type: OperationType) -> usize {
        match operation_type {
            OperationType::Mobilization => self.mobilizations,
            OperationType::Cleaning => self.cleanings,
            OperationType::Demobilization => self.demobilizations,
        }
    }

    #[must_use]
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.first_date.zip(self.last_date)
    }
}

/// Summarizes occurrences in any order.
#[must_use]
pub fn summarize(occurrences: &[Occurrence]) -> OccurrenceSummary {
    let mut summary = OccurrenceSummary {
        total: occurrences.len(),
        ..OccurrenceSummary::default()
    };
    let mut cleaning_dates = BTreeSet::new();

    for occurrence in occurrences {
        let date = occurrence.date();
        match occurrence.operation_type {
            OperationType::Mobilization => summary.mobilizations += 1,
            OperationType::Cleaning => {
                summary.cleanings += 1;
                cleaning_dates.insert(date);
            }
            OperationType::Demobilization => summary.demobilizations += 1,
        }
        summary.first_date = Some(summary.first_date.map_or(date, |first| first.min(date)));
        summary.last_date = Some(summary.last_date.map_or(date, |last| last.max(date)));
    }

    summary.cleaning_dates = cleaning_dates.into_iter().collect();
    summary
}

impl fmt::Display for OccurrenceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} occurrences ({} mobilization, {} cleaning, {} demobilization)",
            self.total, self.mobilizations, self.cleanings, self.demobilizations
        )?;
        if let Some((first, last)) = self.date_range() {
            write!(f, " from {first} to {last}")?;
        }
        if !self.cleaning_dates.is_empty() {
            let dates: Vec<String> = self.cleaning_dates.iter().map(ToString::to_string).collect();
            write!(f, "; cleaning on {}", dates.join(", "))?;
        }
        Ok(())
    }
}
