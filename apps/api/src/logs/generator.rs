//! Log Generator: one daily log sheet per planned duty day.
//!
//! A failed render never fails the trip: the sheet keeps its numeric totals and gets a
//! placeholder image instead.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::hos::models::DutyDay;
use crate::hos::validation::ValidationError;
use crate::logs::renderer::{DriverInfo, DutyTotals, SheetRenderer};
use crate::logs::segments::DutySegmentBuilder;

/// Base64 of a 1×1 PNG, used when a sheet cannot be rendered.
pub const PLACEHOLDER_IMAGE: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSheet {
    pub day: u32,
    pub date: NaiveDate,
    pub driving_hours: f64,
    pub on_duty_hours: f64,
    pub off_duty_hours: f64,
    pub sleeper_berth_hours: f64,
    /// Base64-encoded PNG.
    pub log_image: String,
}

pub struct LogGenerator {
    renderer: Box<dyn SheetRenderer>,
}

impl LogGenerator {
    pub fn new(renderer: Box<dyn SheetRenderer>) -> Self {
        Self { renderer }
    }

    /// Sheets for `days`, dated consecutively from `start_date`.
    ///
    /// Fails if a sheet's date would fall past the last representable calendar day.
    pub fn generate_logs(
        &self,
        days: &[DutyDay],
        start_date: NaiveDate,
        driver: &DriverInfo,
    ) -> Result<Vec<LogSheet>, ValidationError> {
        days.iter()
            .enumerate()
            .map(|(offset, day)| -> Result<LogSheet, ValidationError> {
                let date = start_date
                    .checked_add_days(Days::new(offset as u64))
                    .ok_or_else(|| {
                        ValidationError::new(
                            "start_date",
                            format!("day {} of the trip falls outside the calendar", day.index),
                        )
                    })?;
                Ok(self.generate_sheet(day, date, driver))
            })
            .collect()
    }

    fn generate_sheet(&self, day: &DutyDay, date: NaiveDate, driver: &DriverInfo) -> LogSheet {
        let segments = DutySegmentBuilder::for_day(day);

        let (totals, log_image) = match self.renderer.render(&segments, date, driver, &day.remarks) {
            Ok(rendered) => {
                debug!(day = day.index, bytes = rendered.png.len(), "Log sheet rendered");
                (rendered.totals, STANDARD.encode(rendered.png))
            }
            Err(e) => {
                warn!(day = day.index, "Log sheet rendering failed, using placeholder: {e}");
                (
                    DutyTotals::from_segments(&segments),
                    PLACEHOLDER_IMAGE.to_string(),
                )
            }
        };

        LogSheet {
            day: day.index,
            date,
            driving_hours: totals.driving,
            on_duty_hours: totals.on_duty,
            off_duty_hours: totals.off_duty,
            sleeper_berth_hours: totals.sleeper,
            log_image,
        }
    }
}
