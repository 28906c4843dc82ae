//! Log Sheet Renderer: draws one day's duty segments as a driver's daily log.
//!
//! The sheet has a header (title, 24-hour caption), the driver/vehicle info boxes, the
//! 24-hour grid with one horizontal duty line per segment, a remarks box and the
//! totals footer. Output is a PNG.
//!
//! Text uses the font embedded in `text`, so rendering has no font substitution and
//! identical input yields byte-identical PNG output.

use std::io::Cursor;

use chrono::NaiveDate;
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hos::models::{DutySegment, DutyStatus};
use crate::logs::text::TextPainter;
use crate::logs::layout::SheetLayout;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const GRAY: Rgb<u8> = Rgb([128, 128, 128]);
const LIGHT_GRAY: Rgb<u8> = Rgb([211, 211, 211]);
const DUTY_LINE: Rgb<u8> = Rgb([0, 128, 0]);

const TITLE_PX: f32 = 24.0;
const TEXT_PX: f32 = 14.0;

const DRIVING_STROKE: u32 = 4;
const DUTY_STROKE: u32 = 3;
const TRANSITION_STROKE: u32 = 2;

pub const MAX_REMARKS: usize = 4;

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Driver and vehicle details printed in the sheet's info boxes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverInfo {
    pub name: String,
    pub carrier: String,
    pub truck: String,
    pub from: String,
    pub to: String,
}

impl Default for DriverInfo {
    fn default() -> Self {
        Self {
            name: "Driver".to_string(),
            carrier: "-".to_string(),
            truck: "-".to_string(),
            from: "-".to_string(),
            to: "-".to_string(),
        }
    }
}

/// Hours per duty status for one sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DutyTotals {
    pub driving: f64,
    pub on_duty: f64,
    pub sleeper: f64,
    pub off_duty: f64,
}

impl DutyTotals {
    pub fn from_segments(segments: &[DutySegment]) -> Self {
        segments.iter().fold(Self::default(), |mut totals, s| {
            match s.status {
                DutyStatus::Driving => totals.driving += s.duration_hours,
                DutyStatus::OnDutyNotDriving => totals.on_duty += s.duration_hours,
                DutyStatus::SleeperBerth => totals.sleeper += s.duration_hours,
                DutyStatus::OffDuty => totals.off_duty += s.duration_hours,
            }
            totals
        })
    }

    pub fn for_status(&self, status: DutyStatus) -> f64 {
        match status {
            DutyStatus::OffDuty => self.off_duty,
            DutyStatus::SleeperBerth => self.sleeper,
            DutyStatus::Driving => self.driving,
            DutyStatus::OnDutyNotDriving => self.on_duty,
        }
    }

    pub fn sum(&self) -> f64 {
        self.driving + self.on_duty + self.sleeper + self.off_duty
    }
}

#[derive(Debug, Clone)]
pub struct RenderedLog {
    pub png: Vec<u8>,
    pub totals: DutyTotals,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("sheet font could not be loaded: {0}")]
    Font(#[from] ab_glyph::InvalidFont),
}

/// Anything that can turn a day's segments into a log-sheet image.
pub trait SheetRenderer: Send + Sync {
    fn render(
        &self,
        segments: &[DutySegment],
        date: NaiveDate,
        driver: &DriverInfo,
        remarks: &[String],
    ) -> Result<RenderedLog, RenderError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Renderer
// ────────────────────────────────────────────────────────────────────────────

pub struct LogSheetRenderer {
    layout: SheetLayout,
}

impl LogSheetRenderer {
    pub fn new(layout: SheetLayout) -> Self {
        Self { layout }
    }

    /// Draws the full sheet onto a fresh canvas.
    pub fn draw(
        &self,
        pen: &TextPainter<'_>,
        segments: &[DutySegment],
        date: NaiveDate,
        driver: &DriverInfo,
        remarks: &[String],
        totals: &DutyTotals,
    ) -> RgbImage {
        let mut image = RgbImage::from_pixel(self.layout.width, self.layout.height, WHITE);
        self.draw_header(pen, &mut image);
        self.draw_info_section(pen, &mut image, date, driver);
        self.draw_grid(pen, &mut image);
        self.draw_duty_lines(&mut image, segments);
        self.draw_remarks(pen, &mut image, remarks);
        self.draw_totals(pen, &mut image, totals);
        image
    }

    fn draw_header(&self, pen: &TextPainter<'_>, image: &mut RgbImage) {
        let cx = self.layout.width as i32 / 2;
        pen.draw_centered(image, cx, 30, "DRIVER'S DAILY LOG", TITLE_PX, BLACK);
        pen.draw_centered(
            image,
            cx,
            58,
            "(ONE CALENDAR DAY - 24 HOURS)",
            TEXT_PX,
            BLACK,
        );
    }

    fn draw_info_section(
        &self,
        pen: &TextPainter<'_>,
        image: &mut RgbImage,
        date: NaiveDate,
        driver: &DriverInfo,
    ) {
        let left = self.layout.margin;
        let y = self.layout.info_y;
        let date_text = date.format("%m/%d/%Y").to_string();

        let boxes: [(i32, i32, i32, &str, &str); 6] = [
            (left, 300, y, "DATE:", &date_text),
            (320, 600, y, "DRIVER:", &driver.name),
            (left, 300, y + 40, "FROM:", &driver.from),
            (320, 600, y + 40, "TO:", &driver.to),
            (left, 400, y + 80, "CARRIER:", &driver.carrier),
            (420, 700, y + 80, "TRUCK/TRAILER:", &driver.truck),
        ];

        for (x0, x1, top, label, value) in boxes {
            labelled_box(pen, image, x0, x1, top, label, value);
        }
    }

    fn draw_grid(&self, pen: &TextPainter<'_>, image: &mut RgbImage) {
        let layout = &self.layout;
        let top = layout.grid_y;
        let bottom = layout.grid_bottom();

        for hour in 0..24 {
            for quarter in 1..4 {
                let x = layout.x_for_hour(f64::from(hour) + f64::from(quarter) / 4.0);
                vline(image, x, top, bottom, 1, LIGHT_GRAY);
            }
        }

        for hour in 0..=24 {
            let x = layout.x_for_hour(f64::from(hour));
            let major = hour % 6 == 0;
            let (stroke, color) = if major { (2, BLACK) } else { (1, GRAY) };
            vline(image, x, top, bottom, stroke, color);

            if hour < 24 {
                let cx = layout.x_for_hour(f64::from(hour) + 0.5);
                pen.draw_centered(image, cx, top - 12, &hour.to_string(), TEXT_PX, BLACK);
            }
        }

        let rows = DutyStatus::ALL.len();
        for row in 0..=rows {
            let y = layout.row_top(row);
            let stroke = if row == 0 || row == rows { 2 } else { 1 };
            hline(image, layout.grid_x, layout.grid_right(), y, stroke, BLACK);
        }

        for status in DutyStatus::ALL {
            let lines = row_label_lines(status);
            let line_height = 18;
            let block = line_height * lines.len() as i32 - 4;
            let mut y = layout.row_mid_y(status) - block / 2;
            for line in lines {
                pen.draw(image, layout.margin + 2, y, line, TEXT_PX, BLACK);
                y += line_height;
            }
        }
    }

    fn draw_duty_lines(&self, image: &mut RgbImage, segments: &[DutySegment]) {
        let layout = &self.layout;
        let mut previous: Option<&DutySegment> = None;

        for segment in segments {
            let y = layout.row_mid_y(segment.status);
            let x_start = layout.x_for_hour(segment.start_hour);
            let x_end = layout.x_for_hour(segment.end_hour());

            if let Some(prev) = previous {
                if prev.status != segment.status {
                    let y_prev = layout.row_mid_y(prev.status);
                    vline(
                        image,
                        x_start,
                        y_prev.min(y),
                        y_prev.max(y),
                        TRANSITION_STROKE,
                        DUTY_LINE,
                    );
                }
            }

            let stroke = if segment.status == DutyStatus::Driving {
                DRIVING_STROKE
            } else {
                DUTY_STROKE
            };
            hline(image, x_start, x_end, y, stroke, DUTY_LINE);
            previous = Some(segment);
        }
    }

    fn draw_remarks(&self, pen: &TextPainter<'_>, image: &mut RgbImage, remarks: &[String]) {
        let layout = &self.layout;
        let top = layout.grid_bottom() + 40;
        let right = layout.grid_right() - 250;
        hollow_rect(image, layout.margin, top, right, top + 100, BLACK);
        pen.draw(image, layout.margin + 5, top + 6, "REMARKS:", TEXT_PX, BLACK);

        let max_width = (right - layout.margin - 20).max(0) as u32;
        for (i, remark) in remarks.iter().take(MAX_REMARKS).enumerate() {
            let y = top + 26 + i as i32 * 18;
            let text = pen.fit(remark, TEXT_PX, max_width);
            pen.draw(image, layout.margin + 10, y, text, TEXT_PX, BLACK);
        }
    }

    fn draw_totals(&self, pen: &TextPainter<'_>, image: &mut RgbImage, totals: &DutyTotals) {
        let x = self.layout.grid_right() - 200;
        let mut y = self.layout.grid_bottom() + 40;
        pen.draw(image, x, y, "TOTAL HOURS", TEXT_PX, BLACK);

        y += 25;
        for status in DutyStatus::ALL {
            let line = format!("{}: {:.1}", status.label(), totals.for_status(status));
            pen.draw(image, x, y, &line, TEXT_PX, BLACK);
            y += 20;
        }
        let sum = format!("TOTAL: {:.1}", totals.sum());
        pen.draw(image, x, y, &sum, TEXT_PX, BLACK);
    }
}

impl SheetRenderer for LogSheetRenderer {
    fn render(
        &self,
        segments: &[DutySegment],
        date: NaiveDate,
        driver: &DriverInfo,
        remarks: &[String],
    ) -> Result<RenderedLog, RenderError> {
        let pen = TextPainter::embedded()?;
        let totals = DutyTotals::from_segments(segments);
        let image = self.draw(&pen, segments, date, driver, remarks, &totals);

        let mut png = Vec::new();
        image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
        Ok(RenderedLog { png, totals })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Drawing helpers
// ────────────────────────────────────────────────────────────────────────────

fn row_label_lines(status: DutyStatus) -> &'static [&'static str] {
    match status {
        DutyStatus::OffDuty => &["OFF DUTY"],
        DutyStatus::SleeperBerth => &["SLEEPER", "BERTH"],
        DutyStatus::Driving => &["DRIVING"],
        DutyStatus::OnDutyNotDriving => &["ON DUTY", "(NOT", "DRIVING)"],
    }
}

/// Horizontal stroke from `x0` to `x1` centered on `y`.
fn hline(image: &mut RgbImage, x0: i32, x1: i32, y: i32, stroke: u32, color: Rgb<u8>) {
    let width = (x1 - x0).max(1) as u32;
    let top = y - (stroke / 2) as i32;
    draw_filled_rect_mut(image, Rect::at(x0, top).of_size(width, stroke), color);
}

/// Vertical stroke from `y0` to `y1` centered on `x`.
fn vline(image: &mut RgbImage, x: i32, y0: i32, y1: i32, stroke: u32, color: Rgb<u8>) {
    let height = (y1 - y0).max(1) as u32;
    let left = x - (stroke / 2) as i32;
    draw_filled_rect_mut(image, Rect::at(left, y0).of_size(stroke, height), color);
}

fn hollow_rect(image: &mut RgbImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb<u8>) {
    let width = (x1 - x0).max(1) as u32;
    let height = (y1 - y0).max(1) as u32;
    draw_hollow_rect_mut(image, Rect::at(x0, y0).of_size(width, height), color);
}

/// A 30px-high outlined box with a label and its value, the value cut to fit.
fn labelled_box(
    pen: &TextPainter<'_>,
    image: &mut RgbImage,
    x0: i32,
    x1: i32,
    top: i32,
    label: &str,
    value: &str,
) {
    hollow_rect(image, x0, top, x1, top + 30, BLACK);
    let text_y = top + 8;
    pen.draw(image, x0 + 5, text_y, label, TEXT_PX, BLACK);

    let value_x = x0 + 5 + pen.width(label, TEXT_PX) as i32 + 8;
    let room = (x1 - value_x - 5).max(0) as u32;
    pen.draw(image, value_x, text_y, pen.fit(value, TEXT_PX, room), TEXT_PX, BLACK);
}
