//! Fixed geometry of the driver's daily log sheet.
//!
//! All coordinates are pixels on the output canvas. The grid has four status rows
//! (off duty, sleeper berth, driving, on duty) and 24 hour columns of 4 quarter-hour ticks.

use crate::hos::models::{DutyStatus, HOURS_PER_DAY};

#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    pub width: u32,
    pub height: u32,
    pub margin: i32,
    pub grid_x: i32,
    pub grid_y: i32,
    pub grid_width: i32,
    pub grid_height: i32,
    /// Top of the driver/vehicle info boxes.
    pub info_y: i32,
}

/// The standard 1200×800 sheet: a 960×320 grid at (150, 250), 40px per hour, 80px per row.
pub fn default_sheet_layout() -> SheetLayout {
    SheetLayout {
        width: 1200,
        height: 800,
        margin: 50,
        grid_x: 150,
        grid_y: 250,
        grid_width: 960,
        grid_height: 320,
        info_y: 100,
    }
}

impl SheetLayout {
    pub fn hour_width(&self) -> f64 {
        f64::from(self.grid_width) / HOURS_PER_DAY
    }

    pub fn row_height(&self) -> f64 {
        f64::from(self.grid_height) / DutyStatus::ALL.len() as f64
    }

    /// Canvas x of `hour` on the grid's time axis.
    pub fn x_for_hour(&self, hour: f64) -> i32 {
        let x = f64::from(self.grid_x) + hour * self.hour_width();
        x.round() as i32
    }

    pub fn row_top(&self, row: usize) -> i32 {
        (f64::from(self.grid_y) + row as f64 * self.row_height()).round() as i32
    }

    /// Vertical midpoint of the status row; the y of that status's duty line.
    pub fn row_mid_y(&self, status: DutyStatus) -> i32 {
        let mid = f64::from(self.grid_y) + (status.row() as f64 + 0.5) * self.row_height();
        mid.round() as i32
    }

    pub fn grid_bottom(&self) -> i32 {
        self.grid_y + self.grid_height
    }

    pub fn grid_right(&self) -> i32 {
        self.grid_x + self.grid_width
    }
}
