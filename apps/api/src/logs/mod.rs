// Driver's daily log sheets: segment synthesis and PNG rendering.
// Rendering is CPU-bound and runs on the blocking pool together with planning.

pub mod generator;
pub mod layout;
pub mod renderer;
pub mod segments;
pub mod text;

pub use generator::{LogGenerator, LogSheet};
pub use layout::default_sheet_layout;
pub use renderer::{DriverInfo, LogSheetRenderer};
