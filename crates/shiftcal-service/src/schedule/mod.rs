//! Schedule extraction and normalization.
//!
//! A run walks one rendered grid per queried month. Each cell is classified
//! (`classify`), scheduled and off days become candidate `ShiftEvent`s
//! (`extract`), and the candidates of all months are corrected for overnight
//! shifts, deduplicated and ordered (`normalize`). `ScheduleEngine` drives the
//! whole pass against a `GridSource`; `export` turns the result into an
//! iCalendar document.

mod cell;
mod classify;
mod cursor;
mod engine;
mod error;
mod event;
pub mod export;
mod extract;
mod grid;
mod normalize;
mod time;
pub mod window;


pub use cell::{CalendarCell, CellMarkers};
pub use classify::{Classification, DayKind, classify};
pub use cursor::MonthCursor;
pub use engine::{ExtractionReport, ScheduleEngine, SkippedCell, SkippedMonth};
pub use error::ScheduleError;
pub use event::ShiftEvent;
pub use extract::extract;
pub use grid::{GridError, GridSource};
pub use normalize::{correct_overnight, normalize};
pub use time::parse_time;
