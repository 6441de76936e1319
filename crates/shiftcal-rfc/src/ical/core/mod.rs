//! iCalendar core models (RFC 5545).
//!
//! Only the subset needed to publish calendars is modelled: the VCALENDAR
//! wrapper, VEVENTs, and TEXT / DATE / DATE-TIME values.

mod component;
mod datetime;
mod parameter;
mod property;
mod value;

pub use component::{Component, ComponentKind, ICalendar};
pub use datetime::DateTime;
pub use parameter::Parameter;
pub use property::{Property, names};
pub use value::{Date, Value};
