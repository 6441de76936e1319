/// Location sentinel marking a paid-time-off day.
pub const PTO_LOCATION: &str = "PTO";

/// Placeholder substituted with the `MM/DD/YYYY` query date in portal URLs.
pub const DATE_PLACEHOLDER: &str = "{date}";

pub const DEFAULT_PORTAL_URL_TEMPLATE: &str = const_str::concat!(
    "https://portal.providerscience.com/employee/schedule/?date=",
    DATE_PLACEHOLDER
);

pub const PRODUCT_NAME: &str = "shiftcal";
pub const PRODID: &str = const_str::concat!(
    "-//",
    PRODUCT_NAME,
    "//",
    PRODUCT_NAME,
    " ",
    env!("CARGO_PKG_VERSION"),
    "//EN"
);

/// File extension of the calendar written by the application.
pub const CALENDAR_FILE_EXTENSION: &str = "ics";
