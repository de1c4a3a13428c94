/// Tag identifying this validator's outcomes to the host form-validation engine
pub const VALIDATION_TYPE: &str = "DATE_IN_PERIOD";

/// Message reported when a boundary fails to parse or the period is not ordered
pub const INVALID_PERIOD_MESSAGE: &str = "Invalid period";
/// Message reported when the input date is missing, unparseable or outside the period
pub const OUT_OF_PERIOD_MESSAGE: &str = "Invalid date between two dates";

/// Preferred component separator, checked first
pub const DASH_SEPARATOR: char = '-';
/// Fallback component separator, used when no dash is present
pub const SLASH_SEPARATOR: char = '/';

/// Number of components in a date string: year, month, day
pub const DATE_COMPONENTS: usize = 3;

/// Full English month names, lowercase, in calendar order
pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;
