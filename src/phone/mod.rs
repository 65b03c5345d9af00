//! Phone number formatting and validation for form inputs.
//!
//! - **countries**: the static dial-code table
//! - **format**: pure sanitize / format / validate / compose / parse operations
//! - **field**: per-input state that reformats as the user types or switches country
//!
//! Validation is intentionally lenient: every country accepts 7 to 15 digits,
//! regardless of how many placeholders its display pattern has.

pub mod countries;
pub mod field;
pub mod format;

pub use countries::{default_country, find_country, CountryPhoneSpec, COUNTRIES};
pub use field::{PhoneField, PhoneParseResult};
pub use format::{
    apply_format, compose_full_number, digits_only, parse_full_number, sanitize_input, validate,
    ParsedNumber, MAX_DIGITS, MIN_DIGITS,
};
