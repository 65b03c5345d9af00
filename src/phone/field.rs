//! Stateful phone input field.

use super::countries::{default_country, CountryPhoneSpec};
use super::format::{apply_format, compose_full_number, parse_full_number, sanitize_input, validate};
use serde::Serialize;

/// Formatting verdict for the current field contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneParseResult {
    pub formatted_number: String,
    pub is_valid: bool,
    pub country: CountryPhoneSpec,
}

/// One phone input on a form: the selected country plus what the user typed.
///
/// The buffer keeps the sanitized keystrokes, so switching country reformats
/// the same digits instead of clearing them. Validity is judged on everything
/// typed, so digits the display pattern has no room for make the number
/// invalid rather than being dropped silently.
#[derive(Debug, Clone)]
pub struct PhoneField {
    country: &'static CountryPhoneSpec,
    buffer: String,
    formatted: String,
    last_value: Option<String>,
}

impl Default for PhoneField {
    fn default() -> Self {
        Self::new(default_country())
    }
}

impl PhoneField {
    /// Create an empty field with `country` selected.
    pub fn new(country: &'static CountryPhoneSpec) -> Self {
        Self {
            country,
            buffer: String::new(),
            formatted: String::new(),
            last_value: None,
        }
    }

    /// Create a field pre-filled from a full number such as `"+44 965 090 2468"`.
    pub fn with_value(value: &str) -> Self {
        let mut field = Self::default();
        field.set_value(value);
        field
    }

    /// Currently selected country.
    pub fn country(&self) -> &'static CountryPhoneSpec {
        self.country
    }

    /// Handle a keystroke: `raw` is the whole text of the input after the edit.
    pub fn input(&mut self, raw: &str) -> PhoneParseResult {
        self.buffer = sanitize_input(raw);
        self.reformat();
        self.result()
    }

    /// Select another country, keeping the digits already entered.
    pub fn switch_country(&mut self, country: &'static CountryPhoneSpec) -> PhoneParseResult {
        self.country = country;
        self.reformat();
        self.result()
    }

    /// Load a full number (dial code included) into the field.
    ///
    /// Feeding the field its own [`full_number`](Self::full_number) back is a
    /// no-op, so a form that echoes the submitted value into the input does not
    /// trigger another normalization pass.
    pub fn set_value(&mut self, value: &str) -> PhoneParseResult {
        if self.last_value.as_deref() == Some(value) {
            return self.result();
        }

        let parsed = parse_full_number(value, Some(self.country));
        if let Some(country) = parsed.country {
            self.country = country;
        }
        self.buffer = sanitize_input(&parsed.remainder);
        self.reformat();
        self.last_value = Some(value.to_string());
        self.result()
    }

    /// The number as it would be submitted: dial code plus formatted digits.
    pub fn full_number(&self) -> String {
        compose_full_number(self.country.dial_code, &self.formatted)
    }

    /// Snapshot of the current formatting verdict.
    pub fn result(&self) -> PhoneParseResult {
        PhoneParseResult {
            formatted_number: self.formatted.clone(),
            is_valid: validate(&self.buffer),
            country: *self.country,
        }
    }

    fn reformat(&mut self) {
        self.formatted = apply_format(&self.buffer, self.country.pattern);
        self.last_value = Some(self.full_number());
    }
}
