//! Country dial-code table.
//!
//! Adding a country is a data change: append an entry to [`COUNTRIES`].

use serde::Serialize;

/// Dialing and display rules for one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryPhoneSpec {
    /// ISO 3166-1 alpha-2 code
    pub code: &'static str,

    /// Display name
    pub name: &'static str,

    /// International calling prefix, including the leading '+'
    pub dial_code: &'static str,

    /// Digit-format pattern: '#' is a digit, anything else is a literal separator
    #[serde(rename = "digitFormatPattern")]
    pub pattern: Option<&'static str>,

    /// Flag emoji
    #[serde(rename = "flagGlyph")]
    pub flag: &'static str,
}

impl CountryPhoneSpec {
    const fn new(
        code: &'static str,
        name: &'static str,
        dial_code: &'static str,
        pattern: Option<&'static str>,
        flag: &'static str,
    ) -> Self {
        Self {
            code,
            name,
            dial_code,
            pattern,
            flag,
        }
    }

    /// Number of digits the pattern can hold, if it has one.
    pub fn pattern_capacity(&self) -> Option<usize> {
        self.pattern.map(|p| p.chars().filter(|&c| c == '#').count())
    }
}

/// All selectable countries. The first entry is the default selection.
pub static COUNTRIES: &[CountryPhoneSpec] = &[
    CountryPhoneSpec::new("US", "United States", "+1", Some("(###) ###-####"), "🇺🇸"),
    CountryPhoneSpec::new("CA", "Canada", "+1", Some("(###) ###-####"), "🇨🇦"),
    CountryPhoneSpec::new("GB", "United Kingdom", "+44", Some("### ### ####"), "🇬🇧"),
    CountryPhoneSpec::new("IE", "Ireland", "+353", Some("## ### ####"), "🇮🇪"),
    CountryPhoneSpec::new("AU", "Australia", "+61", Some("### ### ###"), "🇦🇺"),
    CountryPhoneSpec::new("NZ", "New Zealand", "+64", Some("## ### ####"), "🇳🇿"),
    CountryPhoneSpec::new("DE", "Germany", "+49", Some("### ########"), "🇩🇪"),
    CountryPhoneSpec::new("FR", "France", "+33", Some("# ## ## ## ##"), "🇫🇷"),
    CountryPhoneSpec::new("ES", "Spain", "+34", Some("### ### ###"), "🇪🇸"),
    CountryPhoneSpec::new("IT", "Italy", "+39", Some("### ### ####"), "🇮🇹"),
    CountryPhoneSpec::new("PT", "Portugal", "+351", Some("### ### ###"), "🇵🇹"),
    CountryPhoneSpec::new("NL", "Netherlands", "+31", Some("# ########"), "🇳🇱"),
    CountryPhoneSpec::new("BE", "Belgium", "+32", Some("### ## ## ##"), "🇧🇪"),
    CountryPhoneSpec::new("CH", "Switzerland", "+41", Some("## ### ## ##"), "🇨🇭"),
    CountryPhoneSpec::new("AT", "Austria", "+43", Some("### ######"), "🇦🇹"),
    CountryPhoneSpec::new("SE", "Sweden", "+46", Some("## ### ## ##"), "🇸🇪"),
    CountryPhoneSpec::new("NO", "Norway", "+47", Some("### ## ###"), "🇳🇴"),
    CountryPhoneSpec::new("DK", "Denmark", "+45", Some("## ## ## ##"), "🇩🇰"),
    CountryPhoneSpec::new("FI", "Finland", "+358", Some("## ### ####"), "🇫🇮"),
    CountryPhoneSpec::new("PL", "Poland", "+48", Some("### ### ###"), "🇵🇱"),
    CountryPhoneSpec::new("CZ", "Czechia", "+420", Some("### ### ###"), "🇨🇿"),
    CountryPhoneSpec::new("GR", "Greece", "+30", Some("### ### ####"), "🇬🇷"),
    CountryPhoneSpec::new("TR", "Turkey", "+90", Some("### ### ####"), "🇹🇷"),
    CountryPhoneSpec::new("UA", "Ukraine", "+380", Some("## ### ####"), "🇺🇦"),
    CountryPhoneSpec::new("RO", "Romania", "+40", Some("### ### ###"), "🇷🇴"),
    CountryPhoneSpec::new("HU", "Hungary", "+36", Some("## ### ####"), "🇭🇺"),
    CountryPhoneSpec::new("IL", "Israel", "+972", Some("## ### ####"), "🇮🇱"),
    CountryPhoneSpec::new("AE", "United Arab Emirates", "+971", Some("## ### ####"), "🇦🇪"),
    CountryPhoneSpec::new("SA", "Saudi Arabia", "+966", Some("## ### ####"), "🇸🇦"),
    CountryPhoneSpec::new("EG", "Egypt", "+20", Some("### ### ####"), "🇪🇬"),
    CountryPhoneSpec::new("ZA", "South Africa", "+27", Some("## ### ####"), "🇿🇦"),
    CountryPhoneSpec::new("NG", "Nigeria", "+234", Some("### ### ####"), "🇳🇬"),
    CountryPhoneSpec::new("KE", "Kenya", "+254", Some("### ######"), "🇰🇪"),
    CountryPhoneSpec::new("IN", "India", "+91", Some("#####-#####"), "🇮🇳"),
    CountryPhoneSpec::new("PK", "Pakistan", "+92", Some("### #######"), "🇵🇰"),
    CountryPhoneSpec::new("BD", "Bangladesh", "+880", Some("####-######"), "🇧🇩"),
    CountryPhoneSpec::new("CN", "China", "+86", Some("### #### ####"), "🇨🇳"),
    CountryPhoneSpec::new("JP", "Japan", "+81", Some("##-####-####"), "🇯🇵"),
    CountryPhoneSpec::new("KR", "South Korea", "+82", Some("##-####-####"), "🇰🇷"),
    CountryPhoneSpec::new("SG", "Singapore", "+65", Some("#### ####"), "🇸🇬"),
    CountryPhoneSpec::new("MY", "Malaysia", "+60", Some("##-### ####"), "🇲🇾"),
    CountryPhoneSpec::new("PH", "Philippines", "+63", Some("### ### ####"), "🇵🇭"),
    CountryPhoneSpec::new("ID", "Indonesia", "+62", None, "🇮🇩"),
    CountryPhoneSpec::new("TH", "Thailand", "+66", Some("## ### ####"), "🇹🇭"),
    CountryPhoneSpec::new("VN", "Vietnam", "+84", None, "🇻🇳"),
    CountryPhoneSpec::new("BR", "Brazil", "+55", Some("(##) #####-####"), "🇧🇷"),
    CountryPhoneSpec::new("MX", "Mexico", "+52", Some("### ### ####"), "🇲🇽"),
    CountryPhoneSpec::new("AR", "Argentina", "+54", None, "🇦🇷"),
    CountryPhoneSpec::new("CO", "Colombia", "+57", Some("### ### ####"), "🇨🇴"),
    CountryPhoneSpec::new("CL", "Chile", "+56", Some("# #### ####"), "🇨🇱"),
];

/// The country preselected in an empty phone field.
pub fn default_country() -> &'static CountryPhoneSpec {
    &COUNTRIES[0]
}

/// Look up a country by ISO code (case-insensitive).
pub fn find_country(code: &str) -> Option<&'static CountryPhoneSpec> {
    COUNTRIES
        .iter()
        .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
}
