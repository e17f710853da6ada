use serde::{Deserialize, Serialize};

/// Default alphabet for the Uppercase category.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Default alphabet for the Lowercase category.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Default alphabet for the Digits category.
pub const DIGITS: &str = "0123456789";
/// Default alphabet for the Symbols category.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// A single password-generation request.
///
/// The length is signed because callers coerce untrusted input (form fields,
/// CLI arguments) into this type, and a negative length must be reported as
/// an invalid length rather than failing at the parsing boundary.
///
/// The camelCase JSON field names let a web caller deserialize a request
/// straight from its form payload.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationRequest {
    pub length: i64,
    pub use_uppercase: bool,
    pub use_lowercase: bool,
    /// Accepts `useNumbers` too, the name older form payloads send.
    #[serde(alias = "useNumbers")]
    pub use_digits: bool,
    pub use_symbols: bool,
    /// When non-empty after trimming, fully replaces the default Symbols
    /// alphabet for this request. Never merged with the default.
    pub custom_symbols: String,
}

/// Collect the alphabets of the selected categories, in the fixed category
/// order: Uppercase, Lowercase, Digits, Symbols.
///
/// Returns one alphabet per selected category. Alphabets are independent;
/// a custom symbol set overlapping another category is not deduplicated.
pub(crate) fn selected_alphabets(request: &GenerationRequest) -> Vec<Vec<char>> {
    let mut alphabets = Vec::new();
    if request.use_uppercase {
        alphabets.push(UPPERCASE.chars().collect());
    }
    if request.use_lowercase {
        alphabets.push(LOWERCASE.chars().collect());
    }
    if request.use_digits {
        alphabets.push(DIGITS.chars().collect());
    }
    if request.use_symbols {
        let custom = request.custom_symbols.trim();
        if custom.is_empty() {
            alphabets.push(SYMBOLS.chars().collect());
        } else {
            alphabets.push(custom.chars().collect());
        }
    }
    alphabets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabets_follow_the_fixed_category_order() {
        let request = GenerationRequest {
            length: 8,
            use_uppercase: true,
            use_lowercase: true,
            use_digits: true,
            use_symbols: true,
            custom_symbols: String::new(),
        };
        let alphabets = selected_alphabets(&request);
        let expected: Vec<Vec<char>> = [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS]
            .iter()
            .map(|s| s.chars().collect())
            .collect();
        assert_eq!(alphabets, expected);
    }

    #[test]
    fn custom_symbols_replace_the_default_alphabet() {
        let request = GenerationRequest {
            length: 8,
            use_symbols: true,
            custom_symbols: String::from("  !@# "),
            ..Default::default()
        };
        let alphabets = selected_alphabets(&request);
        assert_eq!(alphabets, vec![vec!['!', '@', '#']]);
    }

    #[test]
    fn whitespace_only_custom_symbols_fall_back_to_the_default() {
        let request = GenerationRequest {
            length: 8,
            use_symbols: true,
            custom_symbols: String::from("   "),
            ..Default::default()
        };
        let alphabets = selected_alphabets(&request);
        assert_eq!(alphabets, vec![SYMBOLS.chars().collect::<Vec<char>>()]);
    }

    #[test]
    fn custom_symbols_are_ignored_when_symbols_are_not_selected() {
        let request = GenerationRequest {
            length: 8,
            use_digits: true,
            custom_symbols: String::from("!@#"),
            ..Default::default()
        };
        let alphabets = selected_alphabets(&request);
        assert_eq!(alphabets, vec![DIGITS.chars().collect::<Vec<char>>()]);
    }

    #[test]
    fn requests_decode_from_the_form_payload_field_names() {
        let request: GenerationRequest = serde_json::from_str(
            r#"{
                "length": 12,
                "useUppercase": true,
                "useLowercase": false,
                "useDigits": true,
                "useSymbols": true,
                "customSymbols": "!@#"
            }"#,
        )
        .unwrap();
        assert_eq!(request.length, 12);
        assert!(request.use_uppercase);
        assert!(!request.use_lowercase);
        assert!(request.use_digits);
        assert!(request.use_symbols);
        assert_eq!(request.custom_symbols, "!@#");
    }

    #[test]
    fn digits_flag_decodes_from_the_older_use_numbers_name() {
        let request: GenerationRequest =
            serde_json::from_str(r#"{"length": 8, "useNumbers": true}"#).unwrap();
        assert!(request.use_digits);
    }

    #[test]
    fn missing_fields_default_to_not_selected() {
        let request: GenerationRequest = serde_json::from_str(r#"{"length": 8}"#).unwrap();
        assert_eq!(request.length, 8);
        assert!(!request.use_uppercase);
        assert!(!request.use_lowercase);
        assert!(!request.use_digits);
        assert!(!request.use_symbols);
        assert_eq!(request.custom_symbols, "");
    }
}
