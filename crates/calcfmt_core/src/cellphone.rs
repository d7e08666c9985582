//! Brazilian cellphone normalization and display formatting.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::Deserialize;
use thiserror::Error;

/// Digit groups of an 11-digit mobile number: area code (2), then the
/// subscriber number split 5 + 4.
static GROUPS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})(\d{5})(\d{4})$").expect("cellphone pattern is valid"));

/// Raw request value. Clients send either a string, possibly with
/// punctuation, or a bare number.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(untagged)]
pub enum CellphoneInput {
    Text(String),
    Number(u64),
}

impl CellphoneInput {
    /// Digits-only rendition: numbers are stringified, strings keep only
    /// their ASCII digit characters.
    pub fn digits(&self) -> String {
        match self {
            CellphoneInput::Text(s) => s.chars().filter(|c| c.is_ascii_digit()).collect(),
            CellphoneInput::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CellphoneError {
    #[error("Expected cellphone with 11 numbers.")]
    WrongDigitCount { found: usize },
}

/// Formats a cellphone as `+55 (DD) NNNNN-NNNN`.
///
/// Anything that is not a digit is stripped before counting, so punctuated
/// input like `(11) 98765-4321` reformats cleanly. Inputs that do not strip
/// down to exactly 11 digits are rejected, including ones already carrying
/// a country code.
pub fn format_brazilian(input: &CellphoneInput) -> Result<String, CellphoneError> {
    let digits = input.digits();
    if digits.len() != 11 {
        return Err(CellphoneError::WrongDigitCount {
            found: digits.len(),
        });
    }
    Ok(GROUPS.replace(&digits, "+55 ($1) $2-$3").into_owned())
}
