//! Request and response bodies plus their boundary validation.
//!
//! Handlers deserialize into these types and run `validate()` before
//! touching `calcfmt_core`, so the core only ever sees range-checked input.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use calcfmt_core::{BmiCategory, CellphoneInput, Issues, bmi};

/// Body of `POST /sum-numbers` and `POST /calculate/average`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct NumbersBody {
    pub numbers: Vec<f64>,
}

/// Body of `POST /calculate/bmi`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct BmiBody {
    pub weight: f64,
    pub height: f64,
}

/// `BmiBody` after range checks, with units made explicit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurements {
    pub weight_kg: f64,
    pub height_cm: f64,
}

impl BmiBody {
    /// Enforces the accepted ranges (weight 4..=600 kg, height 50..=300 cm),
    /// reporting every violated field at once.
    pub fn validate(self) -> Result<Measurements, Issues> {
        let mut issues = Issues::new();
        if !bmi::WEIGHT_KG.contains(&self.weight) {
            issues.push("weight", "Expected weight between 4 and 600 kg.");
        }
        if !bmi::HEIGHT_CM.contains(&self.height) {
            issues.push("height", "Expected height between 50 and 300 cm.");
        }
        if !issues.is_empty() {
            return Err(issues);
        }
        Ok(Measurements {
            weight_kg: self.weight,
            height_cm: self.height,
        })
    }
}

/// Body of `POST /format/brazilian-cellphone`.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct CellphoneBody {
    pub cellphone: CellphoneInput,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct SumResponse {
    pub sum: f64,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct AverageResponse {
    pub average: f64,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct BmiResponse {
    pub bmi: f64,
    pub result: BmiCategory,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CellphoneResponse {
    pub formatted_cellphone: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bmi_body_inside_ranges_passes_through() {
        let body = BmiBody {
            weight: 70.0,
            height: 175.0,
        };
        let m = body.validate().unwrap();
        assert_eq!(m.weight_kg, 70.0);
        assert_eq!(m.height_cm, 175.0);
    }

    #[test]
    fn bmi_bounds_are_inclusive() {
        assert!(
            BmiBody {
                weight: 4.0,
                height: 50.0,
            }
            .validate()
            .is_ok()
        );
        assert!(
            BmiBody {
                weight: 600.0,
                height: 300.0,
            }
            .validate()
            .is_ok()
        );
    }

    #[test]
    fn bmi_body_reports_every_bad_field_at_once() {
        let body = BmiBody {
            weight: 3.9,
            height: 301.0,
        };
        let issues = body.validate().unwrap_err();
        assert_eq!(
            serde_json::to_value(&issues).unwrap(),
            json!({
                "height": ["Expected height between 50 and 300 cm."],
                "weight": ["Expected weight between 4 and 600 kg."],
            })
        );
    }

    #[test]
    fn bmi_body_rejects_nonsense_numbers() {
        assert!(
            BmiBody {
                weight: -70.0,
                height: 175.0,
            }
            .validate()
            .is_err()
        );
        assert!(
            BmiBody {
                weight: 0.0,
                height: 175.0,
            }
            .validate()
            .is_err()
        );
    }

    #[test]
    fn cellphone_response_uses_camel_case_on_the_wire() {
        let response = CellphoneResponse {
            formatted_cellphone: "+55 (11) 98765-4321".into(),
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"formattedCellphone": "+55 (11) 98765-4321"})
        );
    }

    #[test]
    fn numbers_body_accepts_an_empty_list() {
        let body: NumbersBody = serde_json::from_value(json!({"numbers": []})).unwrap();
        assert!(body.numbers.is_empty());
    }
}
