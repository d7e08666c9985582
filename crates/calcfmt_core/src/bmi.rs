//! Body Mass Index computation and classification.

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use schemars::JsonSchema;
use serde::Serialize;

use crate::aggregate::round2;
use crate::classify::ThresholdTable;

/// Weight accepted by the assessment, in kilograms.
pub const WEIGHT_KG: RangeInclusive<f64> = 4.0..=600.0;
/// Height accepted by the assessment, in centimetres.
pub const HEIGHT_CM: RangeInclusive<f64> = 50.0..=300.0;

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq, JsonSchema)]
pub enum BmiCategory {
    #[serde(rename = "Severely underweight")]
    SeverelyUnderweight,
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obesity grade I")]
    ObesityGradeI,
    #[serde(rename = "Obesity grade II")]
    ObesityGradeII,
    #[serde(rename = "Obesity grade III")]
    ObesityGradeIII,
}

static CATEGORIES: LazyLock<ThresholdTable<BmiCategory>> = LazyLock::new(|| {
    ThresholdTable::new(
        vec![
            (17.0, BmiCategory::SeverelyUnderweight),
            (18.5, BmiCategory::Underweight),
            (25.0, BmiCategory::NormalWeight),
            (30.0, BmiCategory::Overweight),
            (35.0, BmiCategory::ObesityGradeI),
            (40.0, BmiCategory::ObesityGradeII),
        ],
        BmiCategory::ObesityGradeIII,
    )
});

/// Index rounded to two decimals plus the bucket it falls into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BmiReport {
    pub bmi: f64,
    pub category: BmiCategory,
}

/// Computes `weight / height²` (height converted to metres) and classifies
/// the result.
///
/// Classification runs on the already-rounded index so the reported number
/// and its category always agree, even right at a bucket bound. Inputs are
/// assumed to be inside [`WEIGHT_KG`] and [`HEIGHT_CM`].
pub fn assess(weight_kg: f64, height_cm: f64) -> BmiReport {
    let height_m = height_cm / 100.0;
    let bmi = round2(weight_kg / (height_m * height_m));
    BmiReport {
        bmi,
        category: *CATEGORIES.classify(bmi),
    }
}
