//! WebAssembly module for grain classification
//!
//! Provides client-side computation for:
//! - Grading a full corn or soybean request
//! - Moisture and impurity discounts for a lot

use wasm_bindgen::prelude::*;

use shared::{
    validate_positive_weight, GradingError, GradingRequest, GradingResult, Impurity, Moisture,
    ThresholdTables, Tolerated,
};

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

/// Grade a JSON request against the standard tables, returning the JSON report
#[wasm_bindgen]
pub fn grade_sample(request_json: &str) -> Result<String, JsValue> {
    grade_with(request_json, &ThresholdTables::default()).map_err(report_error)
}

/// Grade a JSON request against caller supplied tables. Tables left out of
/// `tables_json` keep their standard values.
#[wasm_bindgen]
pub fn grade_sample_with_tables(request_json: &str, tables_json: &str) -> Result<String, JsValue> {
    parse_tables(tables_json)
        .and_then(|tables| grade_with(request_json, &tables))
        .map_err(report_error)
}

/// Kilograms discounted from a lot for excess moisture
#[wasm_bindgen]
pub fn moisture_discount_kg(
    percentage: f64,
    tolerance_limit: f64,
    lot_weight_kg: f64,
) -> Result<f64, JsValue> {
    moisture_discount(percentage, tolerance_limit, lot_weight_kg)
        .map_err(|e| report_error(e.to_string()))
}

/// Kilograms discounted from a lot for excess impurities
#[wasm_bindgen]
pub fn impurity_discount_kg(
    weight_grams: f64,
    sample_grams: f64,
    tolerance_limit: f64,
    lot_weight_kg: f64,
) -> Result<f64, JsValue> {
    impurity_discount(weight_grams, sample_grams, tolerance_limit, lot_weight_kg)
        .map_err(|e| report_error(e.to_string()))
}

fn moisture_discount(
    percentage: f64,
    tolerance_limit: f64,
    lot_weight_kg: f64,
) -> GradingResult<f64> {
    let moisture = Moisture::new(percentage, tolerance_limit)?;
    check_lot_weight(lot_weight_kg)?;
    Ok(moisture.discount_kg(lot_weight_kg))
}

fn impurity_discount(
    weight_grams: f64,
    sample_grams: f64,
    tolerance_limit: f64,
    lot_weight_kg: f64,
) -> GradingResult<f64> {
    let impurity = Impurity::new(weight_grams, sample_grams, tolerance_limit)?;
    check_lot_weight(lot_weight_kg)?;
    Ok(impurity.discount_kg(lot_weight_kg))
}

fn check_lot_weight(lot_weight_kg: f64) -> GradingResult<()> {
    validate_positive_weight(lot_weight_kg)
        .map_err(|message| GradingError::invalid("lot_weight_kg", message))
}

fn grade_with(request_json: &str, tables: &ThresholdTables) -> Result<String, String> {
    let request = GradingRequest::from_json(request_json)
        .map_err(|e| format!("Invalid request JSON: {}", e))?;
    let outcome = request.grade(tables).map_err(|e| e.to_string())?;
    serde_json::to_string(&outcome).map_err(|e| e.to_string())
}

fn parse_tables(tables_json: &str) -> Result<ThresholdTables, String> {
    let tables: ThresholdTables = serde_json::from_str(tables_json)
        .map_err(|e| format!("Invalid tables JSON: {}", e))?;
    tables.validate().map_err(|e| e.to_string())?;
    Ok(tables)
}

fn report_error(message: String) -> JsValue {
    let value = JsValue::from_str(&message);
    web_sys::console::error_1(&value);
    value
}
