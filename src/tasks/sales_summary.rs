//! Per-product sales totals as JSON
//!
//! Output: a JSON object keyed by product name, alphabetically sorted, each
//! value holding `total_quantity` and `total_revenue`.

use serde_json::{Map, Value};

use crate::compare::{expect_eq, expect_key_set, expect_rounded, expect_sorted};
use crate::config::GraderConfig;
use crate::error::VerifyError;
use crate::fixture::read_fixture;
use crate::grammar::{json_type_name, parse_json_object};
use crate::report::Pass;
use crate::truth::sales::REVENUE_PRECISION;
use crate::truth::{aggregate_sales, SalesSummary};

use super::{read_task_output, TaskId};

/// Load the CSV fixture and aggregate it
pub fn expected_summary(config: &GraderConfig) -> Result<SalesSummary, VerifyError> {
    let fixture = &config.paths.sales_fixture;
    let csv = read_fixture("Source CSV", fixture, &config.resolve(fixture))?;
    aggregate_sales(&csv).map_err(|reason| VerifyError::invalid_fixture("Source CSV", fixture, reason))
}

fn product_object<'a>(product: &str, value: &'a Value) -> Result<&'a Map<String, Value>, VerifyError> {
    value.as_object().ok_or_else(|| {
        VerifyError::value(
            format!("Product '{product}'"),
            "an object",
            json_type_name(value),
        )
    })
}

fn quantity(product: &str, totals: &Map<String, Value>) -> Result<i64, VerifyError> {
    let field = format!("{product} total_quantity");
    let value = totals
        .get("total_quantity")
        .ok_or_else(|| VerifyError::value(&field, "a field", "nothing"))?;

    if let Some(n) = value.as_i64() {
        return Ok(n);
    }
    match value.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        _ => Err(VerifyError::value(&field, "an integer", value)),
    }
}

fn revenue(product: &str, totals: &Map<String, Value>) -> Result<f64, VerifyError> {
    let field = format!("{product} total_revenue");
    let value = totals
        .get("total_revenue")
        .ok_or_else(|| VerifyError::value(&field, "a field", "nothing"))?;

    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| VerifyError::value(&field, "a number", value))
}

pub fn verify(config: &GraderConfig) -> Result<Pass, VerifyError> {
    let expected = expected_summary(config)?;
    tracing::debug!(products = expected.products.len(), "expected record derived");

    let text = read_task_output(TaskId::SalesSummary, config)?;
    let parsed = parse_json_object(&text)?;
    let keys: Vec<String> = parsed.keys().cloned().collect();

    expect_key_set("Product", &expected.names(), &keys)?;
    expect_sorted("Product keys", &keys)?;

    for (product, totals) in &expected.products {
        let Some(value) = parsed.get(product) else {
            continue;
        };
        let object = product_object(product, value)?;
        expect_eq(
            &format!("{product} total_quantity"),
            totals.total_quantity,
            quantity(product, object)?,
        )?;
        expect_rounded(
            &format!("{product} total_revenue"),
            totals.total_revenue,
            revenue(product, object)?,
            REVENUE_PRECISION,
        )?;
    }

    Ok(Pass::new(format!(
        "{} is correct for {} products",
        TaskId::SalesSummary.output_path(config).display(),
        expected.products.len()
    )))
}
