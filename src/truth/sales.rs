//! Per-product sales aggregation from a `product,quantity,price` CSV

use serde_json::{json, Map, Value};

use crate::utils::round_to;

/// Decimal places revenue is rounded to
pub const REVENUE_PRECISION: usize = 2;

const REQUIRED_COLUMNS: [&str; 3] = ["product", "quantity", "price"];

/// Totals accumulated for one product
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProductTotals {
    pub total_quantity: i64,
    pub total_revenue: f64,
}

/// Aggregated sales, products in first-seen order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesSummary {
    pub products: Vec<(String, ProductTotals)>,
}

impl SalesSummary {
    pub fn get(&self, product: &str) -> Option<&ProductTotals> {
        self.products
            .iter()
            .find(|(name, _)| name == product)
            .map(|(_, totals)| totals)
    }

    /// Product names in first-seen order
    pub fn names(&self) -> Vec<String> {
        self.products.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Canonical JSON document with products in alphabetical order
    pub fn render(&self) -> String {
        let mut sorted: Vec<&(String, ProductTotals)> = self.products.iter().collect();
        sorted.sort_by(|a, b| a.0.cmp(&b.0));

        let mut root = Map::new();
        for (name, totals) in sorted {
            root.insert(
                name.clone(),
                json!({
                    "total_quantity": totals.total_quantity,
                    "total_revenue": totals.total_revenue,
                }),
            );
        }
        serde_json::to_string_pretty(&Value::Object(root)).unwrap_or_default()
    }
}

/// Split one CSV record, honouring double-quoted fields and `""` escapes
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                field.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut field)),
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

fn field<'a>(fields: &'a [String], idx: usize, column: &str, row_no: usize) -> Result<&'a str, String> {
    fields
        .get(idx)
        .map(|f| f.trim())
        .ok_or_else(|| format!("row {row_no} has no '{column}' value"))
}

/// Aggregate quantity and revenue per product
///
/// Columns are located by header name. Revenue is summed as `quantity * price`
/// across all rows of a product and rounded once at the end. Returns the reason
/// when the CSV cannot be aggregated.
pub fn aggregate_sales(csv: &str) -> Result<SalesSummary, String> {
    let mut lines = csv.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());

    let (_, header) = lines.next().ok_or_else(|| "has no header row".to_string())?;
    let header: Vec<String> = split_record(header)
        .into_iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut index = [0usize; 3];
    for (slot, column) in index.iter_mut().zip(REQUIRED_COLUMNS) {
        *slot = header
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| format!("is missing the '{column}' column"))?;
    }
    let [product_idx, quantity_idx, price_idx] = index;

    let mut summary = SalesSummary::default();
    for (line_idx, line) in lines {
        let row_no = line_idx + 1;
        let fields = split_record(line);

        let product = field(&fields, product_idx, "product", row_no)?.to_string();
        let quantity: i64 = field(&fields, quantity_idx, "quantity", row_no)?
            .parse()
            .map_err(|_| format!("row {row_no} has a non-integer quantity"))?;
        let price: f64 = field(&fields, price_idx, "price", row_no)?
            .parse()
            .map_err(|_| format!("row {row_no} has a non-numeric price"))?;

        let position = match summary.products.iter().position(|(name, _)| *name == product) {
            Some(pos) => pos,
            None => {
                summary.products.push((product, ProductTotals::default()));
                summary.products.len() - 1
            }
        };
        let totals = &mut summary.products[position].1;
        totals.total_quantity = totals
            .total_quantity
            .checked_add(quantity)
            .ok_or_else(|| format!("row {row_no} overflows total quantity"))?;
        totals.total_revenue += quantity as f64 * price;
    }

    for (_, totals) in &mut summary.products {
        totals.total_revenue = round_to(totals.total_revenue, REVENUE_PRECISION);
    }
    Ok(summary)
}
