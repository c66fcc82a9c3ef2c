//! The record a label is printed from.

use serde::{Deserialize, Serialize};

/// Product data for one label.
///
/// Only `name` is required when deserializing. Every other field may be
/// missing, and a missing field simply produces no instruction.
///
/// `price` accepts a number or a numeric string (`29.99`, `"29.99"`,
/// `"$29.99"`); anything unparseable is treated as absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LabelContent {
    pub name: String,
    #[serde(default)]
    pub barcode: String,
    #[serde(default, deserialize_with = "deserialize_price")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
}

/// Accepts a number, a numeric string, or null.
fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum PriceValue {
        Number(f64),
        Text(String),
    }

    let opt: Option<PriceValue> = Option::deserialize(deserializer)?;
    Ok(match opt {
        None => None,
        Some(PriceValue::Number(n)) => Some(n),
        Some(PriceValue::Text(s)) => parse_price(&s),
    })
}

/// Parse a catalog price string. A leading `$` and surrounding whitespace
/// are ignored.
pub fn parse_price(s: &str) -> Option<f64> {
    let s = s.trim();
    let s = s.strip_prefix('$').unwrap_or(s).trim();
    s.parse::<f64>().ok()
}

/// `$` followed by exactly two decimals, no thousands separator.
///
/// Returns `None` for negative, NaN or infinite prices.
///
/// ```
/// use etiqueta::label::format_price;
///
/// assert_eq!(format_price(29.99).as_deref(), Some("$29.99"));
/// assert_eq!(format_price(1500.0).as_deref(), Some("$1500.00"));
/// assert_eq!(format_price(-1.0), None);
/// ```
pub fn format_price(price: f64) -> Option<String> {
    if !price.is_finite() || price < 0.0 {
        return None;
    }
    // -0.0 would print as "-0.00"
    let price = if price == 0.0 { 0.0 } else { price };
    Some(format!("${:.2}", price))
}

/// First `budget` characters of `s`, trailing whitespace removed.
pub fn truncate_chars(s: &str, budget: usize) -> String {
    let truncated: String = s.chars().take(budget).collect();
    truncated.trim_end().to_string()
}

impl LabelContent {
    pub fn new(name: impl Into<String>, barcode: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            barcode: barcode.into(),
            price: Some(price),
            sku: None,
        }
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    pub fn without_price(mut self) -> Self {
        self.price = None;
        self
    }

    /// Product name cut down to `budget` characters.
    pub fn display_name(&self, budget: usize) -> String {
        truncate_chars(self.name.trim(), budget)
    }

    /// Formatted price, if there is a printable one.
    pub fn display_price(&self) -> Option<String> {
        self.price.and_then(format_price)
    }

    /// Trimmed SKU, if present and non-empty.
    pub fn display_sku(&self) -> Option<&str> {
        self.sku
            .as_deref()
            .map(str::trim)
            .filter(|sku| !sku.is_empty())
    }

    /// Trimmed barcode payload, if non-empty.
    pub fn barcode_payload(&self) -> Option<&str> {
        let payload = self.barcode.trim();
        (!payload.is_empty()).then_some(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(29.99).unwrap(), "$29.99");
        assert_eq!(format_price(5.0).unwrap(), "$5.00");
        assert_eq!(format_price(0.0).unwrap(), "$0.00");
        assert_eq!(format_price(-0.0).unwrap(), "$0.00");
        assert_eq!(format_price(1234567.891).unwrap(), "$1234567.89");
        assert_eq!(format_price(f64::NAN), None);
        assert_eq!(format_price(f64::INFINITY), None);
        assert_eq!(format_price(-0.01), None);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("29.99"), Some(29.99));
        assert_eq!(parse_price(" $ 12.5 "), Some(12.5));
        assert_eq!(parse_price("gratis"), None);
        assert_eq!(parse_price(""), None);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("Producto de Prueba", 11), "Producto de");
        assert_eq!(truncate_chars("Producto de Prueba", 9), "Producto");
        assert_eq!(truncate_chars("Té verde", 2), "Té");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn test_display_helpers() {
        let content = LabelContent::new("  Café  ", " 123 ", 3.5).with_sku("  ");
        assert_eq!(content.display_name(10), "Café");
        assert_eq!(content.display_price().unwrap(), "$3.50");
        assert_eq!(content.display_sku(), None);
        assert_eq!(content.barcode_payload(), Some("123"));

        let content = LabelContent::new("X", "", 1.0).without_price().with_sku("AB-1");
        assert_eq!(content.display_price(), None);
        assert_eq!(content.display_sku(), Some("AB-1"));
        assert_eq!(content.barcode_payload(), None);
    }

    #[test]
    fn test_deserialize_price_variants() {
        let c: LabelContent = serde_json::from_str(r#"{"name": "A", "price": 29.99}"#).unwrap();
        assert_eq!(c.price, Some(29.99));

        let c: LabelContent = serde_json::from_str(r#"{"name": "A", "price": "$4.10"}"#).unwrap();
        assert_eq!(c.price, Some(4.1));

        let c: LabelContent = serde_json::from_str(r#"{"name": "A", "price": "n/a"}"#).unwrap();
        assert_eq!(c.price, None);

        let c: LabelContent = serde_json::from_str(r#"{"name": "A", "price": null}"#).unwrap();
        assert_eq!(c.price, None);

        let c: LabelContent = serde_json::from_str(r#"{"name": "A"}"#).unwrap();
        assert_eq!(c.price, None);
        assert!(c.barcode.is_empty());
        assert_eq!(c.sku, None);
    }

    #[test]
    fn test_deserialize_integer_price() {
        let c: LabelContent = serde_json::from_str(r#"{"name": "A", "price": 10}"#).unwrap();
        assert_eq!(c.price, Some(10.0));
    }
}
