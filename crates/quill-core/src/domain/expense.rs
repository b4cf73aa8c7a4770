//! Expense entries and the HTML fragment that mirrors them.

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::DomainError;

/// Amount as submitted by the client: a JSON number or a numeric string.
///
/// The submitted form is echoed back; arithmetic goes through [`Amount::as_number`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Text(String),
}

impl Amount {
    /// Numeric value of the amount, if it has one.
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            Amount::Number(n) => *n,
            Amount::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    0.0
                } else {
                    text.parse::<f64>().ok()?
                }
            }
        };
        value.is_finite().then_some(value)
    }

    fn is_blank(&self) -> bool {
        match self {
            Amount::Number(n) => *n == 0.0,
            Amount::Text(text) => text.trim().is_empty(),
        }
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Amount::Number(n) => serialize_number(n, serializer),
            Amount::Text(text) => serializer.serialize_str(text),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Number(n) => write!(f, "{n}"),
            Amount::Text(text) => f.write_str(text),
        }
    }
}

/// A recorded expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: u64,
    pub name: String,
    pub amount: Amount,
}

/// Sum of all recorded amounts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ExpenseTotal {
    #[serde(serialize_with = "serialize_number")]
    pub total: f64,
}

/// Fields submitted to record an expense.
#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    pub name: Option<String>,
    pub amount: Option<Amount>,
}

impl NewExpense {
    /// Check that both fields are present and the amount is numeric.
    pub fn validate(self) -> Result<(String, Amount), DomainError> {
        let (name, amount) = match (self.name, self.amount) {
            (Some(name), Some(amount)) if !name.is_empty() && !amount.is_blank() => (name, amount),
            _ => return Err(DomainError::validation("Name and amount required")),
        };
        if amount.as_number().is_none() {
            return Err(DomainError::validation(format!(
                "Amount must be numeric, got {amount}"
            )));
        }
        Ok((name, amount))
    }
}

impl Expense {
    /// The `<div>` line this expense contributes to the HTML fragment.
    pub fn fragment_line(&self) -> String {
        format!(
            "<div>{}: ${}</div>",
            escape_text(&self.name),
            escape_text(&self.amount.to_string())
        )
    }
}

/// Wrap fragment lines in the `expenses` container.
pub fn render_fragment(lines: &[String]) -> String {
    format!(r#"<div id="expenses">{}</div>"#, lines.concat())
}

/// Serialize integral values as JSON integers, everything else as floats.
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\u{a0}' => escaped.push_str("&nbsp;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_expense(name: Option<&str>, amount: Option<Amount>) -> NewExpense {
        NewExpense {
            name: name.map(String::from),
            amount,
        }
    }

    #[test]
    fn test_amount_coercion() {
        assert_eq!(Amount::Number(5.0).as_number(), Some(5.0));
        assert_eq!(Amount::Text(" 2.5 ".into()).as_number(), Some(2.5));
        assert_eq!(Amount::Text("lots".into()).as_number(), None);
        assert_eq!(Amount::Text("NaN".into()).as_number(), None);
    }

    #[test]
    fn test_amount_serializes_integral_numbers_as_integers() {
        assert_eq!(serde_json::to_string(&Amount::Number(5.0)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&Amount::Number(2.5)).unwrap(), "2.5");
        assert_eq!(serde_json::to_string(&Amount::Text("7".into())).unwrap(), "\"7\"");
    }

    #[test]
    fn test_total_serialization() {
        let total = ExpenseTotal { total: 8.0 };
        assert_eq!(serde_json::to_value(total).unwrap(), serde_json::json!({ "total": 8 }));
        let total = ExpenseTotal { total: 0.5 };
        assert_eq!(serde_json::to_value(total).unwrap(), serde_json::json!({ "total": 0.5 }));
    }

    #[test]
    fn test_amount_deserializes_both_forms() {
        let n: Amount = serde_json::from_str("12").unwrap();
        let t: Amount = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(n, Amount::Number(12.0));
        assert_eq!(t, Amount::Text("12".into()));
    }

    #[test]
    fn test_validate_requires_name_and_amount() {
        assert!(new_expense(None, Some(Amount::Number(1.0))).validate().is_err());
        assert!(new_expense(Some(""), Some(Amount::Number(1.0))).validate().is_err());
        assert!(new_expense(Some("tea"), None).validate().is_err());
        assert!(new_expense(Some("tea"), Some(Amount::Text(" ".into()))).validate().is_err());
        assert!(new_expense(Some("tea"), Some(Amount::Number(0.0))).validate().is_err());
        assert!(new_expense(Some("tea"), Some(Amount::Text("abc".into()))).validate().is_err());

        let (name, amount) = new_expense(Some("tea"), Some(Amount::Text("3".into())))
            .validate()
            .unwrap();
        assert_eq!(name, "tea");
        assert_eq!(amount.as_number(), Some(3.0));
    }

    #[test]
    fn test_fragment_line_escapes_markup() {
        let expense = Expense {
            id: 1,
            name: "<b>fish & chips</b>".into(),
            amount: Amount::Number(12.5),
        };
        assert_eq!(
            expense.fragment_line(),
            "<div>&lt;b&gt;fish &amp; chips&lt;/b&gt;: $12.5</div>"
        );
    }

    #[test]
    fn test_render_fragment() {
        assert_eq!(render_fragment(&[]), r#"<div id="expenses"></div>"#);
        let lines = vec!["<div>coffee: $5</div>".to_string()];
        assert_eq!(
            render_fragment(&lines),
            r#"<div id="expenses"><div>coffee: $5</div></div>"#
        );
    }
}
