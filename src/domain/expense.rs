//! Expense records and the drafts they are created from.

use std::fmt;

use chrono::Local;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::category::Category;
use crate::domain::common::{Displayable, Identifiable, NamedEntity};

const DATE_LABEL_FORMAT: &str = "%d/%m/%Y";

/// Monotonic expense identifier, historically the creation timestamp in
/// milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(pub i64);

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single logged expense.
///
/// `category` keeps the label exactly as entered so that unknown labels
/// survive a load/save cycle; aggregation resolves it through
/// [`Category::for_aggregation`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    #[serde(deserialize_with = "lenient_id")]
    pub id: ExpenseId,
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default = "invalid_amount", deserialize_with = "lenient_amount")]
    pub value: f64,
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: String,
}

impl Expense {
    /// Category this expense is counted under when summarising.
    pub fn aggregation_category(&self) -> Category {
        Category::for_aggregation(&self.category)
    }

    /// Colour for list rows; `None` when the stored label is not a known
    /// category.
    pub fn color(&self) -> Option<&'static str> {
        Category::from_label(&self.category).map(Category::color)
    }

    /// Whether the value can take part in totals.
    pub fn has_countable_value(&self) -> bool {
        is_countable_amount(self.value)
    }
}

impl Identifiable for Expense {
    type Id = ExpenseId;

    fn id(&self) -> ExpenseId {
        self.id
    }
}

impl NamedEntity for Expense {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Expense {
    fn display_label(&self) -> String {
        format!("{} | {}", self.category, self.date)
    }
}

/// User input for a new expense, before an identifier is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub name: String,
    pub value: f64,
    pub category: String,
    pub date: String,
}

impl ExpenseDraft {
    /// Creates a draft dated today.
    pub fn new(name: impl Into<String>, value: f64, category: Category) -> Self {
        Self {
            name: name.into(),
            value,
            category: category.label().to_string(),
            date: today_label(),
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Overrides the category with a raw label, which may be unknown.
    pub fn with_category_label(mut self, label: impl Into<String>) -> Self {
        self.category = label.into();
        self
    }

    pub fn into_expense(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            name: self.name,
            value: self.value,
            category: self.category,
            date: self.date,
        }
    }
}

/// Today's local date as shown in the add-expense form (`dd/mm/yyyy`).
pub fn today_label() -> String {
    Local::now().format(DATE_LABEL_FORMAT).to_string()
}

/// Finite and strictly positive.
pub fn is_countable_amount(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn invalid_amount() -> f64 {
    f64::NAN
}

/// Accepts numbers and numeric strings; anything else becomes NaN so the
/// record is excluded from totals instead of failing the whole load.
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => leading_float(&text).unwrap_or(f64::NAN),
        _ => f64::NAN,
    })
}

/// Integer ids, whole-number floats and numeric strings are all accepted.
fn lenient_id<'de, D>(deserializer: D) -> Result<ExpenseId, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    let id = match &raw {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(float_id)),
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .ok()
            .or_else(|| leading_float(text).and_then(float_id)),
        _ => None,
    };
    id.map(ExpenseId)
        .ok_or_else(|| de::Error::custom(format!("expense id is not numeric: {raw}")))
}

fn float_id(value: f64) -> Option<i64> {
    // Saturating cast; only finite values are ids.
    value.is_finite().then_some(value.trunc() as i64)
}

/// Missing text fields and `null` read as empty; numbers keep their digits.
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    })
}

/// Parses the longest numeric prefix of `text` (sign, digits, fraction and
/// exponent), ignoring leading whitespace.
fn leading_float(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));

    let whole_digits = count_digits(&bytes[end..]);
    end += whole_digits;
    let mut fraction_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction_digits = count_digits(&bytes[end + 1..]);
        end += 1 + fraction_digits;
    }
    if whole_digits + fraction_digits == 0 {
        return None;
    }

    // An exponent only counts when digits follow it: "2e" reads as 2.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits = count_digits(&bytes[exponent_end..]);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }
    trimmed[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}
