use serde::{Deserialize, Serialize};

use crate::domain::category::Category;

/// Spending attributed to one category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryAggregate {
    pub category: Category,
    pub value: f64,
    /// Share of total spend, rounded half-up to an integer.
    pub percentage: u32,
    pub color: String,
}

impl CategoryAggregate {
    pub fn new(category: Category, value: f64, percentage: u32) -> Self {
        Self {
            category,
            value,
            percentage,
            color: category.color().to_string(),
        }
    }

    /// Synthetic entry standing in for "no spending yet".
    pub fn empty() -> Self {
        Self::new(Category::Empty, 0.0, 100)
    }

    pub fn name(&self) -> &'static str {
        self.category.label()
    }
}

/// Category breakdown of all counted expenses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Summary {
    /// Nothing has been spent.
    Empty,
    /// At least one counted expense. `categories` is sorted by descending
    /// percentage and never contains the `Vazio` sentinel.
    NonEmpty {
        total_spent: f64,
        categories: Vec<CategoryAggregate>,
    },
}

impl Summary {
    pub fn total_spent(&self) -> f64 {
        match self {
            Summary::Empty => 0.0,
            Summary::NonEmpty { total_spent, .. } => *total_spent,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Summary::Empty)
    }

    /// Real categories only; empty for [`Summary::Empty`].
    pub fn aggregates(&self) -> &[CategoryAggregate] {
        match self {
            Summary::Empty => &[],
            Summary::NonEmpty { categories, .. } => categories,
        }
    }

    /// Flat list used by the pie chart: a single `Vazio` entry at 100% when
    /// nothing was spent, otherwise the real aggregates.
    pub fn entries(&self) -> Vec<CategoryAggregate> {
        match self {
            Summary::Empty => vec![CategoryAggregate::empty()],
            Summary::NonEmpty { categories, .. } => categories.clone(),
        }
    }

    /// Largest slice, if anything was spent.
    pub fn dominant(&self) -> Option<&CategoryAggregate> {
        self.aggregates().first()
    }

    /// Colour of the single-circle chart.
    pub fn chart_color(&self) -> &str {
        match self.dominant() {
            Some(aggregate) => &aggregate.color,
            None => Category::Empty.color(),
        }
    }

    pub fn aggregate_for(&self, category: Category) -> Option<&CategoryAggregate> {
        self.aggregates()
            .iter()
            .find(|aggregate| aggregate.category == category)
    }
}
