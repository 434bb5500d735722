use crate::domain::{Category, CategoryAggregate, Expense, Summary};

pub struct SummaryService;

impl SummaryService {
    /// Breaks the expenses down by the built-in categories.
    pub fn current(expenses: &[Expense]) -> Summary {
        Self::summarize(expenses, &Category::KNOWN)
    }

    /// Aggregates `expenses` over `categories`, in the given order.
    ///
    /// Records whose value is not a finite positive number are skipped rather
    /// than failing the whole summary, as are records that would push the
    /// total past `f64::MAX`. Labels outside `categories` are counted under
    /// `Outros`. Percentages are rounded independently and may sum to 99 or
    /// 101.
    pub fn summarize(expenses: &[Expense], categories: &[Category]) -> Summary {
        let mut totals: Vec<(Category, f64)> = categories
            .iter()
            .copied()
            .filter(|category| !category.is_sentinel())
            .map(|category| (category, 0.0))
            .collect();
        if !totals.iter().any(|(category, _)| *category == Category::FALLBACK) {
            totals.push((Category::FALLBACK, 0.0));
        }

        let mut total_spent = 0.0;
        for expense in expenses {
            if !expense.has_countable_value() {
                tracing::debug!(id = %expense.id, value = expense.value, "skipping expense without a countable value");
                continue;
            }
            if !(total_spent + expense.value).is_finite() {
                tracing::warn!(
                    id = %expense.id,
                    value = expense.value,
                    "skipping expense that would overflow the total"
                );
                continue;
            }
            total_spent += expense.value;
            let target = Category::from_label(&expense.category)
                .filter(|category| totals.iter().any(|(known, _)| known == category))
                .unwrap_or(Category::FALLBACK);
            if let Some((_, bucket)) = totals.iter_mut().find(|(category, _)| *category == target) {
                *bucket += expense.value;
            }
        }

        if total_spent == 0.0 {
            return Summary::Empty;
        }

        let mut aggregates: Vec<CategoryAggregate> = totals
            .into_iter()
            .filter(|(_, value)| *value > 0.0)
            .map(|(category, value)| {
                CategoryAggregate::new(category, value, percentage_of(value, total_spent))
            })
            .collect();
        // Stable: equal percentages keep category order.
        aggregates.sort_by(|a, b| b.percentage.cmp(&a.percentage));

        Summary::NonEmpty {
            total_spent,
            categories: aggregates,
        }
    }
}

fn percentage_of(value: f64, total: f64) -> u32 {
    (value / total * 100.0).round() as u32
}
