//! Budgets grouped by month
//!
//! Used by budget settings views, which list months newest first.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{BudgetRecord, Money, MonthKey};

/// The budgets set for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthBudgets {
    pub month: MonthKey,
    /// Budgets in the order they were supplied
    pub budgets: Vec<BudgetRecord>,
}

impl MonthBudgets {
    /// Sum of the month's budgets, `None` if it overflows
    pub fn total(&self) -> Option<Money> {
        Money::checked_sum(self.budgets.iter().map(|b| b.amount))
    }
}

/// Budgets grouped by month, most recent month first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BudgetGroups {
    groups: Vec<MonthBudgets>,
}

impl BudgetGroups {
    /// Group budgets by month
    ///
    /// Duplicate (category, month) entries are kept as they are.
    pub fn from_budgets(budgets: &[BudgetRecord]) -> Self {
        let mut by_month: BTreeMap<MonthKey, Vec<BudgetRecord>> = BTreeMap::new();
        for budget in budgets {
            by_month.entry(budget.month).or_default().push(budget.clone());
        }

        let groups = by_month
            .into_iter()
            .rev()
            .map(|(month, budgets)| MonthBudgets { month, budgets })
            .collect();

        Self { groups }
    }

    /// Months present, newest first
    pub fn months(&self) -> Vec<MonthKey> {
        self.groups.iter().map(|g| g.month).collect()
    }

    /// Budgets for one month
    pub fn get(&self, month: MonthKey) -> Option<&[BudgetRecord]> {
        self.groups
            .iter()
            .find(|g| g.month == month)
            .map(|g| g.budgets.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &MonthBudgets> {
        self.groups.iter()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl IntoIterator for BudgetGroups {
    type Item = MonthBudgets;
    type IntoIter = std::vec::IntoIter<MonthBudgets>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures::budget;

    fn key(s: &str) -> MonthKey {
        MonthKey::parse(s).unwrap()
    }

    #[test]
    fn test_groups_newest_first() {
        let budgets = vec![
            budget("b1", 100, "Food", "2024-05"),
            budget("b2", 200, "Food", "2024-07"),
            budget("b3", 300, "Food", "2024-06"),
            budget("b4", 400, "Travel", "2024-07"),
        ];
        let groups = BudgetGroups::from_budgets(&budgets);

        assert_eq!(groups.len(), 3);
        assert_eq!(
            groups.months(),
            vec![key("2024-07"), key("2024-06"), key("2024-05")]
        );

        let july: Vec<&str> = groups
            .get(key("2024-07"))
            .unwrap()
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(july, vec!["b2", "b4"]);
        assert_eq!(groups.iter().next().unwrap().total(), Some(Money::from_cents(600)));
        assert!(groups.get(key("2024-01")).is_none());
    }

    #[test]
    fn test_year_boundary_ordering() {
        let budgets = vec![
            budget("b1", 100, "Food", "2023-12"),
            budget("b2", 100, "Food", "2024-01"),
            budget("b3", 100, "Food", "2023-02"),
        ];
        let months: Vec<String> = BudgetGroups::from_budgets(&budgets)
            .months()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(months, vec!["2024-01", "2023-12", "2023-02"]);
    }

    #[test]
    fn test_duplicates_are_not_removed() {
        let budgets = vec![
            budget("b1", 100, "Food", "2024-06"),
            budget("b2", 100, "Food", "2024-06"),
        ];
        let groups = BudgetGroups::from_budgets(&budgets);
        assert_eq!(groups.get(key("2024-06")).unwrap().len(), 2);
    }

    #[test]
    fn test_empty() {
        let groups = BudgetGroups::from_budgets(&[]);
        assert!(groups.is_empty());
        assert_eq!(groups.into_iter().count(), 0);
    }
}
