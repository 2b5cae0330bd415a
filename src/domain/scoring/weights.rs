//! Per-category weights applied by the scorer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::catalog::Category;

/// Weight used for any category without an explicit entry.
pub const DEFAULT_CATEGORY_WEIGHT: f64 = 1.0;

/// Weight table keyed by category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryWeights(BTreeMap<Category, f64>);

impl CategoryWeights {
    /// Every category weighted 1.0.
    pub fn uniform() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder: override one category's weight.
    pub fn with_weight(mut self, category: Category, weight: f64) -> Self {
        self.0.insert(category, weight);
        self
    }

    pub fn weight(&self, category: Category) -> f64 {
        self.0
            .get(&category)
            .copied()
            .unwrap_or(DEFAULT_CATEGORY_WEIGHT)
    }

    /// Applies overrides on top of this table.
    pub fn merged(mut self, overrides: &BTreeMap<Category, f64>) -> Self {
        self.0.extend(overrides.iter().map(|(c, w)| (*c, *w)));
        self
    }
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self::uniform()
            .with_weight(Category::IdentityValue, 1.1)
            .with_weight(Category::CyberAptitude, 1.2)
            .with_weight(Category::ScenarioPreference, 1.3)
            .with_weight(Category::WorkStyle, 0.9)
            .with_weight(Category::DifficultySelection, 0.6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlisted_category_defaults_to_one() {
        let weights = CategoryWeights::default();
        assert_eq!(weights.weight(Category::TechnicalExposure), 1.0);
        assert_eq!(weights.weight(Category::ScenarioPreference), 1.3);
    }

    #[test]
    fn uniform_weights_everything_equally() {
        let weights = CategoryWeights::uniform();
        for category in Category::ALL {
            assert_eq!(weights.weight(category), 1.0);
        }
    }

    #[test]
    fn overrides_replace_defaults() {
        let overrides = BTreeMap::from([(Category::WorkStyle, 2.0)]);
        let weights = CategoryWeights::default().merged(&overrides);
        assert_eq!(weights.weight(Category::WorkStyle), 2.0);
        assert_eq!(weights.weight(Category::CyberAptitude), 1.2);
    }
}
