//! Multi-select category filtering for the shop view.
//!
//! The selection is derived from the request on every page view and is
//! never persisted; an empty selection means "all categories".

use crate::catalog::{Category, Product};

/// A set of selected categories with toggle semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySelection {
    selected: Vec<Category>,
}

impl CategorySelection {
    /// Build a selection from display labels, ignoring unknown names and
    /// duplicates.
    #[must_use]
    pub fn from_labels<'a, I: IntoIterator<Item = &'a str>>(labels: I) -> Self {
        let mut selection = Self::default();
        for label in labels {
            if let Some(category) = Category::from_label(label)
                && !selection.is_selected(category)
            {
                selection.selected.push(category);
            }
        }
        selection
    }

    /// Add the category if absent, remove it if present.
    pub fn toggle(&mut self, category: Category) {
        if let Some(pos) = self.selected.iter().position(|c| *c == category) {
            self.selected.remove(pos);
        } else {
            self.selected.push(category);
        }
    }

    /// Reset to the empty selection (= show all).
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    #[must_use]
    pub fn is_selected(&self, category: Category) -> bool {
        self.selected.contains(&category)
    }

    /// True when nothing is selected, i.e. every product is shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// The selected categories in toggle order.
    #[must_use]
    pub fn selected(&self) -> &[Category] {
        &self.selected
    }

    /// The products passing the filter, in catalog order.
    ///
    /// An empty selection passes everything; otherwise a product passes
    /// when its category is one of the selected ones (uncategorized
    /// products are filtered out).
    #[must_use]
    pub fn filter<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        if self.is_empty() {
            return products.iter().collect();
        }
        products
            .iter()
            .filter(|p| p.category.is_some_and(|c| self.is_selected(c)))
            .collect()
    }
}
