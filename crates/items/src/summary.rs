use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::item::Item;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: Category,
    pub count: u64,
}

/// Item counts per category, in canonical category order.
///
/// Every category is listed, including empty ones. `total` counts every item
/// given, so an item whose category is not a member (possible only after a
/// failed full update) shows up in `total` and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub categories: Vec<CategoryCount>,
    pub total: u64,
}

impl CategorySummary {
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let mut counts = [0u64; Category::ALL.len()];
        let mut total = 0;

        for item in items {
            total += 1;
            if let Some(category) = item.category_kind() {
                counts[category as usize] += 1;
            }
        }

        let categories = Category::ALL
            .into_iter()
            .zip(counts)
            .map(|(category, count)| CategoryCount { category, count })
            .collect();

        Self { categories, total }
    }

    pub fn count(&self, category: Category) -> u64 {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map_or(0, |c| c.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(category: &str) -> Item {
        Item::new("name", category, "brand", 1, "2023-01-01").unwrap()
    }

    #[test]
    fn empty_catalogue_lists_every_category() {
        let summary = CategorySummary::from_items(&[] as &[Item]);
        assert_eq!(summary.total, 0);
        assert_eq!(
            summary.categories.iter().map(|c| c.category).collect::<Vec<_>>(),
            Category::ALL.to_vec()
        );
        assert!(summary.categories.iter().all(|c| c.count == 0));
    }

    #[test]
    fn counts_per_category() {
        let items = vec![item("時計"), item("時計"), item("靴"), item("その他")];
        let summary = CategorySummary::from_items(&items);

        assert_eq!(summary.total, 4);
        assert_eq!(summary.count(Category::Watches), 2);
        assert_eq!(summary.count(Category::Bags), 0);
        assert_eq!(summary.count(Category::Shoes), 1);
        assert_eq!(summary.count(Category::Other), 1);
    }

    #[test]
    fn unlisted_category_counts_toward_total_only() {
        let mut broken = item("バッグ");
        let _ = broken.update("name", "衣服", "brand", 1, "2023-01-01");
        let items = [item("バッグ"), broken];

        let summary = CategorySummary::from_items(&items);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.count(Category::Bags), 1);
        assert_eq!(summary.categories.iter().map(|c| c.count).sum::<u64>(), 1);
    }
}
