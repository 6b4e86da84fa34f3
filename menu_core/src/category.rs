//! `category`：从目录推导分类栏。

use std::collections::HashSet;

use crate::{ALL_CATEGORIES, catalog::Catalog};

/// 推导分类列表：首元素为哨兵，其余为目录中出现过的分类（去重，按首次出现顺序）。
pub fn derive_categories(catalog: &Catalog) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out: Vec<String> = vec![ALL_CATEGORIES.to_string()];
    for dish in catalog {
        if seen.insert(dish.category.as_str()) {
            out.push(dish.category.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::{dish, sample};

    #[test]
    fn sentinel_first_then_first_occurrence_order() {
        assert_eq!(derive_categories(&sample()), vec!["全部", "川菜", "海鲜"]);
    }

    #[test]
    fn interleaved_categories_appear_once() {
        let catalog = Catalog::new(vec![
            dish(1, "清蒸鱼", "qingzheng yu", "海鲜"),
            dish(2, "麻婆豆腐", "mapo doufu", "川菜"),
            dish(3, "椒盐虾", "jiaoyan xia", "海鲜"),
            dish(4, "米饭", "mifan", "主食"),
        ])
        .expect("catalog");
        assert_eq!(derive_categories(&catalog), vec!["全部", "海鲜", "川菜", "主食"]);
    }

    #[test]
    fn empty_catalog_has_only_sentinel() {
        assert_eq!(derive_categories(&Catalog::default()), vec![ALL_CATEGORIES]);
    }
}
