//! `filter`：按搜索词与分类筛选菜品。

use crate::{ALL_CATEGORIES, catalog::Catalog, model::Dish};

/// DishFilter：判断单个菜品是否保留。
pub trait DishFilter {
    fn accepts(&self, dish: &Dish) -> bool;
}

/// 搜索词过滤：对 `name`/`pinyin_name` 做大小写不敏感的子串匹配；空串总是匹配。
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    pub fn new(search_term: &str) -> Self {
        Self {
            needle: search_term.to_lowercase(),
        }
    }
}

impl DishFilter for SearchFilter {
    fn accepts(&self, dish: &Dish) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        dish.name.to_lowercase().contains(&self.needle)
            || dish.pinyin_name.to_lowercase().contains(&self.needle)
    }
}

/// 分类过滤：哨兵匹配一切，否则要求分类完全相等（区分大小写）。
pub struct CategoryFilter<'a> {
    selected: &'a str,
}

impl<'a> CategoryFilter<'a> {
    pub fn new(selected_category: &'a str) -> Self {
        Self {
            selected: selected_category,
        }
    }
}

impl DishFilter for CategoryFilter<'_> {
    fn accepts(&self, dish: &Dish) -> bool {
        self.selected == ALL_CATEGORIES || dish.category == self.selected
    }
}

/// 筛选目录：同时满足分类与搜索条件的菜品，保持目录原有顺序。
///
/// 无匹配时返回空列表，由展示层负责渲染“空结果”提示。
pub fn filter_dishes<'a>(catalog: &'a Catalog, search_term: &str, selected_category: &str) -> Vec<&'a Dish> {
    let category = CategoryFilter::new(selected_category);
    let search = SearchFilter::new(search_term);
    catalog
        .iter()
        .filter(|dish| category.accepts(dish) && search.accepts(dish))
        .collect()
}
