use tracing::debug;

use crate::catalog::Catalog;
use crate::category::derive_categories;
use crate::filter::filter_dishes;
use crate::model::MenuView;
use crate::selection::Selection;

/// 引擎：持有目录，负责把 `Selection` 转成 `MenuView`。
///
/// 流水线：selection -> filter（搜索 + 分类） -> category（分类栏） -> 解析选中菜品 -> 输出 MenuView
pub struct Engine {
    catalog: Catalog,
}

impl Engine {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// 每次都重新计算派生视图；目录很小，不做缓存。
    pub fn compose(&self, selection: &Selection) -> MenuView {
        let dishes: Vec<_> = filter_dishes(&self.catalog, &selection.search_term, &selection.selected_category)
            .into_iter()
            .cloned()
            .collect();
        let categories = derive_categories(&self.catalog);
        let selected_dish = selection
            .selected_dish
            .and_then(|id| self.catalog.get(id))
            .cloned();
        debug!(
            search_term = %selection.search_term,
            category = %selection.selected_category,
            matched = dishes.len(),
            detail = selected_dish.is_some(),
            "composed menu view"
        );
        MenuView {
            search_term: selection.search_term.clone(),
            selected_category: selection.selected_category.clone(),
            categories,
            dishes,
            selected_dish,
        }
    }
}
