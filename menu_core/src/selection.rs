//! `Selection`：会话内唯一的 UI 选择状态。
//!
//! 约定：
//! - `search_term`：用户输入的搜索词（任意字符串）
//! - `selected_category`：当前分类，默认哨兵 `ALL_CATEGORIES`
//! - `selected_dish`：详情弹窗中的菜品 id，None 表示未打开
//!
//! 每个转移函数都消耗旧值并返回新值，只替换对应的字段；没有转移限制，也没有终止状态。
use crate::{
    ALL_CATEGORIES,
    model::{Dish, DishId},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub search_term: String,
    pub selected_category: String,
    pub selected_dish: Option<DishId>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            selected_category: ALL_CATEGORIES.to_string(),
            selected_dish: None,
        }
    }
}

impl Selection {
    /// 替换搜索词；不做校验。
    #[must_use]
    pub fn set_search_term(self, term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            ..self
        }
    }

    /// 替换分类；不做校验，非法值只会让下一次筛选结果为空。
    #[must_use]
    pub fn set_selected_category(self, category: impl Into<String>) -> Self {
        Self {
            selected_category: category.into(),
            ..self
        }
    }

    /// 打开详情。只接受目录中的 `&Dish`，因此不会出现悬空引用。
    #[must_use]
    pub fn select_dish(self, dish: &Dish) -> Self {
        Self {
            selected_dish: Some(dish.id),
            ..self
        }
    }

    /// 关闭详情。
    #[must_use]
    pub fn clear_selection(self) -> Self {
        Self {
            selected_dish: None,
            ..self
        }
    }
}
