//! `catalog`：静态菜品目录。
//!
//! core 不关心目录来自文件/内存/网络；加载由 `menu_catalog` 负责，
//! 这里只保证构造出来的目录满足不变量，之后不再修改。

use std::collections::HashSet;

use crate::{
    ALL_CATEGORIES,
    error::CatalogError,
    model::{Dish, DishId},
};

/// 有序、不可变的菜品目录。
///
/// 约定：
/// - 任意两个菜品的 `id` 不同
/// - 没有菜品的分类等于 `ALL_CATEGORIES`
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    dishes: Vec<Dish>,
}

impl Catalog {
    /// 校验不变量并构造目录；顺序按传入顺序保留。
    pub fn new(dishes: Vec<Dish>) -> Result<Self, CatalogError> {
        let mut seen: HashSet<DishId> = HashSet::with_capacity(dishes.len());
        for dish in &dishes {
            if !seen.insert(dish.id) {
                return Err(CatalogError::DuplicateId(dish.id));
            }
            if dish.category == ALL_CATEGORIES {
                return Err(CatalogError::ReservedCategory { id: dish.id });
            }
        }
        Ok(Self { dishes })
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dish> {
        self.dishes.iter()
    }

    /// 按 id 查找菜品（目录很小，线性查找即可）。
    pub fn get(&self, id: DishId) -> Option<&Dish> {
        self.dishes.iter().find(|d| d.id == id)
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Dish;
    type IntoIter = std::slice::Iter<'a, Dish>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
