use std::fmt;

use serde::{Deserialize, Serialize};

/// 菜品标识（在同一个 `Catalog` 内唯一且稳定）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DishId(pub u32);

impl fmt::Display for DishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 菜品（不可变记录）。
///
/// 注意：只有 `name/pinyin_name/category` 参与筛选；
/// `description/price/image` 仅供展示层使用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    /// 展示名（中文）
    pub name: String,
    /// 拼音名（例如 "mapo doufu"）
    pub pinyin_name: String,
    /// 分类标签（例如 "川菜"）
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// 价格（元）
    #[serde(default)]
    pub price: u32,
    /// 图片引用（URL 或相对路径）
    #[serde(default)]
    pub image: String,
}

/// 引擎给 UI 的“快照视图”。
///
/// 设计目标：
/// - UI 层只读 `MenuView`，不直接读写 `Selection`
/// - 便于 GUI/CLI 输出与调试
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    /// 当前搜索词（原样保留，未转小写）
    pub search_term: String,
    /// 当前分类（哨兵或分类标签）
    pub selected_category: String,
    /// 分类栏：首元素为哨兵，其余按首次出现顺序
    pub categories: Vec<String>,
    /// 筛选结果，保持 catalog 原有顺序
    pub dishes: Vec<Dish>,
    /// 详情弹窗中的菜品
    pub selected_dish: Option<Dish>,
}

impl MenuView {
    /// 没有任何菜品匹配（UI 需要展示“没有找到相关菜品”）。
    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}
