//! `menu_core`：菜单浏览的纯逻辑层，不做任何 I/O。
//!
//! 设计目标：
//! - **核心可复用**：CLI/GUI 都能复用同一套搜索、筛选、选中逻辑
//! - **分层清晰**：event -> processor -> selection -> engine(filter + category) -> 输出（`MenuView`）
//! - **状态不可变**：`Selection` 每次转移都产生新值，便于脱离渲染环境测试
pub mod catalog;
pub mod category;
pub mod engine;
pub mod error;
pub mod event;
pub mod filter;
pub mod model;
pub mod processor;
pub mod selection;
pub mod session;

/// “全部分类”哨兵标签；不会与任何真实分类相等（由 `Catalog::new` 保证）。
pub const ALL_CATEGORIES: &str = "全部";
