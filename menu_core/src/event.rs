use crate::model::DishId;

/// 输入事件（逻辑 UI 事件）。
///
/// 说明：
/// - `Session`/processor 只关心“语义事件”，不关心具体控件或按键。
/// - CLI/GUI 层负责把用户操作转换成这些事件，每次操作对应一个事件。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// 搜索框内容变化（整串替换）
    Search(String),
    /// 点击分类标签
    SelectCategory(String),
    /// 点击菜品卡片，打开详情
    OpenDish(DishId),
    /// 关闭详情弹窗
    CloseDetail,
    /// 退出（上层用；core 忽略）
    Exit,
}
