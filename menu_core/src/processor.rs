//! `processor`：输入事件处理链。
//!
//! Processor 按顺序处理 `InputEvent`：消费事件的 processor 对 `Selection`
//! 做且仅做一次转移，其余 processor 原样传递。
//!
//! 当前链路（`Session::new` 默认组装）：
//! - `SearchProcessor`：搜索词变化
//! - `CategoryProcessor`：切换分类
//! - `DetailProcessor`：打开/关闭详情（只接受目录中存在的菜品）

use tracing::warn;

use crate::{catalog::Catalog, event::InputEvent, selection::Selection};

/// Processor 执行结果：是否“消费”了本次事件。
///
/// - `Consume`：本 processor 已处理该事件，后续 processor 不再执行
/// - `Continue`：本 processor 不处理该事件，交给下一个 processor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    Consume,
    Continue,
}

/// Processor：处理输入事件并返回下一个 `Selection`。
pub trait Processor: Send + Sync {
    fn process(&self, catalog: &Catalog, selection: Selection, input_event: &InputEvent) -> (ProcessStatus, Selection);
}

pub struct SearchProcessor;

impl Processor for SearchProcessor {
    fn process(&self, _catalog: &Catalog, selection: Selection, input_event: &InputEvent) -> (ProcessStatus, Selection) {
        match input_event {
            InputEvent::Search(term) => (ProcessStatus::Consume, selection.set_search_term(term.as_str())),
            _ => (ProcessStatus::Continue, selection),
        }
    }
}

pub struct CategoryProcessor;

impl Processor for CategoryProcessor {
    fn process(&self, _catalog: &Catalog, selection: Selection, input_event: &InputEvent) -> (ProcessStatus, Selection) {
        match input_event {
            InputEvent::SelectCategory(category) => {
                (ProcessStatus::Consume, selection.set_selected_category(category.as_str()))
            }
            _ => (ProcessStatus::Continue, selection),
        }
    }
}

pub struct DetailProcessor;

impl Processor for DetailProcessor {
    fn process(&self, catalog: &Catalog, selection: Selection, input_event: &InputEvent) -> (ProcessStatus, Selection) {
        match *input_event {
            InputEvent::OpenDish(id) => match catalog.get(id) {
                Some(dish) => (ProcessStatus::Consume, selection.select_dish(dish)),
                None => {
                    warn!(%id, "ignoring unknown dish id");
                    (ProcessStatus::Consume, selection)
                }
            },
            InputEvent::CloseDetail => (ProcessStatus::Consume, selection.clear_selection()),
            _ => (ProcessStatus::Continue, selection),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::tests::sample, model::DishId};

    #[test]
    fn search_processor_ignores_other_events() {
        let catalog = sample();
        let (status, s) = SearchProcessor.process(&catalog, Selection::default(), &InputEvent::CloseDetail);
        assert_eq!(status, ProcessStatus::Continue);
        assert_eq!(s, Selection::default());

        let (status, s) = SearchProcessor.process(&catalog, s, &InputEvent::Search("yu".into()));
        assert_eq!(status, ProcessStatus::Consume);
        assert_eq!(s.search_term, "yu");
    }

    #[test]
    fn detail_processor_rejects_dangling_id() {
        let catalog = sample();
        let (status, s) = DetailProcessor.process(&catalog, Selection::default(), &InputEvent::OpenDish(DishId(99)));
        assert_eq!(status, ProcessStatus::Consume);
        assert_eq!(s.selected_dish, None);

        let (_, s) = DetailProcessor.process(&catalog, s, &InputEvent::OpenDish(DishId(1)));
        assert_eq!(s.selected_dish, Some(DishId(1)));
        let (_, s) = DetailProcessor.process(&catalog, s, &InputEvent::CloseDetail);
        assert_eq!(s.selected_dish, None);
    }

    #[test]
    fn exit_is_not_consumed() {
        let catalog = sample();
        for p in [&SearchProcessor as &dyn Processor, &CategoryProcessor, &DetailProcessor] {
            let (status, _) = p.process(&catalog, Selection::default(), &InputEvent::Exit);
            assert_eq!(status, ProcessStatus::Continue);
        }
    }
}
