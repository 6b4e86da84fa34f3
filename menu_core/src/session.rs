//! `Session`：对上层（CLI/GUI）提供的会话对象。
//!
//! `Session` 自身不做业务逻辑判断，而是：
//! - 持有 `Selection`（状态）
//! - 持有 processors 链（可插拔）
//! - 把每次 `InputEvent` 依次交给 processors，直到被消费
//! - 最后输出新的 `MenuView`

use std::mem;

use tracing::debug;

use crate::{
    engine::Engine,
    event::InputEvent,
    model::MenuView,
    processor::{CategoryProcessor, DetailProcessor, ProcessStatus, Processor, SearchProcessor},
    selection::Selection,
};

/// 菜单浏览会话（一次浏览过程的状态容器）。
pub struct Session {
    /// 引擎（包含目录、筛选与分类推导）
    engine: Engine,
    selection: Selection,
    /// processors 链（可配置/可扩展）
    processors: Vec<Box<dyn Processor>>,
}

impl Session {
    /// 创建会话，并组装默认 processors 链。
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            selection: Selection::default(),
            processors: vec![
                Box::new(SearchProcessor),
                Box::new(CategoryProcessor),
                Box::new(DetailProcessor),
            ],
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// 获取当前 UI 快照（只读）。
    pub fn view(&self) -> MenuView {
        self.engine.compose(&self.selection)
    }

    /// 处理一个输入事件，返回最新 UI 快照。
    pub fn handle(&mut self, ev: InputEvent) -> MenuView {
        debug!(event = ?ev, "handling input event");
        let mut selection = mem::take(&mut self.selection);
        for p in &self.processors {
            let (status, next) = p.process(self.engine.catalog(), selection, &ev);
            selection = next;
            if status == ProcessStatus::Consume {
                break;
            }
        }
        self.selection = selection;
        self.view()
    }
}
