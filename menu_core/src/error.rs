use thiserror::Error;

use crate::model::DishId;

/// 构造 `Catalog` 时违反不变量。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("duplicate dish id {0}")]
    DuplicateId(DishId),
    #[error("dish {id} uses the reserved category label \"{}\"", crate::ALL_CATEGORIES)]
    ReservedCategory { id: DishId },
}
