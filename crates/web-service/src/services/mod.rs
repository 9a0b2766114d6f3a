//! 服务层模块
//!
//! 包含业务逻辑的服务层实现：分页计算、存在性检查、游客身份补齐。
//! handler 只依赖这里的 trait，仓库实现可以在测试中被替换

pub mod cart;
pub mod project;
pub mod traits;

pub use cart::CartService;
pub use project::{ProjectListing, ProjectService};
pub use traits::{CartServiceTrait, ProjectServiceTrait};

use database::{DatabaseError, DatabaseResult};
use uuid::Uuid;

/// 解析边界上的不透明 ID
///
/// 对外的 ID 是不透明字符串。解析失败说明这个 ID 不可能存在，
/// 统一按 NotFound 处理而不是参数错误，`msg` 是对外的错误信息。
pub(crate) fn parse_id(raw: &str, msg: &str) -> DatabaseResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| DatabaseError::not_found(msg))
}
