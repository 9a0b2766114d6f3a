//! 数据库仓库 trait 定义
//!
//! 这里定义了各种数据库仓库的抽象接口。
//!
//! 所有 Repository trait 都遵循统一的约束：
//!
//! ```text
//! pub trait XxxRepositoryTrait: Send + Sync + 'static {
//!     // 异步方法定义...
//! }
//! ```
//!
//! `Send + Sync` 保证实例可以在多个请求线程之间共享，`'static` 满足
//! 异步 trait 方法返回的 Future 的生命周期要求。服务层只依赖这些
//! trait，测试时可以替换为内存实现。

pub mod cart;
pub mod project;

// 重新导出
pub use cart::CartRepositoryTrait;
pub use project::ProjectRepositoryTrait;
