//! 列表视图客户端
//!
//! 项目列表页的无界面实现：通过 HTTP API 拉取项目和购物车数据，
//! 维护加载状态、翻页和收藏切换。界面渲染不在这个crate的范围内

pub mod api;
pub mod view;

pub use api::{CatalogApi, HttpCatalogApi};
pub use view::ListingView;
