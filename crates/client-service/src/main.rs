//! 列表视图演示程序
//!
//! 连接运行中的后端，挂载视图并翻一页，把看到的内容打到日志里

use anyhow::Result;
use client_service::{HttpCatalogApi, ListingView};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    tracing_subscriber::fmt::init();

    let api = HttpCatalogApi::from_env();
    let mut view = ListingView::new(api);

    info!("🚀 挂载列表视图...");
    view.mount().await;

    print_page(&view);

    if view.pagination().has_more {
        let next = view.pagination().page + 1;
        info!("➡️ 翻到第 {} 页", next);
        view.change_page(next).await;
        print_page(&view);
    }

    Ok(())
}

fn print_page<A: client_service::CatalogApi>(view: &ListingView<A>) {
    let pagination = view.pagination();
    info!(
        "📋 第 {}/{} 页，共 {} 个项目",
        pagination.page, pagination.total_pages, pagination.total
    );

    for project in view.projects() {
        let marker = if view.is_saved(&project.id) { "★" } else { " " };
        info!("  {} {} ({}) - {}", marker, project.title, project.category, project.author);
    }
}
