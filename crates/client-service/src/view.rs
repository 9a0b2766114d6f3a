//! 项目列表视图模型
//!
//! 复刻列表页的行为：挂载时并发拉取第一页和购物车，任何一个
//! 失败都不报错，回退到占位内容（"永远有东西可看"）。搜索只过滤
//! 当前已加载的一页，不会跨页查询——这是已知的功能边界。
//!
//! 取消收藏会调用删除接口：收藏时记下服务端返回的条目ID，
//! 取消时用条目ID（不是项目ID）删除，保证本地状态和服务端一致

use crate::api::{CatalogApi, Pagination, ProjectSummary};
use std::collections::HashSet;
use tracing::{debug, warn};

/// 视图加载状态
///
/// 挂载和翻页期间是 `Loading`，其余时间 `Ready`。
/// 每个条目的收藏操作有独立的进行中标记，不影响整页状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}

/// 已收藏条目的本地记录：项目ID和服务端的购物车条目ID
#[derive(Debug, Clone)]
struct SavedEntry {
    cart_item_id: String,
    project_id: String,
}

pub struct ListingView<A: CatalogApi> {
    api: A,
    state: LoadState,
    projects: Vec<ProjectSummary>,
    pagination: Pagination,
    saved: Vec<SavedEntry>,
    saving: HashSet<String>,
}

/// 占位项目，后端不可用时保证界面有内容
fn placeholder_projects() -> Vec<ProjectSummary> {
    vec![
        ProjectSummary {
            id: "1".to_string(),
            title: "Kemampuan Merangkum Tulisan".to_string(),
            description: Some("Latihan merangkum berbagai jenis tulisan dengan metode efektif".to_string()),
            category: "Writing".to_string(),
            author: "Bahasa Sunda".to_string(),
            image_url: "https://picsum.photos/600/400?random=1".to_string(),
        },
        ProjectSummary {
            id: "2".to_string(),
            title: "Bahasa Jawa Praktis".to_string(),
            description: Some("Pembelajaran Bahasa Jawa untuk pemula dengan contoh-contoh praktis".to_string()),
            category: "Language".to_string(),
            author: "Pak Bambang".to_string(),
            image_url: "https://picsum.photos/600/400?random=2".to_string(),
        },
        ProjectSummary {
            id: "3".to_string(),
            title: "Komputer Dasar".to_string(),
            description: Some("Pengenalan dasar-dasar komputer dan penggunaannya dalam kehidupan sehari-hari".to_string()),
            category: "Technology".to_string(),
            author: "Teknologi Indonesia".to_string(),
            image_url: "https://picsum.photos/600/400?random=3".to_string(),
        },
    ]
}

/// 占位分页信息，配合占位项目展示翻页控件
fn placeholder_pagination() -> Pagination {
    Pagination {
        total: 9,
        page: 1,
        limit: 3,
        total_pages: 3,
        has_more: true,
    }
}

impl<A: CatalogApi> ListingView<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: LoadState::Loading,
            projects: placeholder_projects(),
            pagination: placeholder_pagination(),
            saved: Vec::new(),
            saving: HashSet::new(),
        }
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn projects(&self) -> &[ProjectSummary] {
        &self.projects
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// 挂载视图：并发拉取第一页项目和购物车内容
    ///
    /// 任何一个请求失败都只记录日志，视图回退到占位内容
    pub async fn mount(&mut self) {
        self.state = LoadState::Loading;

        let limit = self.pagination.limit;
        let (projects, cart) = tokio::join!(self.api.fetch_projects(1, limit), self.api.fetch_cart());

        match projects {
            Ok(page) if !page.projects.is_empty() => {
                self.projects = page.projects;
                self.pagination = page.pagination;
            }
            Ok(_) => {
                // 后端没有数据时保留占位内容
                self.pagination.page = 1;
            }
            Err(e) => {
                warn!("⚠️ 拉取项目列表失败: {e}");
            }
        }

        match cart {
            Ok(items) => {
                self.saved = items
                    .into_iter()
                    .map(|d| SavedEntry {
                        cart_item_id: d.id,
                        project_id: d.project_id,
                    })
                    .collect();
            }
            Err(e) => {
                warn!("⚠️ 拉取购物车失败: {e}");
            }
        }

        self.state = LoadState::Ready;
    }

    /// 当前页经过搜索过滤后可见的项目
    ///
    /// 只过滤已加载的当前页，匹配标题/描述/分类/作者，不区分大小写
    pub fn visible(&self, query: &str) -> Vec<&ProjectSummary> {
        if query.is_empty() {
            return self.projects.iter().collect();
        }

        let needle = query.to_lowercase();
        self.projects
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
                    || p.category.to_lowercase().contains(&needle)
                    || p.author.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// 翻页
    ///
    /// 目标页越界时不做任何事。拉取失败时保留当前内容，只更新页码
    pub async fn change_page(&mut self, new_page: u32) {
        if new_page < 1 || new_page > self.pagination.total_pages {
            return;
        }

        self.state = LoadState::Loading;

        match self.api.fetch_projects(new_page, self.pagination.limit).await {
            Ok(page) if !page.projects.is_empty() => {
                self.projects = page.projects;
                self.pagination = page.pagination;
            }
            Ok(_) => {
                self.pagination.page = new_page;
            }
            Err(e) => {
                warn!("⚠️ 拉取第 {new_page} 页失败: {e}");
                self.pagination.page = new_page;
            }
        }

        self.state = LoadState::Ready;
    }

    /// 切换收藏状态
    ///
    /// 未收藏则调用收藏接口并记录返回的条目ID；已收藏则用记录的
    /// 条目ID调用删除接口。请求失败时本地状态保持不变。
    /// 同一个项目的操作进行中时重复调用会被忽略
    pub async fn toggle_save(&mut self, project_id: &str) {
        if self.saving.contains(project_id) {
            debug!("收藏操作进行中，忽略: {project_id}");
            return;
        }
        self.saving.insert(project_id.to_string());

        if let Some(pos) = self.saved.iter().position(|e| e.project_id == project_id) {
            let cart_item_id = self.saved[pos].cart_item_id.clone();
            match self.api.remove_from_cart(&cart_item_id).await {
                Ok(()) => {
                    self.saved.remove(pos);
                }
                Err(e) => {
                    warn!("⚠️ 取消收藏失败: {e}");
                }
            }
        } else {
            match self.api.add_to_cart(project_id).await {
                Ok(item) => {
                    self.saved.push(SavedEntry {
                        cart_item_id: item.id,
                        project_id: project_id.to_string(),
                    });
                }
                Err(e) => {
                    warn!("⚠️ 收藏失败: {e}");
                }
            }
        }

        self.saving.remove(project_id);
    }

    pub fn is_saved(&self, project_id: &str) -> bool {
        self.saved.iter().any(|e| e.project_id == project_id)
    }

    pub fn is_saving(&self, project_id: &str) -> bool {
        self.saving.contains(project_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CartItem, CartItemDetail, ProjectPage};
    use anyhow::{anyhow, Result};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    /// 内存版的目录服务，数据固定、可注入故障
    ///
    /// 故障开关放在Arc里，测试可以在视图持有mock之后继续拨动
    struct MockApi {
        dataset: Vec<ProjectSummary>,
        fail_fetch: Arc<AtomicBool>,
        fail_mutations: Arc<AtomicBool>,
        cart: Arc<Mutex<Vec<CartItemDetail>>>,
        removed: Arc<Mutex<Vec<String>>>,
        next_item_id: Mutex<u32>,
    }

    impl MockApi {
        fn with_projects(count: usize) -> Self {
            let dataset = (0..count)
                .map(|i| ProjectSummary {
                    id: format!("p{i}"),
                    title: format!("Project {i}"),
                    description: Some(format!("Description {i}")),
                    category: if i % 2 == 0 { "Writing" } else { "Language" }.to_string(),
                    author: format!("Author {i}"),
                    image_url: format!("https://example.com/{i}.png"),
                })
                .collect();
            Self {
                dataset,
                fail_fetch: Arc::new(AtomicBool::new(false)),
                fail_mutations: Arc::new(AtomicBool::new(false)),
                cart: Arc::new(Mutex::new(Vec::new())),
                removed: Arc::new(Mutex::new(Vec::new())),
                next_item_id: Mutex::new(0),
            }
        }

        fn failing() -> Self {
            let mock = Self::with_projects(0);
            mock.fail_fetch.store(true, Ordering::SeqCst);
            mock
        }
    }

    #[async_trait::async_trait]
    impl CatalogApi for MockApi {
        async fn fetch_projects(&self, page: u32, limit: u32) -> Result<ProjectPage> {
            if self.fail_fetch.load(Ordering::SeqCst) {
                return Err(anyhow!("backend unreachable"));
            }

            let total = self.dataset.len() as u32;
            let total_pages = if total == 0 { 0 } else { (total + limit - 1) / limit };
            let offset = ((page - 1) * limit) as usize;
            let projects = self
                .dataset
                .iter()
                .skip(offset)
                .take(limit as usize)
                .cloned()
                .collect();

            Ok(ProjectPage {
                projects,
                pagination: Pagination {
                    total,
                    page,
                    limit,
                    total_pages,
                    has_more: page < total_pages,
                },
            })
        }

        async fn fetch_cart(&self) -> Result<Vec<CartItemDetail>> {
            if self.fail_fetch.load(Ordering::SeqCst) {
                return Err(anyhow!("backend unreachable"));
            }
            Ok(self.cart.lock().unwrap().clone())
        }

        async fn add_to_cart(&self, project_id: &str) -> Result<CartItem> {
            if self.fail_mutations.load(Ordering::SeqCst) {
                return Err(anyhow!("backend unreachable"));
            }

            let mut next = self.next_item_id.lock().unwrap();
            *next += 1;
            let item = CartItem {
                id: format!("cart-{}", *next),
                project_id: project_id.to_string(),
                user_id: "guest".to_string(),
                created_at: "2025-08-01T00:00:00Z".to_string(),
            };

            let project = self
                .dataset
                .iter()
                .find(|p| p.id == project_id)
                .cloned()
                .ok_or_else(|| anyhow!("project not found"))?;
            self.cart.lock().unwrap().push(CartItemDetail {
                id: item.id.clone(),
                project_id: item.project_id.clone(),
                user_id: item.user_id.clone(),
                created_at: item.created_at.clone(),
                project,
            });

            Ok(item)
        }

        async fn remove_from_cart(&self, cart_item_id: &str) -> Result<()> {
            if self.fail_mutations.load(Ordering::SeqCst) {
                return Err(anyhow!("backend unreachable"));
            }
            self.removed.lock().unwrap().push(cart_item_id.to_string());
            self.cart.lock().unwrap().retain(|c| c.id != cart_item_id);
            Ok(())
        }
    }

    #[tokio::test]
    async fn mount_failure_falls_back_to_placeholders() {
        let mut view = ListingView::new(MockApi::failing());
        view.mount().await;

        // 失败被吞掉，界面仍然有内容
        assert_eq!(view.state(), LoadState::Ready);
        assert_eq!(view.projects().len(), 3);
        assert_eq!(view.pagination().page, 1);
        assert!(!view.is_saved("1"));
    }

    #[tokio::test]
    async fn mount_loads_first_page_and_cart() {
        let mock = MockApi::with_projects(9);
        // 预先收藏一个项目
        mock.add_to_cart("p1").await.unwrap();

        let mut view = ListingView::new(mock);
        view.mount().await;

        assert_eq!(view.state(), LoadState::Ready);
        assert_eq!(view.projects().len(), 3);
        assert_eq!(view.pagination().total, 9);
        assert!(view.pagination().has_more);
        assert!(view.is_saved("p1"));
        assert!(!view.is_saved("p0"));
    }

    #[tokio::test]
    async fn filter_matches_all_text_fields() {
        let mut view = ListingView::new(MockApi::with_projects(3));
        view.mount().await;

        assert_eq!(view.visible("").len(), 3);
        assert_eq!(view.visible("project 1").len(), 1);
        assert_eq!(view.visible("WRITING").len(), 2);
        assert_eq!(view.visible("author 2").len(), 1);
        assert_eq!(view.visible("description 0").len(), 1);
        assert!(view.visible("nonexistent").is_empty());
    }

    #[tokio::test]
    async fn filter_only_sees_current_page() {
        let mut view = ListingView::new(MockApi::with_projects(9));
        view.mount().await;

        // "Project 5" 在第二页，第一页搜不到
        assert!(view.visible("project 5").is_empty());

        view.change_page(2).await;
        assert_eq!(view.visible("project 5").len(), 1);
    }

    #[tokio::test]
    async fn change_page_ignores_out_of_bounds() {
        let mut view = ListingView::new(MockApi::with_projects(9));
        view.mount().await;

        let before: Vec<_> = view.projects().to_vec();

        view.change_page(0).await;
        assert_eq!(view.pagination().page, 1);

        view.change_page(4).await;
        assert_eq!(view.pagination().page, 1);
        assert_eq!(view.projects(), &before[..]);
    }

    #[tokio::test]
    async fn change_page_failure_keeps_items() {
        let mock = MockApi::with_projects(9);
        let fail_fetch = mock.fail_fetch.clone();
        let mut view = ListingView::new(mock);
        view.mount().await;

        let before: Vec<_> = view.projects().to_vec();

        // mount之后让后端失效
        fail_fetch.store(true, Ordering::SeqCst);
        view.change_page(2).await;

        // 内容保留，页码前进
        assert_eq!(view.projects(), &before[..]);
        assert_eq!(view.pagination().page, 2);
        assert_eq!(view.state(), LoadState::Ready);
    }

    #[tokio::test]
    async fn toggle_save_reconciles_with_server() {
        let mock = MockApi::with_projects(3);
        let removed = mock.removed.clone();
        let cart = mock.cart.clone();

        let mut view = ListingView::new(mock);
        view.mount().await;

        view.toggle_save("p0").await;
        assert!(view.is_saved("p0"));
        assert!(!view.is_saving("p0"));
        let cart_item_id = cart.lock().unwrap()[0].id.clone();

        // 取消收藏：用条目ID调用删除接口，而不是项目ID
        view.toggle_save("p0").await;
        assert!(!view.is_saved("p0"));
        assert_eq!(removed.lock().unwrap().as_slice(), &[cart_item_id]);
        assert!(cart.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn toggle_save_failure_leaves_state_unchanged() {
        let mock = MockApi::with_projects(3);
        mock.fail_mutations.store(true, Ordering::SeqCst);
        let mut view = ListingView::new(mock);
        view.mount().await;

        view.toggle_save("p0").await;

        assert!(!view.is_saved("p0"));
        assert!(!view.is_saving("p0"));
    }
}
