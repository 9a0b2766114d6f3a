//! 测试用内存仓库
//!
//! 同一个结构体同时实现项目和购物车两个仓库trait，
//! 这样级联删除可以在一个锁里完成，行为与数据库外键一致。

use chrono::Utc;
use database::{
    CartItemDetail, CartItemInfo, CartRepositoryTrait, DatabaseError, DatabaseResult,
    ProjectCreate, ProjectInfo, ProjectPage, ProjectRepositoryTrait,
};
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    projects: Mutex<Vec<ProjectInfo>>,
    cart_items: Mutex<Vec<CartItemInfo>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置一批项目，返回创建顺序的ID列表
    pub async fn seed_projects(&self, count: usize) -> Vec<Uuid> {
        let mut ids = Vec::with_capacity(count);
        for i in 0..count {
            let info = self
                .create_project(ProjectCreate {
                    title: format!("Project {i}"),
                    description: Some(format!("Description {i}")),
                    category: "Technology".to_string(),
                    author: format!("Author {i}"),
                    image_url: format!("https://example.com/{i}.png"),
                })
                .await
                .expect("seed project");
            ids.push(info.id);
        }
        ids
    }
}

#[async_trait::async_trait]
impl ProjectRepositoryTrait for InMemoryStore {
    async fn list_projects(&self, limit: i64, offset: i64) -> DatabaseResult<ProjectPage> {
        let rows = self.projects.lock().unwrap();
        let total = rows.len() as u32;

        // 内存版的"创建顺序"就是插入顺序
        let projects = rows
            .iter()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect();

        Ok(ProjectPage { projects, total })
    }

    async fn create_project(&self, project: ProjectCreate) -> DatabaseResult<ProjectInfo> {
        let info = ProjectInfo {
            id: Uuid::new_v4(),
            title: project.title,
            description: project.description,
            category: project.category,
            author: project.author,
            image_url: project.image_url,
            created_at: Utc::now(),
        };
        self.projects.lock().unwrap().push(info.clone());
        Ok(info)
    }

    async fn get_project_by_id(&self, id: Uuid) -> DatabaseResult<ProjectInfo> {
        self.projects
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| DatabaseError::not_found(format!("Project {id} not found")))
    }

    async fn delete_project(&self, id: Uuid) -> DatabaseResult<ProjectInfo> {
        let mut rows = self.projects.lock().unwrap();
        let pos = rows
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| DatabaseError::not_found(format!("Project {id} not found")))?;
        let removed = rows.remove(pos);

        // 模拟外键的 ON DELETE CASCADE
        self.cart_items.lock().unwrap().retain(|c| c.project_id != id);

        Ok(removed)
    }
}

#[async_trait::async_trait]
impl CartRepositoryTrait for InMemoryStore {
    async fn create_cart_item(
        &self,
        project_id: Uuid,
        user_id: &str,
    ) -> DatabaseResult<CartItemInfo> {
        let item = CartItemInfo {
            id: Uuid::new_v4(),
            project_id,
            user_id: user_id.to_string(),
            created_at: Utc::now(),
        };
        self.cart_items.lock().unwrap().push(item.clone());
        Ok(item)
    }

    async fn list_cart_items(&self, user_id: &str) -> DatabaseResult<Vec<CartItemDetail>> {
        let projects = self.projects.lock().unwrap();
        let items = self.cart_items.lock().unwrap();

        // 插入顺序反转即"最新在前"
        let details = items
            .iter()
            .filter(|c| c.user_id == user_id)
            .rev()
            .map(|c| CartItemDetail {
                item: c.clone(),
                project: projects
                    .iter()
                    .find(|p| p.id == c.project_id)
                    .cloned()
                    .expect("cascade keeps cart items consistent"),
            })
            .collect();

        Ok(details)
    }

    async fn delete_cart_item(&self, id: Uuid) -> DatabaseResult<()> {
        let mut items = self.cart_items.lock().unwrap();
        let before = items.len();
        items.retain(|c| c.id != id);

        if items.len() == before {
            return Err(DatabaseError::not_found(format!("Cart item {id} not found")));
        }
        Ok(())
    }
}
