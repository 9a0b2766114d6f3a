use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// 缺省页码
const DEFAULT_PAGE: u32 = 1;

/// 缺省每页大小
const DEFAULT_LIMIT: u32 = 10;

/// 分页查询参数
///
/// 两个参数都以原始字符串接收：缺失或者非数字时回退到默认值
/// （page=1, limit=10），而不是返回400。小于1的值收敛到1，
/// 保证偏移量非负、每页大小至少为1。
#[derive(Deserialize, Debug, Default, ToSchema, IntoParams)]
pub struct PageQuery {
    #[param(example = "1")]
    /// 分页查询的开始页数，从1开始
    pub page: Option<String>,

    #[param(example = "10")]
    /// 分页查询的每页大小
    pub limit: Option<String>,
}

impl PageQuery {
    /// 解析出生效的 (page, limit)
    pub fn resolve(&self) -> (u32, u32) {
        let page = resolve_param(self.page.as_deref(), DEFAULT_PAGE);
        let limit = resolve_param(self.limit.as_deref(), DEFAULT_LIMIT);
        (page, limit)
    }
}

/// 解析单个分页参数：解析失败用默认值，解析成功则收敛到 >= 1
fn resolve_param(raw: Option<&str>, default: u32) -> u32 {
    match raw.and_then(|s| s.parse::<i64>().ok()) {
        Some(v) => v.clamp(1, u32::MAX as i64) as u32,
        None => default,
    }
}

/// 分页元数据
///
/// 列表接口统一返回的分页信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[schema(example = 146)]
    /// 记录总数
    pub total: u32,

    #[schema(example = 1)]
    /// 当前页数
    pub page: u32,

    #[schema(example = 10)]
    /// 每页大小
    pub limit: u32,

    #[schema(example = 15)]
    /// 总页数
    pub total_pages: u32,

    /// 当前页之后是否还有数据
    pub has_more: bool,
}

impl Pagination {
    /// 根据总数和生效的分页参数计算元数据
    ///
    /// - `total_pages = ceil(total / limit)`，总数为0时为0
    /// - `has_more = page < total_pages`
    ///
    /// 调用方保证 `page >= 1`、`limit >= 1`，不存在除零。
    pub fn compute(total: u32, page: u32, limit: u32) -> Self {
        let total_pages = if total == 0 { 0 } else { (total + limit - 1) / limit };

        Self {
            total,
            page,
            limit,
            total_pages,
            has_more: page < total_pages,
        }
    }
}

/// 只带一条提示信息的响应体
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageReply {
    #[schema(example = "Project created successfully.")]
    pub message: String,
}
