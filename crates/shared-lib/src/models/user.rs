//! 用户标识
//!
//! 系统没有真实的账号体系，未登录的调用方统一使用游客身份。
//! 调用边界上一律传递 `Option<String>`，默认值只在这里补齐一次，
//! 避免 `"guest"` 魔法字符串散落在各层。

use serde::{Deserialize, Serialize};

/// 游客的固定标识
const GUEST: &str = "guest";

/// 用户标识
///
/// 自由文本，不做任何校验。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// 游客身份
    pub fn guest() -> Self {
        Self(GUEST.to_string())
    }

    /// 从可选的请求参数生成用户标识，缺失时回退为游客
    pub fn or_guest(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Self(v),
            _ => Self::guest(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}
