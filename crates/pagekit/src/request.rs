use pagekit_derive::Record;
use serde::{Deserialize, Serialize};

use crate::num::de_str_or_num_to_i64;

/// 分页请求参数
///
/// 现成的请求记录形状，页码与大小支持字符串或数字输入。
/// [`parse`](crate::parse::parse) 不要求使用该类型，任何派生了
/// `Record` 的请求结构都可以直接解析，也可以把该类型作为子字段
/// 嵌入自定义请求（字段名 `page` / `pagination` 等会被自动识别）。
///
/// # 字段
///
/// - `page_num`: 页码，从 1 开始，0 表示未指定
/// - `page_size`: 每页大小，0 表示未指定
///
/// # 示例
/// ```rust
/// use pagekit::prelude::*;
///
/// let json = r#"{"page_num": "2", "page_size": 30, "order_by": "id"}"#;
/// let req: PageRequest = serde_json::from_str(json).unwrap();
///
/// let page = parse(&req).unwrap();
/// assert_eq!(page.num, 2);
/// assert_eq!(page.size, 30);
/// assert_eq!(page.order_by, "id");
/// ```
#[derive(Clone, Debug, Default, Deserialize, Serialize, Record)]
#[serde(default)]
pub struct PageRequest {
    /// 页码，从 1 开始
    #[serde(deserialize_with = "de_str_or_num_to_i64")]
    pub page_num: i64,
    /// 每页大小
    #[serde(deserialize_with = "de_str_or_num_to_i64")]
    pub page_size: i64,
    /// 排序字段
    pub order_by: String,
    /// 是否倒序
    pub is_descending: bool,
    /// 搜索关键字
    pub search_key: String,
}
