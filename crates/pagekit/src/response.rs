use pagekit_derive::Record;
use serde::{Deserialize, Serialize};

/// 分页响应数据
///
/// 现成的响应记录形状，可直接作为响应体，也可以作为名为
/// `page` / `pagination` 的子字段嵌入自定义响应，由
/// [`fill_response`](crate::page::Page::fill_response) 回填。
///
/// # 字段
///
/// - `total`: 总记录数
/// - `page_num`: 当前页码
/// - `page_size`: 每页大小
/// - `last_page`: 最后一页页码
/// - `data`: 当前页数据
///
/// # 示例
/// ```rust
/// use pagekit::prelude::*;
///
/// let mut page = Page::default();
/// page.num = 2;
/// page.size = 10;
/// page.set_total(35);
///
/// let mut resp = PageResponse::<String>::default();
/// page.fill_response(&mut resp).unwrap();
/// assert_eq!(resp.total, 35);
/// assert_eq!(resp.page_num, 2);
/// assert_eq!(resp.page_size, 10);
/// assert_eq!(resp.last_page, 4);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, Record)]
pub struct PageResponse<T> {
    /// 总记录数
    pub total: i64,
    /// 当前页码
    pub page_num: i64,
    /// 每页大小
    pub page_size: i64,
    /// 最后一页页码
    pub last_page: i64,
    /// 当前页数据
    pub data: Vec<T>,
}

impl<T> Default for PageResponse<T> {
    fn default() -> Self {
        PageResponse { total: 0, page_num: 0, page_size: 0, last_page: 0, data: Vec::new() }
    }
}
