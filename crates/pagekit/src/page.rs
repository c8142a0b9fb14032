use serde::Serialize;

use crate::error::Result;
use crate::field::FieldValue;
use crate::{fill, resolve};

/// 默认每页大小
pub const DEFAULT_PAGE_SIZE: i64 = 15;

/// 分页参数
///
/// 由 [`parse`](crate::parse::parse) 从请求记录构造；查询执行后通过
/// [`set_total`](Page::set_total) 写入总数，再由
/// [`fill_response`](Page::fill_response) 回填到响应记录。
///
/// # 字段
///
/// - `num`: 页码，从 1 开始，0 表示未指定
/// - `size`: 每页大小，0 表示未指定（返回全部）
///
/// # 示例
/// ```rust
/// use pagekit::page::Page;
///
/// let mut page = Page::default();
/// page.num = 3;
/// page.size = 20;
/// assert_eq!(page.offset(), 40);
/// assert_eq!(page.limit(), 20);
/// assert!(page.required());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Page {
    /// 页码，从 1 开始，0 表示未指定
    pub num: i64,
    /// 每页大小，0 表示未指定
    pub size: i64,
    /// 排序字段
    pub order_by: String,
    /// 是否倒序
    pub is_descending: bool,
    /// 搜索关键字
    pub search_key: String,
    /// 查询结果总数，查询完成后写入
    pub total: i64,
    // 指定了页码但未指定大小时的回退大小
    #[serde(skip_serializing)]
    pub(crate) default_size: i64,
}

impl Default for Page {
    fn default() -> Self {
        Page {
            num: 0,
            size: 0,
            order_by: String::new(),
            is_descending: false,
            search_key: String::new(),
            total: 0,
            default_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Page {
    /// 查询偏移量
    pub fn offset(&self) -> i64 {
        if self.num <= 0 {
            return 0;
        }
        (self.num - 1) * self.size
    }

    /// 查询条数限制
    ///
    /// 指定了大小时返回大小；只指定了页码时返回默认每页大小；
    /// 两者都未指定时返回 0，表示不限制。
    pub fn limit(&self) -> i64 {
        if self.size != 0 {
            return self.size;
        }
        if self.num != 0 {
            return self.default_size;
        }
        0
    }

    /// 页码与大小是否均已指定
    pub fn required(&self) -> bool {
        self.num > 0 && self.size > 0
    }

    /// 写入查询结果总数
    pub fn set_total(&mut self, total: i64) {
        self.total = total;
    }

    /// 将分页结果回填到响应记录
    ///
    /// 在响应记录（或其名为 `page` / `pagination` 的子记录）上按字段名
    /// 回填 `total`、页码、`last_page` 与每页大小。
    ///
    /// 回填不是事务性的：某个字段写入失败时，之前已写入的字段保持
    /// 已写入的值。
    ///
    /// # 示例
    /// ```rust
    /// use pagekit::prelude::*;
    ///
    /// #[derive(Record, Default)]
    /// struct ListResponse {
    ///     total: i64,
    ///     page_num: i64,
    ///     page_size: i64,
    ///     last_page: i64,
    /// }
    ///
    /// let mut page = Page::default();
    /// page.num = 10;
    /// page.size = 50;
    /// page.set_total(501);
    ///
    /// let mut resp = ListResponse::default();
    /// page.fill_response(&mut resp).unwrap();
    /// assert_eq!(resp.total, 501);
    /// assert_eq!(resp.page_num, 10);
    /// assert_eq!(resp.page_size, 50);
    /// assert_eq!(resp.last_page, 11);
    /// ```
    pub fn fill_response<R>(&self, resp: &mut R) -> Result<()>
    where
        R: FieldValue + ?Sized,
    {
        self.fill_response_with(resp, &[])
    }

    /// 使用自定义字段组名回填
    ///
    /// `groups` 整体替换默认的 `["page", "pagination"]` 候选列表；
    /// 传空切片时等同于 [`fill_response`](Page::fill_response)。
    pub fn fill_response_with<R>(&self, resp: &mut R, groups: &[&str]) -> Result<()>
    where
        R: FieldValue + ?Sized,
    {
        let groups = if groups.is_empty() { resolve::RESPONSE_GROUPS } else { groups };
        let target = resolve::resolve_response(resp.as_field_mut(), groups)?;
        fill::fill_record(self, target)
    }
}
