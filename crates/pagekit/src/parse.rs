use crate::error::{
    InvalidIsDescendingSnafu, InvalidOrderBySnafu, InvalidPageNumSnafu, InvalidPageSizeSnafu, InvalidSearchKeySnafu,
    Result,
};
use crate::field::{FieldRef, FieldValue};
use crate::page::Page;
use crate::resolve;

/// 解析期配置项
///
/// 在字段提取完成后按顺序应用；任何一项失败都会使解析以该错误终止。
pub struct ParseOption(Box<dyn FnOnce(&mut Page) -> Result<()>>);

impl ParseOption {
    /// 自定义配置项
    pub fn new<F>(apply: F) -> Self
    where
        F: FnOnce(&mut Page) -> Result<()> + 'static,
    {
        ParseOption(Box::new(apply))
    }

    fn apply(self, page: &mut Page) -> Result<()> {
        (self.0)(page)
    }
}

/// 覆盖默认每页大小
///
/// 只指定页码未指定大小的请求，其 [`limit`](Page::limit) 会落到该值，
/// 缺省为 [`DEFAULT_PAGE_SIZE`](crate::page::DEFAULT_PAGE_SIZE)。
///
/// # 示例
/// ```rust
/// use pagekit::prelude::*;
///
/// #[derive(Record)]
/// struct SearchRequest {
///     page_num: i64,
///     page_size: i64,
/// }
///
/// let req = SearchRequest { page_num: 1, page_size: 0 };
/// let page = parse_with(&req, [with_default_size(20)]).unwrap();
/// assert_eq!(page.limit(), 20);
/// ```
pub fn with_default_size(size: i64) -> ParseOption {
    ParseOption::new(move |page| {
        page.default_size = size;
        Ok(())
    })
}

/// 从请求记录解析分页参数
///
/// 请求记录可以是任何实现了字段访问能力的结构（通常通过
/// `#[derive(Record)]` 获得），分页字段可以位于顶层，也可以嵌套在
/// 名为 `page` / `pagination` / `page_request` / `pagination_request`
/// 的子记录里，`Option` 与 `Box` 包装会被透明展开。
///
/// 识别的字段名：`page_num` / `num`、`page_size` / `size`、`order_by`、
/// `is_descending` / `descending`、`search_key` / `query`。
/// 没有任何识别字段的记录解析为全零的 [`Page`]，不报错。
///
/// # 参数
///
/// - `req`: 请求记录
///
/// # 返回值
///
/// - `Result<Page>`: 输入不是记录时返回 `InvalidParseData`，
///   识别字段持有错误种类的值时返回对应的字段错误
///
/// # 示例
/// ```rust
/// use pagekit::prelude::*;
///
/// #[derive(Record)]
/// struct SearchRequest {
///     page_num: i64,
///     page_size: i64,
///     order_by: String,
/// }
///
/// let req = SearchRequest { page_num: 2, page_size: 30, order_by: "id".to_string() };
/// let page = parse(&req).unwrap();
/// assert_eq!(page.num, 2);
/// assert_eq!(page.offset(), 30);
/// assert_eq!(page.limit(), 30);
/// ```
pub fn parse<R>(req: &R) -> Result<Page>
where
    R: FieldValue + ?Sized,
{
    parse_with(req, std::iter::empty())
}

/// 带配置项的解析
///
/// 与 [`parse`] 相同，提取完成后按顺序应用 `options`。
pub fn parse_with<R, I>(req: &R, options: I) -> Result<Page>
where
    R: FieldValue + ?Sized,
    I: IntoIterator<Item = ParseOption>,
{
    let mut page = Page::default();
    let target = resolve::resolve_request(req.as_field())?;

    for &name in target.field_names() {
        let Some(field) = target.field(name) else {
            continue;
        };
        match name {
            "page_num" | "num" => match int_value(&field) {
                Extracted::Value(value) => page.num = value,
                Extracted::Unset => {}
                Extracted::Mismatch => return InvalidPageNumSnafu.fail(),
            },
            "page_size" | "size" => match int_value(&field) {
                Extracted::Value(value) => page.size = value,
                Extracted::Unset => {}
                Extracted::Mismatch => return InvalidPageSizeSnafu.fail(),
            },
            "order_by" => match str_value(&field) {
                Extracted::Value(value) => page.order_by = value,
                Extracted::Unset => {}
                Extracted::Mismatch => return InvalidOrderBySnafu.fail(),
            },
            "is_descending" | "descending" => match bool_value(&field) {
                Extracted::Value(value) => page.is_descending = value,
                Extracted::Unset => {}
                Extracted::Mismatch => return InvalidIsDescendingSnafu.fail(),
            },
            "search_key" | "query" => match str_value(&field) {
                Extracted::Value(value) => page.search_key = value,
                Extracted::Unset => {}
                Extracted::Mismatch => return InvalidSearchKeySnafu.fail(),
            },
            _ => {}
        }
    }

    for option in options {
        option.apply(&mut page)?;
    }

    Ok(page)
}

enum Extracted<T> {
    Value(T),
    /// Option 字段为 None，视为未提供
    Unset,
    Mismatch,
}

fn int_value(field: &FieldRef<'_>) -> Extracted<i64> {
    match *field {
        FieldRef::Int(value) => Extracted::Value(value),
        FieldRef::Uint(value) => match i64::try_from(value) {
            Ok(value) => Extracted::Value(value),
            Err(_) => Extracted::Mismatch,
        },
        FieldRef::Nil => Extracted::Unset,
        _ => Extracted::Mismatch,
    }
}

fn str_value(field: &FieldRef<'_>) -> Extracted<String> {
    match *field {
        FieldRef::Str(value) => Extracted::Value(value.to_string()),
        FieldRef::Nil => Extracted::Unset,
        _ => Extracted::Mismatch,
    }
}

fn bool_value(field: &FieldRef<'_>) -> Extracted<bool> {
    match *field {
        FieldRef::Bool(value) => Extracted::Value(value),
        FieldRef::Nil => Extracted::Unset,
        _ => Extracted::Mismatch,
    }
}
