use tracing::trace;

use crate::error::{InvalidParseDataSnafu, InvalidResponseSnafu, Result};
use crate::field::{FieldMut, FieldRef, Record};

/// 请求侧默认字段组名
pub(crate) const REQUEST_GROUPS: &[&str] = &["page", "pagination", "page_request", "pagination_request"];

/// 响应侧默认字段组名，可被调用方整体替换
pub(crate) const RESPONSE_GROUPS: &[&str] = &["page", "pagination"];

// 每个集合命中任意一个名称即视为满足
const REQUEST_REQUIRED: &[&[&str]] = &[&["page_num", "num"], &["page_size", "size"]];
const RESPONSE_REQUIRED: &[&[&str]] = &[
    &["total"],
    &["page_num", "current_page", "current_page_num", "num"],
    &["page_size", "size"],
];

fn satisfies(record: &dyn Record, required: &[&[&str]]) -> bool {
    required.iter().all(|set| set.iter().any(|name| record.has_field(name)))
}

fn next_group<'g>(record: &dyn Record, groups: &'g [&'g str]) -> Option<&'g str> {
    groups.iter().copied().find(|name| record.has_field(name))
}

fn descend<'a>(record: &'a mut dyn Record, group: &str) -> Option<FieldMut<'a>> {
    record.field_mut(group)
}

pub(crate) fn resolve_request(root: FieldRef<'_>) -> Result<&dyn Record> {
    let FieldRef::Record(mut current) = root else {
        return InvalidParseDataSnafu.fail();
    };

    loop {
        if satisfies(current, REQUEST_REQUIRED) {
            return Ok(current);
        }
        // 没有候选字段组时就在当前层做尽力提取
        let Some(group) = next_group(current, REQUEST_GROUPS) else {
            return Ok(current);
        };
        trace!(group, "descending into request pagination group");
        match current.field(group) {
            Some(FieldRef::Record(inner)) => current = inner,
            _ => return InvalidParseDataSnafu.fail(),
        }
    }
}

pub(crate) fn resolve_response<'a>(root: FieldMut<'a>, groups: &[&str]) -> Result<&'a mut dyn Record> {
    let FieldMut::Record(mut current) = root else {
        return InvalidResponseSnafu.fail();
    };

    loop {
        if satisfies(current, RESPONSE_REQUIRED) {
            return Ok(current);
        }
        let Some(group) = next_group(current, groups) else {
            return InvalidResponseSnafu.fail();
        };
        trace!(group, "descending into response pagination group");
        match descend(current, group) {
            Some(FieldMut::Record(inner)) => current = inner,
            _ => return InvalidResponseSnafu.fail(),
        }
    }
}
