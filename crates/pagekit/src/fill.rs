use crate::error::Result;
use crate::field::Record;
use crate::num::set_number;
use crate::page::Page;

// 写入是顺序的且非事务性的：中途失败时已写入的字段保持不变。
pub(crate) fn fill_record(page: &Page, target: &mut dyn Record) -> Result<()> {
    for &name in target.field_names() {
        let Some(field) = target.field_mut(name) else {
            continue;
        };
        match name {
            "total" => set_number(field, page.total)?,
            "page_num" | "current_page" | "current_page_num" | "num" => set_number(field, page.num)?,
            "last_page" => set_number(field, last_page(page))?,
            "page_size" | "size" => {
                // 未指定大小的查询返回全部数据，大小即总数
                if page.size == 0 {
                    set_number(field, page.total)?;
                } else {
                    set_number(field, page.size)?;
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn last_page(page: &Page) -> i64 {
    if page.size == 0 {
        return 0;
    }
    let last_page = page.total / page.size;
    if page.total % page.size == 0 { last_page } else { last_page + 1 }
}
