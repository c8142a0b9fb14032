// 让派生代码生成的 pagekit:: 路径在本 crate 内也能解析
extern crate self as pagekit;

pub mod error;
pub mod field;
mod fill;
pub mod num;
pub mod page;
pub mod parse;
pub mod request;
mod resolve;
pub mod response;

pub use pagekit_derive::Record;

pub use self::error::{Error, Result};
pub use self::field::{FieldMut, FieldRef, FieldValue, IntSlot, Record, UintSlot};
pub use self::page::{DEFAULT_PAGE_SIZE, Page};

pub mod prelude {
    pub use pagekit_derive::Record;

    pub use crate::error::{Error, Result};
    pub use crate::field::{FieldMut, FieldRef, FieldValue, Record};
    pub use crate::num::set_number;
    pub use crate::page::{DEFAULT_PAGE_SIZE, Page};
    pub use crate::parse::{ParseOption, parse, parse_with, with_default_size};
    pub use crate::request::PageRequest;
    pub use crate::response::PageResponse;
}
