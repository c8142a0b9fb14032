use snafu::{Location, Snafu};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// 页码字段无法转换为整数
    #[snafu(display("invalid page number"))]
    InvalidPageNum {
        #[snafu(implicit)]
        location: Location,
    },

    /// 每页大小字段无法转换为整数
    #[snafu(display("invalid page size"))]
    InvalidPageSize {
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("invalid order by"))]
    InvalidOrderBy {
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("invalid is descending"))]
    InvalidIsDescending {
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("invalid search key"))]
    InvalidSearchKey {
        #[snafu(implicit)]
        location: Location,
    },

    /// 请求数据不是可解析的记录
    #[snafu(display("invalid data type for parsing"))]
    InvalidParseData {
        #[snafu(implicit)]
        location: Location,
    },

    /// 响应数据缺少分页字段组
    #[snafu(display("invalid response"))]
    InvalidResponse {
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("response field is not an integer kind"))]
    ResponseFieldType {
        #[snafu(implicit)]
        location: Location,
    },

    #[snafu(display("response field is unsetable"))]
    ResponseFieldUnsetable {
        #[snafu(implicit)]
        location: Location,
    },

    /// 数值超出目标字段的表示范围
    #[snafu(display("number {value} does not fit the target field"))]
    InvalidNumber {
        value: i64,
        source: std::num::TryFromIntError,
        #[snafu(implicit)]
        location: Location,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
