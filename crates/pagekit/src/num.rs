use std::fmt;

use serde::de::Visitor;
use serde::{de, Deserializer};
use snafu::ResultExt;

use crate::error::{InvalidNumberSnafu, ResponseFieldTypeSnafu, ResponseFieldUnsetableSnafu, Result};
use crate::field::{FieldMut, IntSlot, UintSlot};

/// 将数值写入目标字段
///
/// 目标字段可以是任意宽度的有符号或无符号整数，写入前按目标
/// 宽度与符号做可表示性检查。
///
/// # 参数
///
/// - `field`: 目标字段的可写句柄
/// - `number`: 要写入的数值
///
/// # 返回值
///
/// - `Result<()>`: 字段不可写时返回 `ResponseFieldUnsetable`，
///   字段不是整数种类时返回 `ResponseFieldType`，
///   数值超出目标表示范围时返回 `InvalidNumber`
///
/// # 示例
/// ```rust
/// use pagekit::field::{FieldMut, IntSlot};
/// use pagekit::num::set_number;
///
/// let mut total: i32 = 0;
/// set_number(FieldMut::Int(IntSlot::I32(&mut total)), 500).unwrap();
/// assert_eq!(total, 500);
/// ```
pub fn set_number(field: FieldMut<'_>, number: i64) -> Result<()> {
    match field {
        FieldMut::ReadOnly | FieldMut::Nil => ResponseFieldUnsetableSnafu.fail(),
        FieldMut::Int(slot) => slot.store(number),
        FieldMut::Uint(slot) => slot.store(number),
        _ => ResponseFieldTypeSnafu.fail(),
    }
}

impl IntSlot<'_> {
    pub(crate) fn store(self, number: i64) -> Result<()> {
        match self {
            IntSlot::I8(field) => *field = i8::try_from(number).context(InvalidNumberSnafu { value: number })?,
            IntSlot::I16(field) => *field = i16::try_from(number).context(InvalidNumberSnafu { value: number })?,
            IntSlot::I32(field) => *field = i32::try_from(number).context(InvalidNumberSnafu { value: number })?,
            IntSlot::I64(field) => *field = number,
            IntSlot::Isize(field) => *field = isize::try_from(number).context(InvalidNumberSnafu { value: number })?,
        }
        Ok(())
    }
}

impl UintSlot<'_> {
    pub(crate) fn store(self, number: i64) -> Result<()> {
        match self {
            UintSlot::U8(field) => *field = u8::try_from(number).context(InvalidNumberSnafu { value: number })?,
            UintSlot::U16(field) => *field = u16::try_from(number).context(InvalidNumberSnafu { value: number })?,
            UintSlot::U32(field) => *field = u32::try_from(number).context(InvalidNumberSnafu { value: number })?,
            UintSlot::U64(field) => *field = u64::try_from(number).context(InvalidNumberSnafu { value: number })?,
            UintSlot::Usize(field) => *field = usize::try_from(number).context(InvalidNumberSnafu { value: number })?,
        }
        Ok(())
    }
}

/// 将字符串或数字反序列化为 i64 类型
///
/// 该函数支持以下输入格式：
/// - 数字类型（如：123）
/// - 字符串类型（如："123"）
///
/// # 参数
///
/// - `deserializer`: 反序列化器
///
/// # 返回值
///
/// - `Result<i64, D::Error>`: 成功时返回解析后的 i64 值，失败时返回反序列化错误
///
/// # 示例
/// ```rust
/// use pagekit::num::de_str_or_num_to_i64;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Example {
///     #[serde(deserialize_with = "de_str_or_num_to_i64")]
///     page_num: i64,
/// }
///
/// // 可以处理数字
/// let json = r#"{"page_num": 123}"#;
/// let example: Example = serde_json::from_str(json).unwrap();
/// assert_eq!(example.page_num, 123);
///
/// // 也可以处理字符串
/// let json = r#"{"page_num": "123"}"#;
/// let example: Example = serde_json::from_str(json).unwrap();
/// assert_eq!(example.page_num, 123);
/// ```
pub fn de_str_or_num_to_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrI64Visitor;

    impl<'de> Visitor<'de> for StringOrI64Visitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result { formatter.write_str("a string or an i64") }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            i64::try_from(value).map_err(de::Error::custom)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            value.parse::<i64>().map_err(de::Error::custom)
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            self.visit_str(&value)
        }
    }

    deserializer.deserialize_any(StringOrI64Visitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::field::FieldValue;

    #[test]
    fn test_set_number_signed_widths() {
        let mut one_i8: i8 = 0;
        let mut one_i16: i16 = 0;
        let mut one_i32: i32 = 0;
        let mut one_i64: i64 = 0;
        let mut one_isize: isize = 0;

        set_number(one_i8.as_field_mut(), 10).unwrap();
        set_number(one_i16.as_field_mut(), 10).unwrap();
        set_number(one_i32.as_field_mut(), 10).unwrap();
        set_number(one_i64.as_field_mut(), 10).unwrap();
        set_number(one_isize.as_field_mut(), 10).unwrap();

        assert_eq!(one_i8, 10);
        assert_eq!(one_i16, 10);
        assert_eq!(one_i32, 10);
        assert_eq!(one_i64, 10);
        assert_eq!(one_isize, 10);
    }

    #[test]
    fn test_set_number_unsigned_widths() {
        let mut one_u8: u8 = 0;
        let mut one_u16: u16 = 0;
        let mut one_u32: u32 = 0;
        let mut one_u64: u64 = 0;
        let mut one_usize: usize = 0;

        set_number(one_u8.as_field_mut(), 10).unwrap();
        set_number(one_u16.as_field_mut(), 10).unwrap();
        set_number(one_u32.as_field_mut(), 10).unwrap();
        set_number(one_u64.as_field_mut(), 10).unwrap();
        set_number(one_usize.as_field_mut(), 10).unwrap();

        assert_eq!(one_u8, 10);
        assert_eq!(one_u16, 10);
        assert_eq!(one_u32, 10);
        assert_eq!(one_u64, 10);
        assert_eq!(one_usize, 10);
    }

    #[test]
    fn test_set_number_overflow() {
        let mut narrow: i8 = 0;
        let err = set_number(narrow.as_field_mut(), 1000).unwrap_err();
        assert!(matches!(err, Error::InvalidNumber { value: 1000, .. }));
        assert_eq!(narrow, 0);
    }

    #[test]
    fn test_set_number_negative_into_unsigned() {
        let mut count: u32 = 7;
        let err = set_number(count.as_field_mut(), -1).unwrap_err();
        assert!(matches!(err, Error::InvalidNumber { value: -1, .. }));
        assert_eq!(count, 7);
    }

    #[test]
    fn test_set_number_wrong_kind() {
        let mut text = String::new();
        let err = set_number(text.as_field_mut(), 10).unwrap_err();
        assert!(matches!(err, Error::ResponseFieldType { .. }));

        let mut flag = false;
        let err = set_number(flag.as_field_mut(), 10).unwrap_err();
        assert!(matches!(err, Error::ResponseFieldType { .. }));
    }

    #[test]
    fn test_set_number_unsetable() {
        let err = set_number(FieldMut::ReadOnly, 10).unwrap_err();
        assert!(matches!(err, Error::ResponseFieldUnsetable { .. }));

        let mut missing: Option<i64> = None;
        let err = set_number(missing.as_field_mut(), 10).unwrap_err();
        assert!(matches!(err, Error::ResponseFieldUnsetable { .. }));
    }
}
