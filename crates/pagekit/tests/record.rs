use pagekit::prelude::*;

#[test]
fn test_field_names_in_declaration_order() {
    #[derive(Record)]
    struct Plain {
        total: i64,
        name: String,
    }

    let plain = Plain { total: 0, name: String::new() };
    assert_eq!(plain.field_names(), &["total", "name"]);
    assert!(plain.has_field("total"));
    assert!(!plain.has_field("missing"));
}

#[test]
fn test_field_handles() {
    #[derive(Record)]
    struct Plain {
        total: i64,
        name: String,
        enabled: bool,
        data: Vec<u8>,
    }

    let mut plain = Plain { total: 7, name: "page".to_string(), enabled: true, data: vec![1] };

    assert!(matches!(plain.field("total"), Some(FieldRef::Int(7))));
    assert!(matches!(plain.field("name"), Some(FieldRef::Str("page"))));
    assert!(matches!(plain.field("enabled"), Some(FieldRef::Bool(true))));
    assert!(matches!(plain.field("data"), Some(FieldRef::Opaque)));
    assert!(plain.field("missing").is_none());

    assert!(matches!(plain.field_mut("total"), Some(FieldMut::Int(_))));
    assert!(plain.field_mut("missing").is_none());
}

#[test]
fn test_rename_attribute() {
    #[derive(Record)]
    struct RenamedRequest {
        #[record(rename = "page_num")]
        current: i64,
        #[record(rename = "page_size")]
        per_page: i64,
    }

    let req = RenamedRequest { current: 3, per_page: 25 };
    assert_eq!(req.field_names(), &["page_num", "page_size"]);

    let page = parse(&req).unwrap();
    assert_eq!(page.num, 3);
    assert_eq!(page.size, 25);
}

#[test]
fn test_skip_attribute() {
    #[derive(Record)]
    struct SkippedRequest {
        // 类型不匹配，但被 skip 后对解析不可见
        #[record(skip)]
        page_num: String,
        num: i64,
        size: i64,
    }

    let req = SkippedRequest { page_num: "raw".to_string(), num: 5, size: 10 };
    assert!(!req.has_field("page_num"));

    let page = parse(&req).unwrap();
    assert_eq!(page.num, 5);
    assert_eq!(page.size, 10);
}

#[test]
fn test_read_only_attribute() {
    #[derive(Record)]
    struct Guarded {
        #[record(read_only)]
        total: i64,
    }

    let mut guarded = Guarded { total: 4 };
    assert!(matches!(guarded.field("total"), Some(FieldRef::Int(4))));
    assert!(matches!(guarded.field_mut("total"), Some(FieldMut::ReadOnly)));
}

#[test]
fn test_generic_record() {
    #[derive(Record)]
    struct Listing<T> {
        total: i64,
        data: Vec<T>,
    }

    let listing = Listing::<String> { total: 2, data: vec!["a".to_string()] };
    assert!(matches!(listing.field("total"), Some(FieldRef::Int(2))));
    assert!(matches!(listing.field("data"), Some(FieldRef::Opaque)));
}

#[test]
fn test_borrowed_fields_are_read_only() {
    #[derive(Record)]
    struct Borrowed<'a> {
        order_by: &'a str,
        page_num: i64,
        page_size: i64,
    }

    let mut req = Borrowed { order_by: "id", page_num: 1, page_size: 10 };
    assert!(matches!(req.field("order_by"), Some(FieldRef::Str("id"))));
    assert!(matches!(req.field_mut("order_by"), Some(FieldMut::ReadOnly)));

    let page = parse(&req).unwrap();
    assert_eq!(page.order_by, "id");
}

#[test]
fn test_nil_surfaces_for_none_chains() {
    #[derive(Record)]
    struct Chained {
        page: Option<Box<Option<i64>>>,
    }

    let mut chained = Chained { page: Some(Box::new(None)) };
    assert!(matches!(chained.field("page"), Some(FieldRef::Nil)));
    assert!(matches!(chained.field_mut("page"), Some(FieldMut::Nil)));

    chained.page = Some(Box::new(Some(9)));
    assert!(matches!(chained.field("page"), Some(FieldRef::Int(9))));
}
