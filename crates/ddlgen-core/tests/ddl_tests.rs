//! End-to-end tests for the DDL parsing engine

use ddlgen_core::ddl::ENUM_MARKER;
use ddlgen_core::{parse_tables, DdlError, DefaultValue};
use pretty_assertions::assert_eq;

#[test]
fn test_single_column_attributes() {
    let tables =
        parse_tables("CREATE TABLE t (name VARCHAR(50) NOT NULL DEFAULT 'x' COMMENT '姓名');")
            .unwrap();
    assert_eq!(tables.len(), 1);

    let col = tables[0].get_column("name").unwrap();
    assert_eq!(col.name, "name");
    assert_eq!(col.data_type.name, "VARCHAR");
    assert_eq!(col.data_type.length.as_deref(), Some("50"));
    assert_eq!(col.data_type.original, "VARCHAR(50)");
    assert!(!col.nullable);
    assert_eq!(col.default, Some(DefaultValue::Text("x".to_string())));
    assert_eq!(col.comment, "姓名");
}

#[test]
fn test_never_splits_inside_parens_or_quotes() {
    let tables = parse_tables(
        "CREATE TABLE t (price DECIMAL(10,2) NOT NULL, tags VARCHAR(100) DEFAULT 'a,b', qty INT);",
    )
    .unwrap();

    let table = &tables[0];
    assert_eq!(table.column_names(), vec!["price", "tags", "qty"]);
    assert_eq!(
        table.get_column("price").unwrap().data_type.length.as_deref(),
        Some("10,2")
    );
}

#[test]
fn test_table_level_primary_key_is_excluded() {
    let tables = parse_tables("CREATE TABLE t (id BIGINT, name VARCHAR(20), PRIMARY KEY (id));")
        .unwrap();
    assert_eq!(tables[0].column_names(), vec!["id", "name"]);
}

#[test]
fn test_enum_comment_extraction() {
    let tables = parse_tables(
        "CREATE TABLE t (status TINYINT COMMENT '状态【enum】:1-启用,2-禁用.');",
    )
    .unwrap();

    let values = tables[0]
        .get_column("status")
        .unwrap()
        .enum_values
        .as_ref()
        .unwrap();
    assert_eq!(values.len(), 2);
    assert_eq!(values[0].value, 1);
    assert_eq!(values[0].label, "启用");
    assert_eq!(values[1].value, 2);
    assert_eq!(values[1].label, "禁用");
}

#[test]
fn test_marker_without_valid_items_yields_absent() {
    let sql = format!(
        "CREATE TABLE t (status TINYINT COMMENT '状态{}:无有效项.');",
        ENUM_MARKER
    );
    let tables = parse_tables(&sql).unwrap();
    assert!(tables[0].get_column("status").unwrap().enum_values.is_none());
}

#[test]
fn test_table_comment_may_contain_semicolon() {
    let tables = parse_tables("CREATE TABLE t (id INT) COMMENT='a;b';").unwrap();
    assert_eq!(tables[0].comment, "a;b");
}

#[test]
fn test_default_value_coercion() {
    let tables = parse_tables(
        "CREATE TABLE t (\
           a INT DEFAULT 0,\
           b TIMESTAMP DEFAULT CURRENT_TIMESTAMP,\
           c VARCHAR(10) DEFAULT 'active'\
         );",
    )
    .unwrap();

    let table = &tables[0];
    assert_eq!(
        table.get_column("a").unwrap().default,
        Some(DefaultValue::Integer(0))
    );
    assert_eq!(
        table.get_column("b").unwrap().default,
        Some(DefaultValue::CurrentTimestamp)
    );
    assert_eq!(
        table.get_column("c").unwrap().default,
        Some(DefaultValue::Text("active".to_string()))
    );
}

#[test]
fn test_end_to_end_user_table() {
    let sql = "CREATE TABLE user (\
                 id BIGINT AUTO_INCREMENT PRIMARY KEY COMMENT '主键', \
                 status TINYINT NOT NULL DEFAULT 1 COMMENT '状态【enum】:1-启用,2-禁用.', \
                 name VARCHAR(50) COMMENT '姓名', \
                 PRIMARY KEY (id)\
               ) COMMENT='用户表';";

    let tables = parse_tables(sql).unwrap();
    assert_eq!(tables.len(), 1);

    let table = &tables[0];
    assert_eq!(table.name, "user");
    assert_eq!(table.comment, "用户表");
    // The trailing PRIMARY KEY (id) line must not add a 4th column.
    assert_eq!(table.column_names(), vec!["id", "status", "name"]);

    let id = table.get_column("id").unwrap();
    assert!(id.auto_increment);
    assert!(id.is_primary_key);
    assert_eq!(id.comment, "主键");

    let status = table.get_column("status").unwrap();
    assert!(!status.nullable);
    assert_eq!(status.default, Some(DefaultValue::Integer(1)));
    let values = status.enum_values.as_ref().unwrap();
    assert_eq!(values[0].value, 1);
    assert_eq!(values[0].label, "启用");
    assert_eq!(values[1].value, 2);
    assert_eq!(values[1].label, "禁用");

    let name = table.get_column("name").unwrap();
    assert!(name.nullable);
    assert!(!name.is_primary_key);
}

#[test]
fn test_multiple_statements_parse_independently_in_order() {
    let sql = "-- users first\n\
               CREATE TABLE users (id BIGINT PRIMARY KEY);\n\
               /* then orders */\n\
               CREATE TABLE orders (id BIGINT, user_id BIGINT, KEY idx_user (user_id));";

    let tables = parse_tables(sql).unwrap();
    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].name, "users");
    assert_eq!(tables[1].name, "orders");
    assert_eq!(tables[1].column_names(), vec!["id", "user_id"]);
}

#[test]
fn test_no_table_found_is_fatal() {
    let err = parse_tables("INSERT INTO t VALUES (1);").unwrap_err();
    assert!(matches!(err, DdlError::NoTableFound));
}

#[test]
fn test_unparseable_column_segment_is_silently_dropped() {
    let tables = parse_tables("CREATE TABLE t (id BIGINT, 12345, name VARCHAR(10));").unwrap();
    assert_eq!(tables[0].column_names(), vec!["id", "name"]);
}
