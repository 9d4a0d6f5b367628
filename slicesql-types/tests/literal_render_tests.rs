use std::cmp::Ordering;

use slicesql_types::{DecimalValue, Literal, compare_tuples, encode_literal};
use time::{Date, Month, PrimitiveDateTime, Time};

#[test]
fn rendering_matches_sql_literal_syntax() {
    assert_eq!(encode_literal(&Literal::from("O'Brien")), "'O''Brien'");
    assert_eq!(encode_literal(&Literal::Null), "NULL");
    assert_eq!(encode_literal(&Literal::from(42u8)), "42");

    let day = Date::from_calendar_date(1999, Month::December, 31).unwrap();
    assert_eq!(encode_literal(&Literal::Date(day)), "DATE '1999-12-31'");

    let ts = PrimitiveDateTime::new(day, Time::from_hms(23, 59, 59).unwrap());
    assert_eq!(
        encode_literal(&Literal::Timestamp(ts)),
        "TIMESTAMP '1999-12-31 23:59:59'"
    );
}

#[test]
fn rendering_is_deterministic() {
    let values = vec![
        Literal::from(-3i64),
        Literal::from(2.25f64),
        Literal::Decimal128(DecimalValue::new(100, 2).unwrap()),
        Literal::from("x'y"),
        Literal::Time(Time::from_hms_milli(0, 0, 1, 5).unwrap()),
    ];
    let first: Vec<String> = values.iter().map(encode_literal).collect();
    let second: Vec<String> = values.iter().map(encode_literal).collect();
    assert_eq!(first, second);
    assert_eq!(
        first,
        vec!["-3", "2.25", "1.00", "'x''y'", "TIME '00:00:01.005'"]
    );
}

#[test]
fn mixed_kind_tuples_order_lexicographically() {
    let a = vec![Literal::from("east"), Literal::from(10i64)];
    let b = vec![Literal::from("east"), Literal::from(11i64)];
    let c = vec![Literal::from("west"), Literal::from(0i64)];
    assert_eq!(compare_tuples(&a, &b), Some(Ordering::Less));
    assert_eq!(compare_tuples(&b, &c), Some(Ordering::Less));
    assert_eq!(compare_tuples(&c, &a), Some(Ordering::Greater));
}
