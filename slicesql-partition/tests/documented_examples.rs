use slicesql_partition::{build_composite, build_slice_predicates, partition_single};
use slicesql_result::Error;
use slicesql_types::{Literal, encode_literal};

fn render(preds: &[slicesql_expr::SlicePredicate]) -> Vec<String> {
    preds.iter().map(|p| p.to_sql()).collect()
}

fn int(v: i64) -> Literal {
    Literal::from(v)
}

fn cols(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn single_column_with_repeated_minimum() {
    let tuples = [1, 1, 50, 100].iter().map(|v| vec![int(*v)]).collect();
    let preds = build_slice_predicates(&cols(&["id"]), tuples).unwrap();
    assert_eq!(
        render(&preds),
        vec!["id >= 1 AND id < 50", "id >= 50 AND id <= 100"]
    );
}

#[test]
fn single_value_table() {
    let tuples = vec![vec![int(7)]; 5];
    let preds = build_slice_predicates(&cols(&["id"]), tuples).unwrap();
    assert_eq!(render(&preds), vec!["id >= 7 AND id <= 7"]);
}

#[test]
fn composite_equal_heads() {
    let preds = build_composite(
        &cols(&["a", "b"]),
        &[int(1), int(5)],
        &[int(1), int(9)],
        false,
    )
    .unwrap();
    assert_eq!(render(&preds), vec!["a = 1 AND b >= 5 AND b < 9"]);
}

#[test]
fn composite_differing_heads_on_last_interval() {
    let preds = build_composite(
        &cols(&["a", "b"]),
        &[int(1), int(5)],
        &[int(3), int(2)],
        true,
    )
    .unwrap();
    assert_eq!(
        render(&preds),
        vec!["a = 1 AND b >= 5", "a > 1 AND a < 3", "a = 3 AND b <= 2"]
    );
}

#[test]
fn literal_rendering() {
    assert_eq!(encode_literal(&Literal::from("O'Brien")), "'O''Brien'");
    assert_eq!(encode_literal(&Literal::Null), "NULL");
    assert_eq!(encode_literal(&int(42)), "42");
}

#[test]
fn malformed_sequences_fail_fast() {
    let columns = cols(&["a", "b"]);
    let arity = build_slice_predicates(&columns, vec![vec![int(1), int(1)], vec![int(2)]]);
    assert!(matches!(
        arity,
        Err(Error::BoundaryArity {
            index: 1,
            expected: 2,
            actual: 1
        })
    ));

    let descending = build_slice_predicates(
        &columns,
        vec![vec![int(2), int(0)], vec![int(1), int(9)]],
    );
    assert!(matches!(descending, Err(Error::UnorderedBoundaries { index: 0 })));

    let mixed = build_slice_predicates(
        &columns,
        vec![vec![int(1), int(0)], vec![int(1), Literal::from("x")]],
    );
    match mixed {
        Err(Error::IncomparableBoundary { index, column }) => {
            assert_eq!(index, 0);
            assert_eq!(column, "b");
        }
        other => panic!("expected incomparable boundary, got {other:?}"),
    }

    assert!(partition_single("id", &[int(1)]).is_err());
    assert!(build_composite(&[], &[], &[], true).is_err());
}

fn text(v: &str) -> Literal {
    Literal::from(v)
}

#[test]
fn text_boundaries_follow_the_source_collation() {
    // Linguistic collations sort case-insensitively: apple < Banana < cherry.
    let tuples = ["apple", "Banana", "cherry"]
        .iter()
        .map(|v| vec![text(v)])
        .collect();
    let preds = build_slice_predicates(&cols(&["name"]), tuples).unwrap();
    assert_eq!(
        render(&preds),
        vec![
            "name >= 'apple' AND name < 'Banana'",
            "name >= 'Banana' AND name <= 'cherry'",
        ]
    );

    let accented = ["cote", "côte", "coté", "Côte"]
        .iter()
        .map(|v| vec![text(v)])
        .collect();
    let preds = build_slice_predicates(&cols(&["word"]), accented).unwrap();
    assert_eq!(preds.len(), 3);
    assert_eq!(preds[1].to_sql(), "word >= 'côte' AND word < 'coté'");
}

#[test]
fn composite_text_heads_keep_source_order() {
    let preds = build_composite(
        &cols(&["region", "id"]),
        &[text("eu"), int(9)],
        &[text("EU-west"), int(2)],
        false,
    )
    .unwrap();
    assert_eq!(
        render(&preds),
        vec![
            "region = 'eu' AND id >= 9",
            "region > 'eu' AND region < 'EU-west'",
            "region = 'EU-west' AND id < 2",
        ]
    );
}

#[test]
fn text_keys_still_reject_nulls_and_repeated_pairs() {
    let columns = cols(&["region", "id"]);
    let with_null = build_slice_predicates(
        &columns,
        vec![vec![text("b"), int(1)], vec![text("A"), Literal::Null]],
    );
    assert!(matches!(
        with_null,
        Err(Error::IncomparableBoundary { index: 0, .. })
    ));

    let repeated = build_composite(&columns, &[text("x"), int(1)], &[text("x"), int(1)], false);
    assert!(matches!(repeated, Err(Error::EmptyInterval { index: 0 })));
}

#[test]
fn slice_count_far_beyond_row_count() {
    use slicesql_partition::{MemoryKeySource, SliceOptions, TableRef, plan_slices};

    let rows = (1..=10i64).map(|v| vec![int(v)]).collect();
    let mut source = MemoryKeySource::new(cols(&["id"]), rows).unwrap();
    let table = TableRef::parse("t").unwrap();
    let plan = plan_slices(&mut source, &table, &SliceOptions::new(1usize << 40)).unwrap();
    assert_eq!(plan.row_numbers, (1..=10).collect::<Vec<u64>>());
    assert_eq!(plan.predicates.len(), 9);
    assert_eq!(plan.predicates[8].to_sql(), "id >= 9 AND id <= 10");
}
