use std::io::Write;

use clap::Parser;
use slicesql::cli::{Args, RunStatus, run};
use slicesql_test_utils::init_tracing_for_tests;
use tempfile::NamedTempFile;

fn key_export(lines: &[&str]) -> NamedTempFile {
    let mut tmp = NamedTempFile::new().expect("create tmp");
    for line in lines {
        writeln!(tmp, "{line}").unwrap();
    }
    tmp
}

fn run_with(extra: &[&str], keys: &NamedTempFile) -> (RunStatus, String, String) {
    init_tracing_for_tests();
    let path = keys.path().to_string_lossy().into_owned();
    let mut argv = vec!["slicesql", "--keys", path.as_str()];
    argv.extend_from_slice(extra);
    let args = Args::try_parse_from(argv).unwrap();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let status = run(&args, &mut out, &mut err).unwrap();
    (
        status,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

fn ids(n: i64) -> NamedTempFile {
    let mut lines = vec!["id".to_string()];
    lines.extend((1..=n).map(|i| i.to_string()));
    let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
    key_export(&refs)
}

#[test]
fn prints_one_statement_per_slice() {
    let keys = ids(100);
    let (status, out, err) = run_with(&["--table", "app.orders", "--slices", "4"], &keys);
    assert_eq!(status, RunStatus::Ok);
    assert!(err.is_empty());
    assert_eq!(
        out.lines().collect::<Vec<_>>(),
        vec![
            "SELECT * FROM app.orders WHERE id >= 1 AND id < 26;",
            "SELECT * FROM app.orders WHERE id >= 26 AND id < 51;",
            "SELECT * FROM app.orders WHERE id >= 51 AND id < 76;",
            "SELECT * FROM app.orders WHERE id >= 76 AND id <= 100;",
        ]
    );
}

#[test]
fn verify_and_profile_report_on_stderr() {
    let keys = key_export(&["a,b,payload", "1,1,x", "1,2,x", "2,1,x", "2,2,x", "3,1,x"]);
    let (status, out, err) = run_with(
        &["--table", "t", "--pk", "a,b", "--slices", "2", "--verify", "--profile"],
        &keys,
    );
    assert_eq!(status, RunStatus::Ok);
    assert!(out.lines().all(|l| l.starts_with("SELECT * FROM t WHERE a ")));
    assert!(err.contains("[profile] pk_cols=[\"a\", \"b\"]"));
    assert!(err.contains("[verify] table=t total=5"));
    assert!(err.contains("overlap=0"));
}

#[test]
fn emit_queries_prefixes_comments_for_the_dialect() {
    let keys = ids(10);
    let (_, out, _) = run_with(
        &["--table", "hr.emp", "--dbtype", "ora", "--slices", "2", "--emit-queries"],
        &keys,
    );
    let lines: Vec<&str> = out.lines().collect();
    let first_select = lines.iter().position(|l| l.starts_with("SELECT")).unwrap();
    assert!(lines[..first_select].iter().all(|l| l.starts_with("--")));
    assert!(out.contains("all_constraints"));
    assert!(out.contains("[\"HR\", \"EMP\"]"));
    assert!(out.contains("WHERE rn IN (:1, :2, :3)"));
    assert!(out.contains("-- union: SELECT COUNT(*) FROM (SELECT id FROM hr.emp"));
}

#[test]
fn empty_export_prints_nothing() {
    let keys = key_export(&["id"]);
    let (status, out, _) = run_with(&["--table", "t"], &keys);
    assert_eq!(status, RunStatus::Ok);
    assert!(out.is_empty());
}

#[test]
fn zero_slices_is_an_error() {
    let keys = ids(3);
    let path = keys.path().to_string_lossy().into_owned();
    let args = Args::try_parse_from(["slicesql", "--keys", &path, "--table", "t", "--slices", "0"])
        .unwrap();
    assert!(run(&args, &mut Vec::new(), &mut Vec::new()).is_err());
}
