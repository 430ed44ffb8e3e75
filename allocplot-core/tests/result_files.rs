use allocplot_core::{load_file, parse_str, Error, RecordError, SeriesPoint, CYCLE_MIN_SENTINEL};
use std::fs;

#[test]
fn worked_example_block() {
    let s = parse_str("0 0 0 0 100 2 3 0 0 1\n0 5 0 0 10 50 20\n").unwrap();
    assert_eq!(s.points(), &[SeriesPoint { workers: 6, min: 10, mean: 2.5, max: 20 }]);
}

#[test]
fn one_point_per_header_with_comments_between_blocks() {
    let text = "\
# mallocMC scaling run
# chunk cnt ...
16 1 1 0 10 1 32 0 0 2
0 4 0 0 100 200 300
1 0 0 0 5 0 900
# next block
16 1 1 0 10 2 32 0 3 4
0 1 0 0 150 150 150
# trailing comment
";
    let s = parse_str(text).unwrap();
    assert_eq!(s.len(), 2);
    let c = s.columns();
    assert_eq!(c.workers, vec![32, 64]);
    assert_eq!(c.min, vec![100, 150]);
    assert_eq!(c.mean, vec![80.0, 15.0]);
    assert_eq!(c.max, vec![900, 150]);
}

#[test]
fn empty_block_keeps_sentinel() {
    let s = parse_str("0 0 0 0 7 4 4 0 3 3\n").unwrap();
    assert_eq!(s.points(), &[SeriesPoint { workers: 16, min: CYCLE_MIN_SENTINEL, mean: 0.0, max: 0 }]);
}

#[test]
fn zero_count_lines_never_lower_minimum() {
    let text = "0 0 0 0 1 1 1 0 0 3\n0 0 0 0 -99 8 5\n0 2 0 0 40 1 6\n0 0 0 0 1 1 70\n";
    let p = parse_str(text).unwrap().points()[0];
    assert_eq!(p.min, 40);
    assert_eq!(p.max, 70);
    assert_eq!(p.mean, 2.0);
}

#[test]
fn mean_weights_by_count_not_by_line() {
    // Per-line average would give (10 + 100) / 2 = 55.
    let text = "0 0 0 0 4 1 1 0 0 2\n0 3 0 0 1 10 1\n0 1 0 0 1 100 1\n";
    let p = parse_str(text).unwrap().points()[0];
    assert_eq!(p.mean, (3.0 * 10.0 + 100.0) / 4.0);
}

#[test]
fn points_keep_file_order() {
    let text = "0 0 0 0 1 8 1 0 0 0\n0 0 0 0 1 1 1 0 0 0\n0 0 0 0 1 4 1 0 0 0\n";
    assert_eq!(parse_str(text).unwrap().columns().workers, vec![8, 1, 4]);
}

#[test]
fn truncated_block_is_an_error() {
    let text = "0 0 0 0 1 1 1 0 2 5\n0 1 0 0 1 1 1\n0 1 0 0 1 1 1\n";
    match parse_str(text).unwrap_err() {
        Error::Truncated { line, expected, found } => {
            assert_eq!((line, expected, found), (3, 3, 2));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zero_divisor_is_an_error() {
    let err = parse_str("# c\n0 0 0 0 0 1 1 0 0 1\n0 1 0 0 1 1 1\n").unwrap_err();
    assert!(matches!(err, Error::ZeroDivisor { line: 2 }));
}

#[test]
fn malformed_token_reports_line() {
    let err = parse_str("0 0 0 0 1 1 1 0 0 1\n0 1 zero 0 1 1 1\n").unwrap_err();
    assert_eq!(err.line(), Some(2));
    assert!(matches!(err, Error::Format { source: RecordError::Integer { index: 2, .. }, .. }));
}

#[test]
fn comment_inside_block_is_not_skipped() {
    let err = parse_str("0 0 0 0 1 1 1 0 0 1\n# oops\n0 1 0 0 1 1 1\n").unwrap_err();
    assert!(matches!(err, Error::Format { line: 2, .. }));
}

#[test]
fn short_header_is_an_error() {
    let err = parse_str("0 0 0 0 1 1 1 0 0\n").unwrap_err();
    assert!(matches!(err, Error::Format { line: 1, source: RecordError::Arity { found: 9, .. } }));
}

#[test]
fn load_file_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.dat");
    fs::write(&path, "0 0 0 0 100 2 3 0 0 1\n0 5 0 0 10 50 20\n").unwrap();
    let s = load_file(&path).unwrap();
    assert_eq!(s.len(), 1);
    assert!(matches!(load_file(dir.path().join("missing.dat")), Err(Error::Io(_))));
}

#[test]
fn series_serializes_as_point_array() {
    let s = parse_str("0 0 0 0 100 2 3 0 0 1\n0 5 0 0 10 50 20\n").unwrap();
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v[0]["workers"], 6);
    assert_eq!(v[0]["mean"], 2.5);
}

mod props {
    use super::*;
    use proptest::prelude::*;

    fn block() -> impl Strategy<Value = (i64, Vec<(i64, i64, i64, i64)>)> {
        (1i64..1000, prop::collection::vec((0i64..50, 0i64..1_000_000, 0i64..1_000_000, 0i64..1_000_000), 0..6))
    }

    proptest! {
        #[test]
        fn point_count_matches_header_count(blocks in prop::collection::vec(block(), 0..8)) {
            let mut text = String::from("# generated\n");
            for (ts_r, lines) in &blocks {
                text.push_str(&format!("0 0 0 0 {ts_r} 1 1 0 0 {}\n", lines.len()));
                for (cnt, lo, val, hi) in lines {
                    text.push_str(&format!("0 {cnt} 0 0 {lo} {val} {hi}\n"));
                }
                text.push_str("# between\n");
            }
            let s = parse_str(&text).unwrap();
            prop_assert_eq!(s.len(), blocks.len());
            for (p, (ts_r, lines)) in s.points().iter().zip(&blocks) {
                let expect_min = lines.iter().filter(|l| l.0 > 0).map(|l| l.1).min().unwrap_or(CYCLE_MIN_SENTINEL);
                let expect_max = lines.iter().map(|l| l.3).max().unwrap_or(0);
                let expect_sum: i64 = lines.iter().map(|l| l.0 * l.2).sum();
                prop_assert_eq!(p.min, expect_min);
                prop_assert_eq!(p.max, expect_max);
                prop_assert_eq!(p.mean, expect_sum as f64 / *ts_r as f64);
            }
        }
    }
}
