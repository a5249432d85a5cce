//! End-to-end tests of the read -> validate -> score -> write pipeline.

use std::fs;
use std::path::Path;

use proptest::prelude::*;
use topsis::config::OutputConfig;
use topsis::run::{rank_table, run_file};
use topsis::table::read_table_bytes;

const GOLDEN_INPUT: &str = "Name,C1,C2,C3\nA,250,16,12\nB,200,20,8\n";

fn write_input(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("input.csv");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn golden_fixture_writes_expected_table() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), GOLDEN_INPUT);
    let output = dir.path().join("result.csv");

    run_file(&input, "1,1,1", "+,-,+", &output, &OutputConfig::default()).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "Name,C1,C2,C3,Topsis Score,Rank\nA,250,16,12,1.0,1\nB,200,20,8,0.0,2\n"
    );
}

#[test]
fn five_row_fixture_round_trips_through_csv() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(
        dir.path(),
        "Model,Price,Storage,Camera,Looks\n\
         M1,250,16,12,5\n\
         M2,200,16,8,3\n\
         M3,300,32,16,4\n\
         M4,275,32,8,4\n\
         M5,225,16,16,2\n",
    );
    let output = dir.path().join("result.csv");

    run_file(&input, "1,1,1,1", "-,+,+,+", &output, &OutputConfig::default()).unwrap();

    let table = read_table_bytes(&fs::read(&output).unwrap()).unwrap();
    let expected = [
        (0.5342768571821003, "3"),
        (0.3083677687324685, "5"),
        (0.6916322312675315, "1"),
        (0.534736584486838, "2"),
        (0.40104612151678615, "4"),
    ];
    for (record, (score, rank)) in table.records.iter().zip(expected) {
        let written: f64 = record[5].parse().unwrap();
        assert!((written - score).abs() < 1e-12);
        assert_eq!(record[6], rank);
    }
}

#[test]
fn missing_input_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("result.csv");
    let err = run_file(
        &dir.path().join("nope.csv"),
        "1,1",
        "+,+",
        &output,
        &OutputConfig::default(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), "InputNotFound");
    assert!(!output.exists());
}

#[test]
fn shape_mismatch_on_three_criteria() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), GOLDEN_INPUT);
    let output = dir.path().join("result.csv");

    let err = run_file(&input, "1,1", "+,-,+", &output, &OutputConfig::default()).unwrap_err();
    assert_eq!(err.kind(), "ShapeMismatch");
    assert!(!output.exists());
}

#[test]
fn non_numeric_cell_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "Name,C1,C2,C3\nA,250,16,12\nB,200,twenty,8\n");
    let output = dir.path().join("result.csv");

    let err = run_file(&input, "1,1,1", "+,-,+", &output, &OutputConfig::default()).unwrap_err();
    assert_eq!(err.kind(), "TypeError");
    assert!(!output.exists());
}

#[test]
fn invalid_impact_symbol() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), GOLDEN_INPUT);
    let output = dir.path().join("result.csv");

    let err = run_file(&input, "1,1,1", "+,*,+", &output, &OutputConfig::default()).unwrap_err();
    assert_eq!(err.kind(), "InvalidImpact");
}

#[test]
fn existing_output_is_left_alone_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path(), "Name,C1,C2\nA,0,1\nB,0,2\n");
    let output = dir.path().join("result.csv");
    fs::write(&output, "previous").unwrap();

    let err = run_file(&input, "1,1", "+,+", &output, &OutputConfig::default()).unwrap_err();
    assert_eq!(err.kind(), "DegenerateColumn");
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}

fn dataset() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<f64>, Vec<bool>)> {
    (1usize..8, 2usize..5).prop_flat_map(|(n, m)| {
        (
            prop::collection::vec(prop::collection::vec(1.0f64..1000.0, m), n),
            prop::collection::vec(0.1f64..5.0, m),
            prop::collection::vec(any::<bool>(), m),
        )
    })
}

fn to_inputs(rows: &[Vec<f64>], weights: &[f64], benefit: &[bool]) -> (String, String, String) {
    let m = weights.len();
    let mut csv = String::from("Name");
    for j in 0..m {
        csv.push_str(&format!(",C{}", j + 1));
    }
    csv.push('\n');
    for (i, row) in rows.iter().enumerate() {
        csv.push_str(&format!("R{}", i + 1));
        for v in row {
            csv.push_str(&format!(",{}", v));
        }
        csv.push('\n');
    }
    let weights = weights
        .iter()
        .map(|w| w.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let impacts = benefit
        .iter()
        .map(|&b| if b { "+" } else { "-" })
        .collect::<Vec<_>>()
        .join(",");
    (csv, weights, impacts)
}

proptest! {
    #[test]
    fn output_shape_matches_input((rows, weights, benefit) in dataset()) {
        let (csv, w, i) = to_inputs(&rows, &weights, &benefit);
        let table = read_table_bytes(csv.as_bytes()).unwrap();
        let ranked = rank_table(&table, &w, &i, &OutputConfig::default()).unwrap();
        prop_assert_eq!(ranked.table.row_count(), table.row_count());
        prop_assert_eq!(ranked.table.column_count(), table.column_count() + 2);
        prop_assert_eq!(&ranked.table.records[0][..table.column_count()], &table.records[0][..]);
    }

    #[test]
    fn scores_stay_in_unit_interval((rows, weights, benefit) in dataset()) {
        let (csv, w, i) = to_inputs(&rows, &weights, &benefit);
        let table = read_table_bytes(csv.as_bytes()).unwrap();
        let ranked = rank_table(&table, &w, &i, &OutputConfig::default()).unwrap();
        for r in &ranked.results {
            prop_assert!((0.0..=1.0).contains(&r.score), "score {}", r.score);
        }
    }

    #[test]
    fn ranks_follow_competition_rule((rows, weights, benefit) in dataset()) {
        let (csv, w, i) = to_inputs(&rows, &weights, &benefit);
        let table = read_table_bytes(csv.as_bytes()).unwrap();
        let ranked = rank_table(&table, &w, &i, &OutputConfig::default()).unwrap();
        let scores: Vec<f64> = ranked.results.iter().map(|r| r.score).collect();
        for r in &ranked.results {
            let better = scores.iter().filter(|s| **s > r.score).count();
            prop_assert_eq!(r.rank, better + 1);
        }
        prop_assert!(ranked.results.iter().any(|r| r.rank == 1));
    }

    #[test]
    fn rerun_is_bit_identical((rows, weights, benefit) in dataset()) {
        let (csv, w, i) = to_inputs(&rows, &weights, &benefit);
        let table = read_table_bytes(csv.as_bytes()).unwrap();
        let a = rank_table(&table, &w, &i, &OutputConfig::default()).unwrap();
        let b = rank_table(&table, &w, &i, &OutputConfig::default()).unwrap();
        prop_assert_eq!(a.table, b.table);
        for (x, y) in a.results.iter().zip(&b.results) {
            prop_assert_eq!(x.score.to_bits(), y.score.to_bits());
        }
    }
}
