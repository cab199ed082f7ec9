use docstore_etl::inspection::{
    DataInspector, SummaryStatisticsInspection, TypeCountsInspection,
};
use docstore_etl::types::{DataSet, Schema, Value};

fn mixed_dataset() -> DataSet {
    let schema = Schema::new(vec!["age".to_string(), "workclass".to_string()]);
    DataSet::new(
        schema,
        vec![
            vec![Value::Int64(39), Value::Utf8("State-gov".to_string())],
            vec![Value::Int64(50), Value::Utf8("Private".to_string())],
            vec![Value::Missing, Value::Utf8("State-gov".to_string())],
        ],
    )
}

fn report(inspector: &DataInspector, ds: &DataSet) -> String {
    let mut buf = Vec::new();
    inspector.execute_inspection_to(ds, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn type_counts_report_classifies_columns_and_counts_non_missing() {
    let inspector = DataInspector::new(Box::new(TypeCountsInspection));
    let out = report(&inspector, &mixed_dataset());

    assert!(out.contains("3 rows, 2 columns"));
    assert!(out.contains("age: kind=numeric non_missing=2"));
    assert!(out.contains("workclass: kind=textual non_missing=3"));
}

#[test]
fn summary_report_covers_numeric_and_textual_columns() {
    let inspector = DataInspector::new(Box::new(SummaryStatisticsInspection));
    let out = report(&inspector, &mixed_dataset());

    // ages 39 and 50: mean 44.5, sample std ~7.7782, quartiles interpolated.
    assert!(out.contains("age: count=2 mean=44.5000 std=7.7782"));
    assert!(out.contains("min=39"));
    assert!(out.contains("25%=41.7500 50%=44.5000 75%=47.2500 max=50"));
    assert!(out.contains("workclass: count=3 unique=2 top='State-gov' freq=2"));
}

#[test]
fn empty_dataset_produces_a_no_data_report_not_a_failure() {
    let empty = DataSet::empty();

    let types = DataInspector::new(Box::new(TypeCountsInspection));
    let out = report(&types, &empty);
    assert!(out.contains("no data"));

    let summary = DataInspector::new(Box::new(SummaryStatisticsInspection));
    let out = report(&summary, &empty);
    assert!(out.contains("no numeric columns"));
    assert!(out.contains("no textual columns"));
}

#[test]
fn zero_row_dataset_with_columns_is_safe_for_both_strategies() {
    let ds = DataSet::new(
        Schema::new(vec!["age".to_string(), "workclass".to_string()]),
        Vec::new(),
    );

    let types = DataInspector::new(Box::new(TypeCountsInspection));
    let out = report(&types, &ds);
    assert!(out.contains("0 rows, 2 columns"));
    assert!(out.contains("age: kind=empty non_missing=0"));

    let summary = DataInspector::new(Box::new(SummaryStatisticsInspection));
    let out = report(&summary, &ds);
    assert!(out.contains("no numeric columns"));
    assert!(out.contains("no textual columns"));
}

#[test]
fn set_strategy_replaces_the_active_report() {
    let ds = mixed_dataset();
    let mut inspector = DataInspector::new(Box::new(TypeCountsInspection));
    assert!(report(&inspector, &ds).contains("non_missing"));

    inspector.set_strategy(Box::new(SummaryStatisticsInspection));
    let out = report(&inspector, &ds);
    assert!(out.contains("Summary statistics"));
    assert!(!out.contains("non_missing"));

    // Repeatable: executing again yields the same report.
    assert_eq!(out, report(&inspector, &ds));
}

#[test]
fn inspection_does_not_mutate_the_dataset() {
    let ds = mixed_dataset();
    let before = ds.clone();

    let inspector = DataInspector::new(Box::new(SummaryStatisticsInspection));
    let _ = report(&inspector, &ds);
    assert_eq!(ds, before);
}
