//! Integration tests for CSV loading and validation.

use newsmood_data::{
    ColumnMapping, DataError, Field, MonthKey, MonthRange, Sentiment, load_csv,
};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_valid_csv() {
    let file = write_csv(
        "pub_date,main_headline,headline_sentiment_vader\n\
         2024-01-05T10:00:00+0000,\"Trump wins big, again\",positive\n\
         2024-01-10T12:30:00+0000,Biden responds,neutral\n\
         2024-02-01T09:00:00+0000,,negative\n",
    );

    let dataset = load_csv(file.path(), &ColumnMapping::default()).unwrap();

    assert_eq!(dataset.len(), 3);
    assert_eq!(dataset.records()[0].text(), Some("Trump wins big, again"));
    assert_eq!(dataset.records()[2].text(), None);
    assert_eq!(dataset.records()[2].sentiment, Sentiment::Negative);
    assert_eq!(
        dataset.months(),
        vec![
            MonthKey::new(2024, 1).unwrap(),
            MonthKey::new(2024, 2).unwrap()
        ]
    );
}

#[test]
fn test_load_then_restrict() {
    let file = write_csv(
        "pub_date,main_headline,headline_sentiment_vader\n\
         2023-12-31,Old news,neutral\n\
         2024-06-01,Harris rallies,positive\n\
         2025-04-01,Too late,negative\n",
    );

    let dataset = load_csv(file.path(), &ColumnMapping::default())
        .unwrap()
        .restrict_to(MonthRange::default());

    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.records()[0].text(), Some("Harris rallies"));
}

#[test]
fn test_bad_timestamp_fails_load() {
    let file = write_csv(
        "pub_date,main_headline,headline_sentiment_vader\n\
         2024-01-05,Fine,positive\n\
         not-a-date,Broken,neutral\n",
    );

    let err = load_csv(file.path(), &ColumnMapping::default()).unwrap_err();
    assert!(matches!(
        err,
        DataError::DataQuality {
            row: 1,
            field: Field::Timestamp,
            ..
        }
    ));
}

#[test]
fn test_missing_sentiment_fails_load() {
    let file = write_csv(
        "pub_date,main_headline,headline_sentiment_vader\n\
         2024-01-05,No label,\n",
    );

    let err = load_csv(file.path(), &ColumnMapping::default()).unwrap_err();
    assert!(matches!(
        err,
        DataError::DataQuality {
            row: 0,
            field: Field::Sentiment,
            ..
        }
    ));
}

#[test]
fn test_missing_column_fails_load() {
    let file = write_csv("pub_date,headline_sentiment_vader\n2024-01-05,positive\n");

    let err = load_csv(file.path(), &ColumnMapping::default()).unwrap_err();
    assert!(matches!(err, DataError::MissingColumn(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_csv(dir.path().join("absent.csv"), &ColumnMapping::default()).unwrap_err();
    assert!(matches!(err, DataError::Io(_)));
}
