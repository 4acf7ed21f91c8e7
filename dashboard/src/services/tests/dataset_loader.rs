//! Tests for the DatasetLoader service

use super::fixtures::{SAMPLE_CSV, write_dataset};
use crate::error::DashboardError;
use crate::services::RealDatasetLoader;
use crate::traits::DatasetLoader;
use shared::{Month, SharedError, Year};

#[tokio::test]
async fn test_load_sample_dataset() {
    let (_dir, path) = write_dataset(SAMPLE_CSV);
    let loader = RealDatasetLoader::new(&path);

    let table = loader.load().await.unwrap();

    assert_eq!(table.len(), 5);
    assert_eq!(table.total_rentals(), 861);
    assert_eq!(table.years(), vec![Year(2011), Year(2012)]);
    assert_eq!(table.records()[3].month, Month::March);
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let loader = RealDatasetLoader::new("/definitely/not/here/data.csv");

    let result = loader.load().await;

    assert!(matches!(result, Err(DashboardError::IoError(_))));
}

#[tokio::test]
async fn test_missing_column_is_fatal() {
    let (_dir, path) = write_dataset("yr,mnth,hr,temp\n2011,January,0,9.84\n");
    let loader = RealDatasetLoader::new(&path);

    match loader.load().await {
        Err(DashboardError::Dataset(SharedError::MissingColumn { column })) => assert_eq!(column, "cnt"),
        other => panic!("expected missing column error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_source_names_the_file() {
    let (_dir, path) = write_dataset(SAMPLE_CSV);
    let loader = RealDatasetLoader::new(&path);

    assert_eq!(loader.source(), path.display().to_string());
    assert_eq!(loader.path(), path.as_path());
}
