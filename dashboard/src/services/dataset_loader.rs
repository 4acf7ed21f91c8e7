//! CSV dataset loader

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use shared::{Component, RentalTable, component_info, parse_rentals};

use crate::error::DashboardResult;
use crate::traits::DatasetLoader;

/// Reads the rental dataset from a CSV file on disk
#[derive(Clone, Debug)]
pub struct RealDatasetLoader {
    path: PathBuf,
}

impl RealDatasetLoader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DatasetLoader for RealDatasetLoader {
    async fn load(&self) -> DashboardResult<RentalTable> {
        let bytes = fs::read(&self.path).await?;
        let table = parse_rentals(bytes.as_slice())?;

        let years = table.years();
        component_info!(
            Component::Loader,
            "📂 Loaded {} rental records from {} (years: {:?})",
            table.len(),
            self.path.display(),
            years.iter().map(|y| y.value()).collect::<Vec<_>>()
        );

        Ok(table)
    }

    fn source(&self) -> String {
        self.path.display().to_string()
    }
}
