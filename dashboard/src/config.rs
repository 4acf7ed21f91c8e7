//! Dashboard runtime configuration

use serde::{Deserialize, Serialize};
use shared::Year;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::error::{DashboardError, DashboardResult};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DashboardConfig {
    pub host: String,
    pub port: u16,
    /// CSV dataset read once at startup
    pub data_path: PathBuf,
    pub static_dir: PathBuf,
    /// Year selected when a request does not name one
    pub default_year: Option<Year>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
            data_path: PathBuf::from("data/data.csv"),
            static_dir: PathBuf::from("./static"),
            default_year: None,
        }
    }
}

impl DashboardConfig {
    /// Resolve the listen address
    pub fn bind_addr(&self) -> DashboardResult<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| DashboardError::config(format!("Invalid host '{}': {}", self.host, e)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
