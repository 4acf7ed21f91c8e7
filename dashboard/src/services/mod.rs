//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod dataset_loader;
pub mod static_server;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use dataset_loader::RealDatasetLoader;
pub use static_server::RealStaticFileServer;
