mod loader;
mod model;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
    USER_CONFIG_NAME,
};
pub use model::{AnalysisConfig, Config, OutputConfig, ScannerConfig};
