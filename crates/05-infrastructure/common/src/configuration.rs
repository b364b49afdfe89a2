//! 容器配置

use crate::conventions::ScanPathConventions;
use crate::errors::{ConfigError, ConfigResult};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// 环境变量前缀，例如 `IOC_SCAN_PATH`
pub const ENV_PREFIX: &str = "IOC";

/// 容器配置
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContainerConfig {
    /// 扫描根路径，支持 `.`、`/`、`::` 分隔
    pub scan_path: String,
}

impl ContainerConfig {
    /// 创建配置
    pub fn new(scan_path: impl Into<String>) -> Self {
        Self {
            scan_path: scan_path.into(),
        }
    }

    /// 从配置文件和环境变量加载
    ///
    /// 文件可选（TOML/JSON/YAML，按扩展名识别）；环境变量优先级更高。
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        debug!("加载容器配置: {}", path.display());

        let config = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;

        let loaded: Self = config.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// 规范化后的扫描路径（`::` 分隔）
    pub fn namespace(&self) -> String {
        ScanPathConventions::normalize(&self.scan_path)
    }

    /// 验证配置
    pub fn validate(&self) -> ConfigResult<()> {
        if self.namespace().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "scan_path 不能为空".to_string(),
            });
        }
        Ok(())
    }
}

impl From<&str> for ContainerConfig {
    fn from(scan_path: &str) -> Self {
        Self::new(scan_path)
    }
}

impl From<String> for ContainerConfig {
    fn from(scan_path: String) -> Self {
        Self::new(scan_path)
    }
}
