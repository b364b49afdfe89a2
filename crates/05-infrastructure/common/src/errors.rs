//! 错误类型定义

use thiserror::Error;

/// 用户代码（构造函数、初始化回调）返回的错误
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置加载失败: {source}")]
    LoadError {
        #[from]
        source: config::ConfigError,
    },

    #[error("配置验证失败: {message}")]
    ValidationError { message: String },
}

/// 组件扫描错误类型
///
/// 扫描阶段的错误都是致命的：容器构建直接中止，不会产生部分可用的容器。
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("扫描路径不存在: {path}")]
    ScanPathNotFound { path: String },

    #[error("组件加载失败: {type_name}, 原因: {message}")]
    ComponentLoadError { type_name: String, message: String },

    #[error("后置处理器实例化失败: {type_name}, 原因: {source}")]
    PostProcessorInstantiationError {
        type_name: String,
        source: BoxError,
    },

    #[error("Bean 名称重复: {name} ({existing} 与 {duplicate})")]
    DuplicateBeanName {
        name: String,
        existing: String,
        duplicate: String,
    },
}

/// Bean 创建与查找错误类型
///
/// 运行期错误只传播给出错的 `get_bean` 调用方，容器本身保持可用。
#[derive(Error, Debug)]
pub enum BeanError {
    #[error("Bean 不存在: {name}")]
    BeanNotFound { name: String },

    #[error("Bean 构造失败: {name} ({type_name}), 原因: {source}")]
    ConstructionError {
        name: String,
        type_name: String,
        source: BoxError,
    },

    #[error("依赖不存在: {bean}.{field} -> {dependency}")]
    DependencyNotFound {
        bean: String,
        field: String,
        dependency: String,
    },

    #[error("依赖类型不匹配: {bean}.{field} 需要 {expected}")]
    DependencyTypeMismatch {
        bean: String,
        field: String,
        expected: &'static str,
    },

    #[error("未知的注入点: {type_name}.{field}")]
    UnknownInjectionPoint { type_name: String, field: String },

    #[error("Bean 初始化失败: {name}, 原因: {source}")]
    InitializationError { name: String, source: BoxError },

    #[error("Bean 类型不匹配: {name} 不提供 {expected}")]
    BeanNotOfRequiredType { name: String, expected: &'static str },
}

impl BeanError {
    /// 创建 Bean 不存在错误
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::BeanNotFound { name: name.into() }
    }
}

/// 容器错误类型
#[derive(Error, Debug)]
pub enum ContainerError {
    #[error("配置错误: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("组件扫描错误: {source}")]
    Scan {
        #[from]
        source: ScanError,
    },

    #[error("Bean 错误: {source}")]
    Bean {
        #[from]
        source: BeanError,
    },
}

/// 结果类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
pub type ScanResult<T> = Result<T, ScanError>;
pub type BeanResult<T> = Result<T, BeanError>;
pub type ContainerResult<T> = Result<T, ContainerError>;
