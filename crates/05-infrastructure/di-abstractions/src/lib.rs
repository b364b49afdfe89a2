//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义组件扫描、Bean 定义注册和 Bean 获取的核心接口。
//!
//! ## 核心接口
//!
//! - [`BeanDefinitionRegistry`] - Bean 定义注册表接口
//! - [`ComponentScanner`] - 组件扫描器接口
//! - [`BeanFactory`] - 按名称获取 Bean 的接口

pub mod container;
pub mod registry;
pub mod resolver;
pub mod scanner;

pub use container::*;
pub use registry::*;
pub use resolver::*;
pub use scanner::*;
