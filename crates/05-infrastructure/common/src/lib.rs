//! # DI Common
//!
//! Lorn IoC 容器的公共模型和接口。
//!
//! ## 核心组件
//!
//! - [`Bean`] - 容器管理实例的基础 trait，通过能力探测暴露接口
//! - [`BeanDefinition`] - Bean 的静态描述（实现 + 作用域）
//! - [`ComponentCatalog`] - 编译期登记的组件目录，扫描器的输入
//! - [`BeanPostProcessor`] / [`BeanNameAware`] / [`InitializingBean`] - 生命周期回调
//! - [`ContainerConfig`] - 容器配置
//!
//! ## 设计原则
//!
//! - 不依赖运行时反射：构造函数和注入点在编译期记录
//! - 按名称注入，按能力（`dyn Trait`）使用
//! - 注册表和单例缓存属于容器实例，不使用全局状态

pub mod component;
pub mod configuration;
pub mod conventions;
pub mod discovery;
pub mod errors;
pub mod lifecycle;
pub mod metadata;

pub use component::*;
pub use configuration::*;
pub use conventions::*;
pub use discovery::*;
pub use errors::*;
pub use lifecycle::*;
pub use metadata::*;
