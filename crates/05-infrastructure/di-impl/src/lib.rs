//! # 依赖注入具体实现
//!
//! 提供组件扫描器、Bean 定义注册表、单例缓存、后置处理器管道、拦截代理
//! 以及把它们组装在一起的 [`ApplicationContext`]。
//!
//! ```ignore
//! let context = ApplicationContext::new("my_app::service")?;
//! let users = context.get_bean_as::<dyn UserInterface>("userService")?;
//! ```

pub mod context;
pub mod pipeline;
pub mod proxy;
pub mod registry;
pub mod scanner;
pub mod singleton;

pub use context::ApplicationContext;
pub use pipeline::PostProcessorPipeline;
pub use proxy::{Intercepted, InterceptorHook, Invocation, ProxyBean, ProxyBuilder};
pub use registry::DefaultBeanDefinitionRegistry;
pub use scanner::CatalogComponentScanner;
pub use singleton::SingletonCache;
