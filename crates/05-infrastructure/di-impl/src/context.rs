//! 应用上下文
//!
//! 容器的入口：构造时扫描组件、实例化后置处理器并预创建所有单例；
//! 之后通过 [`ApplicationContext::get_bean`] 按名称获取 Bean。

use crate::pipeline::PostProcessorPipeline;
use crate::registry::DefaultBeanDefinitionRegistry;
use crate::scanner::CatalogComponentScanner;
use crate::singleton::SingletonCache;
use di_abstractions::{BeanDefinitionRegistry, BeanFactory, ComponentScanner, ContainerStats};
use di_common::{
    capability, BeanDefinition, BeanError, BeanRef, BeanResult, ComponentCatalog, ContainerConfig,
    ContainerResult, Scope,
};
use std::sync::Arc;
use tracing::{debug, info};

/// 应用上下文
///
/// 每个上下文拥有自己的注册表、单例缓存和后置处理器管道，可以在线程间共享。
#[derive(Debug)]
pub struct ApplicationContext {
    registry: DefaultBeanDefinitionRegistry,
    singletons: SingletonCache,
    pipeline: PostProcessorPipeline,
}

impl ApplicationContext {
    /// 使用全局组件目录创建上下文
    pub fn new(config: impl Into<ContainerConfig>) -> ContainerResult<Self> {
        Self::with_catalog(config, ComponentCatalog::global())
    }

    /// 使用指定组件目录创建上下文
    ///
    /// 任何扫描或预创建错误都会中止构造。
    pub fn with_catalog(config: impl Into<ContainerConfig>, catalog: &ComponentCatalog) -> ContainerResult<Self> {
        let config = config.into();
        config.validate()?;

        let mut registry = DefaultBeanDefinitionRegistry::new();
        let outcome = CatalogComponentScanner::new(catalog).scan(&config.namespace(), &mut registry)?;

        let mut pipeline = PostProcessorPipeline::new();
        pipeline.extend(outcome.post_processors);

        let context = Self {
            registry,
            singletons: SingletonCache::new(),
            pipeline,
        };
        context.preinstantiate_singletons()?;

        info!(
            "应用上下文初始化完成: {} 个 Bean 定义，{} 个单例，{} 个后置处理器",
            context.registry.bean_definition_count(),
            context.singletons.len(),
            context.pipeline.len()
        );
        Ok(context)
    }

    /// 按注册顺序预创建所有单例
    fn preinstantiate_singletons(&self) -> BeanResult<()> {
        for definition in self.registry.iter().filter(|definition| definition.is_singleton()) {
            self.get_bean(definition.name())?;
        }
        Ok(())
    }

    /// 按名称获取 Bean
    ///
    /// 单例返回缓存实例（首次访问时创建），原型每次创建新实例。
    ///
    /// 不检测循环依赖：单例直接或间接依赖自身时，创建过程会在自己的单元格上阻塞。
    pub fn get_bean(&self, name: &str) -> BeanResult<BeanRef> {
        let definition = self
            .registry
            .bean_definition(name)
            .ok_or_else(|| BeanError::not_found(name))?;

        match definition.scope() {
            Scope::Singleton => self
                .singletons
                .get_or_try_create(name, || self.create_bean(name, definition)),
            Scope::Prototype => self.create_bean(name, definition),
        }
    }

    /// 按名称获取 Bean，并转换为指定能力
    pub fn get_bean_as<C: ?Sized + 'static>(&self, name: &str) -> BeanResult<Arc<C>> {
        let bean = self.get_bean(name)?;
        capability::<C>(&bean).ok_or_else(|| BeanError::BeanNotOfRequiredType {
            name: name.to_string(),
            expected: std::any::type_name::<C>(),
        })
    }

    /// 创建并初始化 Bean
    ///
    /// 构造 → 字段注入 → 名称回调 → 前置处理 → 初始化回调 → 后置处理
    fn create_bean(&self, name: &str, definition: &BeanDefinition) -> BeanResult<BeanRef> {
        debug!("创建 Bean: {} ({})", name, definition.type_name());

        let mut bean = (definition.factory())().map_err(|source| BeanError::ConstructionError {
            name: name.to_string(),
            type_name: definition.type_name().to_string(),
            source,
        })?;

        for point in definition.injection_points() {
            let dependency = self.get_bean(point.bean_name).map_err(|err| match err {
                BeanError::BeanNotFound { name: missing } if missing == point.bean_name => {
                    BeanError::DependencyNotFound {
                        bean: name.to_string(),
                        field: point.field.to_string(),
                        dependency: missing,
                    }
                }
                other => other,
            })?;
            debug!("注入依赖: {}.{} <- {}", name, point.field, point.bean_name);
            bean.inject(name, point.field, dependency)?;
        }

        if let Some(aware) = bean.as_bean_name_aware() {
            aware.set_bean_name(name);
        }

        let mut bean = self.pipeline.apply_before_initialization(name, bean);

        if let Some(initializing) = bean.as_initializing_bean() {
            initializing
                .after_properties_set()
                .map_err(|source| BeanError::InitializationError {
                    name: name.to_string(),
                    source,
                })?;
        }

        let bean: BeanRef = Arc::from(bean);
        Ok(self.pipeline.apply_after_initialization(name, bean))
    }

    /// 获取 Bean 定义
    pub fn bean_definition(&self, name: &str) -> Option<&BeanDefinition> {
        self.registry.bean_definition(name)
    }

    /// 按注册顺序返回所有 Bean 名称
    pub fn bean_definition_names(&self) -> Vec<&str> {
        self.registry.bean_definition_names()
    }

    /// 获取统计信息
    pub fn stats(&self) -> ContainerStats {
        ContainerStats {
            bean_definitions: self.registry.bean_definition_count(),
            cached_singletons: self.singletons.len(),
            post_processors: self.pipeline.len(),
        }
    }

    fn definition_or_not_found(&self, name: &str) -> BeanResult<&BeanDefinition> {
        self.registry
            .bean_definition(name)
            .ok_or_else(|| BeanError::not_found(name))
    }
}

impl BeanFactory for ApplicationContext {
    fn get_bean(&self, name: &str) -> BeanResult<BeanRef> {
        Self::get_bean(self, name)
    }

    fn contains_bean(&self, name: &str) -> bool {
        self.registry.contains_bean_definition(name)
    }

    fn is_singleton(&self, name: &str) -> BeanResult<bool> {
        self.definition_or_not_found(name).map(BeanDefinition::is_singleton)
    }

    fn is_prototype(&self, name: &str) -> BeanResult<bool> {
        self.definition_or_not_found(name).map(BeanDefinition::is_prototype)
    }
}
