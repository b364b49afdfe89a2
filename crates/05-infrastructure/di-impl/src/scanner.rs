//! 组件扫描器实现
//!
//! 从组件目录中查找直接位于扫描路径下的类型（不递归子模块），
//! 生成 Bean 定义，并立即实例化后置处理器。

use di_abstractions::{BeanDefinitionRegistry, ComponentScanner, ScanOutcome};
use di_common::{
    BeanDefinition, ComponentCatalog, ComponentDescriptor, ComponentMarker, NamingConventions,
    ScanError, ScanPathConventions, ScanResult, Scope,
};
use tracing::{debug, info};

/// 基于组件目录的扫描器
#[derive(Debug, Clone, Copy)]
pub struct CatalogComponentScanner<'a> {
    catalog: &'a ComponentCatalog,
}

impl<'a> CatalogComponentScanner<'a> {
    /// 创建扫描器
    pub const fn new(catalog: &'a ComponentCatalog) -> Self {
        Self { catalog }
    }

    /// 把描述符解析为 Bean 定义
    fn resolve_definition(
        descriptor: &ComponentDescriptor,
        marker: ComponentMarker,
    ) -> ScanResult<BeanDefinition> {
        let simple_name = descriptor.simple_name();
        if !NamingConventions::is_valid_identifier(simple_name) {
            return Err(ScanError::ComponentLoadError {
                type_name: descriptor.type_name.to_string(),
                message: format!("无效的类型名称: '{simple_name}'"),
            });
        }

        let name = match marker.name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => NamingConventions::default_bean_name(simple_name),
        };

        let scope = match marker.scope {
            Some(scope) => scope
                .parse::<Scope>()
                .map_err(|message| ScanError::ComponentLoadError {
                    type_name: descriptor.type_name.to_string(),
                    message,
                })?,
            None => Scope::Singleton,
        };

        Ok(BeanDefinition::new(name, scope, *descriptor))
    }
}

impl ComponentScanner for CatalogComponentScanner<'_> {
    fn scan(&self, namespace: &str, registry: &mut dyn BeanDefinitionRegistry) -> ScanResult<ScanOutcome> {
        let namespace = ScanPathConventions::normalize(namespace);
        if namespace.is_empty() || !self.catalog.contains_namespace(&namespace) {
            return Err(ScanError::ScanPathNotFound { path: namespace });
        }

        info!("{} 开始扫描: {}", self.name(), namespace);
        let mut outcome = ScanOutcome::default();

        for descriptor in self.catalog.list_module(&namespace) {
            let Some(marker) = descriptor.marker else {
                debug!("跳过未标记的类型: {}", descriptor.type_name);
                outcome.skipped += 1;
                continue;
            };

            let definition = Self::resolve_definition(&descriptor, marker)?;

            if let Some(create_processor) = descriptor.post_processor {
                let processor = create_processor().map_err(|source| {
                    ScanError::PostProcessorInstantiationError {
                        type_name: descriptor.type_name.to_string(),
                        source,
                    }
                })?;
                debug!("实例化后置处理器: {}", descriptor.type_name);
                outcome.post_processors.push(processor);
            }

            registry.register_bean_definition(definition)?;
            outcome.registered += 1;
        }

        info!(
            "{} 扫描 {} 完成，注册了 {} 个 Bean，{} 个后置处理器",
            self.name(),
            namespace,
            outcome.registered,
            outcome.post_processors.len()
        );
        Ok(outcome)
    }

    fn name(&self) -> &str {
        "CatalogComponentScanner"
    }
}
