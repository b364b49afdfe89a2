//! Bean 定义注册表实现

use di_abstractions::BeanDefinitionRegistry;
use di_common::{BeanDefinition, ScanError, ScanResult};
use std::collections::HashMap;
use tracing::debug;

/// 默认 Bean 定义注册表
///
/// 保留注册顺序，容器按该顺序预创建单例。
#[derive(Debug, Default)]
pub struct DefaultBeanDefinitionRegistry {
    definitions: HashMap<String, BeanDefinition>,
    order: Vec<String>,
}

impl DefaultBeanDefinitionRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 按注册顺序遍历 Bean 定义
    pub fn iter(&self) -> impl Iterator<Item = &BeanDefinition> {
        self.order.iter().filter_map(|name| self.definitions.get(name))
    }
}

impl BeanDefinitionRegistry for DefaultBeanDefinitionRegistry {
    fn register_bean_definition(&mut self, definition: BeanDefinition) -> ScanResult<()> {
        if let Some(existing) = self.definitions.get(definition.name()) {
            return Err(ScanError::DuplicateBeanName {
                name: definition.name().to_string(),
                existing: existing.type_name().to_string(),
                duplicate: definition.type_name().to_string(),
            });
        }

        debug!(
            "注册 Bean 定义: {} ({}, {})",
            definition.name(),
            definition.type_name(),
            definition.scope()
        );
        self.order.push(definition.name().to_string());
        self.definitions.insert(definition.name().to_string(), definition);
        Ok(())
    }

    fn bean_definition(&self, name: &str) -> Option<&BeanDefinition> {
        self.definitions.get(name)
    }

    fn bean_definition_names(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    fn bean_definition_count(&self) -> usize {
        self.order.len()
    }
}
