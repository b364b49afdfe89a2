//! 元数据定义
//!
//! 组件描述符（扫描的输入）和 Bean 定义（扫描的输出）

use crate::component::Bean;
use crate::conventions::NamingConventions;
use crate::errors::BoxError;
use crate::lifecycle::{BeanPostProcessor, Scope};
use std::fmt;
use std::sync::Arc;

/// 零参数构造函数
pub type BeanFactoryFn = fn() -> Result<Box<dyn Bean>, BoxError>;

/// 后置处理器构造函数
pub type PostProcessorFactoryFn = fn() -> Result<Arc<dyn BeanPostProcessor>, BoxError>;

/// 组件标记
///
/// 只有带标记的类型才会被扫描器注册为 Bean。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComponentMarker {
    /// 显式指定的 Bean 名称
    pub name: Option<&'static str>,
    /// 显式指定的作用域
    pub scope: Option<&'static str>,
}

/// 注入点
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjectionPoint {
    /// 字段名
    pub field: &'static str,
    /// 依赖的 Bean 名称（由字段名推导）
    pub bean_name: &'static str,
}

impl InjectionPoint {
    /// 创建注入点
    pub const fn new(field: &'static str, bean_name: &'static str) -> Self {
        Self { field, bean_name }
    }
}

/// 组件描述符
///
/// 编译期生成的类型信息：构造函数、注入点以及可选的后置处理器能力。
#[derive(Clone, Copy)]
pub struct ComponentDescriptor {
    /// 带模块路径的类型名称
    pub type_name: &'static str,
    /// 类型所在的模块路径
    pub module_path: &'static str,
    /// 组件标记
    pub marker: Option<ComponentMarker>,
    /// 注入点列表
    pub injection_points: &'static [InjectionPoint],
    /// 构造函数
    pub factory: BeanFactoryFn,
    /// 后置处理器构造函数
    pub post_processor: Option<PostProcessorFactoryFn>,
}

impl ComponentDescriptor {
    /// 创建带默认标记的组件描述符
    pub const fn new(type_name: &'static str, module_path: &'static str, factory: BeanFactoryFn) -> Self {
        Self {
            type_name,
            module_path,
            marker: Some(ComponentMarker {
                name: None,
                scope: None,
            }),
            injection_points: &[],
            factory,
            post_processor: None,
        }
    }

    /// 设置 Bean 名称
    #[must_use]
    pub const fn named(mut self, name: &'static str) -> Self {
        let scope = match self.marker {
            Some(marker) => marker.scope,
            None => None,
        };
        self.marker = Some(ComponentMarker {
            name: Some(name),
            scope,
        });
        self
    }

    /// 设置作用域
    #[must_use]
    pub const fn scoped(mut self, scope: &'static str) -> Self {
        let name = match self.marker {
            Some(marker) => marker.name,
            None => None,
        };
        self.marker = Some(ComponentMarker {
            name,
            scope: Some(scope),
        });
        self
    }

    /// 去掉组件标记
    #[must_use]
    pub const fn unmanaged(mut self) -> Self {
        self.marker = None;
        self
    }

    /// 设置注入点
    #[must_use]
    pub const fn with_injection_points(mut self, points: &'static [InjectionPoint]) -> Self {
        self.injection_points = points;
        self
    }

    /// 声明后置处理器能力
    #[must_use]
    pub const fn with_post_processor(mut self, factory: PostProcessorFactoryFn) -> Self {
        self.post_processor = Some(factory);
        self
    }

    /// 不带模块路径的类型名称
    pub fn simple_name(&self) -> &'static str {
        NamingConventions::simple_type_name(self.type_name)
    }

    /// 是否带有组件标记
    pub const fn is_managed(&self) -> bool {
        self.marker.is_some()
    }
}

impl fmt::Debug for ComponentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentDescriptor")
            .field("type_name", &self.type_name)
            .field("module_path", &self.module_path)
            .field("marker", &self.marker)
            .field("injection_points", &self.injection_points)
            .field("factory", &"<function>")
            .field("post_processor", &self.post_processor.is_some())
            .finish()
    }
}

/// Bean 定义
///
/// 创建后不可变。
#[derive(Debug, Clone)]
pub struct BeanDefinition {
    name: String,
    scope: Scope,
    component: ComponentDescriptor,
}

impl BeanDefinition {
    /// 创建 Bean 定义
    pub fn new(name: impl Into<String>, scope: Scope, component: ComponentDescriptor) -> Self {
        Self {
            name: name.into(),
            scope,
            component,
        }
    }

    /// Bean 名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 作用域
    pub const fn scope(&self) -> Scope {
        self.scope
    }

    /// 是否单例
    pub fn is_singleton(&self) -> bool {
        self.scope == Scope::Singleton
    }

    /// 是否原型
    pub fn is_prototype(&self) -> bool {
        self.scope == Scope::Prototype
    }

    /// 实现类型名称
    pub const fn type_name(&self) -> &'static str {
        self.component.type_name
    }

    /// 注入点列表
    pub const fn injection_points(&self) -> &'static [InjectionPoint] {
        self.component.injection_points
    }

    /// 构造函数
    pub const fn factory(&self) -> BeanFactoryFn {
        self.component.factory
    }

    /// 组件描述符
    pub const fn component(&self) -> &ComponentDescriptor {
        &self.component
    }
}
