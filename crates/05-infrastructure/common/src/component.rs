//! 组件基础接口定义
//!
//! 容器管理的所有实例都以 [`Bean`] trait 对象的形式存在。容器对实例的所有操作
//! （注入、回调、代理）都通过能力探测完成，而不是依赖静态类型。

use crate::errors::{BeanError, BeanResult};
use crate::lifecycle::{BeanNameAware, InitializingBean};
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// 共享的 Bean 引用
pub type BeanRef = Arc<dyn Bean>;

/// Bean 基础 trait
///
/// 通常由 `#[derive(Component)]` 生成，也可以手工实现。
pub trait Bean: Any + Send + Sync {
    /// 实现类型名称
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// 能力探测
    ///
    /// `capability` 是所请求能力的 `TypeId`，可以是具体类型，也可以是 `dyn Trait`。
    /// 支持时返回装箱的 `Arc<C>`。默认只提供实现类型本身。
    fn capability(self: Arc<Self>, capability: TypeId) -> Option<Box<dyn Any>> {
        if capability == TypeId::of::<Self>() {
            Some(Box::new(self))
        } else {
            None
        }
    }

    /// 字段注入
    ///
    /// `field` 是被 `#[autowired]` 标记的字段名，`dependency` 是按名称解析到的依赖。
    fn inject(&mut self, bean_name: &str, field: &str, dependency: BeanRef) -> BeanResult<()> {
        let _ = (bean_name, dependency);
        Err(BeanError::UnknownInjectionPoint {
            type_name: self.type_name().to_string(),
            field: field.to_string(),
        })
    }

    /// 名称感知能力
    fn as_bean_name_aware(&mut self) -> Option<&mut dyn BeanNameAware> {
        None
    }

    /// 初始化能力
    fn as_initializing_bean(&mut self) -> Option<&mut dyn InitializingBean> {
        None
    }
}

impl fmt::Debug for dyn Bean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bean")
            .field("type_name", &self.type_name())
            .finish()
    }
}

/// 从 Bean 中获取指定能力
///
/// `C` 可以是实现类型，也可以是 Bean 暴露的 `dyn Trait`；`dyn Bean` 总是可用。
pub fn capability<C: ?Sized + 'static>(bean: &BeanRef) -> Option<Arc<C>> {
    let provided: Box<dyn Any> = if TypeId::of::<C>() == TypeId::of::<dyn Bean>() {
        Box::new(Arc::clone(bean))
    } else {
        Arc::clone(bean).capability(TypeId::of::<C>())?
    };
    provided.downcast::<Arc<C>>().ok().map(|handle| *handle)
}

/// 自动注入字段
///
/// 字段名即依赖的 Bean 名称；注入时依赖会被转换为 `C` 能力。
pub struct Autowired<C: ?Sized> {
    bean: Option<Arc<C>>,
}

impl<C: ?Sized + 'static> Autowired<C> {
    /// 注入依赖
    pub fn wire(&mut self, bean_name: &str, field: &str, dependency: &BeanRef) -> BeanResult<()> {
        let resolved = capability::<C>(dependency).ok_or_else(|| BeanError::DependencyTypeMismatch {
            bean: bean_name.to_string(),
            field: field.to_string(),
            expected: std::any::type_name::<C>(),
        })?;
        self.bean = Some(resolved);
        Ok(())
    }
}

impl<C: ?Sized> Autowired<C> {
    /// 获取已注入的依赖
    pub fn get(&self) -> Option<&Arc<C>> {
        self.bean.as_ref()
    }

    /// 是否已经注入
    pub fn is_wired(&self) -> bool {
        self.bean.is_some()
    }
}

impl<C: ?Sized> Default for Autowired<C> {
    fn default() -> Self {
        Self { bean: None }
    }
}

impl<C: ?Sized> Clone for Autowired<C> {
    fn clone(&self) -> Self {
        Self {
            bean: self.bean.clone(),
        }
    }
}

impl<C: ?Sized> fmt::Debug for Autowired<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Autowired")
            .field("capability", &std::any::type_name::<C>())
            .field("wired", &self.is_wired())
            .finish()
    }
}
