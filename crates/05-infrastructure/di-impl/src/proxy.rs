//! 拦截代理
//!
//! 代理 Bean 持有原始实例和一张按能力划分的分发表（`TypeId → 句柄`）。
//! 被拦截的能力返回包装对象，其余 trait 能力原样转发给原始实例。
//! 原始实现类型不经代理暴露，只能通过 [`ProxyBean::target`] 显式取得。
//!
//! ```ignore
//! let proxy = ProxyBean::builder(bean)
//!     .intercept::<dyn UserInterface>(|original| {
//!         Arc::new(Intercepted::logging("userService", original))
//!     })
//!     .build();
//! ```

use di_common::{capability, Bean, BeanRef};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 能力句柄，每次调用产出一个装箱的 `Arc<C>`
type CapabilityHandle = Box<dyn Fn() -> Box<dyn Any> + Send + Sync>;

/// 代理 Bean
pub struct ProxyBean {
    target: BeanRef,
    target_type: TypeId,
    dispatch: HashMap<TypeId, CapabilityHandle>,
}

impl ProxyBean {
    /// 为目标 Bean 创建代理构建器
    pub fn builder(target: BeanRef) -> ProxyBuilder {
        ProxyBuilder {
            target,
            dispatch: HashMap::new(),
        }
    }

    /// 被代理的原始实例
    pub fn target(&self) -> &BeanRef {
        &self.target
    }

    /// 指定能力是否被拦截
    pub fn is_intercepted<C: ?Sized + 'static>(&self) -> bool {
        self.dispatch.contains_key(&TypeId::of::<C>())
    }
}

impl Bean for ProxyBean {
    fn type_name(&self) -> &'static str {
        self.target.type_name()
    }

    fn capability(self: Arc<Self>, capability: TypeId) -> Option<Box<dyn Any>> {
        if capability == TypeId::of::<Self>() {
            return Some(Box::new(self));
        }
        if let Some(handle) = self.dispatch.get(&capability) {
            return Some(handle());
        }
        if capability == self.target_type {
            return None;
        }
        Arc::clone(&self.target).capability(capability)
    }
}

impl fmt::Debug for ProxyBean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyBean")
            .field("target", &self.target)
            .field("intercepted", &self.dispatch.len())
            .finish()
    }
}

/// 代理构建器
pub struct ProxyBuilder {
    target: BeanRef,
    dispatch: HashMap<TypeId, CapabilityHandle>,
}

impl ProxyBuilder {
    /// 拦截能力 `C`
    ///
    /// `wrap` 接收原始实例的 `C` 能力，返回替代它的对象。目标不提供该能力时跳过。
    #[must_use]
    pub fn intercept<C>(mut self, wrap: impl FnOnce(Arc<C>) -> Arc<C>) -> Self
    where
        C: ?Sized + Send + Sync + 'static,
    {
        let Some(original) = capability::<C>(&self.target) else {
            warn!(
                "{} 不提供能力 {}，跳过拦截",
                self.target.type_name(),
                std::any::type_name::<C>()
            );
            return self;
        };

        let wrapped = wrap(original);
        debug!("拦截能力: {} -> {}", self.target.type_name(), std::any::type_name::<C>());
        self.dispatch.insert(
            TypeId::of::<C>(),
            Box::new(move || Box::new(Arc::clone(&wrapped)) as Box<dyn Any>),
        );
        self
    }

    /// 构建代理
    pub fn build(self) -> BeanRef {
        // 通过 trait 对象取得的是实现类型的 TypeId
        let target_type = (*self.target).type_id();
        Arc::new(ProxyBean {
            target_type,
            target: self.target,
            dispatch: self.dispatch,
        })
    }
}

impl fmt::Debug for ProxyBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyBuilder")
            .field("target", &self.target)
            .field("intercepted", &self.dispatch.len())
            .finish()
    }
}

/// 一次被拦截的调用
#[derive(Debug, Clone, Copy)]
pub struct Invocation<'a> {
    bean_name: &'a str,
    method: &'a str,
}

impl<'a> Invocation<'a> {
    /// Bean 名称
    pub const fn bean_name(&self) -> &'a str {
        self.bean_name
    }

    /// 方法名称
    pub const fn method(&self) -> &'a str {
        self.method
    }
}

/// 拦截钩子
pub type InterceptorHook = Arc<dyn Fn(&Invocation<'_>) + Send + Sync>;

/// 拦截包装
///
/// 持有委托对象和拦截钩子。为 `Intercepted<dyn Cap>` 实现 `Cap`，
/// 每个方法通过 [`Intercepted::invoke`] 转发：
///
/// ```ignore
/// impl UserInterface for Intercepted<dyn UserInterface> {
///     fn find_user(&self, id: u64) -> String {
///         self.invoke("find_user", |target| target.find_user(id))
///     }
/// }
/// ```
pub struct Intercepted<C: ?Sized> {
    bean_name: String,
    target: Arc<C>,
    hook: InterceptorHook,
}

impl<C: ?Sized> Intercepted<C> {
    /// 使用自定义钩子创建包装
    pub fn new(
        bean_name: impl Into<String>,
        target: Arc<C>,
        hook: impl Fn(&Invocation<'_>) + Send + Sync + 'static,
    ) -> Self {
        Self {
            bean_name: bean_name.into(),
            target,
            hook: Arc::new(hook),
        }
    }

    /// 创建记录调用日志的包装
    pub fn logging(bean_name: impl Into<String>, target: Arc<C>) -> Self {
        Self::new(bean_name, target, |invocation| {
            info!("调用方法: {}.{}", invocation.bean_name(), invocation.method());
        })
    }

    /// 执行拦截逻辑后转发调用，返回委托对象的结果
    pub fn invoke<R>(&self, method: &str, call: impl FnOnce(&C) -> R) -> R {
        (self.hook)(&Invocation {
            bean_name: &self.bean_name,
            method,
        });
        call(&self.target)
    }

    /// 委托对象
    pub fn target(&self) -> &Arc<C> {
        &self.target
    }

    /// Bean 名称
    pub fn bean_name(&self) -> &str {
        &self.bean_name
    }
}

impl<C: ?Sized> fmt::Debug for Intercepted<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intercepted")
            .field("bean_name", &self.bean_name)
            .field("capability", &std::any::type_name::<C>())
            .finish()
    }
}
