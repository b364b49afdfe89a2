//! 组件生命周期管理
//!
//! Bean 作用域以及创建过程中的回调接口

use crate::component::{Bean, BeanRef};
use crate::errors::BoxError;
use std::fmt;
use std::str::FromStr;

/// Bean 作用域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// 单例模式 - 容器内只创建一个实例
    #[default]
    Singleton,
    /// 原型模式 - 每次获取都创建新实例
    Prototype,
}

impl Scope {
    /// 作用域的标识字符串
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Singleton => "singleton",
            Self::Prototype => "prototype",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "singleton" => Ok(Self::Singleton),
            "prototype" => Ok(Self::Prototype),
            other => Err(format!("未知的作用域: {other}")),
        }
    }
}

/// 名称感知回调
///
/// 注入完成后，容器会把 Bean 在注册表中的名称告知 Bean。
pub trait BeanNameAware {
    /// 设置 Bean 名称
    fn set_bean_name(&mut self, name: &str);
}

/// 初始化回调
///
/// 在所有前置处理器执行完毕后调用。
pub trait InitializingBean {
    /// 属性设置完成后的初始化
    fn after_properties_set(&mut self) -> Result<(), BoxError>;
}

/// Bean 后置处理器
///
/// 在每个 Bean 的初始化前后被调用，返回值会替换当前正在创建的实例。
/// 所有处理器作用于所有 Bean，是否处理由处理器自己根据名称判断。
///
/// 初始化之前实例由容器独占（`Box`），初始化之后实例被冻结为共享引用（`Arc`）。
pub trait BeanPostProcessor: Send + Sync {
    /// 初始化之前调用
    fn post_process_before_initialization(&self, _bean_name: &str, bean: Box<dyn Bean>) -> Box<dyn Bean> {
        bean
    }

    /// 初始化之后调用，可以在这里返回代理对象
    fn post_process_after_initialization(&self, _bean_name: &str, bean: BeanRef) -> BeanRef {
        bean
    }
}
