//! Bean 工厂抽象接口
//!
//! 按名称获取 Bean 的公共契约

use di_common::{capability, BeanError, BeanRef, BeanResult};
use std::sync::Arc;

/// Bean 工厂 trait
pub trait BeanFactory: Send + Sync {
    /// 按名称获取 Bean
    fn get_bean(&self, name: &str) -> BeanResult<BeanRef>;

    /// 按名称获取 Bean，并转换为指定能力
    fn get_bean_as<C>(&self, name: &str) -> BeanResult<Arc<C>>
    where
        C: ?Sized + 'static,
        Self: Sized,
    {
        let bean = self.get_bean(name)?;
        capability::<C>(&bean).ok_or_else(|| BeanError::BeanNotOfRequiredType {
            name: name.to_string(),
            expected: std::any::type_name::<C>(),
        })
    }

    /// 是否包含指定名称的 Bean
    fn contains_bean(&self, name: &str) -> bool;

    /// 是否单例
    fn is_singleton(&self, name: &str) -> BeanResult<bool>;

    /// 是否原型
    fn is_prototype(&self, name: &str) -> BeanResult<bool>;
}
