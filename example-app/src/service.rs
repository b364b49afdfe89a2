//! 示例服务
//!
//! `UserService` 依赖 `OrderService`，`CustomPostProcessor` 为 `userService` 创建日志代理。

use component_macros::Component;
use di_common::{Autowired, Bean, BeanNameAware, BeanPostProcessor, BeanRef};
use di_impl::{Intercepted, ProxyBean};
use std::sync::Arc;
use tracing::info;

/// 本模块的扫描路径
pub const SCAN_PATH: &str = module_path!();

/// 被代理的 Bean 名称
const USER_SERVICE: &str = "userService";

/// 用户服务能力
pub trait UserInterface: Send + Sync {
    /// 演示方法，返回注入的订单服务描述
    fn test(&self) -> String;
}

/// 订单服务
#[derive(Debug, Default, Component)]
pub struct OrderService;

/// 用户服务
#[derive(Debug, Default, Component)]
#[component(scope = "singleton", provides(dyn UserInterface), name_aware)]
pub struct UserService {
    #[autowired]
    order_service: Autowired<OrderService>,
    bean_name: String,
}

impl BeanNameAware for UserService {
    fn set_bean_name(&mut self, name: &str) {
        self.bean_name = name.to_string();
    }
}

impl UserInterface for UserService {
    fn test(&self) -> String {
        let order_service = self
            .order_service
            .get()
            .map_or_else(|| "<未注入>".to_string(), |order_service| format!("{order_service:?}"));
        info!("{} 持有 orderService: {}", self.bean_name, order_service);
        order_service
    }
}

impl UserInterface for Intercepted<dyn UserInterface> {
    fn test(&self) -> String {
        self.invoke("test", |target| target.test())
    }
}

/// 自定义后置处理器
#[derive(Debug, Default, Component)]
#[component(post_processor)]
pub struct CustomPostProcessor;

impl BeanPostProcessor for CustomPostProcessor {
    fn post_process_before_initialization(&self, bean_name: &str, bean: Box<dyn Bean>) -> Box<dyn Bean> {
        if bean_name == USER_SERVICE {
            info!("before...");
        }
        bean
    }

    fn post_process_after_initialization(&self, bean_name: &str, bean: BeanRef) -> BeanRef {
        if bean_name != USER_SERVICE {
            return bean;
        }
        ProxyBean::builder(bean)
            .intercept::<dyn UserInterface>(|original| Arc::new(Intercepted::logging(bean_name, original)))
            .build()
    }
}
