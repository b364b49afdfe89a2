//! 派生宏与容器的端到端场景
//!
//! 每个子模块是一个独立的扫描路径。

use di_common::capability;
use di_impl::{ApplicationContext, ProxyBean};
use std::sync::Arc;

/// 默认名称、默认单例
mod scenario_a {
    use component_macros::Component;

    #[derive(Debug, Default, Component)]
    pub struct TypeA;
}

/// 原型作用域，每个实例独立注入
mod scenario_b {
    use component_macros::Component;
    use di_common::Autowired;

    #[derive(Debug, Default, Component)]
    pub struct Repository;

    #[derive(Debug, Default, Component)]
    #[component(scope = "prototype")]
    pub struct TypeB {
        #[autowired]
        pub repository: Autowired<Repository>,
    }
}

/// 处理器把 `svc` 包装成代理
mod scenario_c {
    use component_macros::Component;
    use di_common::{BeanPostProcessor, BeanRef};
    use di_impl::{Intercepted, ProxyBean};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing::info;

    pub static INTERCEPTIONS: AtomicUsize = AtomicUsize::new(0);

    pub trait Calculator: Send + Sync {
        fn square(&self, value: i64) -> i64;
        fn name(&self) -> String;
    }

    #[derive(Debug, Default, Component)]
    #[component(name = "svc", provides(dyn Calculator))]
    pub struct CalculatorService;

    impl Calculator for CalculatorService {
        fn square(&self, value: i64) -> i64 {
            value * value
        }

        fn name(&self) -> String {
            "calculator".to_string()
        }
    }

    impl Calculator for Intercepted<dyn Calculator> {
        fn square(&self, value: i64) -> i64 {
            self.invoke("square", |target| target.square(value))
        }

        fn name(&self) -> String {
            self.invoke("name", |target| target.name())
        }
    }

    #[derive(Debug, Default, Component)]
    #[component(post_processor)]
    pub struct LoggingProcessor;

    impl BeanPostProcessor for LoggingProcessor {
        fn post_process_after_initialization(&self, bean_name: &str, bean: BeanRef) -> BeanRef {
            if bean_name != "svc" {
                return bean;
            }
            ProxyBean::builder(bean)
                .intercept::<dyn Calculator>(|original| {
                    Arc::new(Intercepted::new(bean_name, original, |invocation| {
                        INTERCEPTIONS.fetch_add(1, Ordering::SeqCst);
                        info!("切面逻辑: {}.{}", invocation.bean_name(), invocation.method());
                    }))
                })
                .build()
        }
    }
}

/// 显式名称与显式依赖名称
mod naming {
    use component_macros::Component;
    use di_common::Autowired;

    #[derive(Debug, Default, Component)]
    #[component(name = "primaryStore")]
    pub struct MemoryStore;

    #[derive(Debug, Default, Component)]
    pub struct URLParser;

    #[derive(Debug, Default, Component)]
    pub struct Gateway {
        #[autowired(name = "primaryStore")]
        pub store: Autowired<MemoryStore>,
        #[autowired(name = "URLParser")]
        pub parser: Autowired<URLParser>,
    }
}

/// 多层依赖
mod wiring {
    use component_macros::Component;
    use di_common::Autowired;

    pub trait Pricing: Send + Sync {
        fn price(&self, sku: &str) -> u32;
    }

    #[derive(Debug, Default, Component)]
    #[component(provides(dyn Pricing))]
    pub struct PriceList;

    impl Pricing for PriceList {
        fn price(&self, sku: &str) -> u32 {
            sku.len() as u32 * 100
        }
    }

    #[derive(Debug, Default, Component)]
    pub struct OrderService {
        #[autowired]
        pub price_list: Autowired<dyn Pricing>,
    }

    impl OrderService {
        pub fn total(&self, skus: &[&str]) -> u32 {
            self.price_list
                .get()
                .map_or(0, |pricing| skus.iter().map(|sku| pricing.price(sku)).sum())
        }
    }

    #[derive(Debug, Default, Component)]
    pub struct UserService {
        #[autowired]
        pub order_service: Autowired<OrderService>,
    }

    /// 子模块中的组件不会被扫描
    pub mod nested {
        use component_macros::Component;

        #[derive(Debug, Default, Component)]
        pub struct Hidden;
    }
}

#[test]
fn test_scenario_a_default_singleton() {
    let context = ApplicationContext::new("scenarios::scenario_a").unwrap();

    let first = context.get_bean("typeA").unwrap();
    let second = context.get_bean("typeA").unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(capability::<scenario_a::TypeA>(&first).is_some());
    assert!(context.bean_definition("typeA").unwrap().is_singleton());
}

#[test]
fn test_scenario_b_prototype() {
    let context = ApplicationContext::new("scenarios.scenario_b").unwrap();

    let first = context.get_bean_as::<scenario_b::TypeB>("typeB").unwrap();
    let second = context.get_bean_as::<scenario_b::TypeB>("typeB").unwrap();
    assert!(!Arc::ptr_eq(&first, &second));

    let repository = context.get_bean_as::<scenario_b::Repository>("repository").unwrap();
    assert!(Arc::ptr_eq(first.repository.get().unwrap(), &repository));
    assert!(Arc::ptr_eq(second.repository.get().unwrap(), &repository));

    // 原型不进入单例缓存
    assert_eq!(context.stats().cached_singletons, 1);
}

#[test]
fn test_scenario_c_logging_proxy() {
    use scenario_c::{Calculator, INTERCEPTIONS};
    use std::sync::atomic::Ordering;

    let context = ApplicationContext::new("scenarios/scenario_c").unwrap();

    let bean = context.get_bean("svc").unwrap();
    assert!(capability::<ProxyBean>(&bean).is_some());

    let calculator = capability::<dyn Calculator>(&bean).unwrap();
    let before = INTERCEPTIONS.load(Ordering::SeqCst);
    assert_eq!(calculator.square(7), 49);
    assert_eq!(calculator.name(), scenario_c::CalculatorService.name());
    assert_eq!(INTERCEPTIONS.load(Ordering::SeqCst) - before, 2);

    // 处理器自身不被代理
    let processor = context.get_bean("loggingProcessor").unwrap();
    assert!(capability::<ProxyBean>(&processor).is_none());
}

#[test]
fn test_explicit_names() {
    let context = ApplicationContext::new("scenarios::naming").unwrap();

    assert!(context.get_bean_as::<naming::MemoryStore>("primaryStore").is_ok());
    assert!(!context.bean_definition_names().contains(&"memoryStore"));
    // 前两个字符都是大写时名称保持不变
    assert!(context.get_bean_as::<naming::URLParser>("URLParser").is_ok());

    let gateway = context.get_bean_as::<naming::Gateway>("gateway").unwrap();
    assert!(gateway.store.is_wired());
    assert!(gateway.parser.is_wired());
}

#[test]
fn test_injection_correctness() {
    let context = ApplicationContext::new("scenarios::wiring").unwrap();

    let user_service = context.get_bean_as::<wiring::UserService>("userService").unwrap();
    let order_service = context.get_bean_as::<wiring::OrderService>("orderService").unwrap();
    assert!(Arc::ptr_eq(user_service.order_service.get().unwrap(), &order_service));

    let pricing = context.get_bean_as::<dyn wiring::Pricing>("priceList").unwrap();
    assert_eq!(pricing.price("abc"), 300);
    assert_eq!(order_service.total(&["abc", "de"]), 500);
}

#[test]
fn test_nested_modules_are_not_scanned() {
    let context = ApplicationContext::new("scenarios::wiring").unwrap();

    assert_eq!(
        context.bean_definition_names(),
        vec!["orderService", "priceList", "userService"]
    );
    assert!(context.get_bean("hidden").is_err());

    let nested = ApplicationContext::new("scenarios::wiring::nested").unwrap();
    assert!(nested.get_bean_as::<wiring::nested::Hidden>("hidden").is_ok());
}
