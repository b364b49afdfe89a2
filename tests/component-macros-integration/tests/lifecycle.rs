//! 生命周期回调与后置处理器顺序

use di_abstractions::BeanFactory;
use di_impl::ApplicationContext;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use serial_test::serial;

/// 全局事件记录
static EVENTS: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(Vec::new()));

fn record(event: impl Into<String>) {
    EVENTS.lock().push(event.into());
}

fn take_events() -> Vec<String> {
    std::mem::take(&mut *EVENTS.lock())
}

/// 两个处理器，按类型名排序后 FirstProcessor 在前
mod ordering {
    use super::record;
    use component_macros::Component;
    use di_common::{Bean, BeanPostProcessor, BeanRef};

    #[derive(Debug, Default, Component)]
    #[component(post_processor)]
    pub struct SecondProcessor;

    impl BeanPostProcessor for SecondProcessor {
        fn post_process_before_initialization(&self, bean_name: &str, bean: Box<dyn Bean>) -> Box<dyn Bean> {
            record(format!("P2.before({bean_name})"));
            bean
        }

        fn post_process_after_initialization(&self, bean_name: &str, bean: BeanRef) -> BeanRef {
            record(format!("P2.after({bean_name})"));
            bean
        }
    }

    #[derive(Debug, Default, Component)]
    #[component(post_processor)]
    pub struct FirstProcessor;

    impl BeanPostProcessor for FirstProcessor {
        fn post_process_before_initialization(&self, bean_name: &str, bean: Box<dyn Bean>) -> Box<dyn Bean> {
            record(format!("P1.before({bean_name})"));
            bean
        }

        fn post_process_after_initialization(&self, bean_name: &str, bean: BeanRef) -> BeanRef {
            record(format!("P1.after({bean_name})"));
            bean
        }
    }

    #[derive(Debug, Default, Component)]
    #[component(scope = "prototype")]
    pub struct Widget;
}

/// 名称感知和初始化回调
mod callbacks {
    use super::record;
    use component_macros::Component;
    use di_common::{Autowired, Bean, BeanNameAware, BeanPostProcessor, BeanRef, BoxError, InitializingBean};

    #[derive(Debug, Default, Component)]
    pub struct Clock;

    #[derive(Debug, Default, Component)]
    #[component(name = "scheduler", name_aware, initializing)]
    pub struct JobScheduler {
        #[autowired]
        pub clock: Autowired<Clock>,
        pub bean_name: String,
        pub ready: bool,
    }

    impl BeanNameAware for JobScheduler {
        fn set_bean_name(&mut self, name: &str) {
            record(format!("aware({name}, wired={})", self.clock.is_wired()));
            self.bean_name = name.to_string();
        }
    }

    impl InitializingBean for JobScheduler {
        fn after_properties_set(&mut self) -> Result<(), BoxError> {
            record(format!("init({})", self.bean_name));
            self.ready = true;
            Ok(())
        }
    }

    #[derive(Debug, Default, Component)]
    #[component(post_processor)]
    pub struct Tracer;

    impl BeanPostProcessor for Tracer {
        fn post_process_before_initialization(&self, bean_name: &str, bean: Box<dyn Bean>) -> Box<dyn Bean> {
            if bean_name == "scheduler" {
                record("before(scheduler)");
            }
            bean
        }

        fn post_process_after_initialization(&self, bean_name: &str, bean: BeanRef) -> BeanRef {
            if bean_name == "scheduler" {
                record("after(scheduler)");
            }
            bean
        }
    }
}

#[test]
#[serial]
fn test_processors_run_in_discovery_order() {
    take_events();
    let context = ApplicationContext::new("lifecycle::ordering").unwrap();
    take_events();

    context.get_bean("widget").unwrap();
    assert_eq!(
        take_events(),
        vec!["P1.before(widget)", "P2.before(widget)", "P1.after(widget)", "P2.after(widget)"]
    );

    // 每次创建原型都会经过完整的管道
    context.get_bean("widget").unwrap();
    assert_eq!(take_events().len(), 4);
}

#[test]
#[serial]
fn test_processors_are_beans_too() {
    take_events();
    let context = ApplicationContext::new("lifecycle::ordering").unwrap();

    assert!(context.contains_bean("firstProcessor"));
    assert!(context.contains_bean("secondProcessor"));
    assert!(context.is_prototype("widget").unwrap());
    assert_eq!(context.stats().post_processors, 2);

    // 预创建处理器 Bean 时同样经过管道
    let events = take_events();
    assert!(events.contains(&"P1.before(firstProcessor)".to_string()));
    assert!(events.contains(&"P2.after(secondProcessor)".to_string()));
}

#[test]
#[serial]
fn test_callback_order() {
    take_events();
    let context = ApplicationContext::new("lifecycle::callbacks").unwrap();

    assert_eq!(
        take_events(),
        vec![
            "aware(scheduler, wired=true)",
            "before(scheduler)",
            "init(scheduler)",
            "after(scheduler)",
        ]
    );

    let scheduler = context.get_bean_as::<callbacks::JobScheduler>("scheduler").unwrap();
    assert!(scheduler.ready);
    assert_eq!(scheduler.bean_name, "scheduler");
}
