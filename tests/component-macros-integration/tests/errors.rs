//! 错误场景

use di_common::{BeanError, ContainerError, ScanError};
use di_impl::ApplicationContext;

/// 依赖的 Bean 不在扫描路径中
mod missing_dependency {
    use component_macros::Component;
    use di_common::Autowired;

    #[derive(Debug, Default, Component)]
    pub struct ReportService {
        #[autowired]
        pub mail_sender: Autowired<super::mailer::MailSender>,
    }
}

mod mailer {
    use component_macros::Component;

    #[derive(Debug, Default, Component)]
    pub struct MailSender;
}

/// 依赖存在但不提供字段需要的能力
mod type_mismatch {
    use component_macros::Component;
    use di_common::Autowired;

    pub trait Notifier: Send + Sync {
        fn notify(&self, message: &str);
    }

    #[derive(Debug, Default, Component)]
    pub struct Notifications;

    #[derive(Debug, Default, Component)]
    pub struct AlertService {
        #[autowired]
        pub notifications: Autowired<dyn Notifier>,
    }
}

/// 构造失败的原型不影响容器
mod fallible {
    use component_macros::Component;
    use std::sync::atomic::{AtomicBool, Ordering};

    pub static CONNECTED: AtomicBool = AtomicBool::new(false);

    #[derive(Debug, Component)]
    #[component(scope = "prototype", constructor = "Self::connect")]
    pub struct Connection {
        pub endpoint: String,
    }

    impl Connection {
        fn connect() -> Result<Self, String> {
            if CONNECTED.load(Ordering::SeqCst) {
                Ok(Self {
                    endpoint: "localhost:5432".to_string(),
                })
            } else {
                Err("connection refused".to_string())
            }
        }
    }

    #[derive(Debug, Default, Component)]
    pub struct Pool;
}

/// 单例初始化失败会中止容器构造
mod failing_init {
    use component_macros::Component;
    use di_common::{BoxError, InitializingBean};

    #[derive(Debug, Default, Component)]
    #[component(initializing)]
    pub struct Migrator;

    impl InitializingBean for Migrator {
        fn after_properties_set(&mut self) -> Result<(), BoxError> {
            Err("schema version mismatch".into())
        }
    }
}

#[test]
fn test_missing_dependency() {
    let err = ApplicationContext::new("errors::missing_dependency").unwrap_err();

    assert!(matches!(
        err,
        ContainerError::Bean {
            source: BeanError::DependencyNotFound { ref bean, ref field, ref dependency }
        } if bean == "reportService" && field == "mail_sender" && dependency == "mailSender"
    ));
}

#[test]
fn test_dependency_type_mismatch() {
    let err = ApplicationContext::new("errors::type_mismatch").unwrap_err();

    assert!(matches!(
        err,
        ContainerError::Bean {
            source: BeanError::DependencyTypeMismatch { ref bean, ref field, .. }
        } if bean == "alertService" && field == "notifications"
    ));
}

#[test]
fn test_construction_error_leaves_context_usable() {
    use fallible::CONNECTED;
    use std::sync::atomic::Ordering;

    let context = ApplicationContext::new("errors::fallible").unwrap();

    assert!(matches!(
        context.get_bean("connection"),
        Err(BeanError::ConstructionError { ref name, .. }) if name == "connection"
    ));
    assert!(context.get_bean("pool").is_ok());

    CONNECTED.store(true, Ordering::SeqCst);
    let connection = context.get_bean_as::<fallible::Connection>("connection").unwrap();
    assert_eq!(connection.endpoint, "localhost:5432");
}

#[test]
fn test_initialization_error() {
    let err = ApplicationContext::new("errors::failing_init").unwrap_err();

    assert!(matches!(
        err,
        ContainerError::Bean {
            source: BeanError::InitializationError { ref name, .. }
        } if name == "migrator"
    ));
}

#[test]
fn test_unknown_scan_path() {
    let err = ApplicationContext::new("errors::does_not_exist").unwrap_err();

    assert!(matches!(
        err,
        ContainerError::Scan {
            source: ScanError::ScanPathNotFound { ref path }
        } if path == "errors::does_not_exist"
    ));
}

#[test]
fn test_bean_not_found() {
    let context = ApplicationContext::new("errors::mailer").unwrap();

    assert!(matches!(
        context.get_bean("reportService"),
        Err(BeanError::BeanNotFound { ref name }) if name == "reportService"
    ));
    assert!(matches!(
        context.get_bean_as::<mailer::MailSender>("mailSender"),
        Ok(_)
    ));
}
