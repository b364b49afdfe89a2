//! 组件目录
//!
//! 编译期生成的组件描述符在程序启动前登记到全局目录，扫描器从目录中按模块路径
//! 查找候选组件。测试或需要隔离的场景可以使用独立的目录实例。

use crate::conventions::ScanPathConventions;
use crate::metadata::ComponentDescriptor;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::trace;

/// 全局组件目录
static GLOBAL_COMPONENT_CATALOG: Lazy<ComponentCatalog> = Lazy::new(ComponentCatalog::new);

/// 组件目录
#[derive(Debug, Default)]
pub struct ComponentCatalog {
    descriptors: RwLock<Vec<ComponentDescriptor>>,
}

impl ComponentCatalog {
    /// 创建空目录
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取全局目录
    ///
    /// `#[derive(Component)]` 生成的注册函数会写入这里。
    pub fn global() -> &'static Self {
        &GLOBAL_COMPONENT_CATALOG
    }

    /// 登记组件描述符
    pub fn register(&self, descriptor: ComponentDescriptor) {
        trace!("登记组件: {}", descriptor.type_name);
        self.descriptors.write().push(descriptor);
    }

    /// 批量登记
    #[must_use]
    pub fn with_components(self, descriptors: impl IntoIterator<Item = ComponentDescriptor>) -> Self {
        self.descriptors.write().extend(descriptors);
        self
    }

    /// 命名空间是否存在（该模块或其子模块中至少有一个类型）
    pub fn contains_namespace(&self, namespace: &str) -> bool {
        self.descriptors
            .read()
            .iter()
            .any(|descriptor| ScanPathConventions::is_within(descriptor.module_path, namespace))
    }

    /// 列出直接位于指定模块下的类型（不递归），按简短类型名排序
    pub fn list_module(&self, module_path: &str) -> Vec<ComponentDescriptor> {
        let mut listed: Vec<ComponentDescriptor> = self
            .descriptors
            .read()
            .iter()
            .filter(|descriptor| descriptor.module_path == module_path)
            .copied()
            .collect();
        listed.sort_by(|a, b| a.simple_name().cmp(b.simple_name()));
        listed
    }

    /// 已登记的描述符数量
    pub fn len(&self) -> usize {
        self.descriptors.read().len()
    }

    /// 目录是否为空
    pub fn is_empty(&self) -> bool {
        self.descriptors.read().is_empty()
    }
}
