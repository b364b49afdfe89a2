//! 组件扫描器抽象接口
//!
//! 提供从命名空间发现组件并生成 Bean 定义的能力

use crate::registry::BeanDefinitionRegistry;
use di_common::{BeanPostProcessor, ScanResult};
use std::fmt;
use std::sync::Arc;

/// 组件扫描器 trait
pub trait ComponentScanner: Send + Sync {
    /// 扫描命名空间，把发现的组件注册到 `registry`
    fn scan(&self, namespace: &str, registry: &mut dyn BeanDefinitionRegistry) -> ScanResult<ScanOutcome>;

    /// 获取扫描器名称
    fn name(&self) -> &str;
}

/// 扫描结果
#[derive(Default)]
pub struct ScanOutcome {
    /// 注册的 Bean 定义数量
    pub registered: usize,
    /// 跳过的未标记类型数量
    pub skipped: usize,
    /// 按发现顺序实例化的后置处理器
    pub post_processors: Vec<Arc<dyn BeanPostProcessor>>,
}

impl fmt::Debug for ScanOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanOutcome")
            .field("registered", &self.registered)
            .field("skipped", &self.skipped)
            .field("post_processors", &self.post_processors.len())
            .finish()
    }
}
