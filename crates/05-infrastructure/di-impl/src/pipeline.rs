//! 后置处理器管道
//!
//! 处理器按登记顺序依次执行，每个处理器的输出是下一个处理器的输入。

use di_common::{Bean, BeanPostProcessor, BeanRef};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// 后置处理器管道
#[derive(Default, Clone)]
pub struct PostProcessorPipeline {
    processors: Vec<Arc<dyn BeanPostProcessor>>,
}

impl PostProcessorPipeline {
    /// 创建空管道
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加处理器
    pub fn push(&mut self, processor: Arc<dyn BeanPostProcessor>) {
        self.processors.push(processor);
    }

    /// 依次执行所有前置处理
    pub fn apply_before_initialization(&self, bean_name: &str, bean: Box<dyn Bean>) -> Box<dyn Bean> {
        self.processors.iter().fold(bean, |current, processor| {
            trace!("前置处理: {}", bean_name);
            processor.post_process_before_initialization(bean_name, current)
        })
    }

    /// 依次执行所有后置处理
    pub fn apply_after_initialization(&self, bean_name: &str, bean: BeanRef) -> BeanRef {
        self.processors.iter().fold(bean, |current, processor| {
            trace!("后置处理: {}", bean_name);
            processor.post_process_after_initialization(bean_name, current)
        })
    }

    /// 处理器数量
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    /// 管道是否为空
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

impl Extend<Arc<dyn BeanPostProcessor>> for PostProcessorPipeline {
    fn extend<I: IntoIterator<Item = Arc<dyn BeanPostProcessor>>>(&mut self, iter: I) {
        self.processors.extend(iter);
    }
}

impl fmt::Debug for PostProcessorPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PostProcessorPipeline")
            .field("processors", &self.processors.len())
            .finish()
    }
}
