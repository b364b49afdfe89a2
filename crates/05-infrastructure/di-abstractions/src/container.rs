//! 容器统计信息

/// 容器统计信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContainerStats {
    /// 已注册的 Bean 定义数量
    pub bean_definitions: usize,
    /// 已缓存的单例数量
    pub cached_singletons: usize,
    /// 后置处理器数量
    pub post_processors: usize,
}
