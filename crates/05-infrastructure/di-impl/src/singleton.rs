//! 单例缓存
//!
//! 每个 Bean 名称对应一个一次性初始化单元。同名的并发创建请求在单元上等待，
//! 保证每个单例最多只被完整创建一次；不同名称之间互不阻塞。

use dashmap::DashMap;
use di_common::{BeanRef, BeanResult};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing::trace;

/// 单例缓存
#[derive(Debug, Default)]
pub struct SingletonCache {
    cells: DashMap<String, Arc<OnceCell<BeanRef>>>,
}

impl SingletonCache {
    /// 创建空缓存
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取缓存的单例，不存在时用 `create` 创建
    ///
    /// 创建失败时不缓存任何内容，下次调用会重新尝试。
    ///
    /// `create` 不能再次请求同名单例，否则会在同一单元格上阻塞。
    pub fn get_or_try_create<F>(&self, name: &str, create: F) -> BeanResult<BeanRef>
    where
        F: FnOnce() -> BeanResult<BeanRef>,
    {
        // 先取出单元再释放分片锁，创建过程中可能递归访问缓存
        let cell = Arc::clone(
            self.cells
                .entry(name.to_string())
                .or_insert_with(|| Arc::new(OnceCell::new()))
                .value(),
        );

        cell.get_or_try_init(|| {
            trace!("创建单例: {}", name);
            create()
        })
        .map(Arc::clone)
    }

    /// 获取已缓存的单例
    pub fn get(&self, name: &str) -> Option<BeanRef> {
        self.cells
            .get(name)
            .and_then(|cell| cell.get().map(Arc::clone))
    }

    /// 是否已缓存
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// 已完成创建的单例数量
    pub fn len(&self) -> usize {
        self.cells.iter().filter(|entry| entry.value().get().is_some()).count()
    }

    /// 缓存是否为空
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
