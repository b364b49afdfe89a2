//! Bean 定义注册表抽象接口

use di_common::{BeanDefinition, ScanResult};

/// Bean 定义注册表 trait
///
/// 扫描阶段写入，之后只读。
pub trait BeanDefinitionRegistry: Send + Sync {
    /// 注册 Bean 定义，名称重复时返回错误
    fn register_bean_definition(&mut self, definition: BeanDefinition) -> ScanResult<()>;

    /// 获取 Bean 定义
    fn bean_definition(&self, name: &str) -> Option<&BeanDefinition>;

    /// 是否包含指定名称的 Bean 定义
    fn contains_bean_definition(&self, name: &str) -> bool {
        self.bean_definition(name).is_some()
    }

    /// 按注册顺序返回所有 Bean 名称
    fn bean_definition_names(&self) -> Vec<&str>;

    /// Bean 定义数量
    fn bean_definition_count(&self) -> usize;
}
