//! # Component Macros
//!
//! 这个 crate 提供 `#[derive(Component)]`：为结构体生成 `Bean` 实现，
//! 并在程序启动时把组件描述符登记到全局组件目录。
//!
//! 使用方需要同时依赖 `di-common` 和 `ctor`。
//!
//! ## 使用示例
//!
//! ```rust,ignore
//! use component_macros::Component;
//! use di_common::Autowired;
//!
//! #[derive(Debug, Default, Component)]
//! #[component(provides(dyn UserInterface))]
//! pub struct UserService {
//!     #[autowired]
//!     order_service: Autowired<OrderService>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod component;
mod utils;

/// 组件派生宏
///
/// # 结构体参数 `#[component(...)]`
///
/// - `name = "custom"` - 显式 Bean 名称（默认为首字母小写的类型名）
/// - `scope = "singleton" | "prototype"` - 作用域（默认单例）
/// - `provides(dyn TraitA, dyn TraitB)` - 对外暴露的能力
/// - `name_aware` - 实现了 `BeanNameAware`
/// - `initializing` - 实现了 `InitializingBean`
/// - `post_processor` - 实现了 `BeanPostProcessor`
/// - `constructor = "Self::try_new"` - 自定义构造函数（默认使用 `Default`）
///
/// # 字段参数
///
/// - `#[autowired]` - 按字段名注入，`order_service` 对应 Bean `orderService`
/// - `#[autowired(name = "custom")]` - 显式指定依赖的 Bean 名称
///
/// 被注入字段的类型必须是 `di_common::Autowired<C>`。
#[proc_macro_derive(Component, attributes(component, autowired))]
pub fn derive_component(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    component::derive_component_impl(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
