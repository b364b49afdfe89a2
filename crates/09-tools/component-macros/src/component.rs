//! 组件派生宏实现

use crate::utils::{field_has_attribute, to_camel_case, to_snake_case};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    ext::IdentExt, punctuated::Punctuated, Attribute, Data, DeriveInput, Error, Expr, Fields, Ident, LitStr,
    Result, Token, Type,
};

/// 支持的作用域
const SCOPES: &[&str] = &["singleton", "prototype"];

/// `#[component(...)]` 参数
#[derive(Default)]
pub struct ComponentArgs {
    /// 显式 Bean 名称
    pub name: Option<LitStr>,
    /// 作用域
    pub scope: Option<LitStr>,
    /// 对外暴露的能力
    pub provides: Vec<Type>,
    /// 名称感知回调
    pub name_aware: bool,
    /// 初始化回调
    pub initializing: bool,
    /// 后置处理器
    pub post_processor: bool,
    /// 自定义构造函数
    pub constructor: Option<Expr>,
}

impl ComponentArgs {
    /// 从结构体属性中解析参数
    pub fn from_attributes(attrs: &[Attribute]) -> Result<Self> {
        let mut args = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("component")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let name: LitStr = meta.value()?.parse()?;
                    if name.value().is_empty() {
                        return Err(Error::new(name.span(), "Bean 名称不能为空"));
                    }
                    args.name = Some(name);
                } else if meta.path.is_ident("scope") {
                    let scope: LitStr = meta.value()?.parse()?;
                    if !SCOPES.contains(&scope.value().as_str()) {
                        return Err(Error::new(
                            scope.span(),
                            format!("未知的作用域 `{}`，可选值: singleton, prototype", scope.value()),
                        ));
                    }
                    args.scope = Some(scope);
                } else if meta.path.is_ident("provides") {
                    let content;
                    syn::parenthesized!(content in meta.input);
                    args.provides
                        .extend(Punctuated::<Type, Token![,]>::parse_terminated(&content)?);
                } else if meta.path.is_ident("name_aware") {
                    args.name_aware = true;
                } else if meta.path.is_ident("initializing") {
                    args.initializing = true;
                } else if meta.path.is_ident("post_processor") {
                    args.post_processor = true;
                } else if meta.path.is_ident("constructor") {
                    let constructor: LitStr = meta.value()?.parse()?;
                    args.constructor = Some(constructor.parse()?);
                } else {
                    return Err(meta.error("不支持的 component 参数"));
                }
                Ok(())
            })?;
        }

        Ok(args)
    }
}

/// 注入字段
struct InjectionField {
    ident: Ident,
    field: String,
    bean_name: String,
}

/// 收集 `#[autowired]` 字段
fn injection_fields(input: &DeriveInput) -> Result<Vec<InjectionField>> {
    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(&input.ident, "#[derive(Component)] 只支持结构体"));
    };

    let named = match &data.fields {
        Fields::Named(named) => named,
        Fields::Unit => return Ok(Vec::new()),
        Fields::Unnamed(unnamed) => {
            if let Some(field) = unnamed.unnamed.iter().find(|f| field_has_attribute(f, "autowired")) {
                return Err(Error::new_spanned(field, "#[autowired] 只能用于具名字段"));
            }
            return Ok(Vec::new());
        }
    };

    let mut fields = Vec::new();
    for field in named.named.iter().filter(|f| field_has_attribute(f, "autowired")) {
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        let field_name = ident.unraw().to_string();
        let mut bean_name = to_camel_case(&field_name);

        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("autowired")) {
            if matches!(attr.meta, syn::Meta::Path(_)) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let name: LitStr = meta.value()?.parse()?;
                    bean_name = name.value();
                    Ok(())
                } else {
                    Err(meta.error("不支持的 autowired 参数"))
                }
            })?;
        }

        fields.push(InjectionField {
            ident,
            field: field_name,
            bean_name,
        });
    }

    Ok(fields)
}

/// 实现 #[derive(Component)] 宏
pub fn derive_component_impl(input: &DeriveInput) -> Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(&input.generics, "组件类型不能带泛型参数"));
    }

    let args = ComponentArgs::from_attributes(&input.attrs)?;
    let fields = injection_fields(input)?;
    let ident = &input.ident;

    let bean_impl = generate_bean_impl(ident, &args, &fields);
    let constructors = generate_constructors(ident, &args);
    let registration = generate_registration(ident, &args, &fields);

    Ok(quote! {
        #bean_impl

        #constructors

        #registration
    })
}

/// 生成 `Bean` 实现
fn generate_bean_impl(ident: &Ident, args: &ComponentArgs, fields: &[InjectionField]) -> TokenStream {
    let mut provided: Vec<TokenStream> = args.provides.iter().map(|ty| quote!(#ty)).collect();
    if args.post_processor {
        provided.push(quote!(dyn ::di_common::BeanPostProcessor));
    }

    let inject = if fields.is_empty() {
        quote!()
    } else {
        let arms = fields.iter().map(|field| {
            let field_ident = &field.ident;
            let field_name = &field.field;
            quote! {
                #field_name => self.#field_ident.wire(bean_name, field, &dependency),
            }
        });
        quote! {
            fn inject(
                &mut self,
                bean_name: &str,
                field: &str,
                dependency: ::di_common::BeanRef,
            ) -> ::di_common::BeanResult<()> {
                match field {
                    #(#arms)*
                    _ => ::std::result::Result::Err(::di_common::BeanError::UnknownInjectionPoint {
                        type_name: ::di_common::Bean::type_name(&*self).to_string(),
                        field: field.to_string(),
                    }),
                }
            }
        }
    };

    let name_aware = args.name_aware.then(|| {
        quote! {
            fn as_bean_name_aware(&mut self) -> ::std::option::Option<&mut dyn ::di_common::BeanNameAware> {
                ::std::option::Option::Some(self)
            }
        }
    });

    let initializing = args.initializing.then(|| {
        quote! {
            fn as_initializing_bean(&mut self) -> ::std::option::Option<&mut dyn ::di_common::InitializingBean> {
                ::std::option::Option::Some(self)
            }
        }
    });

    quote! {
        impl ::di_common::Bean for #ident {
            fn capability(
                self: ::std::sync::Arc<Self>,
                capability: ::std::any::TypeId,
            ) -> ::std::option::Option<::std::boxed::Box<dyn ::std::any::Any>> {
                if capability == ::std::any::TypeId::of::<Self>() {
                    return ::std::option::Option::Some(::std::boxed::Box::new(self));
                }
                #(
                    if capability == ::std::any::TypeId::of::<#provided>() {
                        return ::std::option::Option::Some(
                            ::std::boxed::Box::new(self as ::std::sync::Arc<#provided>),
                        );
                    }
                )*
                ::std::option::Option::None
            }

            #inject

            #name_aware

            #initializing
        }
    }
}

/// 生成构造函数
fn generate_constructors(ident: &Ident, args: &ComponentArgs) -> TokenStream {
    let construct = match &args.constructor {
        Some(constructor) => quote! {
            (#constructor)().map_err(::std::convert::Into::into)
        },
        None => quote! {
            ::std::result::Result::Ok(<Self as ::std::default::Default>::default())
        },
    };

    let post_processor = args.post_processor.then(|| {
        quote! {
            #[doc(hidden)]
            fn __component_post_processor() -> ::std::result::Result<
                ::std::sync::Arc<dyn ::di_common::BeanPostProcessor>,
                ::di_common::BoxError,
            > {
                ::std::result::Result::Ok(::std::sync::Arc::new(Self::__component_construct()?))
            }
        }
    });

    quote! {
        impl #ident {
            #[doc(hidden)]
            fn __component_construct() -> ::std::result::Result<Self, ::di_common::BoxError> {
                #construct
            }

            #[doc(hidden)]
            fn __component_factory() -> ::std::result::Result<
                ::std::boxed::Box<dyn ::di_common::Bean>,
                ::di_common::BoxError,
            > {
                ::std::result::Result::Ok(::std::boxed::Box::new(Self::__component_construct()?))
            }

            #post_processor
        }
    }
}

/// 生成启动时登记代码
fn generate_registration(ident: &Ident, args: &ComponentArgs, fields: &[InjectionField]) -> TokenStream {
    let register_fn = format_ident!("__register_component_{}", to_snake_case(&ident.unraw().to_string()));

    let named = args.name.as_ref().map(|name| quote!(.named(#name)));
    let scoped = args.scope.as_ref().map(|scope| quote!(.scoped(#scope)));
    let post_processor = args
        .post_processor
        .then(|| quote!(.with_post_processor(#ident::__component_post_processor)));

    let points = fields.iter().map(|field| {
        let field_name = &field.field;
        let bean_name = &field.bean_name;
        quote!(::di_common::InjectionPoint::new(#field_name, #bean_name))
    });

    quote! {
        // 使用 ctor 在程序启动时登记组件
        #[ctor::ctor]
        fn #register_fn() {
            const INJECTION_POINTS: &[::di_common::InjectionPoint] = &[#(#points),*];

            ::di_common::ComponentCatalog::global().register(
                ::di_common::ComponentDescriptor::new(
                    ::std::concat!(::std::module_path!(), "::", ::std::stringify!(#ident)),
                    ::std::module_path!(),
                    #ident::__component_factory,
                )
                #named
                #scoped
                .with_injection_points(INJECTION_POINTS)
                #post_processor,
            );
        }
    }
}
