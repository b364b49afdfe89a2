//! 约定规范定义
//!
//! Bean 命名和扫描路径的约定

/// 命名约定规范
#[derive(Debug)]
pub struct NamingConventions;

impl NamingConventions {
    /// 获取简短的类型名称（不包含模块路径和泛型参数）
    pub fn simple_type_name(type_name: &str) -> &str {
        let without_generics = type_name.split('<').next().unwrap_or(type_name);
        without_generics
            .rsplit("::")
            .next()
            .unwrap_or(without_generics)
    }

    /// 从类型名称推导默认 Bean 名称
    ///
    /// 首字母小写；如果前两个字符都是大写（如 `URLParser`），保持原样。
    pub fn default_bean_name(simple_name: &str) -> String {
        let mut chars = simple_name.chars();
        let Some(first) = chars.next() else {
            return String::new();
        };

        if first.is_uppercase() && chars.next().is_some_and(char::is_uppercase) {
            return simple_name.to_string();
        }

        let mut name: String = first.to_lowercase().collect();
        name.push_str(&simple_name[first.len_utf8()..]);
        name
    }

    /// 验证标识符是否有效
    pub fn is_valid_identifier(s: &str) -> bool {
        let mut chars = s.chars();
        let Some(first_char) = chars.next() else {
            return false;
        };

        // 第一个字符必须是字母或下划线
        if !first_char.is_alphabetic() && first_char != '_' {
            return false;
        }

        // 其余字符必须是字母、数字或下划线
        chars.all(|ch| ch.is_alphanumeric() || ch == '_')
    }
}

/// 扫描路径约定规范
#[derive(Debug)]
pub struct ScanPathConventions;

impl ScanPathConventions {
    /// 规范化扫描路径
    ///
    /// `app.service`、`app/service`、`app::service` 都被转换为 `app::service`。
    pub fn normalize(path: &str) -> String {
        path.replace("::", "/")
            .split(['.', '/', '\\'])
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("::")
    }

    /// 模块是否位于命名空间内（包含子模块）
    pub fn is_within(module_path: &str, namespace: &str) -> bool {
        module_path == namespace
            || module_path
                .strip_prefix(namespace)
                .is_some_and(|rest| rest.starts_with("::"))
    }
}
