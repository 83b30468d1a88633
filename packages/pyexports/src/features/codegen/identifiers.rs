//! JavaScript identifier helpers

use std::borrow::Cow;

/// Words a JavaScript binding cannot use that Python allows as names
const JS_RESERVED: &[&str] = &[
    "arguments", "case", "catch", "const", "debugger", "default", "delete", "do", "enum",
    "eval", "export", "extends", "false", "function", "implements", "instanceof",
    "interface", "let", "new", "null", "package", "private", "protected", "public",
    "static", "super", "switch", "this", "throw", "true", "typeof", "var", "void",
];

/// Replace characters JavaScript does not allow; never empty
pub(super) fn module_identifier(raw: &str) -> String {
    let mut name: String = raw
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' || c == '$' { c } else { '_' })
        .collect();

    if name.is_empty() {
        return super::DEFAULT_MODULE_NAME.to_string();
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    if JS_RESERVED.contains(&name.as_str()) {
        name.push('_');
    }
    name
}

/// A Python parameter name usable as a TypeScript parameter
pub(super) fn binding_name(name: &str) -> Cow<'_, str> {
    if JS_RESERVED.contains(&name) {
        Cow::Owned(format!("{name}_"))
    } else {
        Cow::Borrowed(name)
    }
}
