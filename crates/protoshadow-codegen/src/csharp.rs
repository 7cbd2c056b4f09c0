//! C# text helpers shared by the emitters.

use protoshadow_core::{TypeRef, TypeRefKind};

const INDENT: &str = "    ";

/// C# keyword for a built-in type, if it has one
pub fn keyword_alias(qualified_name: &str) -> Option<&'static str> {
    let alias = match qualified_name {
        "System.Boolean" => "bool",
        "System.Byte" => "byte",
        "System.SByte" => "sbyte",
        "System.Int16" => "short",
        "System.UInt16" => "ushort",
        "System.Int32" => "int",
        "System.UInt32" => "uint",
        "System.Int64" => "long",
        "System.UInt64" => "ulong",
        "System.Single" => "float",
        "System.Double" => "double",
        "System.Decimal" => "decimal",
        "System.Char" => "char",
        "System.String" => "string",
        "System.Object" => "object",
        _ => return None,
    };
    Some(alias)
}

/// Render a type reference as fully qualified C# source text
///
/// Nullable annotations are preserved (`int?`, `string?`, `List<string?>?`).
pub fn render_type(ty: &TypeRef) -> String {
    let mut text = match ty.kind {
        TypeRefKind::Array => match ty.arguments.first() {
            Some(element) => format!("{}[]", render_type(element)),
            None => "global::System.Array".to_string(),
        },
        TypeRefKind::TypeParameter => ty.qualified_name(),
        _ => {
            let name = ty.qualified_name();
            match keyword_alias(&name) {
                Some(alias) => alias.to_string(),
                None => {
                    let mut text = format!("global::{name}");
                    if !ty.arguments.is_empty() {
                        text.push('<');
                        text.push_str(&render_type_list(&ty.arguments));
                        text.push('>');
                    }
                    text
                }
            }
        }
    };

    if ty.nullable {
        text.push('?');
    }
    text
}

/// Render a comma-separated type argument list
pub fn render_type_list(types: &[TypeRef]) -> String {
    types.iter().map(render_type).collect::<Vec<_>>().join(", ")
}

/// Indentation-aware line writer
#[derive(Debug, Default)]
pub struct CodeWriter {
    code: String,
    depth: usize,
}

impl CodeWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current indentation
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.code.push_str(INDENT);
        }
        self.code.push_str(text);
        self.code.push('\n');
    }

    pub fn blank_line(&mut self) {
        self.code.push('\n');
    }

    /// Write `header` followed by `{` and indent
    pub fn open_block(&mut self, header: &str) {
        self.line(header);
        self.line("{");
        self.depth += 1;
    }

    pub fn close_block(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    pub fn into_string(self) -> String {
        self.code
    }
}
