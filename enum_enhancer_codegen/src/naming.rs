//! Identifier spelling rules shared by the extractor and the generator.

/// Appended to an enum's name to form its companion's name.
pub const COMPANION_SUFFIX: &str = "_";

const LOOKUP_PREFIX: &str = "from";
const ACCESSOR_PREFIX: &str = "get";

/// Strict and reserved Rust keywords that can be written as raw identifiers.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe",
    "unsized", "use", "virtual", "where", "while", "yield",
];

/// Keywords that name paths and have no raw form (`r#crate` is rejected).
const PATH_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// Uppercases the first character and keeps the rest unchanged.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercases the first character and keeps the rest unchanged.
pub fn uncapitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// Name of the generated lookup function for a constructor parameter
/// (e.g. `quarter` -> `fromQuarter`).
pub fn lookup_fn_name(parameter: &str) -> String {
    format!("{LOOKUP_PREFIX}{}", capitalize(parameter))
}

/// Name of the accessor a lookup function calls on each enum value
/// (e.g. `quarter` -> `getQuarter`).
pub fn accessor_name(parameter: &str) -> String {
    format!("{ACCESSOR_PREFIX}{}", capitalize(parameter))
}

pub fn companion_name(type_name: &str) -> String {
    format!("{type_name}{COMPANION_SUFFIX}")
}

pub fn is_keyword(s: &str) -> bool {
    KEYWORDS.contains(&s)
}

pub fn is_path_keyword(s: &str) -> bool {
    PATH_KEYWORDS.contains(&s)
}

/// Lexical identifier check. Keywords pass; they are rendered raw on output.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            s != "_" && chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

/// Spells `name` so that it is accepted in identifier position.
pub fn render_ident(name: &str) -> String {
    if is_keyword(name) {
        format!("r#{name}")
    } else {
        name.to_string()
    }
}

/// Picks a local binding name starting from `base`, appending `_` until it
/// collides neither with `taken` nor with a keyword.
pub fn free_binding(base: &str, taken: &[&str]) -> String {
    let mut candidate = base.to_string();
    while is_keyword(&candidate)
        || is_path_keyword(&candidate)
        || taken.contains(&candidate.as_str())
    {
        candidate.push('_');
    }
    candidate
}
