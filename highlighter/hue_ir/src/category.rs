//! Highlight categories.
//!
//! The closed set of reasons a token gets its own style. Declaration order
//! is the order the settings page lists them in, so related categories sit
//! next to each other.

use std::fmt;

/// Semantic highlight category of a single token.
///
/// A token has at most one category. Tokens without one are left to the
/// host's baseline highlighter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Category {
    // === Declaration keywords ===
    /// `private`, `public`, `protected`
    Modifier = 0,
    /// `static`, `final`
    StaticFinal = 1,
    /// `self`, `parent`, `this`
    SelfReference = 2,
    /// `use`, `namespace`
    NamespaceKeyword = 3,
    /// `function`
    FunctionKeyword = 4,
    /// `return`
    ReturnKeyword = 5,

    // === Literals ===
    TrueLiteral = 6,
    FalseLiteral = 7,
    NullLiteral = 8,

    // === Standard library themes ===
    /// Type introspection and conversion: `isset`, `is_array`, `intval`
    HandlingFunction = 9,
    StringFunction = 10,
    ArrayFunction = 11,
    /// Class and object reflection: `get_class`, `method_exists`
    ObjectFunction = 12,
    /// Process and runtime: `exit`, `sleep`, `define`
    MiscFunction = 13,
    JsonFunction = 14,
    MathFunction = 15,
    /// Functional and meta-programming: `call_user_func`, `func_get_args`
    HandlerFunction = 16,
    RegexFunction = 17,
    DateFunction = 18,
    /// Dumps and backtraces: `var_dump`, `print_r`
    DebugFunction = 19,

    // === Outcome sentinels ===
    SuccessKeyword = 20,
    ErrorKeyword = 21,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 22;

    /// Every category in declaration order.
    pub const ALL: [Category; Self::COUNT] = [
        Category::Modifier,
        Category::StaticFinal,
        Category::SelfReference,
        Category::NamespaceKeyword,
        Category::FunctionKeyword,
        Category::ReturnKeyword,
        Category::TrueLiteral,
        Category::FalseLiteral,
        Category::NullLiteral,
        Category::HandlingFunction,
        Category::StringFunction,
        Category::ArrayFunction,
        Category::ObjectFunction,
        Category::MiscFunction,
        Category::JsonFunction,
        Category::MathFunction,
        Category::HandlerFunction,
        Category::RegexFunction,
        Category::DateFunction,
        Category::DebugFunction,
        Category::SuccessKeyword,
        Category::ErrorKeyword,
    ];

    /// Dense index, usable for per-category arrays.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable identifier used in logs and error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Modifier => "Modifier",
            Self::StaticFinal => "StaticFinal",
            Self::SelfReference => "SelfReference",
            Self::NamespaceKeyword => "NamespaceKeyword",
            Self::FunctionKeyword => "FunctionKeyword",
            Self::ReturnKeyword => "ReturnKeyword",
            Self::TrueLiteral => "TrueLiteral",
            Self::FalseLiteral => "FalseLiteral",
            Self::NullLiteral => "NullLiteral",
            Self::HandlingFunction => "HandlingFunction",
            Self::StringFunction => "StringFunction",
            Self::ArrayFunction => "ArrayFunction",
            Self::ObjectFunction => "ObjectFunction",
            Self::MiscFunction => "MiscFunction",
            Self::JsonFunction => "JsonFunction",
            Self::MathFunction => "MathFunction",
            Self::HandlerFunction => "HandlerFunction",
            Self::RegexFunction => "RegexFunction",
            Self::DateFunction => "DateFunction",
            Self::DebugFunction => "DebugFunction",
            Self::SuccessKeyword => "SuccessKeyword",
            Self::ErrorKeyword => "ErrorKeyword",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
