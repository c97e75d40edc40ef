//! Descriptor registry.
//!
//! Human-facing metadata per [`Category`]: the settings-page label, the tag
//! used in demo markup, and the host style key the renderer resolves to an
//! actual color. All three are unique, so tag → category and label →
//! category both round-trip.
//!
//! The registry also knows the host's own baseline styles (`keyword`,
//! `class`, `var`, ...). Demo markup tags those spans too, but the
//! classifier never produces them.

use std::sync::OnceLock;

use hue_ir::Category;
use rustc_hash::FxHashMap;

/// Settings page title.
pub const DISPLAY_NAME: &str = "PHP Colors";

/// Host style every category key inherits from.
pub const FALLBACK_STYLE_KEY: &str = "PHP_KEYWORD";

/// Metadata attached to a [`Category`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Descriptor {
    pub category: Category,
    /// Settings-page label listing sample literals.
    pub label: &'static str,
    /// Demo markup tag name.
    pub tag: &'static str,
    /// Host text-attributes key.
    pub style_key: &'static str,
}

const fn descriptor(
    category: Category,
    label: &'static str,
    tag: &'static str,
    style_key: &'static str,
) -> Descriptor {
    Descriptor {
        category,
        label,
        tag,
        style_key,
    }
}

/// One descriptor per category, in [`Category::ALL`] order.
static DESCRIPTORS: [Descriptor; Category::COUNT] = [
    descriptor(
        Category::Modifier,
        "Keywords: private, public, protected",
        "modifier",
        "PHP.MODIFIER",
    ),
    descriptor(Category::StaticFinal, "Keywords: static, final", "static", "PHP.STATIC_FINAL"),
    descriptor(Category::SelfReference, "Keywords: self, parent, this", "self", "PHP.THIS_SELF"),
    descriptor(Category::NamespaceKeyword, "Keywords: use, namespace", "use", "PHP.USE_NAMESPACE"),
    descriptor(Category::FunctionKeyword, "Keywords: function", "function", "PHP.FUNCTION"),
    descriptor(Category::ReturnKeyword, "Keywords: return", "return", "PHP.RETURN"),
    descriptor(Category::TrueLiteral, "Literals: true", "true", "PHP.TRUE"),
    descriptor(Category::FalseLiteral, "Literals: false", "false", "PHP.FALSE"),
    descriptor(Category::NullLiteral, "Literals: null", "null", "PHP.NULL"),
    descriptor(
        Category::HandlingFunction,
        "Keywords: isset, empty, is_numeric, is_array",
        "php_function",
        "PHP_HANDLING_FUNCTION",
    ),
    descriptor(
        Category::StringFunction,
        "Keywords: echo, explode, ucfirst, htmlentities",
        "string_function",
        "PHP_STRING_FUNCTION",
    ),
    descriptor(
        Category::ArrayFunction,
        "Keywords: array, array_walk, array_key_exists, array_merge",
        "array_function",
        "PHP_ARRAY_FUNCTION",
    ),
    descriptor(
        Category::ObjectFunction,
        "Keywords: get_class, is_a, method_exists, class_exists",
        "object_function",
        "PHP_OBJECT_FUNCTION",
    ),
    descriptor(
        Category::MiscFunction,
        "Keywords: define, exit, die, sleep, eval",
        "misc_function",
        "PHP_MISC_FUNCTION",
    ),
    descriptor(
        Category::JsonFunction,
        "Keywords: json_encode, json_decode, json_last_error, json_last_error_msg",
        "json_function",
        "PHP_JSON_FUNCTION",
    ),
    descriptor(
        Category::MathFunction,
        "Keywords: abs, ceil, round, max",
        "math_function",
        "PHP_MATH_FUNCTION",
    ),
    descriptor(
        Category::HandlerFunction,
        "Keywords: call_user_func_array, function_exists, func_num_args, register_tick_function",
        "handler_function",
        "PHP_HANDLER_FUNCTION",
    ),
    descriptor(
        Category::RegexFunction,
        "Keywords: preg_match, preg_replace, preg_split, preg_quote",
        "regex_function",
        "PHP_REGEX_FUNCTION",
    ),
    descriptor(
        Category::DateFunction,
        "Keywords: date, time, mktime, strtotime",
        "date_function",
        "PHP_DATE_FUNCTION",
    ),
    descriptor(
        Category::DebugFunction,
        "Keywords: var_dump, print_r, var_export, debug_backtrace",
        "debug_function",
        "PHP_DEBUG_FUNCTION",
    ),
    descriptor(
        Category::SuccessKeyword,
        "Keywords: onSuccess, success, allow",
        "php_success",
        "PHP_SUCCESS",
    ),
    descriptor(
        Category::ErrorKeyword,
        "Keywords: onError, error, critical, deny",
        "php_error",
        "PHP_ERROR",
    ),
];

/// Styles the host's lexer-level highlighter paints on its own.
///
/// They appear in demo markup next to category tags but are never produced
/// by the classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaselineStyle {
    Keyword,
    Class,
    Constant,
    Number,
    Variable,
    FunctionCall,
}

impl BaselineStyle {
    pub const ALL: [BaselineStyle; 6] = [
        BaselineStyle::Keyword,
        BaselineStyle::Class,
        BaselineStyle::Constant,
        BaselineStyle::Number,
        BaselineStyle::Variable,
        BaselineStyle::FunctionCall,
    ];

    /// Demo markup tag name.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Class => "class",
            Self::Constant => "const",
            Self::Number => "num",
            Self::Variable => "var",
            Self::FunctionCall => "fn",
        }
    }

    /// Host text-attributes key.
    pub const fn style_key(self) -> &'static str {
        match self {
            Self::Keyword => "PHP_KEYWORD",
            Self::Class => "PHP_CLASS",
            Self::Constant => "PHP_CONSTANT",
            Self::Number => "PHP_NUMBER",
            Self::Variable => "PHP_VAR",
            Self::FunctionCall => "PHP_FUNCTION_CALL",
        }
    }
}

/// Read-only lookup over the static descriptor data.
#[derive(Debug)]
pub struct DescriptorRegistry {
    by_tag: FxHashMap<&'static str, Category>,
    by_label: FxHashMap<&'static str, Category>,
    baseline_by_tag: FxHashMap<&'static str, BaselineStyle>,
}

static STANDARD: OnceLock<DescriptorRegistry> = OnceLock::new();

impl DescriptorRegistry {
    /// The process-wide registry, built on first use.
    pub fn standard() -> &'static DescriptorRegistry {
        STANDARD.get_or_init(Self::build)
    }

    fn build() -> Self {
        let mut registry = DescriptorRegistry {
            by_tag: FxHashMap::default(),
            by_label: FxHashMap::default(),
            baseline_by_tag: FxHashMap::default(),
        };
        for d in &DESCRIPTORS {
            let tag_clash = registry.by_tag.insert(d.tag, d.category);
            let label_clash = registry.by_label.insert(d.label, d.category);
            debug_assert!(tag_clash.is_none(), "duplicate tag `{}`", d.tag);
            debug_assert!(label_clash.is_none(), "duplicate label `{}`", d.label);
        }
        for style in BaselineStyle::ALL {
            let clash = registry.baseline_by_tag.insert(style.tag(), style);
            debug_assert!(
                clash.is_none() && !registry.by_tag.contains_key(style.tag()),
                "baseline tag `{}` is already taken",
                style.tag()
            );
        }
        registry
    }

    /// Descriptor of `category`.
    #[inline]
    pub fn descriptor(&self, category: Category) -> &'static Descriptor {
        &DESCRIPTORS[category.index()]
    }

    /// Every descriptor in display order.
    pub fn descriptors(&self) -> &'static [Descriptor] {
        &DESCRIPTORS
    }

    /// Settings-page label of `category`.
    pub fn label_of(&self, category: Category) -> &'static str {
        self.descriptor(category).label
    }

    /// Demo markup tag of `category`.
    pub fn tag_of(&self, category: Category) -> &'static str {
        self.descriptor(category).tag
    }

    /// Host text-attributes key `category` renders with.
    pub fn style_key_of(&self, category: Category) -> &'static str {
        self.descriptor(category).style_key
    }

    /// Category whose demo tag is `tag`. Baseline tags resolve to `None`.
    pub fn category_of_tag(&self, tag: &str) -> Option<Category> {
        self.by_tag.get(tag).copied()
    }

    /// Category whose settings-page label is `label`.
    pub fn category_of_label(&self, label: &str) -> Option<Category> {
        self.by_label.get(label).copied()
    }

    /// Host baseline style whose demo tag is `tag`.
    pub fn baseline_of_tag(&self, tag: &str) -> Option<BaselineStyle> {
        self.baseline_by_tag.get(tag).copied()
    }

    /// Categories in display order (declaration order, not sorted).
    pub fn all_categories(&self) -> impl Iterator<Item = Category> + 'static {
        DESCRIPTORS.iter().map(|d| d.category)
    }

    /// Every host baseline style.
    pub fn baselines(&self) -> &'static [BaselineStyle] {
        &BaselineStyle::ALL
    }
}
