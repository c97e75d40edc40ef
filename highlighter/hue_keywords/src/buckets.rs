//! Curated literal buckets.
//!
//! One slice per [`Category`]. A literal appears in exactly one slice; moving
//! a literal to a more specific category means deleting it from the old
//! slice in the same edit (`CategoryTable::from_buckets` rejects duplicates).
//!
//! Literals are exact, case-sensitive PHP spellings. Within a bucket they are
//! kept alphabetical so diffs stay readable.

use hue_ir::Category;

const MODIFIER: &[&str] = &["private", "protected", "public"];

const STATIC_FINAL: &[&str] = &["final", "static"];

// `this` and `super` lived in the type-handling bucket before they got their own.
const SELF_REFERENCE: &[&str] = &["parent", "self", "super", "this"];

const NAMESPACE_KEYWORD: &[&str] = &["namespace", "use"];

const FUNCTION_KEYWORD: &[&str] = &["function"];

const RETURN_KEYWORD: &[&str] = &["return"];

const TRUE_LITERAL: &[&str] = &["true"];

const FALSE_LITERAL: &[&str] = &["false"];

const NULL_LITERAL: &[&str] = &["null"];

/// Type introspection and conversion.
const HANDLING_FUNCTION: &[&str] = &[
    "boolval",
    "doubleval",
    "empty",
    "floatval",
    "get_defined_vars",
    "get_resource_type",
    "gettype",
    "intval",
    "is_array",
    "is_bool",
    "is_callable",
    "is_countable",
    "is_double",
    "is_float",
    "is_int",
    "is_integer",
    "is_iterable",
    "is_long",
    "is_numeric",
    "is_object",
    "is_real",
    "is_resource",
    "is_scalar",
    "is_string",
    "isset",
    "serialize",
    "settype",
    "strval",
    "unserialize",
    "unset",
];

const STRING_FUNCTION: &[&str] = &[
    "addcslashes",
    "addslashes",
    "bin2hex",
    "chop",
    "chr",
    "chunk_split",
    "convert_cyr_string",
    "convert_uudecode",
    "convert_uuencode",
    "count_chars",
    "crc32",
    "crypt",
    "echo",
    "explode",
    "fprintf",
    "get_html_translation_table",
    "hebrev",
    "hebrevc",
    "hex2bin",
    "html_entity_decode",
    "htmlentities",
    "htmlspecialchars",
    "htmlspecialchars_decode",
    "implode",
    "join",
    "lcfirst",
    "levenshtein",
    "localeconv",
    "ltrim",
    "md5",
    "md5_file",
    "metaphone",
    "money_format",
    "nl2br",
    "nl_langinfo",
    "number_format",
    "ord",
    "parse_str",
    "print",
    "printf",
    "quoted_printable_decode",
    "quoted_printable_encode",
    "quotemeta",
    "rtrim",
    "setlocale",
    "sha1",
    "sha1_file",
    "similar_text",
    "soundex",
    "sprintf",
    "sscanf",
    "str_getcsv",
    "str_ireplace",
    "str_pad",
    "str_repeat",
    "str_replace",
    "str_rot13",
    "str_shuffle",
    "str_split",
    "str_word_count",
    "strcasecmp",
    "strchr",
    "strcmp",
    "strcoll",
    "strcspn",
    "strip_tags",
    "stripcslashes",
    "stripos",
    "stripslashes",
    "stristr",
    "strlen",
    "strnatcasecmp",
    "strnatcmp",
    "strncasecmp",
    "strncmp",
    "strpbrk",
    "strpos",
    "strrchr",
    "strrev",
    "strripos",
    "strrpos",
    "strspn",
    "strstr",
    "strtok",
    "strtolower",
    "strtoupper",
    "strtr",
    "substr",
    "substr_compare",
    "substr_count",
    "substr_replace",
    "trim",
    "ucfirst",
    "ucwords",
    "vfprintf",
    "vprintf",
    "vsprintf",
    "wordwrap",
];

const ARRAY_FUNCTION: &[&str] = &[
    "array",
    "array_change_key_case",
    "array_chunk",
    "array_column",
    "array_combine",
    "array_count_values",
    "array_diff",
    "array_diff_assoc",
    "array_diff_key",
    "array_diff_uassoc",
    "array_diff_ukey",
    "array_fill",
    "array_fill_keys",
    "array_filter",
    "array_flip",
    "array_intersect",
    "array_intersect_assoc",
    "array_intersect_key",
    "array_intersect_uassoc",
    "array_intersect_ukey",
    "array_key_exists",
    "array_key_first",
    "array_key_last",
    "array_keys",
    "array_map",
    "array_merge",
    "array_merge_recursive",
    "array_multisort",
    "array_pad",
    "array_pop",
    "array_product",
    "array_push",
    "array_rand",
    "array_reduce",
    "array_replace",
    "array_replace_recursive",
    "array_reverse",
    "array_search",
    "array_shift",
    "array_slice",
    "array_splice",
    "array_sum",
    "array_udiff",
    "array_udiff_assoc",
    "array_udiff_uassoc",
    "array_uintersect",
    "array_uintersect_assoc",
    "array_uintersect_uassoc",
    "array_unique",
    "array_unshift",
    "array_values",
    "array_walk",
    "array_walk_recursive",
    "arsort",
    "asort",
    "compact",
    "count",
    "current",
    "each",
    "end",
    "extract",
    "in_array",
    "key",
    "key_exists",
    "krsort",
    "ksort",
    "list",
    "natcasesort",
    "natsort",
    "next",
    "pos",
    "prev",
    "range",
    "reset",
    "rsort",
    "shuffle",
    "sizeof",
    "sort",
    "uasort",
    "uksort",
    "usort",
];

/// Class and object reflection.
const OBJECT_FUNCTION: &[&str] = &[
    "__autoload",
    "class_alias",
    "class_exists",
    "get_called_class",
    "get_class",
    "get_class_methods",
    "get_class_vars",
    "get_declared_classes",
    "get_declared_interfaces",
    "get_declared_traits",
    "get_object_vars",
    "get_parent_class",
    "interface_exists",
    "is_a",
    "is_subclass_of",
    "method_exists",
    "property_exists",
    "trait_exists",
];

/// Process control and runtime miscellany.
const MISC_FUNCTION: &[&str] = &[
    "__halt_compiler",
    "connection_aborted",
    "connection_status",
    "constant",
    "define",
    "defined",
    "die",
    "eval",
    "exit",
    "get_browser",
    "highlight_file",
    "highlight_string",
    "hrtime",
    "ignore_user_abort",
    "pack",
    "php_check_syntax",
    "php_strip_whitespace",
    "sapi_windows_cp_conv",
    "sapi_windows_cp_get",
    "sapi_windows_cp_is_utf8",
    "sapi_windows_cp_set",
    "sapi_windows_generate_ctrl_event",
    "sapi_windows_set_ctrl_handler",
    "sapi_windows_vt100_support",
    "show_source",
    "sleep",
    "sys_getloadavg",
    "time_nanosleep",
    "time_sleep_until",
    "uniqid",
    "unpack",
    "usleep",
];

const JSON_FUNCTION: &[&str] = &[
    "json_decode",
    "json_encode",
    "json_last_error",
    "json_last_error_msg",
];

const MATH_FUNCTION: &[&str] = &[
    "abs",
    "acos",
    "acosh",
    "asin",
    "asinh",
    "atan",
    "atan2",
    "atanh",
    "base_convert",
    "bindec",
    "ceil",
    "cos",
    "cosh",
    "decbin",
    "dechex",
    "decoct",
    "deg2rad",
    "exp",
    "expm1",
    "floor",
    "fmod",
    "getrandmax",
    "hexdec",
    "hypot",
    "intdiv",
    "is_finite",
    "is_infinite",
    "is_nan",
    "lcg_value",
    "log",
    "log10",
    "log1p",
    "max",
    "min",
    "mt_getrandmax",
    "mt_rand",
    "mt_srand",
    "octdec",
    "pi",
    "pow",
    "rad2deg",
    "rand",
    "round",
    "sin",
    "sinh",
    "sqrt",
    "srand",
    "tan",
    "tanh",
];

/// Function handling and meta-programming.
const HANDLER_FUNCTION: &[&str] = &[
    "call_user_func",
    "call_user_func_array",
    "forward_static_call",
    "forward_static_call_array",
    "func_get_arg",
    "func_get_args",
    "func_num_args",
    "function_exists",
    "get_defined_functions",
    "register_shutdown_function",
    "register_tick_function",
    "unregister_tick_function",
];

/// PCRE functions.
const REGEX_FUNCTION: &[&str] = &[
    "preg_filter",
    "preg_grep",
    "preg_last_error",
    "preg_last_error_msg",
    "preg_match",
    "preg_match_all",
    "preg_quote",
    "preg_replace",
    "preg_replace_callback",
    "preg_replace_callback_array",
    "preg_split",
];

const DATE_FUNCTION: &[&str] = &[
    "checkdate",
    "date",
    "date_add",
    "date_create",
    "date_create_immutable",
    "date_default_timezone_get",
    "date_default_timezone_set",
    "date_diff",
    "date_format",
    "date_parse",
    "date_sub",
    "date_timestamp_get",
    "getdate",
    "gmdate",
    "gmmktime",
    "idate",
    "localtime",
    "microtime",
    "mktime",
    "strftime",
    "strtotime",
    "time",
    "timezone_identifiers_list",
];

/// Dumps, backtraces and the error log.
const DEBUG_FUNCTION: &[&str] = &[
    "debug_backtrace",
    "debug_print_backtrace",
    "debug_zval_dump",
    "error_get_last",
    "error_log",
    "print_r",
    "var_dump",
    "var_export",
];

const SUCCESS_KEYWORD: &[&str] = &["allow", "onSuccess", "success"];

const ERROR_KEYWORD: &[&str] = &["critical", "deny", "error", "onError"];

/// Every bucket, in [`Category::ALL`] order.
pub(crate) const BUCKETS: &[(Category, &[&str])] = &[
    (Category::Modifier, MODIFIER),
    (Category::StaticFinal, STATIC_FINAL),
    (Category::SelfReference, SELF_REFERENCE),
    (Category::NamespaceKeyword, NAMESPACE_KEYWORD),
    (Category::FunctionKeyword, FUNCTION_KEYWORD),
    (Category::ReturnKeyword, RETURN_KEYWORD),
    (Category::TrueLiteral, TRUE_LITERAL),
    (Category::FalseLiteral, FALSE_LITERAL),
    (Category::NullLiteral, NULL_LITERAL),
    (Category::HandlingFunction, HANDLING_FUNCTION),
    (Category::StringFunction, STRING_FUNCTION),
    (Category::ArrayFunction, ARRAY_FUNCTION),
    (Category::ObjectFunction, OBJECT_FUNCTION),
    (Category::MiscFunction, MISC_FUNCTION),
    (Category::JsonFunction, JSON_FUNCTION),
    (Category::MathFunction, MATH_FUNCTION),
    (Category::HandlerFunction, HANDLER_FUNCTION),
    (Category::RegexFunction, REGEX_FUNCTION),
    (Category::DateFunction, DATE_FUNCTION),
    (Category::DebugFunction, DEBUG_FUNCTION),
    (Category::SuccessKeyword, SUCCESS_KEYWORD),
    (Category::ErrorKeyword, ERROR_KEYWORD),
];

#[cfg(test)]
mod tests;
