//! The sample document shown on the color settings page.
//!
//! Category tags mark words the annotator must highlight. The remaining tags
//! (`keyword`, `class`, `const`, `num`, `var`, `fn`) mark words left to the
//! host's own PHP highlighter. Every category appears at least once.

use crate::error::DemoError;
use crate::markup::DemoDocument;

pub const DEMO_TEXT: &str = r#"<?php
<use>namespace</use> Foo\Bar\Baz;

<use>use</use> <class>SomeClass</class>;

// isset, array_merge and true stay plain inside comments
<static>final</static> <keyword>class</keyword> <class>MyClass</class> <keyword>extends</keyword> <class>MyOtherClass</class> {
    <modifier>public</modifier> <keyword>const</keyword> <const>SINGLE</const> = <num>1</num>;
    <modifier>private</modifier> <var>$variable</var> = <null>null</null>;
    <modifier>protected</modifier> <var>$arguments</var>;

    <modifier>public</modifier> <static>static</static> <function>function</function> <fn>byeWorld</fn>() {
        <return>return</return> <self>self</self>::<var>$variable</var>;
    }

    <modifier>public</modifier> <function>function</function> <fn>helloWorld</fn>(<var>$pattern</var>) {
        <keyword>if</keyword> (<php_function>isset</php_function>(<var>$variable</var>)) {
            <var>$title</var> = <string_function>ucfirst</string_function>(<var>$variable</var>);
            <keyword>if</keyword> (<object_function>class_exists</object_function>(<const>test_class</const>) && <handler_function>function_exists</handler_function>(<const>test_function</const>)) {
                <var>$numargs</var> = <handler_function>func_num_args</handler_function>();
                <var>$array</var> = <array_function>array_merge</array_function>(<var>$array1</var>, <var>$array2</var>);
                <var>$total</var> = <math_function>ceil</math_function>(<var>$numargs</var>);
                <var>$matched</var> = <regex_function>preg_match</regex_function>(<var>$pattern</var>, <var>$title</var>);
                <var>$stamp</var> = <date_function>time</date_function>();
                <debug_function>var_dump</debug_function>(<var>$matched</var>, <var>$stamp</var>);
                <var>$this</var>-><php_success>success</php_success>(<true>true</true>);
                <misc_function>exit</misc_function>(<json_function>json_encode</json_function>(<var>$array</var>));
            }
        } <keyword>else</keyword> {
            <return>return</return> <var>$this</var>-><php_error>error</php_error>(<false>false</false>);
        }
    }
}
"#;

/// [`DEMO_TEXT`] with its markers stripped.
pub fn demo_document() -> Result<DemoDocument, DemoError> {
    DemoDocument::parse(DEMO_TEXT)
}
