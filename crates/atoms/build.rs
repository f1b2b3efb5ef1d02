use std::{env, path::Path};

fn main() {
    gen_js_word();
}

/// Words that appear in almost every source file are pre-interned so that
/// comparing against them compiles to a pointer comparison.
fn gen_js_word() {
    string_cache_codegen::AtomType::new("JsWord", "js_word!")
        .atoms(&[
            "",
            // Directive prologue strings.
            "use strict",
            // Identifiers with special validation rules.
            "arguments",
            "eval",
            "await",
            "yield",
            "undefined",
            "Infinity",
            "NaN",
            // Object member definition keywords.
            "get",
            "set",
            // Common type names from both type grammars.
            "string",
            "number",
            "boolean",
            "Object",
            "Array",
            "Function",
            "void",
            "null",
            // Frequent annotation names.
            "param",
            "return",
            "returns",
            "type",
            "typedef",
            "const",
            "constructor",
            "override",
            "private",
            "protected",
            "public",
            "deprecated",
            "see",
            "author",
            "license",
            "fileoverview",
            "suppress",
            "this",
            "extends",
            "implements",
            "interface",
            "template",
            "throws",
        ])
        .write_to_file(&Path::new(&env::var("OUT_DIR").unwrap()).join("js_word.rs"))
        .unwrap();
}
