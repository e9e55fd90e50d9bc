//! String formatting functions for the plugin registry

use gauge_plugin::prelude::*;
use crate::case::*;
use crate::helpers::unary_text;
use crate::transform::*;

static TEXT_ARGS: [ArgMeta; 1] = [ArgMeta::required("text", "Text", "Text to convert")];

// ============ to_camel_case ============

pub struct ToCamelCase;

static TO_CAMEL_CASE_EXAMPLES: [&str; 2] = ["to_camel_case(\"hello_world\") → \"helloWorld\"", "to_camel_case(\"hello-world\") → \"helloWorld\""];
static TO_CAMEL_CASE_RELATED: [&str; 2] = ["to_pascal_case", "to_snake_case"];

impl FunctionPlugin for ToCamelCase {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_camel_case",
            description: "Convert words separated by spaces, hyphens or underscores to camelCase",
            usage: "to_camel_case(text)",
            args: &TEXT_ARGS,
            returns: "Text",
            examples: &TO_CAMEL_CASE_EXAMPLES,
            category: "text/case",
            related: &TO_CAMEL_CASE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary_text("to_camel_case", args, to_camel_case)
    }
}

// ============ to_pascal_case ============

pub struct ToPascalCase;

static TO_PASCAL_CASE_EXAMPLES: [&str; 1] = ["to_pascal_case(\"hello world\") → \"HelloWorld\""];
static TO_PASCAL_CASE_RELATED: [&str; 2] = ["to_camel_case", "to_title_case"];

impl FunctionPlugin for ToPascalCase {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_pascal_case",
            description: "Convert to PascalCase",
            usage: "to_pascal_case(text)",
            args: &TEXT_ARGS,
            returns: "Text",
            examples: &TO_PASCAL_CASE_EXAMPLES,
            category: "text/case",
            related: &TO_PASCAL_CASE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary_text("to_pascal_case", args, to_pascal_case)
    }
}

// ============ to_snake_case ============

pub struct ToSnakeCase;

static TO_SNAKE_CASE_EXAMPLES: [&str; 1] = ["to_snake_case(\"Hello World!\") → \"hello_world\""];
static TO_SNAKE_CASE_RELATED: [&str; 2] = ["to_kebab_case", "to_constant_case"];

impl FunctionPlugin for ToSnakeCase {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_snake_case",
            description: "Convert to lowercase words joined by underscores",
            usage: "to_snake_case(text)",
            args: &TEXT_ARGS,
            returns: "Text",
            examples: &TO_SNAKE_CASE_EXAMPLES,
            category: "text/case",
            related: &TO_SNAKE_CASE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary_text("to_snake_case", args, to_snake_case)
    }
}

// ============ to_kebab_case ============

pub struct ToKebabCase;

static TO_KEBAB_CASE_EXAMPLES: [&str; 1] = ["to_kebab_case(\"Hello World!\") → \"hello-world\""];
static TO_KEBAB_CASE_RELATED: [&str; 2] = ["to_snake_case", "to_dot_case"];

impl FunctionPlugin for ToKebabCase {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_kebab_case",
            description: "Convert to lowercase words joined by hyphens",
            usage: "to_kebab_case(text)",
            args: &TEXT_ARGS,
            returns: "Text",
            examples: &TO_KEBAB_CASE_EXAMPLES,
            category: "text/case",
            related: &TO_KEBAB_CASE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary_text("to_kebab_case", args, to_kebab_case)
    }
}

// ============ to_constant_case ============

pub struct ToConstantCase;

static TO_CONSTANT_CASE_EXAMPLES: [&str; 1] = ["to_constant_case(\"Hello World\") → \"HELLO_WORLD\""];
static TO_CONSTANT_CASE_RELATED: [&str; 1] = ["to_snake_case"];

impl FunctionPlugin for ToConstantCase {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_constant_case",
            description: "Convert to uppercase words joined by underscores",
            usage: "to_constant_case(text)",
            args: &TEXT_ARGS,
            returns: "Text",
            examples: &TO_CONSTANT_CASE_EXAMPLES,
            category: "text/case",
            related: &TO_CONSTANT_CASE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary_text("to_constant_case", args, to_constant_case)
    }
}

// ============ to_path_case ============

pub struct ToPathCase;

static TO_PATH_CASE_EXAMPLES: [&str; 1] = ["to_path_case(\"Hello World\") → \"hello/world\""];
static TO_PATH_CASE_RELATED: [&str; 2] = ["to_dot_case", "to_kebab_case"];

impl FunctionPlugin for ToPathCase {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_path_case",
            description: "Convert to lowercase words joined by slashes",
            usage: "to_path_case(text)",
            args: &TEXT_ARGS,
            returns: "Text",
            examples: &TO_PATH_CASE_EXAMPLES,
            category: "text/case",
            related: &TO_PATH_CASE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary_text("to_path_case", args, to_path_case)
    }
}

// ============ to_dot_case ============

pub struct ToDotCase;

static TO_DOT_CASE_EXAMPLES: [&str; 1] = ["to_dot_case(\"JavaScript is fun\") → \"javascript.is.fun\""];
static TO_DOT_CASE_RELATED: [&str; 2] = ["to_path_case", "to_snake_case"];

impl FunctionPlugin for ToDotCase {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_dot_case",
            description: "Convert to lowercase words joined by dots",
            usage: "to_dot_case(text)",
            args: &TEXT_ARGS,
            returns: "Text",
            examples: &TO_DOT_CASE_EXAMPLES,
            category: "text/case",
            related: &TO_DOT_CASE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary_text("to_dot_case", args, to_dot_case)
    }
}

// ============ to_capitalized_case ============

pub struct ToCapitalizedCase;

static TO_CAPITALIZED_CASE_EXAMPLES: [&str; 1] = ["to_capitalized_case(\"HELLO WORLD\") → \"Hello World\""];
static TO_CAPITALIZED_CASE_RELATED: [&str; 2] = ["to_title_case", "to_sentence_case"];

impl FunctionPlugin for ToCapitalizedCase {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_capitalized_case",
            description: "Capitalize the first letter of every word",
            usage: "to_capitalized_case(text)",
            args: &TEXT_ARGS,
            returns: "Text",
            examples: &TO_CAPITALIZED_CASE_EXAMPLES,
            category: "text/case",
            related: &TO_CAPITALIZED_CASE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary_text("to_capitalized_case", args, to_capitalized_case)
    }
}

// ============ to_title_case ============

pub struct ToTitleCase;

static TO_TITLE_CASE_EXAMPLES: [&str; 1] = ["to_title_case(\"hello-world_world\") → \"Hello World World\""];
static TO_TITLE_CASE_RELATED: [&str; 1] = ["to_capitalized_case"];

impl FunctionPlugin for ToTitleCase {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_title_case",
            description: "Capitalize words and join them with single spaces",
            usage: "to_title_case(text)",
            args: &TEXT_ARGS,
            returns: "Text",
            examples: &TO_TITLE_CASE_EXAMPLES,
            category: "text/case",
            related: &TO_TITLE_CASE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary_text("to_title_case", args, to_title_case)
    }
}

// ============ to_sentence_case ============

pub struct ToSentenceCase;

static TO_SENTENCE_CASE_EXAMPLES: [&str; 1] = ["to_sentence_case(\"HeLLo WoRLd\") → \"Hello world\""];
static TO_SENTENCE_CASE_RELATED: [&str; 1] = ["to_capitalized_case"];

impl FunctionPlugin for ToSentenceCase {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_sentence_case",
            description: "Capitalize the first character and lowercase the rest",
            usage: "to_sentence_case(text)",
            args: &TEXT_ARGS,
            returns: "Text",
            examples: &TO_SENTENCE_CASE_EXAMPLES,
            category: "text/case",
            related: &TO_SENTENCE_CASE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary_text("to_sentence_case", args, to_sentence_case)
    }
}

// ============ to_alternating_case ============

pub struct ToAlternatingCase;

static TO_ALTERNATING_CASE_EXAMPLES: [&str; 1] = ["to_alternating_case(\"hello world\") → \"hElLo wOrLd\""];
static TO_ALTERNATING_CASE_RELATED: [&str; 1] = ["to_inverse_case"];

impl FunctionPlugin for ToAlternatingCase {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_alternating_case",
            description: "Alternate lowercase and uppercase by character position",
            usage: "to_alternating_case(text)",
            args: &TEXT_ARGS,
            returns: "Text",
            examples: &TO_ALTERNATING_CASE_EXAMPLES,
            category: "text/transform",
            related: &TO_ALTERNATING_CASE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary_text("to_alternating_case", args, to_alternating_case)
    }
}

// ============ to_inverse_case ============

pub struct ToInverseCase;

static TO_INVERSE_CASE_EXAMPLES: [&str; 1] = ["to_inverse_case(\"Hello World\") → \"hELLO wORLD\""];
static TO_INVERSE_CASE_RELATED: [&str; 1] = ["to_alternating_case"];

impl FunctionPlugin for ToInverseCase {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_inverse_case",
            description: "Flip the case of every character",
            usage: "to_inverse_case(text)",
            args: &TEXT_ARGS,
            returns: "Text",
            examples: &TO_INVERSE_CASE_EXAMPLES,
            category: "text/transform",
            related: &TO_INVERSE_CASE_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary_text("to_inverse_case", args, to_inverse_case)
    }
}

// ============ reverse_string ============

pub struct ReverseString;

static REVERSE_STRING_EXAMPLES: [&str; 1] = ["reverse_string(\"hello\") → \"olleh\""];
static REVERSE_STRING_RELATED: [&str; 1] = ["shuffle_string"];

impl FunctionPlugin for ReverseString {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "reverse_string",
            description: "Reverse the characters",
            usage: "reverse_string(text)",
            args: &TEXT_ARGS,
            returns: "Text",
            examples: &REVERSE_STRING_EXAMPLES,
            category: "text/transform",
            related: &REVERSE_STRING_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary_text("reverse_string", args, reverse_string)
    }
}

// ============ to_leet_speak ============

pub struct ToLeetSpeak;

static TO_LEET_SPEAK_EXAMPLES: [&str; 1] = ["to_leet_speak(\"hello world\") → \"h3ll0 w0rld\""];
static TO_LEET_SPEAK_RELATED: [&str; 1] = ["to_inverse_case"];

impl FunctionPlugin for ToLeetSpeak {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "to_leet_speak",
            description: "Lowercase and replace letters with look-alike digits",
            usage: "to_leet_speak(text)",
            args: &TEXT_ARGS,
            returns: "Text",
            examples: &TO_LEET_SPEAK_EXAMPLES,
            category: "text/transform",
            related: &TO_LEET_SPEAK_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary_text("to_leet_speak", args, to_leet_speak)
    }
}

// ============ shuffle_string ============

pub struct ShuffleString;

static SHUFFLE_STRING_EXAMPLES: [&str; 1] = ["shuffle_string(\"hello\") → \"olelh\""];
static SHUFFLE_STRING_RELATED: [&str; 1] = ["reverse_string"];

impl FunctionPlugin for ShuffleString {
    fn meta(&self) -> FunctionMeta {
        FunctionMeta {
            name: "shuffle_string",
            description: "Randomly reorder the characters",
            usage: "shuffle_string(text)",
            args: &TEXT_ARGS,
            returns: "Text",
            examples: &SHUFFLE_STRING_EXAMPLES,
            category: "text/transform",
            related: &SHUFFLE_STRING_RELATED,
        }
    }

    fn call(&self, args: &[Value], _ctx: &EvalContext) -> Value {
        unary_text("shuffle_string", args, shuffle_string)
    }
}
