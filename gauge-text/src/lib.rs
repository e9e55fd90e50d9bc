//! Gauge Text - String case formatting
//!
//! Case styles (camelCase, snake_case, PascalCase, kebab-case, Capitalized
//! Case, Title Case, Sentence case, CONSTANT_CASE, path/case, dot.case) and
//! character-level transforms (alternating, inverse, reverse, leetspeak,
//! shuffle). Registry functions return `Value::Null` for `Null` input and
//! `Value::Error` on failure; they never panic.

mod helpers;
mod case;
mod transform;
mod functions;

pub use case::{
    to_camel_case, to_capitalized_case, to_constant_case, to_dot_case, to_kebab_case,
    to_pascal_case, to_path_case, to_sentence_case, to_snake_case, to_title_case,
};
pub use transform::{
    reverse_string, shuffle_string, shuffle_string_with, to_alternating_case, to_inverse_case,
    to_leet_speak,
};

use gauge_plugin::PluginRegistry;

/// Load text functions into registry
pub fn load_text_library(registry: PluginRegistry) -> PluginRegistry {
    registry
        // Case styles (10 functions)
        .with_function(functions::ToCamelCase)
        .with_function(functions::ToPascalCase)
        .with_function(functions::ToSnakeCase)
        .with_function(functions::ToKebabCase)
        .with_function(functions::ToConstantCase)
        .with_function(functions::ToPathCase)
        .with_function(functions::ToDotCase)
        .with_function(functions::ToCapitalizedCase)
        .with_function(functions::ToTitleCase)
        .with_function(functions::ToSentenceCase)

        // Transforms (5 functions)
        .with_function(functions::ToAlternatingCase)
        .with_function(functions::ToInverseCase)
        .with_function(functions::ReverseString)
        .with_function(functions::ToLeetSpeak)
        .with_function(functions::ShuffleString)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gauge_core::Value;
    use gauge_plugin::EvalContext;

    #[test]
    fn test_library_registration() {
        let registry = load_text_library(PluginRegistry::new());
        assert_eq!(registry.len(), 15);
    }

    #[test]
    fn test_camel_case_names_resolve() {
        let registry = load_text_library(PluginRegistry::new());
        let ctx = EvalContext::default();
        for name in ["toCamelCase", "to_camel_case", "TO_CAMEL_CASE"] {
            let result = registry.call_function(name, &[Value::from("hello world")], &ctx);
            assert_eq!(result, Value::from("helloWorld"), "{}", name);
        }
    }
}
