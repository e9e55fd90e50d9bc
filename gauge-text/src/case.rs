//! Case styles
//!
//! Word boundaries are runs of whitespace, hyphens and underscores. The
//! delimiter styles (snake, kebab, constant, path, dot) first turn every
//! other non-word character into a space.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+(\w)").expect("valid camel boundary pattern"));

static WORD_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_-]+").expect("valid word separator pattern"));

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid non-word pattern"));

static DELIMITED_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_]+").expect("valid delimiter pattern"));

/// Uppercase the first character and lowercase the rest
fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Split into words for the delimiter styles
fn delimited_words(s: &str) -> Vec<&str> {
    DELIMITED_SEPARATORS
        .split(s)
        .filter(|word| !word.is_empty())
        .collect()
}

fn join_delimited(s: &str, delimiter: &str, upper: bool) -> String {
    let cleaned = NON_WORD.replace_all(s, " ");
    let joined = delimited_words(&cleaned).join(delimiter);
    if upper {
        joined.to_uppercase()
    } else {
        joined.to_lowercase()
    }
}

/// `hello_world` → `helloWorld`. The first word is left as written.
pub fn to_camel_case(s: &str) -> String {
    CAMEL_BOUNDARY
        .replace_all(s, |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}

/// `hello-world` → `HelloWorld`
pub fn to_pascal_case(s: &str) -> String {
    WORD_SEPARATORS.split(s).map(capitalize_word).collect()
}

/// `Hello World!` → `hello_world`
pub fn to_snake_case(s: &str) -> String {
    join_delimited(s, "_", false)
}

/// `Hello World!` → `hello-world`
pub fn to_kebab_case(s: &str) -> String {
    join_delimited(s, "-", false)
}

/// `Hello World` → `HELLO_WORLD`
pub fn to_constant_case(s: &str) -> String {
    join_delimited(s, "_", true)
}

/// `Hello World` → `hello/world`
pub fn to_path_case(s: &str) -> String {
    join_delimited(s, "/", false)
}

/// `Hello World` → `hello.world`
pub fn to_dot_case(s: &str) -> String {
    join_delimited(s, ".", false)
}

/// Lowercase everything, then uppercase the first character of each
/// whitespace-separated word. Punctuation is kept.
pub fn to_capitalized_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start && !c.is_whitespace() {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        at_word_start = c.is_whitespace();
    }
    out
}

/// `hello-world_world` → `Hello World World`
pub fn to_title_case(s: &str) -> String {
    WORD_SEPARATORS
        .split(s)
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `HeLLo WoRLd` → `Hello world`
pub fn to_sentence_case(s: &str) -> String {
    capitalize_word(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(to_camel_case("hello-world"), "helloWorld");
        assert_eq!(to_camel_case("hello_world"), "helloWorld");
        assert_eq!(to_camel_case("hello   world"), "helloWorld");
        assert_eq!(to_camel_case("helloWorld"), "helloWorld");
        assert_eq!(to_camel_case("big_red dog"), "bigRedDog");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case("Hello World!"), "hello_world");
        assert_eq!(to_snake_case("Hello-World"), "hello_world");
        assert_eq!(to_snake_case("  padded  words  "), "padded_words");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(to_title_case("hello-world"), "Hello World");
        assert_eq!(to_title_case("hello_world"), "Hello World");
        assert_eq!(to_title_case("hello   world"), "Hello World");
        assert_eq!(to_title_case("hello-world_world"), "Hello World World");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(to_pascal_case("hello world"), "HelloWorld");
        assert_eq!(to_pascal_case("hello-world"), "HelloWorld");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("HELLO WORLD"), "HelloWorld");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_kebab_case("Hello World!"), "hello-world");
        assert_eq!(to_kebab_case("Hello_World"), "hello-world");
    }

    #[test]
    fn test_capitalized_case() {
        assert_eq!(to_capitalized_case("hello world"), "Hello World");
        assert_eq!(to_capitalized_case("HELLO WORLD"), "Hello World");
        assert_eq!(to_capitalized_case("hello-world again"), "Hello-world Again");
    }

    #[test]
    fn test_sentence_case() {
        assert_eq!(to_sentence_case("hello world"), "Hello world");
        assert_eq!(to_sentence_case("HeLLo WoRLd"), "Hello world");
        assert_eq!(to_sentence_case("HELLO WORLD"), "Hello world");
        assert_eq!(to_sentence_case("hello"), "Hello");
        assert_eq!(to_sentence_case(""), "");
    }

    #[test]
    fn test_constant_case() {
        assert_eq!(to_constant_case("Hello World"), "HELLO_WORLD");
        assert_eq!(to_constant_case("HeLLo WoRLd"), "HELLO_WORLD");
        assert_eq!(to_constant_case("hello"), "HELLO");
        assert_eq!(to_constant_case("constant_case"), "CONSTANT_CASE");
        assert_eq!(to_constant_case(""), "");
    }

    #[test]
    fn test_path_case() {
        assert_eq!(to_path_case("Hello World"), "hello/world");
        assert_eq!(to_path_case("HeLLo WoRLd"), "hello/world");
        assert_eq!(to_path_case("hello"), "hello");
        assert_eq!(to_path_case("path_case"), "path/case");
        assert_eq!(to_path_case(""), "");
    }

    #[test]
    fn test_dot_case() {
        assert_eq!(to_dot_case("Hello World"), "hello.world");
        assert_eq!(to_dot_case("JavaScript is fun"), "javascript.is.fun");
        assert_eq!(to_dot_case("a.b.c"), "a.b.c");
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(to_snake_case("Café Crème"), "café_crème");
        assert_eq!(to_title_case("éclair-au_chocolat"), "Éclair Au Chocolat");
    }
}
