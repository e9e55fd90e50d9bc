//! Character-level novelty transforms

use rand::seq::SliceRandom;
use rand::Rng;

/// Even character positions lowercase, odd positions uppercase. Spaces are
/// kept and still count as a position.
pub fn to_alternating_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, c) in s.chars().enumerate() {
        if c == ' ' {
            out.push(c);
        } else if i % 2 == 0 {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
    }
    out
}

/// Flip the case of every character
pub fn to_inverse_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        let is_upper = c.to_uppercase().eq(std::iter::once(c));
        if is_upper {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
    }
    out
}

pub fn reverse_string(s: &str) -> String {
    s.chars().rev().collect()
}

fn leet(c: char) -> Option<char> {
    match c {
        'a' => Some('4'),
        'e' => Some('3'),
        'i' => Some('1'),
        'o' => Some('0'),
        't' => Some('7'),
        's' => Some('5'),
        'b' => Some('8'),
        'g' => Some('9'),
        _ => None,
    }
}

/// Lowercase the input and substitute digits for a, e, i, o, t, s, b, g
pub fn to_leet_speak(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| leet(c).unwrap_or(c))
        .collect()
}

/// Shuffle the characters using the thread-local generator
pub fn shuffle_string(s: &str) -> String {
    shuffle_string_with(s, &mut rand::thread_rng())
}

/// Fisher-Yates shuffle of the characters driven by `rng`
pub fn shuffle_string_with<R: Rng + ?Sized>(s: &str, rng: &mut R) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    chars.shuffle(rng);
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sorted(s: &str) -> Vec<char> {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn test_alternating_case() {
        assert_eq!(to_alternating_case("hello world"), "hElLo wOrLd");
        assert_eq!(to_alternating_case("JavaScript"), "jAvAsCrIpT");
        assert_eq!(to_alternating_case(""), "");
    }

    #[test]
    fn test_inverse_case() {
        assert_eq!(to_inverse_case("Hello World"), "hELLO wORLD");
        assert_eq!(to_inverse_case("JavaScript"), "jAVAsCRIPT");
        assert_eq!(to_inverse_case("a1!"), "A1!");
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse_string("hello"), "olleh");
        assert_eq!(reverse_string("JavaScript"), "tpircSavaJ");
        assert_eq!(reverse_string("añb"), "bña");
    }

    #[test]
    fn test_leet_speak() {
        assert_eq!(to_leet_speak("hello world"), "h3ll0 w0rld");
        assert_eq!(to_leet_speak("JavaScript is cool"), "j4v45cr1p7 15 c00l");
        assert_eq!(to_leet_speak("BIG"), "819");
    }

    #[test]
    fn test_shuffle_preserves_characters() {
        let mut rng = StdRng::seed_from_u64(7);
        let shuffled = shuffle_string_with("hello", &mut rng);
        assert_eq!(shuffled.chars().count(), 5);
        assert_eq!(sorted(&shuffled), sorted("hello"));
    }

    #[test]
    fn test_shuffle_is_deterministic_for_a_seed() {
        let a = shuffle_string_with("abcdefghij", &mut StdRng::seed_from_u64(42));
        let b = shuffle_string_with("abcdefghij", &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_changes_order() {
        let original = "hello";
        let changed = (0..10).any(|_| shuffle_string(original) != original);
        assert!(changed);
    }

    #[test]
    fn test_shuffle_short_inputs() {
        assert_eq!(shuffle_string(""), "");
        assert_eq!(shuffle_string("x"), "x");
    }
}
