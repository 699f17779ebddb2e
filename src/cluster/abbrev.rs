//! Lossy cluster name abbreviation for constrained display surfaces.

use std::sync::LazyLock;

use regex::Regex;

/// Maximal runs of letters or digits; everything else separates segments.
static SEGMENTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z]+|[0-9]+").unwrap());

/// Shorten a cluster name to at most three characters, based on the number
/// of letter/digit segments it decomposes into.
///
/// Lossy by design: distinct names may collapse to the same abbreviation.
/// Deterministic and total for any input.
///
/// ```ignore
/// abbreviate_cluster_name("local")    // => "lcl"
/// abbreviate_cluster_name("my-biz-cluster1") // => "mb1"
/// ```
pub fn abbreviate_cluster_name(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    if input.len() <= 3 {
        return input.to_string();
    }

    let segments: Vec<&str> = SEGMENTS.find_iter(input).map(|m| m.as_str()).collect();

    match segments.as_slice() {
        // Only separators, nothing to abbreviate.
        [] => String::new(),
        // Single word: first, middle and last character. Integer division
        // keeps the middle index in range even for one-character words.
        [word] => {
            let chars: Vec<char> = word.chars().collect();
            format!(
                "{}{}{}",
                chars[0],
                chars[chars.len() / 2],
                chars[chars.len() - 1]
            )
        }
        // Two words: prefer pulling two characters from the first word so a
        // one-character first word does not collapse into the second word's
        // first character twice.
        [first, second] => {
            let first: Vec<char> = first.chars().collect();
            let second: Vec<char> = second.chars().collect();
            let middle = if first.len() >= 2 {
                first[first.len() - 1]
            } else {
                second[0]
            };
            format!("{}{}{}", first[0], middle, second[second.len() - 1])
        }
        // Three or more: first character of the first two words plus the
        // last character of the last word; words in between are ignored.
        [first, second, .., last] => {
            let first = first.chars().next().unwrap_or_default();
            let second = second.chars().next().unwrap_or_default();
            let last = last.chars().last().unwrap_or_default();
            format!("{first}{second}{last}")
        }
    }
}
