//! Character search, insert, delete and naive pattern matching on strings

use super::sequence::{delete_at, insert_at};
use crate::trace::value::chars;
use crate::trace::{Listing, Outcome, Role, Shape, Trace, TraceBuilder, Value};

pub const STRING_SEARCH: Listing = Listing {
    title: "String Search",
    lines: &[
        "for i = 0 to n-1:",
        "  if s[i] == ch: return i",
        "return NOT_FOUND",
    ],
    shape: Shape::Boxes,
};

pub const STRING_INSERT: Listing = Listing {
    title: "String Insert",
    lines: &[
        "if index < 0 or index > n: invalid",
        "n = n + 1",
        "for i = n-2 down to index:",
        "  s[i+1] = s[i]",
        "s[index] = ch",
    ],
    shape: Shape::Boxes,
};

pub const STRING_DELETE: Listing = Listing {
    title: "String Delete",
    lines: &[
        "if index < 0 or index >= n: invalid",
        "for i = index to n-2:",
        "  s[i] = s[i+1]",
        "n = n - 1",
    ],
    shape: Shape::Boxes,
};

pub const PATTERN_MATCH: Listing = Listing {
    title: "Pattern Matching",
    lines: &[
        "for i = 0 to n-m:",
        "  for j = 0 to m-1:",
        "    if text[i+j] != pattern[j]: break",
        "  if j == m: return i",
        "return NOT_FOUND",
    ],
    shape: Shape::Boxes,
};

/// Find the first occurrence of `ch`, one step per compared character
pub fn string_search(text: &str, ch: char) -> Trace {
    let mut b = TraceBuilder::new(&STRING_SEARCH);
    let s = b.container("text", chars(text));

    for (i, c) in text.chars().enumerate() {
        b.point(Role::Current, s, i);
        if c == ch {
            return b.finish(
                Outcome::Found(i),
                Some(1),
                format!("Found '{}' at index {}", ch, i),
            );
        }
        b.emit(1, format!("s[{}] = '{}' is not '{}'", i, c, ch));
    }

    b.clear_pointers();
    b.finish(Outcome::NotFound, Some(2), "Character NOT found.")
}

pub fn string_insert(text: &str, index: usize, ch: char) -> Trace {
    insert_at(&STRING_INSERT, "text", chars(text), index, Value::Char(ch))
}

pub fn string_delete(text: &str, index: usize) -> Trace {
    delete_at(&STRING_DELETE, "text", chars(text), index)
}

/// Naive substring search: try every alignment, stop an alignment at its
/// first mismatching character
pub fn pattern_match(text: &str, pattern: &str) -> Trace {
    let hay: Vec<char> = text.chars().collect();
    let pat: Vec<char> = pattern.chars().collect();
    let (n, m) = (hay.len(), pat.len());

    let mut b = TraceBuilder::new(&PATTERN_MATCH);
    let t = b.container("text", chars(text));
    let p = b.container("pattern", chars(pattern));

    if m == 0 {
        return b.reject("Enter pattern to search.");
    }

    if m <= n {
        for i in 0..=n - m {
            b.clear_pointers();
            b.point(Role::I, t, i);
            b.emit(0, format!("Try alignment at index {}", i));

            let mut matched = 0;
            for j in 0..m {
                b.point(Role::Current, t, i + j);
                b.point(Role::J, p, j);
                if hay[i + j] != pat[j] {
                    b.emit(
                        2,
                        format!("'{}' != '{}', shift pattern", hay[i + j], pat[j]),
                    );
                    break;
                }
                b.emit(1, format!("text[{}] = '{}' matches pattern[{}]", i + j, pat[j], j));
                matched += 1;
            }

            if matched == m {
                b.unpoint(Role::Current);
                b.unpoint(Role::J);
                return b.finish(
                    Outcome::Found(i),
                    Some(3),
                    format!("Pattern '{}' found at index {}", pattern, i),
                );
            }
        }
    }

    b.clear_pointers();
    b.finish(Outcome::NotFound, Some(4), "Pattern NOT found.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::value::to_string;

    #[test]
    fn test_search_character() {
        let trace = string_search("HELLO", 'L');
        assert_eq!(trace.outcome(), Some(Outcome::Found(2)));
        assert_eq!(trace.len(), 3);
    }

    #[test]
    fn test_insert_and_delete() {
        let inserted = string_insert("HELLO", 1, 'A');
        let text = inserted.last().and_then(|s| s.cells("text")).map(to_string);
        assert_eq!(text.as_deref(), Some("HAELLO"));

        let deleted = string_delete("HELLO", 4);
        let text = deleted.last().and_then(|s| s.cells("text")).map(to_string);
        assert_eq!(text.as_deref(), Some("HELL"));
    }

    #[test]
    fn test_pattern_found() {
        let trace = pattern_match("ABABC", "ABC");
        assert_eq!(trace.outcome(), Some(Outcome::Found(2)));
        assert!(trace.validate().is_ok());
    }

    #[test]
    fn test_pattern_breaks_on_first_mismatch() {
        // alignment 0: A==A, B!=C -> break after two comparisons
        let trace = pattern_match("ABX", "AC");
        let alignment_zero: Vec<_> = trace
            .steps()
            .iter()
            .take_while(|s| s.pointer(Role::I) == Some(0))
            .collect();
        assert_eq!(alignment_zero.len(), 3);
        assert_eq!(trace.outcome(), Some(Outcome::NotFound));
    }

    #[test]
    fn test_pattern_longer_than_text() {
        let trace = pattern_match("AB", "ABC");
        assert_eq!(trace.len(), 1);
        assert_eq!(trace.outcome(), Some(Outcome::NotFound));
    }

    #[test]
    fn test_empty_pattern_is_invalid() {
        let trace = pattern_match("AB", "");
        assert_eq!(trace.outcome(), Some(Outcome::InvalidArgument));
    }
}
