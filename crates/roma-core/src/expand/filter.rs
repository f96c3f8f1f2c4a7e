use crate::romaji::Alternative;

/// Joined spellings that read back as a typed letter followed by っ
/// ("xxtsu" is ｘっ, not っっ) and so never spell the unit.
const RESERVED_COLLISIONS: [&str; 2] = ["xxtsu", "lltsu"];

fn starts_with_any(s: &str, set: &[char]) -> bool {
    s.chars().next().is_some_and(|c| set.contains(&c))
}

/// Check one tuple of sub-symbol spellings against the join rules.
fn is_valid(tuple: &[&Alternative]) -> bool {
    match tuple.last() {
        None | Some(Alternative::Deferred) => return false,
        Some(Alternative::Literal(s)) if s == "n" => return false,
        Some(Alternative::Literal(_)) => {}
    }

    tuple.windows(2).all(|pair| match (pair[0], pair[1]) {
        // Two unresolved markers in a row cannot be told apart.
        (Alternative::Deferred, Alternative::Deferred) => false,
        // っ before a vowel or n is a doubled vowel, and before punctuation
        // there is no consonant to repeat.
        (Alternative::Deferred, Alternative::Literal(next)) => next
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() && !"aiueon".contains(c)),
        (Alternative::Literal(cur), Alternative::Literal(next)) if cur == "n" => {
            !starts_with_any(next, &['a', 'i', 'u', 'e', 'o', 'n', 'y'])
        }
        _ => true,
    })
}

/// Join a tuple into one spelling, resolving each deferred element to the
/// first letter of the element after it. Returns `None` for rejected tuples.
pub(super) fn join(tuple: &[&Alternative]) -> Option<String> {
    if !is_valid(tuple) {
        return None;
    }

    let mut joined = String::new();
    for (i, alt) in tuple.iter().enumerate() {
        match alt {
            Alternative::Literal(s) => joined.push_str(s),
            Alternative::Deferred => {
                // is_valid guarantees a literal follows.
                let next = tuple.get(i + 1).and_then(|a| a.as_literal())?;
                joined.push(next.chars().next()?);
            }
        }
    }

    if RESERVED_COLLISIONS.iter().any(|r| joined.contains(r)) {
        return None;
    }
    Some(joined)
}
