//! Sequential human-readable codes for symptoms (`G01`) and diseases (`P01`).

use std::cmp::Ordering;

pub const SYMPTOM_PREFIX: char = 'G';
pub const DISEASE_PREFIX: char = 'P';

/// Returns the code following `last`. Missing or malformed codes restart at 1.
pub fn next_code(prefix: char, last: Option<&str>) -> String {
    let next = last.and_then(|code| sequence_of(prefix, code)).unwrap_or(0) + 1;
    format!("{}{:02}", prefix, next)
}

/// Picks the highest code among `codes` by numeric suffix.
pub fn highest_code<'a, I>(prefix: char, codes: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    codes.into_iter().max_by(|a, b| compare_codes(prefix, a, b))
}

fn sequence_of(prefix: char, code: &str) -> Option<u32> {
    code.strip_prefix(prefix)?.parse().ok()
}

fn compare_codes(prefix: char, a: &str, b: &str) -> Ordering {
    match (sequence_of(prefix, a), sequence_of(prefix, b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_code() {
        assert_eq!(next_code(SYMPTOM_PREFIX, None), "G01");
        assert_eq!(next_code(DISEASE_PREFIX, None), "P01");
    }

    #[test]
    fn test_increments_and_pads() {
        assert_eq!(next_code(SYMPTOM_PREFIX, Some("G09")), "G10");
        assert_eq!(next_code(DISEASE_PREFIX, Some("P12")), "P13");
        assert_eq!(next_code(SYMPTOM_PREFIX, Some("G99")), "G100");
    }

    #[test]
    fn test_malformed_restarts() {
        assert_eq!(next_code(SYMPTOM_PREFIX, Some("X7")), "G01");
        assert_eq!(next_code(SYMPTOM_PREFIX, Some("Gxx")), "G01");
    }

    #[test]
    fn test_highest_code_is_numeric() {
        let codes = ["G09", "G100", "G99", "bogus"];
        assert_eq!(highest_code(SYMPTOM_PREFIX, codes), Some("G100"));
        assert_eq!(highest_code(SYMPTOM_PREFIX, std::iter::empty()), None);
    }
}
