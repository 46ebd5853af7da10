//! Pure ISBN validation. Both the ten and thirteen digit forms are accepted;
//! everything here is deterministic and touches no state, so the shell can
//! (and must) validate before asking the catalog to reserve anything.

/// Strip hyphens and spaces and uppercase the rest, producing the canonical
/// form used as the catalog identity. Running it twice yields the same
/// string.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '-' | ' '))
        .collect::<String>()
        .to_uppercase()
}

/// Validate a raw ISBN string in any hyphenation or casing. Normalizes
/// first, then dispatches on length: 10 and 13 get their respective checksum
/// algorithms, anything else is rejected outright.
pub fn validate(raw: &str) -> bool {
    let isbn = normalize(raw);
    match isbn.len() {
        10 => is_valid_isbn10(isbn.as_bytes()),
        13 => is_valid_isbn13(isbn.as_bytes()),
        _ => false,
    }
}

/// ISBN-10: nine digits weighted 10 down to 2, plus a check character worth
/// its digit value or 10 for `X`. Valid when the total is divisible by 11.
fn is_valid_isbn10(isbn: &[u8]) -> bool {
    let mut sum: u32 = 0;
    for (i, &c) in isbn[..9].iter().enumerate() {
        if !c.is_ascii_digit() {
            return false;
        }
        sum += u32::from(c - b'0') * (10 - i as u32);
    }

    sum += match isbn[9] {
        b'X' => 10,
        c if c.is_ascii_digit() => u32::from(c - b'0'),
        _ => return false,
    };

    sum % 11 == 0
}

/// ISBN-13: twelve digits weighted alternately 1 and 3; the thirteenth must
/// equal `(10 - sum % 10) % 10`.
fn is_valid_isbn13(isbn: &[u8]) -> bool {
    let mut sum: u32 = 0;
    for (i, &c) in isbn[..12].iter().enumerate() {
        if !c.is_ascii_digit() {
            return false;
        }
        let digit = u32::from(c - b'0');
        sum += if i % 2 == 0 { digit } else { digit * 3 };
    }

    if !isbn[12].is_ascii_digit() {
        return false;
    }
    let check = (10 - sum % 10) % 10;
    check == u32::from(isbn[12] - b'0')
}

#[cfg(test)]
mod tests {
    use super::{normalize, validate};

    #[test]
    fn normalize_strips_separators_and_uppercases() {
        assert_eq!(normalize("0-9752298-0-x"), "097522980X");
        assert_eq!(normalize("978 0 306 40615 7"), "9780306406157");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize("978-0-7475-3269-9");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn accepts_valid_isbn10() {
        assert!(validate("0306406152"));
        assert!(validate("0-306-40615-2"));
        assert!(validate("0747532699"));
    }

    #[test]
    fn accepts_isbn10_with_x_check_digit() {
        assert!(validate("097522980X"));
        assert!(validate("097522980x"));
        assert!(validate("0-9752298-0-X"));
    }

    #[test]
    fn rejects_isbn10_with_altered_digit() {
        // One digit off the valid 0306406152 breaks the mod-11 checksum.
        assert!(!validate("0306406153"));
        assert!(!validate("1306406152"));
    }

    #[test]
    fn rejects_isbn10_with_misplaced_x() {
        assert!(!validate("03064X6152"));
        assert!(!validate("X306406152"));
    }

    #[test]
    fn accepts_valid_isbn13() {
        assert!(validate("9780306406157"));
        assert!(validate("978-0-7475-3269-9"));
        assert!(validate("9781861972712"));
    }

    #[test]
    fn rejects_isbn13_with_altered_digit() {
        assert!(!validate("9780306406156"));
        assert!(!validate("9780306306157"));
    }

    #[test]
    fn rejects_isbn13_with_letters() {
        assert!(!validate("978030640615X"));
        assert!(!validate("97803064061A7"));
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert!(!validate(""));
        assert!(!validate("030640615"));
        assert!(!validate("03064061521"));
        assert!(!validate("97803064061570"));
    }
}
