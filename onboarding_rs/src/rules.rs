//! The field validators: pure, stateless, one function per constraint
//! family. A form-level pass runs every applicable rule and unions the
//! failures; nothing here short-circuits across fields.

use std::collections::BTreeSet;

use crate::errors::ErrorKind;

/// Upload cap for the profile photo, in bytes (5 MiB).
pub const MAX_PHOTO_BYTES: u64 = 5 * 1024 * 1024;

/// MIME types the photo input accepts.
pub const ACCEPTED_PHOTO_MIME: [&str; 3] = ["image/png", "image/jpeg", "image/jpg"];

/// Required text: the trimmed value must be non-empty.
pub fn required_text(value: &str) -> Result<(), ErrorKind> {
    if value.trim().is_empty() {
        Err(ErrorKind::MissingField)
    } else {
        Ok(())
    }
}

/// Email shape: `local@domain.tld`. Local and domain parts are non-empty
/// runs without whitespace or extra `@`, and the domain contains at least
/// one dot that is neither its first nor its last character.
pub fn email_format(value: &str) -> Result<(), ErrorKind> {
    let Some((local, domain)) = value.split_once('@') else {
        return Err(ErrorKind::InvalidFormat);
    };
    let part_ok =
        |part: &str| !part.is_empty() && !part.contains('@') && !part.contains(char::is_whitespace);
    if !part_ok(local) || !part_ok(domain) {
        return Err(ErrorKind::InvalidFormat);
    }
    let interior_dot = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + c.len_utf8() < domain.len());
    if interior_dot { Ok(()) } else { Err(ErrorKind::InvalidFormat) }
}

/// Phone shape, only checked when the optional field is non-empty:
/// an optional leading `+`, then one or more digits, whitespace, hyphens
/// or parentheses.
pub fn phone_format(value: &str) -> Result<(), ErrorKind> {
    let rest = value.strip_prefix('+').unwrap_or(value);
    let allowed =
        |c: char| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')');
    if !rest.is_empty() && rest.chars().all(allowed) && !rest.contains('+') {
        Ok(())
    } else {
        Err(ErrorKind::InvalidFormat)
    }
}

/// Required choice: some option must be picked.
pub fn required_choice<T>(value: Option<&T>) -> Result<(), ErrorKind> {
    if value.is_some() {
        Ok(())
    } else {
        Err(ErrorKind::MissingField)
    }
}

/// Required multi-select: the set must be non-empty.
pub fn non_empty_selection<T>(set: &BTreeSet<T>) -> Result<(), ErrorKind> {
    if set.is_empty() {
        Err(ErrorKind::MissingSelection)
    } else {
        Ok(())
    }
}

/// Profile photo constraints: size cap first, then MIME allowlist.
pub fn photo_constraints(size: u64, mime: &str) -> Result<(), ErrorKind> {
    if size > MAX_PHOTO_BYTES {
        return Err(ErrorKind::FileTooLarge);
    }
    if ACCEPTED_PHOTO_MIME.contains(&mime) {
        Ok(())
    } else {
        Err(ErrorKind::UnsupportedType)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_rejects_whitespace_only() {
        assert_eq!(required_text(""), Err(ErrorKind::MissingField));
        assert_eq!(required_text("   \t"), Err(ErrorKind::MissingField));
        assert_eq!(required_text("Jane"), Ok(()));
        assert_eq!(required_text("  Jane  "), Ok(()));
    }

    #[test]
    fn email_format_accepts_plain_addresses() {
        assert_eq!(email_format("a@b.com"), Ok(()));
        assert_eq!(email_format("jane.doe+tag@sub.example.co.in"), Ok(()));
    }

    #[test]
    fn email_format_rejects_malformed_addresses() {
        for bad in [
            "",
            "plain",
            "@b.com",
            "a@",
            "a@b",
            "a@b.",
            "a@.com",
            "a b@c.com",
            "a@b c.com",
            "a@@b.com",
            "a@b@c.com",
        ] {
            assert_eq!(email_format(bad), Err(ErrorKind::InvalidFormat), "{bad:?}");
        }
    }

    #[test]
    fn email_format_allows_interior_dot_even_after_leading_dot() {
        // The domain charset admits dots anywhere; only first/last position
        // is rejected, matching the deployed check.
        assert_eq!(email_format("a@.b.c"), Ok(()));
        assert_eq!(email_format("a@b.c."), Ok(()));
        assert_eq!(email_format("a@.c"), Err(ErrorKind::InvalidFormat));
        assert_eq!(email_format("a@c."), Err(ErrorKind::InvalidFormat));
    }

    #[test]
    fn phone_format_accepts_common_shapes() {
        for good in ["+91 1234567890", "1234567890", "(040) 123-4567", "12 34"] {
            assert_eq!(phone_format(good), Ok(()), "{good:?}");
        }
    }

    #[test]
    fn phone_format_rejects_letters_and_stray_plus() {
        for bad in ["+", "12a34", "12+34", "++91", "tel:123"] {
            assert_eq!(phone_format(bad), Err(ErrorKind::InvalidFormat), "{bad:?}");
        }
    }

    #[test]
    fn selection_rules() {
        assert_eq!(required_choice::<u8>(None), Err(ErrorKind::MissingField));
        assert_eq!(required_choice(Some(&1u8)), Ok(()));

        let empty: BTreeSet<u8> = BTreeSet::new();
        assert_eq!(non_empty_selection(&empty), Err(ErrorKind::MissingSelection));
        let one: BTreeSet<u8> = [1].into();
        assert_eq!(non_empty_selection(&one), Ok(()));
    }

    #[test]
    fn photo_constraints_enforce_size_then_type() {
        // 6 MiB PNG: too large, size wins even though the type is fine.
        assert_eq!(
            photo_constraints(6 * 1024 * 1024, "image/png"),
            Err(ErrorKind::FileTooLarge)
        );
        // 1 MiB GIF: wrong type.
        assert_eq!(
            photo_constraints(1024 * 1024, "image/gif"),
            Err(ErrorKind::UnsupportedType)
        );
        // 1 MiB PNG: fine.
        assert_eq!(photo_constraints(1024 * 1024, "image/png"), Ok(()));
        // Exactly at the cap is still accepted.
        assert_eq!(photo_constraints(MAX_PHOTO_BYTES, "image/jpeg"), Ok(()));
        assert_eq!(photo_constraints(MAX_PHOTO_BYTES + 1, "image/jpeg"), Err(ErrorKind::FileTooLarge));
    }
}
