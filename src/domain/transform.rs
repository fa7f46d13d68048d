//! The text transformation at the heart of the plugin.

use super::error::Result;
use super::variant::{lookup, ClapVariant};

/// Trims `input`, replaces every space with the selected glyph and optionally
/// upper-cases the result.
///
/// Only U+0020 is replaced. Other interior whitespace (tabs, newlines) is kept.
/// Upper-casing uses Rust's locale-independent Unicode mapping, so glyphs pass
/// through unchanged.
///
/// # Errors
///
/// Returns [`ClapperError::VariantOutOfRange`](super::ClapperError::VariantOutOfRange)
/// if `variant_index` is not a valid catalog position.
///
/// # Examples
///
/// ```
/// use clapper::domain::{transform, CATALOG};
///
/// assert_eq!(transform("hello world", 0, false, &CATALOG)?, "hello👏world");
/// assert_eq!(transform("hi there", 5, true, &CATALOG)?, "HI👏🏿THERE");
/// # Ok::<(), clapper::ClapperError>(())
/// ```
pub fn transform(
    input: &str,
    variant_index: usize,
    all_caps: bool,
    catalog: &[ClapVariant],
) -> Result<String> {
    let glyph = lookup(catalog, variant_index)?.glyph;

    let replaced = input.trim().replace(' ', glyph);

    if all_caps {
        Ok(replaced.to_uppercase())
    } else {
        Ok(replaced)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClapperError, CATALOG};
    use proptest::prelude::*;

    #[test]
    fn test_replaces_space_with_normal_glyph() {
        assert_eq!(
            transform("hello world", 0, false, &CATALOG).unwrap(),
            "hello👏world"
        );
    }

    #[test]
    fn test_dark_variant_uppercased() {
        assert_eq!(
            transform("hi there", 5, true, &CATALOG).unwrap(),
            "HI👏🏿THERE"
        );
    }

    #[test]
    fn test_trims_before_replacing() {
        assert_eq!(
            transform("  make it  loud \n", 3, false, &CATALOG).unwrap(),
            "make👏🏽it👏🏽👏🏽loud"
        );
    }

    #[test]
    fn test_whitespace_only_yields_empty() {
        assert_eq!(transform("   ", 2, false, &CATALOG).unwrap(), "");
        assert_eq!(transform("", 0, true, &CATALOG).unwrap(), "");
    }

    #[test]
    fn test_only_ascii_space_is_replaced() {
        assert_eq!(
            transform("a\tb c", 0, false, &CATALOG).unwrap(),
            "a\tb👏c"
        );
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let err = transform("hello world", 6, false, &CATALOG).unwrap_err();
        assert!(matches!(
            err,
            ClapperError::VariantOutOfRange { index: 6, len: 6 }
        ));
    }

    #[test]
    fn test_empty_catalog_rejects_everything() {
        assert!(transform("", 0, false, &[]).is_err());
    }

    proptest! {
        #[test]
        fn prop_every_space_becomes_glyph(s in "[a-z ]{0,40}", i in 0usize..6) {
            let out = transform(&s, i, false, &CATALOG).unwrap();
            let trimmed = s.trim();
            prop_assert!(!out.contains(' '));
            prop_assert_eq!(
                out.matches(CATALOG[i].glyph).count(),
                trimmed.matches(' ').count()
            );
            prop_assert_eq!(out.replace(CATALOG[i].glyph, " "), trimmed);
        }

        #[test]
        fn prop_trim_is_idempotent(s in "\\PC{0,40}", i in 0usize..6, caps in any::<bool>()) {
            prop_assert_eq!(
                transform(&s, i, caps, &CATALOG).unwrap(),
                transform(s.trim(), i, caps, &CATALOG).unwrap()
            );
        }

        #[test]
        fn prop_uppercase_twice_equals_once(s in "[a-zA-Z0-9 ,.!?]{0,40}", i in 0usize..6) {
            let once = transform(&s, i, true, &CATALOG).unwrap();
            let twice = transform(&once, i, true, &CATALOG).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_out_of_range_always_errors(s in "\\PC{0,20}", i in 6usize..1000) {
            prop_assert!(transform(&s, i, false, &CATALOG).is_err());
        }
    }
}
