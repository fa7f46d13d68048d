//! Clap emoji variants and the fixed catalog.
//!
//! The catalog is a plain constant table. Index order is part of the plugin's
//! contract: configuration and the `1`-`6` shortcuts address variants by position.
//! Some fonts draw two skin tones identically; the code points still differ and
//! are kept exactly as listed.

use super::error::{ClapperError, Result};

/// One named clap emoji option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClapVariant {
    /// Human-readable name, e.g. `"Medium-Dark"`.
    pub name: &'static str,
    /// The emoji itself, including the skin-tone modifier if any.
    pub glyph: &'static str,
}

impl ClapVariant {
    /// Label used by the variant picker, e.g. `"👏🏽 Medium"`.
    #[must_use]
    pub fn display_text(&self) -> String {
        format!("{} {}", self.glyph, self.name)
    }
}

/// All clap variants, in picker order.
pub const CATALOG: [ClapVariant; 6] = [
    ClapVariant {
        name: "Normal",
        glyph: "\u{1F44F}",
    },
    ClapVariant {
        name: "Light",
        glyph: "\u{1F44F}\u{1F3FB}",
    },
    ClapVariant {
        name: "Medium-Light",
        glyph: "\u{1F44F}\u{1F3FC}",
    },
    ClapVariant {
        name: "Medium",
        glyph: "\u{1F44F}\u{1F3FD}",
    },
    ClapVariant {
        name: "Medium-Dark",
        glyph: "\u{1F44F}\u{1F3FE}",
    },
    ClapVariant {
        name: "Dark",
        glyph: "\u{1F44F}\u{1F3FF}",
    },
];

/// Returns the catalog entry at `index`.
///
/// # Errors
///
/// Returns [`ClapperError::VariantOutOfRange`] if `index >= CATALOG.len()`.
pub fn variant(index: usize) -> Result<&'static ClapVariant> {
    lookup(&CATALOG, index)
}

/// Returns `catalog[index]` or an out-of-range error.
pub(crate) fn lookup(catalog: &[ClapVariant], index: usize) -> Result<&ClapVariant> {
    catalog.get(index).ok_or(ClapperError::VariantOutOfRange {
        index,
        len: catalog.len(),
    })
}

/// Finds a variant's index by name, ignoring ASCII case.
///
/// ```
/// use clapper::domain::variant::find_by_name;
///
/// assert_eq!(find_by_name("medium-dark"), Some(4));
/// assert_eq!(find_by_name("purple"), None);
/// ```
#[must_use]
pub fn find_by_name(name: &str) -> Option<usize> {
    let name = name.trim();
    CATALOG
        .iter()
        .position(|v| v.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_names() {
        let names: Vec<&str> = CATALOG.iter().map(|v| v.name).collect();
        assert_eq!(
            names,
            ["Normal", "Light", "Medium-Light", "Medium", "Medium-Dark", "Dark"]
        );
    }

    #[test]
    fn test_glyphs_are_distinct_code_points() {
        assert_eq!(CATALOG[0].glyph, "👏");
        assert_eq!(CATALOG[1].glyph, "👏🏻");
        assert_eq!(CATALOG[2].glyph, "👏🏼");
        assert_eq!(CATALOG[3].glyph, "👏🏽");
        assert_eq!(CATALOG[4].glyph, "👏🏾");
        assert_eq!(CATALOG[5].glyph, "👏🏿");

        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.glyph, b.glyph);
            }
        }
    }

    #[test]
    fn test_variant_lookup() {
        assert_eq!(variant(3).unwrap().name, "Medium");
        let err = variant(6).unwrap_err();
        assert!(matches!(
            err,
            ClapperError::VariantOutOfRange { index: 6, len: 6 }
        ));
    }

    #[test]
    fn test_display_text() {
        assert_eq!(CATALOG[5].display_text(), "👏🏿 Dark");
    }

    #[test]
    fn test_find_by_name_is_case_insensitive() {
        assert_eq!(find_by_name("Normal"), Some(0));
        assert_eq!(find_by_name("  DARK "), Some(5));
        assert_eq!(find_by_name("medium-light"), Some(2));
        assert_eq!(find_by_name(""), None);
    }
}
