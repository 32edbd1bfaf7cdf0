//! CONSTANT_CASE name normalization
//!
//! Single-pass character scan rather than a chain of regex replacements, so
//! the boundary rules are explicit and engine-independent.

/// Convert an identifier-like string into canonical upper-snake-case.
///
/// Boundary rules, in effect simultaneously over the trimmed input:
/// - a lowercase letter or digit followed by an uppercase letter marks a
///   camelCase boundary (`fooBar` -> `FOO_BAR`);
/// - an uppercase letter followed by uppercase-then-lowercase marks an
///   acronym-to-word boundary (`FoObARr` -> `FO_OB_A_RR`);
/// - every literal `_` or `-` is a boundary of its own.
///
/// Boundaries are never collapsed: runs of delimiters in the input map to
/// runs of underscores in the output, and leading delimiters survive
/// (`--foo--bar` -> `__FOO__BAR`). Characters outside ASCII alphanumerics
/// and the delimiters are dropped, but still separate their neighbors when
/// the case-boundary rules look at adjacency, so `foo.Bar` -> `FOOBAR`.
///
/// Total over any input; the output alphabet is `A-Z`, `0-9` and `_`.
#[must_use]
pub fn to_constant_case(input: &str) -> String {
    let chars: Vec<char> = input.trim().chars().collect();
    let mut out = String::with_capacity(chars.len());

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' {
            out.push('_');
            continue;
        }

        if !c.is_ascii_alphanumeric() {
            continue;
        }

        if i > 0 {
            let prev = chars[i - 1];
            let camel = (prev.is_ascii_lowercase() || prev.is_ascii_digit())
                && c.is_ascii_uppercase();
            let acronym = prev.is_ascii_uppercase()
                && c.is_ascii_uppercase()
                && chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());

            if camel || acronym {
                out.push('_');
            }
        }

        out.push(c.to_ascii_uppercase());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASES: &[(&str, &str)] = &[
        ("fooBar", "FOO_BAR"),
        ("foo________bar", "FOO________BAR"),
        ("FOO_BAR", "FOO_BAR"),
        ("FoObARr", "FO_OB_A_RR"),
        ("foo--ba-r", "FOO__BA_R"),
        ("foo-bar", "FOO_BAR"),
        ("--foo--bar", "__FOO__BAR"),
        ("__foo_bar", "__FOO_BAR"),
    ];

    #[test]
    fn test_scenario_table() {
        for (input, expected) in CASES {
            assert_eq!(
                to_constant_case(input),
                *expected,
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn test_output_alphabet() {
        for input in ["fooBar", "héllo wörld!", "a.b/c$d", "  spaced out  "] {
            let out = to_constant_case(input);
            assert!(
                out.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_'),
                "unexpected character in {out:?}"
            );
        }
    }

    #[test]
    fn test_fixed_point_over_outputs() {
        for (input, _) in CASES {
            let once = to_constant_case(input);
            assert_eq!(to_constant_case(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(to_constant_case("  fooBar\n"), "FOO_BAR");
    }

    #[test]
    fn test_drops_punctuation_without_boundary() {
        // '.' is removed and the adjacency it broke does not become a
        // camelCase boundary
        assert_eq!(to_constant_case("foo.Bar"), "FOOBAR");
        assert_eq!(to_constant_case("a$b"), "AB");
    }

    #[test]
    fn test_digit_letter_boundary() {
        assert_eq!(to_constant_case("version2Beta"), "VERSION2_BETA");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_constant_case(""), "");
        assert_eq!(to_constant_case("   "), "");
    }
}
