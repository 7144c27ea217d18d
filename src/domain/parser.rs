//! Category parser for raw completion text.
//!
//! The completion service is asked (in the prompt itself) to answer with
//! one block per category, blocks separated by a blank line, the first line
//! of a block being the category label with a trailing colon and every
//! following line a `1.`-style numbered name. The service nominally follows
//! that grammar but is not guaranteed to; this parser therefore never fails.
//! Malformed input degrades structurally — a merged or missing category, or
//! a single catch-all pseudo-category — but never a panic or an error.

use super::CategoryMap;

/// Parses raw completion text into an ordered category -> names mapping.
///
/// Structural assumptions, in order of application:
/// 1. Blocks are separated by blank lines (two consecutive newlines).
/// 2. The first line of a block, minus a trailing colon and surrounding
///    whitespace, is the category label.
/// 3. Every remaining line, minus a leading `<digits>.` ordinal marker and
///    surrounding whitespace, is a candidate name; lines that end up empty
///    are discarded.
///
/// Given identical input the output is byte-for-byte identical: block order
/// and in-block line order are preserved. A label-only block yields that
/// category mapped to an empty list, not an absent key.
pub fn parse(raw: &str) -> CategoryMap {
    let normalized = raw.replace("\r\n", "\n");
    let mut map = CategoryMap::new();

    for block in normalized.split("\n\n") {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }

        let mut lines = block.lines();
        let label = match lines.next() {
            Some(first) => first.trim().trim_end_matches(':').trim(),
            None => continue,
        };
        if label.is_empty() {
            continue;
        }

        let names = lines
            .map(strip_ordinal)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>();

        map.append(label, names);
    }

    map
}

/// Strips a leading `<digits>.<optional space>` marker and surrounding
/// whitespace. Lines without the marker are only trimmed.
fn strip_ordinal(line: &str) -> &str {
    let trimmed = line.trim();
    let digits = trimmed
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits > 0 {
        if let Some(rest) = trimmed[digits..].strip_prefix('.') {
            return rest.trim();
        }
    }
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prompt::render_category_map;
    use proptest::prelude::*;

    #[test]
    fn parses_well_formed_completion() {
        let raw = "Literal Names:\n1. CodeCheck\n2. DevMeter\n\nAnimal Names:\n1. Finch\n2. Night Owl\n";
        let parsed = parse(raw);
        assert_eq!(
            parsed.get("Literal Names"),
            Some(&["CodeCheck".to_string(), "DevMeter".to_string()][..])
        );
        assert_eq!(
            parsed.get("Animal Names"),
            Some(&["Finch".to_string(), "Night Owl".to_string()][..])
        );
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn label_only_block_yields_empty_list() {
        let parsed = parse("Symbolic Names:\n\nAnimal Names:\n1. Finch");
        assert_eq!(parsed.get("Symbolic Names"), Some(&[][..]));
        assert_eq!(parsed.get("Animal Names"), Some(&["Finch".to_string()][..]));
    }

    #[test]
    fn no_blank_lines_yields_single_pseudo_category() {
        let parsed = parse("Names:\n1. Finch\n2. Owl\n3. Lynx");
        assert_eq!(parsed.len(), 1);
        assert_eq!(
            parsed.get("Names"),
            Some(&["Finch".to_string(), "Owl".to_string(), "Lynx".to_string()][..])
        );
    }

    #[test]
    fn ordinal_markers_are_stripped_with_and_without_space() {
        assert_eq!(strip_ordinal("1. Finch"), "Finch");
        assert_eq!(strip_ordinal("12.Finch"), "Finch");
        assert_eq!(strip_ordinal("  3.  Finch  "), "Finch");
        // No marker: only trimmed.
        assert_eq!(strip_ordinal("- Finch"), "- Finch");
        // Digits without a dot are part of the name.
        assert_eq!(strip_ordinal("7 Seas"), "7 Seas");
    }

    #[test]
    fn lines_empty_after_stripping_are_discarded() {
        let parsed = parse("Animal Names:\n1.\n2. Finch\n   \n");
        assert_eq!(parsed.get("Animal Names"), Some(&["Finch".to_string()][..]));
    }

    #[test]
    fn crlf_input_parses_like_lf() {
        let parsed = parse("Animal Names:\r\n1. Finch\r\n\r\nPlayful Names:\r\n1. Zippy\r\n");
        assert_eq!(parsed.get("Animal Names"), Some(&["Finch".to_string()][..]));
        assert_eq!(parsed.get("Playful Names"), Some(&["Zippy".to_string()][..]));
    }

    #[test]
    fn empty_and_whitespace_input_yield_empty_map() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n  \n\n").is_empty());
    }

    #[test]
    fn parsing_is_deterministic() {
        let raw = "Abstract Names:\n1. Meridian\n2. Vanta\n\nPlayful Names:\n1. Zippy\n";
        assert_eq!(parse(raw), parse(raw));
    }

    // Labels and names the output grammar can carry losslessly: non-empty,
    // single-line, no leading/trailing whitespace, no trailing colon on
    // labels, no leading ordinal marker on names.
    fn label_strategy() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Za-z][A-Za-z ]{0,20}[A-Za-z]").expect("valid regex")
    }

    fn name_strategy() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Za-z][A-Za-z0-9 ]{0,18}[A-Za-z0-9]")
            .expect("valid regex")
    }

    proptest! {
        #[test]
        fn grammar_round_trips(
            categories in proptest::collection::vec(
                (label_strategy(), proptest::collection::vec(name_strategy(), 1..6)),
                1..5,
            )
        ) {
            // Deduplicate labels: the map merges duplicate keys by design,
            // which would make the comparison vacuous.
            let mut seen = std::collections::HashSet::new();
            let categories: Vec<_> = categories
                .into_iter()
                .filter(|(label, _)| seen.insert(label.clone()))
                .collect();

            let map: CategoryMap = categories.into_iter().collect();
            let rendered = render_category_map(&map);
            prop_assert_eq!(parse(&rendered), map);
        }
    }
}
