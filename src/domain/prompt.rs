//! Prompt composer.
//!
//! Deterministically renders a [`BrandFramework`] plus the current
//! [`RefinementState`] into the single text prompt sent to the completion
//! service. Pure and total: no randomness, no clock, and no failure path —
//! a degenerate framework (empty industry, empty lists) produces a degraded
//! prompt, never an error.
//!
//! The prompt carries its own output grammar because the parser has no
//! fallback: the literal block format requested here is the whole contract
//! between composer and parser.

use std::fmt::Write as _;

use super::{BrandFramework, CategoryMap, RefinementState};

/// Names requested per category on the first round.
pub const INITIAL_BATCH_SIZE: usize = 10;

/// Names requested per existing category on refinement rounds.
pub const REFINEMENT_BATCH_SIZE: usize = 3;

/// The eight categories requested on the first round, with the guidance the
/// completion service gets for each.
const REQUESTED_CATEGORIES: [(&str, &str); 8] = [
    (
        "Literal Names",
        "Names that directly describe what the company does or its industry.",
    ),
    (
        "Descriptive Names",
        "Names that suggest the company's benefits or attributes.",
    ),
    (
        "Abstract Names",
        "Creative or metaphorical names that capture the essence of the brand.",
    ),
    (
        "Combination Names",
        "Names that combine two or more words to create a new meaning.",
    ),
    (
        "Playful Names",
        "Names that are funny, quirky, or have a playful tone.",
    ),
    (
        "Ambiguous Names",
        "Names that can be interpreted in multiple ways, leaving the audience to decide the meaning.",
    ),
    (
        "Symbolic Names",
        "Names that use symbols, icons, or emojis to represent the company or its industry.",
    ),
    (
        "Animal Names",
        "Names that use animals to represent the company or its industry.",
    ),
];

/// Brand-coaching guidance that anchors each framework section for the
/// completion service. Only sent on the first round; refinement rounds lean
/// on the serialized prior output instead.
const SECTION_GUIDANCE: &str = "\
Attributes of a brand are more practical than the values and focus on things that will make the product better than competitors. Look for attributes that work as a promise to customers. Example: Uniqlo products promise you understated value.

Key Messages are the most prosaic part of the communications framework. Key messages convey your brand attributes in language that meets consumers where they are now and gently leads them to where you want them to be. These key messages are much less sexy than meaning-of-life marketing but they convey a much more practical benefit to a cynical audience.

Values of a brand are framed in terms of the things that the tribe of the brand believes in: the owner, future employees, distributors, customers and suppliers. Only include values that are different from competitors; integrity, innovation and teamwork are just feel-good values. Example: Waitrose cares about \"calm, refined ambience.\"

Stories are the most emotional part of the communications framework. They should be real stories that the owner, future employees, distributors, customers and suppliers would tell.

Vision for a brand needs to be framed in terms of the difference it makes in customers' lives. Aim for a short punchy statement about why the brand exists. Example: BMW's essence is \"driving excellence.\"

Tagline is where the brand vision comes to life. It should convey what the company does in simple enough terms that someone instantly knows whether it sells what they're looking for. Example: Nike's tagline is \"Just do it.\"";

/// Composes the prompt for one generation round.
///
/// Identical `framework` and `state` always yield byte-identical output.
/// The industry is named at both the start and the end of the prompt as an
/// explicit, repeated relevance anchor.
pub fn compose(framework: &BrandFramework, state: &RefinementState) -> String {
    let mut out = String::new();

    if state.generate_more() {
        out.push_str(
            "Generate additional company names based on the following communications framework:\n\n",
        );
    } else {
        out.push_str(
            "Generate company names based on the following communications framework:\n\n",
        );
    }

    let _ = writeln!(out, "Industry: {}\n", framework.industry);

    for (label, items) in framework.sections() {
        push_list_section(&mut out, label, items);
    }

    push_list_section(
        &mut out,
        "Excluded Words (do not use these words, or obvious variations of them, in any name)",
        &framework.excluded_words,
    );
    push_list_section(
        &mut out,
        "Interesting Words (where natural, favour names that play on these words)",
        &framework.interesting_words,
    );

    if state.generate_more() {
        push_refinement_request(&mut out, framework, state);
    } else {
        if !state.rejected_names().is_empty() {
            push_list_section(
                &mut out,
                "Rejected Names (never suggest these names)",
                state.rejected_names(),
            );
        }
        push_initial_request(&mut out, framework);
    }

    out
}

/// Renders a category map in the exact output grammar the parser expects:
/// one block per category, `<Label>:` then `1.`-numbered names, blocks
/// separated by a blank line. Also used to serialize prior output back into
/// refinement prompts.
pub fn render_category_map(map: &CategoryMap) -> String {
    let mut blocks = Vec::with_capacity(map.len());
    for (label, names) in map.iter() {
        let mut block = format!("{}:", label);
        for (i, name) in names.iter().enumerate() {
            let _ = write!(block, "\n{}. {}", i + 1, name);
        }
        blocks.push(block);
    }
    blocks.join("\n\n")
}

/// Renders `"<Label>:\n- item\n- item"` followed by a blank line. Entries
/// that are empty after trimming are dropped; an empty list still renders
/// the labeled header so every section is always present.
fn push_list_section(out: &mut String, label: &str, items: &[String]) {
    out.push_str(label);
    out.push_str(":\n");
    for item in items.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        let _ = writeln!(out, "- {}", item);
    }
    out.push('\n');
}

fn push_initial_request(out: &mut String, framework: &BrandFramework) {
    out.push_str(SECTION_GUIDANCE);
    out.push_str("\n\n");

    let _ = writeln!(
        out,
        "Please provide {} lists of {} company names each, categorized as follows:\n",
        REQUESTED_CATEGORIES.len(),
        INITIAL_BATCH_SIZE
    );
    for (i, (label, description)) in REQUESTED_CATEGORIES.iter().enumerate() {
        let _ = writeln!(out, "{}. {}: {}", i + 1, label, description);
    }

    out.push_str(
        "\nFormat your response exactly as follows, separating each category block with a blank line:\n\n",
    );
    for (label, _) in REQUESTED_CATEGORIES.iter() {
        let _ = writeln!(out, "{}:\n1. [Name]\n2. [Name]\n...\n", label);
    }

    let _ = write!(
        out,
        "Ensure all names are unique and relevant to the {} industry.",
        framework.industry
    );
}

fn push_refinement_request(out: &mut String, framework: &BrandFramework, state: &RefinementState) {
    out.push_str("You have already suggested the following names:\n\n");
    out.push_str(&render_category_map(state.existing_names()));
    out.push_str("\n\n");

    push_rejected_section(out, state.rejected_names());

    let _ = writeln!(
        out,
        "For each category listed above, provide {} new company names that are different from the existing names and from the rejected names.\n",
        REFINEMENT_BATCH_SIZE
    );

    out.push_str(
        "Format your response exactly as follows, separating each category block with a blank line:\n\n",
    );
    out.push_str("[Category Name]:\n1. [Name]\n2. [Name]\n3. [Name]\n\n");

    let _ = write!(
        out,
        "Ensure all names are unique and relevant to the {} industry.",
        framework.industry
    );
}

fn push_rejected_section(out: &mut String, rejected: &[String]) {
    out.push_str("Rejected Names (never suggest these names again):\n");
    for name in rejected.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        let _ = writeln!(out, "- {}", name);
    }
    out.push('\n');
}
