//! Fuzzy search over the tool registry.

use nucleo_matcher::{Config, Matcher, Utf32Str};

use crate::core::catalog::ToolInfo;

/// Fuzzy filters tools by name using the nucleo matcher.
///
/// Returns tools sorted by match quality (best matches first). Empty
/// queries return the registry in catalog order with a score of 0, so the
/// sidebar keeps its grouped layout until the user actually types.
///
/// Reuses one haystack buffer across tools to minimize allocations.
pub fn fuzzy_filter_tools<'a>(
    tools: impl Iterator<Item = &'a ToolInfo>,
    query: &str,
) -> Vec<(&'a ToolInfo, u16)> {
    if query.trim().is_empty() {
        return tools.map(|t| (t, 0)).collect();
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let query_lowercase = query.to_lowercase();
    let mut needle_buf = Vec::new();
    let needle = Utf32Str::new(&query_lowercase, &mut needle_buf);

    let mut haystack_buf = Vec::new();

    let mut results: Vec<_> = tools
        .filter_map(|tool| {
            let name_lowercase = tool.name.to_lowercase();
            haystack_buf.clear();
            let haystack = Utf32Str::new(&name_lowercase, &mut haystack_buf);
            matcher
                .fuzzy_match(haystack, needle)
                .map(|score| (tool, score))
        })
        .collect();

    results.sort_unstable_by(|a, b| b.1.cmp(&a.1));
    results
}
