//! Query-aware excerpt windowing
//!
//! Every dialect renders excerpts the same way: render to plain text first,
//! then hand the result to [`build_excerpt`]. The window is measured in
//! extended grapheme clusters so multi-byte glyphs count as one displayed
//! unit, and is snapped to word boundaries where a boundary exists inside
//! the budget.

use unicode_segmentation::UnicodeSegmentation;

/// Excerpt sizing knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcerptRules {
    /// Window size in grapheme clusters
    pub max_length: usize,
}

impl Default for ExcerptRules {
    fn default() -> Self {
        ExcerptRules { max_length: 325 }
    }
}

/// Build an excerpt of `text`, biased toward `query` when it occurs.
///
/// Whitespace runs are collapsed to single spaces before windowing. When
/// the collapsed text fits the budget it is returned whole. Otherwise a
/// window is cut: around the first case-insensitive occurrence of `query`
/// when one exists, from the front when not. Trimmed edges are marked
/// with an ellipsis.
pub fn build_excerpt(text: &str, query: Option<&str>, rules: &ExcerptRules) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    let graphemes: Vec<&str> = collapsed.graphemes(true).collect();
    let total = graphemes.len();
    let max = rules.max_length.max(1);

    if total <= max {
        return collapsed;
    }

    let hit = query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .and_then(|q| find_case_insensitive(&graphemes, q));

    let (start, end) = match hit {
        Some((match_start, match_len)) => {
            let lead = max.saturating_sub(match_len) / 2;
            let mut start = match_start.saturating_sub(lead).min(total - max);
            // Snap forward to a word boundary, but never past the match.
            while start > 0 && start < match_start && graphemes[start - 1] != " " {
                start += 1;
            }
            let window_end = (start + max).min(total);
            let match_end = (match_start + match_len).min(window_end);
            let end = if window_end == total {
                total
            } else {
                (match_end..=window_end)
                    .rev()
                    .find(|&i| graphemes[i] == " ")
                    .unwrap_or(window_end)
            };
            (start, end)
        }
        None => {
            let end = (max / 2..=max)
                .rev()
                .find(|&i| graphemes[i] == " ")
                .unwrap_or(max);
            (0, end)
        }
    };

    let mut excerpt = String::new();
    if start > 0 {
        excerpt.push('…');
    }
    excerpt.push_str(graphemes[start..end].concat().trim());
    if end < total {
        excerpt.push('…');
    }
    excerpt
}

/// Locate `needle` in the grapheme sequence, case-insensitively.
///
/// Returns the grapheme index of the first match and its length in
/// graphemes.
fn find_case_insensitive(graphemes: &[&str], needle: &str) -> Option<(usize, usize)> {
    let needle = needle.to_lowercase();

    for start in 0..graphemes.len() {
        let mut candidate = String::new();
        let mut len = 0;
        while candidate.len() < needle.len() && start + len < graphemes.len() {
            candidate.push_str(&graphemes[start + len].to_lowercase());
            len += 1;
        }
        if candidate == needle {
            return Some((start, len));
        }
    }
    None
}
