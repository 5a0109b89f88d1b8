use rust_fuzzy_search::fuzzy_compare;

const MIN_SIMILARITY: f32 = 0.5;
const MAX_SUGGESTIONS: usize = 5;

/// Case-insensitive containment. `needle` must already be lowercased.
pub fn name_contains(name: &str, needle: &str) -> bool {
    needle.is_empty() || name.to_lowercase().contains(needle)
}

/// Names that look like `name`, most similar first.
pub fn fuzzy_suggestions<'a, I>(name: &str, names: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = name.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(f32, &str)> = names
        .into_iter()
        .map(|candidate| (fuzzy_compare(&needle, &candidate.to_lowercase()), candidate))
        .filter(|(score, _)| *score >= MIN_SIMILARITY)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));

    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, candidate)| candidate)
        .collect()
}
