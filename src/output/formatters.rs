//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Join words with commas, cutting off after `limit` with a count of the rest
#[must_use]
pub fn word_list<S: AsRef<str>>(words: &[S], limit: usize) -> String {
    if words.is_empty() {
        return "(none)".to_string();
    }

    let shown: Vec<&str> = words.iter().take(limit).map(AsRef::as_ref).collect();
    let rest = words.len().saturating_sub(limit);

    if rest == 0 {
        shown.join(", ")
    } else {
        format!("{} … (+{rest} more)", shown.join(", "))
    }
}
