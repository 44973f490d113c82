/// Options for an annotation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationSettings {
    /// Score and report without rewriting the collection.
    pub dry_run: bool,
}

/// Per-run record counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationSummary {
    pub total: usize,
    /// Records that received a new score in this run.
    pub scored: usize,
    /// Records skipped because they already had a score.
    pub already_scored: usize,
    /// Records skipped because they have no lyrics.
    pub without_lyrics: usize,
}
