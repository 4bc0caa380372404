/// Single draft buffer shared by every conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    draft: String,
}

impl Composer {
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn with_draft(text: impl Into<String>) -> Self {
        Self { draft: text.into() }
    }

    /// True when the draft would be rejected on submit.
    pub fn is_blank(&self) -> bool {
        self.draft.trim().is_empty()
    }

    pub fn cleared() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(Composer::default().is_blank());
        assert!(Composer::with_draft(" \t ").is_blank());
        assert!(!Composer::with_draft(" ok ").is_blank());
    }

    #[test]
    fn test_with_draft_keeps_text_verbatim() {
        let composer = Composer::with_draft("  padded  ");
        assert_eq!(composer.draft(), "  padded  ");
    }
}
