//! Analysis stage identifiers and metadata.
//!
//! Each [`StageId`] variant is one tab of the linear analysis
//! pipeline. Navigation moves forward through the stages except for
//! explicit tab clicks back to earlier ones.

use std::fmt;

/// Identifier for one stage tab of the analysis pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageId {
    /// Metaphase image intake.
    Upload,
    /// Mock chromosome segmentation.
    Segmentation,
    /// Mock chromosome classification.
    Classification,
}

impl StageId {
    /// All stages in pipeline order, for iterating the tab strip.
    pub const ALL: [Self; 3] = [Self::Upload, Self::Segmentation, Self::Classification];

    /// Full display label for the stage.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Upload => "Upload Image",
            Self::Segmentation => "Segmentation",
            Self::Classification => "Classification",
        }
    }

    /// 1-based position for the numbered tab captions.
    #[must_use]
    pub const fn step(self) -> u8 {
        match self {
            Self::Upload => 1,
            Self::Segmentation => 2,
            Self::Classification => 3,
        }
    }

    /// The stage that follows this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Upload => Some(Self::Segmentation),
            Self::Segmentation => Some(Self::Classification),
            Self::Classification => None,
        }
    }

    /// Navigation guard: whether this stage's tab can be activated.
    ///
    /// `Upload` is always reachable; the downstream stages require a
    /// held image.
    #[must_use]
    pub const fn enabled(self, has_image: bool) -> bool {
        match self {
            Self::Upload => true,
            Self::Segmentation | Self::Classification => has_image,
        }
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_contains_every_variant() {
        // If you add a variant to StageId, update ALL and this count.
        assert_eq!(
            StageId::ALL.len(),
            3,
            "StageId::ALL length must match variant count"
        );
        let mut seen = std::collections::HashSet::new();
        for stage in StageId::ALL {
            assert!(seen.insert(stage), "Duplicate stage in ALL: {stage}");
        }
    }

    #[test]
    fn steps_are_sequential() {
        for (i, stage) in StageId::ALL.iter().enumerate() {
            assert_eq!(usize::from(stage.step()), i + 1);
        }
    }

    #[test]
    fn next_walks_the_pipeline_forward() {
        assert_eq!(StageId::Upload.next(), Some(StageId::Segmentation));
        assert_eq!(StageId::Segmentation.next(), Some(StageId::Classification));
        assert_eq!(StageId::Classification.next(), None);
    }

    #[test]
    fn downstream_stages_require_an_image() {
        for stage in StageId::ALL {
            assert!(stage.enabled(true), "{stage} should be enabled with an image");
        }
        assert!(StageId::Upload.enabled(false));
        assert!(!StageId::Segmentation.enabled(false));
        assert!(!StageId::Classification.enabled(false));
    }
}
