use std::fmt;

/// Model family shown in the status line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModelFamily {
    #[default]
    Opus,
    Sonnet,
    Haiku,
}

impl ModelFamily {
    /// Classify a model id by case-sensitive substring.
    ///
    /// Checked in the order opus, sonnet, haiku; the first match wins.
    /// Absent or unrecognized ids fall back to `Opus`.
    pub fn classify(model_id: Option<&str>) -> Self {
        let id = model_id.unwrap_or("");
        if id.contains("opus") {
            Self::Opus
        } else if id.contains("sonnet") {
            Self::Sonnet
        } else if id.contains("haiku") {
            Self::Haiku
        } else {
            Self::default()
        }
    }

    /// Short lowercase label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Opus => "opus",
            Self::Sonnet => "sonnet",
            Self::Haiku => "haiku",
        }
    }

    /// Colored marker shown before the label
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Opus => "🟣",
            Self::Sonnet => "🟠",
            Self::Haiku => "🟢",
        }
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
