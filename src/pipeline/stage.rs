use std::fmt;

/// The stages of a cleaning run, in the order they execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    NullCheck,
    EmptyCheck,
    Dedupe,
    MissingSummary,
    NormaliseGender,
    ValidateEmail,
    DropColumns,
    Outliers,
}

impl Stage {
    pub const ALL: [Self; 8] = [
        Self::NullCheck,
        Self::EmptyCheck,
        Self::Dedupe,
        Self::MissingSummary,
        Self::NormaliseGender,
        Self::ValidateEmail,
        Self::DropColumns,
        Self::Outliers,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::NullCheck => "null check",
            Self::EmptyCheck => "empty row check",
            Self::Dedupe => "duplicate removal",
            Self::MissingSummary => "missing value summary",
            Self::NormaliseGender => "gender normalisation",
            Self::ValidateEmail => "email validation",
            Self::DropColumns => "column pruning",
            Self::Outliers => "outlier handling",
        }
    }

    /// Whether the stage can remove rows or columns or rewrite values.
    pub fn mutates(self) -> bool {
        !matches!(
            self,
            Self::NullCheck | Self::EmptyCheck | Self::MissingSummary
        )
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
