//! Development Checks
//!
//! Self-test pass over the bot catalog. Only runs in debug builds, reports
//! problems as warnings and never interferes with rendering.

use std::fmt;

use crate::catalog::BotProfile;

/// Build flavour the page was compiled in
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// Mode of the current build (`debug_assertions` on means development)
    pub const fn current() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }

    pub const fn is_development(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Field of a [`BotProfile`] that failed a check
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotField {
    Name,
    Description,
    AvatarGlyph,
}

impl fmt::Display for BotField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::AvatarGlyph => "avatar",
        };
        f.write_str(name)
    }
}

/// A single failed check
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The catalog has no bots at all
    EmptyCatalog,

    /// A bot has an empty field
    EmptyField { index: usize, field: BotField },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCatalog => f.write_str("bots array should not be empty"),
            Self::EmptyField { index, field } => {
                write!(f, "bot[{index}].{field} must be a non-empty string")
            }
        }
    }
}

/// Outcome of a validation pass
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub checked: usize,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check every profile and log each problem found
pub fn validate_bots(bots: &[BotProfile]) -> ValidationReport {
    let mut report = ValidationReport {
        checked: bots.len(),
        issues: Vec::new(),
    };

    if bots.is_empty() {
        report.issues.push(ValidationIssue::EmptyCatalog);
    }

    for (index, bot) in bots.iter().enumerate() {
        let fields = [
            (BotField::Name, &bot.name),
            (BotField::Description, &bot.description),
            (BotField::AvatarGlyph, &bot.avatar_glyph),
        ];
        for (field, value) in fields {
            if value.is_empty() {
                report.issues.push(ValidationIssue::EmptyField { index, field });
            }
        }
    }

    for issue in &report.issues {
        tracing::warn!(%issue, "bot catalog self-test failed");
    }
    if report.passed() {
        tracing::info!(bots = report.checked, "✅ NovaBots self-tests passed");
    }

    report
}

/// Run [`validate_bots`] only when `mode` is development
pub fn run_dev_checks(mode: BuildMode, bots: &[BotProfile]) -> Option<ValidationReport> {
    mode.is_development().then(|| validate_bots(bots))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BotCatalog, StaticCatalog};

    #[test]
    fn test_static_catalog_passes() {
        let report = validate_bots(&StaticCatalog::new().bots());
        assert!(report.passed());
        assert_eq!(report.checked, 3);
    }

    #[test]
    fn test_empty_catalog_reported() {
        let report = validate_bots(&[]);
        assert_eq!(report.issues, vec![ValidationIssue::EmptyCatalog]);
    }

    #[test]
    fn test_empty_fields_reported() {
        let bots = vec![
            BotProfile::new("Luna", "Stars.", "🌌"),
            BotProfile::new("", "No name.", ""),
        ];
        let report = validate_bots(&bots);

        assert_eq!(
            report.issues,
            vec![
                ValidationIssue::EmptyField { index: 1, field: BotField::Name },
                ValidationIssue::EmptyField { index: 1, field: BotField::AvatarGlyph },
            ]
        );
        assert_eq!(
            report.issues[0].to_string(),
            "bot[1].name must be a non-empty string"
        );
    }

    #[test]
    fn test_production_skips_checks() {
        assert!(run_dev_checks(BuildMode::Production, &[]).is_none());
        let report = run_dev_checks(BuildMode::Development, &[]).unwrap();
        assert!(!report.passed());
    }
}
