//! Language token validation and script-family resolution.
//!
//! A requested language token either belongs to one of four script families
//! (latin, arabic, cyrillic, devanagari), in which case every derived path
//! uses the family name, or it is a standalone registry entry and is used
//! verbatim.

mod paths;
mod registry;

pub use paths::{FamilyPaths, DICT_DIR, TRAIN_DATA_DIR};
pub use registry::{display_name, ARABIC, CYRILLIC, DEVANAGARI, LATIN, SUPPORTED_LANGUAGES};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Script family shared by several language tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Latin,
    Arabic,
    Cyrillic,
    Devanagari,
}

impl Family {
    /// Families in match order.
    pub const ALL: [Family; 4] = [
        Family::Latin,
        Family::Arabic,
        Family::Cyrillic,
        Family::Devanagari,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Family::Latin => "latin",
            Family::Arabic => "arabic",
            Family::Cyrillic => "cyrillic",
            Family::Devanagari => "devanagari",
        }
    }

    /// Tokens that resolve to this family.
    pub fn members(&self) -> &'static [&'static str] {
        match self {
            Family::Latin => LATIN,
            Family::Arabic => ARABIC,
            Family::Cyrillic => CYRILLIC,
            Family::Devanagari => DEVANAGARI,
        }
    }

    /// First family containing `token`, in [`Family::ALL`] order.
    pub fn of(token: &str) -> Option<Family> {
        Family::ALL
            .into_iter()
            .find(|family| family.members().contains(&token))
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of resolving a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Resolved {
    Family(Family),
    Itself(String),
}

impl Resolved {
    /// The value used to derive dictionary, model and label paths.
    pub fn name(&self) -> &str {
        match self {
            Resolved::Family(family) => family.as_str(),
            Resolved::Itself(token) => token,
        }
    }
}

/// A validated and resolved language token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Token as requested.
    pub token: String,
    pub resolved: Resolved,
    pub paths: FamilyPaths,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LanguageError {
    #[error("unsupported language '{token}': expected a supported language code or a member of the latin, arabic, cyrillic or devanagari families")]
    Unsupported { token: String },
}

/// Whether `token` is a registry key or a family member. Exact match.
pub fn is_supported(token: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|(t, _)| *t == token) || Family::of(token).is_some()
}

/// Validate and resolve a language token.
///
/// Family lists are consulted in latin, arabic, cyrillic, devanagari order;
/// a supported token outside every family resolves to itself.
pub fn classify(token: &str) -> Result<Classification, LanguageError> {
    if !is_supported(token) {
        return Err(LanguageError::Unsupported {
            token: token.to_string(),
        });
    }

    let resolved = match Family::of(token) {
        Some(family) => Resolved::Family(family),
        None => Resolved::Itself(token.to_string()),
    };
    let paths = FamilyPaths::for_name(resolved.name());

    Ok(Classification {
        token: token.to_string(),
        resolved,
        paths,
    })
}

/// Every accepted token: registry entries first, then family members not
/// already listed.
pub fn supported_tokens() -> Vec<&'static str> {
    let mut tokens: Vec<&'static str> = SUPPORTED_LANGUAGES.iter().map(|(t, _)| *t).collect();
    for family in Family::ALL {
        for token in family.members() {
            if !tokens.contains(token) {
                tokens.push(*token);
            }
        }
    }
    tokens
}
