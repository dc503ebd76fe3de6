use crate::common::error::FanoutError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the operator wants done with a repository that has uncommitted changes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirtyResolutionChoice {
    /// `c`: broadcast anyway
    Continue,
    /// `m`: open the configured shell in the repository first
    ManualResolve,
    /// `h`: discard changes with a hard reset first
    HardReset,
    /// `s`: leave this repository alone
    Skip,
}

impl DirtyResolutionChoice {
    /// Token the operator types for this choice
    pub fn token(&self) -> &'static str {
        match self {
            Self::Continue => "c",
            Self::ManualResolve => "m",
            Self::HardReset => "h",
            Self::Skip => "s",
        }
    }

    pub fn all() -> [Self; 4] {
        [Self::Continue, Self::ManualResolve, Self::HardReset, Self::Skip]
    }
}

impl FromStr for DirtyResolutionChoice {
    type Err = FanoutError;

    /// Surrounding whitespace is ignored; an empty answer is never defaulted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Self::all()
            .into_iter()
            .find(|choice| choice.token() == token)
            .ok_or_else(|| FanoutError::invalid_choice(token))
    }
}

impl fmt::Display for DirtyResolutionChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_tokens() {
        assert_eq!("c".parse::<DirtyResolutionChoice>().unwrap(), DirtyResolutionChoice::Continue);
        assert_eq!("m".parse::<DirtyResolutionChoice>().unwrap(), DirtyResolutionChoice::ManualResolve);
        assert_eq!(" h\n".parse::<DirtyResolutionChoice>().unwrap(), DirtyResolutionChoice::HardReset);
        assert_eq!("s".parse::<DirtyResolutionChoice>().unwrap(), DirtyResolutionChoice::Skip);
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        match "q".parse::<DirtyResolutionChoice>() {
            Err(FanoutError::InvalidChoice { token }) => assert_eq!(token, "q"),
            other => panic!("Expected InvalidChoice, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_answer_is_not_defaulted() {
        assert!(matches!(
            "\n".parse::<DirtyResolutionChoice>(),
            Err(FanoutError::InvalidChoice { .. })
        ));
    }

    #[test]
    fn test_tokens_are_case_sensitive() {
        assert!("C".parse::<DirtyResolutionChoice>().is_err());
    }
}
