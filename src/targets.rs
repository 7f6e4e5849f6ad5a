use crate::error::{JdfError, Result};

/// The screen-reader dictionary an import is destined for.
///
/// Supplied by the caller and passed through for reporting; the core never
/// interprets it beyond naming it in summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetDictionary {
    Default,
    Temporary,
    VoiceSpecific,
}

impl TargetDictionary {
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "temporary" | "temp" => Ok(Self::Temporary),
            "voice" | "voice-specific" => Ok(Self::VoiceSpecific),
            other => Err(JdfError::UnknownTarget(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Temporary => "temporary",
            Self::VoiceSpecific => "voice-specific",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Default => "The default speech dictionary, applied for every voice",
            Self::Temporary => "The temporary dictionary, cleared when the screen reader exits",
            Self::VoiceSpecific => "The dictionary tied to the currently active voice",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::Default, Self::Temporary, Self::VoiceSpecific]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_accepts_aliases() {
        assert_eq!(TargetDictionary::from_str("Default").unwrap(), TargetDictionary::Default);
        assert_eq!(TargetDictionary::from_str("temp").unwrap(), TargetDictionary::Temporary);
        assert_eq!(
            TargetDictionary::from_str("voice").unwrap(),
            TargetDictionary::VoiceSpecific
        );
    }

    #[test]
    fn unknown_target_is_an_error() {
        assert!(matches!(
            TargetDictionary::from_str("global"),
            Err(JdfError::UnknownTarget(_))
        ));
    }

    #[test]
    fn names_round_trip() {
        for target in TargetDictionary::all() {
            assert_eq!(TargetDictionary::from_str(target.name()).unwrap(), *target);
        }
    }
}
