//! Closed vocabularies for every enumerated project characteristic.
//!
//! The wire format keeps raw strings; these enums are how the engine looks
//! things up. `from_key` returns `None` for anything outside the vocabulary and
//! callers decide the fallback explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Returned by `FromStr` when a value is not part of a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {field} value: '{value}'")]
pub struct UnknownValue {
    pub field: &'static str,
    pub value: String,
}

/// Generates the string plumbing shared by every vocabulary enum.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident => $key:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }

            /// Human-facing label for prompts and forms.
            pub const fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Exact-match lookup; no case folding so the record echo stays faithful.
            pub fn from_key(key: &str) -> Option<Self> {
                match key {
                    $($key => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_key(s.trim()).ok_or_else(|| UnknownValue {
                    field: $field,
                    value: s.to_string(),
                })
            }
        }
    };
}

vocabulary! {
    /// Category of application being planned; primary knowledge-base key.
    ProjectType, "projectType" {
        Personal => "personal", "Personal / side project";
        SmallTeam => "small-team", "Small team / internal tool";
        Scalable => "scalable", "Scalable SaaS / consumer app";
        Realtime => "realtime", "Real-time application";
        Ecommerce => "ecommerce", "E-commerce / payments";
        Social => "social", "Social / community platform";
    }
}

vocabulary! {
    Complexity, "complexity" {
        Simple => "simple", "Simple";
        Moderate => "moderate", "Moderate";
        Complex => "complex", "Complex";
    }
}

vocabulary! {
    Performance, "performance" {
        NotCritical => "not-critical", "Not critical";
        Important => "important", "Important";
        Critical => "critical", "Critical";
    }
}

vocabulary! {
    Budget, "budget" {
        Minimal => "minimal", "Minimal (free tiers)";
        Moderate => "moderate", "Moderate";
        High => "high", "High";
    }
}

vocabulary! {
    TeamSkill, "teamSkill" {
        SoloJunior => "solo-junior", "Solo / junior developer";
        SmallFullstack => "small-fullstack", "Small full-stack team";
        Experienced => "experienced", "Experienced team";
    }
}

vocabulary! {
    DataSensitivity, "dataSensitivity" {
        Low => "low", "Low";
        Medium => "medium", "Medium";
        High => "high", "High";
    }
}

vocabulary! {
    Traffic, "traffic" {
        Low => "low", "Low";
        Medium => "medium", "Medium";
        High => "high", "High";
    }
}

vocabulary! {
    Goal, "goal" {
        ShipFast => "ship-fast", "Ship fast";
        LongTerm => "long-term", "Long-term robustness";
        Balanced => "balanced", "Balanced";
    }
}

vocabulary! {
    AiAssistance, "aiAssistance" {
        None => "none", "No AI assistance";
        Vibe => "vibe", "Vibe coding with copilots";
        Agents => "agents", "Autonomous coding agents";
    }
}

impl Goal {
    /// Any goal outside the vocabulary behaves as `Balanced`.
    pub fn resolve(key: &str) -> Self {
        Self::from_key(key).unwrap_or(Goal::Balanced)
    }
}

impl Traffic {
    /// Unrecognised traffic contributes nothing to risk, same as `Low`.
    pub fn resolve(key: &str) -> Self {
        Self::from_key(key).unwrap_or(Traffic::Low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip_through_from_key() {
        for kind in ProjectType::ALL {
            assert_eq!(ProjectType::from_key(kind.as_str()), Some(*kind));
        }
        assert_eq!(Performance::from_key("not-critical"), Some(Performance::NotCritical));
    }

    #[test]
    fn test_from_key_is_case_sensitive() {
        assert_eq!(ProjectType::from_key("Ecommerce"), None);
        assert_eq!(Budget::from_key(""), None);
    }

    #[test]
    fn test_from_str_reports_field() {
        let err = "enterprise".parse::<ProjectType>().unwrap_err();
        assert_eq!(err.field, "projectType");
        assert_eq!(err.to_string(), "unknown projectType value: 'enterprise'");
    }

    #[test]
    fn test_resolve_defaults() {
        assert_eq!(Goal::resolve("whatever"), Goal::Balanced);
        assert_eq!(Goal::resolve("long-term"), Goal::LongTerm);
        assert_eq!(Traffic::resolve("extreme"), Traffic::Low);
    }

    #[test]
    fn test_serde_uses_wire_keys() {
        let json = serde_json::to_string(&TeamSkill::SoloJunior).unwrap();
        assert_eq!(json, "\"solo-junior\"");
        let parsed: AiAssistance = serde_json::from_str("\"agents\"").unwrap();
        assert_eq!(parsed, AiAssistance::Agents);
    }
}
