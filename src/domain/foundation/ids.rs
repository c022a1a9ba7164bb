//! Strongly-typed identifier value objects.
//!
//! Identifiers are UUIDv4 values that serialize as plain strings so that the
//! JSON wire format and the stored document format carry identical ids.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

macro_rules! string_uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier.
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates an identifier from an existing UUID.
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }

        // Serialize as a string in every format, including BSON, so the
        // stored document holds the same "xxxxxxxx-..." text as the API.
        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                Uuid::parse_str(&s)
                    .map(Self)
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

string_uuid_id! {
    /// Unique identifier for a submitted questionnaire.
    QuestionnaireId
}

string_uuid_id! {
    /// Unique identifier for a derived user profile.
    ProfileId
}

string_uuid_id! {
    /// Unique identifier for a personalized plan.
    PlanId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        assert_ne!(QuestionnaireId::new(), QuestionnaireId::new());
        assert_ne!(ProfileId::new(), ProfileId::new());
        assert_ne!(PlanId::new(), PlanId::new());
    }

    #[test]
    fn id_displays_as_uuid_string() {
        let uuid = Uuid::new_v4();
        let id = ProfileId::from_uuid(uuid);
        assert_eq!(id.to_string(), uuid.to_string());
    }

    #[test]
    fn id_parses_from_string() {
        let id = QuestionnaireId::new();
        let parsed: QuestionnaireId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn id_rejects_invalid_string() {
        assert!("not-a-uuid".parse::<PlanId>().is_err());
    }

    #[test]
    fn id_serializes_as_json_string() {
        let id = PlanId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }

    #[test]
    fn id_roundtrips_through_json() {
        let id = QuestionnaireId::new();
        let json = serde_json::to_string(&id).unwrap();
        let back: QuestionnaireId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
