//! Diary entry model

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A unique identifier for a diary entry.
///
/// Locally-minted ids are small integers from the session allocator; the
/// remote table assigns its own integer row ids, which may arrive as JSON
/// numbers or strings. The canonical form is a string and equality is string
/// equality, so the two representations compare consistently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric view of the id, when it parses as an integer.
    ///
    /// Used for allocator seeding and newest-first ordering.
    #[must_use]
    pub fn as_number(&self) -> Option<i64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for EntryId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Self(value.to_string()),
            Raw::Text(value) => Self(value),
        })
    }
}

/// One diary entry.
///
/// Serialized camelCase so the cache slot stays compatible with payloads
/// written by earlier clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// Unique identifier, stable once assigned
    pub id: EntryId,
    /// Entry date as epoch milliseconds, normalized at every boundary
    pub date: i64,
    /// Diary text
    pub content: String,
    /// Position on the fixed emotion scale (1 = best)
    pub emotion_id: u8,
}

/// The fixed five-step emotion scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emotion {
    Wonderful,
    Good,
    Neutral,
    Bad,
    Awful,
}

impl Emotion {
    /// All emotions, best first (scale order)
    pub const SCALE: [Self; 5] = [
        Self::Wonderful,
        Self::Good,
        Self::Neutral,
        Self::Bad,
        Self::Awful,
    ];

    /// Scale position of this emotion (1-5)
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::Wonderful => 1,
            Self::Good => 2,
            Self::Neutral => 3,
            Self::Bad => 4,
            Self::Awful => 5,
        }
    }

    /// Look up an emotion by scale position
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::Wonderful),
            2 => Some(Self::Good),
            3 => Some(Self::Neutral),
            4 => Some(Self::Bad),
            5 => Some(Self::Awful),
            _ => None,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wonderful => "wonderful",
            Self::Good => "good",
            Self::Neutral => "neutral",
            Self::Bad => "bad",
            Self::Awful => "awful",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn entry_id_compares_numeric_and_text_forms_as_strings() {
        assert_eq!(EntryId::from(7), EntryId::from("7"));
        assert_ne!(EntryId::from(7), EntryId::from("07"));
    }

    #[test]
    fn entry_id_deserializes_from_number_or_string() {
        let from_number: EntryId = serde_json::from_str("42").unwrap();
        let from_string: EntryId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_number, from_string);
        assert_eq!(from_number.as_str(), "42");
    }

    #[test]
    fn entry_id_serializes_as_string() {
        let raw = serde_json::to_string(&EntryId::from(3)).unwrap();
        assert_eq!(raw, "\"3\"");
    }

    #[test]
    fn entry_id_numeric_view() {
        assert_eq!(EntryId::from(12).as_number(), Some(12));
        assert_eq!(EntryId::from("12").as_number(), Some(12));
        assert_eq!(EntryId::from("b2c4").as_number(), None);
    }

    #[test]
    fn entry_serializes_camel_case() {
        let entry = Entry {
            id: EntryId::from(1),
            date: 100,
            content: "hello".to_string(),
            emotion_id: 2,
        };
        let raw = serde_json::to_string(&entry).unwrap();
        assert!(raw.contains("\"emotionId\":2"));
        assert!(raw.contains("\"id\":\"1\""));
    }

    #[test]
    fn entry_roundtrips_through_json() {
        let entry = Entry {
            id: EntryId::from(9),
            date: 1_700_000_000_000,
            content: "a day".to_string(),
            emotion_id: 5,
        };
        let raw = serde_json::to_string(&entry).unwrap();
        let parsed: Entry = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, entry);
    }

    #[test]
    fn entry_accepts_legacy_numeric_ids() {
        let raw = r#"{"id":4,"date":100,"content":"old","emotionId":1}"#;
        let parsed: Entry = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.id, EntryId::from(4));
    }

    #[test]
    fn emotion_scale_roundtrip() {
        for emotion in Emotion::SCALE {
            assert_eq!(Emotion::from_id(emotion.id()), Some(emotion));
        }
        assert_eq!(Emotion::from_id(0), None);
        assert_eq!(Emotion::from_id(6), None);
    }

    #[test]
    fn emotion_labels_are_defined() {
        for emotion in Emotion::SCALE {
            assert!(!emotion.label().is_empty());
        }
    }
}
