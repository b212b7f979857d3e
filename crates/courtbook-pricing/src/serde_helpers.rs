//! Serde adapters for the wire format the hosting application speaks.

/// Day-of-week fields travel as integers 0-6 with Sunday = 0, matching the
/// stored representation.
///
/// Use with `#[serde(with = "serde_helpers::weekday_index")]` on an
/// `Option<Weekday>` field.
pub mod weekday_index {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::clock::Weekday;

    /// Serializes an optional weekday as its stored index.
    pub fn serialize<S: Serializer>(
        day: &Option<Weekday>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match day {
            Some(day) => serializer.serialize_some(&day.index()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional weekday from its 0-6 index.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Weekday>, D::Error> {
        match Option::<u8>::deserialize(deserializer)? {
            None => Ok(None),
            Some(index) => Weekday::from_index(index)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("day_of_week must be 0-6, got {index}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use crate::clock::Weekday;
    use crate::serde_helpers;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Wrapper {
        #[serde(default, with = "serde_helpers::weekday_index")]
        day_of_week: Option<Weekday>,
    }

    #[test]
    fn weekday_serializes_as_index() {
        let wrapper = Wrapper {
            day_of_week: Some(Weekday::Tuesday),
        };
        let json = serde_json::to_string(&wrapper).unwrap();
        assert_eq!(json, "{\"day_of_week\":2}");
    }

    #[test]
    fn weekday_deserializes_from_index() {
        let wrapper: Wrapper = serde_json::from_str("{\"day_of_week\":0}").unwrap();
        assert_eq!(wrapper.day_of_week, Some(Weekday::Sunday));

        let wrapper: Wrapper = serde_json::from_str("{\"day_of_week\":6}").unwrap();
        assert_eq!(wrapper.day_of_week, Some(Weekday::Saturday));
    }

    #[test]
    fn absent_and_null_map_to_none() {
        let wrapper: Wrapper = serde_json::from_str("{}").unwrap();
        assert_eq!(wrapper.day_of_week, None);

        let wrapper: Wrapper = serde_json::from_str("{\"day_of_week\":null}").unwrap();
        assert_eq!(wrapper.day_of_week, None);
    }

    #[test]
    fn out_of_range_index_rejected() {
        assert!(serde_json::from_str::<Wrapper>("{\"day_of_week\":7}").is_err());
    }
}
