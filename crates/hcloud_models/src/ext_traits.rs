//! Parsing extensions for wire payloads.

use error_stack::ResultExt;
use serde::Deserialize;

use crate::errors::{CustomResult, ParsingError};

/// Extends `bytes::Bytes` with typed JSON parsing.
pub trait BytesExt<T> {
    /// Decodes the buffer into `T`, naming the target type in the report.
    fn parse_struct<'de>(&'de self, type_name: &'static str) -> CustomResult<T, ParsingError>
    where
        T: Deserialize<'de>;
}

impl<T> BytesExt<T> for bytes::Bytes {
    fn parse_struct<'de>(&'de self, type_name: &'static str) -> CustomResult<T, ParsingError>
    where
        T: Deserialize<'de>,
    {
        serde_json::from_slice::<T>(self)
            .change_context(ParsingError::StructParseFailure(type_name))
            .attach_printable_lazy(|| format!("Unable to parse {type_name} from bytes"))
    }
}

/// Extends `serde_json::Value` with typed parsing.
pub trait ValueExt<T> {
    /// Decodes the value into `T`, naming the target type in the report.
    fn parse_value(self, type_name: &'static str) -> CustomResult<T, ParsingError>
    where
        T: serde::de::DeserializeOwned;
}

impl<T> ValueExt<T> for serde_json::Value {
    fn parse_value(self, type_name: &'static str) -> CustomResult<T, ParsingError>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_json::from_value::<T>(self)
            .change_context(ParsingError::StructParseFailure(type_name))
            .attach_printable_lazy(|| format!("Unable to parse {type_name} from value"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Sample {
        name: String,
    }

    #[test]
    fn parse_struct_decodes_a_buffer() {
        let buffer = bytes::Bytes::from_static(br#"{"name": "fsn1"}"#);
        let sample: Sample = buffer.parse_struct("Sample").unwrap();
        assert_eq!(sample.name, "fsn1");
    }

    #[test]
    fn parse_struct_reports_the_target_type_on_failure() {
        let buffer = bytes::Bytes::from_static(b"{broken");
        let result: CustomResult<Sample, ParsingError> = buffer.parse_struct("Sample");
        assert!(result.is_err());
    }
}
