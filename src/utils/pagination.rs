use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub has_more: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PaginationParams {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub limit: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub offset: Option<i64>,
}

impl PaginationParams {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(50).clamp(1, 200)
    }

    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = PaginationParams::default();
        assert_eq!(params.limit(), 50);
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_limit_clamped() {
        let params = PaginationParams {
            limit: Some(1000),
            offset: None,
        };
        assert_eq!(params.limit(), 200);

        let params = PaginationParams {
            limit: Some(0),
            offset: None,
        };
        assert_eq!(params.limit(), 1);

        let params = PaginationParams {
            limit: Some(-3),
            offset: None,
        };
        assert_eq!(params.limit(), 1);
    }

    #[test]
    fn test_offset_floored_at_zero() {
        let params = PaginationParams {
            limit: None,
            offset: Some(-5),
        };
        assert_eq!(params.offset(), 0);
    }

    #[test]
    fn test_deserialize_query_strings() {
        let params: PaginationParams =
            serde_json::from_str(r#"{"limit":"25","offset":"50"}"#).unwrap();
        assert_eq!(params.limit(), 25);
        assert_eq!(params.offset(), 50);
    }

    #[test]
    fn test_deserialize_empty_strings() {
        let params: PaginationParams = serde_json::from_str(r#"{"limit":"","offset":""}"#).unwrap();
        assert_eq!(params.limit(), 50);
        assert_eq!(params.offset(), 0);
    }
}
