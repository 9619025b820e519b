//! Offset/limit pagination shared by all list endpoints.

use serde::{Deserialize, Serialize};

/// Pagination window taken straight from `offset` / `limit` query params.
///
/// - `offset`: rows to skip, default 0
/// - `limit`: rows to return, default 10
///
/// Values are handed to the store as-is; list endpoints perform no bound
/// validation beyond what the integer types enforce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub offset: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_limit() -> u64 {
    10
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_offset_0_limit_10() {
        let p = PageRequest::default();
        assert_eq!(p.offset, 0);
        assert_eq!(p.limit, 10);
    }

    #[test]
    fn should_deserialize_defaults_when_fields_absent() {
        let p: PageRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(p.offset, 0);
        assert_eq!(p.limit, 10);
    }

    #[test]
    fn should_keep_supplied_values_unclamped() {
        let p: PageRequest = serde_json::from_str(r#"{"offset":500,"limit":100000}"#).unwrap();
        assert_eq!(p.offset, 500);
        assert_eq!(p.limit, 100_000);
    }
}
