use crate::api_object::ApiObject;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// One page of a list endpoint.
///
/// The API wraps collections as `{ "object": "list", "hasMore": .., "data": [..] }`.
/// Elements keep the order the server sent them in. Callers page manually with
/// `offset`/`limit` on the filter types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: DeserializeOwned"))]
pub struct Page<T> {
    #[serde(default)]
    pub has_more: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn into_data(self) -> Vec<T> {
        self.data
    }

    /// Offset to request the page after this one, if the server reports more.
    ///
    /// `None` when the page cannot advance (zero step or offset overflow).
    pub fn next_offset(&self) -> Option<u32> {
        if !self.has_more {
            return None;
        }
        let current = self.offset.unwrap_or(0);
        let step = match self.limit {
            Some(limit) => limit,
            None => u32::try_from(self.data.len()).ok()?,
        };
        if step == 0 {
            return None;
        }
        current.checked_add(step)
    }
}

impl<T> ApiObject for Page<T> where T: Serialize + DeserializeOwned {}
