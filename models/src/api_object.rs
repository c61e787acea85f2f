use crate::error::model_error::ModelError;

use common::ErrorLocation;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse and serialize steps shared by every value object.
///
/// Parsing ignores fields the type does not know about, so new API fields never
/// break decoding. Serializing omits absent optional fields and nested objects.
pub trait ApiObject: Serialize + DeserializeOwned {
    #[track_caller]
    fn from_value(value: Value) -> Result<Self, ModelError> {
        serde_json::from_value(value).map_err(|e| ModelError::Decode {
            type_name: short_type_name::<Self>(),
            message: e.to_string(),
            location: ErrorLocation::caller(),
        })
    }

    #[track_caller]
    fn to_value(&self) -> Result<Value, ModelError> {
        serde_json::to_value(self).map_err(|e| ModelError::Encode {
            type_name: short_type_name::<Self>(),
            message: e.to_string(),
            location: ErrorLocation::caller(),
        })
    }
}

fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
