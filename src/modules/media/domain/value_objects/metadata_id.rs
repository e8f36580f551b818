use serde::{Deserialize, Serialize};

/// A record's identity on one external backend: the backend's own id plus a
/// canonical link to the record there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataId {
    pub data_id: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl MetadataId {
    pub fn new(data_id: impl Into<String>, link: Option<String>) -> Self {
        Self {
            data_id: data_id.into(),
            link,
        }
    }
}
