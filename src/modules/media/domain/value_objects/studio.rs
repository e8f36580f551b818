use super::MetadataId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Studio {
    pub name: String,
    #[serde(default)]
    pub external_id: HashMap<String, MetadataId>,
}

impl Studio {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            external_id: HashMap::new(),
        }
    }
}
