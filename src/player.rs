use crate::board::Marker;
use alloc::string::String;

/// A named participant and the marker they place.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    name: String,
    marker: Marker,
}

impl Player {
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }
}
