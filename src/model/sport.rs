use serde::{Deserialize, Serialize};

/// A sport from the shared catalogue
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SportDto {
    pub id: i32,
    pub name: String,
}

/// Sport ids to add to or remove from the bound academy's selection
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct SportSelectionDto {
    pub ids: Vec<i32>,
}
