use std::fmt;
use std::str::FromStr;

use sea_orm::entity::prelude::*;
use sea_orm::prelude::StringLen;
use serde::{Deserialize, Serialize};

/// Context a review was written in.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "lowercase")]
pub enum ReviewCategory {
    #[sea_orm(string_value = "work")]
    Work,
    #[sea_orm(string_value = "personal")]
    Personal,
    #[sea_orm(string_value = "education")]
    Education,
}

impl ReviewCategory {
    pub const ALL: &'static [ReviewCategory] = &[Self::Work, Self::Personal, Self::Education];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Education => "education",
        }
    }
}

impl fmt::Display for ReviewCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReviewCategory {
    type Err = String;

    /// Exact, case-sensitive match on the stored value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown review category: {s}"))
    }
}

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "Text")]
    pub author_name: String,

    #[sea_orm(indexed)]
    pub category: ReviewCategory,

    /// 1..=5, checked before insert.
    pub rating: i32,

    #[sea_orm(column_type = "Text")]
    pub comment: String,

    #[sea_orm(indexed)]
    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
