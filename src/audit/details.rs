//! Table details attached to the audit product

use serde::Serialize;

use super::meta::COLUMN_URL;
use crate::preload::FontGapItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemValueType {
    Url,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableHeading {
    pub key: &'static str,
    pub item_type: ItemValueType,
    pub text: &'static str,
}

/// A `table` details block: one row per flagged font
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableDetails {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub headings: Vec<TableHeading>,
    pub items: Vec<FontGapItem>,
}

impl TableDetails {
    #[must_use]
    pub fn new(headings: Vec<TableHeading>, items: Vec<FontGapItem>) -> Self {
        Self {
            kind: "table",
            headings,
            items,
        }
    }

    /// The single URL column this audit reports
    #[must_use]
    pub fn font_urls(items: Vec<FontGapItem>) -> Self {
        Self::new(
            vec![TableHeading {
                key: "url",
                item_type: ItemValueType::Url,
                text: COLUMN_URL,
            }],
            items,
        )
    }
}
