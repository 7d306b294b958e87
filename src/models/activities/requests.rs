use serde::Deserialize;
use ts_rs::TS;

use super::entities::{ActivityType, Difficulty, ResourceType};

/// 活动描述最大长度（字符）
pub const ACTIVITY_DESCRIPTION_MAX_LEN: usize = 2000;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "activity.ts")]
pub struct ActivityRequest {
    pub competence_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub activity_type: ActivityType,
    pub duration: i32,
    pub level: Difficulty,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "activity.ts")]
pub struct CreateActivityResourceRequest {
    pub title: String,
    pub resource_type: ResourceType,
    pub url: Option<String>,
    pub description: Option<String>,
}

/// title / resource_type 省略时保持原值，url / description 总是被替换
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "activity.ts")]
pub struct UpdateActivityResourceRequest {
    pub title: Option<String>,
    pub resource_type: Option<ResourceType>,
    pub url: Option<String>,
    pub description: Option<String>,
}
