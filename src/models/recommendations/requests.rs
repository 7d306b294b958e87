use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "recommendation.ts")]
pub struct RecommendationQuery {
    /// 缺省或 <= 0 时使用配置的默认值
    pub limit: Option<i64>,
}
