use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "user.ts")]
pub struct StudentCountResponse {
    pub count: u64,
}
