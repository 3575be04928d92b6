use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub username: String,
    #[serde(skip)]
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

// Resource entities keep the legacy wire field names of the dealership
// schema; internal names are idiomatic snake_case.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manufacturer {
    #[serde(rename = "manufacturer_ID")]
    pub id: i64,
    #[serde(rename = "manufacturer_ShortName")]
    pub short_name: String,
    #[serde(rename = "manufacturer_FullName")]
    pub full_name: String,
    #[serde(rename = "manufacturer_OtherDetails")]
    pub other_details: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    #[serde(rename = "branch_location")]
    pub location: String,
    #[serde(rename = "branch_other_details")]
    pub other_details: Option<String>,
    #[serde(rename = "branch_Manager_Code")]
    pub manager_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(rename = "vehicle_ID")]
    pub id: i64,
    #[serde(rename = "manufacturer_ID")]
    pub manufacturer_id: i64,
    #[serde(rename = "vehicle_Description")]
    pub description: String,
    #[serde(rename = "vehicle_OtherDetails")]
    pub other_details: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRecord {
    #[serde(rename = "inventory_ID")]
    pub id: i64,
    #[serde(rename = "branch_location")]
    pub branch_location: String,
    #[serde(rename = "vehicle_ID")]
    pub vehicle_id: i64,
    #[serde(rename = "inventory_Count")]
    pub count: i64,
}
