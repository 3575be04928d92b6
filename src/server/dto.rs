use serde::{Deserialize, Serialize};

// Request payloads keep every field optional; the validation module decides
// what is required and shapes the 400 message. Wire names match the legacy
// dealership schema.

#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ManufacturerRequest {
    #[serde(default, rename = "manufacturer_ShortName")]
    pub short_name: Option<String>,
    #[serde(default, rename = "manufacturer_FullName")]
    pub full_name: Option<String>,
    #[serde(default, rename = "manufacturer_OtherDetails")]
    pub other_details: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateBranchRequest {
    #[serde(default, rename = "branch_location")]
    pub location: Option<String>,
    #[serde(default, rename = "branch_other_details")]
    pub other_details: Option<String>,
    #[serde(default, rename = "branch_Manager_Code")]
    pub manager_code: Option<String>,
}

/// Update variant: the location comes from the path, not the body.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateBranchRequest {
    #[serde(default, rename = "branch_other_details")]
    pub other_details: Option<String>,
    #[serde(default, rename = "branch_Manager_Code")]
    pub manager_code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VehicleRequest {
    #[serde(default, rename = "manufacturer_ID")]
    pub manufacturer_id: Option<i64>,
    #[serde(default, rename = "vehicle_Description")]
    pub description: Option<String>,
    #[serde(default, rename = "vehicle_OtherDetails")]
    pub other_details: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct InventoryRequest {
    #[serde(default, rename = "branch_location")]
    pub branch_location: Option<String>,
    #[serde(default, rename = "vehicle_ID")]
    pub vehicle_id: Option<i64>,
    #[serde(default, rename = "inventory_Count")]
    pub count: Option<i64>,
}
