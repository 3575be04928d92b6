use crate::server::dto::{
    CreateBranchRequest, InventoryRequest, LoginRequest, ManufacturerRequest, RegisterRequest,
    UpdateBranchRequest, VehicleRequest,
};
use crate::server::response::ApiError;

/// Present-and-nonempty check. An empty string counts as missing, matching
/// the legacy API's behavior.
fn field(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

pub fn validate_register(req: &RegisterRequest) -> Result<(&str, &str, &str), ApiError> {
    match (field(&req.username), field(&req.password), field(&req.role)) {
        (Some(username), Some(password), Some(role)) => Ok((username, password, role)),
        _ => Err(ApiError::bad_request(
            "Missing required fields: username, password and role",
        )),
    }
}

pub fn validate_login(req: &LoginRequest) -> Result<(&str, &str), ApiError> {
    match (field(&req.username), field(&req.password)) {
        (Some(username), Some(password)) => Ok((username, password)),
        _ => Err(ApiError::bad_request(
            "Missing required fields: username and password",
        )),
    }
}

pub fn validate_manufacturer(
    req: &ManufacturerRequest,
) -> Result<(&str, &str, Option<&str>), ApiError> {
    match (field(&req.short_name), field(&req.full_name)) {
        (Some(short_name), Some(full_name)) => {
            Ok((short_name, full_name, req.other_details.as_deref()))
        }
        _ => Err(ApiError::bad_request(
            "Missing required fields: manufacturer_ShortName and manufacturer_FullName",
        )),
    }
}

pub fn validate_create_branch(
    req: &CreateBranchRequest,
) -> Result<(&str, Option<&str>, &str), ApiError> {
    match (field(&req.location), field(&req.manager_code)) {
        (Some(location), Some(manager_code)) => {
            Ok((location, req.other_details.as_deref(), manager_code))
        }
        _ => Err(ApiError::bad_request(
            "Missing required fields: branch_location and branch_Manager_Code",
        )),
    }
}

pub fn validate_update_branch(
    req: &UpdateBranchRequest,
) -> Result<(Option<&str>, &str), ApiError> {
    match field(&req.manager_code) {
        Some(manager_code) => Ok((req.other_details.as_deref(), manager_code)),
        None => Err(ApiError::bad_request(
            "Missing required field: branch_Manager_Code",
        )),
    }
}

pub fn validate_vehicle(req: &VehicleRequest) -> Result<(i64, &str, Option<&str>), ApiError> {
    match (req.manufacturer_id, field(&req.description)) {
        (Some(manufacturer_id), Some(description)) => {
            Ok((manufacturer_id, description, req.other_details.as_deref()))
        }
        _ => Err(ApiError::bad_request(
            "Missing required fields: manufacturer_ID and vehicle_Description",
        )),
    }
}

pub fn validate_inventory(req: &InventoryRequest) -> Result<(&str, i64, i64), ApiError> {
    let (branch_location, vehicle_id, count) =
        match (field(&req.branch_location), req.vehicle_id, req.count) {
            (Some(branch_location), Some(vehicle_id), Some(count)) => {
                (branch_location, vehicle_id, count)
            }
            _ => {
                return Err(ApiError::bad_request(
                    "Missing required fields: branch_location, vehicle_ID and inventory_Count",
                ));
            }
        };

    if count < 0 {
        return Err(ApiError::bad_request("inventory_Count cannot be negative"));
    }

    Ok((branch_location, vehicle_id, count))
}
