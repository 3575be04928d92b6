mod schema;
mod sqlite;

pub use sqlite::SqliteStore;

use crate::error::Result;
use crate::types::*;

/// Store defines the database interface.
pub trait Store: Send + Sync {
    fn initialize(&self) -> Result<()>;

    // Account operations
    fn create_account(&self, account: &Account) -> Result<()>;
    fn get_account(&self, username: &str) -> Result<Option<Account>>;

    // Manufacturer operations
    fn list_manufacturers(&self) -> Result<Vec<Manufacturer>>;
    fn create_manufacturer(
        &self,
        short_name: &str,
        full_name: &str,
        other_details: Option<&str>,
    ) -> Result<i64>;
    fn update_manufacturer(
        &self,
        id: i64,
        short_name: &str,
        full_name: &str,
        other_details: Option<&str>,
    ) -> Result<bool>;
    fn delete_manufacturer(&self, id: i64) -> Result<bool>;

    // Branch operations
    fn list_branches(&self) -> Result<Vec<Branch>>;
    fn create_branch(&self, branch: &Branch) -> Result<()>;
    fn update_branch(
        &self,
        location: &str,
        other_details: Option<&str>,
        manager_code: &str,
    ) -> Result<bool>;
    fn delete_branch(&self, location: &str) -> Result<bool>;

    // Vehicle operations
    fn list_vehicles(&self) -> Result<Vec<Vehicle>>;
    fn create_vehicle(
        &self,
        manufacturer_id: i64,
        description: &str,
        other_details: Option<&str>,
    ) -> Result<i64>;
    fn update_vehicle(
        &self,
        id: i64,
        manufacturer_id: i64,
        description: &str,
        other_details: Option<&str>,
    ) -> Result<bool>;
    fn delete_vehicle(&self, id: i64) -> Result<bool>;

    // Inventory operations
    fn list_inventory(&self) -> Result<Vec<InventoryRecord>>;
    fn create_inventory_record(
        &self,
        branch_location: &str,
        vehicle_id: i64,
        count: i64,
    ) -> Result<i64>;
    fn update_inventory_record(
        &self,
        id: i64,
        branch_location: &str,
        vehicle_id: i64,
        count: i64,
    ) -> Result<bool>;
    fn delete_inventory_record(&self, id: i64) -> Result<bool>;
}
