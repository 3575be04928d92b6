use std::path::Path;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension, params};

use super::Store;
use super::schema::SCHEMA;
use crate::error::{Error, Result};
use crate::types::*;

pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(db_path: P) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        conn.pragma_update(None, "journal_mode", "WAL")?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> std::sync::MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(|e| e.into_inner())
    }
}

fn parse_datetime(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            // Handle SQLite's default datetime format: "YYYY-MM-DD HH:MM:SS"
            chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            tracing::error!("Invalid datetime in database: '{}' - {}", s, e);
            Utc::now()
        })
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

fn parse_role(s: &str) -> Role {
    Role::parse(s).unwrap_or_else(|| {
        tracing::error!("Invalid role in database: '{}'", s);
        Role::Viewer
    })
}

impl Store for SqliteStore {
    fn initialize(&self) -> Result<()> {
        self.conn().execute_batch(SCHEMA)?;
        Ok(())
    }

    // Account operations

    fn create_account(&self, account: &Account) -> Result<()> {
        // Lookup and insert run under one guard so concurrent registrations
        // of the same username cannot interleave.
        let conn = self.conn();

        let existing: Option<String> = conn
            .query_row(
                "SELECT username FROM accounts WHERE username = ?1",
                params![account.username],
                |row| row.get(0),
            )
            .optional()?;

        if existing.is_some() {
            return Err(Error::AlreadyExists);
        }

        let result = conn.execute(
            "INSERT INTO accounts (username, password_hash, role, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                account.username,
                account.password_hash,
                account.role.as_str(),
                format_datetime(&account.created_at),
            ],
        );

        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(Error::AlreadyExists)
            }
            Err(e) => Err(Error::from(e)),
        }
    }

    fn get_account(&self, username: &str) -> Result<Option<Account>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT username, password_hash, role, created_at
             FROM accounts WHERE username = ?1",
            params![username],
            |row| {
                Ok(Account {
                    username: row.get(0)?,
                    password_hash: row.get(1)?,
                    role: parse_role(&row.get::<_, String>(2)?),
                    created_at: parse_datetime(&row.get::<_, String>(3)?),
                })
            },
        )
        .optional()
        .map_err(Error::from)
    }

    // Manufacturer operations

    fn list_manufacturers(&self) -> Result<Vec<Manufacturer>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, short_name, full_name, other_details FROM manufacturers ORDER BY id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Manufacturer {
                id: row.get(0)?,
                short_name: row.get(1)?,
                full_name: row.get(2)?,
                other_details: row.get(3)?,
            })
        })?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn create_manufacturer(
        &self,
        short_name: &str,
        full_name: &str,
        other_details: Option<&str>,
    ) -> Result<i64> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO manufacturers (short_name, full_name, other_details)
             VALUES (?1, ?2, ?3)",
            params![short_name, full_name, other_details],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update_manufacturer(
        &self,
        id: i64,
        short_name: &str,
        full_name: &str,
        other_details: Option<&str>,
    ) -> Result<bool> {
        let rows = self.conn().execute(
            "UPDATE manufacturers SET short_name = ?1, full_name = ?2, other_details = ?3
             WHERE id = ?4",
            params![short_name, full_name, other_details, id],
        )?;
        Ok(rows > 0)
    }

    fn delete_manufacturer(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM manufacturers WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    // Branch operations

    fn list_branches(&self) -> Result<Vec<Branch>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT location, other_details, manager_code FROM branches ORDER BY location",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Branch {
                location: row.get(0)?,
                other_details: row.get(1)?,
                manager_code: row.get(2)?,
            })
        })?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn create_branch(&self, branch: &Branch) -> Result<()> {
        self.conn().execute(
            "INSERT INTO branches (location, other_details, manager_code)
             VALUES (?1, ?2, ?3)",
            params![branch.location, branch.other_details, branch.manager_code],
        )?;
        Ok(())
    }

    fn update_branch(
        &self,
        location: &str,
        other_details: Option<&str>,
        manager_code: &str,
    ) -> Result<bool> {
        let rows = self.conn().execute(
            "UPDATE branches SET other_details = ?1, manager_code = ?2 WHERE location = ?3",
            params![other_details, manager_code, location],
        )?;
        Ok(rows > 0)
    }

    fn delete_branch(&self, location: &str) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM branches WHERE location = ?1", params![location])?;
        Ok(rows > 0)
    }

    // Vehicle operations

    fn list_vehicles(&self) -> Result<Vec<Vehicle>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, manufacturer_id, description, other_details FROM vehicles ORDER BY id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Vehicle {
                id: row.get(0)?,
                manufacturer_id: row.get(1)?,
                description: row.get(2)?,
                other_details: row.get(3)?,
            })
        })?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn create_vehicle(
        &self,
        manufacturer_id: i64,
        description: &str,
        other_details: Option<&str>,
    ) -> Result<i64> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO vehicles (manufacturer_id, description, other_details)
             VALUES (?1, ?2, ?3)",
            params![manufacturer_id, description, other_details],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update_vehicle(
        &self,
        id: i64,
        manufacturer_id: i64,
        description: &str,
        other_details: Option<&str>,
    ) -> Result<bool> {
        let rows = self.conn().execute(
            "UPDATE vehicles SET manufacturer_id = ?1, description = ?2, other_details = ?3
             WHERE id = ?4",
            params![manufacturer_id, description, other_details, id],
        )?;
        Ok(rows > 0)
    }

    fn delete_vehicle(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM vehicles WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }

    // Inventory operations

    fn list_inventory(&self) -> Result<Vec<InventoryRecord>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, branch_location, vehicle_id, count FROM inventory ORDER BY id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(InventoryRecord {
                id: row.get(0)?,
                branch_location: row.get(1)?,
                vehicle_id: row.get(2)?,
                count: row.get(3)?,
            })
        })?;

        rows.collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::from)
    }

    fn create_inventory_record(
        &self,
        branch_location: &str,
        vehicle_id: i64,
        count: i64,
    ) -> Result<i64> {
        let conn = self.conn();
        conn.execute(
            "INSERT INTO inventory (branch_location, vehicle_id, count)
             VALUES (?1, ?2, ?3)",
            params![branch_location, vehicle_id, count],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update_inventory_record(
        &self,
        id: i64,
        branch_location: &str,
        vehicle_id: i64,
        count: i64,
    ) -> Result<bool> {
        let rows = self.conn().execute(
            "UPDATE inventory SET branch_location = ?1, vehicle_id = ?2, count = ?3
             WHERE id = ?4",
            params![branch_location, vehicle_id, count, id],
        )?;
        Ok(rows > 0)
    }

    fn delete_inventory_record(&self, id: i64) -> Result<bool> {
        let rows = self
            .conn()
            .execute("DELETE FROM inventory WHERE id = ?1", params![id])?;
        Ok(rows > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_store(temp: &TempDir) -> SqliteStore {
        let store = SqliteStore::new(temp.path().join("test.db")).unwrap();
        store.initialize().unwrap();
        store
    }

    fn account(username: &str, role: Role) -> Account {
        Account {
            username: username.to_string(),
            password_hash: "$argon2id$fake".to_string(),
            role,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_initialize_creates_tables() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        let conn = store.conn();
        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap();

        assert!(tables.contains(&"accounts".to_string()));
        assert!(tables.contains(&"manufacturers".to_string()));
        assert!(tables.contains(&"branches".to_string()));
        assert!(tables.contains(&"vehicles".to_string()));
        assert!(tables.contains(&"inventory".to_string()));
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);
        store.initialize().unwrap();
    }

    #[test]
    fn test_account_roundtrip() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        store.create_account(&account("alice", Role::Admin)).unwrap();

        let fetched = store.get_account("alice").unwrap().unwrap();
        assert_eq!(fetched.username, "alice");
        assert_eq!(fetched.role, Role::Admin);
        assert_eq!(fetched.password_hash, "$argon2id$fake");

        assert!(store.get_account("bob").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        store.create_account(&account("alice", Role::Admin)).unwrap();

        let result = store.create_account(&account("alice", Role::Viewer));
        assert!(matches!(result, Err(Error::AlreadyExists)));

        // The original record is untouched.
        let fetched = store.get_account("alice").unwrap().unwrap();
        assert_eq!(fetched.role, Role::Admin);
    }

    #[test]
    fn test_manufacturer_crud() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        assert!(store.list_manufacturers().unwrap().is_empty());

        let id = store
            .create_manufacturer("Ford", "Ford Motor Company", None)
            .unwrap();
        let id2 = store
            .create_manufacturer("VW", "Volkswagen AG", Some("Wolfsburg"))
            .unwrap();
        assert_ne!(id, id2);

        let all = store.list_manufacturers().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].short_name, "Ford");
        assert_eq!(all[0].other_details, None);
        assert_eq!(all[1].other_details.as_deref(), Some("Wolfsburg"));

        let updated = store
            .update_manufacturer(id, "Ford", "Ford Motor Company", Some("Dearborn"))
            .unwrap();
        assert!(updated);

        let all = store.list_manufacturers().unwrap();
        assert_eq!(all[0].other_details.as_deref(), Some("Dearborn"));

        assert!(store.delete_manufacturer(id).unwrap());
        assert!(!store.delete_manufacturer(id).unwrap());
        assert_eq!(store.list_manufacturers().unwrap().len(), 1);
    }

    #[test]
    fn test_update_missing_manufacturer_affects_no_rows() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        let updated = store.update_manufacturer(42, "X", "Y", None).unwrap();
        assert!(!updated);
    }

    #[test]
    fn test_branch_crud() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        let branch = Branch {
            location: "Austin".to_string(),
            other_details: None,
            manager_code: "MGR-7".to_string(),
        };
        store.create_branch(&branch).unwrap();

        // location is the primary key; a second insert is a constraint error
        let result = store.create_branch(&branch);
        assert!(matches!(result, Err(Error::Database(_))));

        let updated = store
            .update_branch("Austin", Some("north lot"), "MGR-9")
            .unwrap();
        assert!(updated);

        let all = store.list_branches().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].manager_code, "MGR-9");
        assert_eq!(all[0].other_details.as_deref(), Some("north lot"));

        assert!(store.delete_branch("Austin").unwrap());
        assert!(!store.delete_branch("Austin").unwrap());
    }

    #[test]
    fn test_vehicle_crud() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        let id = store.create_vehicle(1, "Mustang GT", None).unwrap();

        let all = store.list_vehicles().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].manufacturer_id, 1);
        assert_eq!(all[0].description, "Mustang GT");

        let updated = store
            .update_vehicle(id, 2, "Mustang Mach-E", Some("electric"))
            .unwrap();
        assert!(updated);

        let all = store.list_vehicles().unwrap();
        assert_eq!(all[0].manufacturer_id, 2);
        assert_eq!(all[0].other_details.as_deref(), Some("electric"));

        assert!(store.delete_vehicle(id).unwrap());
        assert!(store.list_vehicles().unwrap().is_empty());
    }

    #[test]
    fn test_inventory_crud() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        let id = store.create_inventory_record("Austin", 1, 12).unwrap();

        let all = store.list_inventory().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].branch_location, "Austin");
        assert_eq!(all[0].count, 12);

        let updated = store.update_inventory_record(id, "Austin", 1, 11).unwrap();
        assert!(updated);
        assert_eq!(store.list_inventory().unwrap()[0].count, 11);

        assert!(store.delete_inventory_record(id).unwrap());
        assert!(!store.delete_inventory_record(id).unwrap());
    }

    #[test]
    fn test_negative_inventory_count_rejected() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        let result = store.create_inventory_record("Austin", 1, -1);
        assert!(result.is_err());
    }

    #[test]
    fn test_vehicle_manufacturer_reference_is_advisory() {
        let temp = TempDir::new().unwrap();
        let store = open_store(&temp);

        // No manufacturer with id 99 exists; the insert still succeeds.
        let id = store.create_vehicle(99, "Prototype", None).unwrap();
        assert!(store.delete_vehicle(id).unwrap());
    }
}
