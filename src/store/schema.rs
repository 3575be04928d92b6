pub const SCHEMA: &str = r#"
-- Registered accounts that can authenticate and obtain tokens
CREATE TABLE IF NOT EXISTS accounts (
    username TEXT PRIMARY KEY,
    password_hash TEXT NOT NULL,   -- argon2id hash with embedded salt
    role TEXT NOT NULL,
    created_at TEXT DEFAULT (datetime('now'))
);

-- Vehicle manufacturers
CREATE TABLE IF NOT EXISTS manufacturers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    short_name TEXT NOT NULL,
    full_name TEXT NOT NULL,
    other_details TEXT
);

-- Dealership branches, keyed by caller-supplied location
CREATE TABLE IF NOT EXISTS branches (
    location TEXT PRIMARY KEY,
    other_details TEXT,
    manager_code TEXT NOT NULL
);

-- manufacturer_id is advisory: not enforced as a foreign key
CREATE TABLE IF NOT EXISTS vehicles (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    manufacturer_id INTEGER NOT NULL,
    description TEXT NOT NULL,
    other_details TEXT
);

-- Stock per branch and vehicle; references are advisory
CREATE TABLE IF NOT EXISTS inventory (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    branch_location TEXT NOT NULL,
    vehicle_id INTEGER NOT NULL,
    count INTEGER NOT NULL CHECK (count >= 0)
);

-- Create indexes
CREATE INDEX IF NOT EXISTS idx_vehicles_manufacturer ON vehicles(manufacturer_id);
CREATE INDEX IF NOT EXISTS idx_inventory_branch ON inventory(branch_location);
CREATE INDEX IF NOT EXISTS idx_inventory_vehicle ON inventory(vehicle_id);
"#;
