//! Sample inputs for registry tests.

use contact_registry::NewContact;
use std::fs;
use std::path::PathBuf;

pub const FIRST_NAME: &str = "John";
pub const LAST_NAME: &str = "Doe";
pub const PHONE_NUMBER: &str = "0123456789";

/// The canonical valid insertion input.
pub fn john_doe() -> NewContact {
    NewContact::new(FIRST_NAME, LAST_NAME, PHONE_NUMBER)
}

/// Phone numbers accepted as-is; the registry applies no format rule.
#[allow(dead_code)]
pub fn phone_number_list() -> Vec<&'static str> {
    vec!["0123456789", "0123456798", "@12345678"]
}

/// Load phone numbers from a CSV file under `tests/data`.
///
/// Takes the first column of each row, skipping blank lines and `#` comments.
///
/// # Panics
/// Panics if the file cannot be read.
#[allow(dead_code)]
pub fn load_phone_numbers(file_name: &str) -> Vec<String> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(file_name);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));

    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split(',').next())
        .map(|value| value.trim().to_string())
        .collect()
}
