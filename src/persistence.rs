//! Save-file format - a fixed-order, newline-delimited text record
//!
//! The schema is seven lines with no header and no version marker:
//! name, hunger, happiness, energy, cleanliness, age, money. The format
//! predates this codebase and stays byte-compatible with old saves.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::core::error::Result;

/// The external representation of a saved pet
///
/// Field order here mirrors the line order in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetRecord {
    pub name: String,
    pub hunger: i32,
    pub happiness: i32,
    pub energy: i32,
    pub cleanliness: i32,
    pub age: u64,
    pub money: i64,
}

/// Write the record to `path`, overwriting any previous save
///
/// Fails with `PetError::Io` when the destination cannot be written.
pub fn save(path: &Path, record: &PetRecord) -> Result<()> {
    let body = format!(
        "{}\n{}\n{}\n{}\n{}\n{}\n{}\n",
        record.name,
        record.hunger,
        record.happiness,
        record.energy,
        record.cleanliness,
        record.age,
        record.money,
    );
    fs::write(path, body)?;
    tracing::debug!(path = %path.display(), "saved pet state");
    Ok(())
}

/// Read a record back from `path`
///
/// Fails with `PetError::Io` only when the file cannot be opened. There is
/// no schema validation: a truncated or hand-edited file still loads, with
/// each missing or unparsable numeric line falling back to that field's
/// default. Known gap, kept for compatibility with the original format's
/// lack of any error path here.
pub fn load(path: &Path) -> Result<PetRecord> {
    let text = fs::read_to_string(path)?;
    let mut lines = text.lines();

    let name = lines.next().unwrap_or_default().to_string();
    let record = PetRecord {
        name,
        hunger: next_field(&mut lines),
        happiness: next_field(&mut lines),
        energy: next_field(&mut lines),
        cleanliness: next_field(&mut lines),
        age: next_field(&mut lines),
        money: next_field(&mut lines),
    };
    tracing::debug!(path = %path.display(), name = %record.name, "loaded pet state");
    Ok(record)
}

/// Parse the next line as `T`, defaulting on a short or malformed file
fn next_field<'a, T>(lines: &mut impl Iterator<Item = &'a str>) -> T
where
    T: FromStr + Default,
{
    lines
        .next()
        .and_then(|line| line.trim().parse().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pocketpet_{}_{}.txt", tag, std::process::id()))
    }

    fn sample() -> PetRecord {
        PetRecord {
            name: "Momo".into(),
            hunger: 40,
            happiness: 60,
            energy: 55,
            cleanliness: 70,
            age: 12,
            money: 35,
        }
    }

    #[test]
    fn round_trip_is_exact() {
        let path = scratch_path("roundtrip");
        let record = sample();

        save(&path, &record).unwrap();
        let loaded = load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, record);
    }

    #[test]
    fn file_layout_is_seven_fixed_lines() {
        let path = scratch_path("layout");
        save(&path, &sample()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(text, "Momo\n40\n60\n55\n70\n12\n35\n");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = scratch_path("definitely_not_there");
        assert!(load(&path).is_err());
    }

    #[test]
    fn truncated_file_loads_with_defaults() {
        let path = scratch_path("truncated");
        std::fs::write(&path, "Momo\n40\n60\n").unwrap();

        let loaded = load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.name, "Momo");
        assert_eq!(loaded.hunger, 40);
        assert_eq!(loaded.happiness, 60);
        assert_eq!(loaded.energy, 0);
        assert_eq!(loaded.money, 0);
    }

    #[test]
    fn garbage_numeric_line_defaults_without_error() {
        let path = scratch_path("garbage");
        std::fs::write(&path, "Momo\nforty\n60\n55\n70\n12\n35\n").unwrap();

        let loaded = load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.hunger, 0);
        assert_eq!(loaded.happiness, 60);
    }
}
