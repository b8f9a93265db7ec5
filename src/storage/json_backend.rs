use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;

use crate::tracker::Entry;
use crate::utils::app_data_dir;

use super::{Result, StorageBackend, DEFAULT_CALORIE_LIMIT};

const LIMIT_FILE: &str = "limit.json";
const TOTAL_FILE: &str = "total.json";
const MEALS_FILE: &str = "meals.json";
const WORKOUTS_FILE: &str = "workouts.json";
const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed JSON persistence, one file per logical key. Writes are
/// staged to a sibling temp file and renamed into place so a failed write
/// leaves the previous snapshot untouched.
#[derive(Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    /// Opens (creating if needed) the storage directory. Without an explicit
    /// root, state lives in the application data directory.
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    fn read_value<T: DeserializeOwned>(&self, file: &str) -> Option<T> {
        let data = match fs::read_to_string(self.key_path(file)) {
            Ok(data) => data,
            Err(_) => return None,
        };
        serde_json::from_str(&data).ok()
    }

    fn write_value<T: Serialize>(&self, file: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        let path = self.key_path(file);
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn entries(&self, file: &str) -> Vec<Entry> {
        self.read_value(file).unwrap_or_default()
    }

    fn append_entry(&self, file: &str, entry: &Entry) -> Result<()> {
        let mut entries = self.entries(file);
        entries.push(entry.clone());
        self.write_value(file, &entries)
    }

    fn remove_entry(&self, file: &str, id: Uuid) -> Result<()> {
        let mut entries = self.entries(file);
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        if entries.len() == before {
            return Ok(());
        }
        self.write_value(file, &entries)
    }

    fn remove_key(&self, file: &str) -> Result<()> {
        let path = self.key_path(file);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

impl StorageBackend for JsonStorage {
    fn calorie_limit(&self) -> i64 {
        self.read_value(LIMIT_FILE).unwrap_or(DEFAULT_CALORIE_LIMIT)
    }

    fn set_calorie_limit(&self, limit: i64) -> Result<()> {
        self.write_value(LIMIT_FILE, &limit)
    }

    fn total_calories(&self, default: i64) -> i64 {
        self.read_value(TOTAL_FILE).unwrap_or(default)
    }

    fn update_total_calories(&self, total: i64) -> Result<()> {
        self.write_value(TOTAL_FILE, &total)
    }

    fn meals(&self) -> Vec<Entry> {
        self.entries(MEALS_FILE)
    }

    fn save_meal(&self, entry: &Entry) -> Result<()> {
        self.append_entry(MEALS_FILE, entry)
    }

    fn remove_meal(&self, id: Uuid) -> Result<()> {
        self.remove_entry(MEALS_FILE, id)
    }

    fn workouts(&self) -> Vec<Entry> {
        self.entries(WORKOUTS_FILE)
    }

    fn save_workout(&self, entry: &Entry) -> Result<()> {
        self.append_entry(WORKOUTS_FILE, entry)
    }

    fn remove_workout(&self, id: Uuid) -> Result<()> {
        self.remove_entry(WORKOUTS_FILE, id)
    }

    fn clear_all(&self) -> Result<()> {
        self.remove_key(LIMIT_FILE)?;
        self.remove_key(TOTAL_FILE)?;
        self.remove_key(MEALS_FILE)?;
        self.remove_key(WORKOUTS_FILE)?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
