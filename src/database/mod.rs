//! Flat-file booking store.
//!
//! The whole booking list lives in one pretty-printed JSON array. Every
//! mutation is a load-modify-save of that array, run while holding the
//! store's writer lock so two handlers in this process cannot overwrite each
//! other's changes. Nothing guards against a second process using the file.

use std::{
    fs, io,
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, AtomicI64, Ordering},
};

use log::{debug, error, info};
use parking_lot::Mutex;
use thiserror::Error;

use crate::{
    models::bookings::{Booking, NewBooking},
    utils,
};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read bookings file: {0}")]
    Read(#[source] io::Error),
    #[error("bookings file is not a valid booking list: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("failed to encode bookings: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to write bookings file: {0}")]
    Write(#[source] io::Error),
    #[error("no booking with id {0}")]
    NotFound(i64),
    #[error("booking ids exhausted, last id is {0}")]
    IdsExhausted(i64),
}

pub struct BookingStore {
    path: PathBuf,
    writer: Mutex<()>,
    last_id: AtomicI64,
    readable: AtomicBool,
}

impl BookingStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            writer: Mutex::new(()),
            last_id: AtomicI64::new(0),
            readable: AtomicBool::new(true),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the last load managed to read the file. An absent file counts
    /// as readable.
    pub fn is_readable(&self) -> bool {
        self.readable.load(Ordering::SeqCst)
    }

    /// Writes an empty list if the file does not exist yet.
    pub fn ensure_exists(&self) -> Result<bool, StoreError> {
        let _guard = self.writer.lock();
        if self.path.exists() {
            return Ok(false);
        }
        self.save_unlocked(&[])?;
        info!("Created empty {}", self.path.display());
        Ok(true)
    }

    /// Reads every booking in file order.
    ///
    /// Never fails: a missing file is an empty store, and an unreadable or
    /// corrupt one is logged, flagged through [`is_readable`], and also
    /// treated as empty. The next successful write replaces its contents.
    ///
    /// [`is_readable`]: BookingStore::is_readable
    pub fn load(&self) -> Vec<Booking> {
        let _guard = self.writer.lock();
        self.load_unlocked()
    }

    pub fn save(&self, bookings: &[Booking]) -> Result<(), StoreError> {
        let _guard = self.writer.lock();
        self.save_unlocked(bookings)
    }

    /// Millisecond wall-clock id, bumped past the last id this store handed
    /// out so two creations in the same millisecond still differ.
    pub fn generate_id(&self) -> Result<i64, StoreError> {
        let now = utils::now_millis();
        let prev = self
            .last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                last.checked_add(1).map(|next| now.max(next))
            })
            .map_err(StoreError::IdsExhausted)?;
        Ok(now.max(prev + 1))
    }

    pub fn append(&self, new_booking: NewBooking) -> Result<Booking, StoreError> {
        let _guard = self.writer.lock();

        let mut bookings = self.load_unlocked();
        if let Some(max_id) = bookings.iter().map(|b| b.id).max() {
            self.last_id.fetch_max(max_id, Ordering::SeqCst);
        }

        let booking = new_booking.into_booking(self.generate_id()?, utils::now_time_str());
        bookings.push(booking.clone());
        self.save_unlocked(&bookings)?;

        info!("New booking created: {}", booking.id);
        Ok(booking)
    }

    pub fn remove(&self, id: i64) -> Result<Booking, StoreError> {
        let _guard = self.writer.lock();

        let mut bookings = self.load_unlocked();
        let pos = bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = bookings.remove(pos);
        // ids are unique, but a hand-edited file may repeat one
        bookings.retain(|b| b.id != id);
        self.save_unlocked(&bookings)?;

        info!("Booking deleted: {}", id);
        Ok(removed)
    }

    fn load_unlocked(&self) -> Vec<Booking> {
        match self.read_document() {
            Ok(bookings) => {
                self.readable.store(true, Ordering::SeqCst);
                bookings
            }
            Err(err) => {
                error!("Error loading bookings from {}: {}", self.path.display(), err);
                self.readable.store(false, Ordering::SeqCst);
                Vec::new()
            }
        }
    }

    fn read_document(&self) -> Result<Vec<Booking>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("{} does not exist, treating as empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(err) => return Err(StoreError::Read(err)),
        };
        serde_json::from_str(&raw).map_err(StoreError::Parse)
    }

    fn save_unlocked(&self, bookings: &[Booking]) -> Result<(), StoreError> {
        let res = serde_json::to_string_pretty(bookings)
            .map_err(StoreError::Encode)
            .and_then(|doc| fs::write(&self.path, doc).map_err(StoreError::Write));
        if let Err(err) = &res {
            error!("Error saving bookings to {}: {}", self.path.display(), err);
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{sync::Arc, thread};
    use tempfile::TempDir;

    fn new_booking(name: &str, email: &str, phone: &str) -> NewBooking {
        NewBooking {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            date: "2024-05-01".to_string(),
            time: "10:00".to_string(),
            number_of_people: 2,
            details: "window seat".to_string(),
        }
    }

    fn temp_store() -> (TempDir, BookingStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = BookingStore::new(dir.path().join("bookings.json"));
        (dir, store)
    }

    #[test]
    fn missing_file_loads_empty() {
        let (_dir, store) = temp_store();
        assert!(store.load().is_empty());
        assert!(store.is_readable());
    }

    #[test]
    fn corrupt_file_loads_empty_and_flags_unreadable() {
        let (_dir, store) = temp_store();
        fs::write(store.path(), "{ not json").unwrap();

        assert!(store.load().is_empty());
        assert!(!store.is_readable());

        store.save(&[]).unwrap();
        store.load();
        assert!(store.is_readable());
    }

    #[test]
    fn ensure_exists_writes_empty_list_once() {
        let (_dir, store) = temp_store();
        assert!(store.ensure_exists().unwrap());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "[]");
        assert!(!store.ensure_exists().unwrap());
    }

    #[test]
    fn save_then_load_preserves_order_and_fields() {
        let (_dir, store) = temp_store();
        let bookings = vec![
            new_booking("Zed", "z@x.com", "111").into_booking(30, "2024-01-01T00:00:00.000000".into()),
            new_booking("Amy", "a@x.com", "222").into_booking(10, "2024-01-02T00:00:00.000000".into()),
        ];
        store.save(&bookings).unwrap();
        assert_eq!(store.load(), bookings);
    }

    #[test]
    fn saved_document_is_two_space_indented_with_camel_case_people() {
        let (_dir, store) = temp_store();
        store.append(new_booking("Amy", "a@x.com", "222")).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(raw.starts_with("[\n  {\n    \"id\": "));
        assert!(raw.contains("\"numberOfPeople\": 2"));
    }

    #[test]
    fn append_assigns_unique_ids_and_confirmed_status() {
        let (_dir, store) = temp_store();
        let first = store.append(new_booking("Amy", "a@x.com", "1")).unwrap();
        let second = store.append(new_booking("Bob", "b@x.com", "2")).unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.status, "confirmed");
        assert_eq!(store.load(), vec![first, second]);
    }

    #[test]
    fn append_never_reuses_an_id_already_on_disk() {
        let (_dir, store) = temp_store();
        let future_id = utils::now_millis() + 1_000_000;
        let existing = new_booking("Amy", "a@x.com", "1").into_booking(future_id, String::new());
        store.save(&[existing]).unwrap();

        let created = store.append(new_booking("Bob", "b@x.com", "2")).unwrap();
        assert_eq!(created.id, future_id + 1);
    }

    #[test]
    fn generate_id_is_strictly_increasing() {
        let (_dir, store) = temp_store();
        let ids: Vec<i64> = (0..1000).map(|_| store.generate_id().unwrap()).collect();
        assert!(ids.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn max_id_on_disk_fails_append_without_writing() {
        let (_dir, store) = temp_store();
        let existing = new_booking("Amy", "a@x.com", "1").into_booking(i64::MAX, String::new());
        store.save(&[existing]).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        match store.append(new_booking("Bob", "b@x.com", "2")) {
            Err(StoreError::IdsExhausted(i64::MAX)) => {}
            other => panic!("expected IdsExhausted, got {:?}", other),
        }
        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn remove_drops_exactly_one_record() {
        let (_dir, store) = temp_store();
        let first = store.append(new_booking("Amy", "a@x.com", "1")).unwrap();
        let second = store.append(new_booking("Bob", "b@x.com", "2")).unwrap();

        let removed = store.remove(first.id).unwrap();
        assert_eq!(removed, first);
        assert_eq!(store.load(), vec![second]);
    }

    #[test]
    fn remove_unknown_id_leaves_file_untouched() {
        let (_dir, store) = temp_store();
        store.append(new_booking("Amy", "a@x.com", "1")).unwrap();
        let before = fs::read_to_string(store.path()).unwrap();

        match store.remove(42) {
            Err(StoreError::NotFound(42)) => {}
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn save_into_missing_directory_reports_write_error() {
        let (dir, _) = temp_store();
        let store = BookingStore::new(dir.path().join("nope").join("bookings.json"));
        match store.save(&[]) {
            Err(StoreError::Write(_)) => {}
            other => panic!("expected Write error, got {:?}", other),
        }
    }

    #[test]
    fn concurrent_appends_lose_nothing() {
        let (_dir, store) = temp_store();
        let store = Arc::new(store);

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    for i in 0..10 {
                        let name = format!("guest-{}-{}", t, i);
                        store.append(new_booking(&name, "g@x.com", "0")).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let bookings = store.load();
        assert_eq!(bookings.len(), 80);
        let mut ids: Vec<i64> = bookings.iter().map(|b| b.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 80);
    }
}
