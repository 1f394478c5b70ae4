// crates/rd-core/src/store.rs - Persistent Reminder Store
//
// The store owns every reminder ever created. It lives in a single JSON file
// that is read once when the store is opened and rewritten in full after
// each mutation.
//
// FILE LAYOUT:
// ```json
// {
//   "next_id": 4,
//   "reminders": [
//     { "id": 3, "text": "call mom", "scheduled_for": null,
//       "created_at": "2026-10-18T12:00:00Z", "done": false, "completed_at": null }
//   ]
// }
// ```
//
// Completed reminders are flagged rather than deleted, and `next_id` only
// ever grows, so an id handed out once is never handed out again.
//
// There is no locking: two `rd` processes writing at the same moment can
// lose one of the writes.

use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{RdError, Result};
use crate::reminder::{Reminder, ReminderId};
use crate::schedule::Schedule;

/// On-disk representation of the store
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    next_id: ReminderId,
    #[serde(default)]
    reminders: Vec<Reminder>,
}

/// Handle to the reminder store backing one `rd` invocation
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    file: StoreFile,
}

impl Store {
    /// Open the store at `path`
    ///
    /// A missing file is an empty store; nothing is written until the first
    /// mutation. A file that exists but can't be parsed is `StorageCorrupt`.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            debug!("No store at {}, starting empty", path.display());
            return Ok(Self {
                path,
                file: StoreFile {
                    next_id: 1,
                    reminders: Vec::new(),
                },
            });
        }

        let content = fs::read_to_string(&path)?;
        let mut file: StoreFile =
            serde_json::from_str(&content).map_err(|e| RdError::StorageCorrupt {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        let mut seen = HashSet::new();
        for reminder in &file.reminders {
            if !seen.insert(reminder.id) {
                return Err(RdError::StorageCorrupt {
                    path,
                    reason: format!("duplicate reminder id {}", reminder.id),
                });
            }
        }

        // Never hand out an id at or below one already in the file
        let floor = file.reminders.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        file.next_id = file.next_id.max(floor);

        debug!(
            "Loaded {} reminders from {}",
            file.reminders.len(),
            path.display()
        );

        Ok(Self { path, file })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a new active reminder and persist it, returning its id
    pub fn add(&mut self, text: &str, scheduled_for: Option<Schedule>) -> Result<ReminderId> {
        self.add_at(text, scheduled_for, Utc::now())
    }

    /// `add` with an explicit creation time
    pub fn add_at(
        &mut self,
        text: &str,
        scheduled_for: Option<Schedule>,
        created_at: DateTime<Utc>,
    ) -> Result<ReminderId> {
        let text = text.trim();
        if text.is_empty() {
            return Err(RdError::InvalidArguments(
                "reminder text must not be empty".to_string(),
            ));
        }

        let id = self.file.next_id;
        self.file.next_id += 1;
        self.file
            .reminders
            .push(Reminder::new(id, text, scheduled_for, created_at));
        self.save()?;

        debug!("Added reminder {}", id);
        Ok(id)
    }

    /// Flag the reminder with `id` as done and persist the change
    ///
    /// Returns the completed record. Fails with `NotFound` when no reminder
    /// has that id or when it was already completed, leaving the file
    /// untouched.
    pub fn mark_done(&mut self, id: ReminderId) -> Result<Reminder> {
        let reminder = self
            .file
            .reminders
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| RdError::NotFound(format!("no reminder with id {}", id)))?;

        if reminder.done {
            return Err(RdError::NotFound(format!(
                "reminder {} is already done",
                id
            )));
        }

        reminder.done = true;
        reminder.completed_at = Some(Utc::now());
        let completed = reminder.clone();
        self.save()?;

        debug!("Marked reminder {} done", id);
        Ok(completed)
    }

    /// Active reminders, most recent first
    pub fn list_active(&self) -> Vec<&Reminder> {
        let mut active: Vec<_> = self.file.reminders.iter().filter(|r| r.is_active()).collect();
        active.sort_by(|a, b| Reminder::newest_first(a, b));
        active
    }

    /// Active reminders that are due at `now`, most recent first
    ///
    /// This is what `rd` shows and what `rd done N` numbers against.
    pub fn list_due(&self, now: NaiveDateTime, default_time: NaiveTime) -> Vec<&Reminder> {
        self.list_active()
            .into_iter()
            .filter(|r| r.is_due(now, default_time))
            .collect()
    }

    /// Every reminder including completed ones, most recent first
    pub fn list_all(&self) -> Vec<&Reminder> {
        let mut all: Vec<_> = self.file.reminders.iter().collect();
        all.sort_by(|a, b| Reminder::newest_first(a, b));
        all
    }

    /// Look up a reminder by its stable id
    pub fn get(&self, id: ReminderId) -> Option<&Reminder> {
        self.file.reminders.iter().find(|r| r.id == id)
    }

    /// Rewrite the whole store file
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&self.file).map_err(io::Error::other)?;
        fs::write(&self.path, content)?;

        debug!("Saved store to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime, TimeZone};
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> Store {
        Store::load(temp.path().join("rd.json")).unwrap()
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn texts(reminders: &[&Reminder]) -> Vec<String> {
        reminders.iter().map(|r| r.text.clone()).collect()
    }

    #[test]
    fn test_missing_file_is_empty_store() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        assert!(store.list_active().is_empty());
        assert!(!temp.path().join("rd.json").exists());
    }

    #[test]
    fn test_add_persists_and_reloads() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);
        let schedule = Schedule::new(
            NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
            Some(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
        );

        let plain = store.add("buy milk", None).unwrap();
        let timed = store.add("standup", Some(schedule)).unwrap();
        assert_ne!(plain, timed);

        let reloaded = store_in(&temp);
        assert_eq!(reloaded.get(plain).unwrap().scheduled_for, None);
        assert_eq!(reloaded.get(timed).unwrap().scheduled_for, Some(schedule));
        assert_eq!(reloaded.get(timed), store.get(timed));
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);

        assert!(matches!(
            store.add("   ", None),
            Err(RdError::InvalidArguments(_))
        ));
        assert!(!temp.path().join("rd.json").exists());
    }

    #[test]
    fn test_list_active_is_newest_first() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);

        store.add_at("first", None, at(100)).unwrap();
        store.add_at("second", None, at(200)).unwrap();
        store.add_at("third", None, at(200)).unwrap();

        assert_eq!(texts(&store.list_active()), vec!["third", "second", "first"]);
    }

    #[test]
    fn test_list_due_skips_future_schedules() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);
        let eight = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

        store.add_at("plain", None, at(100)).unwrap();
        store
            .add_at("monday", Some(Schedule::new(day, None)), at(200))
            .unwrap();
        let done = store.add_at("finished", None, at(300)).unwrap();
        store.mark_done(done).unwrap();

        let sunday = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        assert_eq!(texts(&store.list_due(sunday, eight)), vec!["plain"]);
        assert_eq!(
            texts(&store.list_due(day.and_time(eight), eight)),
            vec!["monday", "plain"]
        );
        assert_eq!(texts(&store.list_active()), vec!["monday", "plain"]);
    }

    #[test]
    fn test_mark_done_hides_and_second_call_is_not_found() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);

        let keep = store.add_at("keep", None, at(1)).unwrap();
        let finish = store.add_at("finish", None, at(2)).unwrap();

        let completed = store.mark_done(finish).unwrap();
        assert!(completed.done);
        assert!(completed.completed_at.is_some());
        assert_eq!(texts(&store.list_active()), vec!["keep"]);

        assert!(matches!(store.mark_done(finish), Err(RdError::NotFound(_))));

        // Retained on disk, still visible in the full listing
        let reloaded = store_in(&temp);
        assert_eq!(reloaded.list_active().len(), 1);
        assert_eq!(reloaded.list_all().len(), 2);
        assert!(reloaded.get(finish).unwrap().done);
        assert!(!reloaded.get(keep).unwrap().done);
    }

    #[test]
    fn test_mark_done_unknown_id_leaves_file_unchanged() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);
        store.add("only", None).unwrap();
        let before = fs::read(store.path()).unwrap();

        assert!(matches!(store.mark_done(999), Err(RdError::NotFound(_))));
        assert_eq!(fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);

        let a = store.add("a", None).unwrap();
        store.mark_done(a).unwrap();
        let b = store_in(&temp).add("b", None).unwrap();
        assert!(b > a);
    }

    #[test]
    fn test_next_id_is_raised_above_stored_ids() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("rd.json");
        fs::write(
            &path,
            r#"{"next_id":1,"reminders":[{"id":5,"text":"x","created_at":"2026-10-18T12:00:00Z"}]}"#,
        )
        .unwrap();

        let mut store = Store::load(&path).unwrap();
        assert_eq!(store.add("y", None).unwrap(), 6);
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("rd.json");

        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            Store::load(&path),
            Err(RdError::StorageCorrupt { .. })
        ));

        fs::write(&path, "").unwrap();
        assert!(matches!(
            Store::load(&path),
            Err(RdError::StorageCorrupt { .. })
        ));
    }

    #[test]
    fn test_duplicate_ids_are_corrupt() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("rd.json");
        fs::write(
            &path,
            r#"{"next_id":3,"reminders":[
                {"id":1,"text":"x","created_at":"2026-10-18T12:00:00Z"},
                {"id":1,"text":"y","created_at":"2026-10-18T12:00:01Z"}]}"#,
        )
        .unwrap();

        assert!(matches!(
            Store::load(&path),
            Err(RdError::StorageCorrupt { .. })
        ));
    }

    #[test]
    fn test_creates_parent_directories() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("dir").join("rd.json");

        let mut store = Store::load(&path).unwrap();
        store.add("deep", None).unwrap();
        assert!(path.exists());
    }

    proptest! {
        #[test]
        fn prop_active_listing_is_reverse_insertion(texts in prop::collection::vec("[a-z]{1,8}", 0..20)) {
            let temp = TempDir::new().unwrap();
            let mut store = store_in(&temp);

            for text in &texts {
                store.add(text, None).unwrap();
            }

            let listed: Vec<String> = store.list_active().iter().map(|r| r.text.clone()).collect();
            let mut expected = texts.clone();
            expected.reverse();
            prop_assert_eq!(listed, expected);
        }
    }
}
