//! Inventory store repository.
//!
//! Sole authority over list/item persistence. The whole collection lives as
//! one JSON record under a fixed key, and every mutation is a synchronous
//! read-modify-write of that record, made immediately durable. Mutations are
//! serialized behind an async mutex so two in-flight requests cannot lose
//! each other's writes.

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use tokio::sync::Mutex;

use crate::errors::AppError;
use crate::models::{BrickItem, BrickList};

/// Fixed key the list collection is stored under.
const STORAGE_KEY: &str = "brickhunt_lists";

/// Repository for all inventory data operations.
pub struct Repository {
    pool: SqlitePool,
    write_lock: Mutex<()>,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            write_lock: Mutex::new(()),
        }
    }

    /// List every persisted list, in storage order.
    ///
    /// A missing or unparseable record is empty state, never an error.
    pub async fn list_all(&self) -> Result<Vec<BrickList>, AppError> {
        let row = sqlx::query("SELECT value FROM storage WHERE key = ?")
            .bind(STORAGE_KEY)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(Vec::new());
        };

        let raw: String = row.get("value");
        Ok(serde_json::from_str(&raw).unwrap_or_default())
    }

    /// Get a list by ID. Absence is `None`, not an error.
    pub async fn get(&self, list_id: &str) -> Result<Option<BrickList>, AppError> {
        let lists = self.list_all().await?;
        Ok(lists.into_iter().find(|l| l.id == list_id))
    }

    /// Create a new empty list and persist it.
    pub async fn create(
        &self,
        name: &str,
        set_num: Option<String>,
    ) -> Result<BrickList, AppError> {
        let now = Utc::now().timestamp_millis();
        let list = BrickList {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            set_num,
            created_at: now,
            updated_at: now,
            items: Vec::new(),
        };

        self.save(list.clone()).await?;
        Ok(list)
    }

    /// Upsert a list by ID, always stamping `updated_at` with the save time.
    pub async fn save(&self, list: BrickList) -> Result<BrickList, AppError> {
        let _guard = self.write_lock.lock().await;
        self.save_locked(list).await
    }

    /// Delete a list by ID; no-op if absent.
    pub async fn delete(&self, list_id: &str) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;

        let mut lists = self.list_all().await?;
        lists.retain(|l| l.id != list_id);
        self.write_record(&lists).await
    }

    /// Add an item to a list, merging with an existing entry for the same
    /// (part_num, color id) pair by accumulating quantity. The found count of
    /// a merged entry is untouched.
    ///
    /// Returns the updated list, or `None` if the list is absent (no-op).
    pub async fn add_item(
        &self,
        list_id: &str,
        item: BrickItem,
    ) -> Result<Option<BrickList>, AppError> {
        let _guard = self.write_lock.lock().await;

        let Some(mut list) = self.get(list_id).await? else {
            return Ok(None);
        };

        merge_item(&mut list, item);

        let list = self.save_locked(list).await?;
        Ok(Some(list))
    }

    /// Import a batch of items into a list in one save, applying the same
    /// merge rule per entry. The list is re-read under the write lock, so
    /// mutations that landed while the caller was fetching catalog data are
    /// preserved; `set_num` is stamped here for the same reason, and only if
    /// the list has none.
    ///
    /// Returns the updated list, or `None` if the list is absent.
    pub async fn add_items(
        &self,
        list_id: &str,
        items: Vec<BrickItem>,
        set_num: Option<String>,
    ) -> Result<Option<BrickList>, AppError> {
        let _guard = self.write_lock.lock().await;

        let Some(mut list) = self.get(list_id).await? else {
            return Ok(None);
        };

        if list.set_num.is_none() {
            list.set_num = set_num;
        }

        for item in items {
            merge_item(&mut list, item);
        }

        let list = self.save_locked(list).await?;
        Ok(Some(list))
    }

    /// Set an item's found count, clamped into `[0, quantity]`.
    ///
    /// Returns the list, or `None` if the list is absent. An unknown item ID
    /// leaves the list untouched and unsaved.
    pub async fn update_found(
        &self,
        list_id: &str,
        item_id: &str,
        found: i64,
    ) -> Result<Option<BrickList>, AppError> {
        let _guard = self.write_lock.lock().await;

        let Some(mut list) = self.get(list_id).await? else {
            return Ok(None);
        };

        let Some(item) = list.items.iter_mut().find(|i| i.id == item_id) else {
            return Ok(Some(list));
        };

        item.found = found.clamp(0, item.quantity);

        let list = self.save_locked(list).await?;
        Ok(Some(list))
    }

    /// Remove an item from a list by ID.
    ///
    /// Returns the list, or `None` if the list is absent. An unknown item ID
    /// leaves the item sequence unchanged, but the list is saved either way.
    pub async fn remove_item(
        &self,
        list_id: &str,
        item_id: &str,
    ) -> Result<Option<BrickList>, AppError> {
        let _guard = self.write_lock.lock().await;

        let Some(mut list) = self.get(list_id).await? else {
            return Ok(None);
        };

        list.items.retain(|i| i.id != item_id);

        let list = self.save_locked(list).await?;
        Ok(Some(list))
    }

    /// Upsert without taking the write lock; callers hold it already or are
    /// the lock-taking `save` wrapper.
    async fn save_locked(&self, mut list: BrickList) -> Result<BrickList, AppError> {
        list.updated_at = Utc::now().timestamp_millis();

        let mut lists = self.list_all().await?;
        match lists.iter_mut().find(|l| l.id == list.id) {
            Some(slot) => *slot = list.clone(),
            None => lists.push(list.clone()),
        }

        self.write_record(&lists).await?;
        Ok(list)
    }

    /// Serialize the full collection back under the fixed key.
    async fn write_record(&self, lists: &[BrickList]) -> Result<(), AppError> {
        let value = serde_json::to_string(lists)?;

        sqlx::query(
            "INSERT INTO storage (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(STORAGE_KEY)
        .bind(&value)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

/// Merge an incoming item into a list: accumulate quantity onto an existing
/// (part_num, color id) entry, or append as a new line. Part numbers are
/// compared verbatim; normalization happens at capture time, not here.
fn merge_item(list: &mut BrickList, item: BrickItem) {
    let existing = list
        .items
        .iter_mut()
        .find(|i| i.part.part_num == item.part.part_num && i.color.id == item.color.id);

    match existing {
        Some(existing) => existing.quantity += item.quantity,
        None => list.items.push(item),
    }
}
