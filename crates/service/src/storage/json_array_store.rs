use std::{io::ErrorKind, path::PathBuf, sync::Arc};
use tokio::{fs, sync::RwLock};

use crate::errors::ServiceError;

/// Generic JSON file-backed append-only array store.
///
/// Persists a `Vec<T>` to a JSON array file and only ever adds entries to
/// the end. Intended for lightweight submission logs where a database is
/// overkill. Appends are serialized through a per-store write lock, and the
/// file is replaced via write-to-temp-then-rename so readers never observe
/// a partial write. Multi-process writers are out of scope.
#[derive(Clone)]
pub struct JsonArrayStore<T> {
    inner: Arc<RwLock<Vec<T>>>,
    file_path: PathBuf,
}

impl<T> JsonArrayStore<T>
where
    T: serde::Serialize + serde::de::DeserializeOwned + Clone,
{
    /// Initialize the store from a path. Creates the file with an empty
    /// array if missing; an existing file is loaded as-is, never truncated.
    pub async fn new<P: Into<PathBuf>>(path: P) -> Result<Arc<Self>, ServiceError> {
        let file_path = path.into();
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).await.ok();
        }

        let items: Vec<T> = match fs::read(&file_path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(ServiceError::storage)?,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let empty: Vec<T> = Vec::new();
                fs::write(&file_path, serde_json::to_vec_pretty(&empty).map_err(ServiceError::storage)?)
                    .await
                    .map_err(ServiceError::storage)?;
                empty
            }
            Err(e) => return Err(ServiceError::storage(e)),
        };

        Ok(Arc::new(Self { inner: Arc::new(RwLock::new(items)), file_path }))
    }

    async fn persist(&self, items: &[T]) -> Result<(), ServiceError> {
        let data = serde_json::to_vec_pretty(items).map_err(ServiceError::storage)?;
        let tmp = self.file_path.with_extension("json.tmp");
        fs::write(&tmp, data).await.map_err(ServiceError::storage)?;
        fs::rename(&tmp, &self.file_path).await.map_err(ServiceError::storage)?;
        Ok(())
    }

    /// Full collection in insertion order.
    pub async fn list(&self) -> Vec<T> {
        let items = self.inner.read().await;
        items.clone()
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        let items = self.inner.read().await;
        items.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Append an entry and persist.
    pub async fn append(&self, item: T) -> Result<(), ServiceError> {
        self.append_with(item, |_| Ok(())).await
    }

    /// Append an entry after running `check` against the current snapshot,
    /// all under the write lock. A failing check leaves the collection
    /// untouched; a failing persist rolls the in-memory append back.
    pub async fn append_with<F>(&self, item: T, check: F) -> Result<(), ServiceError>
    where
        F: FnOnce(&[T]) -> Result<(), ServiceError>,
    {
        let mut items = self.inner.write().await;
        check(&items)?;
        items.push(item);
        if let Err(e) = self.persist(&items).await {
            items.pop();
            return Err(e);
        }
        Ok(())
    }
}
