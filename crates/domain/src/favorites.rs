use log::{error, warn};

use crate::{ExerciseID, ReadError, StorageError};

#[allow(async_fn_in_trait)]
pub trait FavoritesRepository {
    async fn read_favorites(&self) -> Result<Vec<ExerciseID>, ReadError>;
    async fn write_favorites(&self, favorites: &[ExerciseID]) -> Result<(), StorageError>;
}

/// In-memory set of favorite exercise ids backed by durable storage.
///
/// Ids are not checked against the catalog: an id without a catalog entry is
/// kept and ignored by consumers.
pub struct FavoritesStore<R> {
    repository: R,
    favorites: Vec<ExerciseID>,
}

impl<R: FavoritesRepository> FavoritesStore<R> {
    pub async fn load(repository: R) -> Self {
        let favorites = match repository.read_favorites().await {
            Ok(favorites) => favorites,
            Err(err) => {
                warn!("failed to read favorites: {err}");
                vec![]
            }
        };
        Self {
            repository,
            favorites,
        }
    }

    #[must_use]
    pub fn favorites(&self) -> &[ExerciseID] {
        &self.favorites
    }

    #[must_use]
    pub fn is_favorite(&self, exercise_id: &ExerciseID) -> bool {
        self.favorites.contains(exercise_id)
    }

    /// Removes the id if it is a favorite, adds it otherwise. The in-memory
    /// set is updated first; a failed write is resolved by reloading from the
    /// durable layer.
    pub async fn toggle_favorite(&mut self, exercise_id: ExerciseID) -> bool {
        if let Some(index) = self.favorites.iter().position(|id| *id == exercise_id) {
            self.favorites.remove(index);
        } else {
            self.favorites.push(exercise_id);
        }
        if let Err(err) = self.repository.write_favorites(&self.favorites).await {
            error!("failed to toggle favorite: {err}");
            self.refresh().await;
            return false;
        }
        true
    }

    /// Reloads the set from durable storage, discarding in-memory state. An
    /// unreadable collection is treated as empty.
    pub async fn refresh(&mut self) {
        self.favorites = match self.repository.read_favorites().await {
            Ok(favorites) => favorites,
            Err(err) => {
                warn!("failed to read favorites: {err}");
                vec![]
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct FakeRepository {
        favorites: RefCell<Vec<ExerciseID>>,
        fail_writes: Cell<bool>,
        fail_reads: Cell<bool>,
    }

    impl FavoritesRepository for &FakeRepository {
        async fn read_favorites(&self) -> Result<Vec<ExerciseID>, ReadError> {
            if self.fail_reads.get() {
                return Err(StorageError::Malformed("not an array".into()).into());
            }
            Ok(self.favorites.borrow().clone())
        }

        async fn write_favorites(&self, favorites: &[ExerciseID]) -> Result<(), StorageError> {
            if self.fail_writes.get() {
                return Err(StorageError::Inaccessible("disk full".into()));
            }
            *self.favorites.borrow_mut() = favorites.to_vec();
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_load_with_unreadable_storage() {
        let repository = FakeRepository::default();
        repository.fail_reads.set(true);

        let store = FavoritesStore::load(&repository).await;

        assert_eq!(store.favorites(), []);
    }

    #[tokio::test]
    async fn test_toggle_favorite() {
        let repository = FakeRepository::default();
        let mut store = FavoritesStore::load(&repository).await;

        assert!(!store.is_favorite(&ExerciseID::from("2")));

        assert!(store.toggle_favorite(ExerciseID::from("2")).await);

        assert!(store.is_favorite(&ExerciseID::from("2")));
        assert_eq!(*repository.favorites.borrow(), [ExerciseID::from("2")]);

        assert!(store.toggle_favorite(ExerciseID::from("2")).await);

        assert!(!store.is_favorite(&ExerciseID::from("2")));
        assert_eq!(*repository.favorites.borrow(), []);
    }

    #[tokio::test]
    async fn test_toggle_favorite_is_involution() {
        let repository = FakeRepository::default();
        *repository.favorites.borrow_mut() = vec![ExerciseID::from("1"), ExerciseID::from("3")];
        let mut store = FavoritesStore::load(&repository).await;

        for exercise_id in ["1", "2"] {
            let before = store.favorites().to_vec();

            assert!(store.toggle_favorite(ExerciseID::from(exercise_id)).await);
            assert!(store.toggle_favorite(ExerciseID::from(exercise_id)).await);

            assert_eq!(
                store.is_favorite(&ExerciseID::from(exercise_id)),
                before.contains(&ExerciseID::from(exercise_id))
            );
        }
    }

    #[tokio::test]
    async fn test_toggle_favorite_keeps_ids_unique() {
        let repository = FakeRepository::default();
        let mut store = FavoritesStore::load(&repository).await;

        assert!(store.toggle_favorite(ExerciseID::from("2")).await);
        assert!(store.toggle_favorite(ExerciseID::from("3")).await);
        assert!(store.toggle_favorite(ExerciseID::from("2")).await);
        assert!(store.toggle_favorite(ExerciseID::from("2")).await);

        assert_eq!(
            store.favorites(),
            [ExerciseID::from("3"), ExerciseID::from("2")]
        );
    }

    #[tokio::test]
    async fn test_toggle_favorite_write_failure() {
        let repository = FakeRepository::default();
        *repository.favorites.borrow_mut() = vec![ExerciseID::from("1")];
        let mut store = FavoritesStore::load(&repository).await;
        repository.fail_writes.set(true);

        assert!(!store.toggle_favorite(ExerciseID::from("2")).await);

        assert_eq!(store.favorites(), [ExerciseID::from("1")]);
        assert_eq!(*repository.favorites.borrow(), [ExerciseID::from("1")]);
    }

    #[tokio::test]
    async fn test_refresh_discards_memory() {
        let repository = FakeRepository::default();
        let mut store = FavoritesStore::load(&repository).await;
        assert!(store.toggle_favorite(ExerciseID::from("2")).await);

        *repository.favorites.borrow_mut() = vec![ExerciseID::from("7")];
        store.refresh().await;

        assert_eq!(store.favorites(), [ExerciseID::from("7")]);
    }
}
