use std::{
    fs,
    io::ErrorKind,
    path::PathBuf,
};

use log::debug;
use robur_domain as domain;
use strum::AsRefStr;

use crate::document::WorkoutDocument;

/// File-backed key-value store holding one JSON document per key.
///
/// Documents are read and written whole. A missing document is an empty
/// collection.
pub struct FileStorage {
    dir: PathBuf,
}

#[derive(AsRefStr, Clone, Copy)]
enum Key {
    #[strum(serialize = "gym_app_favorites")]
    Favorites,
    #[strum(serialize = "gym_app_workouts")]
    Workouts,
}

impl FileStorage {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path(&self, key: Key) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_ref()))
    }

    fn read<T: for<'de> serde::Deserialize<'de>>(
        &self,
        key: Key,
    ) -> Result<Vec<T>, domain::ReadError> {
        let content = match fs::read_to_string(self.path(key)) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("no document for key {}", key.as_ref());
                return Ok(vec![]);
            }
            Err(err) => {
                return Err(domain::StorageError::Inaccessible(err.to_string()).into());
            }
        };
        serde_json::from_str(&content)
            .map_err(|err| domain::StorageError::Malformed(err.to_string()).into())
    }

    fn write<T: serde::Serialize>(
        &self,
        key: Key,
        entries: &[T],
    ) -> Result<(), domain::StorageError> {
        fs::create_dir_all(&self.dir)
            .map_err(|err| domain::StorageError::Inaccessible(err.to_string()))?;
        let content = serde_json::to_string(entries)
            .map_err(|err| domain::StorageError::Malformed(err.to_string()))?;
        fs::write(self.path(key), content)
            .map_err(|err| domain::StorageError::Inaccessible(err.to_string()))
    }
}

impl domain::FavoritesRepository for FileStorage {
    async fn read_favorites(&self) -> Result<Vec<domain::ExerciseID>, domain::ReadError> {
        Ok(self
            .read::<String>(Key::Favorites)?
            .into_iter()
            .map(domain::ExerciseID::from)
            .collect())
    }

    async fn write_favorites(
        &self,
        favorites: &[domain::ExerciseID],
    ) -> Result<(), domain::StorageError> {
        let entries = favorites
            .iter()
            .map(|id| id.as_ref().clone())
            .collect::<Vec<String>>();
        self.write(Key::Favorites, &entries)
    }
}

impl domain::WorkoutRepository for FileStorage {
    async fn read_workouts(&self) -> Result<Vec<domain::Workout>, domain::ReadError> {
        self.read::<WorkoutDocument>(Key::Workouts)?
            .into_iter()
            .map(|document| {
                domain::Workout::try_from(document)
                    .map_err(|err| domain::StorageError::Malformed(err.to_string()).into())
            })
            .collect()
    }

    async fn write_workouts(
        &self,
        workouts: &[domain::Workout],
    ) -> Result<(), domain::StorageError> {
        let documents = workouts.iter().map(WorkoutDocument::from).collect::<Vec<_>>();
        self.write(Key::Workouts, &documents)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use robur_domain::{FavoritesRepository, WorkoutRepository};

    use super::*;

    fn workout(name: &str) -> domain::Workout {
        let created_at = domain::Timestamp::now();
        domain::Workout {
            id: domain::WorkoutID::generate(created_at),
            name: domain::Name::new(name).unwrap(),
            description: None,
            exercises: vec![domain::WorkoutExercise {
                exercise_id: domain::ExerciseID::from("2"),
                sets: vec![domain::WorkoutSet {
                    repetitions: domain::Reps::new(10).unwrap(),
                    weight: Some(domain::Weight::new(40.0).unwrap()),
                    duration: None,
                    rest_time: None,
                }],
            }],
            created_at,
            updated_at: created_at,
        }
    }

    #[tokio::test]
    async fn test_read_favorites_without_document() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert_eq!(storage.read_favorites().await.unwrap(), []);
    }

    #[tokio::test]
    async fn test_favorites_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        let favorites = vec![domain::ExerciseID::from("2"), domain::ExerciseID::from("17")];

        storage.write_favorites(&favorites).await.unwrap();

        assert_eq!(storage.read_favorites().await.unwrap(), favorites);
        assert_eq!(
            fs::read_to_string(dir.path().join("gym_app_favorites.json")).unwrap(),
            r#"["2","17"]"#
        );
    }

    #[tokio::test]
    async fn test_read_workouts_without_document() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert_eq!(storage.read_workouts().await.unwrap(), []);
    }

    #[tokio::test]
    async fn test_workouts_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        let workouts = vec![workout("Leg Day"), workout("Push Day")];

        storage.write_workouts(&workouts).await.unwrap();

        assert_eq!(storage.read_workouts().await.unwrap(), workouts);

        let content = fs::read_to_string(dir.path().join("gym_app_workouts.json")).unwrap();
        assert!(content.contains("\"exerciseId\":\"2\""));
        assert!(content.contains("\"createdAt\""));
    }

    #[tokio::test]
    async fn test_read_malformed_document() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        fs::write(dir.path().join("gym_app_workouts.json"), "{").unwrap();

        assert!(matches!(
            storage.read_workouts().await,
            Err(domain::ReadError::Storage(domain::StorageError::Malformed(
                _
            )))
        ));
    }

    #[tokio::test]
    async fn test_read_invalid_set_data() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        fs::write(
            dir.path().join("gym_app_workouts.json"),
            r#"[{"id":"workout_1_a","name":"Leg Day","exercises":[{"exerciseId":"2","sets":[{"repetitions":0}]}],"createdAt":1,"updatedAt":1}]"#,
        )
        .unwrap();

        assert!(matches!(
            storage.read_workouts().await,
            Err(domain::ReadError::Storage(domain::StorageError::Malformed(
                _
            )))
        ));
    }

    #[tokio::test]
    async fn test_write_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("data"));

        storage
            .write_favorites(&[domain::ExerciseID::from("2")])
            .await
            .unwrap();

        assert_eq!(
            storage.read_favorites().await.unwrap(),
            [domain::ExerciseID::from("2")]
        );
    }
}
