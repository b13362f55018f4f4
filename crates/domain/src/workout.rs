use chrono::Utc;
use derive_more::{AsRef, Display, Into};
use log::{error, warn};
use uuid::Uuid;

use crate::{CreateError, ExerciseID, Name, ReadError, StorageError, catalog};

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    async fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
    async fn write_workouts(&self, workouts: &[Workout]) -> Result<(), StorageError>;
}

/// A named collection of exercises with per-exercise set data.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    pub id: WorkoutID,
    pub name: Name,
    pub description: Option<String>,
    pub exercises: Vec<WorkoutExercise>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Workout {
    #[must_use]
    pub fn exercise(&self, exercise_id: &ExerciseID) -> Option<&WorkoutExercise> {
        self.exercises.iter().find(|e| e.exercise_id == *exercise_id)
    }

    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn set_count(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now().max(self.updated_at.next());
    }
}

#[derive(AsRef, Debug, Display, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct WorkoutID(String);

impl WorkoutID {
    #[must_use]
    pub fn generate(created_at: Timestamp) -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self(format!(
            "workout_{}_{}",
            i64::from(created_at),
            &suffix[..9]
        ))
    }
}

impl From<&str> for WorkoutID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for WorkoutID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Milliseconds since the Unix epoch.
#[derive(
    Debug, Default, Display, Clone, Copy, Into, Hash, PartialEq, Eq, PartialOrd, Ord,
)]
pub struct Timestamp(i64);

impl Timestamp {
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<i64> for Timestamp {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutExercise {
    pub exercise_id: ExerciseID,
    pub sets: Vec<WorkoutSet>,
}

impl WorkoutExercise {
    #[must_use]
    pub fn has_sets(&self) -> bool {
        !self.sets.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutSet {
    pub repetitions: Reps,
    pub weight: Option<Weight>,
    pub duration: Option<Time>,
    pub rest_time: Option<Time>,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(1..1000).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Reps::new(parsed_value),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 1 to 999")]
    OutOfRange,
    #[error("Reps must be an integer")]
    ParseError,
}

#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub fn new(value: f32) -> Result<Self, WeightError> {
        if value <= 0.0 || value >= 1000.0 {
            return Err(WeightError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be greater than 0 and less than 1000 kg")]
    OutOfRange,
    #[error("Weight must be a decimal")]
    ParseError,
}

/// A duration in seconds, used for timed sets and rest times.
#[derive(Debug, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Time(u32);

impl Time {
    pub fn new(value: u32) -> Result<Self, TimeError> {
        if !(1..86400).contains(&value) {
            return Err(TimeError::OutOfRange);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Time {
    type Error = TimeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Time::new(parsed_value),
            Err(_) => Err(TimeError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TimeError {
    #[error("Time must be in the range 1 to 86399 s")]
    OutOfRange,
    #[error("Time must be an integer")]
    ParseError,
}

/// In-memory workout collection backed by durable storage.
///
/// The in-memory state is authoritative for reads. Every mutation is applied
/// in memory first and the complete collection is persisted afterwards; a
/// failed write is resolved by reloading from the durable layer.
pub struct WorkoutStore<R> {
    repository: R,
    workouts: Vec<Workout>,
}

impl<R: WorkoutRepository> WorkoutStore<R> {
    pub async fn load(repository: R) -> Self {
        let workouts = match repository.read_workouts().await {
            Ok(workouts) => workouts,
            Err(err) => {
                warn!("failed to read workouts: {err}");
                vec![]
            }
        };
        Self {
            repository,
            workouts,
        }
    }

    #[must_use]
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    #[must_use]
    pub fn workout(&self, id: &WorkoutID) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id == *id)
    }

    pub async fn add_workout(
        &mut self,
        name: Name,
        description: Option<String>,
        exercises: Vec<WorkoutExercise>,
    ) -> Result<Workout, CreateError> {
        let created_at = Timestamp::now();
        let workout = Workout {
            id: WorkoutID::generate(created_at),
            name,
            description,
            exercises,
            created_at,
            updated_at: created_at,
        };
        self.workouts.push(workout.clone());
        if let Err(err) = self.repository.write_workouts(&self.workouts).await {
            error!("failed to create workout: {err}");
            self.refresh().await;
            return Err(err.into());
        }
        Ok(workout)
    }

    /// Replaces the stored workout with the same id. The stored creation time
    /// is kept and the update time is refreshed.
    pub async fn update_workout(&mut self, workout: Workout) -> bool {
        let Some(stored) = self.workouts.iter_mut().find(|w| w.id == workout.id) else {
            return false;
        };
        let created_at = stored.created_at;
        let updated_at = stored.updated_at;
        *stored = workout;
        stored.created_at = created_at;
        stored.updated_at = updated_at;
        stored.touch();
        self.persist("update", "workout").await
    }

    pub async fn delete_workout(&mut self, id: &WorkoutID) -> bool {
        let Some(index) = self.workouts.iter().position(|w| w.id == *id) else {
            return false;
        };
        self.workouts.remove(index);
        self.persist("delete", "workout").await
    }

    /// Adds an exercise with an empty set list. Adding an exercise that is
    /// already part of the workout succeeds without changing anything.
    pub async fn add_exercise(&mut self, workout_id: &WorkoutID, exercise_id: ExerciseID) -> bool {
        if catalog::get(&exercise_id).is_none() {
            warn!("exercise {exercise_id} is not in the catalog");
            return false;
        }
        let Some(workout) = self.workouts.iter_mut().find(|w| w.id == *workout_id) else {
            return false;
        };
        if workout.exercises.iter().any(|e| e.exercise_id == exercise_id) {
            return true;
        }
        workout.exercises.push(WorkoutExercise {
            exercise_id,
            sets: vec![],
        });
        workout.touch();
        self.persist("add exercise to", "workout").await
    }

    pub async fn remove_exercise(
        &mut self,
        workout_id: &WorkoutID,
        exercise_id: &ExerciseID,
    ) -> bool {
        let Some(workout) = self.workouts.iter_mut().find(|w| w.id == *workout_id) else {
            return false;
        };
        workout.exercises.retain(|e| e.exercise_id != *exercise_id);
        workout.touch();
        self.persist("remove exercise from", "workout").await
    }

    /// Replaces the set list of an exercise within a workout. An empty set
    /// list is rejected.
    pub async fn update_exercise_sets(
        &mut self,
        workout_id: &WorkoutID,
        exercise_id: &ExerciseID,
        sets: Vec<WorkoutSet>,
    ) -> bool {
        if sets.is_empty() {
            warn!("refusing to replace sets of exercise {exercise_id} with an empty list");
            return false;
        }
        let Some(workout) = self.workouts.iter_mut().find(|w| w.id == *workout_id) else {
            return false;
        };
        let Some(exercise) = workout
            .exercises
            .iter_mut()
            .find(|e| e.exercise_id == *exercise_id)
        else {
            return false;
        };
        exercise.sets = sets;
        workout.touch();
        self.persist("update", "exercise sets").await
    }

    /// Reloads the collection from durable storage, discarding in-memory
    /// state. An unreadable collection is treated as empty.
    pub async fn refresh(&mut self) {
        self.workouts = match self.repository.read_workouts().await {
            Ok(workouts) => workouts,
            Err(err) => {
                warn!("failed to read workouts: {err}");
                vec![]
            }
        };
    }

    async fn persist(&mut self, action: &str, entity: &str) -> bool {
        if let Err(err) = self.repository.write_workouts(&self.workouts).await {
            error!("failed to {action} {entity}: {err}");
            self.refresh().await;
            return false;
        }
        true
    }
}
