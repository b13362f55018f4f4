#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod error;
mod exercise;
mod favorites;
mod name;
mod workout;

pub use error::{CreateError, ReadError, StorageError};
pub use exercise::{
    Category, Difficulty, Exercise, ExerciseFilter, ExerciseID, Media, MuscleGroup, Property,
};
pub use favorites::{FavoritesRepository, FavoritesStore};
pub use name::{Name, NameError};
pub use workout::{
    Reps, RepsError, Time, TimeError, Timestamp, Weight, WeightError, Workout, WorkoutExercise,
    WorkoutID, WorkoutRepository, WorkoutSet, WorkoutStore,
};
