//! Persisted document models.
//!
//! The stored JSON shape is part of the on-device data format and must not
//! change with internal refactorings. Conversion into domain types is
//! fallible: documents that violate domain invariants are rejected as a
//! whole.

use robur_domain as domain;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDocument {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub exercises: Vec<WorkoutExerciseDocument>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExerciseDocument {
    pub exercise_id: String,
    pub sets: Vec<WorkoutSetDocument>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSetDocument {
    pub repetitions: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_time: Option<u32>,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DocumentError {
    #[error(transparent)]
    Name(#[from] domain::NameError),
    #[error(transparent)]
    Reps(#[from] domain::RepsError),
    #[error(transparent)]
    Weight(#[from] domain::WeightError),
    #[error(transparent)]
    Time(#[from] domain::TimeError),
}

impl From<&domain::Workout> for WorkoutDocument {
    fn from(value: &domain::Workout) -> Self {
        Self {
            id: value.id.as_ref().clone(),
            name: value.name.as_ref().clone(),
            description: value.description.clone(),
            exercises: value.exercises.iter().map(Into::into).collect(),
            created_at: i64::from(value.created_at),
            updated_at: i64::from(value.updated_at),
        }
    }
}

impl TryFrom<WorkoutDocument> for domain::Workout {
    type Error = DocumentError;

    fn try_from(value: WorkoutDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            id: domain::WorkoutID::from(value.id),
            name: domain::Name::new(&value.name)?,
            description: value.description,
            exercises: value
                .exercises
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_, _>>()?,
            created_at: domain::Timestamp::from(value.created_at),
            updated_at: domain::Timestamp::from(value.updated_at),
        })
    }
}

impl From<&domain::WorkoutExercise> for WorkoutExerciseDocument {
    fn from(value: &domain::WorkoutExercise) -> Self {
        Self {
            exercise_id: value.exercise_id.as_ref().clone(),
            sets: value.sets.iter().map(Into::into).collect(),
        }
    }
}

impl TryFrom<WorkoutExerciseDocument> for domain::WorkoutExercise {
    type Error = DocumentError;

    fn try_from(value: WorkoutExerciseDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            exercise_id: domain::ExerciseID::from(value.exercise_id),
            sets: value
                .sets
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_, _>>()?,
        })
    }
}

impl From<&domain::WorkoutSet> for WorkoutSetDocument {
    fn from(value: &domain::WorkoutSet) -> Self {
        Self {
            repetitions: u32::from(value.repetitions),
            weight: value.weight.map(f32::from),
            duration: value.duration.map(u32::from),
            rest_time: value.rest_time.map(u32::from),
        }
    }
}

impl TryFrom<WorkoutSetDocument> for domain::WorkoutSet {
    type Error = DocumentError;

    fn try_from(value: WorkoutSetDocument) -> Result<Self, Self::Error> {
        Ok(Self {
            repetitions: domain::Reps::new(value.repetitions)?,
            weight: value.weight.map(domain::Weight::new).transpose()?,
            duration: value.duration.map(domain::Time::new).transpose()?,
            rest_time: value.rest_time.map(domain::Time::new).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn workout() -> domain::Workout {
        domain::Workout {
            id: domain::WorkoutID::from("workout_1700000000000_a1b2c3d4e"),
            name: domain::Name::new("Leg Day").unwrap(),
            description: Some("Squats first".to_string()),
            exercises: vec![
                domain::WorkoutExercise {
                    exercise_id: domain::ExerciseID::from("2"),
                    sets: vec![
                        domain::WorkoutSet {
                            repetitions: domain::Reps::new(10).unwrap(),
                            weight: Some(domain::Weight::new(40.0).unwrap()),
                            duration: None,
                            rest_time: Some(domain::Time::new(90).unwrap()),
                        },
                        domain::WorkoutSet {
                            repetitions: domain::Reps::new(8).unwrap(),
                            weight: Some(domain::Weight::new(45.0).unwrap()),
                            duration: None,
                            rest_time: None,
                        },
                    ],
                },
                domain::WorkoutExercise {
                    exercise_id: domain::ExerciseID::from("13"),
                    sets: vec![],
                },
            ],
            created_at: domain::Timestamp::from(1_700_000_000_000),
            updated_at: domain::Timestamp::from(1_700_000_100_000),
        }
    }

    #[test]
    fn test_field_names() {
        let json = serde_json::to_string(&WorkoutDocument::from(&workout())).unwrap();

        assert!(json.contains("\"exercises\""));
        assert!(json.contains("\"exerciseId\""));
        assert!(json.contains("\"repetitions\""));
        assert!(json.contains("\"restTime\""));
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));
    }

    #[test]
    fn test_optional_fields_omitted() {
        let workout = domain::Workout {
            description: None,
            ..workout()
        };
        let json = serde_json::to_string(&WorkoutDocument::from(&workout)).unwrap();

        assert!(!json.contains("\"description\""));
        assert!(!json.contains("\"duration\""));
    }

    #[test]
    fn test_collection_round_trip() {
        let workouts = vec![
            workout(),
            domain::Workout {
                id: domain::WorkoutID::from("workout_1700000200000_f6e5d4c3b"),
                name: domain::Name::new("Push Day").unwrap(),
                description: None,
                exercises: vec![],
                created_at: domain::Timestamp::from(1_700_000_200_000),
                updated_at: domain::Timestamp::from(1_700_000_200_000),
            },
        ];

        let documents = workouts.iter().map(WorkoutDocument::from).collect::<Vec<_>>();
        let json = serde_json::to_string(&documents).unwrap();
        let restored = serde_json::from_str::<Vec<WorkoutDocument>>(&json)
            .unwrap()
            .into_iter()
            .map(domain::Workout::try_from)
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(restored, workouts);
    }

    #[test]
    fn test_try_from_rejects_zero_repetitions() {
        let document = WorkoutSetDocument {
            repetitions: 0,
            weight: None,
            duration: None,
            rest_time: None,
        };

        assert_eq!(
            domain::WorkoutSet::try_from(document),
            Err(DocumentError::Reps(domain::RepsError::OutOfRange))
        );
    }

    #[test]
    fn test_try_from_rejects_empty_name() {
        let document = WorkoutDocument {
            id: "workout_1_a".to_string(),
            name: "  ".to_string(),
            description: None,
            exercises: vec![],
            created_at: 1,
            updated_at: 1,
        };

        assert!(matches!(
            domain::Workout::try_from(document),
            Err(DocumentError::Name(domain::NameError::Empty))
        ));
    }
}
