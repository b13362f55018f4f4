use std::{collections::HashSet, slice::Iter};

use derive_more::{AsRef, Display};

use crate::catalog;

#[derive(AsRef, Debug, Display, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A catalog exercise. Records are fixed at build time and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: &'static str,
    pub category: Category,
    pub muscles: &'static [MuscleGroup],
    pub description: &'static str,
    pub instructions: &'static [&'static str],
    pub media: Media,
    pub difficulty: Difficulty,
    pub equipment: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Media {
    pub image: &'static str,
    pub animation: &'static str,
    pub video: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Category {
    Strength,
    Cardio,
    Flexibility,
    Balance,
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORY: [Category; 4] = [
            Category::Strength,
            Category::Cardio,
            Category::Flexibility,
            Category::Balance,
        ];
        CATEGORY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Strength => "Strength",
            Category::Cardio => "Cardio",
            Category::Flexibility => "Flexibility",
            Category::Balance => "Balance",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MuscleGroup {
    Chest,
    Back,
    Shoulders,
    Arms,
    Legs,
    Core,
    FullBody,
    Abs,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLE_GROUPS: [MuscleGroup; 8] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Arms,
            MuscleGroup::Legs,
            MuscleGroup::Core,
            MuscleGroup::FullBody,
            MuscleGroup::Abs,
        ];
        MUSCLE_GROUPS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Core => "Core",
            MuscleGroup::FullBody => "Full Body",
            MuscleGroup::Abs => "Abs",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Property for Difficulty {
    fn iter() -> Iter<'static, Difficulty> {
        static DIFFICULTY: [Difficulty; 3] = [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ];
        DIFFICULTY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

#[derive(Default, PartialEq)]
pub struct ExerciseFilter {
    pub search: String,
    pub categories: HashSet<Category>,
    pub muscles: HashSet<MuscleGroup>,
    pub difficulties: HashSet<Difficulty>,
}

impl ExerciseFilter {
    /// All catalog exercises matching every active criterion, in catalog order.
    #[must_use]
    pub fn catalog(&self) -> Vec<&'static Exercise> {
        let search = self.search.trim().to_lowercase();
        catalog::exercises()
            .iter()
            .filter(|e| {
                (search.is_empty()
                    || e.name.to_lowercase().contains(&search)
                    || e.description.to_lowercase().contains(&search)
                    || e.category.name().to_lowercase().contains(&search)
                    || e.muscles
                        .iter()
                        .any(|m| m.name().to_lowercase().contains(&search)))
                    && (self.categories.is_empty() || self.categories.contains(&e.category))
                    && (self.muscles.is_empty()
                        || self.muscles.iter().all(|m| e.muscles.contains(m)))
                    && (self.difficulties.is_empty()
                        || self.difficulties.contains(&e.difficulty))
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty()
            && self.categories.is_empty()
            && self.muscles.is_empty()
            && self.difficulties.is_empty()
    }

    #[must_use]
    pub fn category_list(&self) -> Vec<(Category, bool)> {
        Category::iter()
            .map(|c| (*c, self.categories.contains(c)))
            .collect::<Vec<_>>()
    }

    #[must_use]
    pub fn muscle_list(&self) -> Vec<(MuscleGroup, bool)> {
        MuscleGroup::iter()
            .map(|m| (*m, self.muscles.contains(m)))
            .collect::<Vec<_>>()
    }

    #[must_use]
    pub fn difficulty_list(&self) -> Vec<(Difficulty, bool)> {
        Difficulty::iter()
            .map(|d| (*d, self.difficulties.contains(d)))
            .collect::<Vec<_>>()
    }

    pub fn toggle_category(&mut self, category: Category) {
        if self.categories.contains(&category) {
            self.categories.remove(&category);
        } else {
            self.categories.insert(category);
        }
    }

    pub fn toggle_muscle(&mut self, muscle: MuscleGroup) {
        if self.muscles.contains(&muscle) {
            self.muscles.remove(&muscle);
        } else {
            self.muscles.insert(muscle);
        }
    }

    pub fn toggle_difficulty(&mut self, difficulty: Difficulty) {
        if self.difficulties.contains(&difficulty) {
            self.difficulties.remove(&difficulty);
        } else {
            self.difficulties.insert(difficulty);
        }
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
