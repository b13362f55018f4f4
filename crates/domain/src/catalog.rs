use std::sync::LazyLock;

use crate::{Category, Difficulty, Exercise, ExerciseID, Media, MuscleGroup};

/// The compiled-in exercise catalog in display order.
#[must_use]
pub fn exercises() -> &'static [Exercise] {
    &EXERCISES
}

/// Looks up a catalog entry by id.
///
/// The catalog is small enough that a linear scan is sufficient.
#[must_use]
pub fn get(id: &ExerciseID) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| e.id == *id)
}

static EXERCISES: LazyLock<Vec<Exercise>> = LazyLock::new(|| {
    EXERCISE_DATA
        .iter()
        .map(|e| Exercise {
            id: ExerciseID::from(e.id),
            name: e.name,
            category: e.category,
            muscles: e.muscles,
            description: e.description,
            instructions: e.instructions,
            media: e.media,
            difficulty: e.difficulty,
            equipment: e.equipment,
        })
        .collect()
});

struct BaseExercise {
    id: &'static str,
    name: &'static str,
    category: Category,
    muscles: &'static [MuscleGroup],
    description: &'static str,
    instructions: &'static [&'static str],
    media: Media,
    difficulty: Difficulty,
    equipment: &'static [&'static str],
}

const EXERCISE_DATA: [BaseExercise; 29] = [
    BaseExercise {
        id: "1",
        name: "Bench Press",
        category: Category::Strength,
        muscles: &[MuscleGroup::Chest, MuscleGroup::Arms, MuscleGroup::Shoulders],
        description: "A fundamental exercise for developing the chest muscles.",
        instructions: &[
            "Lie on your back on a bench",
            "Plant your feet firmly on the floor",
            "Grip the bar at shoulder width",
            "Lower the bar to your chest",
            "Press the bar up until your arms are fully extended",
        ],
        media: Media {
            image: "benchPressImage.png.jpeg",
            animation: "benchGif.gif",
            video: Some("https://example.com/bench-press-video.mp4"),
        },
        difficulty: Difficulty::Intermediate,
        equipment: &["Bench", "Barbell", "Weight plates"],
    },
    BaseExercise {
        id: "2",
        name: "Squat",
        category: Category::Strength,
        muscles: &[MuscleGroup::Legs, MuscleGroup::Core],
        description: "A fundamental exercise for developing the leg muscles.",
        instructions: &[
            "Place your feet shoulder-width apart",
            "Keep your back straight",
            "Lower yourself by pushing your hips back",
            "Keep your knees behind your toes",
            "Return to the starting position",
        ],
        media: Media {
            image: "squatImage.jpeg",
            animation: "squatGif.gif",
            video: Some("https://example.com/squat-video.mp4"),
        },
        difficulty: Difficulty::Beginner,
        equipment: &["Barbell", "Weight plates", "Squat rack"],
    },
    BaseExercise {
        id: "3",
        name: "Pull-up",
        category: Category::Strength,
        muscles: &[MuscleGroup::Back, MuscleGroup::Arms],
        description: "An effective exercise for developing the back and arm muscles.",
        instructions: &[
            "Hang from the bar with your hands slightly wider than shoulder width",
            "Pull your shoulders back and down",
            "Pull yourself up until your chin passes the bar",
            "Lower yourself back to the starting position in a controlled manner",
        ],
        media: Media {
            image: "pullUpImage.jpeg",
            animation: "pullUpGif.gif",
            video: Some("https://example.com/pull-up-video.mp4"),
        },
        difficulty: Difficulty::Intermediate,
        equipment: &["Pull-up bar"],
    },
    BaseExercise {
        id: "4",
        name: "Plank",
        category: Category::Strength,
        muscles: &[MuscleGroup::Core, MuscleGroup::Shoulders, MuscleGroup::Abs],
        description: "A static exercise for strengthening the abdominal and core muscles.",
        instructions: &[
            "Take a face-down position on your elbows and toes",
            "Keep your elbows directly under your shoulders",
            "Hold your body in a straight line",
            "Brace your abs and do not let your hips drop",
            "Keep breathing while holding the position",
        ],
        media: Media {
            image: "PlankImage.jpeg",
            animation: "PlankImage.jpeg",
            video: None,
        },
        difficulty: Difficulty::Beginner,
        equipment: &[],
    },
    BaseExercise {
        id: "5",
        name: "Deadlift",
        category: Category::Strength,
        muscles: &[
            MuscleGroup::Back,
            MuscleGroup::Legs,
            MuscleGroup::Core,
            MuscleGroup::Abs,
        ],
        description: "A fundamental compound exercise strengthening the back, legs and core.",
        instructions: &[
            "Place your feet hip-width apart",
            "Stand in front of the bar and grip it just outside your legs",
            "Keep your back flat and your torso upright",
            "Hinge at the hips to lift the bar off the floor",
            "Finish the movement by straightening your knees and hips",
        ],
        media: Media {
            image: "deadliftImage.jpeg",
            animation: "deadliftGif.gif",
            video: Some("https://example.com/deadlift-video.mp4"),
        },
        difficulty: Difficulty::Intermediate,
        equipment: &["Barbell", "Weight plates"],
    },
    BaseExercise {
        id: "6",
        name: "Push-up",
        category: Category::Strength,
        muscles: &[
            MuscleGroup::Chest,
            MuscleGroup::Arms,
            MuscleGroup::Shoulders,
            MuscleGroup::Core,
            MuscleGroup::Abs,
        ],
        description: "A bodyweight exercise working the chest, arms and trunk.",
        instructions: &[
            "Place your hands on the floor slightly wider than shoulder width",
            "Extend your legs and hold your body in a straight line",
            "Lower yourself until your elbows reach a right angle",
            "Push yourself back up to the starting position",
        ],
        media: Media {
            image: "Push Up.webp",
            animation: "Push Up.webp",
            video: None,
        },
        difficulty: Difficulty::Beginner,
        equipment: &[],
    },
    BaseExercise {
        id: "7",
        name: "Dumbbell Shoulder Press",
        category: Category::Strength,
        muscles: &[MuscleGroup::Shoulders, MuscleGroup::Arms],
        description: "An effective dumbbell exercise for developing the shoulder muscles.",
        instructions: &[
            "Sit upright and hold a dumbbell in each hand at shoulder height",
            "Keep your palms facing forward",
            "Press the dumbbells up until your arms are fully extended",
            "Lower them back to shoulder height in a controlled manner",
        ],
        media: Media {
            image: "Dumbbell Shoulder Press.jpeg",
            animation: "Dumbbell Shoulder Press.jpeg",
            video: None,
        },
        difficulty: Difficulty::Intermediate,
        equipment: &["Dumbbells"],
    },
    BaseExercise {
        id: "8",
        name: "Dumbbell Bicep Curl",
        category: Category::Strength,
        muscles: &[MuscleGroup::Arms],
        description: "An isolation dumbbell exercise for the biceps.",
        instructions: &[
            "Stand upright with a dumbbell in each hand",
            "Keep your elbows close to your sides",
            "Curl the weights up towards your shoulders",
            "Lower them back down without swinging",
        ],
        media: Media {
            image: "Dumbbell Bicep Curl.jpeg",
            animation: "Dumbbell Bicep Curl.jpeg",
            video: None,
        },
        difficulty: Difficulty::Beginner,
        equipment: &["Dumbbells"],
    },
    BaseExercise {
        id: "9",
        name: "Russian Twist",
        category: Category::Strength,
        muscles: &[MuscleGroup::Core, MuscleGroup::Abs],
        description: "A rotational exercise targeting the obliques and the abdominal wall.",
        instructions: &[
            "Sit on the floor with your knees bent and lean back slightly",
            "Lift your feet off the floor to increase the difficulty",
            "Rotate your torso from side to side",
            "Touch the floor next to your hips with both hands",
        ],
        media: Media {
            image: "Russian Twist.jpeg",
            animation: "Russian Twist.jpeg",
            video: None,
        },
        difficulty: Difficulty::Intermediate,
        equipment: &["Optional: Weight plate, medicine ball, or dumbbell"],
    },
    BaseExercise {
        id: "10",
        name: "Dumbbell Lunges",
        category: Category::Strength,
        muscles: &[MuscleGroup::Legs, MuscleGroup::Core, MuscleGroup::Abs],
        description: "A single-leg dumbbell exercise for the legs and glutes.",
        instructions: &[
            "Stand upright with a dumbbell in each hand",
            "Take a big step forward with one leg",
            "Lower your back knee towards the floor",
            "Push off the front foot to return to the starting position",
            "Repeat with the other leg",
        ],
        media: Media {
            image: "Dumbbell Lunges.jpeg",
            animation: "Dumbbell Lunges.jpeg",
            video: None,
        },
        difficulty: Difficulty::Intermediate,
        equipment: &["Dumbbells"],
    },
    BaseExercise {
        id: "11",
        name: "Lat Pulldown",
        category: Category::Strength,
        muscles: &[MuscleGroup::Back, MuscleGroup::Arms],
        description: "A machine exercise for widening the upper back.",
        instructions: &[
            "Sit at the machine and grip the bar wider than shoulder width",
            "Lean back slightly and brace your trunk",
            "Pull the bar down to the top of your rib cage",
            "Let the bar rise back up in a controlled manner",
        ],
        media: Media {
            image: "Lat Pulldown.jpeg",
            animation: "Lat Pulldown.jpeg",
            video: None,
        },
        difficulty: Difficulty::Beginner,
        equipment: &["Lat pulldown machine"],
    },
    BaseExercise {
        id: "12",
        name: "Cable Tricep Pushdown",
        category: Category::Strength,
        muscles: &[MuscleGroup::Arms],
        description: "An isolation cable exercise for the triceps.",
        instructions: &[
            "Stand in front of the cable station and grip the bar attachment",
            "Pin your elbows to your sides",
            "Push the bar down until your arms are fully extended",
            "Let the bar rise back to the starting position slowly",
        ],
        media: Media {
            image: "Cable Tricep Pushdown.jpeg",
            animation: "Cable Tricep Pushdown.jpeg",
            video: None,
        },
        difficulty: Difficulty::Beginner,
        equipment: &["Cable machine", "Pushdown bar attachment"],
    },
    BaseExercise {
        id: "13",
        name: "Leg Press",
        category: Category::Strength,
        muscles: &[MuscleGroup::Legs],
        description: "A machine exercise loading the legs without taxing the lower back.",
        instructions: &[
            "Sit in the machine with your feet shoulder-width on the platform",
            "Release the safety handles",
            "Lower the platform until your knees reach a right angle",
            "Press the platform back up without locking your knees",
        ],
        media: Media {
            image: "Leg Press.jpeg",
            animation: "Leg Press.jpeg",
            video: None,
        },
        difficulty: Difficulty::Beginner,
        equipment: &["Leg press machine"],
    },
    BaseExercise {
        id: "14",
        name: "Mountain Climbers",
        category: Category::Cardio,
        muscles: &[
            MuscleGroup::Core,
            MuscleGroup::Legs,
            MuscleGroup::FullBody,
            MuscleGroup::Abs,
        ],
        description: "A dynamic conditioning exercise raising the heart rate while working the trunk.",
        instructions: &[
            "Start in a high plank position",
            "Keep your shoulders over your wrists",
            "Drive one knee towards your elbows",
            "Switch legs quickly in a running motion",
            "Keep your hips level throughout",
        ],
        media: Media {
            image: "Mountain Climbers.jpeg",
            animation: "Mountain Climbers.jpeg",
            video: None,
        },
        difficulty: Difficulty::Intermediate,
        equipment: &[],
    },
    BaseExercise {
        id: "15",
        name: "Dumbbell Row",
        category: Category::Strength,
        muscles: &[MuscleGroup::Back, MuscleGroup::Arms],
        description: "A unilateral dumbbell exercise for the middle back.",
        instructions: &[
            "Support yourself with one hand and knee, back flat",
            "Hold the dumbbell in the free hand with the arm extended",
            "Pull the dumbbell up to the side of your torso",
            "Lower it back down in a controlled manner",
            "Repeat on the other side",
        ],
        media: Media {
            image: "Dumbbell Row.jpg",
            animation: "Dumbbell Row.jpg",
            video: None,
        },
        difficulty: Difficulty::Beginner,
        equipment: &["Dumbbell", "Bench"],
    },
    BaseExercise {
        id: "16",
        name: "Jumping Jacks",
        category: Category::Cardio,
        muscles: &[MuscleGroup::FullBody, MuscleGroup::Legs, MuscleGroup::Shoulders],
        description: "A classic warm-up movement for the whole body.",
        instructions: &[
            "Stand upright with your feet together and arms at your sides",
            "Jump while spreading your legs and raising your arms overhead",
            "Jump back to the starting position",
            "Repeat at a steady rhythm",
        ],
        media: Media {
            image: "Jumping Jacks.jpeg",
            animation: "Jumping Jacks.jpeg",
            video: None,
        },
        difficulty: Difficulty::Beginner,
        equipment: &[],
    },
    BaseExercise {
        id: "17",
        name: "Burpees",
        category: Category::Cardio,
        muscles: &[
            MuscleGroup::FullBody,
            MuscleGroup::Chest,
            MuscleGroup::Arms,
            MuscleGroup::Legs,
            MuscleGroup::Core,
            MuscleGroup::Abs,
        ],
        description: "A demanding full-body conditioning exercise.",
        instructions: &[
            "Stand upright, then squat down and place your hands on the floor",
            "Jump your feet back into a plank position",
            "Perform a push-up",
            "Jump your feet back towards your hands",
            "Jump up explosively with your arms overhead",
        ],
        media: Media {
            image: "Burpees.jpeg",
            animation: "Burpees.jpeg",
            video: None,
        },
        difficulty: Difficulty::Advanced,
        equipment: &[],
    },
    BaseExercise {
        id: "18",
        name: "High Knees",
        category: Category::Cardio,
        muscles: &[MuscleGroup::Legs, MuscleGroup::Core, MuscleGroup::Abs],
        description: "A running-in-place drill that raises the heart rate quickly.",
        instructions: &[
            "Stand upright with your feet hip-width apart",
            "Run in place, driving your knees up to hip height",
            "Pump your arms in rhythm",
            "Land softly on the balls of your feet",
        ],
        media: Media {
            image: "High Knees.jpeg",
            animation: "High Knees.jpeg",
            video: None,
        },
        difficulty: Difficulty::Intermediate,
        equipment: &[],
    },
    BaseExercise {
        id: "20",
        name: "Butterfly Stretch",
        category: Category::Flexibility,
        muscles: &[MuscleGroup::Legs],
        description: "A seated stretch for the inner thighs and hips.",
        instructions: &[
            "Sit on the floor with the soles of your feet together",
            "Pull your heels towards your body",
            "Hold your feet with your hands",
            "Gently press your knees towards the floor",
            "Hold the stretch while breathing deeply",
        ],
        media: Media {
            image: "Butterfly Stretch.webp",
            animation: "Butterfly Stretch.webp",
            video: None,
        },
        difficulty: Difficulty::Beginner,
        equipment: &[],
    },
    BaseExercise {
        id: "21",
        name: "Child's Pose",
        category: Category::Flexibility,
        muscles: &[MuscleGroup::Back, MuscleGroup::Shoulders],
        description: "A resting stretch that releases the back and shoulders.",
        instructions: &[
            "Kneel on the floor and sit back on your heels",
            "Fold forward and rest your forehead on the floor",
            "Extend your arms forward on the floor",
            "Relax and hold the position while breathing deeply",
        ],
        media: Media {
            image: "Child's Pose.jpeg",
            animation: "Child's Pose.jpeg",
            video: None,
        },
        difficulty: Difficulty::Beginner,
        equipment: &[],
    },
    BaseExercise {
        id: "22",
        name: "Single Leg Balance",
        category: Category::Balance,
        muscles: &[MuscleGroup::Legs, MuscleGroup::Core, MuscleGroup::Abs],
        description: "A basic balance drill performed standing on one leg.",
        instructions: &[
            "Stand upright and fix your gaze on a point ahead",
            "Shift your weight onto one leg",
            "Lift the other foot off the floor",
            "Hold the position, then switch legs",
        ],
        media: Media {
            image: "Single Leg Balance.jpeg",
            animation: "Single Leg Balance.jpeg",
            video: None,
        },
        difficulty: Difficulty::Beginner,
        equipment: &[],
    },
    BaseExercise {
        id: "23",
        name: "Yoga Tree Pose",
        category: Category::Balance,
        muscles: &[MuscleGroup::Legs, MuscleGroup::Core, MuscleGroup::Abs],
        description: "A yoga pose that builds balance and concentration.",
        instructions: &[
            "Stand upright and shift your weight onto one leg",
            "Place the sole of the other foot against your inner thigh",
            "Bring your palms together in front of your body",
            "Raise your arms overhead once stable",
            "Hold the pose, then switch sides",
        ],
        media: Media {
            image: "Yoga Tree Pose.jpeg",
            animation: "Yoga Tree Pose.jpeg",
            video: None,
        },
        difficulty: Difficulty::Intermediate,
        equipment: &[],
    },
    BaseExercise {
        id: "24",
        name: "Bosu Ball Squat",
        category: Category::Balance,
        muscles: &[MuscleGroup::Legs, MuscleGroup::Core, MuscleGroup::Abs],
        description: "A squat variation on an unstable surface that challenges balance.",
        instructions: &[
            "Step onto the bosu ball with your feet hip-width apart",
            "Find your balance before starting",
            "Lower yourself into a squat while keeping your trunk upright",
            "Push back up to the standing position",
        ],
        media: Media {
            image: "Bosu Ball Squat.jpeg",
            animation: "Bosu Ball Squat.jpeg",
            video: None,
        },
        difficulty: Difficulty::Intermediate,
        equipment: &["Bosu ball"],
    },
    BaseExercise {
        id: "25",
        name: "Jumping Rope",
        category: Category::Cardio,
        muscles: &[
            MuscleGroup::Legs,
            MuscleGroup::Core,
            MuscleGroup::Shoulders,
            MuscleGroup::Abs,
        ],
        description: "A conditioning exercise with a rope that improves stamina and coordination.",
        instructions: &[
            "Hold the rope handles at hip height",
            "Swing the rope overhead with your wrists",
            "Jump just high enough for the rope to pass under your feet",
            "Land softly and keep a steady rhythm",
        ],
        media: Media {
            image: "Jumping Rope.jpeg",
            animation: "Jumping Rope.jpeg",
            video: None,
        },
        difficulty: Difficulty::Intermediate,
        equipment: &["Jump rope"],
    },
    BaseExercise {
        id: "26",
        name: "Crunches",
        category: Category::Strength,
        muscles: &[MuscleGroup::Abs, MuscleGroup::Core],
        description: "A basic abdominal exercise performed lying on the floor.",
        instructions: &[
            "Lie on your back with your knees bent",
            "Place your hands behind your head without pulling on your neck",
            "Curl your shoulders off the floor using your abs",
            "Lower back down in a controlled manner",
        ],
        media: Media {
            image: "Crunches.jpeg",
            animation: "Crunches.jpeg",
            video: None,
        },
        difficulty: Difficulty::Beginner,
        equipment: &[],
    },
    BaseExercise {
        id: "27",
        name: "Leg Raises",
        category: Category::Strength,
        muscles: &[MuscleGroup::Abs, MuscleGroup::Core],
        description: "An abdominal exercise targeting the lower portion of the abs.",
        instructions: &[
            "Lie on your back with your legs extended",
            "Place your hands under your hips for support",
            "Raise your legs until they are vertical",
            "Lower them slowly without touching the floor",
        ],
        media: Media {
            image: "Leg Raises.jpeg",
            animation: "Leg Raises.jpeg",
            video: None,
        },
        difficulty: Difficulty::Intermediate,
        equipment: &[],
    },
    BaseExercise {
        id: "28",
        name: "Bicycle Crunches",
        category: Category::Strength,
        muscles: &[MuscleGroup::Abs, MuscleGroup::Core],
        description: "A twisting abdominal exercise that also works the obliques.",
        instructions: &[
            "Lie on your back with your hands behind your head",
            "Lift your shoulders and legs off the floor",
            "Bring one elbow towards the opposite knee while extending the other leg",
            "Alternate sides in a pedaling motion",
        ],
        media: Media {
            image: "Bicycle Crunches.jpeg",
            animation: "Bicycle Crunches.jpeg",
            video: None,
        },
        difficulty: Difficulty::Intermediate,
        equipment: &[],
    },
    BaseExercise {
        id: "29",
        name: "Hanging Leg Raise",
        category: Category::Strength,
        muscles: &[MuscleGroup::Abs, MuscleGroup::Core],
        description: "An advanced abdominal exercise performed hanging from a bar.",
        instructions: &[
            "Hang from the bar with your arms extended",
            "Brace your trunk and keep your legs together",
            "Raise your legs until they are parallel to the floor or higher",
            "Lower them slowly back to the starting position",
        ],
        media: Media {
            image: "Hanging Leg Raise.png",
            animation: "Hanging Leg Raise.png",
            video: None,
        },
        difficulty: Difficulty::Advanced,
        equipment: &["Pull-up bar"],
    },
    BaseExercise {
        id: "30",
        name: "Flutter Kicks",
        category: Category::Strength,
        muscles: &[MuscleGroup::Abs, MuscleGroup::Core],
        description: "An exercise strengthening the lower abs and trunk endurance.",
        instructions: &[
            "Lie on your back with your legs extended and your hands under your hips",
            "Press your lower back into the floor",
            "Raise your legs a few centimeters off the floor",
            "Kick your legs up and down alternately in a swimming motion",
            "Keep your abs braced throughout",
        ],
        media: Media {
            image: "Flutter Kicks.jpeg",
            animation: "Flutter Kicks.jpeg",
            video: None,
        },
        difficulty: Difficulty::Intermediate,
        equipment: &[],
    },
];
