//! Personalized weekly workout plans.
//!
//! A [PlanRequest] carries the answers from the plan questionnaire. [generate_plan] turns it
//! into seven [WorkoutDay]s: the first `days_per_week` days follow the weekly focus of the
//! member's [Goal] and the remaining days are rest. Exercises are drawn from a per-focus
//! library with the supplied random number generator, so a seeded generator gives a
//! reproducible plan.
//!
//!```
//! use fitfusion::training::{generate_plan, Experience, Goal, PlanRequest};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let request = PlanRequest {
//!     goal: Goal::Strength,
//!     days_per_week: 3,
//!     experience: Experience::Advanced,
//!     ..Default::default()
//! };
//!
//! let plan = generate_plan(&request, &mut StdRng::seed_from_u64(7)).unwrap();
//! assert_eq!(plan[0].focus, "Lower Body");
//! assert_eq!(plan[0].exercises.len(), 6);
//!```

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::Error;

#[cfg(test)]
mod tests;

pub const AGE_RANGE: RangeInclusive<u32> = 16..=90;
/// Kilograms.
pub const WEIGHT_RANGE: RangeInclusive<f64> = 30.0..=250.0;
/// Centimetres.
pub const HEIGHT_RANGE: RangeInclusive<f64> = 100.0..=250.0;
pub const DAYS_PER_WEEK_RANGE: RangeInclusive<u32> = 1..=7;

/// Focus of a day without training.
pub const REST: &str = "Rest";

/// Focus whose exercises stand in for any focus missing from the library.
const FALLBACK_FOCUS: &str = "Full Body";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Active,
    VeryActive,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Equipment {
    /// Bodyweight only.
    None,
    #[default]
    Minimal,
    Full,
}

/// What the member is training for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Goal {
    FatLoss,
    #[default]
    MuscleGain,
    Endurance,
    Maintenance,
    Strength,
}

impl Goal {
    pub const ALL: [Goal; 5] = [Goal::FatLoss, Goal::MuscleGain, Goal::Endurance, Goal::Maintenance, Goal::Strength];

    /// Focus of each day of the week, Day 1 first.
    pub fn weekly_focus(&self) -> [&'static str; 7] {
        match self {
            Goal::FatLoss => ["Full Body", "HIIT", "Lower Body", "Upper Body", "Core + Cardio", "Active Recovery", REST],
            Goal::MuscleGain => ["Chest & Triceps", "Back & Biceps", "Legs & Shoulders", REST, "Push", "Pull", "Legs"],
            Goal::Endurance => ["Cardio", "Strength", "Interval Training", "Endurance", "Active Recovery", "Long Session", REST],
            Goal::Maintenance => ["Full Body", "Cardio", REST, "Upper Body", "Lower Body", "Cardio", REST],
            Goal::Strength => ["Lower Body", "Upper Body", REST, "Compound Lifts", "Accessory Work", "Athlete Conditioning", REST],
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Goal::FatLoss => "Reduce body fat while maintaining muscle mass",
            Goal::MuscleGain => "Build muscle size and strength",
            Goal::Endurance => "Improve cardiovascular fitness and stamina",
            Goal::Maintenance => "Maintain current fitness level and weight",
            Goal::Strength => "Focus on increasing overall strength",
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::FatLoss => write!(f, "Fat Loss"),
            Goal::MuscleGain => write!(f, "Muscle Gain"),
            Goal::Endurance => write!(f, "Endurance"),
            Goal::Maintenance => write!(f, "Maintenance"),
            Goal::Strength => write!(f, "Strength"),
        }
    }
}

impl FromStr for Goal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "fatloss" => Ok(Goal::FatLoss),
            "musclegain" => Ok(Goal::MuscleGain),
            "endurance" => Ok(Goal::Endurance),
            "maintenance" => Ok(Goal::Maintenance),
            "strength" => Ok(Goal::Strength),
            _ => Err(Error::InvalidArgument(format!("unknown goal: {s}"))),
        }
    }
}

/// Training experience. Sets the volume and pace of every training day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Experience {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Experience {
    pub const ALL: [Experience; 3] = [Experience::Beginner, Experience::Intermediate, Experience::Advanced];

    /// Session length of a training day.
    pub fn duration(&self) -> &'static str {
        match self {
            Experience::Beginner => "30-40 min",
            Experience::Intermediate => "45-60 min",
            Experience::Advanced => "60-75 min",
        }
    }

    pub fn exercise_count(&self) -> usize {
        match self {
            Experience::Beginner => 4,
            Experience::Intermediate => 5,
            Experience::Advanced => 6,
        }
    }

    pub fn sets(&self) -> u32 {
        match self {
            Experience::Beginner => 3,
            Experience::Intermediate => 4,
            Experience::Advanced => 5,
        }
    }

    /// Rest between sets.
    pub fn rest(&self) -> &'static str {
        match self {
            Experience::Beginner => "60-90 sec",
            Experience::Intermediate => "45-60 sec",
            Experience::Advanced => "30-45 sec",
        }
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Experience::Beginner => write!(f, "Beginner"),
            Experience::Intermediate => write!(f, "Intermediate"),
            Experience::Advanced => write!(f, "Advanced"),
        }
    }
}

impl FromStr for Experience {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Experience::Beginner),
            "intermediate" => Ok(Experience::Intermediate),
            "advanced" => Ok(Experience::Advanced),
            _ => Err(Error::InvalidArgument(format!("unknown experience: {s}"))),
        }
    }
}

/// Answers from the plan questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    pub age: u32,
    pub gender: Gender,
    /// Kilograms.
    pub weight: f64,
    /// Centimetres.
    pub height: f64,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub days_per_week: u32,
    pub experience: Experience,
    pub equipment: Equipment,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self {
            age: 30,
            gender: Gender::default(),
            weight: 70.0,
            height: 170.0,
            activity_level: ActivityLevel::default(),
            goal: Goal::default(),
            days_per_week: 4,
            experience: Experience::default(),
            equipment: Equipment::default(),
        }
    }
}

impl PlanRequest {
    /// Checks the numeric answers against [AGE_RANGE], [WEIGHT_RANGE], [HEIGHT_RANGE] and
    /// [DAYS_PER_WEEK_RANGE].
    pub fn validate(&self) -> Result<(), Error> {
        check_range("age", self.age, &AGE_RANGE)?;
        check_range("weight", self.weight, &WEIGHT_RANGE)?;
        check_range("height", self.height, &HEIGHT_RANGE)?;
        check_range("days per week", self.days_per_week, &DAYS_PER_WEEK_RANGE)?;
        Ok(())
    }
}

fn check_range<T: PartialOrd + fmt::Display>(field: &str, value: T, range: &RangeInclusive<T>) -> Result<(), Error> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidArgument(format!(
            "{field} must be between {} and {}, got {value}",
            range.start(),
            range.end()
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub name: &'static str,
    pub sets: u32,
    pub reps: &'static str,
    pub rest: &'static str,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutDay {
    /// 1 based day of the week.
    pub day: u32,
    pub focus: &'static str,
    pub duration: &'static str,
    pub exercises: Vec<Exercise>,
}

impl WorkoutDay {
    fn rest(day: u32) -> Self {
        Self {
            day,
            focus: REST,
            duration: "0 min",
            exercises: Vec::new(),
        }
    }

    pub fn label(&self) -> String {
        format!("Day {}", self.day)
    }

    pub fn is_rest(&self) -> bool {
        self.focus == REST
    }
}

/// Repetition range for exercises of a given focus.
pub fn reps_for(focus: &str) -> &'static str {
    match focus {
        "Strength" | "Compound Lifts" => "5-8",
        "HIIT" | "Cardio" | "Interval Training" | "Endurance" => "15-20",
        _ => "8-12",
    }
}

/// Exercises available for `focus`. Unknown focuses get the full body library.
pub fn exercise_library(focus: &str) -> &'static [&'static str] {
    let library: &'static [&'static str] = match focus {
        "Chest & Triceps" => &["Push-ups", "Bench Press", "Chest Fly", "Tricep Dips", "Tricep Extensions"],
        "Back & Biceps" => &["Pull-ups", "Bent-over Rows", "Lat Pulldowns", "Bicep Curls", "Face Pulls"],
        "Legs & Shoulders" => &["Squats", "Lunges", "Shoulder Press", "Lateral Raises", "Leg Extensions"],
        "Full Body" => &["Burpees", "Mountain Climbers", "Deadlifts", "Thrusters", "Renegade Rows"],
        "HIIT" => &["Jumping Jacks", "High Knees", "Burpees", "Jump Squats", "Speed Skaters"],
        "Lower Body" | "Legs" => &["Squats", "Deadlifts", "Lunges", "Leg Press", "Calf Raises"],
        "Upper Body" => &["Push-ups", "Pull-ups", "Shoulder Press", "Dumbbell Rows", "Bench Press"],
        "Core + Cardio" => &["Plank", "Russian Twists", "Mountain Climbers", "Jump Rope", "Bicycle Crunches"],
        "Push" => &["Bench Press", "Shoulder Press", "Tricep Extensions", "Push-ups", "Chest Fly"],
        "Pull" => &["Pull-ups", "Bent-over Rows", "Bicep Curls", "Face Pulls", "Lat Pulldowns"],
        "Compound Lifts" => &["Deadlifts", "Squats", "Bench Press", "Shoulder Press", "Bent-over Rows"],
        "Accessory Work" => &["Bicep Curls", "Tricep Extensions", "Lateral Raises", "Face Pulls", "Calf Raises"],
        "Athlete Conditioning" => &["Box Jumps", "Kettlebell Swings", "Battle Ropes", "Med Ball Slams", "Sled Push"],
        "Cardio" => &["Running", "Cycling", "Rowing", "Jump Rope", "Stair Climber"],
        "Interval Training" => &[
            "Sprint Intervals",
            "Tabata",
            "EMOM (Every Minute on the Minute)",
            "AMRAP (As Many Rounds as Possible)",
            "Circuit Training",
        ],
        "Endurance" => &["Long Distance Running", "Cycling", "Swimming", "Rowing", "Hiking"],
        "Active Recovery" => &["Walking", "Light Yoga", "Stretching", "Foam Rolling", "Light Swimming"],
        "Long Session" => &["Tempo Run", "Long Cycle", "Distance Swimming", "Trail Running", "Cross Training"],
        _ => &[],
    };

    if library.is_empty() && focus != FALLBACK_FOCUS {
        exercise_library(FALLBACK_FOCUS)
    } else {
        library
    }
}

/// Builds a seven day plan for `request`.
///
/// Training days whose weekly focus is itself a rest day come out as rest days.
pub fn generate_plan<R: Rng + ?Sized>(request: &PlanRequest, rng: &mut R) -> Result<Vec<WorkoutDay>, Error> {
    request.validate()?;

    let plan: Vec<WorkoutDay> = request
        .goal
        .weekly_focus()
        .into_iter()
        .zip(1..)
        .map(|(focus, day)| {
            if day > request.days_per_week || focus == REST {
                return WorkoutDay::rest(day);
            }

            let exercises = (0..request.experience.exercise_count())
                .map(|_| pick_exercise(focus, request.experience, rng))
                .collect();

            WorkoutDay {
                day,
                focus,
                duration: request.experience.duration(),
                exercises,
            }
        })
        .collect();

    debug!(
        "generated {} plan with {} training days for {} experience",
        request.goal,
        plan.iter().filter(|day| !day.is_rest()).count(),
        request.experience
    );

    Ok(plan)
}

fn pick_exercise<R: Rng + ?Sized>(focus: &'static str, experience: Experience, rng: &mut R) -> Exercise {
    let name = exercise_library(focus).choose(rng).copied().unwrap_or(focus);

    Exercise {
        name,
        sets: experience.sets(),
        reps: reps_for(focus),
        rest: experience.rest(),
        description: format!("Perform {name} with proper form, focusing on controlled movements."),
    }
}
