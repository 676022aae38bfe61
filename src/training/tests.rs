use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;

fn request(goal: Goal, days_per_week: u32, experience: Experience) -> PlanRequest {
    PlanRequest {
        goal,
        days_per_week,
        experience,
        ..Default::default()
    }
}

fn focuses(plan: &[WorkoutDay]) -> Vec<&'static str> {
    plan.iter().map(|day| day.focus).collect()
}

#[test]
fn test_training_days_then_rest() {
    let plan = generate_plan(&request(Goal::FatLoss, 3, Experience::Beginner), &mut StdRng::seed_from_u64(1)).unwrap();

    assert_eq!(plan.len(), 7);
    assert_eq!(focuses(&plan), vec!["Full Body", "HIIT", "Lower Body", REST, REST, REST, REST]);

    for day in &plan[..3] {
        assert_eq!(day.duration, "30-40 min");
        assert_eq!(day.exercises.len(), 4);
    }
    for day in &plan[3..] {
        assert!(day.is_rest());
        assert_eq!(day.duration, "0 min");
        assert!(day.exercises.is_empty());
    }

    let labels: Vec<String> = plan.iter().map(WorkoutDay::label).collect();
    assert_eq!(labels, vec!["Day 1", "Day 2", "Day 3", "Day 4", "Day 5", "Day 6", "Day 7"]);
}

#[test]
fn test_every_day_trains_at_seven_days() {
    let plan = generate_plan(&request(Goal::Endurance, 7, Experience::Intermediate), &mut StdRng::seed_from_u64(2)).unwrap();

    assert_eq!(
        focuses(&plan),
        vec!["Cardio", "Strength", "Interval Training", "Endurance", "Active Recovery", "Long Session", REST]
    );
    assert!(plan[..6].iter().all(|day| day.exercises.len() == 5));
}

#[test]
fn test_rest_focus_inside_training_days() {
    let plan = generate_plan(&request(Goal::MuscleGain, 5, Experience::Beginner), &mut StdRng::seed_from_u64(3)).unwrap();

    assert_eq!(focuses(&plan), vec!["Chest & Triceps", "Back & Biceps", "Legs & Shoulders", REST, "Push", REST, REST]);
    assert_eq!(plan[3].duration, "0 min");
    assert!(plan[3].exercises.is_empty());
    assert_eq!(plan[4].exercises.len(), 4);
}

#[test]
fn test_volume_follows_experience() {
    let cases = [
        (Experience::Beginner, "30-40 min", 4, 3, "60-90 sec"),
        (Experience::Intermediate, "45-60 min", 5, 4, "45-60 sec"),
        (Experience::Advanced, "60-75 min", 6, 5, "30-45 sec"),
    ];

    for (experience, duration, count, sets, rest) in cases {
        let plan = generate_plan(&request(Goal::Maintenance, 2, experience), &mut StdRng::seed_from_u64(4)).unwrap();

        for day in &plan[..2] {
            assert_eq!(day.duration, duration, "{experience}");
            assert_eq!(day.exercises.len(), count, "{experience}");
            assert!(day.exercises.iter().all(|exercise| exercise.sets == sets && exercise.rest == rest), "{experience}");
        }
    }
}

#[test]
fn test_reps_for_focus() {
    let cases = [
        ("Strength", "5-8"),
        ("Compound Lifts", "5-8"),
        ("HIIT", "15-20"),
        ("Cardio", "15-20"),
        ("Interval Training", "15-20"),
        ("Endurance", "15-20"),
        ("Push", "8-12"),
        ("Core + Cardio", "8-12"),
        ("Long Session", "8-12"),
    ];

    for (focus, expected) in cases {
        assert_eq!(reps_for(focus), expected, "{focus}");
    }

    let plan = generate_plan(&request(Goal::Strength, 4, Experience::Advanced), &mut StdRng::seed_from_u64(5)).unwrap();
    assert!(plan[3].exercises.iter().all(|exercise| exercise.reps == "5-8"));
    assert!(plan[0].exercises.iter().all(|exercise| exercise.reps == "8-12"));
}

#[test]
fn test_exercises_come_from_focus_library() {
    let plan = generate_plan(&request(Goal::Endurance, 7, Experience::Advanced), &mut StdRng::seed_from_u64(6)).unwrap();

    for day in plan.iter().filter(|day| !day.is_rest()) {
        let library = exercise_library(day.focus);
        for exercise in &day.exercises {
            assert!(library.contains(&exercise.name), "{} not in {}", exercise.name, day.focus);
            assert_eq!(
                exercise.description,
                format!("Perform {} with proper form, focusing on controlled movements.", exercise.name)
            );
        }
    }
}

#[test]
fn test_unknown_focus_uses_full_body_library() {
    assert_eq!(exercise_library("Strength"), exercise_library("Full Body"));
    assert_eq!(exercise_library("Legs"), exercise_library("Lower Body"));
    assert_eq!(exercise_library("Full Body").len(), 5);
}

#[test]
fn test_same_seed_same_plan() {
    let request = request(Goal::FatLoss, 6, Experience::Intermediate);

    let first = generate_plan(&request, &mut StdRng::seed_from_u64(42)).unwrap();
    let second = generate_plan(&request, &mut StdRng::seed_from_u64(42)).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_validate_bounds() {
    assert!(PlanRequest::default().validate().is_ok());

    let edges = [
        PlanRequest { age: 16, ..Default::default() },
        PlanRequest { age: 90, ..Default::default() },
        PlanRequest { weight: 30.0, ..Default::default() },
        PlanRequest { height: 250.0, ..Default::default() },
        PlanRequest { days_per_week: 1, ..Default::default() },
        PlanRequest { days_per_week: 7, ..Default::default() },
    ];
    for request in edges {
        assert!(request.validate().is_ok(), "{request:?}");
    }

    let cases = [
        (PlanRequest { age: 15, ..Default::default() }, "age"),
        (PlanRequest { age: 91, ..Default::default() }, "age"),
        (PlanRequest { weight: 29.5, ..Default::default() }, "weight"),
        (PlanRequest { weight: f64::NAN, ..Default::default() }, "weight"),
        (PlanRequest { height: 251.0, ..Default::default() }, "height"),
        (PlanRequest { days_per_week: 0, ..Default::default() }, "days per week"),
        (PlanRequest { days_per_week: 8, ..Default::default() }, "days per week"),
    ];
    for (request, field) in cases {
        assert!(
            matches!(request.validate(), Err(Error::InvalidArgument(ref message)) if message.starts_with(field)),
            "{request:?}"
        );
    }
}

#[test]
fn test_invalid_request_generates_nothing() {
    let request = PlanRequest {
        days_per_week: 0,
        ..Default::default()
    };
    assert!(matches!(generate_plan(&request, &mut StdRng::seed_from_u64(0)), Err(Error::InvalidArgument(_))));
}

#[test]
fn test_parse_goal_and_experience() {
    assert_eq!("fatLoss".parse::<Goal>().unwrap(), Goal::FatLoss);
    assert_eq!("muscle-gain".parse::<Goal>().unwrap(), Goal::MuscleGain);
    assert_eq!("Strength".parse::<Goal>().unwrap(), Goal::Strength);
    assert!("bulk".parse::<Goal>().is_err());

    assert_eq!("advanced".parse::<Experience>().unwrap(), Experience::Advanced);
    assert!("expert".parse::<Experience>().is_err());

    assert_eq!(Goal::FatLoss.to_string(), "Fat Loss");
    assert_eq!(Goal::ALL.len(), 5);
}
