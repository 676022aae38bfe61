use clap::{arg, Command};
use rand::rngs::StdRng;
use rand::SeedableRng;

use fitfusion::training::{generate_plan, Experience, Goal, PlanRequest};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = Command::new("workout_plan")
        .version("1.0")
        .about("Generates a weekly workout plan")
        .arg(arg!(--goal <GOAL>).default_value("muscleGain"))
        .arg(arg!(--experience <LEVEL>).default_value("beginner"))
        .arg(arg!(--days <DAYS>).value_parser(clap::value_parser!(u32)).default_value("4"))
        .arg(arg!(--seed <SEED>).value_parser(clap::value_parser!(u64)))
        .get_matches();

    let request = PlanRequest {
        goal: matches.get_one::<String>("goal").expect("goal has a default").parse::<Goal>()?,
        experience: matches.get_one::<String>("experience").expect("experience has a default").parse::<Experience>()?,
        days_per_week: *matches.get_one::<u32>("days").expect("days has a default"),
        ..Default::default()
    };

    let mut rng = match matches.get_one::<u64>("seed") {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_entropy(),
    };

    println!("{} ({})", request.goal, request.goal.description());
    for day in generate_plan(&request, &mut rng)? {
        println!("{}: {} ({})", day.label(), day.focus, day.duration);
        for exercise in &day.exercises {
            println!("  {} {}x{} rest {}", exercise.name, exercise.sets, exercise.reps, exercise.rest);
        }
    }

    Ok(())
}
