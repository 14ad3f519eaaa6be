//! Battle binary entry point
//!
//! Creates the given meals in an in-memory catalogue and runs them through
//! king-of-the-hill battles: the first two meals fight, then every further
//! meal challenges the surviving winner.

use anyhow::Context;
use clap::Parser;

use battle::{
    BattleConfig, BattleEngine, FixedRandomSource, HttpRandomSource, InMemoryMealStore,
    RandomSource, RandomSourceKind, ThreadRngSource,
};
use shared::{logging, LeaderboardSort, MealSpec};

#[derive(Parser)]
#[command(name = "battle")]
#[command(about = "Pit meals against each other and print the leaderboard")]
struct Args {
    /// Meal as NAME:CUISINE:PRICE:DIFFICULTY (repeat, at least two)
    #[arg(long = "meal", required = true, num_args = 1)]
    meals: Vec<MealSpec>,

    /// Random source (overrides BATTLE_RANDOM_SOURCE)
    #[arg(long, value_enum)]
    source: Option<RandomSourceKind>,

    /// Use this fixed sample in [0, 1) for every battle
    #[arg(long)]
    draw: Option<f64>,

    /// Leaderboard ordering: wins or win_pct
    #[arg(long, default_value = "wins")]
    sort: LeaderboardSort,

    /// Print the leaderboard as JSON
    #[arg(long)]
    json: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = BattleConfig::from_env()?;
    if let Some(source) = args.source {
        config.random_source = source;
    }
    if let Some(level) = &args.log_level {
        config.log_level = level.clone();
    }

    logging::init_tracing(Some(&config.log_level));
    logging::log_startup("battle", &format!("{} meals", args.meals.len()));

    if args.meals.len() < 2 {
        anyhow::bail!("At least two meals are required for a battle");
    }

    let store = InMemoryMealStore::new();
    for spec in &args.meals {
        store
            .create_from_spec(spec)
            .await
            .with_context(|| format!("Failed to create meal {}", spec.name))?;
    }

    match (args.draw, config.random_source) {
        (Some(draw), _) => run(FixedRandomSource::new(draw)?, &store, &args).await?,
        (None, RandomSourceKind::Local) => run(ThreadRngSource::new(), &store, &args).await?,
        (None, RandomSourceKind::Http) => {
            run(HttpRandomSource::from_config(&config)?, &store, &args).await?
        }
    }

    print_leaderboard(&store, &args).await?;
    logging::log_success("battle", "All battles resolved");
    Ok(())
}

async fn run<R: RandomSource>(random: R, store: &InMemoryMealStore, args: &Args) -> anyhow::Result<()> {
    let mut engine = BattleEngine::new(random, store.clone());

    for (round, spec) in args.meals.iter().enumerate() {
        let meal = store.get_meal_by_name(&spec.name).await?;
        engine.prep(meal)?;
        if round == 0 {
            continue;
        }

        let winner = engine.resolve().await.map_err(|e| {
            logging::log_error("battle", &format!("Round {round}"), &e);
            e
        })?;
        println!("Round {round}: {winner} wins");
    }

    engine.clear();
    Ok(())
}

async fn print_leaderboard(store: &InMemoryMealStore, args: &Args) -> anyhow::Result<()> {
    let board = store.leaderboard(args.sort).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&board)?);
        return Ok(());
    }

    println!("\nLeaderboard");
    for (rank, entry) in board.iter().enumerate() {
        println!(
            "{:>2}. {:<24} {:>3} wins / {:>3} battles ({:.1}%)",
            rank + 1,
            entry.meal.name,
            entry.wins,
            entry.battles,
            entry.win_pct * 100.0
        );
    }
    Ok(())
}
