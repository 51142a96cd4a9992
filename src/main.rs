use coup_engine::demo;

const DEFAULT_PLAYERS: [&str; 6] = ["Moshe", "Yossi", "Meirav", "Reut", "Gilad", "David"];
const DEFAULT_MAX_TURNS: usize = 200;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::try_init().ok();

    let Ok(seed) = env_or("COUP_SEED", 0u64) else {
        log::error!("COUP_SEED is not a valid number");
        return Ok(());
    };
    let Ok(max_turns) = env_or("COUP_MAX_TURNS", DEFAULT_MAX_TURNS) else {
        log::error!("COUP_MAX_TURNS is not a valid number");
        return Ok(());
    };
    let players: Vec<String> = match std::env::var("COUP_PLAYERS") {
        Ok(names) => names.split(',').map(|s| s.trim().to_string()).collect(),
        Err(_) => DEFAULT_PLAYERS.map(String::from).to_vec(),
    };

    log::info!("Starting a game for {} players with seed {}", players.len(), seed);
    let game = demo::run(&players, seed, max_turns)?;
    println!("{}", serde_json::to_string_pretty(&game.get_board_json())?);
    Ok(())
}

/// Reads a variable from the environment, falling back to `default` when it is unset.
fn env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T, T::Err> {
    match std::env::var(key) {
        Ok(value) => value.parse(),
        Err(_) => Ok(default),
    }
}
