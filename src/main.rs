use dusk_dawn::game::settings::Settings;
use dusk_dawn::game::{evaluate_steps, find_good_puzzle, signature};
use dusk_dawn::model::describe_arrangement;
use log::info;

fn init_logging() {
    env_logger::init();
}

fn main() {
    init_logging();

    let settings = Settings::load();
    let options = settings.generator_options();
    info!(
        target: "main",
        "Generating a {} puzzle ({} cards)",
        settings.difficulty,
        options.card_count
    );

    let puzzle = find_good_puzzle(&options, Settings::seed_from_env());
    match serde_json::to_string_pretty(&puzzle) {
        Ok(json) => println!("{}", json),
        Err(err) => eprintln!("Failed to serialize puzzle: {}", err),
    }

    println!("share: {}", signature::hand_to_url_token(&puzzle.hand));
    if Settings::is_debug_mode() {
        for (label, target) in [("dusk", &puzzle.result.dusk), ("dawn", &puzzle.result.dawn)] {
            println!(
                "{}: {} = {} {:?}",
                label,
                describe_arrangement(&target.arrangement),
                target.result,
                evaluate_steps(&target.arrangement)
            );
        }
    }
}
