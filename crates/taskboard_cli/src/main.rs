//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `taskboard_core` linkage and walk one board scenario end to end.
//! - Keep output deterministic apart from generated task ids.

use std::process::ExitCode;
use taskboard_core::{builtin_seed, init_logging_from_config, BoardConfig, BoardService};

fn main() -> ExitCode {
    println!("taskboard_core ping={}", taskboard_core::ping());
    println!("taskboard_core version={}", taskboard_core::core_version());

    let config = BoardConfig::from_env();
    if let Err(err) = init_logging_from_config(&config) {
        eprintln!("logging disabled: {err}");
    }

    let mut board = BoardService::from_seed(builtin_seed(), &config);
    let Some(first) = board.users().users().first().map(|user| user.id.clone()) else {
        eprintln!("no users in seed");
        return ExitCode::FAILURE;
    };
    board.select_user(&first);

    if let Err(err) = board.open_new_task() {
        eprintln!("open failed: {err}");
        return ExitCode::FAILURE;
    }
    if let Err(err) = board.submit_new_task("Smoke check", "Created by taskboard_cli", "2024-01-01")
    {
        eprintln!("submit failed: {err}");
        return ExitCode::FAILURE;
    }

    for card in board.user_cards() {
        let marker = if card.selected { "*" } else { " " };
        println!("{marker} {} {} {}", card.user.id, card.user.name, card.image_path);
    }
    for task in board.selected_tasks() {
        println!(
            "task id={} owner={} due={} title={}",
            task.id, task.owner_id, task.due_date, task.title
        );
    }

    ExitCode::SUCCESS
}
