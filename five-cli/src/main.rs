//! five: CLI binary for the Five of a Kind dice game.
//!
//! Subcommands:
//! - play   (default) run the game TUI
//! - sim    random-policy batch simulation
//! - score  print the category table for a given hand

use std::env;
use std::path::PathBuf;
use std::process;

use five_core::category::ALL_CATEGORIES;
use five_core::{scores_for_hand, Category, Game, MAX_ROLLS};

fn cmd_play(args: &[String]) {
    let mut opts = five_tui::RunOptions::default();

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"five play

USAGE:
    five [play] [--settings PATH] [--seed S]

OPTIONS:
    --settings PATH    Settings YAML path (default: settings.yaml)
    --seed S           Fixed dice seed (overrides settings)
"#
                );
                return;
            }
            "--settings" => {
                if i + 1 >= args.len() {
                    eprintln!("Missing value for --settings");
                    process::exit(1);
                }
                opts.settings_path = PathBuf::from(&args[i + 1]);
                i += 2;
            }
            "--seed" => {
                if i + 1 >= args.len() {
                    eprintln!("Missing value for --seed");
                    process::exit(1);
                }
                opts.seed = Some(args[i + 1].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --seed value: {}", args[i + 1]);
                    process::exit(1);
                }));
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `five play`: {}", other);
                eprintln!("Run `five play --help` for usage.");
                process::exit(1);
            }
        }
    }

    if let Err(e) = five_tui::run(opts) {
        eprintln!("TUI failed: {e}");
        process::exit(1);
    }
}

fn cmd_sim(args: &[String]) {
    let mut games: usize = 10_000;
    let mut seed: u64 = 0;
    let mut no_hist = false;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"five sim

USAGE:
    five sim [--games N] [--seed S] [--no-hist]

OPTIONS:
    --games N    Number of games to simulate (default: 10000)
    --seed S     Base RNG seed (default: 0)
    --no-hist    Skip printing histogram
"#
                );
                return;
            }
            "--games" => {
                if i + 1 >= args.len() {
                    eprintln!("Missing value for --games");
                    process::exit(1);
                }
                games = args[i + 1].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --games value: {}", args[i + 1]);
                    process::exit(1);
                });
                i += 2;
            }
            "--seed" => {
                if i + 1 >= args.len() {
                    eprintln!("Missing value for --seed");
                    process::exit(1);
                }
                seed = args[i + 1].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --seed value: {}", args[i + 1]);
                    process::exit(1);
                });
                i += 2;
            }
            "--no-hist" => {
                no_hist = true;
                i += 1;
            }
            other => {
                eprintln!("Unknown option for `five sim`: {}", other);
                eprintln!("Run `five sim --help` for usage.");
                process::exit(1);
            }
        }
    }

    if games == 0 {
        eprintln!("--games must be >= 1");
        process::exit(1);
    }

    println!("Running simulation...");
    let report = simulate(games, seed);
    let s = &report.summary;

    println!();
    println!("Evaluation:");
    println!("  - Games: {}", games);
    println!(
        "  - Score: mean={:.2}, median={}, std={:.2}, min={}, max={}",
        s.mean, s.median, s.std_dev, s.min, s.max
    );
    println!("  - Upper bonus rate: {:.1}%", report.bonus_rate * 100.0);

    if !no_hist {
        print_histogram(&report.scores);
    }
}

fn cmd_score(args: &[String]) {
    if args.iter().any(|a| a == "--help" || a == "-h") || args.len() != 5 {
        println!(
            r#"five score

USAGE:
    five score D1 D2 D3 D4 D5

Prints the raw score of every category for the given hand (faces 1..6).
"#
        );
        if args.len() != 5 {
            process::exit(1);
        }
        return;
    }

    let mut hand = [0u8; 5];
    for (slot, a) in args.iter().enumerate() {
        match a.parse::<u8>() {
            Ok(d) if (1..=6).contains(&d) => hand[slot] = d,
            _ => {
                eprintln!("Invalid die value: {} (expected 1..6)", a);
                process::exit(1);
            }
        }
    }

    let scores = scores_for_hand(hand);
    println!("Hand: {:?}", hand);
    println!();
    for cat in ALL_CATEGORIES {
        println!("  {:<16} {}", cat.label(), scores[cat.index()]);
    }
}

struct ScoreSummary {
    mean: f64,
    median: i32,
    std_dev: f64,
    min: i32,
    max: i32,
}

struct SimReport {
    scores: Vec<i32>,
    bonus_rate: f64,
    summary: ScoreSummary,
}

/// Random-policy solitaire: roll all three times keeping nothing, then place
/// the highest-scoring open category.
fn simulate(games: usize, seed: u64) -> SimReport {
    let mut scores = Vec::with_capacity(games);
    let mut bonus_games = 0usize;

    for g in 0..games {
        let mut game = Game::new(seed.wrapping_add(g as u64));
        while !game.is_over() {
            for _ in 0..MAX_ROLLS {
                game.roll().expect("roll within budget");
            }
            let cat = best_open_category(&game);
            game.place(cat).expect("open category");
        }
        if game.sheet().has_bonus() {
            bonus_games += 1;
        }
        scores.push(game.sheet().grand_total());
    }

    let bonus_rate = bonus_games as f64 / games as f64;
    let summary = summarize(&scores);
    SimReport {
        scores,
        bonus_rate,
        summary,
    }
}

fn best_open_category(game: &Game) -> Category {
    let scores = scores_for_hand(game.hand());
    let mut best: Option<(i32, Category)> = None;
    for cat in ALL_CATEGORIES {
        if game.sheet().is_filled(cat) {
            continue;
        }
        let s = scores[cat.index()];
        if best.map_or(true, |(bs, _)| s > bs) {
            best = Some((s, cat));
        }
    }
    best.map(|(_, c)| c).expect("game not over")
}

fn summarize(scores: &[i32]) -> ScoreSummary {
    let n = scores.len();
    let mut sorted = scores.to_vec();
    sorted.sort_unstable();

    let sum: i64 = sorted.iter().map(|&s| s as i64).sum();
    let mean = sum as f64 / n as f64;
    let var = sorted
        .iter()
        .map(|&s| {
            let d = s as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n as f64;

    ScoreSummary {
        mean,
        median: sorted[n / 2],
        std_dev: var.sqrt(),
        min: sorted[0],
        max: sorted[n - 1],
    }
}

fn print_histogram(scores: &[i32]) {
    const BUCKET: i32 = 25;
    const BAR_MAX: usize = 50;

    let max = scores.iter().copied().max().unwrap_or(0);
    let buckets = (max / BUCKET + 1) as usize;
    let mut counts = vec![0usize; buckets];
    for &s in scores {
        counts[(s / BUCKET) as usize] += 1;
    }
    let peak = counts.iter().copied().max().unwrap_or(1).max(1);

    println!();
    println!("Score histogram (bucket = {BUCKET}):");
    for (b, &c) in counts.iter().enumerate() {
        let lo = b as i32 * BUCKET;
        let hi = lo + BUCKET - 1;
        let bar = "#".repeat(c * BAR_MAX / peak);
        println!("  {lo:>3}-{hi:<3} | {bar} ({c})");
    }
}

fn print_help() {
    eprintln!(
        r#"five - Five of a Kind (Yahtzee) CLI

USAGE:
    five [COMMAND] [OPTIONS]

COMMANDS:
    play        Run the game TUI (default)
    sim         Run a random-policy batch simulation
    score       Print the category table for a hand

OPTIONS:
    -h, --help  Print this help message

Run `five <COMMAND> --help` for command options.
"#
    );
}


fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None => cmd_play(&[]),
        Some("play") => cmd_play(&args[1..]),
        Some("sim") => cmd_sim(&args[1..]),
        Some("score") => cmd_score(&args[1..]),
        Some("--help") | Some("-h") => print_help(),
        Some(opt) if opt.starts_with("--") => cmd_play(&args),
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            print_help();
            process::exit(1);
        }
    }
}
