//! spin-runner: headless driver for the helixspin engine.
//!
//! Usage:
//!   spin-runner --spins 10000 --bet 2 --seed 42 [--json]
//!   spin-runner --play --db session.db --bet 2 --spins 3 [--seed N]

use anyhow::Result;
use helixspin_core::{
    config::SlotConfig,
    engine::{can_afford, settle_credits, SlotEngine, SpinOutcome},
    rng::SpinRng,
    snapshot::SlotSnapshot,
    store::SlotStore,
};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let play_mode = args.iter().any(|a| a == "--play");
    let bet = parse_arg(&args, "--bet", 1u64);

    let engine = match args.windows(2).find(|w| w[0] == "--config") {
        Some(w) => SlotEngine::new(SlotConfig::load(&w[1])?)?,
        None => SlotEngine::standard()?,
    };

    if play_mode {
        let spins = parse_arg(&args, "--spins", 1u64);
        let seed = args
            .windows(2)
            .find(|w| w[0] == "--seed")
            .and_then(|w| w[1].parse::<u64>().ok());
        let db = args
            .windows(2)
            .find(|w| w[0] == "--db")
            .map(|w| w[1].as_str())
            .unwrap_or("slot_session.db");
        run_play(&engine, db, bet, spins, seed)
    } else {
        let spins = parse_arg(&args, "--spins", 10_000u64);
        let seed = parse_arg(&args, "--seed", 42u64);
        let json_mode = args.iter().any(|a| a == "--json");
        run_simulation(&engine, spins, bet, seed, json_mode)
    }
}

fn run_simulation(engine: &SlotEngine, spins: u64, bet: u64, seed: u64, json: bool) -> Result<()> {
    let report = engine.simulate(spins, bet, seed);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("helixspin — spin-runner");
    println!("  mode:      simulate");
    println!("  bet/line:  {}", report.bet_per_line);
    println!("  seed:      {seed}");
    println!();
    println!("=== SIMULATION SUMMARY ===");
    println!("  spins:         {}", report.spins);
    println!("  wagered:       {}", report.wagered);
    println!("  returned:      {}", report.returned);
    println!("  realized RTP:  {:.4}", report.rtp());
    println!("  line hits:     {}", report.line_hits);
    println!("  scatter hits:  {}", report.scatter_hits);
    println!("  bonus hits:    {}", report.bonus_hits);
    println!("  jackpot hits:  {}", report.jackpot_hits);
    println!("  largest win:   {}", report.largest_win);
    println!(
        "  final meters:  mini {:.1} | minor {:.1} | major {:.1} | grand {:.1}",
        report.final_meters.mini,
        report.final_meters.minor,
        report.final_meters.major,
        report.final_meters.grand
    );
    Ok(())
}

fn run_play(engine: &SlotEngine, db: &str, bet: u64, spins: u64, seed: Option<u64>) -> Result<()> {
    let store = SlotStore::open(db)?;
    store.migrate()?;

    let mut rng = match seed {
        Some(seed) => SpinRng::seeded(seed),
        None => SpinRng::from_entropy(),
    };

    // Resume the persisted session, or start fresh at the floors.
    let snapshot = match store.load_snapshot()? {
        Some(snap) => {
            log::info!("resumed session from {db}");
            snap
        }
        None => SlotSnapshot::fresh(engine.fresh_meters()),
    };
    let mut meters = snapshot.meters;
    let mut credits: u64 = store
        .load_session_value("credits")?
        .and_then(|v| v.parse().ok())
        .unwrap_or(1000);

    println!("helixspin — spin-runner");
    println!("  mode:     play");
    println!("  db:       {db}");
    println!("  credits:  {credits}");
    println!();

    // A session killed mid-reveal left its last outcome unseen.
    // Replay it before spinning again so no win goes unnoticed.
    if !snapshot.outcome_seen {
        if let Some(outcome) = &snapshot.last_outcome {
            println!("--- unseen outcome from a previous session ---");
            print_outcome(outcome);
            println!();
        }
        store.mark_outcome_seen()?;
    }

    for spin_index in 0..spins {
        let total_bet = engine.config().total_bet(engine.config().clamp_bet(bet));
        if !can_afford(credits, total_bet) {
            store.append_log("ERR", "Insufficient credits for spin.")?;
            println!("insufficient credits ({credits} < {total_bet}), stopping");
            break;
        }

        let outcome = engine.spin(&mut rng, &meters, bet);
        credits = settle_credits(credits, outcome.total_bet, outcome.total_win);
        meters = outcome.meters_after;

        store.save_meters(&meters)?;
        store.save_outcome(&outcome)?;
        let kind = if outcome.total_win > 0 { "WIN" } else { "MISS" };
        let bonus_note = if outcome.bonus_triggered { " + BONUS" } else { "" };
        store.append_log(
            kind,
            &format!(
                "Bet {} | Win {}{}",
                outcome.total_bet, outcome.total_win, bonus_note
            ),
        )?;
        store.save_session_value("credits", &credits.to_string())?;
        store.save_session_value("bet_per_line", &outcome.bet_per_line.to_string())?;

        println!("--- spin {} ---", spin_index + 1);
        print_outcome(&outcome);
        println!("  credits now:  {credits}");
        println!();
        store.mark_outcome_seen()?;
    }

    let history = store.recent_log(10)?;
    if !history.is_empty() {
        println!("=== RECENT LOG ===");
        for entry in &history {
            println!("  [{}] {}", entry.kind, entry.message);
        }
    }
    Ok(())
}

fn print_outcome(outcome: &SpinOutcome) {
    println!("{}", outcome.grid);
    for win in &outcome.line_wins {
        println!(
            "  line {:>2}: {} x{} pays {}",
            win.line_index, win.symbol, win.count, win.payout
        );
    }
    if outcome.scatter_win > 0 {
        println!(
            "  scatter x{} pays {}",
            outcome.scatter_count, outcome.scatter_win
        );
    }
    if let Some(bonus) = &outcome.bonus {
        println!(
            "  bonus: {} round(s), pays {}",
            bonus.rounds_played, bonus.total_win
        );
        for award in &bonus.jackpot_wins {
            println!("    jackpot {} hits for {}", award.tier.name(), award.amount);
        }
    }
    println!(
        "  total: bet {} -> win {} ({})",
        outcome.total_bet,
        outcome.total_win,
        outcome.win_class().name()
    );
    println!(
        "  meters: mini {:.1} | minor {:.1} | major {:.1} | grand {:.1}",
        outcome.meters_after.mini,
        outcome.meters_after.minor,
        outcome.meters_after.major,
        outcome.meters_after.grand
    );
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
