//! Court Pong entry point
//!
//! The browser build is driven from `court_pong::web`. Natively this runs a
//! headless demo match with a scripted player so the simulation can be
//! watched through the log.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use court_pong::consts::WIN_SCORE;
    use court_pong::sim::MatchEvent;
    use court_pong::{MatchStats, Session, Settings, paddle_limit};

    env_logger::init();
    log::info!("Court Pong (native) starting...");
    log::info!("Native mode runs a headless demo - serve the wasm build for the real game");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(rand::random);

    let mut session = Session::new(seed, Settings::load(), MatchStats::load());
    session.set_mouse_control(true);
    session.start();

    // Scripted player: chase the ball with the mouse, a little late
    let dt = 1.0 / 60.0;
    let width = 1000.0;
    let max_frames = 60 * 60 * 30;
    let mut hits = 0u32;

    for _ in 0..max_frames {
        let ball_x = session.state.ball.pos.x;
        let aim = (ball_x / paddle_limit()).clamp(-1.0, 1.0) * 0.9;
        session.set_mouse((aim + 1.0) / 2.0 * width, width);

        for event in session.frame(dt) {
            if let MatchEvent::PaddleHit { .. } = event {
                hits += 1;
            }
        }
        if session.winner().is_some() {
            break;
        }
    }

    let (player, ai) = session.state.scores();
    match session.winner() {
        Some(winner) => println!(
            "Winner: {} ({} - {}, first to {}, {} paddle hits, {:.1}s simulated)",
            winner.as_str(),
            player,
            ai,
            WIN_SCORE,
            hits,
            session.state.clock
        ),
        None => println!("No winner after {:.1}s: {} - {}", session.state.clock, player, ai),
    }
    println!(
        "Record: {} wins, {} losses ({}%)",
        session.stats.wins,
        session.stats.losses,
        session.stats.win_rate_percent()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is court_pong::web::init, this is just to satisfy the compiler
}
