//! Flappy Course entry point
//!
//! Browser builds are driven from the page script through
//! `flappy_course::platform::WebGame`. The native binary runs a headless
//! autopilot demo at a simulated 60 Hz and records the best score to a file.
//!
//! Usage: `flappy-course [--tuning FILE] [--store FILE] [--seconds N]`

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use flappy_course::persistence::{FileStore, flush};
    use flappy_course::sim::Autopilot;
    use flappy_course::{BestScore, GamePhase, InputEvent, Session, Tuning};

    const FRAME_MS: f64 = 1000.0 / 60.0;

    struct Options {
        tuning: Option<PathBuf>,
        store: PathBuf,
        seconds: u32,
    }

    impl Options {
        fn from_args() -> Self {
            let mut options = Self {
                tuning: None,
                store: PathBuf::from("flappy-course-save.json"),
                seconds: 120,
            };
            let mut args = std::env::args().skip(1);
            while let Some(arg) = args.next() {
                match (arg.as_str(), args.next()) {
                    ("--tuning", Some(path)) => options.tuning = Some(path.into()),
                    ("--store", Some(path)) => options.store = path.into(),
                    ("--seconds", Some(n)) => match n.parse() {
                        Ok(n) => options.seconds = n,
                        Err(_) => log::warn!("Ignoring bad --seconds value: {}", n),
                    },
                    (other, _) => log::warn!("Ignoring argument: {}", other),
                }
            }
            options
        }
    }

    fn load_tuning(path: Option<&PathBuf>) -> Tuning {
        let Some(path) = path else {
            return Tuning::default();
        };
        match std::fs::read_to_string(path).map(|json| Tuning::from_json(&json)) {
            Ok(Ok(tuning)) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Ok(Err(e)) => {
                log::warn!("Bad tuning file {}: {}", path.display(), e);
                Tuning::default()
            }
            Err(e) => {
                log::warn!("Cannot read tuning file {}: {}", path.display(), e);
                Tuning::default()
            }
        }
    }

    pub fn run() {
        let options = Options::from_args();
        let tuning = load_tuning(options.tuning.as_ref());
        let mut store = FileStore::new(&options.store);

        let mut session = Session::new(tuning);
        session.apply_loaded_best(BestScore::load(&store).value);

        let pilot = Autopilot::default();
        session.handle(InputEvent::Start);

        let max_frames = u64::from(options.seconds) * 60;
        let mut now = 0.0;
        for _ in 0..max_frames {
            if pilot.should_flap(session.state(), session.tuning()) {
                session.handle(InputEvent::Jump);
            }
            let running = session.frame(now);
            for event in session.take_events() {
                log::debug!("{:?}", event);
            }
            if !running {
                break;
            }
            now += FRAME_MS;
        }

        let outcome = match session.phase() {
            GamePhase::Ended => "crashed",
            _ => "survived",
        };
        log::info!(
            "Demo {} after {:.1}s: score {}, best {}",
            outcome,
            now / 1000.0,
            session.score(),
            session.best_score()
        );

        flush(session.take_persist_requests(), &mut store);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Flappy Course (native demo) starting...");
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Entry point is WebGame, constructed from the page script
}
