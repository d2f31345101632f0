mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use kittens::clock::{Clock, SystemClock};
use kittens::{Engine, GameConfig, GameError, Input, Status};

use display::{GlyphBook, TerminalSurface};

const FRAME: Duration = Duration::from_millis(16); // ≈60 FPS, one display refresh

/// Environment variable naming a TOML config file.
const CONFIG_ENV: &str = "KITTENS_CONFIG";

// ── Input mapping ─────────────────────────────────────────────────────────────

enum Command {
    Play(Input),
    Resize(u16, u16),
    Quit,
}

/// Translate a raw terminal event. Unmapped keys are dropped.
fn command(event: Event) -> Option<Command> {
    match event {
        Event::Key(KeyEvent { code, kind, modifiers, .. }) if kind != KeyEventKind::Release => {
            match code {
                KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
                    Some(Command::Play(Input::MoveLeft))
                }
                KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
                    Some(Command::Play(Input::MoveRight))
                }
                KeyCode::Char(' ') => Some(Command::Play(Input::Fire)),
                KeyCode::Enter => Some(Command::Play(Input::Restart)),
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Command::Quit)
                }
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
                _ => None,
            }
        }
        Event::Resize(cols, rows) => Some(Command::Resize(cols, rows)),
        _ => None,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until the player quits.
///
/// Inputs are drained between frames so a handler never lands inside a tick.
/// After a game over no more frames are scheduled: the loop blocks on the
/// next event until the player restarts or quits.
fn game_loop<W: Write, C: Clock>(
    surface: &mut TerminalSurface<W>,
    engine: &mut Engine<rand::rngs::ThreadRng>,
    clock: &C,
    rx: &mpsc::Receiver<Event>,
) -> Result<(), GameError> {
    loop {
        let frame_start = Instant::now();

        if engine.status() == Status::GameOver {
            let Ok(ev) = rx.recv() else {
                return Ok(());
            };
            match command(ev) {
                Some(Command::Quit) => return Ok(()),
                Some(Command::Resize(cols, rows)) => {
                    surface.resize(cols, rows);
                    engine.redraw(surface)?;
                    surface.present()?;
                }
                Some(Command::Play(input)) => engine.handle_input(input, clock.now_ms()),
                None => {}
            }
            continue;
        }

        while let Ok(ev) = rx.try_recv() {
            match command(ev) {
                Some(Command::Quit) => return Ok(()),
                Some(Command::Resize(cols, rows)) => surface.resize(cols, rows),
                Some(Command::Play(input)) => engine.handle_input(input, clock.now_ms()),
                None => {}
            }
        }

        engine.tick(clock.now_ms(), surface)?;
        surface.present()?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn load_config() -> Result<GameConfig, GameError> {
    let path = std::env::args().nth(1).or_else(|| std::env::var(CONFIG_ENV).ok());
    match path {
        Some(path) => GameConfig::load(path),
        None => {
            log::info!("No config file given, using defaults");
            let config = GameConfig::default();
            config.validate()?;
            Ok(config)
        }
    }
}

fn main() -> Result<(), GameError> {
    env_logger::init();

    // Fail on a bad config before touching the terminal.
    let config = load_config()?;
    let glyphs = GlyphBook::default();
    let clock = SystemClock::new();

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let result = run(&mut out, config, &glyphs, &clock, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(
    out: &mut W,
    config: GameConfig,
    glyphs: &GlyphBook,
    clock: &SystemClock,
    rx: &mpsc::Receiver<Event>,
) -> Result<(), GameError> {
    let field = (config.game_width, config.game_height);
    let mut surface = TerminalSurface::new(out, glyphs, field, terminal::size()?)?;
    let mut engine = Engine::new(config, thread_rng(), clock.now_ms())?;
    game_loop(&mut surface, &mut engine, clock, rx)
}
