use std::env;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{unbounded, Receiver, TryRecvError};
use log::{debug, info, warn, LevelFilter};

use algowizz::config::FRAME_RATE;
use algowizz::controls::{speed_label, status_text};
use algowizz::{Action, Algorithm, Config, SortState, Status, TerminalView, VizError};

const BAR_ROWS: usize = 16;
const HELP: &str = "p play/pause  s step  r reset  + faster  - slower  quick|bubble|insertion  size N  speed X  m menu  x exit";

#[derive(Debug, PartialEq)]
enum Command {
    Apply(Action),
    Faster,
    Slower,
    Exit,
}

fn parse_command(line: &str) -> Result<Command, VizError> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Err(VizError::UnknownCommand(line.to_string()));
    };
    let command = match head {
        "p" | "play" | "pause" => Command::Apply(Action::TogglePlay),
        "s" | "step" => Command::Apply(Action::SingleStep),
        "r" | "reset" => Command::Apply(Action::Reset),
        "+" => Command::Faster,
        "-" => Command::Slower,
        "m" | "menu" | "back" => Command::Apply(Action::BackToMenu),
        "x" | "exit" | "quit" => Command::Exit,
        "size" | "speed" => {
            let raw = words.next().unwrap_or_default();
            if head == "size" {
                let size = raw.parse().map_err(|_| VizError::InvalidConfig { key: "size", value: raw.to_string() })?;
                Command::Apply(Action::SetSize(size))
            } else {
                let speed = raw.parse().map_err(|_| VizError::InvalidConfig { key: "speed", value: raw.to_string() })?;
                Command::Apply(Action::SetSpeed(speed))
            }
        }
        other => Command::Apply(Action::SelectAlgorithm(other.parse::<Algorithm>()?)),
    };
    Ok(command)
}

// stdin is read on its own thread; the frame loop only polls the channel
fn spawn_input() -> Receiver<String> {
    let (tx, rx) = unbounded();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn draw<W: Write>(out: &mut W, state: &SortState) -> io::Result<()> {
    write!(out, "\x1b[2J\x1b[H")?;
    let title = state.algorithm().map_or("Algowizz", |a| a.name());
    writeln!(out, "{}  {}  {}", title, status_text(state), speed_label(state.speed()))?;
    write!(out, "{}", TerminalView::bars(state, BAR_ROWS))?;
    if state.len() <= 40 {
        writeln!(out, "{}", TerminalView::numbers(state))?;
    }
    writeln!(out, "{}", HELP)?;
    out.flush()
}

fn main() -> Result<(), VizError> {
    env_logger::builder()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let mut config = Config::from_env()?;
    let mut args = env::args();
    args.next();

    let algorithm = match args.next() {
        Some(arg) => Some(arg.parse::<Algorithm>()?),
        None => None,
    };
    if let Some(arg) = args.next() {
        config.size = arg.parse().map_err(|_| VizError::InvalidConfig { key: "size", value: arg.clone() })?;
        if config.size == 0 {
            return Err(VizError::EmptyArray);
        }
    }

    let mut state = SortState::new(&config);
    if let Some(algorithm) = algorithm {
        state.select_algorithm(algorithm);
        state.toggle_play()?;
    }
    info!("Starting with {:?}", config);

    let input = spawn_input();
    let mut input_open = true;
    let frame = Duration::from_secs_f64(1.0 / FRAME_RATE as f64);
    let mut stdout = io::stdout().lock();
    draw(&mut stdout, &state)?;

    let mut last = Instant::now();
    loop {
        let mut redraw = false;
        while input_open {
            match input.try_recv() {
                Ok(line) => {
                    redraw = true;
                    let result = match parse_command(&line) {
                        Ok(Command::Exit) => return Ok(()),
                        Ok(Command::Apply(action)) => state.apply(action),
                        Ok(Command::Faster) => state.apply(Action::SetSpeed(state.speed() * 2.0)),
                        Ok(Command::Slower) => state.apply(Action::SetSpeed(state.speed() / 2.0)),
                        Err(err) => Err(err),
                    };
                    if let Err(err) = result {
                        warn!("{}", err);
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    debug!("Input closed");
                    input_open = false;
                }
            }
        }

        let now = Instant::now();
        let steps = state.update_elapsed(now - last);
        last = now;
        if steps > 0 || redraw {
            draw(&mut stdout, &state)?;
        }

        // without input nobody can resume a paused sort
        if !input_open && state.status() != Status::Running {
            return Ok(());
        }
        thread::sleep(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_controls() {
        assert_eq!(parse_command("p").unwrap(), Command::Apply(Action::TogglePlay));
        assert_eq!(parse_command(" s ").unwrap(), Command::Apply(Action::SingleStep));
        assert_eq!(parse_command("+").unwrap(), Command::Faster);
        assert_eq!(parse_command("x").unwrap(), Command::Exit);
        assert_eq!(
            parse_command("bubble").unwrap(),
            Command::Apply(Action::SelectAlgorithm(Algorithm::BubbleSort))
        );
        assert_eq!(parse_command("size 12").unwrap(), Command::Apply(Action::SetSize(12)));
        assert_eq!(parse_command("speed 2.5").unwrap(), Command::Apply(Action::SetSpeed(2.5)));
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(parse_command(""), Err(VizError::UnknownCommand(_))));
        assert!(matches!(parse_command("heapsort"), Err(VizError::UnknownCommand(_))));
        assert!(matches!(parse_command("size"), Err(VizError::InvalidConfig { key: "size", .. })));
        assert!(matches!(parse_command("speed fast"), Err(VizError::InvalidConfig { key: "speed", .. })));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn draw_failure_surfaces_as_io_error() {
        let state = SortState::with_values(vec![1, 2], &Config::default());
        let err = VizError::from(draw(&mut ClosedPipe, &state).unwrap_err());
        assert!(matches!(&err, VizError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe));
        assert_eq!(err.to_string(), "I/O error: closed");
    }

    #[test]
    fn draws_header_and_help() {
        let mut state = SortState::with_values(vec![5, 50, 104], &Config::default());
        state.select_algorithm(Algorithm::Quicksort);
        let mut out = Vec::new();
        draw(&mut out, &state).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Quicksort  Status: PAUSED  5.0 steps/s"));
        assert!(text.ends_with(&format!("{}\n", HELP)));
    }
}
