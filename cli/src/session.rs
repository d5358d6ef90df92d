use tempo_core::timer::formatted_time;
use tempo_core::{
    EventLog, IntervalClock, Lifecycle, TimerConfig, TimerDiscipline, TimerEngine, TimerEvent,
    TimerSnapshot,
};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::repl::{self, RunCommand};

type Engine = TimerEngine<IntervalClock, EventLog>;

/// Run one timer in the terminal until it completes or the user quits.
///
/// Ticks and stdin lines are handled on the same task, so every command and
/// every tick is fully applied before the next one is looked at.
pub async fn run(config: TimerConfig, countdown: bool) -> Result<(), String> {
    let (clock, mut ticks) = IntervalClock::channel();
    let mut engine: Engine =
        TimerEngine::with_observer(config, clock, EventLog::new()).map_err(|e| e.to_string())?;

    println!("{}", describe(&config));
    println!("{}", repl::HELP);

    if countdown {
        engine.start();
    } else {
        engine.start_without_countdown();
    }
    render(&mut engine);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    loop {
        tokio::select! {
            Some(tick) = ticks.recv() => {
                if engine.handle_tick(tick) {
                    render(&mut engine);
                }
            }
            line = lines.next_line(), if stdin_open => {
                match line.map_err(|e| e.to_string())? {
                    Some(line) => match repl::parse_line(&line) {
                        Ok(Some(RunCommand::Quit)) => break,
                        Ok(Some(command)) => {
                            apply(&mut engine, command);
                            render(&mut engine);
                        }
                        Ok(None) => {}
                        Err(err) => println!("{err}"),
                    },
                    None => {
                        tracing::debug!("stdin closed, timer keeps running");
                        stdin_open = false;
                    }
                }
            }
        }

        if engine.lifecycle() == Lifecycle::Completed {
            break;
        }
    }

    // Dropping the engine disarms whatever clock is still armed
    drop(engine);
    Ok(())
}

fn apply(engine: &mut Engine, command: RunCommand) {
    match command {
        RunCommand::Start => engine.start(),
        RunCommand::Go => engine.start_without_countdown(),
        RunCommand::Pause => engine.pause(),
        RunCommand::Resume => engine.resume(),
        RunCommand::Reset => engine.reset(),
        RunCommand::AddRound => engine.increment_round(),
        RunCommand::RemoveRound => engine.decrement_round(),
        RunCommand::Status | RunCommand::Quit => {}
    }
}

fn render(engine: &mut Engine) {
    for event in engine.observer_mut().drain() {
        println!("{}", event_line(event));
    }
    println!("{}", status_line(&engine.snapshot()));
}

/// One-line summary of a config
pub fn describe(config: &TimerConfig) -> String {
    let label = config.discipline.label();
    match config.discipline {
        TimerDiscipline::Stopwatch => label.to_string(),
        TimerDiscipline::Countdown | TimerDiscipline::Amrap => {
            format!("{label} {}", formatted_time(config.duration_seconds))
        }
        TimerDiscipline::Emom => format!(
            "{label} {}s work / {}s rest x {}",
            config.effort_seconds,
            config.effective_rest_seconds(),
            config.total_rounds
        ),
        TimerDiscipline::Tabata | TimerDiscipline::Custom => format!(
            "{label} {}s work / {}s rest x {}",
            config.effort_seconds, config.rest_seconds, config.total_rounds
        ),
    }
}

pub fn event_line(event: TimerEvent) -> String {
    match event {
        TimerEvent::Started => "GO!".to_string(),
        TimerEvent::Completed => "Workout complete".to_string(),
        TimerEvent::PhaseChanged(phase) => format!(">> {}", phase.label()),
        TimerEvent::RoundChanged(round) => format!(">> Round {}", round + 1),
        TimerEvent::FinalSeconds(secs) => format!("{secs}..."),
    }
}

pub fn status_line(snap: &TimerSnapshot) -> String {
    let mut line = format!("[{}]", snap.label);

    match snap.lifecycle {
        Lifecycle::Starting => {
            line.push_str(&format!(" starting in {}", snap.starting_countdown));
            return line;
        }
        Lifecycle::Default => line.push_str(" ready"),
        Lifecycle::Paused => line.push_str(" paused"),
        Lifecycle::Completed => line.push_str(" done"),
        Lifecycle::Running => {}
    }

    if let Some(round) = &snap.round_text {
        line.push_str(&format!(" {round}"));
    }
    if snap.discipline.is_interval() {
        line.push_str(&format!(" {}", snap.phase.label()));
    }
    line.push_str(&format!(" {}", snap.time()));
    line
}
