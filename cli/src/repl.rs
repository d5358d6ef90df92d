use clap::{Parser, Subcommand};

/// Commands accepted on stdin while a timer is running
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_flag = true)]
struct RunCli {
    #[command(subcommand)]
    command: RunCommand,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunCommand {
    /// Start again after a reset (with pre-roll for interval timers)
    Start,
    /// Start immediately, skipping the pre-roll
    Go,
    #[command(alias = "p")]
    Pause,
    #[command(alias = "r")]
    Resume,
    Reset,
    /// AMRAP: tally a finished round
    #[command(name = "add-round", alias = "+")]
    AddRound,
    /// AMRAP: take back a round
    #[command(name = "remove-round", alias = "rm")]
    RemoveRound,
    #[command(alias = "s")]
    Status,
    #[command(alias = "q")]
    Quit,
}

/// Parse one input line. Empty lines yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<RunCommand>, String> {
    let args = shlex::split(line).ok_or("error: Invalid quoting")?;
    if args.is_empty() {
        return Ok(None);
    }
    let cli = RunCli::try_parse_from(args).map_err(|e| e.to_string())?;
    Ok(Some(cli.command))
}

pub const HELP: &str = "commands: pause (p), resume (r), reset, start, go, add-round (+), remove-round (rm), status (s), quit (q)";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_and_aliases() {
        assert_eq!(parse_line("pause"), Ok(Some(RunCommand::Pause)));
        assert_eq!(parse_line("p"), Ok(Some(RunCommand::Pause)));
        assert_eq!(parse_line("  +  "), Ok(Some(RunCommand::AddRound)));
        assert_eq!(parse_line("remove-round"), Ok(Some(RunCommand::RemoveRound)));
        assert_eq!(parse_line("rm"), Ok(Some(RunCommand::RemoveRound)));
        assert_eq!(parse_line("q"), Ok(Some(RunCommand::Quit)));
    }

    #[test]
    fn empty_line_is_not_a_command() {
        assert_eq!(parse_line("   "), Ok(None));
    }

    #[test]
    fn unknown_command_is_an_error() {
        assert!(parse_line("jump").is_err());
        assert!(parse_line("\"unterminated").is_err());
    }
}
