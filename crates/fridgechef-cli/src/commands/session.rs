//! Interactive screen session.
//!
//! Reads one command per line from stdin (or a script file) and races it
//! against the next pending scan, so the scanning screen advances on its own
//! after the detection delay.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use fridgechef_core::{Action, Clock, Config, Event, Result, Session, SystemClock};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::render;

#[derive(Args)]
pub struct SessionArgs {
    /// Read commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,
    /// Print events as JSON lines instead of rendering screens
    #[arg(long)]
    json: bool,
}

/// One parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Action(Action),
    /// Block until every pending scan has been delivered.
    Wait,
    State,
    Help,
    Quit,
}

const HELP: &str = "\
commands:
  scan                 photograph the fridge (home)
  manual               enter ingredients by hand (home)
  add <name>           add an ingredient (ingredients)
  rm <n>               remove ingredient number n (ingredients)
  search               browse recipes (ingredients, needs one ingredient)
  rescan               photograph again (ingredients)
  back                 previous screen
  shop                 shopping list (recipes)
  time <bucket>        all | quick | medium | long (recipes)
  difficulty <level>   all | easy | medium | hard (recipes)
  select <id>          expand or collapse a recipe (recipes)
  wait                 wait for pending scans
  state                print the session snapshot as JSON
  help                 this text
  quit                 leave
";

/// Parse one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> std::result::Result<Option<Command>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "scan" => Command::Action(Action::StartDetection),
        "manual" => Command::Action(Action::AddManually),
        "add" => Command::Action(Action::AddIngredient(rest.to_string())),
        "rm" | "remove" => {
            let n: usize = rest
                .parse()
                .map_err(|_| format!("expected an ingredient number, got '{rest}'"))?;
            if n == 0 {
                return Err("ingredient numbers start at 1".to_string());
            }
            Command::Action(Action::RemoveIngredient(n - 1))
        }
        "back" => Command::Action(Action::Back),
        "search" => Command::Action(Action::SearchRecipes),
        "rescan" => Command::Action(Action::ScanAgain),
        "shop" | "shopping" => Command::Action(Action::ViewShoppingList),
        "time" => Command::Action(Action::SetTimeFilter(
            rest.parse().map_err(|e| format!("{e}"))?,
        )),
        "difficulty" => Command::Action(Action::SetDifficultyFilter(
            rest.parse().map_err(|e| format!("{e}"))?,
        )),
        "select" => {
            let id: u32 = rest
                .parse()
                .map_err(|_| format!("expected a recipe id, got '{rest}'"))?;
            Command::Action(Action::ToggleRecipe(id))
        }
        "wait" => Command::Wait,
        "state" => Command::State,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(format!("unknown command '{other}' (try 'help')")),
    };
    Ok(Some(command))
}

pub fn run(args: SessionArgs) -> Result<()> {
    let config = Config::load_or_default();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(run_loop(args, config))
}

async fn run_loop(args: SessionArgs, config: Config) -> Result<()> {
    let input: Box<dyn AsyncBufRead + Unpin> = match &args.script {
        Some(path) => Box::new(BufReader::new(tokio::fs::File::open(path).await?)),
        None => Box::new(BufReader::new(tokio::io::stdin())),
    };
    let mut lines = input.lines();
    let mut session = Session::from_config(&config, SystemClock);
    let output = Output {
        json: args.json,
        config: &config,
    };

    output.screen(&session);
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_command(&line) {
                    Ok(None) => {}
                    Ok(Some(Command::Quit)) => break,
                    Ok(Some(Command::Help)) => print!("{HELP}"),
                    Ok(Some(Command::State)) => {
                        println!("{}", serde_json::to_string(&session.snapshot())?);
                    }
                    Ok(Some(Command::Wait)) => {
                        while let Some(deadline) = session.next_deadline_ms() {
                            sleep_until(deadline).await;
                            let events = session.tick();
                            output.events(&session, &events)?;
                        }
                    }
                    Ok(Some(Command::Action(action))) => {
                        let events = session.dispatch(action);
                        if events.is_empty() {
                            tracing::debug!(screen = %session.screen(), "command ignored");
                        }
                        output.events(&session, &events)?;
                    }
                    Err(message) => eprintln!("{message}"),
                }
            }
            _ = next_scan(session.next_deadline_ms()) => {
                let events = session.tick();
                output.events(&session, &events)?;
            }
        }
    }
    Ok(())
}

struct Output<'a> {
    json: bool,
    config: &'a Config,
}

impl Output<'_> {
    fn screen<C: Clock>(&self, session: &Session<C>) {
        if !self.json {
            print!("\n{}", render::screen(session, &self.config.display));
        }
    }

    fn events<C: Clock>(
        &self,
        session: &Session<C>,
        events: &[Event],
    ) -> Result<(), serde_json::Error> {
        if self.json {
            for event in events {
                println!("{}", serde_json::to_string(event)?);
            }
        } else if !events.is_empty() {
            self.screen(session);
        }
        Ok(())
    }
}

async fn sleep_until(deadline_ms: u64) {
    let wait = deadline_ms.saturating_sub(SystemClock.now_ms());
    tokio::time::sleep(Duration::from_millis(wait)).await;
}

/// Resolves when the next scan is due; never resolves when none is pending.
async fn next_scan(deadline_ms: Option<u64>) {
    match deadline_ms {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending::<()>().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fridgechef_core::{Difficulty, DifficultyFilter, TimeFilter};

    fn action(line: &str) -> Action {
        match parse_command(line) {
            Ok(Some(Command::Action(action))) => action,
            other => panic!("expected an action for '{line}', got {other:?}"),
        }
    }

    #[test]
    fn parses_navigation_commands() {
        assert_eq!(action("scan"), Action::StartDetection);
        assert_eq!(action("  MANUAL "), Action::AddManually);
        assert_eq!(action("rescan"), Action::ScanAgain);
        assert_eq!(action("shop"), Action::ViewShoppingList);
        assert_eq!(action("back"), Action::Back);
    }

    #[test]
    fn add_keeps_the_rest_of_the_line() {
        assert_eq!(
            action("add Queijo Mussarela"),
            Action::AddIngredient("Queijo Mussarela".into())
        );
        assert_eq!(action("add"), Action::AddIngredient(String::new()));
    }

    #[test]
    fn rm_uses_one_based_numbers() {
        assert_eq!(action("rm 1"), Action::RemoveIngredient(0));
        assert!(parse_command("rm 0").is_err());
        assert!(parse_command("rm x").is_err());
    }

    #[test]
    fn parses_filters_and_selection() {
        assert_eq!(action("time quick"), Action::SetTimeFilter(TimeFilter::Quick));
        assert_eq!(
            action("difficulty hard"),
            Action::SetDifficultyFilter(DifficultyFilter::Only(Difficulty::Hard))
        );
        assert_eq!(action("select 4"), Action::ToggleRecipe(4));
        assert!(parse_command("time soon").is_err());
    }

    #[test]
    fn blank_lines_and_comments_are_skipped() {
        assert_eq!(parse_command(""), Ok(None));
        assert_eq!(parse_command("   "), Ok(None));
        assert_eq!(parse_command("# scan the fridge"), Ok(None));
    }

    #[test]
    fn control_commands() {
        assert_eq!(parse_command("wait"), Ok(Some(Command::Wait)));
        assert_eq!(parse_command("quit"), Ok(Some(Command::Quit)));
        assert_eq!(parse_command("help"), Ok(Some(Command::Help)));
        assert!(parse_command("dance").is_err());
    }
}
