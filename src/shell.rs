//! Line-oriented driver for the router.
//!
//! Stands in for the browser: each command is one user action, processed to
//! completion before the next line is read.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::router::{Router, SubmitOutcome};
use crate::view::outline;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Go(String),
    Search(String),
    Categories,
    Back,
    Forward,
    Show,
    Url,
    Help,
    Quit,
}

impl Command {
    /// Parses a line. Blank lines parse to `None`; unknown commands are an
    /// error carrying the offending word.
    pub fn parse(line: &str) -> Option<Result<Self, String>> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let command = match word {
            "go" | "open" => Command::Go(rest.to_string()),
            "search" | "s" => Command::Search(rest.to_string()),
            "categories" => Command::Categories,
            "back" | "b" => Command::Back,
            "forward" | "f" => Command::Forward,
            "show" => Command::Show,
            "url" => Command::Url,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => return Some(Err(other.to_string())),
        };
        Some(Ok(command))
    }
}

const HELP: &str = "\
commands:
  go <location>   open a location, e.g. go /?id=42
  search <text>   type into the search box and submit
  categories      click \"View all categories\"
  back, forward   traverse history
  show            print the current view
  url             print the current location
  quit";

/// Reads commands from `input` until EOF or `quit`, writing views to `output`.
pub async fn run<R, W>(router: &Router, input: R, mut output: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    show(router, &mut output).await?;
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            None => continue,
            Some(Ok(command)) => command,
            Some(Err(word)) => {
                output
                    .write_all(format!("unknown command: {word} (try help)\n").as_bytes())
                    .await?;
                continue;
            }
        };

        match command {
            Command::Go(location) => {
                router.navigate(&location).await;
                show(router, &mut output).await?;
            }
            Command::Search(text) => {
                let message = match router.search_form() {
                    None => Some("this view has no search form".to_string()),
                    Some(form) => {
                        form.set_value(&text);
                        match router.submit_search(&form).await {
                            SubmitOutcome::Empty => Some("nothing to search for".to_string()),
                            SubmitOutcome::Ignored => Some("a search is already running".to_string()),
                            SubmitOutcome::Stale => None,
                            SubmitOutcome::Completed(_) => None,
                        }
                    }
                };
                if let Some(message) = message {
                    output.write_all(format!("{message}\n").as_bytes()).await?;
                }
                show(router, &mut output).await?;
            }
            Command::Categories => {
                if router.show_all_categories().await {
                    show(router, &mut output).await?;
                } else {
                    output
                        .write_all(b"this view has no categories button\n")
                        .await?;
                }
            }
            Command::Back => {
                if router.history().back().await {
                    show(router, &mut output).await?;
                } else {
                    output.write_all(b"already at the oldest entry\n").await?;
                }
            }
            Command::Forward => {
                if router.history().forward().await {
                    show(router, &mut output).await?;
                } else {
                    output.write_all(b"already at the newest entry\n").await?;
                }
            }
            Command::Show => show(router, &mut output).await?,
            Command::Url => {
                let location = router.history().location();
                output.write_all(format!("{location}\n").as_bytes()).await?;
            }
            Command::Help => output.write_all(format!("{HELP}\n").as_bytes()).await?,
            Command::Quit => break,
        }
        output.flush().await?;
    }

    output.flush().await
}

async fn show<W: AsyncWrite + Unpin>(router: &Router, output: &mut W) -> std::io::Result<()> {
    let location = router.history().location();
    let tree = outline(&router.root().snapshot());
    output
        .write_all(format!("== {location}\n{tree}\n").as_bytes())
        .await
}
