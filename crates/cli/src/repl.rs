//! Interactive command loop.
//!
//! Each input line is one command. Bad commands are reported and the loop
//! keeps going; transport failures are reported the same way.

use hnsearch_client::{SearchSession, SearchTransport};
use hnsearch_core::{Error, SortKey};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::render;

const HELP: &str = "\
commands:
  search <text>  submit a query (empty text searches the front page)
  more           load the next page of the current query
  sort <KEY>     click a sort header: NONE, TITLE, AUTHOR, URL, POINTS
  show           print the current results
  help           print this message
  quit           leave";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    More,
    Sort(SortKey),
    Show,
    Help,
    Quit,
}

/// Input line that is not a command.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("`{0}` expects an argument")]
    MissingArgument(&'static str),

    #[error(transparent)]
    Sort(#[from] Error),
}

impl Command {
    /// Parse one input line.
    ///
    /// The text after `search ` is kept verbatim, since it becomes an exact
    /// cache key.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let (name, rest) = match line.trim_start().split_once(' ') {
            Some((name, rest)) => (name, Some(rest)),
            None => (line.trim(), None),
        };

        match name {
            "search" | "s" => Ok(Command::Search(rest.unwrap_or_default().to_string())),
            "more" | "m" => Ok(Command::More),
            "sort" => {
                let key = rest.map(str::trim).filter(|k| !k.is_empty()).ok_or(CommandError::MissingArgument("sort"))?;
                Ok(Command::Sort(key.parse()?))
            }
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Drive `session` from `input` until EOF or `quit`, writing to `output`.
pub async fn run<T, R, W>(session: &mut SearchSession<T>, input: R, output: &mut W) -> anyhow::Result<()>
where
    T: SearchTransport,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    output.write_all(b"> ").await?;
    output.flush().await?;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            output.write_all(b"> ").await?;
            output.flush().await?;
            continue;
        }

        let reply = match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => execute(session, command).await,
            Err(e) => format!("error: {e}\n"),
        };

        output.write_all(reply.as_bytes()).await?;
        output.write_all(b"> ").await?;
        output.flush().await?;
    }

    Ok(())
}

async fn execute<T: SearchTransport>(session: &mut SearchSession<T>, command: Command) -> String {
    let outcome = match command {
        Command::Search(text) => {
            session.set_query(text);
            eprintln!("Loading...");
            session.submit().await.map(|_| ())
        }
        Command::More => {
            eprintln!("Loading...");
            session.load_more().await.map(|_| ())
        }
        Command::Sort(key) => {
            session.on_sort(key);
            Ok(())
        }
        Command::Show => Ok(()),
        Command::Help => return format!("{HELP}\n"),
        Command::Quit => return String::new(),
    };

    match outcome {
        Ok(()) => screen(session),
        Err(e) => format!("error: {e}\n"),
    }
}

/// Table plus footer for the session's current results.
pub fn screen<T: SearchTransport>(session: &SearchSession<T>) -> String {
    let view = session.view();
    let mut out = render::render_table(&view, session.sort_state());
    out.push_str(&render::render_footer(session.search_key(), view.len(), session.current_page()));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use hnsearch_core::{Hit, Page};

    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("search react hooks"), Ok(Command::Search("react hooks".into())));
        assert_eq!(Command::parse("search"), Ok(Command::Search(String::new())));
        assert_eq!(Command::parse("more"), Ok(Command::More));
        assert_eq!(Command::parse("  show  "), Ok(Command::Show));
        assert_eq!(Command::parse("sort points"), Ok(Command::Sort(SortKey::Points)));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn test_search_text_is_verbatim() {
        assert_eq!(Command::parse("search  Rust "), Ok(Command::Search(" Rust ".into())));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(Command::parse("frobnicate"), Err(CommandError::Unknown("frobnicate".into())));
        assert_eq!(Command::parse("sort"), Err(CommandError::MissingArgument("sort")));
        assert_eq!(Command::parse("sort DATE"), Err(CommandError::Sort(Error::UnknownSortKey("DATE".into()))));
    }

    struct Canned;

    #[async_trait::async_trait]
    impl SearchTransport for Canned {
        async fn fetch_page(&self, query: &str, page: u32) -> Result<Page, Error> {
            let hit = Hit::new(format!("{query}-{page}")).with_title(format!("{query} page {page}")).with_points(1);
            Ok(Page::new(vec![hit], page))
        }
    }

    #[tokio::test]
    async fn test_run_script() {
        let mut session = SearchSession::new(Canned, "");
        let input: &[u8] = b"search rust\nmore\nsort TITLE\nbogus\nquit\nsearch ignored\n";
        let mut output = Vec::new();

        run(&mut session, input, &mut output).await.unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("rust page 0"));
        assert!(output.contains("rust page 1"));
        assert!(output.contains("Title*"));
        assert!(output.contains("unknown command: bogus"));
        assert!(!output.contains("ignored"));
        assert_eq!(session.search_key(), "rust");
        assert_eq!(session.current_page(), 1);
    }

    #[tokio::test]
    async fn test_more_before_search_reports_error() {
        let mut session = SearchSession::new(Canned, "");
        let mut output = Vec::new();

        run(&mut session, &b"more\n"[..], &mut output).await.unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("OUT_OF_ORDER_PAGE"));
    }
}
