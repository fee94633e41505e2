//! Parsing of console input lines into commands.

use std::path::PathBuf;

/// One line of console input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// `folder [DIR]`: open a folder, prompting when no path is given
    Folder(Option<PathBuf>),
    /// `open NAME|N`: click an entry of the file list
    Open(String),
    /// `open-file [PATH]`: open a document by full path
    OpenFile(Option<PathBuf>),
    /// `click N`: click the tab area at x = N
    Click(i32),
    /// `new`: click the sentinel tab
    New,
    /// `tabs`: print the tab strip
    Tabs,
    /// `files`: print the file list
    Files,
    Help,
    Quit,
    /// Blank line
    Empty,
}

/// Usage text printed by `help`.
pub const HELP: &str = "\
Commands:
  folder [DIR]       open a folder (prompts when DIR is omitted)
  open NAME|N        open a document from the file list, by name or index
  open-file [PATH]   open a document by full path (prompts when omitted)
  click N            click tab N (the last tab is '+', which creates a document)
  new                create a new document (same as clicking '+')
  tabs               show open tabs
  files              show the file list
  help               show this help
  quit               exit";

impl ConsoleCommand {
    /// Parse one input line. Unknown commands and bad arguments return a
    /// message suitable for printing.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let optional_path = |rest: &str| (!rest.is_empty()).then(|| PathBuf::from(rest));

        match word {
            "" => Ok(ConsoleCommand::Empty),
            "folder" | "cd" => Ok(ConsoleCommand::Folder(optional_path(rest))),
            "open" if rest.is_empty() => Err("usage: open NAME|N".to_string()),
            "open" => Ok(ConsoleCommand::Open(rest.to_string())),
            "open-file" => Ok(ConsoleCommand::OpenFile(optional_path(rest))),
            "click" => rest
                .parse::<i32>()
                .map(ConsoleCommand::Click)
                .map_err(|_| format!("usage: click N (got '{rest}')")),
            "new" | "+" => Ok(ConsoleCommand::New),
            "tabs" => Ok(ConsoleCommand::Tabs),
            "files" | "ls" => Ok(ConsoleCommand::Files),
            "help" | "?" => Ok(ConsoleCommand::Help),
            "quit" | "exit" => Ok(ConsoleCommand::Quit),
            other => Err(format!("unknown command '{other}', type 'help'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(ConsoleCommand::parse("  "), Ok(ConsoleCommand::Empty));
        assert_eq!(
            ConsoleCommand::parse("folder"),
            Ok(ConsoleCommand::Folder(None))
        );
        assert_eq!(
            ConsoleCommand::parse("folder /srv/my flows"),
            Ok(ConsoleCommand::Folder(Some(PathBuf::from("/srv/my flows"))))
        );
        assert_eq!(
            ConsoleCommand::parse("open a.wkfw"),
            Ok(ConsoleCommand::Open("a.wkfw".to_string()))
        );
        assert_eq!(
            ConsoleCommand::parse("click 2"),
            Ok(ConsoleCommand::Click(2))
        );
        assert_eq!(ConsoleCommand::parse("+"), Ok(ConsoleCommand::New));
        assert_eq!(ConsoleCommand::parse("exit"), Ok(ConsoleCommand::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(ConsoleCommand::parse("open").is_err());
        assert!(ConsoleCommand::parse("click left").is_err());
        assert!(ConsoleCommand::parse("frobnicate").unwrap_err().contains("frobnicate"));
    }
}
