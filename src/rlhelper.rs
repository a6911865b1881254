// Copyright (C) 2020-2026 Andy Kurnia.

// https://github.com/kkawakam/rustyline/blob/master/examples/example.rs

pub static COMMANDS: &[&str] = &[
    "best", "check", "commit", "exit", "help", "level", "mode", "new", "place", "rack", "show",
    "source", "undo", "words",
];

#[derive(rustyline_derive::Helper)]
pub struct MyHelper {
    filename_completer: rustyline::completion::FilenameCompleter,
    hinter: rustyline::hint::HistoryHinter,
    colored_prompt: String,
}

impl rustyline::completion::Completer for MyHelper {
    type Candidate = rustyline::completion::Pair;

    // command names first, then file names (for source).
    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &rustyline::Context<'_>,
    ) -> Result<(usize, Vec<rustyline::completion::Pair>), rustyline::error::ReadlineError> {
        let typed = &line[..pos];
        if typed.contains(char::is_whitespace) {
            return self.filename_completer.complete(line, pos, ctx);
        }
        Ok((
            0,
            COMMANDS
                .iter()
                .filter(|cmd| cmd.starts_with(typed))
                .map(|cmd| rustyline::completion::Pair {
                    display: cmd.to_string(),
                    replacement: format!("{} ", cmd),
                })
                .collect(),
        ))
    }
}

impl rustyline::hint::Hinter for MyHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &rustyline::Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl rustyline::highlight::Highlighter for MyHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> std::borrow::Cow<'b, str> {
        if default {
            std::borrow::Cow::Borrowed(&self.colored_prompt)
        } else {
            std::borrow::Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> std::borrow::Cow<'h, str> {
        std::borrow::Cow::Owned("\x1b[1m".to_owned() + hint + "\x1b[m")
    }
}

impl rustyline::validate::Validator for MyHelper {}

pub fn new_rl_editor()
-> rustyline::Result<rustyline::Editor<MyHelper, rustyline::history::DefaultHistory>> {
    let mut rl = rustyline::Editor::new()?;
    rl.set_helper(Some(MyHelper {
        filename_completer: rustyline::completion::FilenameCompleter::new(),
        hinter: rustyline::hint::HistoryHinter::new(),
        colored_prompt: "\x1b[1;32m>> \x1b[m".to_owned(),
    }));
    Ok(rl)
}
