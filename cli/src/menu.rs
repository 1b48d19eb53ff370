//! Interactive menu: a small command dispatcher over whitespace-separated
//! tokens read from the console.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::report::{route, write_full_report, write_route};
use crate::state::Session;
use crate::util::{parse_point, PointError};

/// A menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Full report from the configured source.
    AllOutput,
    /// Prompt for start and end points.
    StartEnd,
    Exit,
    Invalid,
}

impl Choice {
    pub fn parse(token: &str) -> Self {
        match token.trim() {
            "1" => Choice::AllOutput,
            "2" => Choice::StartEnd,
            "3" => Choice::Exit,
            _ => Choice::Invalid,
        }
    }
}

/// Splits input into whitespace-separated tokens across lines.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, or None at end of input.
    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(t) = self.pending.pop_front() {
                return Ok(Some(t));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

fn write_menu<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\t1. Display All output")?;
    writeln!(out, "\t2. Want to give Start and End point")?;
    writeln!(out, "\t3. Exit")?;
    write!(out, "Enter your choice: ")?;
    out.flush()
}

/// List people with their 1-based point numbers.
pub fn write_points<W: Write + ?Sized>(session: &Session, out: &mut W) -> io::Result<()> {
    writeln!(out, "Points:")?;
    for (i, person) in session.graph.people().iter().enumerate() {
        writeln!(out, "{} {}", i + 1, person.name)?;
    }
    Ok(())
}

/// Read a point number after printing `prompt`. Ok(None) at end of input.
fn read_point<R: BufRead, W: Write + ?Sized>(
    tokens: &mut Tokens<R>,
    out: &mut W,
    prompt: &str,
    node_count: usize,
) -> io::Result<Option<Result<usize, PointError>>> {
    write!(out, "{} (1-{}): ", prompt, node_count)?;
    out.flush()?;
    Ok(tokens
        .next_token()?
        .map(|t| parse_point(&t, node_count)))
}

/// Handle the start/end prompt. Returns false when input ran out.
fn start_end<R: BufRead, W: Write + ?Sized>(
    session: &Session,
    tokens: &mut Tokens<R>,
    out: &mut W,
) -> io::Result<bool> {
    let n = session.graph.node_count();
    write_points(session, out)?;

    let Some(start) = read_point(tokens, out, "Enter start node", n)? else {
        return Ok(false);
    };
    let Some(end) = read_point(tokens, out, "Enter end node", n)? else {
        return Ok(false);
    };

    match (start, end) {
        (Ok(from), Ok(to)) => match route(session, from, to) {
            Some(report) => write_route(&report, out)?,
            None => writeln!(out, "Invalid nodes.")?,
        },
        (Err(e), _) | (_, Err(e)) => {
            tracing::debug!(error = %e, "start/end input rejected");
            writeln!(out, "Invalid nodes.")?;
        }
    }
    writeln!(out, "\n")?;
    Ok(true)
}

/// Run the menu until the user exits or input ends.
pub fn run<R: BufRead, W: Write + ?Sized>(session: &Session, input: R, out: &mut W) -> io::Result<()> {
    let mut tokens = Tokens::new(input);

    loop {
        write_menu(out)?;
        let Some(token) = tokens.next_token()? else {
            writeln!(out)?;
            return Ok(());
        };

        match Choice::parse(&token) {
            Choice::AllOutput => {
                writeln!(out, "\n")?;
                write_full_report(session, session.settings.default_source, out)?;
                writeln!(out, "\n")?;
            }
            Choice::StartEnd => {
                if !start_end(session, &mut tokens, out)? {
                    writeln!(out)?;
                    return Ok(());
                }
            }
            Choice::Exit => {
                writeln!(out, "Exiting the program. Goodbye!")?;
                writeln!(out, "\n")?;
                return Ok(());
            }
            Choice::Invalid => {
                writeln!(out, "Error.....Please select a valid option")?;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_route_core::demo_campus;

    fn run_with(input: &str) -> String {
        let mut session = Session::with_graph(demo_campus());
        session.settings.export_after_report = false;
        let mut out = Vec::new();
        run(&session, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_choice_parse() {
        assert_eq!(Choice::parse("1"), Choice::AllOutput);
        assert_eq!(Choice::parse(" 2\n"), Choice::StartEnd);
        assert_eq!(Choice::parse("3"), Choice::Exit);
        assert_eq!(Choice::parse("9"), Choice::Invalid);
        assert_eq!(Choice::parse("abc"), Choice::Invalid);
    }

    #[test]
    fn test_exit() {
        let out = run_with("3\n");
        assert!(out.starts_with("\t1. Display All output\n"));
        assert!(out.contains("Exiting the program. Goodbye!"));
    }

    #[test]
    fn test_invalid_then_exit() {
        let out = run_with("7\nx\n3\n");
        assert_eq!(out.matches("Error.....Please select a valid option").count(), 2);
        assert_eq!(out.matches("Enter your choice: ").count(), 3);
    }

    #[test]
    fn test_end_of_input_exits() {
        let out = run_with("");
        assert_eq!(out.matches("Enter your choice: ").count(), 1);
        assert!(!out.contains("Goodbye"));
    }

    #[test]
    fn test_all_output() {
        let out = run_with("1\n3\n");
        assert!(out.contains("Distance from node 0 to node 11: 13\n"));
        assert!(out.contains("Path: Ahmad -> Dr Behjat Zuhaira -> Prof. Usama Imran -> Dr Ifrah Qaiser -> Malaika\n"));
    }

    #[test]
    fn test_start_end() {
        let out = run_with("2\n1 10\n3\n");
        assert!(out.contains("Points:\n1 Ahmad\n2 Dr Behjat Zuhaira\n"));
        assert!(out.contains("Enter start node (1-12): Enter end node (1-12): "));
        assert!(out.contains("Distance from Ahmad to Zubair: 12\n"));
        assert!(out.contains(
            "Path: Ahmad -> Dr Behjat Zuhaira -> Amir Rehman -> Farhan -> Zubair\nTime taken: "
        ));
    }

    #[test]
    fn test_start_end_tokens_on_separate_lines() {
        let out = run_with("2\n2\n\n6\n3\n");
        assert!(out.contains("Distance from Dr Behjat Zuhaira to Prof. Usama Imran: 4\n"));
    }

    #[test]
    fn test_start_end_invalid_points() {
        let out = run_with("2\n0 5\n2\n1 13\n2\n-1 abc\n3\n");
        assert_eq!(out.matches("Invalid nodes.").count(), 3);
        assert!(out.contains("Goodbye"));
    }

    #[test]
    fn test_start_end_input_runs_out() {
        let out = run_with("2\n4\n");
        assert!(out.contains("Enter end node (1-12): "));
        assert!(!out.contains("Distance from"));
    }
}
