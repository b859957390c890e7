/// Circuit command parser.
///
/// The language is line-oriented: one command per line. Each line is trimmed
/// and split on whitespace; the first token is the keyword (case-insensitive)
/// and the second, if present, the operand. Further tokens are ignored.
///
/// Grammar:
///   line := 'init' INT | 'h' INT | 'x' INT | <any other tokens>
///
/// Parsing never fails: unknown keywords become `Command::Unrecognized` and
/// bad operands are carried as `Operand::Missing`/`Operand::Malformed`.
use super::command::{Command, Operand, Statement};

// ── Public API ────────────────────────────────────────────────────────────

/// Parse one source line. Returns `None` for blank or whitespace-only lines.
pub fn parse_line(line: &str) -> Option<Command> {
    let mut words = line.split_whitespace();
    let keyword = words.next()?;
    let operand = Operand::from_token(words.next());

    Some(match keyword.to_ascii_lowercase().as_str() {
        "init" => Command::Init(operand),
        "h" => Command::Hadamard(operand),
        "x" => Command::PauliX(operand),
        other => Command::Unrecognized(other.to_string()),
    })
}

/// Parse a sequence of command lines, keeping 1-based line numbers.
/// Blank lines are dropped.
pub fn parse<I, S>(lines: I) -> Vec<Statement>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            parse_line(line.as_ref()).map(|command| Statement {
                command,
                line: idx + 1,
            })
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────
