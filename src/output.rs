//! Terminal formatting for lookup and signature results

use crate::index::types::format_signature;
use crate::query::LookupResult;
use crate::signature::{components, Signature, LETTER_SIG_BITS};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print one lookup: a query header, then exact matches (bold green) and
/// fuzzy neighbors (dimmed, prefixed with `~`).
pub fn print_lookup(query: &str, result: &LookupResult, color: bool, heading: bool) -> io::Result<()> {
    let mut out = stdout(color);
    write_lookup(&mut out, query, result, heading)
}

/// Print a word's signature and its two fields
pub fn print_signature(word: &str, sig: Signature, color: bool) -> io::Result<()> {
    let mut out = stdout(color);
    let (fp, ls) = components(sig);

    out.set_color(ColorSpec::new().set_bold(true))?;
    write!(out, "{}", word)?;
    out.reset()?;
    writeln!(
        out,
        " => {} ({}) fingerprint={} letters={}",
        format_signature(sig),
        sig,
        format_signature(fp >> LETTER_SIG_BITS),
        format_signature(ls)
    )
}

fn write_lookup<W: WriteColor>(
    out: &mut W,
    query: &str,
    result: &LookupResult,
    heading: bool,
) -> io::Result<()> {
    if heading {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
        writeln!(out, "{}", query)?;
        out.reset()?;
    }

    if result.is_empty() {
        out.set_color(ColorSpec::new().set_dimmed(true))?;
        writeln!(out, "  (no matches)")?;
        out.reset()?;
        return Ok(());
    }

    for (word, &exact) in result {
        if exact {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
            writeln!(out, "  {}", word)?;
        } else {
            out.set_color(ColorSpec::new().set_dimmed(true))?;
            writeln!(out, "~ {}", word)?;
        }
        out.reset()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use termcolor::NoColor;

    #[test]
    fn test_write_lookup_plain() {
        let mut result = LookupResult::new();
        result.insert("pots".into(), false);
        result.insert("stop".into(), true);

        let mut out = NoColor::new(Vec::new());
        write_lookup(&mut out, "spot", &result, true).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text, "spot\n~ pots\n  stop\n");
    }

    #[test]
    fn test_write_lookup_empty() {
        let mut out = NoColor::new(Vec::new());
        write_lookup(&mut out, "zzz", &LookupResult::new(), false).unwrap();
        let text = String::from_utf8(out.into_inner()).unwrap();
        assert_eq!(text, "  (no matches)\n");
    }
}
