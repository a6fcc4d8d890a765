//! Line-oriented prompt.

use super::{OutputFormat, render};
use crate::Detector;
use anyhow::Result;
use std::io::{BufRead, Write};

pub const EXIT_COMMAND: &str = "salir";
pub const PROMPT: &str = "Texto > ";

/// True when the trimmed line is the exit command, in any case.
#[inline]
pub fn is_exit_command(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(EXIT_COMMAND)
}

fn strip_newline(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |l| l.strip_suffix('\r').unwrap_or(l))
}

/// Classify one line at a time until EOF or [`EXIT_COMMAND`].
///
/// Lines reach the detector as typed, minus the line terminator. Returns the
/// number of lines classified.
pub fn run<R: BufRead, W: Write>(
    detector: &Detector,
    format: OutputFormat,
    mut input: R,
    out: &mut W,
) -> Result<usize> {
    writeln!(out, "Detector de Idiomas - Modo Interactivo")?;
    writeln!(out, "Escribe texto para detectar si es español, inglés o mixto")?;
    writeln!(out, "Escribe \"{EXIT_COMMAND}\" para terminar")?;
    writeln!(out)?;

    let mut line = String::new();
    let mut classified = 0;
    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let text = strip_newline(&line);
        if is_exit_command(text) {
            break;
        }

        render::write(out, &detector.detect(text), format)?;
        writeln!(out)?;
        classified += 1;
    }

    log::info!("interactive session classified {classified} lines");
    Ok(classified)
}
