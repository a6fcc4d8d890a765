use crate::{Detection, Language};
use anyhow::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Pretty-printed JSON, including raw feature counts
    Json,
}

pub fn write<W: Write>(out: &mut W, detection: &Detection, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, detection),
        OutputFormat::Json => write_json(out, detection),
    }
}

pub fn write_text<W: Write>(out: &mut W, detection: &Detection) -> Result<()> {
    writeln!(out, " Resultado:")?;
    writeln!(out, "  Idioma: {}", detection.language.label())?;
    writeln!(out, "  Confianza: {}%", detection.confidence)?;
    if detection.language == Language::Mixed {
        writeln!(out, "   Español: {}%", detection.spanish)?;
        writeln!(out, "   Inglés: {}%", detection.english)?;
        writeln!(out, "   💡 Parece ser una mezcla (¿Spanglish?)")?;
    }
    if let Some(reason) = detection.reason {
        writeln!(out, "   Razón: {reason}")?;
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, detection: &Detection) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, detection)?;
    writeln!(out)?;
    Ok(())
}
