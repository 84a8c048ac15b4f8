//! Colored console listings

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::extractors::{ImportDeclaration, is_local_import};

use super::config::OutputConfig;
use super::json::DependencyReport;

/// Shown instead of an empty dependency list.
pub const NO_DEPENDENCIES_HINT: &str = "no local imports found; check your selection";

fn stdout_for(config: &OutputConfig) -> StandardStream {
    let choice = if config.use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print the dependencies of a selection to stdout.
pub fn print_dependencies(report: &DependencyReport, config: &OutputConfig) -> io::Result<()> {
    let mut stdout = stdout_for(config);
    write_dependencies(&mut stdout, report)
}

/// Write the dependency listing to any color-capable writer.
pub fn write_dependencies<W: WriteColor>(out: &mut W, report: &DependencyReport) -> io::Result<()> {
    if report.dependencies.is_empty() {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        writeln!(out, "{}", NO_DEPENDENCIES_HINT)?;
        out.reset()?;
        return Ok(());
    }

    for path in &report.dependencies {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "+ ")?;
        out.reset()?;
        writeln!(out, "{}", path)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "{} selected, {} dependenc{}",
        report.selected.len(),
        report.dependencies.len(),
        if report.dependencies.len() == 1 { "y" } else { "ies" }
    )?;
    Ok(())
}

/// Print the import declarations of one file to stdout.
pub fn print_imports(declarations: &[ImportDeclaration], config: &OutputConfig) -> io::Result<()> {
    let mut stdout = stdout_for(config);
    write_imports(&mut stdout, declarations)
}

/// One line per declaration: span, kind, raw path and locality.
pub fn write_imports<W: WriteColor>(out: &mut W, declarations: &[ImportDeclaration]) -> io::Result<()> {
    if declarations.is_empty() {
        writeln!(out, "no imports found")?;
        return Ok(());
    }

    for decl in declarations {
        let span = decl.span;
        write!(
            out,
            "{}:{}-{}:{}  {:<15} ",
            span.start_line,
            span.start_column,
            span.end_line,
            span.end_column,
            decl.kind.as_str()
        )?;

        let local = is_local_import(&decl.raw_path);
        let color = if local { Color::Cyan } else { Color::White };
        out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(local))?;
        write!(out, "{}", decl.raw_path)?;
        out.reset()?;
        writeln!(out, "  {}", if local { "local" } else { "external" })?;
    }
    Ok(())
}
