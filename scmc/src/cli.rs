use std::{
    io::{IsTerminal, Write},
    time::Duration,
};
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

pub(crate) fn print_running(text: &str) {
    print_colourful_prefix("Running", Color::Magenta, text)
}

pub(crate) fn print_finished(duration: Duration) {
    print_colourful_prefix("Finished", Color::Green, &format!("in {}", seconds(duration)))
}

pub(crate) fn print_writing(text: &str) {
    print_colourful_prefix("Writing", Color::Cyan, text)
}

pub(crate) fn print_warning(text: &str) {
    print_colourful_prefix("Warning", Color::Yellow, text)
}

pub fn seconds(duration: Duration) -> String {
    format!("{:.2}s", duration.as_millis() as f32 / 1000.)
}

/// Status lines are best effort; a closed stderr is not worth failing the run over.
pub fn print_colourful_prefix(prefix: &str, color: Color, text: &str) {
    let _ = write_colourful_prefix(prefix, color, text);
}

fn write_colourful_prefix(prefix: &str, color: Color, text: &str) -> std::io::Result<()> {
    let buffer_writer = stderr_buffer_writer();
    let mut buffer = buffer_writer.buffer();

    buffer.set_color(
        ColorSpec::new()
            .set_intense(true)
            .set_bold(true)
            .set_fg(Some(color)),
    )?;
    write!(buffer, "{prefix: >11}")?;
    buffer.set_color(&ColorSpec::new())?;
    writeln!(buffer, " {text}")?;

    buffer_writer.print(&buffer)
}

pub fn stderr_buffer_writer() -> BufferWriter {
    BufferWriter::stderr(color_choice())
}

/// Installs a `tracing` subscriber, but only when `RUST_LOG` asks for one.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn colour_forced() -> bool {
    std::env::var("FORCE_COLOR").is_ok_and(|force| !force.is_empty())
}

fn color_choice() -> ColorChoice {
    if colour_forced() {
        ColorChoice::Always
    } else if std::io::stderr().is_terminal() {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Prints `prompt` and reads one line without its line ending.
/// `None` means stdin is exhausted.
pub(crate) fn read_line(prompt: &str) -> std::io::Result<Option<String>> {
    let mut input = String::new();

    print!("{prompt}");
    std::io::stdout().flush()?;

    if std::io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    let trimmed = input.trim_end_matches(['\n', '\r']).len();
    input.truncate(trimmed);

    Ok(Some(input))
}

pub(crate) fn report(err: &scm_core::utils::prelude::Error) {
    let buffer_writer = stderr_buffer_writer();
    let mut buffer = buffer_writer.buffer();

    if err.pretty(&mut buffer).is_ok() {
        let _ = buffer_writer.print(&buffer);
    } else {
        eprintln!("{err}");
    }
}
