use nu_ansi_term::{AnsiGenericString, Style};
use std::{
    fs::File,
    io::{self, BufWriter, IsTerminal, Write},
    path::Path,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so stdout can be piped as JSON/CSV. `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // ignore error; a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

pub fn bold<'a>(msg: impl AsRef<str> + 'a) -> AnsiGenericString<'a, str> {
    Style::new().bold().paint(msg.as_ref().to_owned())
}

/// Writer for command output: `path` if given, otherwise stdout.
pub fn output_writer(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            info!("writing report to {}", path.display());
            Ok(Box::new(BufWriter::new(File::create(path)?)))
        }
        None => Ok(Box::new(io::stdout().lock())),
    }
}

/// Colour only when writing straight to a terminal.
pub fn use_color(out: Option<&Path>, no_color: bool) -> bool {
    !no_color && out.is_none() && io::stdout().is_terminal()
}
