// SPDX-License-Identifier: MPL-2.0
use iced_uploader::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Usage: iced_uploader [OPTIONS]

Options:
  --lang <ID>           Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --max-size-mb <N>     Largest accepted file, in megabytes
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: read_option(&mut args, "--lang"),
        config_dir: read_option(&mut args, "--config-dir"),
        max_size_mb: read_option(&mut args, "--max-size-mb"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(arguments = ?rest, "ignoring unknown arguments");
    }

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}

/// Reads an optional flag value, logging and skipping values that fail to
/// parse.
fn read_option<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(flag = key, error = %err, "invalid command line value");
        None
    })
}
