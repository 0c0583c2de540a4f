// SPDX-License-Identifier: MPL-2.0
use instafilter::app::{self, Flags};
use instafilter::filter::FilterKind;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Instafilter

USAGE:
  instafilter [OPTIONS] [IMAGE]

OPTIONS:
  -h, --help               Print this help and exit
  --lang <LOCALE>          Interface language (e.g. en-US, fr)
  --config-dir <DIR>       Directory holding settings.toml
  --filter <ID>            Filter to start with (twirl-distortion, sepia-tone,
                           pixellate, gaussian-blur, unsharp-mask, vignette)
  --amount <VALUE>         Filter amount between 0 and 1

ARGS:
  [IMAGE]                  Picture to filter instead of the bundled example
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        config_dir: opt_value(&mut args, "--config-dir"),
        filter: opt_value::<String>(&mut args, "--filter").and_then(|id| {
            let kind = FilterKind::from_id(&id);
            if kind.is_none() {
                tracing::warn!(%id, "unknown filter, using the saved one");
            }
            kind
        }),
        amount: opt_value(&mut args, "--amount"),
        file_path: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}

/// Reads an optional flag value, warning and ignoring it when unparsable.
fn opt_value<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(flag = key, %err, "ignoring invalid command line value");
            None
        }
    }
}
