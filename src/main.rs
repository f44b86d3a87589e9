// SPDX-License-Identifier: MPL-2.0
use iced_swatch::app::{self, paths, Flags};
use iced_swatch::ui::notifications::Position;
use iced_swatch::ui::theming::ThemeMode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_swatch - design system component gallery

USAGE:
  iced_swatch [OPTIONS]

OPTIONS:
  --theme <light|dark|system>   Initial theme when none is persisted
  --position <anchor>           Toast anchor (top-left, top-center, top-right,
                                bottom-left, bottom-center, bottom-right)
  --config-dir <path>           Directory holding settings.toml
  -h, --help                    Print this help

ENVIRONMENT:
  RUST_LOG                      Log filter (default: info)
  ICED_SWATCH_CONFIG_DIR        Config directory when --config-dir is absent
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

    let config_dir: Option<String> = parse_or_exit(args.opt_value_from_str("--config-dir"));
    let theme: Option<ThemeMode> = parse_or_exit(args.opt_value_from_str("--theme"));
    let position: Option<Position> = parse_or_exit(args.opt_value_from_str("--position"));

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_override(config_dir);
    app::run(Flags { theme, position })
}

fn parse_or_exit<T>(result: Result<Option<T>, pico_args::Error>) -> Option<T> {
    result.unwrap_or_else(|err| {
        eprintln!("error: {err}\n\n{HELP}");
        std::process::exit(2);
    })
}
