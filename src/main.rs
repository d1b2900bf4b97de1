// SPDX-License-Identifier: MPL-2.0
use iced_reel::app::{self, Flags};

const HELP: &str = "\
IcedReel - lightweight video player

USAGE:
    iced_reel [OPTIONS] [FILE]

ARGS:
    <FILE>                  Video to open and play on startup

OPTIONS:
    --config-dir <DIR>      Directory holding settings.toml
    -v, --verbose           Log player events
    -h, --help              Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let verbose = args.contains(["-v", "--verbose"]);
    let config_dir: Option<String> = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    init_tracing(verbose);

    app::run(Flags {
        file_path,
        config_dir,
    })
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    // A subscriber may already be installed by an embedding process.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init();
}
