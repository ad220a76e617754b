// SPDX-License-Identifier: MPL-2.0
use yf_image_deck::app::{self, Flags};

const USAGE: &str = "\
Usage: yf_image_deck [OPTIONS] [PATH]

Arguments:
  [PATH]               Image to open

Options:
  --lang <LOCALE>      UI language (e.g. en-US, zh-CN)
  --config-dir <DIR>   Directory containing settings.toml
  -h, --help           Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some(Flags {
        lang,
        file_path,
        config_dir,
    }))
}

fn main() -> iced::Result {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{USAGE}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    log::debug!("starting with {flags:?}");
    app::run(flags)
}
