#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, path::PathBuf, process};

use iced::{Settings, Size};
use tracing::{error, info};

use phonegate_ui::{component::text, font, theme};

use phonegate_gui::{
    app::App,
    config::Config,
    dir::PhonegateDirectory,
    logger::{parse_log_level, setup_logger},
    VERSION,
};

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(PhonegateDirectory),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: phonegate [OPTIONS]

Options:
    --datadir <PATH>    Path of phonegate datadir
    -v, --version       Display phonegate version
    -h, --help          Print help
        "#
        );
        process::exit(1);
    }

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--datadir" {
            if let Some(a) = iter.next() {
                res.push(Arg::DatadirPath(PhonegateDirectory::new(PathBuf::from(a))));
            } else {
                return Err("missing arg to --datadir".into());
            }
        } else {
            return Err(format!("unknown argument '{}'", arg).into());
        }
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let datadir = match args.as_slice() {
        [] => PhonegateDirectory::new_default()?,
        [Arg::DatadirPath(datadir)] => datadir.clone(),
        _ => {
            return Err("Unknown args combination".into());
        }
    };

    if !datadir.exists() {
        datadir.init()?;
    }

    let config = Config::load(&datadir.config_file())?;
    let log_level = match parse_log_level()? {
        Some(level) => level,
        None => config.log_level()?,
    };
    setup_logger(log_level, &datadir)?;
    setup_panic_hook();
    info!("Phonegate v{} using datadir {}", VERSION, datadir.path().display());

    let settings = Settings {
        id: Some("Phonegate".to_string()),
        antialiasing: true,

        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        fonts: Vec::new(),
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: 560.0,
            height: 720.0,
        },
        min_size: Some(Size {
            width: 420.0,
            height: 560.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(App::title, App::update, App::view)
        .theme(|_| theme::Theme::default())
        .subscription(App::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || App::new(config))
    {
        error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        let _ = std::io::stdout().flush();
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split(' ').map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(Some(vec![]), parse_args(args("phonegate")).ok());
        assert!(parse_args(args("phonegate --meth")).is_err());
        assert!(parse_args(args("phonegate --datadir")).is_err());
        assert_eq!(
            Some(vec![Arg::DatadirPath(PhonegateDirectory::new(
                PathBuf::from("hello")
            ))]),
            parse_args(args("phonegate --datadir hello")).ok()
        );
    }
}
