use deeplinker::{Deeplink, DeeplinkError, Deeplinker, DEFAULT_SCHEME};
use log::{error, info, LevelFilter};

mod log_utils;

const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");
const VERSION_PARAM_NAME: &str = "version";
const LOG_LEVEL_PARAM_NAME: &str = "log_level";
const LOG_FILE_PARAM_NAME: &str = "log_file";
const SCHEME_PARAM_NAME: &str = "scheme";
const URLS_PARAM_NAME: &str = "urls";

/// One output line per resolved URL.
fn describe(uri: &str, result: &Result<Deeplink, DeeplinkError>) -> String {
    match result {
        Ok(link) => format!("{} -> {}", uri, link),
        Err(e) => format!("{} -> error: {}", uri, e),
    }
}

fn main() {
    let args = clap::Command::new("Deeplink inspector")
        .args(&[
            clap::Arg::new(VERSION_PARAM_NAME)
                .short('v')
                .long("version")
                .action(clap::ArgAction::SetTrue)
                .help("Print the version of this software and exit"),
            clap::Arg::new(LOG_LEVEL_PARAM_NAME)
                .short('l')
                .long("loglvl")
                .action(clap::ArgAction::Set)
                .value_parser(["info", "debug", "trace"])
                .default_value("info")
                .help("Logging level"),
            clap::Arg::new(LOG_FILE_PARAM_NAME)
                .long("logfile")
                .action(clap::ArgAction::Set)
                .help("File path for storing logs. If not specified, the logs are printed to stderr"),
            clap::Arg::new(SCHEME_PARAM_NAME)
                .short('s')
                .long("scheme")
                .action(clap::ArgAction::Set)
                .default_value(DEFAULT_SCHEME)
                .help("URL scheme the links are expected to use"),
            clap::Arg::new(URLS_PARAM_NAME)
                .action(clap::ArgAction::Append)
                .required_unless_present(VERSION_PARAM_NAME)
                .help("Activation URLs to resolve"),
        ])
        .disable_version_flag(true)
        .get_matches();

    if args.get_flag(VERSION_PARAM_NAME) {
        println!("{}", VERSION_STRING);
        return;
    }

    let level = match args
        .get_one::<String>(LOG_LEVEL_PARAM_NAME)
        .map(String::as_str)
    {
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    };
    if let Err(e) = log_utils::install(
        args.get_one::<String>(LOG_FILE_PARAM_NAME).map(String::as_str),
        level,
    ) {
        eprintln!("Couldn't set up logging: {}", e);
        std::process::exit(2);
    }

    let deeplinker = Deeplinker::new();
    if let Some(scheme) = args.get_one::<String>(SCHEME_PARAM_NAME) {
        if scheme != DEFAULT_SCHEME {
            deeplinker.set_scheme_prefix(scheme.as_str());
        }
    }

    let mut failures = 0usize;
    for uri in args.get_many::<String>(URLS_PARAM_NAME).into_iter().flatten() {
        let result = deeplinker.open(uri);
        println!("{}", describe(uri, &result));
        match result {
            Ok(_) => deeplinker.refresh(),
            Err(_) => failures += 1,
        }
    }

    if failures > 0 {
        error!("{} link(s) could not be resolved", failures);
        log::logger().flush();
        std::process::exit(1);
    }
    info!("All links resolved");
    log::logger().flush();
}
