// std imports
use std::{
    io::{ErrorKind, stdout},
    process,
};

// third-party imports
use clap::{CommandFactory, Parser};
use env_logger::{self as logger};
use itertools::Itertools;

// local imports
use samplegen::{App, Catalog, Options, Settings, cli, config, error::*, output::OutputStream};

// private modules
mod help;

const SAMPLEGEN_DEBUG_LOG: &str = "SAMPLEGEN_DEBUG_LOG";
const SAMPLEGEN_DEBUG_LOG_STYLE: &str = "SAMPLEGEN_DEBUG_LOG_STYLE";

// ---

fn init_logging() {
    if std::env::var(SAMPLEGEN_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(SAMPLEGEN_DEBUG_LOG)
                .write_style(SAMPLEGEN_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn bootstrap(opt: &cli::Opt) -> Result<Settings> {
    let (configs, no_default) = opt.config_files();
    log::debug!("load settings from {configs:?} (no defaults: {no_default})");

    config::at(configs).no_default(no_default).load()
}

fn run() -> Result<()> {
    init_logging();

    let opt = cli::Opt::parse_from(wild::args());
    anstream::ColorChoice::from(opt.color).write_global();

    if let Some(shell) = opt.shell_completions {
        let mut cmd = cli::Opt::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut stdout());
        return Ok(());
    }

    if opt.man_page {
        let man = clap_mangen::Man::new(cli::Opt::command());
        man.render(&mut stdout())?;
        return Ok(());
    }

    let settings = bootstrap(&opt)?;
    let catalog = Catalog::new(&settings.generators)?;
    log::debug!("catalog contains {} generators", catalog.len());

    if opt.list_generators {
        return list_generators(&catalog);
    }

    let app = App::new(Options::resolve(&opt, &settings, &catalog)?);
    let mut source = app.source();

    let mut output: OutputStream = match &opt.output {
        Some(path) => Box::new(std::fs::File::create(path)?),
        None => Box::new(stdout()),
    };

    match app.run(&mut source, output.as_mut()) {
        Err(Error::Io(ref e)) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        result => result,
    }
}

fn list_generators(catalog: &Catalog) -> Result<()> {
    let mut formatter = help::Formatter::new(anstream::stdout(), help::terminal_width());

    formatter.format_grouped_list(
        catalog
            .iter()
            .sorted_by_key(|g| g.multiplier())
            .chunk_by(|g| g.multiplier())
            .into_iter()
            .map(|(multiplier, group)| {
                (
                    format!("multiplier {multiplier}"),
                    group.filter_map(|g| g.name()).collect::<Vec<_>>(),
                )
            }),
    )?;

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        err.log(&AppInfo);
        process::exit(1);
    }
}

struct AppInfo;

impl AppInfoProvider for AppInfo {
    fn usage_suggestion(&self, request: UsageRequest) -> Option<UsageResponse> {
        match request {
            UsageRequest::ListGenerators => Some(("--list-generators".into(), "".into())),
        }
    }
}
