use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::error::Error;
use subnet_resolver::config::{Config, OutputFormat};
use subnet_resolver::output::{print_json, print_summary};
use subnet_resolver::{inventory, SubnetResolver};

const LOG_CONFIG_FILE: &str = "log4rs.yml";

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging()?;
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let config = Config::from_env()?;
    log::debug!("Config: {:?}", config);

    let resolver = SubnetResolver::new(inventory::from_source(&config.source)?);
    match config.output {
        OutputFormat::Json => print_json(&resolver.get_subnets(&config.query)?)?,
        OutputFormat::Summary => {
            print_summary(&resolver.aggregate(&config.query)?, &config.query.purpose)?
        }
    }

    Ok(())
}

/// Use `log4rs.yml` when present, else log INFO and above to stderr.
fn init_logging() -> Result<(), Box<dyn Error>> {
    if std::path::Path::new(LOG_CONFIG_FILE).exists() {
        log4rs::init_file(LOG_CONFIG_FILE, Default::default())?;
        return Ok(());
    }
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(
            "{d(%H:%M:%S)} {h({l:5})} {t} - {m}{n}",
        )))
        .build();
    let config = log4rs::Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))?;
    log4rs::init_config(config)?;
    Ok(())
}
