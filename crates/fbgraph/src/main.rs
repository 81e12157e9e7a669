use crate::prelude::*;
use clap::Parser;
use fbgraph_core::Configuration;

mod comments;
mod error;
mod geo;
mod input;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Map saved Graph API responses into typed values and inspect them"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "FBGRAPH_VERBOSE", global = true, default_value = "false")]
    verbose: bool,

    /// Keep the raw JSON of every mapped value so it can be printed with --raw.
    #[clap(
        long,
        env = "FBGRAPH_JSON_STORE_ENABLED",
        global = true,
        default_value = "false"
    )]
    json_store: bool,
}

impl Global {
    /// Mapper configuration derived from the global flags
    pub fn configuration(&self) -> Configuration {
        Configuration::new().with_json_store(self.json_store)
    }
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Comment responses (single comment or the comments edge)
    Comments(crate::comments::App),

    /// Build the geo-location request parameter
    Geo(crate::geo::GeoOptions),
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::Comments(sub_app) => crate::comments::run(sub_app, app.global),
        SubCommands::Geo(options) => crate::geo::run(options, app.global),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
