use clap::Parser;
use trivia_core::GameConfig;
use wasm_bindgen::prelude::*;

mod api;
mod game;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Base URL of the jService-compatible trivia API
    #[arg(long, default_value = api::DEFAULT_BASE_URL)]
    api: String,

    /// Number of categories on the board
    #[arg(long, default_value_t = GameConfig::DEFAULT_CATEGORIES)]
    categories: usize,

    /// Number of clues per category
    #[arg(long, default_value_t = GameConfig::DEFAULT_CLUES_PER_CATEGORY)]
    clues: usize,

    /// How many categories to sample the board from
    #[arg(long, default_value_t = GameConfig::DEFAULT_POOL_SIZE)]
    pool: usize,
}

impl Args {
    /// Parses `#-v&--seed=42` style location hashes as if they were a command line.
    fn from_location_hash(hash: &str) -> Result<Self, clap::Error> {
        let argv = std::iter::once("").chain(hash.split(['#', '&']).filter(|arg| !arg.is_empty()));
        Self::try_parse_from(argv)
    }

    /// Like [`Args::from_location_hash`], but a hash that is not an argument list (an in-page anchor
    /// such as `#top`) yields the defaults along with the parse error.
    fn from_location_hash_or_default(hash: &str) -> (Self, Option<clap::Error>) {
        match Self::from_location_hash(hash) {
            Ok(args) => (args, None),
            Err(err) => (Self::parse_from([""]), Some(err)),
        }
    }

    fn game_config(&self) -> GameConfig {
        GameConfig::new(self.categories, self.clues, self.pool).unwrap_or_else(|err| {
            log::warn!(
                "{err} ({} categories, {} clues, pool of {}), using defaults",
                self.categories,
                self.clues,
                self.pool
            );
            GameConfig::default()
        })
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window().location().hash().unwrap_or_default();

    let (args, hash_error) = Args::from_location_hash_or_default(&location_hash);
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    if let Some(err) = hash_error {
        log::warn!("ignoring location hash {:?}: {}", location_hash, err);
    }
    log::debug!("args: {:?}", args);

    let props = game::GameProps {
        config: args.game_config(),
        seed: args.seed,
        provider: api::HttpProvider::new(args.api.clone()),
    };

    let root = document()
        .get_element_by_id("game")
        .expect("Could not find id=\"game\" element");

    log::debug!("App started");
    yew::Renderer::<game::GameView<api::HttpProvider>>::with_root_and_props(root, props).render();
}
