mod analysis;
mod config;
mod db;
mod error;
mod export;
mod ledger;
mod models;
mod run;
mod util;

use anyhow::Result;
use tracing::debug;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let (user, rest) = run::split_user_flag(&args);

    let config = config::Config::from_env()?.with_owner(user.as_deref());
    config::init_tracing(&config.log_filter);
    debug!(owner = %config.owner, db = %config.db_path.display(), "resolved configuration");

    config.ensure_data_dir()?;
    let mut db = db::Database::open(&config.db_path)?;
    let today = chrono::Local::now().date_naive();

    let stdout = std::io::stdout();
    run::Cli::new(&mut db, stdout.lock(), &config, today).run(&rest)
}
