use std::env;
use std::io;

use log::info;

use chain_importer::{
    prompt_group, ChainFilePipeline, ChainImporter, Pipeline, RecordId, RestDataStore,
    StoreConfig,
};

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    match args.get(1).map(String::as_str) {
        None => import_all(),
        Some("delete") if args.len() == 3 => delete(&args[2]),
        _ => {
            println!("Usage: {} [delete <chain-id>]", args[0]);
            Ok(())
        }
    }
}

fn connect() -> anyhow::Result<RestDataStore> {
    let config = StoreConfig::from_env()?;
    Ok(RestDataStore::new(&config)?)
}

fn import_all() -> anyhow::Result<()> {
    let store = connect()?;

    let Some(group) = prompt_group(io::stdin().lock(), io::stdout())? else {
        return Ok(());
    };

    let reports = ChainFilePipeline::new(&store, ".", group).run()?;
    for report in reports {
        info!("{}", report);
    }
    Ok(())
}

fn delete(chain_id: &str) -> anyhow::Result<()> {
    let store = connect()?;
    ChainImporter::new(&store).delete_chain(&RecordId::from(chain_id))?;
    Ok(())
}
