use clap::Parser;
use claimsutra_catalog::core::resolver;
use claimsutra_catalog::utils::{logger, validation::Validate};
use claimsutra_catalog::{
    CatalogSource, CatalogStore, CliConfig, ConfigProvider, FixtureCatalogSource,
    HttpCatalogSource, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting claimsutra-catalog CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let file_config = match &cli.config {
        Some(path) => Some(TomlConfig::from_file(path)?),
        None => None,
    };
    let provider: &dyn ConfigProvider = match &file_config {
        Some(config) => config,
        None => &cli,
    };

    let validation = match &file_config {
        Some(config) => config.validate(),
        None => cli.validate(),
    };
    if let Err(e) = validation {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let scope_tags = provider.scope_tags().to_vec();

    if let Some(path) = &cli.fixture {
        tracing::info!("Reading catalog from fixture file: {}", path);
        let store = CatalogStore::new(FixtureCatalogSource::new(path));
        run(&store, &cli, &scope_tags).await
    } else {
        let source = HttpCatalogSource::from_config(provider)?;
        let store = CatalogStore::new(source);
        run(&store, &cli, &scope_tags).await
    }
}

async fn run<S: CatalogSource>(
    store: &CatalogStore<S>,
    cli: &CliConfig,
    scope_tags: &[String],
) -> anyhow::Result<()> {
    if let Some(query) = &cli.search {
        let results = store.search(query).await;
        tracing::info!("{} services matched '{}'", results.len(), query);
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else if cli.popular {
        let entries = store.popular().await;
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        let tree = resolver::resolve_tree(store, resolver::tag_scope(scope_tags)).await?;
        tracing::info!("Resolved {} categories", tree.len());
        println!("{}", serde_json::to_string_pretty(&tree)?);
    }
    Ok(())
}
