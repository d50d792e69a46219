use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dashboard_core::{
    sample::{format_thousands, ProductTable, DEFAULT_SEED},
    NavigationController, ViewRegistry,
};
use shared::domain::{NavEvent, PageId};
use tracing::debug;

#[derive(Parser, Debug)]
struct Cli {
    /// Seed for the synthetic chart series.
    #[arg(long, global = true, default_value_t = DEFAULT_SEED)]
    seed: u64,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Html,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one page as an element tree or HTML fragment.
    Render {
        page: String,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Replay navigation triggers starting from Home.
    Navigate { triggers: Vec<String> },
    /// Print the data page aggregates.
    Summary,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let registry = ViewRegistry::new(cli.seed);

    match cli.command {
        Command::Render { page, format } => {
            let page: PageId = page.parse()?;
            let element = registry.render(page)?;
            match format {
                Format::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&element).context("serialize page")?
                ),
                Format::Html => println!("{}", element.to_html()),
            }
        }
        Command::Navigate { triggers } => {
            let mut controller = NavigationController::new(registry);
            let step = controller.startup()?;
            println!("start -> {} {:?}", step.page(), step.highlight.as_array());
            for trigger in triggers {
                debug!(%trigger, "replaying");
                let step = controller
                    .handle(&NavEvent::new(trigger.as_str(), 1))
                    .with_context(|| format!("replaying trigger '{trigger}'"))?;
                println!("{trigger} -> {} {:?}", step.page(), step.highlight.as_array());
            }
        }
        Command::Summary => {
            let summary = ProductTable::sample().summary()?;
            println!("total_sales={}", format_thousands(summary.total_sales));
            println!("total_inventory={}", format_thousands(summary.total_inventory));
            println!("product_count={}", summary.product_count);
        }
    }

    Ok(())
}
