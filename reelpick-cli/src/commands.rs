//! CLI command implementations

use std::fs::File;
use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Subcommand;
use reelpick_core::export::{printable_text, write_csv};
use reelpick_core::{ReelpickConfig, ResultPicker};
use reelpick_search::{MovieCatalog, NoticeLevel, PosterArchive, SearchFilters};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<IpAddr>,
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Search once, pick results and export them
    Search {
        /// Film title to look up
        query: String,
        /// Keep only films released this year
        #[arg(long)]
        year: Option<u16>,
        /// Keep only films rated at least this much (0-10)
        #[arg(long)]
        min_rating: Option<f32>,
        /// Result numbers to pick, as shown in the listing (e.g. 1,3)
        #[arg(long, conflicts_with = "all")]
        pick: Option<String>,
        /// Pick every result
        #[arg(long)]
        all: bool,
        /// Write the picked films to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Print the picked films as a printable list
        #[arg(long)]
        print: bool,
        /// Write the picked films' posters to this ZIP file
        #[arg(long)]
        posters: Option<PathBuf>,
    },
    /// Show catalog mode and provider
    Status,
}

/// Output options for a search run.
struct ExportTargets {
    csv: Option<PathBuf>,
    print: bool,
    posters: Option<PathBuf>,
}

/// Handle the CLI command
///
/// # Errors
/// Returns appropriate error based on the command that fails
pub async fn handle_command(command: Commands, config: ReelpickConfig) -> anyhow::Result<()> {
    match command {
        Commands::Serve { host, port } => serve(config, host, port).await,
        Commands::Search {
            query,
            year,
            min_rating,
            pick,
            all,
            csv,
            print,
            posters,
        } => {
            let filters = SearchFilters { year, min_rating };
            let targets = ExportTargets {
                csv,
                print,
                posters,
            };
            search(config, &query, filters, pick.as_deref(), all, targets).await
        }
        Commands::Status => status(&config),
    }
}

async fn serve(
    mut config: ReelpickConfig,
    host: Option<IpAddr>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    reelpick_web::run_server(config)
        .await
        .map_err(|e| anyhow::anyhow!("Server failed: {e}"))
}

async fn search(
    config: ReelpickConfig,
    query: &str,
    filters: SearchFilters,
    pick: Option<&str>,
    all: bool,
    targets: ExportTargets,
) -> anyhow::Result<()> {
    let catalog = MovieCatalog::from_config(&config.catalog)?;
    let outcome = catalog.search_with_filters(query, &filters).await;

    if let Some(notice) = &outcome.notice {
        let tag = match notice.level {
            NoticeLevel::Info => "note",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        };
        eprintln!("{tag}: {}", notice.message);
    }

    let mut picker = ResultPicker::new();
    picker.replace_results(outcome.query.clone(), outcome.records);

    if all {
        picker.select_all();
    } else if let Some(pick) = pick {
        picker.select_indices(parse_picks(pick)?)?;
    }

    for (i, record) in picker.results().iter().enumerate() {
        let mark = if picker.is_checked(i) { "x" } else { " " };
        println!(
            "{:>3}. [{mark}] {} ({}) - {}",
            i + 1,
            record.title,
            record.display_year(),
            record.display_director()
        );
    }

    let selected = picker.selected();
    tracing::debug!(
        query = %outcome.query,
        results = picker.results().len(),
        picked = selected.len(),
        "Search command selection ready"
    );

    if let Some(path) = &targets.csv {
        let file =
            File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
        write_csv(file, selected.iter().copied())?;
        println!("Wrote {} film(s) to {}", selected.len(), path.display());
    }

    if targets.print {
        let generated_at = chrono::Local::now().naive_local();
        println!("\n{}", printable_text(&selected, generated_at));
    }

    if let Some(path) = &targets.posters {
        let archive = PosterArchive::new(&config.catalog)?;
        let report = archive.build_zip(&selected).await?;
        std::fs::write(path, &report.bytes)
            .with_context(|| format!("Cannot write {}", path.display()))?;
        println!(
            "Wrote {} poster(s) to {} ({} skipped)",
            report.included.len(),
            path.display(),
            report.skipped.len()
        );
    }

    Ok(())
}

fn status(config: &ReelpickConfig) -> anyhow::Result<()> {
    let catalog = MovieCatalog::from_config(&config.catalog)?;

    println!("Mode:     {}", catalog.mode());
    println!("Provider: {}", catalog.provider_name());
    println!("Language: {}", config.catalog.language);
    println!(
        "Server:   http://{}:{}",
        config.server.host, config.server.port
    );
    Ok(())
}

/// Parses 1-based result numbers like `1,3` into 0-based positions.
fn parse_picks(raw: &str) -> anyhow::Result<Vec<usize>> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let n: usize = part
                .parse()
                .with_context(|| format!("Invalid result number '{part}'"))?;
            if n == 0 {
                bail!("Result numbers start at 1");
            }
            Ok(n - 1)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_picks() {
        assert_eq!(parse_picks("1,3").unwrap(), [0, 2]);
        assert_eq!(parse_picks(" 2 , ,4").unwrap(), [1, 3]);
        assert!(parse_picks("0").is_err());
        assert!(parse_picks("one").is_err());
    }
}
