mod args;
mod print;

use std::fs::{self, OpenOptions};
use std::io::{self, Read};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tabview_engine::TabularView;
use tabview_types::{Record, records_from_json};
use tabview_util::{LoadedViewConfig, default_log_path, load_view_config, resolve_config_path};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::args::Args;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.print)?;

    let view = build_view(&args)?;
    if args.print {
        print!("{}", print::render_page(&view));
        return Ok(());
    }
    tabview_tui::run(view).await
}

/// Logs go to stderr in `--print` mode and to a file while the TUI owns
/// the terminal.
fn init_tracing(to_stderr: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if to_stderr {
        let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).try_init();
        return Ok(());
    }

    let path = default_log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

fn build_view(args: &Args) -> Result<TabularView> {
    let LoadedViewConfig { mut config, columns } = match resolve_config_path(args.config.as_deref()) {
        Some(path) => load_view_config(&path)?,
        None => LoadedViewConfig::default(),
    };
    if let Some(title) = &args.title {
        config = config.with_title(title.clone());
    }
    if let Some(page_size) = args.page_size {
        config = config.with_page_size(page_size);
    }

    let records = load_records(&args.records)?;
    info!(records = records.len(), columns = columns.len(), "Loaded records");
    let mut view = if columns.is_empty() {
        TabularView::with_inferred_columns(records, config)
    } else {
        TabularView::new(records, columns, config)
    };

    if let Some(term) = &args.search {
        view.set_search(term.clone());
    }
    if let Some(sort) = &args.sort
        && !view.set_sort(&sort.key, sort.direction)
    {
        warn!(key = %sort.key, "Ignoring --sort: no sortable column with that key");
    }
    if let Some(page) = args.page {
        view.go_to_page(page);
    }
    Ok(view)
}

/// Reads records from a file, or stdin for `-`.
fn load_records(path: &Path) -> Result<Vec<Record>> {
    let text = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).context("read records from stdin")?;
        buffer
    } else {
        fs::read_to_string(path).with_context(|| format!("read records from {}", path.display()))?
    };
    let value: serde_json::Value =
        serde_json::from_str(&text).with_context(|| format!("parse JSON records from {}", path.display()))?;
    let records = records_from_json(value).with_context(|| format!("load records from {}", path.display()))?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tabview_types::SortDirection;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn builds_a_view_from_records_config_and_flags() {
        let records = write_temp(
            ".json",
            r#"{"data": [
                {"id": 1, "amount": 10.5, "memo": "rent"},
                {"id": 2, "amount": 99, "memo": "coffee"},
                {"id": 3, "amount": 7, "memo": "rent deposit"}
            ]}"#,
        );
        let config = write_temp(
            ".yaml",
            "title: Ledger\npage_size: 1\ncolumns:\n  - key: memo\n  - key: amount\n    format: { type: currency }\n",
        );
        let records_path = records.path().to_str().unwrap();
        let config_path = config.path().to_str().unwrap();
        let args = Args::try_parse_from([
            "tabview",
            records_path,
            "--config",
            config_path,
            "--search",
            "rent",
            "--sort",
            "amount:desc",
            "--page",
            "9",
        ])
        .unwrap();

        let view = build_view(&args).unwrap();
        assert_eq!(view.config().title, "Ledger");
        let keys: Vec<&str> = view.columns().iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["memo", "amount"]);
        assert_eq!(view.state().sort_key(), Some("amount"));
        assert_eq!(view.state().sort_direction(), SortDirection::Desc);
        assert_eq!(view.filtered_len(), 2);
        // Clamped to the last page: the smaller rent amount.
        assert_eq!(view.state().current_page(), 2);
        assert_eq!(view.page_records()[0].get("id"), Some(&serde_json::json!(3)));
        assert!(print::render_page(&view).contains("$7.00"));
    }

    #[test]
    fn rejects_non_object_rows() {
        let records = write_temp(".json", "[1, 2]");
        let error = load_records(records.path()).unwrap_err();
        assert!(format!("{error:#}").contains("load records from"));
    }
}
