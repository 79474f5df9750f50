use std::path::PathBuf;

use clap::Parser;
use tabview_types::SortDirection;

/// Filter, sort and page through a JSON array of records.
#[derive(Parser, Debug)]
#[command(name = "tabview", version, about)]
pub struct Args {
    /// JSON file with the records ("-" reads stdin)
    pub records: PathBuf,

    /// View config (YAML or JSON, chosen by extension)
    #[arg(short, long, env = "TABVIEW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Title shown above the table; overrides the config
    #[arg(long)]
    pub title: Option<String>,

    /// Rows per page; overrides the config
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Initial search term
    #[arg(long)]
    pub search: Option<String>,

    /// Initial sort, as KEY or KEY:asc / KEY:desc
    #[arg(long, value_parser = parse_sort_arg)]
    pub sort: Option<SortArg>,

    /// Initial page (clamped into range)
    #[arg(long)]
    pub page: Option<usize>,

    /// Print the page as plain text instead of starting the TUI
    #[arg(long)]
    pub print: bool,
}

/// A `--sort` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortArg {
    pub key: String,
    pub direction: SortDirection,
}

/// Parses `KEY`, `KEY:asc` or `KEY:desc`. A suffix that is not a direction
/// is kept as part of the key, so keys may contain `:`.
pub fn parse_sort_arg(value: &str) -> Result<SortArg, String> {
    let value = value.trim();
    let (key, direction) = match value.rsplit_once(':') {
        Some((key, suffix)) => match suffix.parse::<SortDirection>() {
            Ok(direction) => (key, direction),
            Err(_) => (value, SortDirection::Asc),
        },
        None => (value, SortDirection::Asc),
    };
    if key.is_empty() {
        return Err("sort key must not be empty".to_string());
    }
    Ok(SortArg {
        key: key.to_string(),
        direction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_arg_forms() {
        assert_eq!(
            parse_sort_arg("amount").unwrap(),
            SortArg {
                key: "amount".into(),
                direction: SortDirection::Asc
            }
        );
        assert_eq!(parse_sort_arg("amount:DESC").unwrap().direction, SortDirection::Desc);
        assert_eq!(parse_sort_arg("meta:created").unwrap().key, "meta:created");
        assert!(parse_sort_arg(":desc").is_err());
        assert!(parse_sort_arg("  ").is_err());
    }

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from([
            "tabview",
            "ledger.json",
            "--page-size",
            "5",
            "--sort",
            "amount:desc",
            "--search",
            "rent",
            "--print",
        ])
        .unwrap();
        assert_eq!(args.records, PathBuf::from("ledger.json"));
        assert_eq!(args.page_size, Some(5));
        assert_eq!(args.sort.map(|sort| sort.direction), Some(SortDirection::Desc));
        assert_eq!(args.search.as_deref(), Some("rent"));
        assert!(args.print);
    }
}
