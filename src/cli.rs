use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shopcart", version, about = "Terminal shopping cart demo")]
pub struct Cli {
    /// Config file (default: <config dir>/shopcart/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file (default: <cache dir>/shopcart/shopcart.log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the catalog and exit
    #[arg(long)]
    pub list_products: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let cli = Cli::parse_from([
            "shopcart",
            "--config",
            "/tmp/c.toml",
            "--log-file",
            "/tmp/s.log",
            "--list-products",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/s.log")));
        assert!(cli.list_products);
    }

    #[test]
    fn defaults_are_empty() {
        let cli = Cli::parse_from(["shopcart"]);
        assert!(cli.config.is_none());
        assert!(cli.log_file.is_none());
        assert!(!cli.list_products);
    }
}
