use clap::Parser;

/// Command-line interface definition for bikeshare.
/// The session itself is interactive; flags only tune where data comes from.
#[derive(Parser, Debug)]
#[command(
    name = "bikeshare",
    version = env!("CARGO_PKG_VERSION"),
    about = "Explore US bikeshare data: filter trips by city, month and day and print travel statistics",
    long_about = None
)]
pub struct Cli {
    /// Override the directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags() {
        let cli = Cli::try_parse_from(["bikeshare"]).unwrap();
        assert!(cli.data_dir.is_none());
    }

    #[test]
    fn test_data_dir_override() {
        let cli = Cli::try_parse_from(["bikeshare", "--data-dir", "/srv/bikes"]).unwrap();
        assert_eq!(cli.data_dir.as_deref(), Some("/srv/bikes"));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["bikeshare", "--city", "chicago"]).is_err());
    }
}
