//! CLI tool that prints the text of a page window from a PDF.
//!
//! With no arguments it extracts pages 4 through 14 of the built-in document
//! using the first text-extraction backend compiled into this build.

use clap::Parser;
use pdfpagetext::{
    discover, extract_with, AvailableBackends, Backend, ExtractError, ExtractorConfig, PageRange,
    Result, DEFAULT_PDF_PATH,
};
use std::path::PathBuf;
use std::process;

/// Print the text of pages 4-14 (or another window) of a PDF.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// PDF to read
    #[arg(default_value = DEFAULT_PDF_PATH)]
    path: PathBuf,

    /// First page to extract (1-based)
    #[arg(long, default_value_t = PageRange::DEFAULT_FIRST)]
    first_page: u32,

    /// Last page to extract (1-based, inclusive)
    #[arg(long, default_value_t = PageRange::DEFAULT_LAST)]
    last_page: u32,

    /// Backend to use instead of the first available one (pdf-extract, lopdf)
    #[arg(long, value_parser = parse_backend)]
    backend: Option<Backend>,

    /// List the backends compiled into this build, in priority order, and exit
    #[arg(long)]
    list_backends: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    // Discovery happens once; the result is passed down explicitly.
    let available = discover();

    if cli.list_backends {
        for backend in available.backends() {
            println!("{backend}");
        }
        return;
    }

    match run(&cli, &available) {
        Ok(text) => println!("{text}"),
        Err(ExtractError::NoBackendAvailable) => {
            for line in Backend::INSTALL_GUIDANCE {
                println!("{line}");
            }
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

fn parse_backend(name: &str) -> std::result::Result<Backend, String> {
    name.parse().map_err(|e: ExtractError| e.to_string())
}

fn run(cli: &Cli, available: &AvailableBackends) -> Result<String> {
    // Backend selection comes first so that a build without backends fails
    // the same way whether or not the file exists.
    let backend = available.select(cli.backend)?;

    let config = ExtractorConfig {
        page_range: PageRange::new(cli.first_page, cli.last_page)?,
        preferred_backend: cli.backend,
    };

    extract_with(&cli.path, backend, &config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_uses_built_in_defaults() {
        let cli = Cli::try_parse_from(["pdfpagetext"]).unwrap();
        assert_eq!(cli.path, PathBuf::from(DEFAULT_PDF_PATH));
        assert_eq!(cli.first_page, 4);
        assert_eq!(cli.last_page, 14);
        assert!(cli.backend.is_none());
        assert!(!cli.list_backends);
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "pdfpagetext",
            "book.pdf",
            "--first-page",
            "1",
            "--last-page",
            "3",
            "--backend",
            "lopdf",
        ])
        .unwrap();
        assert_eq!(cli.path, PathBuf::from("book.pdf"));
        assert_eq!((cli.first_page, cli.last_page), (1, 3));
        assert_eq!(cli.backend, Some(Backend::Lopdf));
    }

    #[test]
    fn rejects_unknown_backend() {
        assert!(Cli::try_parse_from(["pdfpagetext", "--backend", "pypdf"]).is_err());
    }

    #[test]
    fn missing_backends_win_over_missing_file() {
        let cli = Cli::try_parse_from(["pdfpagetext", "does-not-exist.pdf"]).unwrap();
        let none = AvailableBackends::new(Vec::<Backend>::new());
        assert!(matches!(run(&cli, &none), Err(ExtractError::NoBackendAvailable)));
    }

    #[test]
    fn inverted_range_is_reported() {
        let cli = Cli::try_parse_from(["pdfpagetext", "--first-page", "9", "--last-page", "2"])
            .unwrap();
        let some = AvailableBackends::new(Backend::PRIORITY);
        assert!(matches!(
            run(&cli, &some),
            Err(ExtractError::InvalidPageRange { first: 9, last: 2 })
        ));
    }
}
