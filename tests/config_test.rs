use clap::{CommandFactory, FromArgMatches, Parser};
use funnelview::config::{Config, DisplayOptions, SourceOptions};
use funnelview::error::FunnelError;
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

fn parse(args: &[&str]) -> (Config, clap::ArgMatches) {
    let matches = TestCli::command()
        .try_get_matches_from(std::iter::once("test").chain(args.iter().copied()))
        .unwrap();
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    (cli.config, matches)
}

#[test]
fn test_cli_defaults_match_default_impl() {
    let (config, _) = parse(&[]);
    assert_eq!(config, Config::default());
    assert_eq!(config.source.delimiter, ',');
    assert_eq!(config.display.precision, 1);
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{"source": {{"delimiter": ";", "no_trim": true}}, "display": {{"precision": 3}}}}"#
    )
    .unwrap();

    let config = Config::load_from_file(file.path()).unwrap();
    assert_eq!(
        config.source,
        SourceOptions {
            delimiter: ';',
            no_trim: true
        }
    );
    assert_eq!(
        config.display,
        DisplayOptions {
            precision: 3,
            no_color: false
        }
    );
}

#[test]
fn test_load_from_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let res = Config::load_from_file(dir.path().join("nope.json"));
    assert!(matches!(res, Err(FunnelError::Config(_))));
}

#[test]
fn test_load_from_bad_json() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{{ not json").unwrap();
    assert!(matches!(
        Config::load_from_file(file.path()),
        Err(FunnelError::Json(_))
    ));
}

#[test]
fn test_merge_only_explicit_flags() {
    let mut from_file = Config {
        source: SourceOptions {
            delimiter: ';',
            no_trim: true,
        },
        display: DisplayOptions {
            precision: 3,
            no_color: true,
        },
    };

    let (cli, matches) = parse(&["--precision", "0"]);
    from_file.merge_from_cli(&cli, &matches);

    // typed on the command line
    assert_eq!(from_file.display.precision, 0);
    // clap defaults must not clobber the file
    assert_eq!(from_file.source.delimiter, ';');
    assert!(from_file.source.no_trim);
    assert!(from_file.display.no_color);
}
