use std::path::PathBuf;

use super::*;

fn check_args(argv: &[&str]) -> CheckArgs {
    let cli = Cli::parse_from(argv);
    match cli.command {
        Some(Commands::Check(args)) => args,
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_without_subcommand() {
    let cli = Cli::parse_from(["pine-guard"]);
    assert!(cli.command.is_none());
    assert_eq!(cli.verbose, 0);
    assert!(!cli.quiet);
}

#[test]
fn cli_check_default_path() {
    let args = check_args(&["pine-guard", "check"]);
    assert_eq!(args.paths, vec![PathBuf::from(".")]);
    assert_eq!(args.format, OutputFormat::Text);
}

#[test]
fn cli_check_with_paths() {
    let args = check_args(&["pine-guard", "check", "indicators", "strategies"]);
    assert_eq!(
        args.paths,
        vec![PathBuf::from("indicators"), PathBuf::from("strategies")]
    );
}

#[test]
fn cli_check_with_extensions() {
    let args = check_args(&["pine-guard", "check", "--ext", "pine,pinescript"]);
    assert_eq!(
        args.ext,
        Some(vec!["pine".to_string(), "pinescript".to_string()])
    );
}

#[test]
fn cli_check_with_excludes() {
    let args = check_args(&["pine-guard", "check", "-x", "**/old/**", "--exclude", "tmp/**"]);
    assert_eq!(args.exclude, vec!["**/old/**".to_string(), "tmp/**".to_string()]);
}

#[test]
fn cli_check_json_format() {
    let args = check_args(&["pine-guard", "check", "--format", "json"]);
    assert_eq!(args.format, OutputFormat::Json);
}

#[test]
fn cli_check_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["pine-guard", "check", "--format", "xml"]).is_err());
}

#[test]
fn cli_strict_conflicts_with_warn_only() {
    assert!(Cli::try_parse_from(["pine-guard", "check", "--strict", "--warn-only"]).is_err());
}

#[test]
fn cli_global_flags_after_subcommand() {
    let cli = Cli::parse_from(["pine-guard", "check", "-vv", "--quiet", "--color", "never"]);
    assert_eq!(cli.verbose, 2);
    assert!(cli.quiet);
    assert!(matches!(cli.color, ColorChoice::Never));
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["pine-guard", "init"]);
    match cli.command {
        Some(Commands::Init(args)) => {
            assert_eq!(args.output, PathBuf::from(".pine-guard.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn check_args_default_matches_parsed_defaults() {
    let parsed = check_args(&["pine-guard", "check"]);
    let default = CheckArgs::default();

    assert_eq!(parsed.paths, default.paths);
    assert_eq!(parsed.format, default.format);
    assert_eq!(parsed.exclude, default.exclude);
    assert_eq!(parsed.strict, default.strict);
}
