use super::*;

#[test]
fn test_no_subcommand_defaults_to_serve() {
    let cli = Cli::try_parse_from(["kira-interpdash"]).unwrap();
    match resolve_command(cli) {
        Command::Serve(args) => {
            assert_eq!(args.input, PathBuf::from(DEFAULT_INPUT));
            assert_eq!(args.bind.to_string(), DEFAULT_BIND);
            assert_eq!(args.mode, RankingMode::TopTen);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_parse_serve_args() {
    let cli = Cli::try_parse_from([
        "kira-interpdash",
        "serve",
        "--input",
        "data.csv",
        "--bind",
        "0.0.0.0:9000",
        "--mode",
        "full",
    ])
    .unwrap();
    match resolve_command(cli) {
        Command::Serve(args) => {
            assert_eq!(args.input, PathBuf::from("data.csv"));
            assert_eq!(args.bind.port(), 9000);
            assert_eq!(args.mode, RankingMode::Full);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_parse_report_args() {
    let cli = Cli::try_parse_from([
        "kira-interpdash",
        "report",
        "--out",
        "out",
        "--scenario",
        "-1",
    ])
    .unwrap();
    match resolve_command(cli) {
        Command::Report(args) => {
            assert_eq!(args.out, PathBuf::from("out"));
            assert_eq!(args.input, PathBuf::from(DEFAULT_INPUT));
            assert_eq!(args.scenario, Some(-1));
            assert_eq!(args.mode, RankingMode::TopTen);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_invalid_mode_rejected() {
    assert!(Cli::try_parse_from(["kira-interpdash", "serve", "--mode", "top5"]).is_err());
    assert!(Cli::try_parse_from(["kira-interpdash", "report"]).is_err());
}

#[test]
fn test_report_command_missing_input_fails() {
    let dir = crate::fixtures::make_temp_dir();
    let args = ReportArgs {
        input: dir.join("missing.csv"),
        out: dir.join("out"),
        mode: RankingMode::TopTen,
        scenario: None,
    };
    let err = report(args).unwrap_err();
    assert!(matches!(err, CliError::Input(InputError::Open { .. })));
}

#[test]
fn test_default_bind_matches_constant() {
    assert_eq!(default_bind().to_string(), DEFAULT_BIND);
}
