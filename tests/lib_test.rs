//! Library integration tests.

use lintgate::GateError;

#[test]
fn error_types_are_public() {
    let err = GateError::UnknownRule {
        rule: "no-alert".into(),
    };
    assert_eq!(err.to_string(), "Definition for rule 'no-alert' was not found");
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> lintgate::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use lintgate::cli::{Cli, Commands};

    let cli = Cli::parse_from(["lintgate", "check", "src", "lib/app.js"]);

    if let Commands::Check(args) = cli.command {
        assert_eq!(args.paths.len(), 2);
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn lint_api_is_usable_without_a_filter() {
    use lintgate::config::default_config;
    use lintgate::lint::{result_severity, LintEngine, Linter, RuleRegistry, UnconfiguredRulePolicy};

    let registry = RuleRegistry::with_builtins();
    let config = default_config().unwrap();

    let findings = Linter
        .verify("console.log('hi')\n", &config, &registry)
        .unwrap();
    let rules: Vec<_> = findings.iter().map(|f| f.rule_name()).collect();

    assert_eq!(rules, vec!["no-console", "quotes", "semi"]);
    assert_eq!(
        result_severity(&findings, &config, UnconfiguredRulePolicy::default()).unwrap(),
        3
    );
}
