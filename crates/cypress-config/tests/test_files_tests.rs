//! Tests for test file discovery

use std::path::PathBuf;

use cypress_config::{CypressConfiguration, Error, RawOptions, get_configuration, get_test_files};
use cypress_test_utils::TestProject;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

fn configure(project: &TestProject, config: Value) -> CypressConfiguration {
    project.write_config(&config);
    get_configuration(&RawOptions::new(project.cwd())).expect("configuration should resolve")
}

fn test_files(project: &TestProject, config: Value) -> Vec<PathBuf> {
    get_test_files(&configure(project, config)).expect("test files should resolve")
}

mod legacy {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hot_update_files_are_ignored_by_default() {
        let project = TestProject::new();
        let feature = project.touch("cypress/integration/a.feature");
        project.touch("cypress/integration/a.hot-update.js");

        assert_eq!(test_files(&project, json!({})), vec![feature]);
    }

    #[test]
    fn custom_integration_folder() {
        let project = TestProject::new();
        let feature = project.touch("features/a.feature");
        project.touch("cypress/integration/b.feature");

        assert_eq!(
            test_files(&project, json!({ "integrationFolder": "features" })),
            vec![feature]
        );
    }

    #[test]
    fn nested_and_hidden_files_are_found() {
        let project = TestProject::new();
        let nested = project.touch("cypress/integration/deep/nested/a.feature");
        let hidden = project.touch("cypress/integration/.hidden/b.feature");

        let mut expected = vec![nested, hidden];
        expected.sort();
        assert_eq!(test_files(&project, json!({})), expected);
    }

    #[test]
    fn support_file_inside_integration_folder_is_excluded() {
        let project = TestProject::new();
        let feature = project.touch("cypress/integration/a.feature");
        project.touch("cypress/integration/support.js");

        let config = json!({ "supportFile": "cypress/integration/support.js" });
        assert_eq!(test_files(&project, config), vec![feature]);
    }

    #[test]
    fn fixtures_folder_inside_integration_folder_is_excluded() {
        let project = TestProject::new();
        let feature = project.touch("cypress/integration/a.feature");
        project.touch("cypress/integration/fixtures/data.json");
        project.touch("cypress/integration/fixtures/nested/more.json");

        let config = json!({ "fixturesFolder": "cypress/integration/fixtures" });
        assert_eq!(test_files(&project, config), vec![feature]);
    }

    #[test]
    fn disabled_support_file_and_fixtures_exclude_nothing() {
        let project = TestProject::new();
        let a = project.touch("cypress/integration/a.feature");
        let b = project.touch("cypress/integration/fixtures/b.json");

        let config = json!({ "supportFile": false, "fixturesFolder": false });
        assert_eq!(test_files(&project, config), vec![a, b]);
    }

    #[test]
    fn pattern_lists_are_deduplicated_and_sorted() {
        let project = TestProject::new();
        let b = project.touch("cypress/integration/b.feature");
        let a = project.touch("cypress/integration/a.feature");
        let c = project.touch("cypress/integration/c.js");

        let config = json!({ "testFiles": ["**/*.feature", "**/a.*", "*.js"] });
        assert_eq!(test_files(&project, config), vec![a, b, c]);
    }

    #[rstest]
    #[case(json!("*.js"))]
    #[case(json!(["*.js", "other/**"]))]
    fn ignore_patterns_remove_matches(#[case] ignore: Value) {
        let project = TestProject::new();
        let feature = project.touch("cypress/integration/a.feature");
        project.touch("cypress/integration/nested/b.js");

        let config = json!({ "ignoreTestFiles": ignore });
        assert_eq!(test_files(&project, config), vec![feature]);
    }

    #[test]
    fn missing_integration_folder_yields_nothing() {
        let project = TestProject::new();
        assert!(test_files(&project, json!({})).is_empty());
    }

    #[test]
    fn paths_are_absolute() {
        let project = TestProject::new();
        project.touch("cypress/integration/a.feature");

        let files = test_files(&project, json!({}));
        assert!(files.iter().all(|file| file.is_absolute()));
        assert!(files.iter().all(|file| file.starts_with(project.root())));
    }

    #[test]
    fn custom_project_root() {
        let project = TestProject::in_subdirectory("foo");
        let feature = project.touch("cypress/integration/a.feature");
        project.write_config(&json!({}));
        let options = RawOptions::new(project.cwd()).with_argv(["--project", "foo"]);

        let configuration = get_configuration(&options).unwrap();
        assert_eq!(get_test_files(&configuration).unwrap(), vec![feature]);
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let project = TestProject::new();
        project.touch("cypress/integration/a.feature");

        let configuration = configure(&project, json!({ "testFiles": "a[b" }));
        let err = get_test_files(&configuration).unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { .. }), "got {err:?}");
    }
}

mod modern {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn spec_pattern_from_environment_variable() {
        let project = TestProject::new();
        let spec = project.touch("cypress/e2e/login.cy.ts");
        project.touch("cypress/e2e/helpers.ts");
        project.touch("cypress/integration/old.cy.js");

        let options = RawOptions::new(project.cwd())
            .with_env([("CYPRESS_SPEC_PATTERN", "cypress/e2e/**/*.cy.{js,jsx,ts,tsx}")]);

        let configuration = get_configuration(&options).unwrap();
        assert!(configuration.is_modern());
        assert_eq!(get_test_files(&configuration).unwrap(), vec![spec]);
    }

    #[test]
    fn spec_pattern_is_relative_to_project_root() {
        let project = TestProject::new();
        let a = project.touch("specs/a.feature");
        let b = project.touch("specs/nested/b.feature");

        let config = json!({ "specPattern": "specs/**/*.feature" });
        assert_eq!(test_files(&project, config), vec![a, b]);
    }

    #[test]
    fn exclude_spec_pattern_removes_matches() {
        let project = TestProject::new();
        let a = project.touch("specs/a.feature");
        project.touch("specs/a.hot-update.js");
        project.touch("specs/skip/b.feature");

        let config = json!({
            "specPattern": "specs/**/*",
            "excludeSpecPattern": ["*.hot-update.js", "specs/skip/**"]
        });
        assert_eq!(test_files(&project, config), vec![a]);
    }

    #[test]
    fn spec_pattern_list() {
        let project = TestProject::new();
        let a = project.touch("a/one.feature");
        let b = project.touch("b/two.feature");
        project.touch("c/three.feature");

        let config = json!({ "specPattern": ["b/*.feature", "a/*.feature"] });
        assert_eq!(test_files(&project, config), vec![a, b]);
    }

    #[test]
    fn empty_exclusion_list_excludes_nothing() {
        let project = TestProject::new();
        let a = project.touch("specs/a.hot-update.js");

        let config = json!({ "specPattern": "specs/*.js", "excludeSpecPattern": [] });
        assert_eq!(test_files(&project, config), vec![a]);
    }
}

mod ignore_rules {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Resolve `specs/**/*.feature` under the project root with `ignore` as
    /// `ignoreTestFiles` or `excludeSpecPattern`, returning root-relative paths.
    fn remaining(project: &TestProject, modern: bool, ignore: &Value) -> Vec<String> {
        let config = if modern {
            json!({ "specPattern": "specs/**/*.feature", "excludeSpecPattern": ignore })
        } else {
            json!({
                "integrationFolder": ".",
                "testFiles": "specs/**/*.feature",
                "ignoreTestFiles": ignore
            })
        };
        let configuration = configure(project, config);
        assert_eq!(configuration.is_modern(), modern);
        assert_eq!(configuration.project_root(), project.root());

        get_test_files(&configuration)
            .unwrap()
            .iter()
            .map(|file| {
                let relative = file.strip_prefix(project.root()).unwrap();
                relative.to_string_lossy().replace('\\', "/")
            })
            .collect()
    }

    #[rstest]
    #[case(json!("specs/*"), &["specs/skip/b.feature"])]
    #[case(json!("skip"), &["specs/a.feature", "specs/skip/b.feature"])]
    #[case(json!("specs/skip"), &["specs/a.feature", "specs/skip/b.feature"])]
    #[case(json!("specs/skip/**"), &["specs/a.feature"])]
    #[case(json!("specs/*/*"), &["specs/a.feature"])]
    #[case(json!("a.feature"), &["specs/skip/b.feature"])]
    #[case(json!(["*.feature"]), &[])]
    #[case(json!([]), &["specs/a.feature", "specs/skip/b.feature"])]
    fn both_schemas_drop_the_same_files(#[case] ignore: Value, #[case] expected: &[&str]) {
        let project = TestProject::new();
        project.touch("specs/a.feature");
        project.touch("specs/skip/b.feature");

        assert_eq!(remaining(&project, false, &ignore), expected);
        assert_eq!(remaining(&project, true, &ignore), expected);
    }
}
