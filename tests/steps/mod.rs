//! Step definitions for the behavioural tests.

mod accessor_steps;
mod parse_steps;

use std::path::PathBuf;

use cucumber::World;
use ini_reader::{Configuration, ErrorCode};
use test_support::FixtureDir;

/// State shared by the steps of one scenario.
#[derive(Debug, Default, World)]
pub struct IniWorld {
    // Keeps the scenario's temporary directory alive.
    _fixtures: Option<FixtureDir>,
    path: Option<PathBuf>,
    config: Option<Configuration>,
    string_result: Option<String>,
    int_result: Option<i64>,
    double_result: Option<f64>,
}

impl IniWorld {
    #[expect(clippy::expect_used, reason = "simplify test failure output")]
    fn config(&self) -> &Configuration {
        self.config
            .as_ref()
            .expect("configuration parsed by a when step")
    }
}

/// Map the code names used in feature files to [`ErrorCode`].
fn code_named(name: &str) -> ErrorCode {
    match name {
        "Success" => ErrorCode::Success,
        "SourceNotFound" => ErrorCode::SourceNotFound,
        "MalformedPropertyLine" => ErrorCode::MalformedPropertyLine,
        "DuplicateSection" => ErrorCode::DuplicateSection,
        "DuplicateProperty" => ErrorCode::DuplicateProperty,
        "SectionNotFound" => ErrorCode::SectionNotFound,
        "PropertyNotFound" => ErrorCode::PropertyNotFound,
        other => panic!("unknown error code name: {other}"),
    }
}
