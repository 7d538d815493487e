//! Behavioural steps for parsing files.

use cucumber::gherkin::Step;
use cucumber::{given, then, when};
use ini_reader::parse;
use test_support::FixtureDir;

use super::{IniWorld, code_named};

#[given("a configuration file containing:")]
#[expect(clippy::expect_used, reason = "simplify test failure output")]
fn configuration_file_containing(world: &mut IniWorld, step: &Step) {
    let text = step.docstring.as_deref().expect("step needs a doc string");
    let text = text.strip_prefix('\n').unwrap_or(text);
    let fixtures = FixtureDir::new();
    world.path = Some(fixtures.write("scenario.ini", &format!("{text}\n")));
    world._fixtures = Some(fixtures);
}

#[given("a missing configuration file")]
fn missing_configuration_file(world: &mut IniWorld) {
    let fixtures = FixtureDir::new();
    world.path = Some(fixtures.missing("test_non_existent.ini"));
    world._fixtures = Some(fixtures);
}

#[when("the file is parsed")]
#[expect(clippy::expect_used, reason = "simplify test failure output")]
fn the_file_is_parsed(world: &mut IniWorld) {
    let path = world.path.as_ref().expect("file path set by a given step");
    world.config = Some(parse(path));
}

#[then(regex = r#"^parsing reports "(\w+)"$"#)]
fn parsing_reports(world: &mut IniWorld, code: String) {
    let config = world.config();
    assert_eq!(
        config.last_error_code(),
        code_named(&code),
        "details: {}",
        config.last_error_details()
    );
}

#[then(regex = r#"^the error details end with "(.+)"$"#)]
fn error_details_end_with(world: &mut IniWorld, suffix: String) {
    let details = world.config().last_error_details();
    assert!(details.ends_with(&suffix), "details were {details:?}");
}

#[then(regex = r#"^section "(.*)" has "(.+)" set to "(.*)"$"#)]
fn section_has_value(world: &mut IniWorld, section: String, key: String, value: String) {
    assert_eq!(world.config().get(&section, &key), Some(value.as_str()));
}

#[then(regex = r#"^section "(.*)" has no "(.*)"$"#)]
fn section_lacks_key(world: &mut IniWorld, section: String, key: String) {
    assert!(!world.config().contains(&section, &key));
}

#[then(regex = r#"^section "(.*)" does not exist$"#)]
fn section_does_not_exist(world: &mut IniWorld, section: String) {
    assert!(world.config().section(&section).is_none());
}

#[then("the configuration can be freed")]
#[expect(clippy::expect_used, reason = "simplify test failure output")]
fn configuration_can_be_freed(world: &mut IniWorld) {
    let config = world.config.take().expect("configuration parsed");
    config.free();
    assert!(world.config.is_none());
}
