//! Behavioural steps for the typed getters.

use cucumber::{then, when};

use super::IniWorld;

#[when(regex = r#"^the string "(.+)" is read from section "(.*)" with default "(.*)"$"#)]
fn read_string(world: &mut IniWorld, key: String, section: String, default: String) {
    let value = world.config().get_string(&section, &key, &default).to_owned();
    world.string_result = Some(value);
}

#[when(regex = r#"^the integer "(.+)" is read from section "(.*)" with default (-?\d+)$"#)]
fn read_int(world: &mut IniWorld, key: String, section: String, default: i64) {
    let value = world.config().get_int(&section, &key, default);
    world.int_result = Some(value);
}

#[when(regex = r#"^the double "(.+)" is read from section "(.*)" with default (-?[\d.]+)$"#)]
fn read_double(world: &mut IniWorld, key: String, section: String, default: f64) {
    let value = world.config().get_double(&section, &key, default);
    world.double_result = Some(value);
}

#[then(regex = r#"^the string result is "(.*)"$"#)]
fn string_result_is(world: &mut IniWorld, expected: String) {
    assert_eq!(world.string_result.as_deref(), Some(expected.as_str()));
}

#[then(regex = r"^the integer result is (-?\d+)$")]
fn int_result_is(world: &mut IniWorld, expected: i64) {
    assert_eq!(world.int_result, Some(expected));
}

#[then(regex = r"^the double result is (-?[\d.]+)$")]
fn double_result_is(world: &mut IniWorld, expected: f64) {
    let actual = world.double_result.map(f64::to_bits);
    assert_eq!(actual, Some(expected.to_bits()));
}
