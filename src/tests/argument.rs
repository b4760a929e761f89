// Copyright 2015 Axel Rasmussen
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::argument::Argument;
use crate::error::*;
use crate::value::Value;

#[test]
fn test_construction_requires_nonempty_name() {
    let result = Argument::new("");
    assert!(match result {
        Err(Error::InvalidDefinition(_)) => true,
        _ => false,
    });
}

#[test]
fn test_fluent_construction() {
    let argument = Argument::new("file")
        .unwrap()
        .description("The file to process")
        .required()
        .default_value("a.txt");

    assert_eq!("file", argument.get_name());
    assert_eq!(Some("The file to process"), argument.get_description());
    assert!(argument.is_required());
    assert_eq!(
        Some(&Value::String("a.txt".to_owned())),
        argument.get_default_value()
    );
}

#[test]
fn test_arguments_are_optional_by_default() {
    let argument = Argument::new("file").unwrap();
    assert!(!argument.is_required());
    assert!(argument.get_description().is_none());
    assert!(argument.get_default_value().is_none());

    let argument = argument.required().optional();
    assert!(!argument.is_required());
}

#[test]
fn test_display() {
    let argument = Argument::new("file")
        .unwrap()
        .description("The file to process")
        .default_value("a.txt");
    assert_eq!(
        "file - The file to process [Default: a.txt]",
        format!("{}", argument)
    );

    let argument = Argument::new("file").unwrap();
    assert_eq!("file", format!("{}", argument));
}
