//! Snapshot tests for rendered expression trees
//!
//! Review changes: `cargo insta review`

use cukex::format::{OutputFormat, RenderConfig, render_expression};

fn tree(expression: &str) -> String {
    render_expression(expression, &RenderConfig::default()).expect("expression should parse")
}

#[test]
fn test_parameter_optional_and_alternation_tree() {
    insta::assert_snapshot!(tree("I have {int} cucumber(s) in my belly/stomach"), @r###"
    Expression 0..44
      Text 0..1 "I"
      Text 1..2 " "
      Text 2..6 "have"
      Text 6..7 " "
      Parameter 7..12
        Text 8..11 "int"
      Text 12..13 " "
      Text 13..21 "cucumber"
      Optional 21..24
        Text 22..23 "s"
      Text 24..25 " "
      Text 25..27 "in"
      Text 27..28 " "
      Text 28..30 "my"
      Text 30..31 " "
      Alternation 31..44
        Alternative 31..36
          Text 31..36 "belly"
        Alternative 37..44
          Text 37..44 "stomach"
    "###);
}

#[test]
fn test_alternation_of_parameters_tree() {
    insta::assert_snapshot!(tree("{int}/{float} apples"), @r###"
    Expression 0..20
      Alternation 0..13
        Alternative 0..5
          Parameter 0..5
            Text 1..4 "int"
        Alternative 6..13
          Parameter 6..13
            Text 7..12 "float"
      Text 13..14 " "
      Text 14..20 "apples"
    "###);
}

#[test]
fn test_escaped_brackets_tree() {
    insta::assert_snapshot!(tree(r"\{int\} and \(s\)"), @r###"
    Expression 0..17
      Text 0..7 "{int}"
      Text 7..8 " "
      Text 8..11 "and"
      Text 11..12 " "
      Text 12..17 "(s)"
    "###);
}

#[test]
fn test_json_output() {
    let config = RenderConfig::new().with_output(OutputFormat::Json);
    let json = render_expression("a(b)", &config).expect("expression should parse");
    insta::assert_snapshot!(json, @r###"
    {
      "type": "EXPRESSION_NODE",
      "start": 0,
      "end": 4,
      "nodes": [
        {
          "type": "TEXT_NODE",
          "start": 0,
          "end": 1,
          "token": "a"
        },
        {
          "type": "OPTIONAL_NODE",
          "start": 1,
          "end": 4,
          "nodes": [
            {
              "type": "TEXT_NODE",
              "start": 2,
              "end": 3,
              "token": "b"
            }
          ]
        }
      ]
    }
    "###);
}
