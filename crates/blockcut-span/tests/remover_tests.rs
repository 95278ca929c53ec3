//! Integration tests for block removal.

use blockcut_span::{Error, IndentPrefix, MatchStrategy, SpanResolver, remove, remove_block};
use pretty_assertions::assert_eq;

const QUESTION_CARD: &str = include_str!("../../../test-fixtures/documents/question_card.tsx");

fn question_card_resolver() -> SpanResolver {
    SpanResolver::new(
        "{/* Mode Toggle & Actions */}",
        "{/* Answer Area */}",
        IndentPrefix::spaces(8).unwrap(),
    )
    .expect_opening(r#"<div className="flex flex-col gap-3 shrink-0 min-w-[150px]">"#)
}

#[test]
fn test_scenario_output() {
    let mut lines: Vec<String> = ["A\n", "START\n", "  <div>\n", "    <btn/>\n", "  </div>\n", "B\n", "END\n"]
        .map(String::from)
        .to_vec();
    let resolver = SpanResolver::new("START", "END", IndentPrefix::new("  ").unwrap());

    let span = resolver.resolve(&lines).unwrap();
    let removed = remove(&mut lines, span).unwrap();

    assert_eq!(lines, ["A\n", "B\n", "END\n"]);
    assert_eq!(removed, ["START\n", "  <div>\n", "    <btn/>\n", "  </div>\n"]);
}

#[test]
fn test_question_card_span() {
    let removal = remove_block(QUESTION_CARD, &question_card_resolver()).unwrap();

    assert_eq!(removal.span.start, 11);
    assert_eq!(removal.span.end, 25);
    assert_eq!(removal.span.boundary, 28);
    assert_eq!(removal.removed.len(), 15);
    assert_eq!(removal.removed.first().unwrap(), "        {/* Mode Toggle & Actions */}\n");
    assert_eq!(removal.removed.last().unwrap(), "        </div>\n");
}

#[test]
fn test_question_card_output() {
    let removal = remove_block(QUESTION_CARD, &question_card_resolver()).unwrap();

    insta::assert_snapshot!(removal.content, @r#"
import { Button } from "@/components/ui/button";

export function QuestionCard({ question, onGenerate, onImprove, setMode }: Props) {
  return (
    <div className="rounded-lg border p-4">
      <div className="flex gap-4">
        <div className="flex-1">
          <h3 className="font-semibold">{question.title}</h3>
          <p className="text-sm text-gray-500">{question.hint}</p>
        </div>

      </div>

      {/* Answer Area */}
      <textarea className="mt-4 w-full" value={question.answer} />
    </div>
  );
}
"#);
}

#[test]
fn test_question_card_balanced_agrees() {
    let balanced = question_card_resolver().strategy(MatchStrategy::Balanced {
        open_token: "<div".into(),
    });

    let first = remove_block(QUESTION_CARD, &question_card_resolver()).unwrap();
    let second = remove_block(QUESTION_CARD, &balanced).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_untouched_regions_are_byte_identical() {
    let text = "head\r\n\tkeep me  \nSTART\n  <div>\n  </div>\ntail\r\nEND";
    let resolver = SpanResolver::new("START", "END", IndentPrefix::new("  ").unwrap());

    let removal = remove_block(text, &resolver).unwrap();
    assert_eq!(removal.content, "head\r\n\tkeep me  \ntail\r\nEND");
}

#[test]
fn test_failed_resolution_reports_error() {
    let resolver = SpanResolver::new(
        "{/* Mode Toggle & Actions */}",
        "{/* Missing */}",
        IndentPrefix::spaces(8).unwrap(),
    );

    let err = remove_block(QUESTION_CARD, &resolver).unwrap_err();
    assert!(matches!(err, Error::MarkerNotFound { .. }));
}

#[test]
fn test_wrong_indent_finds_no_closing_line() {
    let resolver = SpanResolver::new(
        "{/* Mode Toggle & Actions */}",
        "{/* Answer Area */}",
        IndentPrefix::spaces(9).unwrap(),
    );

    let err = remove_block(QUESTION_CARD, &resolver).unwrap_err();
    assert!(matches!(err, Error::StructuralMatch { .. }));
}
