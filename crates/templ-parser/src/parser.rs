//! File parser for templ.
//!
//! A `.templ` file is Go source in which some top-level declarations are
//! `templ` blocks. The file parser works line by line: a line starting with
//! `templ ` begins a template, and every other run of lines is kept verbatim
//! as host-language code for the generator to copy through.

use templ_lexer::{scanner, Input};

use crate::ast::{Expression, TemplateFile, TemplateFileNode};
use crate::template;
use crate::ParseError;

/// templ file parser.
///
/// Owns the cursor for a single source buffer. Parsers hold no other state,
/// so independent sources can be parsed concurrently with one `Parser` each.
pub struct Parser<'a> {
    input: Input<'a>,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source.
    pub fn new(source: &'a str) -> Self {
        Self {
            input: Input::new(source),
        }
    }

    /// Parse source code into a file AST.
    pub fn parse(source: &str) -> Result<TemplateFile, ParseError> {
        Parser::new(source).parse_file()
    }

    /// Parse the whole input.
    pub fn parse_file(&mut self) -> Result<TemplateFile, ParseError> {
        let mut nodes = Vec::new();
        let mut code_start = None;

        while !self.input.is_at_end() {
            if self.input.starts_with("templ ") {
                if let Some(start) = code_start.take() {
                    nodes.push(self.code(start));
                }
                if let Some(template) = template::parse(&mut self.input)? {
                    nodes.push(TemplateFileNode::Template(template));
                }
                // The rest of the closing line belongs to the template.
                scanner::inline_whitespace(&mut self.input);
                scanner::newline(&mut self.input);
                continue;
            }

            code_start.get_or_insert(self.input.index());
            self.skip_line();
        }

        if let Some(start) = code_start {
            nodes.push(self.code(start));
        }

        log::debug!("parsed file with {} top-level blocks", nodes.len());
        Ok(TemplateFile { nodes })
    }

    /// Advance past the current line and its line break.
    fn skip_line(&mut self) {
        let len = self
            .input
            .rest()
            .find('\n')
            .map_or(self.input.rest().len(), |i| i + 1);
        self.input.advance(len);
    }

    fn code(&self, start: usize) -> TemplateFileNode {
        let code = Expression::from_span(&self.input, start, self.input.index());
        log::trace!("code block at {} ({} bytes)", code.range, code.range.len());
        TemplateFileNode::Code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Element, HtmlTemplate, Node, StringExpression};
    use pretty_assertions::assert_eq;
    use templ_lexer::{Position, Range};

    const SOURCE: &str = "package main\n\nimport \"fmt\"\n\ntempl Hello(name string) {\n\t<p>{ name }</p>\n}\n\nfunc main() {\n\tfmt.Println(\"hi\")\n}\n";

    #[test]
    fn test_empty_file() {
        assert_eq!(Parser::parse("").unwrap(), TemplateFile { nodes: vec![] });
    }

    #[test]
    fn test_code_and_templates() {
        let file = Parser::parse(SOURCE).unwrap();
        assert_eq!(file.nodes.len(), 3);

        let TemplateFileNode::Code(header) = &file.nodes[0] else {
            panic!("expected code, got {:?}", file.nodes[0]);
        };
        assert_eq!(header.value, "package main\n\nimport \"fmt\"\n\n");
        assert_eq!(header.range.from, Position::new(0, 0, 0));
        assert_eq!(header.range.to, Position::new(28, 4, 0));

        assert_eq!(
            file.nodes[1],
            TemplateFileNode::Template(HtmlTemplate {
                expression: Expression::new(
                    "Hello(name string)",
                    Range::new(Position::new(34, 4, 6), Position::new(52, 4, 24)),
                ),
                children: vec![
                    Node::Whitespace("\t".into()),
                    Node::Element(Element {
                        name: "p".into(),
                        attributes: vec![],
                        children: vec![Node::StringExpression(StringExpression {
                            expression: Expression::new(
                                "name",
                                Range::new(Position::new(61, 5, 6), Position::new(65, 5, 10)),
                            ),
                        })],
                    }),
                    Node::Whitespace("\n".into()),
                ],
            })
        );

        let TemplateFileNode::Code(footer) = &file.nodes[2] else {
            panic!("expected code, got {:?}", file.nodes[2]);
        };
        assert_eq!(footer.value, "\nfunc main() {\n\tfmt.Println(\"hi\")\n}\n");
    }

    #[test]
    fn test_templates_accessor() {
        let file = Parser::parse("templ A() {\n}\ntempl B() {\n}\n").unwrap();
        let names: Vec<_> = file
            .templates()
            .map(|t| t.expression.value.as_str())
            .collect();
        assert_eq!(names, vec!["A()", "B()"]);
        assert_eq!(file.nodes.len(), 2);
    }

    #[test]
    fn test_indented_templ_is_code() {
        let file = Parser::parse("var s = `\n  templ X() {\n`\n").unwrap();
        assert_eq!(file.templates().count(), 0);
    }

    #[test]
    fn test_error_propagates() {
        let err = Parser::parse("package p\n\ntempl A() {\n\t<div>\n}\n").unwrap_err();
        assert_eq!(err.message, "</div> not found");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(Parser::parse(SOURCE), Parser::parse(SOURCE));
    }
}
