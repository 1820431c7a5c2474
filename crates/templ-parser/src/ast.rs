//! Abstract Syntax Tree for templ.
//!
//! Host-language code is never parsed here. It is carried as [`Expression`]s:
//! the verbatim source text plus the range it came from, so a generator can
//! reproduce it exactly and map diagnostics back to the template.

use templ_lexer::{Input, Range};

// ---------------------------------------------------------------------------
// Files and templates
// ---------------------------------------------------------------------------

/// A parsed `.templ` source file.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateFile {
    pub nodes: Vec<TemplateFileNode>,
}

impl TemplateFile {
    /// The templates in the file, in source order.
    pub fn templates(&self) -> impl Iterator<Item = &HtmlTemplate> {
        self.nodes.iter().filter_map(|node| match node {
            TemplateFileNode::Template(template) => Some(template),
            TemplateFileNode::Code(_) => None,
        })
    }
}

/// A top-level block of a source file.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateFileNode {
    /// A `templ Name(...) { ... }` block.
    Template(HtmlTemplate),

    /// Host-language code between templates (package clause, imports,
    /// functions), kept verbatim.
    Code(Expression),
}

/// A `templ` block.
///
/// ```text
/// templ (data Data) Name(p Parameter) {
///   <div>{ p.Title }</div>
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HtmlTemplate {
    /// The signature: optional receiver, name and parameter list.
    pub expression: Expression,
    pub children: Vec<Node>,
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

/// Opaque host-language source text and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub value: String,
    pub range: Range,
}

impl Expression {
    pub fn new(value: impl Into<String>, range: Range) -> Self {
        Self {
            value: value.into(),
            range,
        }
    }

    /// Build an expression from a byte span of the input.
    pub fn from_span(input: &Input<'_>, from: usize, to: usize) -> Self {
        Self {
            value: input.slice(from, to).to_string(),
            range: Range::new(input.position_at(from), input.position_at(to)),
        }
    }
}

// ---------------------------------------------------------------------------
// Template nodes
// ---------------------------------------------------------------------------

/// A node inside a template body.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A run of spaces, tabs and line breaks between other nodes.
    Whitespace(String),

    /// Literal text content, entities untouched.
    Text(String),

    /// `<!DOCTYPE html>`, holding `html`.
    DocType(String),

    /// An HTML element with attributes and children.
    Element(Element),

    /// A `<style>` or `<script>` element with unparsed content.
    RawElement(RawElement),

    /// `if cond { ... } else { ... }`
    If(IfExpression),

    /// `for item := range items { ... }`
    For(ForExpression),

    /// `switch value { case x: ... }`
    Switch(SwitchExpression),

    /// `{! Template(args) }`
    CallTemplate(CallTemplateExpression),

    /// `<!Template(args) />`
    TemplElement(TemplElementExpression),

    /// `{ children... }`
    Children,

    /// `{ value }`
    StringExpression(StringExpression),
}

/// An HTML element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

/// An element whose content is captured rather than parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct RawElement {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub contents: String,
}

/// An attribute on an element, in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    /// `type="text"`
    Constant { name: String, value: String },

    /// `disabled`
    BoolConstant { name: String },

    /// `href={ p.URL }`
    Expression { name: String, expression: Expression },

    /// `checked?={ p.Done }`
    BoolExpression { name: String, expression: Expression },

    /// `{ attrs... }`
    Spread { expression: Expression },
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfExpression {
    pub expression: Expression,
    pub then_branch: Vec<Node>,
    /// Empty when there is no `else`. An `else if` is a single nested
    /// [`Node::If`].
    pub else_branch: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForExpression {
    pub expression: Expression,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchExpression {
    pub expression: Expression,
    pub cases: Vec<CaseExpression>,
}

/// A `case x:` or `default:` clause. The expression holds the whole clause
/// header verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseExpression {
    pub expression: Expression,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallTemplateExpression {
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplElementExpression {
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StringExpression {
    pub expression: Expression,
}
