//! Shared data model exchanged between the engine and embedding userscripts.
//!
//! Everything here is plain data: snapshots of page state, dependency
//! declarations, and the failure values the runner accumulates. The live
//! document itself is only reachable through the engine's `Page` trait.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use thiserror::Error;

/// Document lifecycle state, ordered: `Loading < Interactive < Complete`.
///
/// Mirrors `document.readyState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

/// The kind of element a dependency expects its selector to match.
///
/// `Any` accepts every element; the other variants accept the corresponding
/// HTML tag (`Heading` accepts `h1` through `h6`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Any,
    Anchor,
    Body,
    Button,
    Div,
    Form,
    Heading,
    Image,
    Input,
    Label,
    Select,
    Span,
    TextArea,
    Title,
}

impl ElementKind {
    /// Whether an element with the given tag name satisfies this kind.
    /// Tag names are compared case-insensitively.
    pub fn accepts(&self, tag_name: &str) -> bool {
        let tag = tag_name.to_ascii_lowercase();
        match self {
            ElementKind::Any => true,
            ElementKind::Anchor => tag == "a",
            ElementKind::Body => tag == "body",
            ElementKind::Button => tag == "button",
            ElementKind::Div => tag == "div",
            ElementKind::Form => tag == "form",
            ElementKind::Heading => matches!(tag.as_str(), "h1" | "h2" | "h3" | "h4" | "h5" | "h6"),
            ElementKind::Image => tag == "img",
            ElementKind::Input => tag == "input",
            ElementKind::Label => tag == "label",
            ElementKind::Select => tag == "select",
            ElementKind::Span => tag == "span",
            ElementKind::TextArea => tag == "textarea",
            ElementKind::Title => tag == "title",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementKind::Any => "an element",
            ElementKind::Anchor => "an anchor element",
            ElementKind::Body => "a body element",
            ElementKind::Button => "a button element",
            ElementKind::Div => "a div element",
            ElementKind::Form => "a form element",
            ElementKind::Heading => "a heading element",
            ElementKind::Image => "an image element",
            ElementKind::Input => "an input element",
            ElementKind::Label => "a label element",
            ElementKind::Select => "a select element",
            ElementKind::Span => "a span element",
            ElementKind::TextArea => "a textarea element",
            ElementKind::Title => "a title element",
        };
        f.write_str(name)
    }
}

/// Snapshot of an element matched on the live page.
///
/// Snapshots are constructed fresh on every query; the page may change
/// between rounds, so they must never be cached across resolution attempts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: u32,
    pub tag_name: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub attributes: HashMap<String, String>,
    /// The selector this element was matched by.
    pub selector: String,
}

/// One declared dependency: a selector plus the kind of element it must match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencySpec {
    pub selector: String,
    pub kind: ElementKind,
}

impl DependencySpec {
    pub fn new(selector: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            selector: selector.into(),
            kind,
        }
    }
}

/// A full dependency declaration: caller-chosen keys to specs.
///
/// `BTreeMap` so resolution order and diagnostics are deterministic.
pub type Dependencies = BTreeMap<String, DependencySpec>;

/// Why a single dependency could not be resolved.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DependencyFailure {
    #[error("no element matches selector '{selector}' for dependency '{key}'")]
    DoesNotExist { key: String, selector: String },

    #[error("dependency '{key}' matched a <{actual_tag_name}>, which is not {expected}")]
    IsOfWrongType {
        key: String,
        expected: ElementKind,
        actual_tag_name: String,
    },
}

/// Why an operation permanently failed.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum OperationFailure {
    /// Required elements could not be resolved before the retry budget ran out.
    #[error("{} unresolved dependencies", .dependencies.len())]
    Dependencies { dependencies: Vec<DependencyFailure> },

    /// The operation's own action reported an error. Never retried.
    #[error("operation failed: {message}")]
    Internal { message: String },
}
