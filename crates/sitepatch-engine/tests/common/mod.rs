#![allow(dead_code)]

//! In-memory page used by the integration tests.
//!
//! Elements are keyed by the selector that finds them; actions get a clone of
//! the shared state handle and mutate through it, which is how a real
//! userscript's actions would reach the live document.

use async_trait::async_trait;
use sitepatch_engine::page::{Page, PageError};
use sitepatch_engine::protocol::{Element, ReadyState};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

#[derive(Debug)]
pub struct PageState {
    pub ready_state: ReadyState,
    elements: BTreeMap<String, Element>,
    document_attributes: HashMap<String, String>,
    query_log: Vec<String>,
    next_id: u32,
}

impl PageState {
    pub fn insert(&mut self, selector: &str, tag_name: &str) -> u32 {
        self.insert_with_text(selector, tag_name, None)
    }

    pub fn insert_with_text(
        &mut self,
        selector: &str,
        tag_name: &str,
        text: Option<&str>,
    ) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.elements.insert(
            selector.to_string(),
            Element {
                id,
                tag_name: tag_name.to_string(),
                text: text.map(str::to_string),
                value: None,
                attributes: HashMap::new(),
                selector: selector.to_string(),
            },
        );
        id
    }

    pub fn remove(&mut self, selector: &str) {
        self.elements.remove(selector);
    }

    pub fn set_text(&mut self, selector: &str, text: &str) {
        if let Some(element) = self.elements.get_mut(selector) {
            element.text = Some(text.to_string());
        }
    }

    pub fn text_of(&self, selector: &str) -> Option<String> {
        self.elements.get(selector).and_then(|e| e.text.clone())
    }

    /// How many times `query_selector` was called with this selector.
    pub fn query_count(&self, selector: &str) -> usize {
        self.query_log.iter().filter(|s| *s == selector).count()
    }

    pub fn document_attribute(&self, name: &str) -> Option<String> {
        self.document_attributes.get(name).cloned()
    }
}

#[derive(Clone)]
pub struct MockPage {
    state: Arc<Mutex<PageState>>,
}

impl MockPage {
    pub fn new(ready_state: ReadyState) -> Self {
        Self {
            state: Arc::new(Mutex::new(PageState {
                ready_state,
                elements: BTreeMap::new(),
                document_attributes: HashMap::new(),
                query_log: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Shared handle for actions and assertions.
    pub fn state(&self) -> Arc<Mutex<PageState>> {
        self.state.clone()
    }
}

#[async_trait]
impl Page for MockPage {
    async fn ready_state(&mut self) -> Result<ReadyState, PageError> {
        Ok(self.state.lock().unwrap().ready_state)
    }

    async fn query_selector(&mut self, selector: &str) -> Result<Option<Element>, PageError> {
        let mut state = self.state.lock().unwrap();
        state.query_log.push(selector.to_string());
        Ok(state.elements.get(selector).cloned())
    }

    async fn document_attribute(&mut self, name: &str) -> Result<Option<String>, PageError> {
        Ok(self.state.lock().unwrap().document_attributes.get(name).cloned())
    }

    async fn set_document_attribute(
        &mut self,
        name: &str,
        value: &str,
    ) -> Result<(), PageError> {
        self.state
            .lock()
            .unwrap()
            .document_attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }
}
