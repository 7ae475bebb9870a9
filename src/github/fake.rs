//! Scripted page fetcher for tests

use crate::error::{TopLangsError, TopLangsResult};
use crate::github::client::PageFetcher;
use crate::github::response::{GraphQlResponse, PageVariables};
use std::cell::RefCell;
use std::collections::VecDeque;

/// Replays canned results and records every call
pub(crate) struct ScriptedFetcher {
    script: RefCell<VecDeque<TopLangsResult<GraphQlResponse>>>,
    seen: RefCell<Vec<(PageVariables, Option<String>)>>,
}

impl ScriptedFetcher {
    pub(crate) fn new(script: Vec<TopLangsResult<GraphQlResponse>>) -> Self {
        Self {
            script: RefCell::new(script.into()),
            seen: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.seen.borrow().len()
    }

    pub(crate) fn tokens(&self) -> Vec<Option<String>> {
        self.seen.borrow().iter().map(|(_, t)| t.clone()).collect()
    }

    pub(crate) fn cursors(&self) -> Vec<Option<String>> {
        self.seen
            .borrow()
            .iter()
            .map(|(v, _)| v.repos_after.clone())
            .collect()
    }
}

impl PageFetcher for ScriptedFetcher {
    fn fetch_page(
        &self,
        variables: &PageVariables,
        token: Option<&str>,
    ) -> TopLangsResult<GraphQlResponse> {
        self.seen
            .borrow_mut()
            .push((variables.clone(), token.map(str::to_string)));
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TopLangsError::Transport("script exhausted".into())))
    }
}
