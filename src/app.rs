use crate::api::JokeClient;
use crate::models::JokeRecord;
use log::debug;
use tui::widgets::ListState;

#[derive(Debug, PartialEq, Eq)]
pub enum Mode {
    Random,
    Search,
}

pub struct App {
    client: JokeClient,
    pub joke: Option<JokeRecord>,
    pub results: Vec<JokeRecord>,
    pub state: ListState,
    pub mode: Mode,
    /// Message from the last failed fetch, cleared by the next success.
    pub error: Option<String>,
}

impl App {
    pub fn new(client: JokeClient) -> Self {
        Self {
            client,
            joke: None,
            results: Vec::new(),
            state: ListState::default(),
            mode: Mode::Random,
            error: None,
        }
    }

    pub fn on_random(&mut self) {
        self.mode = Mode::Random;
        match self.client.random() {
            Ok(joke) => {
                self.joke = Some(joke);
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn on_search(&mut self) {
        self.mode = Mode::Search;
        match self.client.search() {
            Ok(results) => {
                debug!("search returned {} jokes", results.len());
                self.state.select(if results.is_empty() { None } else { Some(0) });
                self.results = results;
                self.error = None;
            }
            Err(e) => self.error = Some(e.to_string()),
        }
    }

    pub fn on_up(&mut self) {
        if self.mode != Mode::Search || self.results.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => if i == 0 { self.results.len() - 1 } else { i - 1 },
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn on_down(&mut self) {
        if self.mode != Mode::Search || self.results.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => if i == self.results.len() - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn on_page_up(&mut self) {
        if self.mode != Mode::Search || self.results.is_empty() {
            return;
        }
        let i = self.state.selected().map_or(0, |i| i.saturating_sub(5));
        self.state.select(Some(i));
    }

    pub fn on_page_down(&mut self) {
        if self.mode != Mode::Search || self.results.is_empty() {
            return;
        }
        let last = self.results.len() - 1;
        let i = self.state.selected().map_or(0, |i| (i + 5).min(last));
        self.state.select(Some(i));
    }

    pub fn on_back(&mut self) {
        if self.mode == Mode::Search {
            self.mode = Mode::Random;
        }
    }
}
