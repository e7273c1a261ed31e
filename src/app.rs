use std::sync::Arc;
use std::time::Instant;

use tokio::sync::mpsc;

use crate::client::ApiClient;
use crate::error::Error;
use crate::event::KeyAction;
use crate::model::sprint::Sprint;
use crate::model::team::Team;
use crate::prompt;
use crate::summarizer::Summarizer;

#[derive(Debug, Clone)]
pub enum Action {
    Key(KeyAction),
    Tick,
    SprintsLoaded {
        seq: u64,
        result: Result<Vec<Sprint>, Error>,
    },
    SummaryReady {
        seq: u64,
        result: Result<String, Error>,
    },
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Sprints,
    Issues,
    Summary,
}

/// The request/response flow, driven by user actions and upstream responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Idle,
    ListingSprints,
    SprintsLoaded,
    Summarizing,
    SummaryReady,
    Failed(FailureKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Teams,
    Sprints,
}

pub struct App {
    pub teams: Vec<Team>,
    pub selected_team: usize,
    pub sprints: Vec<Sprint>,
    pub selected_sprint: usize,
    pub panel: Panel,
    pub flow: Flow,
    pub summary: Option<String>,
    pub summary_scroll: u16,
    pub last_error: Option<String>,
    pub flash_message: Option<(String, Instant)>,
    pub should_quit: bool,
    pub action_tx: mpsc::UnboundedSender<Action>,
    api: Arc<ApiClient>,
    summarizer: Arc<Summarizer>,
    // Monotonic fence: responses carrying an older seq are stale and dropped.
    latest_seq: u64,
}

impl App {
    pub fn new(
        teams: Vec<Team>,
        api: ApiClient,
        summarizer: Summarizer,
        action_tx: mpsc::UnboundedSender<Action>,
    ) -> Self {
        Self {
            teams,
            selected_team: 0,
            sprints: Vec::new(),
            selected_sprint: 0,
            panel: Panel::Teams,
            flow: Flow::Idle,
            summary: None,
            summary_scroll: 0,
            last_error: None,
            flash_message: None,
            should_quit: false,
            action_tx,
            api: Arc::new(api),
            summarizer: Arc::new(summarizer),
            latest_seq: 0,
        }
    }

    pub fn update(&mut self, action: Action) {
        // Clear flash message after 3 seconds
        if let Some((_, t)) = &self.flash_message {
            if t.elapsed().as_secs() >= 3 {
                self.flash_message = None;
            }
        }

        match action {
            Action::Key(key) => self.handle_key(key),
            Action::Tick => {}
            Action::SprintsLoaded { seq, result } => {
                if seq != self.latest_seq {
                    return;
                }
                match result {
                    Ok(sprints) => {
                        self.sprints = sprints;
                        self.selected_sprint = 0;
                        self.flow = Flow::SprintsLoaded;
                    }
                    Err(e) => self.fail(FailureKind::Sprints, e),
                }
            }
            Action::SummaryReady { seq, result } => {
                if seq != self.latest_seq {
                    return;
                }
                match result {
                    Ok(summary) => {
                        self.summary = Some(summary);
                        self.summary_scroll = 0;
                        self.flow = Flow::SummaryReady;
                    }
                    Err(e) => {
                        let kind = match &e {
                            Error::UpstreamUnavailable(_) => FailureKind::Issues,
                            Error::GenerationFailed(_) => FailureKind::Summary,
                        };
                        self.fail(kind, e);
                    }
                }
            }
            Action::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn handle_key(&mut self, key: KeyAction) {
        match key {
            KeyAction::Up => match self.panel {
                Panel::Teams => {
                    if self.selected_team > 0 {
                        self.selected_team -= 1;
                    }
                }
                Panel::Sprints => {
                    if self.selected_sprint > 0 {
                        self.selected_sprint -= 1;
                    }
                }
            },
            KeyAction::Down => match self.panel {
                Panel::Teams => {
                    if !self.teams.is_empty() && self.selected_team < self.teams.len() - 1 {
                        self.selected_team += 1;
                    }
                }
                Panel::Sprints => {
                    if !self.sprints.is_empty() && self.selected_sprint < self.sprints.len() - 1 {
                        self.selected_sprint += 1;
                    }
                }
            },
            KeyAction::Left => self.panel = Panel::Teams,
            KeyAction::Right | KeyAction::Tab => self.panel = Panel::Sprints,
            KeyAction::Select => match self.panel {
                Panel::Teams => self.load_sprints(),
                Panel::Sprints => self.summarize_selected(),
            },
            KeyAction::Escape => {
                self.summary = None;
                self.summary_scroll = 0;
                self.last_error = None;
                self.flow = if self.sprints.is_empty() {
                    Flow::Idle
                } else {
                    Flow::SprintsLoaded
                };
            }
            KeyAction::Refresh => {
                if matches!(
                    self.flow,
                    Flow::SprintsLoaded | Flow::SummaryReady | Flow::Failed(_)
                ) {
                    self.load_sprints();
                }
            }
            KeyAction::PageUp => {
                self.summary_scroll = self.summary_scroll.saturating_sub(5);
            }
            KeyAction::PageDown => {
                if self.summary.is_some() {
                    self.summary_scroll = self.summary_scroll.saturating_add(5);
                }
            }
        }
    }

    /// Fetch sprints for the team under the cursor. Any previous selection
    /// and summary is discarded, as is any response still in flight.
    fn load_sprints(&mut self) {
        let Some(team) = self.teams.get(self.selected_team) else {
            return;
        };
        let board_id = team.board_id;

        self.summary = None;
        self.summary_scroll = 0;
        self.last_error = None;
        self.sprints.clear();
        self.selected_sprint = 0;
        self.panel = Panel::Sprints;
        self.flow = Flow::ListingSprints;

        let seq = self.next_seq();
        let api = self.api.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = api.sprints(board_id).await;
            let _ = tx.send(Action::SprintsLoaded { seq, result });
        });
    }

    /// Run the full pipeline for the sprint under the cursor: fetch issues,
    /// compose the prompt, ask for a completion.
    fn summarize_selected(&mut self) {
        let Some(sprint) = self.sprints.get(self.selected_sprint) else {
            return;
        };
        let sprint_id = sprint.id;

        self.summary = None;
        self.summary_scroll = 0;
        self.last_error = None;
        self.flow = Flow::Summarizing;

        let seq = self.next_seq();
        let api = self.api.clone();
        let summarizer = self.summarizer.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let result = async {
                let issues = api.issues(sprint_id).await?;
                let prompt = prompt::compose(&issues);
                summarizer.summarize(&prompt).await
            }
            .await;
            let _ = tx.send(Action::SummaryReady { seq, result });
        });
    }

    fn fail(&mut self, kind: FailureKind, error: Error) {
        self.flow = Flow::Failed(kind);
        self.last_error = Some(error.to_string());
        self.flash_message = Some((error.to_string(), Instant::now()));
    }

    fn next_seq(&mut self) -> u64 {
        self.latest_seq += 1;
        self.latest_seq
    }
}
