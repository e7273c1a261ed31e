use serde::Deserialize;

/// A team and the tracking-system board its sprints live on. Teams are
/// configuration data; there is no lifecycle.
#[derive(Debug, Clone, Deserialize)]
pub struct Team {
    pub name: String,
    pub board_id: u64,
}
