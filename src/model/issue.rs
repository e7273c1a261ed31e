/// A unit of trackable work inside a sprint, reduced to the fields the
/// prompt composer consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub summary: String,
    pub description: Option<String>,
    pub status: String,
}
