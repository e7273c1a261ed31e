use crate::model::issue::Issue;

/// Descriptions longer than this are replaced with an empty string, not
/// truncated. Exactly 500 characters still passes through verbatim.
const MAX_DESCRIPTION_CHARS: usize = 500;

const INSTRUCTION: &str = "I need a summary of the work that my team has done in the sprint. \
I will provide you with a issue title and an issue description. \
Some issues may be in Swedish, so please translate those into English. \
The issues will come in this format: \"title: <some-title>, description: <some-description:>\". \
Some more context is that FE means Frontend, BE means Backend. \
If issues share a resemblance such as frontend maintenance issues, try to combine them to keep the summary short. \
Here are all the issues: ";

/// Builds the summarization prompt from an ordered issue list. Deterministic;
/// the output contains no raw newline characters.
pub fn compose(issues: &[Issue]) -> String {
    let issue_text = issues
        .iter()
        .map(fragment)
        .collect::<Vec<_>>()
        .join(". ")
        .replace(['\r', '\n'], "");
    format!("{INSTRUCTION}{issue_text}")
}

fn fragment(issue: &Issue) -> String {
    match issue.description.as_deref() {
        Some(description) if !description.is_empty() => {
            let description = if description.chars().count() > MAX_DESCRIPTION_CHARS {
                ""
            } else {
                description
            };
            format!("title: {}, description: {description},", issue.summary)
        }
        _ => format!("title: {}, description: None", issue.summary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(summary: &str, description: Option<&str>) -> Issue {
        Issue {
            summary: summary.into(),
            description: description.map(str::to_string),
            status: "Done".into(),
        }
    }

    #[test]
    fn renders_title_and_description_fragments() {
        let issues = vec![
            issue("Fix login bug", Some("Users cannot log in on Safari")),
            issue("Add dark mode", None),
        ];
        let prompt = compose(&issues);
        assert!(prompt
            .contains("title: Fix login bug, description: Users cannot log in on Safari,"));
        assert!(prompt.contains("title: Add dark mode, description: None"));
        assert!(prompt.contains(
            "description: Users cannot log in on Safari,. title: Add dark mode"
        ));
    }

    #[test]
    fn empty_description_renders_as_none() {
        let prompt = compose(&[issue("BE cleanup", Some(""))]);
        assert!(prompt.contains("title: BE cleanup, description: None"));
    }

    #[test]
    fn long_description_becomes_empty_string() {
        let long = "x".repeat(501);
        let prompt = compose(&[issue("Migrate database", Some(&long))]);
        assert!(prompt.contains("title: Migrate database, description: ,"));
        assert!(!prompt.contains("xxx"));
    }

    #[test]
    fn description_of_exactly_500_chars_is_kept() {
        let exact = "y".repeat(500);
        let prompt = compose(&[issue("Tune cache", Some(&exact))]);
        assert!(prompt.contains(&format!("title: Tune cache, description: {exact},")));
    }

    #[test]
    fn strips_all_newline_flavors() {
        let prompt = compose(&[issue(
            "Release notes",
            Some("line one\r\nline two\nline three\rend"),
        )]);
        assert!(!prompt.contains('\n'));
        assert!(!prompt.contains('\r'));
        assert!(prompt.contains("line oneline twoline threeend"));
    }

    #[test]
    fn empty_issue_list_is_well_formed() {
        let prompt = compose(&[]);
        assert!(prompt.ends_with("Here are all the issues: "));
        assert!(prompt.starts_with("I need a summary"));
    }

    #[test]
    fn fragments_joined_with_period_space() {
        let issues = vec![issue("One", None), issue("Two", None), issue("Three", None)];
        let prompt = compose(&issues);
        assert!(prompt.contains(
            "title: One, description: None. title: Two, description: None. title: Three, description: None"
        ));
    }
}
