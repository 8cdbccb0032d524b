// README rendering. Everything here is pure: the same answers and avatar
// always give the same document.

use crate::answers::{Answers, License};
use crate::api::ProfileInfo;

/// Lowercases `text` and turns spaces into hyphens.
pub fn kebab_case(text: &str) -> String {
    text.to_lowercase().replace(' ', "-")
}

pub fn project_url(username: &str, project_name: &str) -> String {
    format!("https://github.com/{}/{}", username, kebab_case(project_name))
}

/// shields.io badge line, or an empty string for `License::None`.
pub fn license_badge(license: License) -> String {
    if license.is_none() {
        return String::new();
    }
    // shields.io treats a single '-' as a field separator
    let slug = license.name().replace('-', "--").replace(' ', "_");
    format!(
        "![License: {}](https://img.shields.io/badge/license-{}-blue.svg)",
        license.name(),
        slug
    )
}

/// `## License` heading and link, or an empty string for `License::None`.
pub fn license_section(license: License) -> String {
    if license.is_none() {
        return String::new();
    }
    format!(
        "## License\n\nLicensed under the [{}]({}) license.\n",
        license.name(),
        license.reference_url()
    )
}

pub fn render_readme(answers: &Answers, profile: &ProfileInfo) -> String {
    let mut output = String::new();

    let badge = license_badge(answers.license);
    if !badge.is_empty() {
        output.push_str(&badge);
        output.push_str("\n\n");
    }

    output.push_str(&format!("# {}\n\n", answers.project_name));
    output.push_str("## Description\n\n");
    output.push_str(&format!("{}\n\n", answers.description));
    output.push_str(&format!(
        "[View Deployed Project]({})\n\n",
        project_url(&answers.username, &answers.project_name)
    ));

    output.push_str("## Table of Contents\n\n");
    for (title, anchor) in [
        ("Installation", "installation"),
        ("Usage", "usage"),
        ("Contributing", "contributing"),
        ("Tests", "tests"),
        ("Questions", "questions"),
    ] {
        output.push_str(&format!("* [{}](#{})\n", title, anchor));
    }
    if !answers.license.is_none() {
        output.push_str("* [License](#license)\n");
    }
    output.push('\n');

    output.push_str("## Installation\n\n");
    output.push_str(&format!("```\n{}\n```\n\n", answers.dependencies_command));

    output.push_str("## Usage\n\n");
    output.push_str(&format!("{}\n\n", answers.usage_notes));

    output.push_str("## Contributing\n\n");
    output.push_str(&format!("{}\n\n", answers.contributing_notes));

    output.push_str("## Tests\n\n");
    output.push_str(&format!("```\n{}\n```\n\n", answers.tests_command));

    output.push_str("## Questions\n\n");
    output.push_str("If you have any questions, feel free to reach out!\n\n");
    output.push_str(&format!(
        "<img src=\"{}\" width=\"100\">\n\n",
        profile.avatar_url
    ));
    output.push_str(&format!("Email: {}\n", answers.email));

    let section = license_section(answers.license);
    if !section.is_empty() {
        output.push('\n');
        output.push_str(&section);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_answers(license: License) -> Answers {
        Answers {
            username: "alice".into(),
            email: "a@b.com".into(),
            project_name: "Demo".into(),
            description: "d".into(),
            license,
            dependencies_command: "npm i".into(),
            tests_command: "npm test".into(),
            usage_notes: "run it".into(),
            contributing_notes: "PRs welcome".into(),
        }
    }

    fn avatar() -> ProfileInfo {
        ProfileInfo {
            avatar_url: "http://img/x.png".into(),
        }
    }

    /// Asserts each needle appears after the previous one.
    fn assert_in_order(doc: &str, needles: &[&str]) {
        let mut from = 0;
        for needle in needles {
            match doc[from..].find(needle) {
                Some(pos) => from += pos + needle.len(),
                None => panic!("{:?} missing or out of order in:\n{}", needle, doc),
            }
        }
    }

    #[test]
    fn project_url_is_kebab_cased() {
        assert_eq!(
            project_url("alice", "My Cool App"),
            "https://github.com/alice/my-cool-app"
        );
        assert_eq!(project_url("bob", "Demo"), "https://github.com/bob/demo");
    }

    #[test]
    fn every_real_license_gets_badge_and_section() {
        for license in License::ALL.into_iter().filter(|l| !l.is_none()) {
            let doc = render_readme(&demo_answers(license), &avatar());
            let badge = license_badge(license);
            assert!(!badge.is_empty());
            assert!(doc.starts_with(&badge));
            assert!(doc.contains("## License"));
            assert!(doc.contains(&format!(
                "[{}]({})",
                license.name(),
                license.reference_url()
            )));
        }
    }

    #[test]
    fn no_license_means_no_badge_or_section() {
        let doc = render_readme(&demo_answers(License::None), &avatar());
        assert_eq!(license_badge(License::None), "");
        assert_eq!(license_section(License::None), "");
        assert!(!doc.contains("img.shields.io"));
        assert!(!doc.contains("License"));
        assert!(doc.starts_with("# Demo"));
    }

    #[test]
    fn badge_escapes_dashes() {
        assert_eq!(
            license_badge(License::Apache2),
            "![License: APACHE-2.0](https://img.shields.io/badge/license-APACHE--2.0-blue.svg)"
        );
    }

    #[test]
    fn sections_follow_fixed_order() {
        let doc = render_readme(&demo_answers(License::Mit), &avatar());
        assert_in_order(
            &doc,
            &[
                "license-MIT",
                "# Demo",
                "d",
                "https://github.com/alice/demo",
                "## Table of Contents",
                "## Installation",
                "npm i",
                "## Usage",
                "run it",
                "## Contributing",
                "PRs welcome",
                "## Tests",
                "npm test",
                "## Questions",
                "http://img/x.png",
                "a@b.com",
                "## License",
                "https://github.com/microsoft/vscode/blob/master/LICENSE.txt",
            ],
        );
    }
}
