// Data collected from the user for one README, plus the license table and
// the validators the prompt loop applies to free-text fields.

use std::fmt;

/// License choices offered by the license prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum License {
    Mit,
    Apache2,
    Gpl3,
    Bsd3,
    None,
}

impl License {
    /// Every choice, in the order the prompt lists them.
    pub const ALL: [License; 5] = [
        License::Mit,
        License::Apache2,
        License::Gpl3,
        License::Bsd3,
        License::None,
    ];

    pub fn name(self) -> &'static str {
        match self {
            License::Mit => "MIT",
            License::Apache2 => "APACHE-2.0",
            License::Gpl3 => "GPL-3.0",
            License::Bsd3 => "BSD-3",
            License::None => "None",
        }
    }

    /// Where the license text can be read. Empty for `None`.
    pub fn reference_url(self) -> &'static str {
        match self {
            License::Mit => "https://github.com/microsoft/vscode/blob/master/LICENSE.txt",
            License::Apache2 => "https://www.apache.org/licenses/LICENSE-2.0.txt",
            License::Gpl3 => "https://www.gnu.org/licenses/gpl-3.0.txt",
            License::Bsd3 => {
                "https://tldrlegal.com/license/bsd-3-clause-license-(revised)#fulltext"
            }
            License::None => "",
        }
    }

    pub fn is_none(self) -> bool {
        self == License::None
    }
}

impl fmt::Display for License {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything the user told us. Built once by the prompt collector and
/// only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub username: String,
    pub email: String,
    pub project_name: String,
    pub description: String,
    pub license: License,
    pub dependencies_command: String,
    pub tests_command: String,
    pub usage_notes: String,
    pub contributing_notes: String,
}

pub const USERNAME_ERROR: &str = "Please provide a valid username.";
pub const EMAIL_ERROR: &str = "Please provide a valid email address.";
pub const PROJECT_NAME_ERROR: &str = "Please provide a valid project name.";
pub const DESCRIPTION_ERROR: &str = "Please provide a valid description.";
pub const COMMAND_ERROR: &str = "Please provide a valid command.";

/// Rejects empty (or whitespace-only) input with `message`.
pub fn require_text(input: &str, message: &'static str) -> Result<(), &'static str> {
    if input.trim().is_empty() {
        return Err(message);
    }
    Ok(())
}

pub fn require_email(input: &str) -> Result<(), &'static str> {
    require_text(input, EMAIL_ERROR)?;
    if !input.contains('@') {
        return Err(EMAIL_ERROR);
    }
    Ok(())
}
