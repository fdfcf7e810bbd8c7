//! Generation plan derived from template answers.
//!
//! # Responsibility
//! - Decide which template files are rendered for a set of answers.
//! - Mark files that a later re-generation must not overwrite.
//! - List the post-generation tasks in execution order.
//!
//! # Invariants
//! - File order follows `TEMPLATE_FILES`; excluded files stay in the plan
//!   with `included = false`.
//! - Post-generation tasks always run install, repository init, commit.

use crate::template::answers::TemplateAnswers;

const PACKAGE_PLACEHOLDER: &str = "{{ package_name }}";

/// Toggle gating a template file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCondition {
    Always,
    Examples,
    Ci,
    Scripts,
}

impl FileCondition {
    fn holds(self, answers: &TemplateAnswers) -> bool {
        match self {
            Self::Always => true,
            Self::Examples => answers.include_examples,
            Self::Ci => answers.include_ci,
            Self::Scripts => answers.include_scripts,
        }
    }
}

struct TemplateFile {
    path: &'static str,
    condition: FileCondition,
    protected: bool,
}

const fn file(path: &'static str, condition: FileCondition, protected: bool) -> TemplateFile {
    TemplateFile {
        path,
        condition,
        protected,
    }
}

const TEMPLATE_FILES: &[TemplateFile] = &[
    file("README.md", FileCondition::Always, true),
    file("pyproject.toml", FileCondition::Always, false),
    file(".gitignore", FileCondition::Always, false),
    file("src/{{ package_name }}/__init__.py", FileCondition::Always, false),
    file("src/{{ package_name }}/cli.py", FileCondition::Always, false),
    file("src/{{ package_name }}/context.py", FileCondition::Examples, false),
    file("src/{{ package_name }}/domain/entities.py", FileCondition::Examples, false),
    file("src/{{ package_name }}/ports/repository.py", FileCondition::Examples, false),
    file("src/{{ package_name }}/adapters/memory_repository.py", FileCondition::Examples, false),
    file("src/{{ package_name }}/services/item_service.py", FileCondition::Examples, false),
    file("tests/fakes.py", FileCondition::Examples, false),
    file("tests/test_item_service.py", FileCondition::Examples, false),
    file("docs/adr/0001-functional-core.md", FileCondition::Always, true),
    file(".github/workflows/ci.yml", FileCondition::Ci, false),
    file("scripts/check.sh", FileCondition::Scripts, false),
];

/// One template file with its rendered path and inclusion decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: String,
    pub condition: FileCondition,
    pub included: bool,
    /// Skipped when the target already exists on re-generation.
    pub protected: bool,
}

/// Side-effecting step run once after rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostGenTask {
    InstallDependencies,
    InitRepository,
    InitialCommit,
}

impl PostGenTask {
    pub const ORDER: [PostGenTask; 3] = [
        Self::InstallDependencies,
        Self::InitRepository,
        Self::InitialCommit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::InstallDependencies => "install_dependencies",
            Self::InitRepository => "init_repository",
            Self::InitialCommit => "initial_commit",
        }
    }

    /// Command line run for this step.
    pub fn argv(self) -> &'static [&'static str] {
        match self {
            Self::InstallDependencies => &["uv", "sync"],
            Self::InitRepository => &["git", "init"],
            Self::InitialCommit => &[
                "sh",
                "-c",
                "git add -A && git commit -m 'Initial commit from template'",
            ],
        }
    }
}

/// Everything the renderer needs to generate one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    pub package_name: String,
    pub cli_name: String,
    pub entry_point: String,
    pub python_version: &'static str,
    pub files: Vec<PlannedFile>,
    pub tasks: Vec<PostGenTask>,
}

impl GenerationPlan {
    /// Builds the plan; callers validate `answers` first.
    pub fn from_answers(answers: &TemplateAnswers) -> Self {
        let package_name = answers.package_name();
        let files = TEMPLATE_FILES
            .iter()
            .map(|template| PlannedFile {
                path: render_path(template.path, &package_name),
                condition: template.condition,
                included: template.condition.holds(answers),
                protected: template.protected,
            })
            .collect();

        Self {
            cli_name: answers.cli_name(),
            entry_point: answers.entry_point(),
            python_version: answers.python_version.as_str(),
            package_name,
            files,
            tasks: PostGenTask::ORDER.to_vec(),
        }
    }

    pub fn included_paths(&self) -> impl Iterator<Item = &str> {
        self.files
            .iter()
            .filter(|file| file.included)
            .map(|file| file.path.as_str())
    }

    pub fn is_protected(&self, path: &str) -> bool {
        self.files
            .iter()
            .any(|file| file.included && file.protected && file.path == path)
    }
}

/// Substitutes the package placeholder in a template path.
pub fn render_path(template: &str, package_name: &str) -> String {
    template.replace(PACKAGE_PLACEHOLDER, package_name)
}
