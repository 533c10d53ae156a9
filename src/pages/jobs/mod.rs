//! Job pages, parameterized by the kind of item they show.
//!
//! `ProjectPage<Freestyle>` and `ProjectPage<Pipeline>` share every common
//! action but only expose the ones their kind supports. `AnyJob` stands in
//! when the kind is only known at runtime (data providers over job types).

mod config;
mod config_form;
mod delete;
mod move_page;
mod parameters;
mod project;
mod rename;

use serde::Serialize;

pub use config::ConfigPage;
pub use config_form::{
    BuildStep, ParameterType, PostBuildAction, TimePeriod, BRANCH_SOURCES, SCAN_INTERVALS,
};
pub use delete::{DeleteConfirmation, DeleteStyle};
pub use move_page::MovePage;
pub use parameters::BuildWithParametersPage;
pub use project::{JobOption, ProjectPage};
pub use rename::RenamePage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum JobType {
    FreestyleProject,
    Pipeline,
    MultiConfigurationProject,
    Folder,
    MultibranchPipeline,
    OrganizationFolder,
}

impl JobType {
    pub const ALL: [JobType; 6] = [
        JobType::FreestyleProject,
        JobType::Pipeline,
        JobType::MultiConfigurationProject,
        JobType::Folder,
        JobType::MultibranchPipeline,
        JobType::OrganizationFolder,
    ];

    /// Kinds with builds, a build history and Build Now.
    pub const BUILDABLE: [JobType; 3] = [
        JobType::FreestyleProject,
        JobType::Pipeline,
        JobType::MultiConfigurationProject,
    ];

    /// Label in the "New Item" type list.
    pub fn label(self) -> &'static str {
        match self {
            JobType::FreestyleProject => "Freestyle project",
            JobType::Pipeline => "Pipeline",
            JobType::MultiConfigurationProject => "Multi-configuration project",
            JobType::Folder => "Folder",
            JobType::MultibranchPipeline => "Multibranch Pipeline",
            JobType::OrganizationFolder => "Organization Folder",
        }
    }

    /// CSS class of the type's entry in the "New Item" list.
    pub fn item_class(self) -> &'static str {
        match self {
            JobType::FreestyleProject => "hudson_model_FreeStyleProject",
            JobType::Pipeline => "org_jenkinsci_plugins_workflow_job_WorkflowJob",
            JobType::MultiConfigurationProject => "hudson_matrix_MatrixProject",
            JobType::Folder => "com_cloudbees_hudson_plugins_folder_Folder",
            JobType::MultibranchPipeline => {
                "org_jenkinsci_plugins_workflow_multibranch_WorkflowMultiBranchProject"
            }
            JobType::OrganizationFolder => "jenkins_branch_OrganizationFolder",
        }
    }

    /// How Jenkins refers to an item of this type in headings and menus.
    pub fn pronoun(self) -> &'static str {
        match self {
            JobType::FreestyleProject => "Project",
            JobType::MultiConfigurationProject => "Multi-configuration project",
            other => other.label(),
        }
    }

    /// Project page heading for a job called `name`.
    pub fn heading(self, name: &str) -> String {
        match self {
            JobType::FreestyleProject | JobType::MultiConfigurationProject => {
                format!("Project {}", name)
            }
            JobType::Pipeline => format!("Pipeline {}", name),
            _ => name.to_string(),
        }
    }

    /// Label of the delete entry in the side menu and the job dropdown.
    pub fn delete_label(self) -> &'static str {
        match self {
            JobType::FreestyleProject => "Delete Project",
            JobType::Pipeline => "Delete Pipeline",
            JobType::MultiConfigurationProject => "Delete Multi-configuration project",
            JobType::Folder => "Delete Folder",
            JobType::MultibranchPipeline => "Delete Multibranch Pipeline",
            JobType::OrganizationFolder => "Delete Organization Folder",
        }
    }

    pub fn delete_style(self) -> DeleteStyle {
        if self.is_buildable() {
            DeleteStyle::Alert
        } else {
            DeleteStyle::ConfirmationPage
        }
    }

    /// Text of the browser alert for alert-style deletes.
    pub fn delete_alert_text(self) -> String {
        format!("{}: are you sure?", self.delete_label())
    }

    pub fn rename_heading(self, name: &str) -> String {
        format!("Rename {} {}", self.pronoun(), name)
    }

    /// Heading of the configuration page.
    pub fn config_heading(self) -> &'static str {
        if self.is_buildable() {
            "Configure"
        } else {
            "Configuration"
        }
    }

    pub fn is_buildable(self) -> bool {
        Self::BUILDABLE.contains(&self)
    }

    pub fn is_folder_like(self) -> bool {
        !self.is_buildable()
    }
}

/// Compile-time job kind.
pub trait JobKind: Send + Sync + 'static {
    const JOB_TYPE: JobType;
}

/// Kinds exposing Build Now and build history.
pub trait Buildable {}

/// Kinds with a Disable/Enable toggle on their page.
pub trait Disableable {}

/// Kinds whose items contain other items.
pub trait FolderLike {}

/// Kinds whose form carries build steps instead of a pipeline script.
pub trait HasBuildSteps: Buildable {}

macro_rules! job_kinds {
    ($($kind:ident => $job_type:ident),* $(,)?) => {
        $(
            #[derive(Debug)]
            pub enum $kind {}

            impl JobKind for $kind {
                const JOB_TYPE: JobType = JobType::$job_type;
            }
        )*
    };
}

job_kinds! {
    Freestyle => FreestyleProject,
    Pipeline => Pipeline,
    MultiConfiguration => MultiConfigurationProject,
    Folder => Folder,
    MultibranchPipeline => MultibranchPipeline,
    OrganizationFolder => OrganizationFolder,
}

/// Job kind decided at runtime; the caller vouches for the actions it uses.
#[derive(Debug)]
pub enum AnyJob {}

impl Buildable for Freestyle {}
impl Buildable for Pipeline {}
impl Buildable for MultiConfiguration {}
impl Buildable for AnyJob {}

impl Disableable for Freestyle {}
impl Disableable for Pipeline {}
impl Disableable for MultiConfiguration {}
impl Disableable for MultibranchPipeline {}
impl Disableable for OrganizationFolder {}
impl Disableable for AnyJob {}

impl HasBuildSteps for Freestyle {}
impl HasBuildSteps for MultiConfiguration {}
impl HasBuildSteps for AnyJob {}

impl FolderLike for Folder {}
impl FolderLike for MultibranchPipeline {}
impl FolderLike for OrganizationFolder {}
impl FolderLike for AnyJob {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buildable_kinds_delete_through_alert() {
        for job_type in JobType::ALL {
            let expected = if job_type.is_buildable() {
                DeleteStyle::Alert
            } else {
                DeleteStyle::ConfirmationPage
            };
            assert_eq!(job_type.delete_style(), expected, "{:?}", job_type);
        }
    }

    #[test]
    fn test_headings() {
        assert_eq!(JobType::FreestyleProject.heading("JOB"), "Project JOB");
        assert_eq!(JobType::MultiConfigurationProject.heading("JOB"), "Project JOB");
        assert_eq!(JobType::Pipeline.heading("JOB"), "Pipeline JOB");
        assert_eq!(JobType::Folder.heading("JOB"), "JOB");
        assert_eq!(
            JobType::MultiConfigurationProject.rename_heading("JOB"),
            "Rename Multi-configuration project JOB"
        );
        assert_eq!(
            JobType::Pipeline.delete_alert_text(),
            "Delete Pipeline: are you sure?"
        );
    }

    #[test]
    fn test_kind_markers_map_to_types() {
        assert_eq!(Freestyle::JOB_TYPE, JobType::FreestyleProject);
        assert_eq!(OrganizationFolder::JOB_TYPE, JobType::OrganizationFolder);
        assert_eq!(JobType::ALL.iter().filter(|t| t.is_folder_like()).count(), 3);
    }
}
