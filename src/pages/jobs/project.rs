use std::marker::PhantomData;
use thirtyfour::prelude::*;
use tracing::debug;

use super::{
    AnyJob, Buildable, BuildWithParametersPage, ConfigPage, DeleteConfirmation, DeleteStyle,
    Disableable, Folder, FolderLike, JobKind, JobType, MovePage, Pipeline, RenamePage,
};
use crate::config::WAIT_15;
use crate::error::Result;
use crate::locator::{xpath_literal, Locator};
use crate::pages::builds::BuildPage;
use crate::pages::dropdown::DropdownMenu;
use crate::pages::job_sidemenu::{ChangesPage, FullStageViewPage, WorkspacePage};
use crate::pages::new_job::NewJobPage;
use crate::pages::{task_link, task_named, FromDriver, Page, PageExt};

/// A job's own page: heading, side menu, description and build history.
pub struct ProjectPage<K> {
    driver: WebDriver,
    job_type: JobType,
    _kind: PhantomData<fn() -> K>,
}

impl<K> Page for ProjectPage<K> {
    fn driver(&self) -> &WebDriver {
        &self.driver
    }
}

impl<K: JobKind> FromDriver for ProjectPage<K> {
    fn from_driver(driver: WebDriver) -> Self {
        Self::with_type(driver, K::JOB_TYPE)
    }
}

impl<K: JobKind> ProjectPage<K> {
    pub fn new(driver: WebDriver) -> Self {
        Self::from_driver(driver)
    }
}

impl ProjectPage<AnyJob> {
    pub fn of(driver: WebDriver, job_type: JobType) -> Self {
        Self::with_type(driver, job_type)
    }
}

fn description_link() -> Locator {
    Locator::id("description-link")
}

fn description_field() -> Locator {
    Locator::xpath("//textarea[@name='description']")
}

fn build_link(number: u32) -> Locator {
    Locator::xpath(format!(
        "//div[@id='buildHistory']//a[contains(@class, 'display-name') and normalize-space(.)={}]",
        xpath_literal(&format!("#{}", number))
    ))
}

impl<K> ProjectPage<K> {
    pub(crate) fn with_type(driver: WebDriver, job_type: JobType) -> Self {
        Self {
            driver,
            job_type,
            _kind: PhantomData,
        }
    }

    fn into_kind<T>(self) -> ProjectPage<T> {
        ProjectPage::with_type(self.driver, self.job_type)
    }

    pub fn job_type(&self) -> JobType {
        self.job_type
    }

    /// Forget the static kind, e.g. to pass the page to code written over `AnyJob`.
    pub fn erase(self) -> ProjectPage<AnyJob> {
        self.into_kind()
    }

    pub async fn heading(&self) -> Result<String> {
        self.assert_text().await
    }

    /// Item name under the heading; Jenkins only shows it while a display name is set.
    pub async fn full_project_name(&self) -> Result<String> {
        let line = self
            .wait5()
            .text(&Locator::xpath(
                "//div[@id='main-panel']//*[starts-with(normalize-space(text()), 'Full project name:')]",
            ))
            .await?;
        Ok(line
            .trim()
            .trim_start_matches("Full project name:")
            .trim()
            .to_string())
    }

    pub async fn click_configure(self) -> Result<ConfigPage<K>> {
        self.wait5().click(&task_link("/configure")).await?;
        Ok(ConfigPage::with_type(self.driver, self.job_type))
    }

    pub async fn click_rename(self) -> Result<RenamePage<K>> {
        self.wait5().click(&task_link("/confirm-rename")).await?;
        Ok(RenamePage::with_type(self.driver, self.job_type))
    }

    pub async fn click_move(self) -> Result<MovePage<K>> {
        self.wait5().click(&task_link("/move")).await?;
        Ok(MovePage::with_type(self.driver, self.job_type))
    }

    pub async fn click_delete(self) -> Result<DeleteConfirmation<Self>> {
        let link = task_named(self.job_type.delete_label());
        self.wait5().click(&link).await?;
        let driver = self.driver.clone();
        let job_type = self.job_type;
        Ok(DeleteConfirmation::new(driver, job_type, self))
    }

    /// Dropdown of this job's breadcrumb item.
    pub async fn job_dropdown(&self) -> Result<DropdownMenu> {
        self.breadcrumb().job_dropdown().await
    }

    pub async fn rename_from_breadcrumb(self) -> Result<RenamePage<K>> {
        let menu = self.job_dropdown().await?;
        menu.select(RenamePage::with_type(self.driver.clone(), self.job_type))
            .await
    }

    // ------------------------------------------------------------------
    // Description
    // ------------------------------------------------------------------

    async fn edit_description(&self, text: &str) -> Result<()> {
        self.wait5().click(&description_link()).await?;
        self.wait5().type_text(&description_field(), text).await
    }

    pub async fn add_description(self, text: &str) -> Result<Self> {
        self.edit_description(text).await?;
        self.wait5()
            .click(&Locator::xpath("//div[@id='description']//button[@name='Submit']"))
            .await?;
        Ok(self)
    }

    /// Type a description and return the rendered preview without saving.
    pub async fn preview_description(&self, text: &str) -> Result<String> {
        self.edit_description(text).await?;
        self.wait5()
            .click(&Locator::css("a.textarea-show-preview"))
            .await?;
        self.wait5()
            .text(&Locator::css("div.textarea-preview"))
            .await
    }

    pub async fn description_text(&self) -> Result<String> {
        self.wait5()
            .text(&Locator::xpath("//div[@id='description']/div[1]"))
            .await
    }
}

impl<K: Buildable> ProjectPage<K> {
    /// Trigger a build and wait until it shows up in the build history.
    pub async fn build_now(self, expected_number: u32) -> Result<Self> {
        self.wait5().click(&task_named("Build Now")).await?;
        self.wait_for_build(expected_number).await?;
        Ok(self)
    }

    /// Wait for build `number` to appear in the history widget.
    pub async fn wait_for_build(&self, number: u32) -> Result<()> {
        self.wait(WAIT_15).visible(&build_link(number)).await?;
        debug!("Build #{} listed", number);
        Ok(())
    }

    pub async fn is_build_listed(&self, number: u32) -> bool {
        self.wait2().is_visible(&build_link(number)).await
    }

    /// Lock icon a build kept forever carries in the history widget.
    pub async fn is_build_locked(&self, number: u32) -> bool {
        let lock = Locator::xpath(format!(
            "//div[@id='buildHistory']//tr[.//a[normalize-space(.)={}]]//*[contains(@class, 'lock')]",
            xpath_literal(&format!("#{}", number))
        ));
        self.wait2().is_visible(&lock).await
    }

    /// Side-menu entry that replaces Build Now once the job takes parameters.
    pub async fn click_build_with_parameters(self) -> Result<BuildWithParametersPage<K>> {
        let target = BuildWithParametersPage::with_type(self.driver.clone(), self.job_type);
        self.open_task(target).await
    }

    pub async fn open_build(self, number: u32) -> Result<BuildPage> {
        self.wait10().click(&build_link(number)).await?;
        Ok(self.navigate())
    }

    pub async fn click_last_build(self) -> Result<BuildPage> {
        self.driver.refresh().await?;
        let permalink = Locator::xpath(
            "//ul[contains(@class, 'permalinks-list')]//a[starts-with(normalize-space(.), 'Last build')]",
        );
        self.wait10().click(&permalink).await?;
        Ok(self.navigate())
    }

    pub async fn permalinks_count(&self) -> Result<usize> {
        self.driver.refresh().await?;
        let links = self
            .wait10()
            .all_visible(&Locator::xpath("//ul[contains(@class, 'permalinks-list')]/li"))
            .await?;
        Ok(links.len())
    }

    pub async fn build_dropdown(&self, number: u32) -> Result<DropdownMenu> {
        DropdownMenu::attached_to(&self.driver, &build_link(number)).await
    }

    pub async fn click_changes(self) -> Result<ChangesPage> {
        let target = ChangesPage::new(self.driver.clone());
        self.open_task(target).await
    }

    pub async fn click_workspace(self) -> Result<WorkspacePage> {
        let target = WorkspacePage::new(self.driver.clone());
        self.open_task(target).await
    }
}

impl<K: Disableable> ProjectPage<K> {
    pub async fn disable(self) -> Result<Self> {
        self.wait5()
            .click(&Locator::xpath("//form[@id='disable-project']//button"))
            .await?;
        Ok(self)
    }

    pub async fn enable(self) -> Result<Self> {
        self.wait5()
            .click(&Locator::xpath("//form[@id='enable-project']//button"))
            .await?;
        Ok(self)
    }

    /// First line of the "currently disabled" banner.
    pub async fn disabled_message(&self) -> Result<String> {
        let text = self
            .wait5()
            .text(&Locator::xpath("//form[@id='enable-project']"))
            .await?;
        Ok(text.lines().next().unwrap_or_default().trim().to_string())
    }

    pub async fn enable_button_text(&self) -> Result<String> {
        self.wait5()
            .text(&Locator::xpath("//form[@id='enable-project']//button"))
            .await
    }

    pub async fn disable_button_text(&self) -> Result<String> {
        self.wait5()
            .text(&Locator::xpath("//form[@id='disable-project']//button"))
            .await
    }
}

impl ProjectPage<Pipeline> {
    pub async fn click_full_stage_view(self) -> Result<FullStageViewPage> {
        let target = FullStageViewPage::new(self.driver.clone());
        self.open_task(target).await
    }
}

impl<K: FolderLike> ProjectPage<K> {
    pub async fn is_item_displayed(&self, name: &str) -> bool {
        let link = Locator::xpath(format!(
            "//table[@id='projectstatus']//a[contains(@href, {})]",
            xpath_literal(&format!("job/{}/", name))
        ));
        self.wait5().is_visible(&link).await
    }
}

impl ProjectPage<Folder> {
    pub async fn click_new_item(self) -> Result<NewJobPage> {
        self.wait5().click(&task_link("/newJob")).await?;
        Ok(self.navigate())
    }
}

/// Entries of a job's dropdown that lead to a page (or alert) of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOption {
    Changes,
    Workspace,
    Configure,
    Move,
    Rename,
    Delete,
    StageView,
}

impl JobOption {
    pub const BUILDABLE: [JobOption; 6] = [
        JobOption::Changes,
        JobOption::Workspace,
        JobOption::Configure,
        JobOption::Delete,
        JobOption::Move,
        JobOption::Rename,
    ];

    pub const PIPELINE: [JobOption; 6] = [
        JobOption::Changes,
        JobOption::Configure,
        JobOption::Delete,
        JobOption::Move,
        JobOption::StageView,
        JobOption::Rename,
    ];

    pub const FOLDER_LIKE: [JobOption; 4] = [
        JobOption::Configure,
        JobOption::Delete,
        JobOption::Move,
        JobOption::Rename,
    ];

    /// Entries the dropdown of a `job_type` job offers.
    pub fn for_job_type(job_type: JobType) -> &'static [JobOption] {
        match job_type {
            JobType::Pipeline => &Self::PIPELINE,
            t if t.is_buildable() => &Self::BUILDABLE,
            _ => &Self::FOLDER_LIKE,
        }
    }

    /// Needs a folder to exist before the dropdown offers it.
    pub fn needs_folder(self) -> bool {
        self == JobOption::Move
    }

    pub fn target(self, driver: WebDriver, job_type: JobType) -> Box<dyn Page> {
        let page = ProjectPage::of(driver.clone(), job_type);
        match self {
            JobOption::Changes => Box::new(ChangesPage::new(driver)),
            JobOption::Workspace => Box::new(WorkspacePage::new(driver)),
            JobOption::Configure => Box::new(ConfigPage::<AnyJob>::of(driver, job_type)),
            JobOption::Move => Box::new(MovePage::<AnyJob>::with_type(driver, job_type)),
            JobOption::Rename => Box::new(RenamePage::<AnyJob>::with_type(driver, job_type)),
            JobOption::Delete => Box::new(DeleteConfirmation::new(driver, job_type, page)),
            JobOption::StageView => Box::new(FullStageViewPage::in_dropdown(driver)),
        }
    }

    /// What the landed page (or the alert, for alert-style deletes) shows.
    pub fn expected_text(self, job_type: JobType, name: &str) -> String {
        match self {
            JobOption::Changes => "Changes".to_string(),
            JobOption::Workspace => "Error: no workspace".to_string(),
            JobOption::Configure => job_type.config_heading().to_string(),
            JobOption::Move => "Move".to_string(),
            JobOption::StageView => format!("{} - Stage View", name),
            JobOption::Rename => job_type.rename_heading(name),
            JobOption::Delete => match job_type.delete_style() {
                DeleteStyle::Alert => job_type.delete_alert_text(),
                DeleteStyle::ConfirmationPage => {
                    format!("{} {}", job_type.delete_label(), name)
                }
            },
        }
    }

    /// Whether the text to compare comes from an alert rather than the page.
    pub fn reads_alert(self, job_type: JobType) -> bool {
        self == JobOption::Delete && job_type.delete_style() == DeleteStyle::Alert
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_option_expected_text() {
        assert_eq!(
            JobOption::Delete.expected_text(JobType::FreestyleProject, "JOB"),
            "Delete Project: are you sure?"
        );
        assert_eq!(
            JobOption::Delete.expected_text(JobType::Folder, "JOB"),
            "Delete Folder JOB"
        );
        assert_eq!(
            JobOption::Rename.expected_text(JobType::Pipeline, "JOB"),
            "Rename Pipeline JOB"
        );
        assert_eq!(
            JobOption::Configure.expected_text(JobType::Folder, "JOB"),
            "Configuration"
        );
        assert!(JobOption::Delete.reads_alert(JobType::Pipeline));
        assert!(!JobOption::Delete.reads_alert(JobType::OrganizationFolder));
        assert!(JobOption::Move.needs_folder());
        assert_eq!(
            JobOption::StageView.expected_text(JobType::Pipeline, "JOB"),
            "JOB - Stage View"
        );
    }

    #[test]
    fn test_options_per_job_type() {
        assert!(JobOption::for_job_type(JobType::Pipeline).contains(&JobOption::StageView));
        assert!(!JobOption::for_job_type(JobType::FreestyleProject).contains(&JobOption::StageView));
        assert!(!JobOption::for_job_type(JobType::Folder).contains(&JobOption::Changes));
    }
}
