//! Sections of the job configuration form below the description.
//!
//! Jenkins renders most options as a checkbox whose label toggles a nested
//! block of fields, and every repeatable block ("Add Parameter", "Add build
//! step", "Add metric") through a hetero-list button that pops a menu.
//! Entries of those menus are picked with the same label matching as the
//! breadcrumb dropdowns.

use thirtyfour::components::SelectElement;
use thirtyfour::prelude::*;
use tracing::debug;

use super::{Buildable, ConfigPage, FolderLike, HasBuildSteps, MultibranchPipeline, OrganizationFolder};
use crate::config::WAIT_5;
use crate::error::Result;
use crate::locator::{move_and_click, xpath_literal, Locator, Wait};
use crate::pages::dropdown::DropdownMenu;
use crate::pages::{Page, PageExt};

/// Entries of the "Add Parameter" menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterType {
    Boolean,
    Choice,
    Credentials,
    File,
    MultiLineString,
    Password,
    Run,
    String,
}

impl ParameterType {
    pub const ALL: [ParameterType; 8] = [
        ParameterType::Boolean,
        ParameterType::Choice,
        ParameterType::Credentials,
        ParameterType::File,
        ParameterType::MultiLineString,
        ParameterType::Password,
        ParameterType::Run,
        ParameterType::String,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ParameterType::Boolean => "Boolean Parameter",
            ParameterType::Choice => "Choice Parameter",
            ParameterType::Credentials => "Credentials Parameter",
            ParameterType::File => "File Parameter",
            ParameterType::MultiLineString => "Multi-line String Parameter",
            ParameterType::Password => "Password Parameter",
            ParameterType::Run => "Run Parameter",
            ParameterType::String => "String Parameter",
        }
    }
}

/// Entries of the "Add build step" menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStep {
    WindowsBatch,
    Shell,
    Ant,
    Gradle,
    Maven,
    RunWithTimeout,
    GitHubPendingStatus,
}

impl BuildStep {
    pub const ALL: [BuildStep; 7] = [
        BuildStep::WindowsBatch,
        BuildStep::Shell,
        BuildStep::Ant,
        BuildStep::Gradle,
        BuildStep::Maven,
        BuildStep::RunWithTimeout,
        BuildStep::GitHubPendingStatus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BuildStep::WindowsBatch => "Execute Windows batch command",
            BuildStep::Shell => "Execute shell",
            BuildStep::Ant => "Invoke Ant",
            BuildStep::Gradle => "Invoke Gradle script",
            BuildStep::Maven => "Invoke top-level Maven targets",
            BuildStep::RunWithTimeout => "Run with timeout",
            BuildStep::GitHubPendingStatus => "Set build status to \"pending\" on GitHub commit",
        }
    }
}

/// Entries of the "Add post-build action" menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostBuildAction {
    AggregateDownstream,
    ArchiveArtifacts,
    BuildOtherProjects,
    JUnitReport,
    Fingerprints,
    GitPublisher,
    EmailNotification,
    EditableEmailNotification,
    GitHubCommitStatus,
    GitHubBuildStatus,
    DeleteWorkspace,
}

impl PostBuildAction {
    pub const ALL: [PostBuildAction; 11] = [
        PostBuildAction::AggregateDownstream,
        PostBuildAction::ArchiveArtifacts,
        PostBuildAction::BuildOtherProjects,
        PostBuildAction::JUnitReport,
        PostBuildAction::Fingerprints,
        PostBuildAction::GitPublisher,
        PostBuildAction::EmailNotification,
        PostBuildAction::EditableEmailNotification,
        PostBuildAction::GitHubCommitStatus,
        PostBuildAction::GitHubBuildStatus,
        PostBuildAction::DeleteWorkspace,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PostBuildAction::AggregateDownstream => "Aggregate downstream test results",
            PostBuildAction::ArchiveArtifacts => "Archive the artifacts",
            PostBuildAction::BuildOtherProjects => "Build other projects",
            PostBuildAction::JUnitReport => "Publish JUnit test result report",
            PostBuildAction::Fingerprints => "Record fingerprints of files to track usage",
            PostBuildAction::GitPublisher => "Git Publisher",
            PostBuildAction::EmailNotification => "E-mail Notification",
            PostBuildAction::EditableEmailNotification => "Editable Email Notification",
            PostBuildAction::GitHubCommitStatus => "Set GitHub commit status (universal)",
            PostBuildAction::GitHubBuildStatus => "Set build status on GitHub commit [deprecated]",
            PostBuildAction::DeleteWorkspace => "Delete workspace when build is done",
        }
    }
}

/// Units of the "Throttle builds" rate limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePeriod {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl TimePeriod {
    pub fn label(self) -> &'static str {
        match self {
            TimePeriod::Second => "Second",
            TimePeriod::Minute => "Minute",
            TimePeriod::Hour => "Hour",
            TimePeriod::Day => "Day",
            TimePeriod::Week => "Week",
            TimePeriod::Month => "Month",
            TimePeriod::Year => "Year",
        }
    }
}

/// Multibranch "Add source" entries.
pub const BRANCH_SOURCES: [&str; 3] = ["Git", "GitHub", "Single repository & branch"];

/// Choices of the "Periodically if not otherwise run" scan interval.
pub const SCAN_INTERVALS: [&str; 19] = [
    "1 minute", "2 minutes", "3 minutes", "5 minutes", "10 minutes", "15 minutes", "20 minutes",
    "25 minutes", "30 minutes", "1 hour", "2 hours", "4 hours", "8 hours", "12 hours", "1 day",
    "2 days", "1 week", "2 weeks", "4 weeks",
];

const WORST_CHILD_METRIC: &str = "Child item with worst health";

fn checkbox_label(label: &str) -> Locator {
    Locator::xpath(format!(
        "//label[normalize-space(.)={}]",
        xpath_literal(label)
    ))
}

/// The hidden input a styled checkbox label is attached to.
fn checkbox_input(label: &str) -> Locator {
    Locator::xpath(format!(
        "//label[normalize-space(.)={}]/preceding-sibling::input[@type='checkbox']",
        xpath_literal(label)
    ))
}

fn field(name: &str) -> Locator {
    Locator::xpath(format!("//*[@name={}]", xpath_literal(name)))
}

fn button(text: &str) -> Locator {
    Locator::xpath(format!(
        "//button[normalize-space(.)={}]",
        xpath_literal(text)
    ))
}

/// Entries of the menu a hetero-list "Add" button opens.
fn hetero_list_entries() -> Locator {
    Locator::xpath(
        "//li[contains(@class, 'yuimenuitem')]/a | //button[contains(@class, 'jenkins-dropdown__item')]",
    )
}

/// The repeatable block headed by `title`.
fn chunk_xpath(title: &str) -> String {
    format!(
        "//div[contains(@class, 'repeated-chunk')][.//div[contains(@class, 'repeated-chunk__header')][starts-with(normalize-space(.), {})]]",
        xpath_literal(title)
    )
}

fn chunk(title: &str) -> Locator {
    Locator::xpath(chunk_xpath(title))
}

fn advanced_button() -> Locator {
    Locator::xpath("(//button[contains(@class, 'advanced-button')])[1]")
}

/// Form controls sit under the sticky save bar once the form grows, so
/// every click goes through the pointer after scrolling the target into view.
async fn press(driver: &WebDriver, locator: &Locator) -> Result<()> {
    let elem = Wait::new(driver, WAIT_5).visible(locator).await?;
    move_and_click(driver, &elem).await
}

async fn fill(driver: &WebDriver, locator: &Locator, text: &str) -> Result<()> {
    let elem = Wait::new(driver, WAIT_5).visible(locator).await?;
    elem.scroll_into_view().await?;
    elem.clear().await?;
    elem.send_keys(text).await?;
    Ok(())
}

async fn value_of(driver: &WebDriver, locator: &Locator) -> Result<String> {
    let elem = Wait::new(driver, WAIT_5).present(locator).await?;
    Ok(elem.value().await?.unwrap_or_default())
}

async fn is_checked(driver: &WebDriver, label: &str) -> Result<bool> {
    let input = Wait::new(driver, WAIT_5).present(&checkbox_input(label)).await?;
    Ok(input.is_selected().await?)
}

async fn open_add_menu(driver: &WebDriver, add_button: &str) -> Result<DropdownMenu> {
    press(driver, &button(add_button)).await?;
    DropdownMenu::opened(driver.clone(), hetero_list_entries()).await
}

async fn add_from_menu(driver: &WebDriver, add_button: &str, entry: &str) -> Result<()> {
    open_add_menu(driver, add_button).await?.click_label(entry).await?;
    debug!("Added '{}' through '{}'", entry, add_button);
    Ok(())
}

async fn select_options(driver: &WebDriver, locator: &Locator) -> Result<Vec<String>> {
    let elem = Wait::new(driver, WAIT_5).visible(locator).await?;
    let select = SelectElement::new(&elem).await?;
    let mut labels = Vec::new();
    for option in select.options().await? {
        labels.push(option.text().await?.trim().to_string());
    }
    Ok(labels)
}

/// Type into the CodeMirror editor of the last added block. CodeMirror
/// hides the real textarea, so focus the editor and type into whatever
/// took focus.
async fn type_into_last_editor(driver: &WebDriver, text: &str) -> Result<()> {
    press(driver, &Locator::xpath("(//div[contains(@class, 'CodeMirror')])[last()]")).await?;
    driver.active_element().await?.send_keys(text).await?;
    Ok(())
}

impl<K: Buildable> ConfigPage<K> {
    // ------------------------------------------------------------------
    // Discard old builds
    // ------------------------------------------------------------------

    pub async fn toggle_discard_old_builds(self) -> Result<Self> {
        press(self.driver(), &checkbox_label("Discard old builds")).await?;
        Ok(self)
    }

    pub async fn is_discard_old_builds_checked(&self) -> Result<bool> {
        is_checked(self.driver(), "Discard old builds").await
    }

    pub async fn set_days_to_keep(self, days: u32) -> Result<Self> {
        fill(self.driver(), &field("_.daysToKeepStr"), &days.to_string()).await?;
        Ok(self)
    }

    pub async fn set_max_builds_to_keep(self, builds: u32) -> Result<Self> {
        fill(self.driver(), &field("_.numToKeepStr"), &builds.to_string()).await?;
        Ok(self)
    }

    pub async fn days_to_keep(&self) -> Result<String> {
        value_of(self.driver(), &field("_.daysToKeepStr")).await
    }

    pub async fn max_builds_to_keep(&self) -> Result<String> {
        value_of(self.driver(), &field("_.numToKeepStr")).await
    }

    /// Validation message under "Days to keep builds", shown once the field loses focus.
    pub async fn days_to_keep_error(&self) -> Result<String> {
        self.wait5()
            .text(&Locator::xpath(
                "//input[@name='_.daysToKeepStr']/ancestor::div[contains(@class, 'jenkins-form-item')][1]//div[@class='error']",
            ))
            .await
    }

    // ------------------------------------------------------------------
    // GitHub project
    // ------------------------------------------------------------------

    pub async fn set_github_project(self, url: &str) -> Result<Self> {
        press(self.driver(), &checkbox_label("GitHub project")).await?;
        fill(self.driver(), &field("_.projectUrlStr"), url).await?;
        Ok(self)
    }

    pub async fn github_project_url(&self) -> Result<String> {
        value_of(self.driver(), &field("_.projectUrlStr")).await
    }

    // ------------------------------------------------------------------
    // Parameters
    // ------------------------------------------------------------------

    pub async fn toggle_parameterized(self) -> Result<Self> {
        press(self.driver(), &checkbox_label("This project is parameterized")).await?;
        Ok(self)
    }

    /// Labels the "Add Parameter" menu offers.
    pub async fn parameter_types(&self) -> Result<Vec<String>> {
        open_add_menu(self.driver(), "Add Parameter").await?.labels().await
    }

    pub async fn add_parameter(self, kind: ParameterType) -> Result<Self> {
        add_from_menu(self.driver(), "Add Parameter", kind.label()).await?;
        Ok(self)
    }

    pub async fn set_parameter_name(self, name: &str) -> Result<Self> {
        fill(self.driver(), &field("parameter.name"), name).await?;
        Ok(self)
    }

    pub async fn set_parameter_description(self, text: &str) -> Result<Self> {
        fill(self.driver(), &field("parameter.description"), text).await?;
        Ok(self)
    }

    /// Tick "Set by Default" of a boolean parameter.
    pub async fn set_parameter_checked_by_default(self) -> Result<Self> {
        press(self.driver(), &checkbox_label("Set by Default")).await?;
        Ok(self)
    }

    /// Choices of a choice parameter, one per line.
    pub async fn set_parameter_choices(self, choices: &[&str]) -> Result<Self> {
        fill(self.driver(), &field("parameter.choices"), &choices.join("\n")).await?;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Advanced
    // ------------------------------------------------------------------

    pub async fn open_advanced(self) -> Result<Self> {
        press(self.driver(), &advanced_button()).await?;
        Ok(self)
    }

    pub async fn set_quiet_period(self, seconds: u32) -> Result<Self> {
        press(self.driver(), &checkbox_label("Quiet period")).await?;
        fill(self.driver(), &field("quiet_period"), &seconds.to_string()).await?;
        Ok(self)
    }

    pub async fn quiet_period(&self) -> Result<String> {
        value_of(self.driver(), &field("quiet_period")).await
    }

    /// Display name from the advanced block of a buildable job.
    pub async fn set_advanced_display_name(self, name: &str) -> Result<Self> {
        fill(self.driver(), &field("_.displayNameOrNull"), name).await?;
        Ok(self)
    }
}

impl<K: HasBuildSteps> ConfigPage<K> {
    pub async fn toggle_throttle_builds(self) -> Result<Self> {
        press(self.driver(), &checkbox_label("Throttle builds")).await?;
        Ok(self)
    }

    pub async fn set_throttle_period(self, period: TimePeriod) -> Result<Self> {
        let elem = self.wait5().visible(&field("_.durationName")).await?;
        SelectElement::new(&elem)
            .await?
            .select_by_visible_text(period.label())
            .await?;
        Ok(self)
    }

    pub async fn throttle_period(&self) -> Result<String> {
        let elem = self.wait5().present(&field("_.durationName")).await?;
        let selected = SelectElement::new(&elem).await?.first_selected_option().await?;
        Ok(selected.text().await?.trim().to_string())
    }

    pub async fn toggle_concurrent_builds(self) -> Result<Self> {
        press(self.driver(), &checkbox_label("Execute concurrent builds if necessary")).await?;
        Ok(self)
    }

    pub async fn is_concurrent_builds_checked(&self) -> Result<bool> {
        is_checked(self.driver(), "Execute concurrent builds if necessary").await
    }

    pub async fn set_retry_count(self, count: u32) -> Result<Self> {
        press(self.driver(), &checkbox_label("Retry Count")).await?;
        fill(self.driver(), &field("scmCheckoutRetryCount"), &count.to_string()).await?;
        Ok(self)
    }

    pub async fn retry_count(&self) -> Result<String> {
        value_of(self.driver(), &field("scmCheckoutRetryCount")).await
    }

    pub async fn toggle_block_when_upstream_building(self) -> Result<Self> {
        press(
            self.driver(),
            &checkbox_label("Block build when upstream project is building"),
        )
        .await?;
        Ok(self)
    }

    pub async fn is_block_when_upstream_building_checked(&self) -> Result<bool> {
        is_checked(self.driver(), "Block build when upstream project is building").await
    }

    pub async fn set_custom_workspace(self, directory: &str) -> Result<Self> {
        press(self.driver(), &checkbox_label("Use custom workspace")).await?;
        fill(self.driver(), &field("customWorkspace.directory"), directory).await?;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Source Code Management
    // ------------------------------------------------------------------

    /// Pick Git as the SCM and point it at `url`.
    pub async fn set_git_repository(self, url: &str) -> Result<Self> {
        press(
            self.driver(),
            &Locator::xpath("//input[@name='scm']/following-sibling::label[normalize-space(.)='Git']"),
        )
        .await?;
        fill(self.driver(), &field("_.url"), url).await?;
        Ok(self)
    }

    pub async fn git_repository(&self) -> Result<String> {
        value_of(self.driver(), &field("_.url")).await
    }

    // ------------------------------------------------------------------
    // Build Triggers
    // ------------------------------------------------------------------

    /// Trigger this job once each of `upstream` finishes.
    pub async fn build_after(self, upstream: &str) -> Result<Self> {
        press(self.driver(), &checkbox_label("Build after other projects are built")).await?;
        fill(self.driver(), &field("_.upstreamProjects"), upstream).await?;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Build Steps
    // ------------------------------------------------------------------

    pub async fn build_step_options(&self) -> Result<Vec<String>> {
        open_add_menu(self.driver(), "Add build step").await?.labels().await
    }

    pub async fn add_build_step(self, step: BuildStep) -> Result<Self> {
        add_from_menu(self.driver(), "Add build step", step.label()).await?;
        Ok(self)
    }

    pub async fn add_shell_step(self, command: &str) -> Result<Self> {
        let page = self.add_build_step(BuildStep::Shell).await?;
        type_into_last_editor(page.driver(), command).await?;
        Ok(page)
    }

    pub async fn add_windows_batch_step(self, command: &str) -> Result<Self> {
        let page = self.add_build_step(BuildStep::WindowsBatch).await?;
        type_into_last_editor(page.driver(), command).await?;
        Ok(page)
    }

    pub async fn add_maven_step(self, goals: &str) -> Result<Self> {
        let page = self.add_build_step(BuildStep::Maven).await?;
        fill(page.driver(), &field("_.targets"), goals).await?;
        Ok(page)
    }

    pub async fn maven_goals(&self) -> Result<String> {
        value_of(self.driver(), &field("_.targets")).await
    }

    // ------------------------------------------------------------------
    // Post-build Actions
    // ------------------------------------------------------------------

    pub async fn post_build_action_options(&self) -> Result<Vec<String>> {
        open_add_menu(self.driver(), "Add post-build action")
            .await?
            .labels()
            .await
    }

    pub async fn add_post_build_action(self, action: PostBuildAction) -> Result<Self> {
        add_from_menu(self.driver(), "Add post-build action", action.label()).await?;
        Ok(self)
    }

    /// Rendered text of the block an added action occupies.
    pub async fn post_build_action_text(&self, action: PostBuildAction) -> Result<String> {
        self.wait5().text(&chunk(action.label())).await
    }

    pub async fn set_projects_to_build(self, projects: &str) -> Result<Self> {
        fill(self.driver(), &field("buildTrigger.childProjects"), projects).await?;
        Ok(self)
    }

    pub async fn set_email_recipients(self, recipients: &str) -> Result<Self> {
        fill(self.driver(), &field("_.recipients"), recipients).await?;
        Ok(self)
    }

    pub async fn email_recipients(&self) -> Result<String> {
        value_of(self.driver(), &field("_.recipients")).await
    }

    /// Name the commit status context by hand instead of after the job.
    pub async fn set_commit_status_context(self, context: &str) -> Result<Self> {
        let source = self.wait5().visible(&field("_.contextSource")).await?;
        SelectElement::new(&source)
            .await?
            .select_by_visible_text("Manually entered context name")
            .await?;
        fill(self.driver(), &field("_.context"), context).await?;
        Ok(self)
    }

    pub async fn commit_status_context(&self) -> Result<String> {
        value_of(self.driver(), &field("_.context")).await
    }
}

impl<K: FolderLike> ConfigPage<K> {
    /// Unfold the "Health metrics" block.
    pub async fn open_health_metrics(self) -> Result<Self> {
        press(self.driver(), &button("Health metrics")).await?;
        Ok(self)
    }

    /// Add the "worst child" metric; unfolds the block first.
    pub async fn add_health_metric(self) -> Result<Self> {
        let page = self.open_health_metrics().await?;
        add_from_menu(page.driver(), "Add metric", WORST_CHILD_METRIC).await?;
        Ok(page)
    }

    pub async fn is_health_metric_displayed(&self) -> bool {
        self.wait2().is_visible(&chunk(WORST_CHILD_METRIC)).await
    }

    pub async fn remove_health_metric(self) -> Result<Self> {
        let remove = Locator::xpath(format!(
            "{}//button[@title='Remove' or contains(@class, 'repeatable-delete')]",
            chunk_xpath(WORST_CHILD_METRIC)
        ));
        press(self.driver(), &remove).await?;
        self.wait2().gone(&chunk(WORST_CHILD_METRIC)).await?;
        Ok(self)
    }
}

impl ConfigPage<MultibranchPipeline> {
    pub async fn branch_source_options(&self) -> Result<Vec<String>> {
        open_add_menu(self.driver(), "Add source").await?.labels().await
    }

    pub async fn toggle_periodic_scan(self) -> Result<Self> {
        press(self.driver(), &checkbox_label("Periodically if not otherwise run")).await?;
        Ok(self)
    }

    pub async fn scan_intervals(&self) -> Result<Vec<String>> {
        select_options(self.driver(), &field("_.interval")).await
    }
}

impl ConfigPage<OrganizationFolder> {
    /// Path of the pipeline script discovered in each repository.
    pub async fn set_script_path(self, path: &str) -> Result<Self> {
        fill(self.driver(), &field("_.scriptPath"), path).await?;
        Ok(self)
    }

    pub async fn script_path(&self) -> Result<String> {
        value_of(self.driver(), &field("_.scriptPath")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_menu_order() {
        let labels: Vec<&str> = ParameterType::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels.first(), Some(&"Boolean Parameter"));
        assert_eq!(labels.last(), Some(&"String Parameter"));
        let mut sorted = labels.clone();
        sorted.sort();
        assert_eq!(labels, sorted, "Jenkins lists parameter types alphabetically");
    }

    #[test]
    fn test_build_step_labels() {
        assert_eq!(BuildStep::Shell.label(), "Execute shell");
        assert_eq!(
            BuildStep::GitHubPendingStatus.label(),
            "Set build status to \"pending\" on GitHub commit"
        );
        assert_eq!(BuildStep::ALL.len(), 7);
    }

    #[test]
    fn test_post_build_actions_start_and_end() {
        assert_eq!(
            PostBuildAction::ALL[0].label(),
            "Aggregate downstream test results"
        );
        assert_eq!(
            PostBuildAction::ALL[PostBuildAction::ALL.len() - 1].label(),
            "Delete workspace when build is done"
        );
    }

    #[test]
    fn test_checkbox_input_follows_its_label() {
        assert_eq!(
            checkbox_input("Throttle builds"),
            Locator::xpath(
                "//label[normalize-space(.)='Throttle builds']/preceding-sibling::input[@type='checkbox']"
            )
        );
    }

    #[test]
    fn test_chunk_quotes_titles_with_apostrophes() {
        assert!(chunk_xpath("Child item's health").contains("\"Child item's health\""));
    }

    #[test]
    fn test_scan_intervals_are_ascending() {
        assert_eq!(SCAN_INTERVALS.len(), 19);
        assert_eq!(SCAN_INTERVALS[0], "1 minute");
        assert_eq!(SCAN_INTERVALS[18], "4 weeks");
        assert_eq!(TimePeriod::Week.label(), "Week");
    }
}
