//! Administrative HTTP access to Jenkins, used to wipe test data between groups.
//!
//! Everything goes through the same form endpoints the UI posts to, so it
//! works on a stock Jenkins without plugins or an API token.

use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::sync::LazyLock;
use std::time::Duration;
use tracing::{debug, info};

use crate::config::{SuiteConfig, ADMIN_HTTP_TIMEOUT_SECS};
use crate::error::{Result, UiTestError};

static JOB_LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"href="job/([^/"]+)/""#).unwrap());
static VIEW_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href="/view/([^/"]+)/""#).unwrap());
static MY_VIEW_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"my-views/view/([^/"]+)/""#).unwrap());
static USER_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"href="user/([^/"]+)/""#).unwrap());

/// Names captured by `pattern` in `page`, deduplicated, in sorted order.
fn extract(pattern: &Regex, page: &str) -> Vec<String> {
    pattern
        .captures_iter(page)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn job_names(page: &str) -> Vec<String> {
    extract(&JOB_LINK, page)
}

/// Views other than the built-in "all".
pub fn view_names(page: &str) -> Vec<String> {
    extract(&VIEW_LINK, page)
        .into_iter()
        .filter(|v| v != "all")
        .collect()
}

/// Views under a user's "My Views", other than its "all".
pub fn my_view_names(page: &str) -> Vec<String> {
    extract(&MY_VIEW_LINK, page)
        .into_iter()
        .filter(|v| v != "all")
        .collect()
}

/// Users other than `admin`.
pub fn user_names(page: &str, admin: &str) -> Vec<String> {
    extract(&USER_LINK, page)
        .into_iter()
        .filter(|u| !u.eq_ignore_ascii_case(admin))
        .collect()
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Crumb {
    crumb_request_field: String,
    crumb: String,
}

pub struct JenkinsAdmin {
    client: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl JenkinsAdmin {
    pub fn new(config: &SuiteConfig) -> Result<Self> {
        // The crumb is bound to the session cookie it was issued with.
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(ADMIN_HTTP_TIMEOUT_SECS))
            .cookie_store(true)
            .build()?;
        Ok(Self {
            client,
            base_url: config.jenkins_url.clone(),
            username: config.admin_username.clone(),
            password: config.admin_password.clone(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get_page(&self, path: &str) -> Result<String> {
        let resp = self
            .client
            .get(self.url(path))
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(UiTestError::Setup(format!(
                "GET {} returned {}",
                path,
                resp.status()
            )));
        }
        Ok(resp.text().await?)
    }

    async fn crumb(&self) -> Result<Crumb> {
        let resp = self
            .client
            .get(self.url("crumbIssuer/api/json"))
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(UiTestError::Setup(format!(
                "crumb issuer returned {}",
                resp.status()
            )));
        }
        Ok(resp.json().await?)
    }

    /// POST a form with a fresh CSRF crumb. Redirects count as success.
    async fn post_form(&self, path: &str, fields: &[(&str, &str)]) -> Result<()> {
        let crumb = self.crumb().await?;
        let mut form: Vec<(&str, &str)> = fields.to_vec();
        form.push((crumb.crumb_request_field.as_str(), crumb.crumb.as_str()));

        let resp = self
            .client
            .post(self.url(path))
            .basic_auth(&self.username, Some(&self.password))
            .form(&form)
            .send()
            .await?;
        let status = resp.status();
        if status.is_success() || status.is_redirection() {
            debug!("POST {} -> {}", path, status);
            Ok(())
        } else {
            Err(UiTestError::Setup(format!("POST {} returned {}", path, status)))
        }
    }

    pub async fn delete_jobs(&self) -> Result<usize> {
        let jobs = job_names(&self.get_page("").await?);
        for job in &jobs {
            self.post_form(&format!("job/{}/doDelete", job), &[]).await?;
        }
        Ok(jobs.len())
    }

    /// Global views plus the admin's own "My Views".
    pub async fn delete_views(&self) -> Result<usize> {
        let global = view_names(&self.get_page("").await?);
        for view in &global {
            self.post_form(&format!("view/{}/doDelete", view), &[]).await?;
        }

        let my_views_path = format!("user/{}/my-views/", self.username.to_lowercase());
        let own = my_view_names(&self.get_page(&my_views_path).await.unwrap_or_default());
        for view in &own {
            self.post_form(&format!("{}view/{}/doDelete", my_views_path, view), &[])
                .await?;
        }
        Ok(global.len() + own.len())
    }

    pub async fn delete_users(&self) -> Result<usize> {
        let users = user_names(
            &self.get_page("manage/securityRealm/").await?,
            &self.username,
        );
        for user in &users {
            self.post_form(&format!("securityRealm/user/{}/doDelete", user), &[])
                .await?;
        }
        Ok(users.len())
    }

    pub async fn clear_description(&self) -> Result<()> {
        self.post_form("submitDescription", &[("description", "")])
            .await
    }

    /// Bring Jenkins back to an empty install. Safe to call repeatedly.
    pub async fn reset(&self) -> Result<()> {
        let jobs = self.delete_jobs().await?;
        let views = self.delete_views().await?;
        let users = self.delete_users().await?;
        self.clear_description().await?;
        info!(
            "Reset Jenkins: {} jobs, {} views, {} users removed",
            jobs, views, users
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DASHBOARD: &str = r#"
        <a href="job/alpha/" class="jenkins-table__link">alpha</a>
        <a href="job/alpha/" class="jenkins-menu-dropdown-chevron"></a>
        <a href="job/Build%20Me/">Build Me</a>
        <a href="job/alpha/build?delay=0sec">build</a>
        <a href="/view/all/">All</a>
        <a href="/view/Team/">Team</a>
    "#;

    #[test]
    fn test_job_names_are_unique_and_sorted() {
        assert_eq!(job_names(DASHBOARD), vec!["Build%20Me", "alpha"]);
    }

    #[test]
    fn test_view_names_skip_all() {
        assert_eq!(view_names(DASHBOARD), vec!["Team"]);
    }

    #[test]
    fn test_my_view_names() {
        let page = r#"<a href="/user/admin/my-views/view/all/">All</a>
            <a href="/user/admin/my-views/view/Mine/">Mine</a>"#;
        assert_eq!(my_view_names(page), vec!["Mine"]);
        assert!(view_names(page).is_empty());
    }

    #[test]
    fn test_user_names_skip_admin() {
        let page = r#"<a href="user/admin/">admin</a><a href="user/bob/">bob</a><a href="user/Admin/">x</a>"#;
        assert_eq!(user_names(page, "admin"), vec!["bob"]);
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let config = SuiteConfig {
            jenkins_url: "http://localhost:8080".into(),
            admin_username: "admin".into(),
            admin_password: "admin".into(),
            browser: "chrome".into(),
            webdriver_url: "http://localhost:9515".into(),
            headless: true,
            reports_dir: "target".into(),
            server_run: false,
            classes: Vec::new(),
        };
        let admin = JenkinsAdmin::new(&config).unwrap();
        assert_eq!(admin.url("/crumbIssuer/api/json"), "http://localhost:8080/crumbIssuer/api/json");
        assert_eq!(admin.url("job/a/doDelete"), "http://localhost:8080/job/a/doDelete");
    }
}
