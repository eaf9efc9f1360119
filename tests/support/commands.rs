//! Command helper methods for Test.

use super::fixtures::{ACCESS_TOKEN, NAMESPACE, RESOURCE_GROUP, RULE, SUBSCRIPTION_ID};
use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a hubkeys command with no credentials in its environment.
    ///
    /// HOME points at the temporary home directory and every `HUBKEYS_*`
    /// variable inherited from the developer's shell is removed.
    pub fn bare_cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("hubkeys").expect("failed to find hubkeys binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        for var in [
            "HUBKEYS_CONTEXT",
            "HUBKEYS_SUBSCRIPTION_ID",
            "HUBKEYS_ACCESS_TOKEN",
            "HUBKEYS_ENDPOINT",
            "HUBKEYS_LOG",
            "HUBKEYS_LOG_FORMAT",
        ] {
            cmd.env_remove(var);
        }
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Create a hubkeys command with a complete context aimed at the mock server.
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.env("HUBKEYS_SUBSCRIPTION_ID", SUBSCRIPTION_ID);
        cmd.env("HUBKEYS_ACCESS_TOKEN", ACCESS_TOKEN);
        cmd.env("HUBKEYS_ENDPOINT", self.server.url());
        cmd
    }

    /// Shortcut for `hubkeys regenerate-namespace-keys` against the default rule.
    pub fn regenerate(&self, selector: &str) -> Output {
        self.cmd()
            .args([
                "regenerate-namespace-keys",
                "--resource-group",
                RESOURCE_GROUP,
                "--namespace-name",
                NAMESPACE,
                "--authorization-rule",
                RULE,
                "--regenerate-keys",
                selector,
            ])
            .output()
            .expect("failed to run hubkeys regenerate-namespace-keys")
    }

    /// Shortcut for `hubkeys list-namespace-keys` against the default rule.
    pub fn list_keys(&self) -> Output {
        self.cmd()
            .args([
                "list-namespace-keys",
                "--resource-group",
                RESOURCE_GROUP,
                "--namespace-name",
                NAMESPACE,
                "--authorization-rule",
                RULE,
            ])
            .output()
            .expect("failed to run hubkeys list-namespace-keys")
    }

    /// Run a subcommand with the default namespace arguments appended.
    pub fn on_namespace(&self, subcommand: &str, extra: &[&str]) -> Output {
        self.cmd()
            .arg(subcommand)
            .args(["--resource-group", RESOURCE_GROUP, "--namespace-name", NAMESPACE])
            .args(extra)
            .output()
            .unwrap_or_else(|e| panic!("failed to run hubkeys {}: {}", subcommand, e))
    }
}
