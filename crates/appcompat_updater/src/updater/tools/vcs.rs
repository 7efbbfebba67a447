use crate::updater::tools::runner::ToolCommand;
use crate::updater::utils::config::ToolPaths;

pub const BRANCH_PREFIX: &str = "update-";

pub fn branch_name(build: Option<&str>) -> String {
    let build = build.filter(|build| !build.is_empty()).unwrap_or("latest");
    format!("{BRANCH_PREFIX}{build}")
}

pub fn repo_start(tools: &ToolPaths, branch_name: &str) -> ToolCommand {
    ToolCommand::new(&tools.repo).args(["start", branch_name, "."])
}

/// `git rm` that tolerates paths git doesn't know about.
pub fn git_rm<'a>(tools: &ToolPaths, paths: impl IntoIterator<Item = &'a str>) -> ToolCommand {
    ToolCommand::new(&tools.git)
        .args(["rm", "-rf", "--ignore-unmatch"])
        .args(paths)
}

/// Catches whatever `git rm` leaves behind, e.g. directories holding untracked files.
pub fn rm_rf<'a>(tools: &ToolPaths, paths: impl IntoIterator<Item = &'a str>) -> ToolCommand {
    ToolCommand::new(&tools.rm).arg("-rf").args(paths)
}

pub fn git_add<'a>(tools: &ToolPaths, paths: impl IntoIterator<Item = &'a str>) -> ToolCommand {
    ToolCommand::new(&tools.git).arg("add").args(paths)
}

pub fn git_commit(tools: &ToolPaths, message: &str) -> ToolCommand {
    ToolCommand::new(&tools.git).args(["commit", "-m", message])
}

pub fn commit_message(branch: &str, build: &str) -> String {
    format!("Update appcompat prebuilts to build {build}.\n\nTaken from branch {branch}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_name_uses_build() {
        assert_eq!(branch_name(Some("12345")), "update-12345");
    }

    #[test]
    fn branch_name_falls_back_to_latest() {
        assert_eq!(branch_name(Some("")), "update-latest");
        assert_eq!(branch_name(None), "update-latest");
    }

    #[test]
    fn repo_start_targets_current_project() {
        let cmd = repo_start(&ToolPaths::default(), "update-1");
        assert_eq!(cmd.to_string(), "repo start update-1 .");
    }

    #[test]
    fn removal_commands_share_paths() {
        let tools = ToolPaths::default();
        let paths = ["veridex", "appcompat.sh"];

        assert_eq!(
            git_rm(&tools, paths).to_string(),
            "git rm -rf --ignore-unmatch veridex appcompat.sh"
        );
        assert_eq!(rm_rf(&tools, paths).to_string(), "rm -rf veridex appcompat.sh");
    }

    #[test]
    fn commit_message_names_build_and_branch() {
        let message = commit_message("my-branch", "500");
        let lines: Vec<_> = message.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Update appcompat prebuilts to build 500.",
                "",
                "Taken from branch my-branch.",
            ]
        );
    }

    #[test]
    fn commit_message_is_a_single_argument() {
        let cmd = git_commit(&ToolPaths::default(), &commit_message("b", "1"));
        assert_eq!(cmd.args.len(), 3);
        assert_eq!(cmd.args[..2], ["commit", "-m"]);
    }
}
