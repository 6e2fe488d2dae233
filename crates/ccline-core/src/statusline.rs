//! Status line assembly — wires descriptor, transcript, git and formatter.

use std::path::Path;

use tracing::debug;

use crate::git::{GitProbe, GitStatusSummary};
use crate::render::StatusLine;
use crate::session::{
    project_name, ModelFamily, SessionDescriptor, DEFAULT_CONTEXT_WINDOW_SIZE,
};
use crate::transcript::last_usage;
use crate::usage::{estimate_context, ContextConfig};

/// Gather every fact for one render.
///
/// `process_cwd` is the last-resort project directory when the descriptor
/// names none.
pub async fn collect_status_line<G: GitProbe>(
    descriptor: Option<&SessionDescriptor>,
    git: &G,
    config: &ContextConfig,
    process_cwd: &Path,
) -> StatusLine {
    let model = ModelFamily::classify(descriptor.and_then(|d| d.model_id()));
    let project = project_name(descriptor, process_cwd);

    let usage = descriptor
        .and_then(|d| d.transcript_path())
        .and_then(last_usage);
    let window_size = descriptor
        .map(|d| d.window_size())
        .unwrap_or(DEFAULT_CONTEXT_WINDOW_SIZE);
    let context = estimate_context(usage.as_ref(), window_size, config);

    let (branch, status) = tokio::join!(git.current_branch(), git.porcelain_status());
    let git_status = GitStatusSummary::from_porcelain(&status);

    debug!(
        model = %model,
        branch = %branch,
        context = ?context,
        "Collected status line facts"
    );

    StatusLine {
        model,
        branch: Some(branch).filter(|b| !b.is_empty()),
        git_status,
        project,
        context,
        cost_usd: descriptor.and_then(|d| d.total_cost_usd()),
    }
}

/// Render the status line text for one invocation
pub async fn render_status_line<G: GitProbe>(
    descriptor: Option<&SessionDescriptor>,
    git: &G,
    config: &ContextConfig,
    process_cwd: &Path,
) -> String {
    collect_status_line(descriptor, git, config, process_cwd)
        .await
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    /// Fixed git answers for rendering tests
    struct FakeGit {
        branch: &'static str,
        status: &'static str,
    }

    impl FakeGit {
        fn outside_repo() -> Self {
            Self {
                branch: "",
                status: "",
            }
        }
    }

    impl GitProbe for FakeGit {
        async fn current_branch(&self) -> String {
            self.branch.to_string()
        }

        async fn porcelain_status(&self) -> String {
            self.status.to_string()
        }
    }

    fn transcript(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file
    }

    fn descriptor_json(value: serde_json::Value) -> SessionDescriptor {
        SessionDescriptor::parse(&value.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_haiku_without_transcript_or_repo() {
        let descriptor =
            SessionDescriptor::parse(r#"{"model":{"id":"claude-haiku"},"cost":{"total_cost_usd":1.234}}"#)
                .unwrap();

        let line = render_status_line(
            Some(&descriptor),
            &FakeGit::outside_repo(),
            &ContextConfig::default(),
            Path::new("/home/user/myproj"),
        )
        .await;

        assert_eq!(line, "🟢 haiku │ 📁 myproj │ 💰 $1.23");
    }

    #[tokio::test]
    async fn test_no_descriptor_uses_defaults() {
        let line = render_status_line(
            None,
            &FakeGit::outside_repo(),
            &ContextConfig::default(),
            Path::new("/work/fallback"),
        )
        .await;

        assert_eq!(line, "🟣 opus │ 📁 fallback │ 💰 $0.00");
    }

    #[tokio::test]
    async fn test_full_render_with_transcript_and_git() {
        let file = transcript(&[
            r#"{"message":{"usage":{"input_tokens":10,"cache_read_input_tokens":10}}}"#,
            "garbage",
            r#"{"message":{"usage":{"input_tokens":2000,"cache_read_input_tokens":50000,"cache_creation_input_tokens":300,"output_tokens":900}}}"#,
        ]);
        let descriptor = descriptor_json(serde_json::json!({
            "model": {"id": "claude-opus-4-1"},
            "transcript_path": file.path(),
            "workspace": {"project_dir": "/home/user/ccline"},
            "cost": {"total_cost_usd": 3.0},
        }));
        let git = FakeGit {
            branch: "main",
            status: "M  a.txt\n?? b.txt\n M c.txt",
        };

        let line = render_status_line(
            Some(&descriptor),
            &git,
            &ContextConfig::default(),
            Path::new("/"),
        )
        .await;

        assert_eq!(
            line,
            "🟣 opus │ ⎇ main [●1 ~2 +1] │ 📁 ccline │ 📐 44% │ 📊 88.2k │ 💰 $3.00"
        );
    }

    #[tokio::test]
    async fn test_empty_transcript_hides_context_segments() {
        let file = transcript(&[]);
        let descriptor = descriptor_json(serde_json::json!({
            "transcript_path": file.path(),
            "cwd": "/srv/app",
        }));

        let status = collect_status_line(
            Some(&descriptor),
            &FakeGit::outside_repo(),
            &ContextConfig::default(),
            Path::new("/"),
        )
        .await;

        assert_eq!(status.context, None);
        let line = status.to_string();
        assert!(!line.contains("📐"));
        assert!(!line.contains("0%"));
    }

    #[tokio::test]
    async fn test_window_size_and_autocompact_setting_are_used() {
        let file = transcript(&[r#"{"message":{"usage":{"input_tokens":100000}}}"#]);
        let descriptor = descriptor_json(serde_json::json!({
            "transcript_path": file.path(),
            "context_window": {"context_window_size": 1_000_000},
        }));

        let status = collect_status_line(
            Some(&descriptor),
            &FakeGit::outside_repo(),
            &ContextConfig::without_autocompact(),
            Path::new("/srv/app"),
        )
        .await;

        let context = status.context.unwrap();
        assert_eq!(context.used_percent, 10);
        assert_eq!(context.display_tokens, "100.0k");
    }

    #[tokio::test]
    async fn test_detached_head_omits_branch_but_keeps_project() {
        let git = FakeGit {
            branch: "",
            status: " M dirty.rs",
        };

        let status =
            collect_status_line(None, &git, &ContextConfig::default(), Path::new("/srv/app")).await;

        assert_eq!(status.branch, None);
        assert_eq!(status.to_string(), "🟣 opus │ 📁 app │ 💰 $0.00");
    }
}
