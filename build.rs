use std::process::Command;
use vergen::EmitBuilder;

fn main() {
    let in_git_checkout = Command::new("git")
        .args(["rev-parse", "--git-dir"])
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false);

    // VERGEN_GIT_SHA is only emitted inside a checkout; the version endpoint
    // reports "unknown" otherwise
    let result = if in_git_checkout {
        EmitBuilder::builder()
            .build_timestamp()
            .git_sha(true)
            .emit()
    } else {
        EmitBuilder::builder().build_timestamp().emit()
    };

    result.expect("Unable to generate build metadata");
}
