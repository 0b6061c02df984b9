use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("failed to load graph document") {
        if haystack.contains("no such file or directory") || haystack.contains("cannot find") {
            push_hint(&mut out, "Verify the --graph path exists and is readable.");
        } else {
            push_hint(
                &mut out,
                "The graph document must be a JSON object with a `nodes` array.",
            );
        }
    }

    if haystack.contains("parent") && haystack.contains("does not exist") {
        push_hint(
            &mut out,
            "Every `parent` must be the index of another node in the same document.",
        );
    }

    if haystack.contains("failed to load settings") {
        push_hint(
            &mut out,
            "Regenerate a default settings file with `assetspec init --print`.",
        );
    }

    if haystack.contains("invalid settings") {
        push_hint(
            &mut out,
            "`layout.manifest_name` must be a bare file name and `editor_only_tag` must not be empty.",
        );
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}
