// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

/// Join lines into a document with a trailing newline.
#[allow(dead_code)]
pub fn doc(lines: &[&str]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// A well-formed single-file `git format-patch` document.
#[allow(dead_code)]
pub fn sample_patch() -> String {
    doc(&[
        "From 1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b Mon Sep 17 00:00:00 2001",
        "From: Jane Hacker <jane@example.org>",
        "Date: Tue, 4 Jun 2024 09:15:02 +0200",
        "Subject: [PATCH 2/5] frame: tighten validation",
        "",
        "libfoo/ChangeLog:",
        "",
        "\t* frame.c (validate_frame): Reject zero-length frames.",
        "---",
        " libfoo/frame.c | 2 +-",
        " 1 file changed, 1 insertion(+), 1 deletion(-)",
        "",
        "diff --git a/libfoo/frame.c b/libfoo/frame.c",
        "index 8f3c2aa..91d04be 100644",
        "--- a/libfoo/frame.c",
        "+++ b/libfoo/frame.c",
        "@@ -10,7 +10,7 @@ int validate_frame(struct frame *f)",
        " {",
        "-\treturn 1;",
        "+\treturn f->len > 0;",
        " }",
    ])
}

/// A patch whose only change is a 100%-similarity rename (no hunks).
#[allow(dead_code)]
pub fn rename_patch() -> String {
    doc(&[
        "From: Riley Stone <riley@example.org>",
        "Date: Mon, 3 Mar 2025 14:00:00 -0500",
        "Subject: [PATCH] build: move helper script",
        "",
        "scripts/ChangeLog:",
        "",
        "\t* helper.sh: Moved from tools.",
        "---",
        " tools/helper.sh => scripts/helper.sh | 0",
        " 1 file changed, 0 insertions(+), 0 deletions(-)",
        "",
        "diff --git a/tools/helper.sh b/scripts/helper.sh",
        "similarity index 100%",
        "rename from tools/helper.sh",
        "rename to scripts/helper.sh",
    ])
}

/// A patch adding one file and deleting another.
#[allow(dead_code)]
pub fn add_delete_patch() -> String {
    doc(&[
        "From: Riley Stone <riley@example.org>",
        "Date: Mon, 3 Mar 2025 14:00:00 -0500",
        "Subject: [PATCH] config: split out profile handling",
        "",
        "src/ChangeLog:",
        "",
        "\t* profile.c: New file.",
        "\t* legacy.c: Removed.",
        "---",
        " src/legacy.c  | 1 -",
        " src/profile.c | 1 +",
        " 2 files changed, 1 insertion(+), 1 deletion(-)",
        "",
        "diff --git a/src/profile.c b/src/profile.c",
        "new file mode 100644",
        "index 0000000..3b18e51",
        "--- /dev/null",
        "+++ b/src/profile.c",
        "@@ -0,0 +1 @@",
        "+int profile;",
        "diff --git a/src/legacy.c b/src/legacy.c",
        "deleted file mode 100644",
        "index 3b18e51..0000000",
        "--- a/src/legacy.c",
        "+++ /dev/null",
        "@@ -1 +0,0 @@",
        "-int legacy;",
    ])
}

/// An email with a commit message but no diff at all.
#[allow(dead_code)]
pub fn message_only_patch() -> String {
    doc(&[
        "From: Jane Hacker <jane@example.org>",
        "Date: Tue, 4 Jun 2024 09:15:02 +0200",
        "Subject: [PATCH] docs: explain the release cadence",
        "",
        "No code change here, only words.",
    ])
}
